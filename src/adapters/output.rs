use crate::core::category_window::CategoryWindow;
use crate::domain::model::PractitionerCard;
use crate::utils::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

const TABLE_HEADERS: [&str; 6] = [
    "Name",
    "Specialty",
    "Experience",
    "Rating",
    "Availability",
    "Location",
];

pub fn render_cards(cards: &[PractitionerCard], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(cards)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(cards)?),
        OutputFormat::Csv => render_csv(cards),
    }
}

/// One-line category strip; arrows only appear where the strip can scroll.
pub fn render_window(window: &CategoryWindow, selected: Option<&str>) -> String {
    let labels: Vec<String> = window
        .visible_window()
        .iter()
        .map(|label| {
            if Some(label.as_str()) == selected {
                format!("[{}]", label)
            } else {
                label.clone()
            }
        })
        .collect();

    let left = if window.can_shift_left() { "◀" } else { " " };
    let right = if window.can_shift_right() { "▶" } else { " " };

    format!("{} {} {}", left, labels.join(" | "), right)
}

fn render_table(cards: &[PractitionerCard]) -> String {
    if cards.is_empty() {
        return "No practitioners match the current filters.".to_string();
    }

    let rows: Vec<[&str; 6]> = cards
        .iter()
        .map(|card| {
            [
                card.name.as_str(),
                card.specialty.as_str(),
                card.experience.as_str(),
                card.rating.as_str(),
                card.availability.as_str(),
                card.location.as_str(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[&str; 6]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&TABLE_HEADERS));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(rows.iter().map(format_row));

    lines.join("\n")
}

fn render_csv(cards: &[PractitionerCard]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for card in cards {
        writer.serialize(card)?;
    }
    writer.flush()?;

    let bytes = writer
        .into_inner()
        .map_err(|e| DirectoryError::IoError(e.into_error()))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
