pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::output::OutputFormat;
#[cfg(feature = "cli")]
use crate::core::session::DirectoryEvent;
#[cfg(feature = "cli")]
use crate::domain::model::FilterMode;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "practitioner-directory")]
#[command(about = "Browse a practitioner directory with search and filters")]
pub struct CliConfig {
    /// Path to a TOML catalog (defaults to the built-in sample)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Free-text search over name, specialty and location
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact specialty to filter by ("none" clears it)
    #[arg(long)]
    pub category: Option<String>,

    #[arg(short, long, value_enum)]
    pub mode: Option<FilterMode>,

    /// Place to narrow to when --mode place is active
    #[arg(short, long)]
    pub place: Option<String>,

    /// Scroll the category strip right this many steps
    #[arg(long, default_value = "0")]
    pub shift_right: usize,

    /// Scroll the category strip left this many steps (applied after --shift-right)
    #[arg(long, default_value = "0")]
    pub shift_left: usize,

    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Print the selectable places and exit
    #[arg(long)]
    pub list_places: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 把命令列參數轉成 UI 事件，依序套用
    pub fn events(&self) -> Vec<DirectoryEvent> {
        let mut events = Vec::new();

        if let Some(search) = &self.search {
            events.push(DirectoryEvent::SearchTextChanged(search.clone()));
        }
        if let Some(category) = &self.category {
            let selection = Some(category.trim())
                .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("none"))
                .map(str::to_string);
            events.push(DirectoryEvent::CategorySelected(selection));
        }
        if let Some(mode) = self.mode {
            events.push(DirectoryEvent::FilterModeChanged(mode));
        }
        if let Some(place) = &self.place {
            let selection = Some(place.clone()).filter(|p| !p.is_empty());
            events.push(DirectoryEvent::PlaceSelectionChanged(selection));
        }

        events.extend(std::iter::repeat(DirectoryEvent::ShiftRight).take(self.shift_right));
        events.extend(std::iter::repeat(DirectoryEvent::ShiftLeft).take(self.shift_left));

        events
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog {
            validation::validate_non_empty_string("catalog", &path.to_string_lossy())?;
        }

        if self.place.is_some() && self.mode.is_some_and(|m| m != FilterMode::ByPlace) {
            tracing::warn!("⚠️ --place only takes effect with --mode place");
        }

        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_events_follow_flag_order() {
        let config = CliConfig::parse_from([
            "practitioner-directory",
            "--search",
            "cardio",
            "--mode",
            "place",
            "--place",
            "City A",
            "--shift-right",
            "2",
            "--shift-left",
            "1",
        ]);

        assert_eq!(
            config.events(),
            vec![
                DirectoryEvent::SearchTextChanged("cardio".to_string()),
                DirectoryEvent::FilterModeChanged(FilterMode::ByPlace),
                DirectoryEvent::PlaceSelectionChanged(Some("City A".to_string())),
                DirectoryEvent::ShiftRight,
                DirectoryEvent::ShiftRight,
                DirectoryEvent::ShiftLeft,
            ]
        );
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_category_none_clears_selection() {
        let config =
            CliConfig::parse_from(["practitioner-directory", "--category", "none"]);
        assert_eq!(config.events(), vec![DirectoryEvent::CategorySelected(None)]);
    }

    #[test]
    fn test_mode_names_match_selector_values() {
        for (name, mode) in [
            ("all", FilterMode::All),
            ("availability", FilterMode::ByAvailability),
            ("experience", FilterMode::ByExperience),
        ] {
            let config = CliConfig::parse_from(["practitioner-directory", "--mode", name]);
            assert_eq!(config.mode, Some(mode));
        }
    }
}
