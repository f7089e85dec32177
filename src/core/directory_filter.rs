use crate::domain::model::{Catalog, FilterMode, Practitioner, QueryState};
use std::collections::HashSet;

/// Derives the displayed practitioner list from the catalog and the current query.
#[derive(Debug, Clone)]
pub struct DirectoryFilter {
    catalog: Catalog,
    places: Vec<String>,
    query: QueryState,
}

impl DirectoryFilter {
    pub fn new(catalog: Catalog) -> Self {
        let places = distinct_places(&catalog);
        tracing::debug!(
            "Directory filter ready: {} practitioners, {} places",
            catalog.len(),
            places.len()
        );

        Self {
            catalog,
            places,
            query: QueryState::default(),
        }
    }

    pub fn with_query(catalog: Catalog, query: QueryState) -> Self {
        let mut filter = Self::new(catalog);
        filter.query = query;
        filter
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Distinct non-empty locations of the whole catalog, in first-occurrence order.
    pub fn available_places(&self) -> &[String] {
        &self.places
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        replace_if_changed(&mut self.query.search_text, text.into())
    }

    pub fn select_category(&mut self, category: Option<String>) -> bool {
        replace_if_changed(&mut self.query.selected_category, category)
    }

    pub fn set_filter_mode(&mut self, mode: FilterMode) -> bool {
        replace_if_changed(&mut self.query.filter_mode, mode)
    }

    pub fn set_place_selection(&mut self, place: Option<String>) -> bool {
        replace_if_changed(&mut self.query.place_selection, place)
    }

    /// Catalog positions of the derived list, in display order.
    pub fn matching_indices(&self) -> Vec<usize> {
        matching_indices(&self.catalog, &self.query)
    }

    pub fn results(&self) -> Vec<&Practitioner> {
        self.matching_indices()
            .into_iter()
            .map(|i| &self.catalog[i])
            .collect()
    }
}

/// Runs the query pipeline over `practitioners`.
pub fn apply_query<'a>(
    practitioners: &'a [Practitioner],
    query: &QueryState,
) -> Vec<&'a Practitioner> {
    matching_indices(practitioners, query)
        .into_iter()
        .map(|i| &practitioners[i])
        .collect()
}

// 順序固定：文字 -> 分類 -> 模式，後一階段只處理前一階段的輸出
fn matching_indices(practitioners: &[Practitioner], query: &QueryState) -> Vec<usize> {
    let needle = query.search_text.trim().to_lowercase();

    let mut indices: Vec<usize> = practitioners
        .iter()
        .enumerate()
        .filter(|(_, p)| needle.is_empty() || matches_text(p, &needle))
        .filter(|(_, p)| {
            query
                .selected_category
                .as_ref()
                .map_or(true, |category| &p.specialty == category)
        })
        .map(|(i, _)| i)
        .collect();

    match query.filter_mode {
        FilterMode::All => {}
        FilterMode::ByAvailability => indices.retain(|&i| practitioners[i].is_available),
        FilterMode::ByPlace => {
            // 尚未選擇地點時不縮小範圍
            if let Some(place) = &query.place_selection {
                indices.retain(|&i| practitioners[i].location.as_ref() == Some(place));
            }
        }
        FilterMode::ByExperience => {
            // sort_by 為穩定排序，同年資保留前一階段的順序
            indices.sort_by(|&a, &b| {
                practitioners[b]
                    .experience_rank()
                    .total_cmp(&practitioners[a].experience_rank())
            });
        }
    }

    tracing::trace!(
        "Query {:?} matched {} of {} practitioners",
        query,
        indices.len(),
        practitioners.len()
    );

    indices
}

fn matches_text(practitioner: &Practitioner, needle: &str) -> bool {
    practitioner.name.to_lowercase().contains(needle)
        || practitioner.specialty.to_lowercase().contains(needle)
        || practitioner
            .location
            .as_ref()
            .is_some_and(|place| place.to_lowercase().contains(needle))
}

fn distinct_places(practitioners: &[Practitioner]) -> Vec<String> {
    let mut seen = HashSet::new();
    practitioners
        .iter()
        .filter_map(Practitioner::place)
        .filter(|place| seen.insert(*place))
        .map(str::to_string)
        .collect()
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn practitioner(
        name: &str,
        specialty: &str,
        years: Option<f64>,
        available: bool,
        location: Option<&str>,
    ) -> Practitioner {
        Practitioner {
            name: name.to_string(),
            specialty: specialty.to_string(),
            experience_label: years.map(|y| format!("{}y", y)).unwrap_or_default(),
            experience_years: years,
            rating_label: "10k".to_string(),
            is_available: available,
            image_url: String::new(),
            location: location.map(str::to_string),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            practitioner("Ann Lake", "Dentist", Some(3.0), true, Some("North")),
            practitioner("Bob Stone", "Cardiologist", None, false, None),
            practitioner("Cid Marsh", "Cardiologist", Some(3.0), true, Some("South")),
            practitioner("Dee North", "Neurologist", Some(12.5), false, Some("")),
            practitioner("Eve Field", "Cardiologist", Some(8.0), true, Some("North")),
        ])
    }

    fn names(list: &[&Practitioner]) -> Vec<String> {
        list.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_default_query_returns_catalog_in_order() {
        let filter = DirectoryFilter::new(catalog());
        assert_eq!(filter.matching_indices(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_search_matches_name_specialty_and_location() {
        let mut filter = DirectoryFilter::new(catalog());

        filter.set_search_text("  NORTH ");
        // location "North" for Ann and Eve, name "Dee North"
        assert_eq!(
            names(&filter.results()),
            vec!["Ann Lake", "Dee North", "Eve Field"]
        );

        filter.set_search_text("cardio");
        assert_eq!(filter.matching_indices(), vec![1, 2, 4]);
    }

    #[test]
    fn test_whitespace_search_keeps_everything() {
        let mut filter = DirectoryFilter::new(catalog());
        filter.set_search_text("   ");
        assert_eq!(filter.results().len(), 5);
    }

    #[test]
    fn test_category_is_exact_and_case_sensitive() {
        let mut filter = DirectoryFilter::new(catalog());
        filter.select_category(Some("Cardiologist".to_string()));
        assert_eq!(filter.matching_indices(), vec![1, 2, 4]);

        filter.select_category(Some("cardiologist".to_string()));
        assert!(filter.results().is_empty());
    }

    #[test]
    fn test_category_and_mode_combine() {
        let mut filter = DirectoryFilter::new(catalog());
        filter.select_category(Some("Cardiologist".to_string()));
        filter.set_filter_mode(FilterMode::ByAvailability);
        assert_eq!(names(&filter.results()), vec!["Cid Marsh", "Eve Field"]);
    }

    #[test]
    fn test_by_place_without_selection_passes_through() {
        let mut filter = DirectoryFilter::new(catalog());
        filter.set_filter_mode(FilterMode::ByPlace);
        assert_eq!(filter.results().len(), 5);

        filter.set_place_selection(Some("North".to_string()));
        assert_eq!(names(&filter.results()), vec!["Ann Lake", "Eve Field"]);
    }

    #[test]
    fn test_place_selection_ignored_outside_place_mode() {
        let mut filter = DirectoryFilter::new(catalog());
        filter.set_place_selection(Some("South".to_string()));
        assert_eq!(filter.results().len(), 5);
    }

    #[test]
    fn test_experience_sort_is_descending_and_stable() {
        let mut filter = DirectoryFilter::new(catalog());
        filter.set_filter_mode(FilterMode::ByExperience);
        // Ann and Cid tie at 3 years, Bob has no value and ranks as 0
        assert_eq!(filter.matching_indices(), vec![3, 4, 0, 2, 1]);
    }

    #[test]
    fn test_negative_zero_and_missing_years_keep_catalog_order() {
        let practitioners = vec![
            practitioner("Neg Zero", "Dentist", Some(-0.0), true, None),
            practitioner("No Years", "Dentist", None, true, None),
            practitioner("Pos Zero", "Dentist", Some(0.0), true, None),
        ];
        let query = QueryState {
            filter_mode: FilterMode::ByExperience,
            ..Default::default()
        };
        assert_eq!(
            names(&apply_query(&practitioners, &query)),
            vec!["Neg Zero", "No Years", "Pos Zero"]
        );
    }

    #[test]
    fn test_available_places_are_distinct_and_non_empty() {
        let filter = DirectoryFilter::new(catalog());
        assert_eq!(filter.available_places(), &["North", "South"]);
    }

    #[test]
    fn test_setters_report_changes() {
        let mut filter = DirectoryFilter::new(catalog());
        assert!(filter.set_search_text("ann"));
        assert!(!filter.set_search_text("ann"));
        assert!(filter.set_filter_mode(FilterMode::ByPlace));
        assert!(!filter.set_filter_mode(FilterMode::ByPlace));
        assert!(!filter.select_category(None));
        assert!(filter.set_place_selection(Some("North".to_string())));
    }

    #[test]
    fn test_apply_query_on_plain_slice() {
        let practitioners = catalog().to_vec();
        let query = QueryState {
            search_text: "eve".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&apply_query(&practitioners, &query)), vec!["Eve Field"]);
    }
}
