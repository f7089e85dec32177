use crate::core::category_window::CategoryWindow;
use crate::core::directory_filter::DirectoryFilter;
use crate::domain::model::{Catalog, FilterMode, Practitioner, PractitionerCard, QueryState};
use crate::domain::ports::CatalogSource;

/// UI events consumed by the directory, one per state mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryEvent {
    ShiftLeft,
    ShiftRight,
    SearchTextChanged(String),
    FilterModeChanged(FilterMode),
    PlaceSelectionChanged(Option<String>),
    CategorySelected(Option<String>),
}

/// Owns the category strip and the filter, and caches the derived list
/// between query changes.
#[derive(Debug, Clone)]
pub struct DirectorySession {
    window: CategoryWindow,
    filter: DirectoryFilter,
    cached: Option<Vec<usize>>,
    recomputations: usize,
}

impl DirectorySession {
    pub fn new(window: CategoryWindow, filter: DirectoryFilter) -> Self {
        Self {
            window,
            filter,
            cached: None,
            recomputations: 0,
        }
    }

    pub fn from_source<S: CatalogSource + ?Sized>(source: &S) -> Self {
        let window =
            CategoryWindow::with_window_size(source.categories().to_vec(), source.window_size());
        let filter = DirectoryFilter::new(Catalog::new(source.practitioners().to_vec()));
        Self::new(window, filter)
    }

    pub fn with_query(mut self, query: QueryState) -> Self {
        self.filter = DirectoryFilter::with_query(self.filter.catalog().clone(), query);
        self.cached = None;
        self
    }

    /// Applies one event. Returns `true` if any state changed.
    pub fn apply(&mut self, event: DirectoryEvent) -> bool {
        tracing::debug!("Handling event: {:?}", event);

        let query_changed = match event {
            DirectoryEvent::ShiftLeft => return self.window.shift_left(),
            DirectoryEvent::ShiftRight => return self.window.shift_right(),
            DirectoryEvent::SearchTextChanged(text) => self.filter.set_search_text(text),
            DirectoryEvent::FilterModeChanged(mode) => self.filter.set_filter_mode(mode),
            DirectoryEvent::PlaceSelectionChanged(place) => self.filter.set_place_selection(place),
            DirectoryEvent::CategorySelected(category) => self.filter.select_category(category),
        };

        if query_changed {
            self.cached = None;
        }
        query_changed
    }

    pub fn apply_all<I>(&mut self, events: I) -> usize
    where
        I: IntoIterator<Item = DirectoryEvent>,
    {
        events
            .into_iter()
            .map(|event| self.apply(event))
            .filter(|changed| *changed)
            .count()
    }

    /// Derived practitioner list for the current query.
    pub fn results(&mut self) -> Vec<&Practitioner> {
        if self.cached.is_none() {
            let indices = self.filter.matching_indices();
            self.recomputations += 1;
            tracing::debug!(
                "Recomputed directory results: {} of {} practitioners",
                indices.len(),
                self.filter.catalog().len()
            );
            self.cached = Some(indices);
        }

        let catalog = self.filter.catalog();
        self.cached
            .iter()
            .flatten()
            .map(|&i| &catalog[i])
            .collect()
    }

    pub fn cards(&mut self) -> Vec<PractitionerCard> {
        self.results().into_iter().map(PractitionerCard::from).collect()
    }

    pub fn visible_window(&self) -> &[String] {
        self.window.visible_window()
    }

    pub fn window(&self) -> &CategoryWindow {
        &self.window
    }

    pub fn query(&self) -> &QueryState {
        self.filter.query()
    }

    pub fn available_places(&self) -> &[String] {
        self.filter.available_places()
    }

    /// How many times the derived list has been rebuilt.
    pub fn recompute_count(&self) -> usize {
        self.recomputations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> DirectorySession {
        let practitioners = ["Ann", "Bob", "Cid"]
            .iter()
            .enumerate()
            .map(|(i, name)| Practitioner {
                name: name.to_string(),
                specialty: (if i == 1 { "Dentist" } else { "Orthopedic" }).to_string(),
                experience_label: format!("{}y", i),
                experience_years: Some(i as f64),
                rating_label: "1k".to_string(),
                is_available: i != 2,
                image_url: String::new(),
                location: Some(format!("City {}", i)),
            })
            .collect();
        let categories = vec!["Dentist".to_string(), "Orthopedic".to_string()];

        DirectorySession::new(
            CategoryWindow::new(categories),
            DirectoryFilter::new(Catalog::new(practitioners)),
        )
    }

    #[test]
    fn test_results_are_cached_until_query_changes() {
        let mut session = session();
        assert_eq!(session.results().len(), 3);
        assert_eq!(session.results().len(), 3);
        assert_eq!(session.recompute_count(), 1);

        assert!(session.apply(DirectoryEvent::SearchTextChanged("ann".to_string())));
        assert_eq!(session.results().len(), 1);
        assert_eq!(session.recompute_count(), 2);

        // 相同的值不會觸發重新計算
        assert!(!session.apply(DirectoryEvent::SearchTextChanged("ann".to_string())));
        session.results();
        assert_eq!(session.recompute_count(), 2);
    }

    #[test]
    fn test_window_events_do_not_invalidate_results() {
        let mut session = session();
        session.results();
        // only two categories, so the strip cannot move
        assert!(!session.apply(DirectoryEvent::ShiftRight));
        assert!(!session.apply(DirectoryEvent::ShiftLeft));
        session.results();
        assert_eq!(session.recompute_count(), 1);
    }

    #[test]
    fn test_apply_all_counts_effective_events() {
        let mut session = session();
        let changed = session.apply_all(vec![
            DirectoryEvent::FilterModeChanged(FilterMode::ByExperience),
            DirectoryEvent::FilterModeChanged(FilterMode::ByExperience),
            DirectoryEvent::CategorySelected(Some("Orthopedic".to_string())),
        ]);
        assert_eq!(changed, 2);

        let names: Vec<_> = session.results().iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, vec!["Cid", "Ann"]);
    }

    #[test]
    fn test_cards_follow_results() {
        let mut session = session();
        session.apply(DirectoryEvent::FilterModeChanged(FilterMode::ByAvailability));
        let cards = session.cards();
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|card| card.availability == "Available"));
    }
}
