use crate::domain::model::Practitioner;

/// Number of category labels visible at once in the category strip.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Startup supplier of the catalog and category strip.
pub trait CatalogSource {
    fn practitioners(&self) -> &[Practitioner];
    fn categories(&self) -> &[String];

    fn window_size(&self) -> usize {
        DEFAULT_WINDOW_SIZE
    }
}
