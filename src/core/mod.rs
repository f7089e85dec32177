pub mod category_window;
pub mod directory_filter;
pub mod session;

pub use crate::domain::model::{Catalog, FilterMode, Practitioner, PractitionerCard, QueryState};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::Result;
