pub mod catalog;
pub mod pipeline;
pub mod rapidapi;
pub mod traits;
pub mod types;
pub mod zillow;

pub use catalog::CatalogSource;
pub use pipeline::FetchPipeline;
pub use rapidapi::RapidApiSource;
pub use traits::PropertySource;
pub use types::{PropertyType, SavedSearch, SearchFilters};
pub use zillow::ZillowScraper;
