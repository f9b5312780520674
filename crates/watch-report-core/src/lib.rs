pub mod catalog_index;
pub mod collector;
pub mod resolve;
pub mod tabulate;

pub use catalog_index::CatalogIndex;
pub use collector::ReportCollector;
pub use resolve::{watched_movie, watched_series};
pub use tabulate::cross_tabulate;
