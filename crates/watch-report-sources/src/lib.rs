pub mod error;
pub mod http;
pub mod items;
pub mod traits;
pub mod jellyfin;
pub mod arr;
pub mod radarr;
pub mod sonarr;

#[cfg(test)]
mod testing;

pub use error::SourceError;
pub use http::HttpSettings;
pub use items::{CatalogItem, MediaItem, MediaUser};
pub use traits::{Catalog, MediaServer};
pub use jellyfin::JellyfinClient;
pub use radarr::RadarrClient;
pub use sonarr::SonarrClient;
