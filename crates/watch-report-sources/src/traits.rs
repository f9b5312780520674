use async_trait::async_trait;
use watch_report_models::SeriesProgress;

use crate::error::SourceError;
use crate::items::{CatalogItem, MediaItem, MediaUser};

/// The system of record for per-user watch state
#[async_trait]
pub trait MediaServer: Send + Sync {
    fn server_name(&self) -> &str;

    /// Exchange the configured credentials for a session token.
    /// Every other call fails with `NotAuthenticated` until this succeeds.
    async fn authenticate(&mut self) -> Result<(), SourceError>;
    fn is_authenticated(&self) -> bool;

    async fn list_users(&self) -> Result<Vec<MediaUser>, SourceError>;

    /// Movies marked played for this user
    async fn list_watched_movies(&self, user_id: &str) -> Result<Vec<MediaItem>, SourceError>;

    /// All series visible to this user, played or not
    async fn list_all_series(&self, user_id: &str) -> Result<Vec<MediaItem>, SourceError>;

    /// Played/total episode counts; a series without episodes is `(0, 0)`
    async fn series_progress(
        &self,
        series_id: &str,
        user_id: &str,
    ) -> Result<SeriesProgress, SourceError>;
}

/// A catalog service that tracks which items are managed locally
#[async_trait]
pub trait Catalog: Send + Sync {
    fn catalog_name(&self) -> &str;

    /// Name of the external id this catalog is keyed on ("tmdb", "tvdb")
    fn external_id_name(&self) -> &str;

    /// Best-effort reachability check; logs the outcome and never fails
    async fn test_connection(&self) -> bool;

    async fn list_all(&self) -> Result<Vec<CatalogItem>, SourceError>;

    /// Linear scan over a fresh `list_all`; build a `CatalogIndex` instead when
    /// resolving many ids
    async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<CatalogItem>, SourceError> {
        let wanted = external_id.trim();
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .find(|item| item.external_key().as_deref() == Some(wanted)))
    }
}
