use watch_report_models::{SeriesProgress, WatchedMovie, WatchedSeries};
use watch_report_sources::MediaItem;

use crate::catalog_index::CatalogIndex;

/// Join a played movie against the Radarr index
pub fn watched_movie(item: &MediaItem, radarr: &CatalogIndex) -> WatchedMovie {
    let tmdb_id = item.tmdb_id();
    let catalog_item = radarr.lookup(tmdb_id.as_deref());

    WatchedMovie {
        title: item.title().to_string(),
        year: item.production_year,
        tmdb_id,
        imdb_id: item.imdb_id(),
        path: item.path.clone(),
        in_catalog: catalog_item.is_some(),
        catalog_id: catalog_item.map(|c| c.id),
        source_id: Some(item.id.clone()),
        watched_by_users: Vec::new(),
    }
}

/// Join a series against the Sonarr index; `None` when no episode was played
pub fn watched_series(
    item: &MediaItem,
    progress: SeriesProgress,
    sonarr: &CatalogIndex,
) -> Option<WatchedSeries> {
    if !progress.is_started() {
        return None;
    }

    let tvdb_id = item.tvdb_id();
    let catalog_item = sonarr.lookup(tvdb_id.as_deref());

    let mut series = WatchedSeries {
        title: item.title().to_string(),
        year: item.production_year,
        tvdb_id,
        imdb_id: item.imdb_id(),
        path: item.path.clone(),
        in_catalog: catalog_item.is_some(),
        catalog_id: catalog_item.map(|c| c.id),
        catalog_slug: catalog_item.and_then(|c| c.title_slug.clone()),
        source_id: Some(item.id.clone()),
        ..Default::default()
    };
    series.set_progress(progress);
    Some(series)
}
