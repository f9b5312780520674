use tracing::{error, info, instrument, warn};
use watch_report_models::{Report, ServiceUrls, UserWatchRecord};
use watch_report_sources::{Catalog, MediaServer, MediaUser, SourceError};

use crate::catalog_index::CatalogIndex;
use crate::resolve::{watched_movie, watched_series};
use crate::tabulate::cross_tabulate;

/// Runs the one-shot collection pass and builds the report.
///
/// Every call is awaited in order. A failed call never aborts the run: it is
/// logged, recorded in `Report::warnings`, and treated as an empty result.
/// Only a failed media-server login short-circuits, returning an empty report.
pub struct ReportCollector {
    media_server: Box<dyn MediaServer>,
    movie_catalog: Box<dyn Catalog>,
    series_catalog: Box<dyn Catalog>,
    urls: ServiceUrls,
    warnings: Vec<String>,
}

impl ReportCollector {
    pub fn new(
        media_server: Box<dyn MediaServer>,
        movie_catalog: Box<dyn Catalog>,
        series_catalog: Box<dyn Catalog>,
        urls: ServiceUrls,
    ) -> Self {
        Self {
            media_server,
            movie_catalog,
            series_catalog,
            urls,
            warnings: Vec::new(),
        }
    }

    #[instrument(skip(self))]
    pub async fn collect(&mut self) -> Report {
        info!("Starting data collection");
        self.warnings.clear();

        if let Err(e) = self.media_server.authenticate().await {
            error!(
                error = %e,
                "Failed to authenticate with {}", self.media_server.server_name()
            );
            return Report::empty(self.urls.clone());
        }

        self.movie_catalog.test_connection().await;
        self.series_catalog.test_connection().await;

        let users = match self.media_server.list_users().await {
            Ok(users) => users,
            Err(e) => {
                self.record("listing users", &e);
                Vec::new()
            }
        };

        let movie_index = self.build_index(CatalogKind::Movies).await;
        let series_index = self.build_index(CatalogKind::Series).await;

        let mut records = Vec::with_capacity(users.len());
        for user in &users {
            info!(user = %user.name, "Processing user");
            records.push(self.collect_user(user, &movie_index, &series_index).await);
        }

        let mut report = cross_tabulate(records, self.urls.clone());
        report.warnings = std::mem::take(&mut self.warnings);
        if !report.warnings.is_empty() {
            warn!(count = report.warnings.len(), "Report built from partial data");
        }
        info!("Data collection complete");
        report
    }

    async fn build_index(&mut self, kind: CatalogKind) -> CatalogIndex {
        let catalog = match kind {
            CatalogKind::Movies => &self.movie_catalog,
            CatalogKind::Series => &self.series_catalog,
        };
        match catalog.list_all().await {
            Ok(items) => {
                let total = items.len();
                let index = CatalogIndex::from_items(items);
                info!(
                    catalog = catalog.catalog_name(),
                    total,
                    indexed = index.len(),
                    "Built {} lookup", catalog.external_id_name()
                );
                index
            }
            Err(e) => {
                let context = format!("fetching {} catalog", catalog.catalog_name());
                self.record(&context, &e);
                CatalogIndex::default()
            }
        }
    }

    async fn collect_user(
        &mut self,
        user: &MediaUser,
        movie_index: &CatalogIndex,
        series_index: &CatalogIndex,
    ) -> UserWatchRecord {
        let mut record = UserWatchRecord::new(user.id.clone(), user.name.clone());

        match self.media_server.list_watched_movies(&user.id).await {
            Ok(movies) => {
                record.watched_movies = movies
                    .iter()
                    .map(|item| watched_movie(item, movie_index))
                    .collect();
            }
            Err(e) => self.record(&format!("watched movies for {}", user.name), &e),
        }

        let series = match self.media_server.list_all_series(&user.id).await {
            Ok(series) => series,
            Err(e) => {
                self.record(&format!("series for {}", user.name), &e);
                Vec::new()
            }
        };

        for item in &series {
            let progress = match self.media_server.series_progress(&item.id, &user.id).await {
                Ok(progress) => progress,
                Err(e) => {
                    self.record(
                        &format!("episodes of '{}' for {}", item.title(), user.name),
                        &e,
                    );
                    continue;
                }
            };
            if let Some(watched) = watched_series(item, progress, series_index) {
                record.watched_series.push(watched);
            }
        }

        info!(
            user = %user.name,
            movies = record.watched_movies.len(),
            series = record.watched_series.len(),
            "Collected watch data"
        );
        record
    }

    fn record(&mut self, context: &str, err: &SourceError) {
        warn!(error = %err, "Failed {}; continuing with empty data", context);
        self.warnings.push(format!("{}: {}", context, err));
    }
}

enum CatalogKind {
    Movies,
    Series,
}
