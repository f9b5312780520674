use std::collections::HashMap;
use watch_report_sources::CatalogItem;

/// Catalog items keyed by their stringified external id.
///
/// Built once per run so each watched item resolves in O(1) instead of
/// re-fetching the catalog. Items without an external id (or with id 0) are
/// left out; on duplicate ids the later item wins.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    by_external_id: HashMap<String, CatalogItem>,
}

impl CatalogIndex {
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        let by_external_id = items
            .into_iter()
            .filter_map(|item| item.external_key().map(|key| (key, item)))
            .collect();
        Self { by_external_id }
    }

    /// Look up by the id string the media server reports (e.g. Jellyfin's "Tmdb" provider id)
    pub fn lookup(&self, external_id: Option<&str>) -> Option<&CatalogItem> {
        let key = external_id?.trim();
        if key.is_empty() {
            return None;
        }
        self.by_external_id.get(key).or_else(|| {
            // "0438631" and "438631" are the same TMDB id
            key.parse::<u64>()
                .ok()
                .and_then(|id| self.by_external_id.get(&id.to_string()))
        })
    }

    pub fn len(&self) -> usize {
        self.by_external_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_external_id.is_empty()
    }
}
