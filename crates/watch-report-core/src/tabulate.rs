// Cross-user grouping of per-user watch records into report buckets

use std::collections::HashMap;
use tracing::{debug, info};
use watch_report_models::{
    ItemKey, Report, ServiceUrls, UserWatchRecord, WatchedMovie, WatchedSeries,
};

/// An item that can be grouped across users
trait Tabulated {
    fn key(&self) -> ItemKey;
    fn set_watchers(&mut self, watchers: Vec<String>);
}

impl Tabulated for WatchedMovie {
    fn key(&self) -> ItemKey {
        WatchedMovie::key(self)
    }

    fn set_watchers(&mut self, watchers: Vec<String>) {
        self.watched_by_users = watchers;
    }
}

impl Tabulated for WatchedSeries {
    fn key(&self) -> ItemKey {
        WatchedSeries::key(self)
    }

    fn set_watchers(&mut self, watchers: Vec<String>) {
        self.watched_by_users = watchers;
    }
}

struct Group<T> {
    item: T,
    watcher_ids: Vec<String>,
    watchers: Vec<String>,
}

/// Groups in first-seen order; the representative item is the last one added
struct Grouping<T> {
    index: HashMap<ItemKey, usize>,
    groups: Vec<Group<T>>,
}

impl<T: Tabulated + Clone> Grouping<T> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    fn add(&mut self, item: &T, user: &UserWatchRecord) {
        let key = item.key();
        match self.index.get(&key) {
            Some(&idx) => {
                let group = &mut self.groups[idx];
                group.item = item.clone();
                if !group.watcher_ids.iter().any(|id| id == &user.user_id) {
                    group.watcher_ids.push(user.user_id.clone());
                    group.watchers.push(user.username.clone());
                }
            }
            None => {
                self.index.insert(key, self.groups.len());
                self.groups.push(Group {
                    item: item.clone(),
                    watcher_ids: vec![user.user_id.clone()],
                    watchers: vec![user.username.clone()],
                });
            }
        }
    }

    /// Split into (watched by all, watched by some)
    fn into_buckets(self, total_users: usize) -> (Vec<T>, Vec<T>) {
        let mut by_all = Vec::new();
        let mut by_some = Vec::new();
        for group in self.groups {
            let mut item = group.item;
            let watcher_count = group.watchers.len();
            item.set_watchers(group.watchers);
            if watcher_count == total_users {
                by_all.push(item);
            } else {
                by_some.push(item);
            }
        }
        (by_all, by_some)
    }
}

/// Build the report buckets from per-user watch records.
///
/// Movies are grouped by title and year. Series are split by their per-user
/// fully-watched flag first, then grouped the same way, so one title can be
/// "fully watched" for some users and "partially watched" for others. A group
/// lands in a "by all" bucket when every user is in it.
pub fn cross_tabulate(users: Vec<UserWatchRecord>, urls: ServiceUrls) -> Report {
    info!("Generating report");

    let mut report = Report::empty(urls);
    if users.is_empty() {
        report.users = users;
        return report;
    }

    let mut movies = Grouping::<WatchedMovie>::new();
    let mut series_full = Grouping::<WatchedSeries>::new();
    let mut series_partial = Grouping::<WatchedSeries>::new();

    for user in &users {
        for movie in &user.watched_movies {
            movies.add(movie, user);
        }
        for series in &user.watched_series {
            if series.is_fully_watched {
                series_full.add(series, user);
            } else {
                series_partial.add(series, user);
            }
        }
    }

    let total_users = users.len();
    debug!(
        total_users,
        movie_groups = movies.groups.len(),
        full_series_groups = series_full.groups.len(),
        partial_series_groups = series_partial.groups.len(),
        "Grouped watch records"
    );

    (report.movies_watched_by_all, report.movies_watched_by_some) = movies.into_buckets(total_users);
    (report.series_fully_watched_by_all, report.series_fully_watched_by_some) =
        series_full.into_buckets(total_users);
    (report.series_partially_watched_by_all, report.series_partially_watched_by_some) =
        series_partial.into_buckets(total_users);
    report.users = users;

    info!(
        movies_by_all = report.movies_watched_by_all.len(),
        series_fully_by_all = report.series_fully_watched_by_all.len(),
        "Report generated"
    );
    report
}

#[cfg(test)]
mod tests;
