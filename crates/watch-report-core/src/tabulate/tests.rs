use super::*;
use watch_report_models::SeriesProgress;

fn movie(title: &str, year: Option<u32>) -> WatchedMovie {
    WatchedMovie {
        title: title.to_string(),
        year,
        ..Default::default()
    }
}

fn series(title: &str, watched: u32, total: u32) -> WatchedSeries {
    let mut series = WatchedSeries {
        title: title.to_string(),
        year: Some(2020),
        ..Default::default()
    };
    series.set_progress(SeriesProgress::new(watched, total));
    series
}

fn user(name: &str, movies: Vec<WatchedMovie>, series: Vec<WatchedSeries>) -> UserWatchRecord {
    UserWatchRecord {
        user_id: format!("id-{}", name),
        username: name.to_string(),
        watched_movies: movies,
        watched_series: series,
    }
}

fn titles<T>(items: &[T], title: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|i| title(i).to_string()).collect()
}

#[test]
fn test_zero_users() {
    let report = cross_tabulate(Vec::new(), ServiceUrls::default());
    assert!(report.users.is_empty());
    assert!(!report.has_buckets());
}

#[test]
fn test_identical_item_sets_are_watched_by_all() {
    let items = vec![movie("Dune", Some(2021)), movie("Heat", Some(1995))];
    let users = vec![
        user("alice", items.clone(), Vec::new()),
        user("bob", items.clone(), Vec::new()),
        user("carol", items, Vec::new()),
    ];

    let report = cross_tabulate(users, ServiceUrls::default());
    assert_eq!(
        titles(&report.movies_watched_by_all, |m| m.title.as_str()),
        vec!["Dune", "Heat"]
    );
    assert!(report.movies_watched_by_some.is_empty());
    for m in &report.movies_watched_by_all {
        assert_eq!(m.watched_by_users, vec!["alice", "bob", "carol"]);
    }
}

#[test]
fn test_dune_watched_by_one_of_two() {
    let mut dune = movie("Dune", Some(2021));
    dune.tmdb_id = Some("438631".to_string());
    dune.in_catalog = true;
    dune.catalog_id = Some(12);

    let users = vec![
        user("A", vec![dune], Vec::new()),
        user("B", Vec::new(), Vec::new()),
    ];
    let report = cross_tabulate(users, ServiceUrls::default());

    assert!(report.movies_watched_by_all.is_empty());
    assert_eq!(report.movies_watched_by_some.len(), 1);
    let entry = &report.movies_watched_by_some[0];
    assert_eq!(entry.title, "Dune");
    assert_eq!(entry.year, Some(2021));
    assert_eq!(entry.watched_by_users, vec!["A"]);
    assert!(entry.in_catalog);
}

#[test]
fn test_bucket_watcher_counts() {
    let users = vec![
        user("a", vec![movie("One", Some(1)), movie("Two", Some(2)), movie("Three", Some(3))], Vec::new()),
        user("b", vec![movie("One", Some(1)), movie("Two", Some(2))], Vec::new()),
        user("c", vec![movie("One", Some(1))], Vec::new()),
    ];
    let total = users.len();
    let report = cross_tabulate(users, ServiceUrls::default());

    for m in &report.movies_watched_by_all {
        assert_eq!(m.watched_by_users.len(), total);
    }
    for m in &report.movies_watched_by_some {
        assert!(m.watched_by_users.len() >= 1);
        assert!(m.watched_by_users.len() <= total - 1);
    }
    assert_eq!(titles(&report.movies_watched_by_all, |m| m.title.as_str()), vec!["One"]);
    assert_eq!(titles(&report.movies_watched_by_some, |m| m.title.as_str()), vec!["Two", "Three"]);
}

#[test]
fn test_year_distinguishes_items() {
    let users = vec![
        user("a", vec![movie("Dune", Some(1984))], Vec::new()),
        user("b", vec![movie("Dune", Some(2021))], Vec::new()),
    ];
    let report = cross_tabulate(users, ServiceUrls::default());
    assert_eq!(report.movies_watched_by_some.len(), 2);
}

#[test]
fn test_missing_year_collapses_same_title() {
    let mut first = movie("Hamlet", None);
    first.tmdb_id = Some("10264".to_string());
    let mut second = movie("Hamlet", None);
    second.tmdb_id = Some("10549".to_string());

    let users = vec![
        user("a", vec![first], Vec::new()),
        user("b", vec![second], Vec::new()),
    ];
    let report = cross_tabulate(users, ServiceUrls::default());

    assert_eq!(report.movies_watched_by_all.len(), 1);
    // Last occurrence is kept as the representative
    assert_eq!(report.movies_watched_by_all[0].tmdb_id.as_deref(), Some("10549"));
}

#[test]
fn test_duplicate_entries_count_once() {
    let users = vec![
        user("a", vec![movie("Dune", Some(2021)), movie("Dune", Some(2021))], Vec::new()),
        user("b", Vec::new(), Vec::new()),
    ];
    let report = cross_tabulate(users, ServiceUrls::default());
    assert_eq!(report.movies_watched_by_some[0].watched_by_users, vec!["a"]);
}

#[test]
fn test_series_split_by_completion() {
    let users = vec![
        user("a", Vec::new(), vec![series("Severance", 19, 19), series("Andor", 3, 12)]),
        user("b", Vec::new(), vec![series("Severance", 4, 19), series("Andor", 5, 12)]),
    ];
    let report = cross_tabulate(users, ServiceUrls::default());

    assert!(report.series_fully_watched_by_all.is_empty());
    assert_eq!(titles(&report.series_fully_watched_by_some, |s| s.title.as_str()), vec!["Severance"]);
    assert_eq!(report.series_fully_watched_by_some[0].watched_by_users, vec!["a"]);
    assert!(report.series_fully_watched_by_some[0].is_fully_watched);

    assert_eq!(titles(&report.series_partially_watched_by_all, |s| s.title.as_str()), vec!["Andor"]);
    assert_eq!(report.series_partially_watched_by_all[0].watched_by_users, vec!["a", "b"]);

    assert_eq!(titles(&report.series_partially_watched_by_some, |s| s.title.as_str()), vec!["Severance"]);
    let partial = &report.series_partially_watched_by_some[0];
    assert_eq!(partial.watched_by_users, vec!["b"]);
    assert_eq!(partial.watched_episodes, 4);
    assert!(!partial.is_fully_watched);
}

#[test]
fn test_series_fully_watched_by_all() {
    let users = vec![
        user("a", Vec::new(), vec![series("Chernobyl", 5, 5)]),
        user("b", Vec::new(), vec![series("Chernobyl", 5, 5)]),
    ];
    let report = cross_tabulate(users, ServiceUrls::default());
    assert_eq!(report.series_fully_watched_by_all.len(), 1);
    assert!(report.series_partially_watched_by_all.is_empty());
    assert!(report.series_partially_watched_by_some.is_empty());
}

#[test]
fn test_users_kept_verbatim() {
    let users = vec![user("a", vec![movie("Dune", Some(2021))], Vec::new())];
    let report = cross_tabulate(users.clone(), ServiceUrls::default());
    assert_eq!(report.users, users);
    assert!(report.users[0].watched_movies[0].watched_by_users.is_empty());
}

#[test]
fn test_urls_carried() {
    let urls = ServiceUrls {
        jellyfin_url: Some("http://jellyfin:8096".to_string()),
        radarr_url: Some("http://radarr:7878".to_string()),
        sonarr_url: None,
    };
    let report = cross_tabulate(vec![user("a", Vec::new(), Vec::new())], urls.clone());
    assert_eq!(report.urls, urls);
}

#[test]
fn test_report_round_trip_preserves_buckets() {
    let users = vec![
        user("b", vec![movie("Dune", Some(2021))], vec![series("Andor", 3, 12)]),
        user("a", vec![movie("Dune", Some(2021)), movie("Heat", Some(1995))], Vec::new()),
    ];
    let report = cross_tabulate(users, ServiceUrls::default());
    let json = serde_json::to_string(&report).unwrap();
    let decoded: Report = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, report);
    assert_eq!(decoded.movies_watched_by_all[0].watched_by_users, vec!["b", "a"]);
    assert_eq!(decoded.series_partially_watched_by_some[0].watched_by_users, vec!["b"]);
}
