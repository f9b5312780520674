use std::fmt::{self, Write};
use watch_report_models::{Report, ServiceUrls, UserWatchRecord, WatchedMovie, WatchedSeries};

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:2rem;background:#111;color:#ddd}\
h1,h2{color:#fff}table{border-collapse:collapse;width:100%;margin-bottom:2rem}\
th,td{border-bottom:1px solid #333;padding:.4rem .6rem;text-align:left}\
th{background:#222}a{color:#7ab7ff}.yes{color:#6c6}.no{color:#c66}\
.warn{background:#3a2a00;padding:.6rem;border-left:4px solid #fa0}";

pub fn render_report(report: &Report) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

pub fn render_missing() -> String {
    let mut out = String::new();
    let _ = write_page_start(&mut out);
    out.push_str(
        "<h1>Arr Cleaner Report</h1>\
         <p>No report available. Data collection has not produced a report yet.</p>\
         </body></html>",
    );
    out
}

/// Minimal HTML escaping for text and attribute values
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_page_start(out: &mut String) -> fmt::Result {
    write!(
        out,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\">\
         <title>Arr Cleaner Report</title><style>{}</style></head><body>",
        STYLE
    )
}

fn write_report(out: &mut String, report: &Report) -> fmt::Result {
    write_page_start(out)?;
    write!(
        out,
        "<h1>Arr Cleaner Report</h1><p>Generated {}</p>",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;

    if !report.warnings.is_empty() {
        out.push_str("<div class=\"warn\"><strong>Collected with errors:</strong><ul>");
        for warning in &report.warnings {
            write!(out, "<li>{}</li>", escape(warning))?;
        }
        out.push_str("</ul></div>");
    }

    write_users(out, &report.users)?;

    let urls = &report.urls;
    write_movies(out, "Movies watched by everyone", &report.movies_watched_by_all, urls)?;
    write_movies(out, "Movies watched by some", &report.movies_watched_by_some, urls)?;
    write_series(out, "Series fully watched by everyone", &report.series_fully_watched_by_all, urls)?;
    write_series(out, "Series fully watched by some", &report.series_fully_watched_by_some, urls)?;
    write_series(
        out,
        "Series partially watched by everyone",
        &report.series_partially_watched_by_all,
        urls,
    )?;
    write_series(
        out,
        "Series partially watched by some",
        &report.series_partially_watched_by_some,
        urls,
    )?;

    out.push_str("</body></html>");
    Ok(())
}

fn write_users(out: &mut String, users: &[UserWatchRecord]) -> fmt::Result {
    write!(out, "<h2>Users ({})</h2>", users.len())?;
    if users.is_empty() {
        out.push_str("<p>No users.</p>");
        return Ok(());
    }
    out.push_str("<table><tr><th>User</th><th>Movies watched</th><th>Series started</th><th>Series finished</th></tr>");
    for user in users {
        let finished = user.watched_series.iter().filter(|s| s.is_fully_watched).count();
        write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&user.username),
            user.watched_movies.len(),
            user.watched_series.len(),
            finished
        )?;
    }
    out.push_str("</table>");
    Ok(())
}

fn write_movies(
    out: &mut String,
    heading: &str,
    movies: &[WatchedMovie],
    urls: &ServiceUrls,
) -> fmt::Result {
    write!(out, "<h2>{} ({})</h2>", heading, movies.len())?;
    if movies.is_empty() {
        out.push_str("<p>None.</p>");
        return Ok(());
    }
    out.push_str("<table><tr><th>Title</th><th>Year</th><th>Watched by</th><th>Radarr</th><th>Links</th></tr>");
    for movie in movies {
        write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>",
            escape(&movie.title),
            year_cell(movie.year),
            escape(&movie.watched_by_users.join(", ")),
            catalog_cell(movie.in_catalog),
        )?;
        write_link(out, "Jellyfin", jellyfin_link(urls, movie.source_id.as_deref()))?;
        if movie.in_catalog {
            write_link(out, "Radarr", radarr_link(urls, movie.tmdb_id.as_deref()))?;
        }
        out.push_str("</td></tr>");
    }
    out.push_str("</table>");
    Ok(())
}

fn write_series(
    out: &mut String,
    heading: &str,
    series: &[WatchedSeries],
    urls: &ServiceUrls,
) -> fmt::Result {
    write!(out, "<h2>{} ({})</h2>", heading, series.len())?;
    if series.is_empty() {
        out.push_str("<p>None.</p>");
        return Ok(());
    }
    out.push_str("<table><tr><th>Title</th><th>Year</th><th>Episodes</th><th>Watched by</th><th>Sonarr</th><th>Links</th></tr>");
    for entry in series {
        write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}/{}</td><td>{}</td><td>{}</td><td>",
            escape(&entry.title),
            year_cell(entry.year),
            entry.watched_episodes,
            entry.total_episodes,
            escape(&entry.watched_by_users.join(", ")),
            catalog_cell(entry.in_catalog),
        )?;
        write_link(out, "Jellyfin", jellyfin_link(urls, entry.source_id.as_deref()))?;
        if entry.in_catalog {
            write_link(out, "Sonarr", sonarr_link(urls, entry.catalog_slug.as_deref()))?;
        }
        out.push_str("</td></tr>");
    }
    out.push_str("</table>");
    Ok(())
}

fn write_link(out: &mut String, label: &str, href: Option<String>) -> fmt::Result {
    match href {
        Some(href) => write!(
            out,
            "<a href=\"{}\" target=\"_blank\">{}</a> ",
            escape(&href),
            label
        ),
        None => Ok(()),
    }
}

fn year_cell(year: Option<u32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_default()
}

fn catalog_cell(in_catalog: bool) -> &'static str {
    if in_catalog {
        "<span class=\"yes\">yes</span>"
    } else {
        "<span class=\"no\">no</span>"
    }
}

fn base(url: &Option<String>) -> Option<&str> {
    url.as_deref()
        .map(|u| u.trim_end_matches('/'))
        .filter(|u| !u.is_empty())
}

pub fn jellyfin_link(urls: &ServiceUrls, item_id: Option<&str>) -> Option<String> {
    Some(format!(
        "{}/web/index.html#!/details?id={}",
        base(&urls.jellyfin_url)?,
        item_id?
    ))
}

pub fn radarr_link(urls: &ServiceUrls, tmdb_id: Option<&str>) -> Option<String> {
    Some(format!("{}/movie/{}", base(&urls.radarr_url)?, tmdb_id?))
}

pub fn sonarr_link(urls: &ServiceUrls, slug: Option<&str>) -> Option<String> {
    Some(format!("{}/series/{}", base(&urls.sonarr_url)?, slug?))
}
