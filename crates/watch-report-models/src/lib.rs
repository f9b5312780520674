pub mod item_key;
pub mod movie;
pub mod series;
pub mod user;
pub mod report;

pub use item_key::ItemKey;
pub use movie::WatchedMovie;
pub use series::{SeriesProgress, WatchedSeries};
pub use user::UserWatchRecord;
pub use report::{Report, ReportSummary, ServiceUrls};
