use std::sync::Arc;
use watch_report_models::Report;

/// Shared handler state: the report snapshot, fixed at construction
#[derive(Debug, Clone, Default)]
pub struct AppState {
    report: Option<Arc<Report>>,
}

impl AppState {
    pub fn new(report: Option<Report>) -> Self {
        Self {
            report: report.map(Arc::new),
        }
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_deref()
    }
}
