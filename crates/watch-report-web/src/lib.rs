//! Read-only HTTP view over a finished watch report.

pub mod handlers;
pub mod html;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
