//! HTTP route handlers.

pub mod health;
pub mod reports;
pub mod research;

pub use health::health_handler;
pub use reports::{api_reports_handler, index_handler, view_report_handler};
pub use research::research_handler;
