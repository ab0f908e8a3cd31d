pub mod analyze;
pub mod analyze_text;
pub mod dispatch;
pub mod get;
pub mod health;
pub mod list;
pub mod report;
