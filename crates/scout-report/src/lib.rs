//! Report assembly, persistence, and Slack notification.

pub mod assemble;
pub mod error;
pub mod persist;
pub mod slack;

pub use assemble::assemble_report;
pub use error::ReportError;
pub use persist::save_report;
pub use slack::SlackNotifier;
