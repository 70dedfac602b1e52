/// レポート機能モジュール
pub mod models;
pub mod service;

pub use models::{Report, ReportDraft};
pub use service::ReportSync;
