/// 共有モジュール
///
/// 機能横断で使用される基盤コード（APIクライアント、コレクション、
/// エラー型、設定、ユーティリティ）を提供します。
pub mod api_client;
pub mod collection;
pub mod config;
pub mod errors;
pub mod utils;
