/// 機能別モジュール
///
/// アプリケーションの機能を機能別に整理したモジュール群です。
/// 各機能モジュールは、その機能に関連するコード（モデル、サービス）を
/// 含む自己完結型のユニットです。
pub mod auth;
pub mod expenses;
pub mod reports;
pub mod sync;
pub mod trips;
