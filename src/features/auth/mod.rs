/// 認証機能のモジュール
pub mod models;
pub mod secure_storage;
pub mod service;

pub use models::User;
pub use secure_storage::SecureStorage;
pub use service::AuthService;
