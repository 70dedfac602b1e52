use serde::{Deserialize, Serialize};

/// 認証済みユーザー情報
///
/// `/auth/me` のレスポンス形式と同一で、ローカルストレージにも
/// この形で保存されます。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
}

/// サインアップリクエストボディ
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// トークンエンドポイントのレスポンス
///
/// access_tokenが欠けているレスポンスはログイン失敗として扱うため、
/// Optionで受け取ります。
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}
