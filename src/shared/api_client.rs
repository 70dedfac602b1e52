/// 汎用APIクライアント
///
/// APIサーバーとの通信を行う汎用的なクライアント。
/// 認証、経費、出張、レポートの各エンドポイントで使用します。
/// すべてのリクエストは単発で、リトライは行いません。
/// タイムアウトはクライアント全体で一律に適用されます。
use crate::shared::config::environment::env_var_or_default;
use crate::shared::errors::{AppError, AppResult};
use log::{info, warn};
use reqwest::{multipart, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

/// APIクライアント設定
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: 15,
        }
    }
}

impl ApiClientConfig {
    /// 環境変数からAPIクライアント設定を読み込む
    pub fn from_env() -> Self {
        Self {
            base_url: env_var_or_default("API_SERVER_URL", "http://localhost:8000"),
            timeout_seconds: env_var_or_default("API_TIMEOUT_SECONDS", "15")
                .parse()
                .unwrap_or(15),
        }
    }
}

/// APIサーバーからのエラーレスポンス（FastAPI形式）
#[derive(Debug, Serialize, Deserialize)]
struct ErrorDetail {
    detail: String,
}

/// 汎用APIクライアント
pub struct ApiClient {
    client: Client,
    config: ApiClientConfig,
}

impl ApiClient {
    /// 環境変数の設定でAPIクライアントを作成
    pub fn new() -> AppResult<Self> {
        Self::with_config(ApiClientConfig::from_env())
    }

    /// 設定を指定してAPIクライアントを作成
    pub fn with_config(config: ApiClientConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTPクライアント初期化失敗: {e}")))?;

        Ok(Self { client, config })
    }

    /// APIサーバーのベースURLを取得
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// GETリクエストを送信
    pub async fn get<T>(&self, endpoint: &str, auth_token: Option<&str>) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{endpoint}", self.config.base_url);
        let request = Self::authorize(self.client.get(&url), auth_token);
        self.send_request(request, "GET", endpoint).await
    }

    /// JSONボディ付きPOSTリクエストを送信
    pub async fn post_json<B, T>(
        &self,
        endpoint: &str,
        body: &B,
        auth_token: Option<&str>,
    ) -> AppResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{endpoint}", self.config.base_url);
        let request = Self::authorize(self.client.post(&url).json(body), auth_token);
        self.send_request(request, "POST", endpoint).await
    }

    /// フォームエンコードボディ付きPOSTリクエストを送信（トークンエンドポイント用）
    pub async fn post_form<T>(&self, endpoint: &str, fields: &[(&str, &str)]) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{endpoint}", self.config.base_url);
        let request = self.client.post(&url).form(fields);
        self.send_request(request, "POST", endpoint).await
    }

    /// マルチパートボディ付きPOSTリクエストを送信（画像添付用）
    pub async fn post_multipart<T>(
        &self,
        endpoint: &str,
        form: multipart::Form,
        auth_token: Option<&str>,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{endpoint}", self.config.base_url);
        let request = Self::authorize(self.client.post(&url).multipart(form), auth_token);
        self.send_request(request, "POST", endpoint).await
    }

    /// マルチパートボディ付きPUTリクエストを送信（画像添付用）
    pub async fn put_multipart<T>(
        &self,
        endpoint: &str,
        form: multipart::Form,
        auth_token: Option<&str>,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{endpoint}", self.config.base_url);
        let request = Self::authorize(self.client.put(&url).multipart(form), auth_token);
        self.send_request(request, "PUT", endpoint).await
    }

    /// ボディなしPATCHリクエストを送信（ステータス部分更新用）
    pub async fn patch<T>(&self, endpoint: &str, auth_token: Option<&str>) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{endpoint}", self.config.base_url);
        let request = Self::authorize(self.client.patch(&url), auth_token);
        self.send_request(request, "PATCH", endpoint).await
    }

    /// DELETEリクエストを送信
    ///
    /// DELETEは204 No Contentを返すため、成功ステータスのみチェックします。
    pub async fn delete(&self, endpoint: &str, auth_token: Option<&str>) -> AppResult<()> {
        let url = format!("{}{endpoint}", self.config.base_url);
        let request = Self::authorize(self.client.delete(&url), auth_token);

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("APIサーバーへの接続に失敗しました: {e}")))?;

        if response.status().is_success() {
            info!("DELETEリクエスト成功: endpoint={endpoint}");
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// 認証トークンがある場合はAuthorizationヘッダーを追加
    fn authorize(request: RequestBuilder, auth_token: Option<&str>) -> RequestBuilder {
        match auth_token {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    /// リクエストを送信してJSONレスポンスを解析する
    async fn send_request<T>(
        &self,
        request: RequestBuilder,
        method: &str,
        endpoint: &str,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("APIサーバーへの接続に失敗しました: {e}")))?;

        if response.status().is_success() {
            let result: T = response
                .json()
                .await
                .map_err(|e| AppError::Parse(format!("レスポンス解析エラー: {e}")))?;

            info!("{method}リクエスト成功: endpoint={endpoint}");
            Ok(result)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// 非2xxレスポンスをAppErrorに変換する
    ///
    /// FastAPI形式の {"detail": "..."} ボディがあればそのメッセージを使用します。
    async fn error_from_response(response: Response) -> AppError {
        let status = response.status().as_u16();
        let response_text = response
            .text()
            .await
            .unwrap_or_else(|_| "レスポンス読み取り失敗".to_string());

        let message = match serde_json::from_str::<ErrorDetail>(&response_text) {
            Ok(detail) => detail.detail,
            Err(_) => response_text,
        };

        warn!("APIサーバーからエラーレスポンス: status={status}, message={message}");
        AppError::api(status, message)
    }
}
