/// セッション管理サービス
///
/// 認証済みセッションの確立・永続化・復元・破棄を担当します。
/// UIから見えるセッション状態は常に「ログアウト済み（コレクション空）」
/// か「ログイン済み（トークン保存済み）」のどちらかで、中途半端な
/// 認証状態を公開することはありません。
use crate::features::auth::models::{SignupRequest, TokenResponse, User};
use crate::features::auth::secure_storage::SecureStorage;
use crate::shared::api_client::ApiClient;
use crate::shared::errors::{AppError, AppResult};
use log::{info, warn};
use std::sync::{Arc, RwLock};

pub struct AuthService {
    /// APIクライアント
    api: Arc<ApiClient>,
    /// セキュアストレージ
    storage: SecureStorage,
    /// メモリ上のセッション状態
    current_user: RwLock<Option<User>>,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>, storage: SecureStorage) -> Self {
        Self {
            api,
            storage,
            current_user: RwLock::new(None),
        }
    }

    /// ユーザーを新規登録する
    ///
    /// サインアップのレスポンスにセッショントークンが含まれていても
    /// 信用せず、呼び出し側で改めてログインを行います。
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> AppResult<()> {
        let body = SignupRequest {
            full_name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        let _created: serde_json::Value = self.api.post_json("/auth/signup", &body, None).await?;

        info!("サインアップ成功: email={email}");
        Ok(())
    }

    /// 認証情報でログインしてセッションを確立する
    ///
    /// トークン取得 → トークン保存 → ユーザー情報取得 → ユーザー保存
    /// の順で進み、途中で失敗した場合はログイン済み状態にはなりません。
    pub async fn login(&self, email: &str, password: &str) -> AppResult<User> {
        let form = [
            ("username", email),
            ("password", password),
            ("grant_type", "password"),
        ];

        let token_response: TokenResponse = self.api.post_form("/auth/login", &form).await?;

        let token = token_response
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AppError::Parse("レスポンスにアクセストークンが含まれていません".to_string())
            })?;

        self.storage
            .save_session_token(&token)
            .map_err(AppError::Storage)?;

        let user: User = self.api.get("/auth/me", Some(&token)).await?;

        self.storage
            .save_current_user(&user)
            .map_err(AppError::Storage)?;
        self.storage
            .save_last_login(&chrono::Utc::now().to_rfc3339())
            .map_err(AppError::Storage)?;

        *self.current_user.write().unwrap() = Some(user.clone());

        info!("ログイン成功: user_id={}", user.id);
        Ok(user)
    }

    /// セッションを破棄する
    ///
    /// 永続化されたトークンとユーザー情報を削除し、メモリ上の
    /// セッション状態をクリアします。ストレージの削除に失敗しても
    /// メモリ上の状態は必ずクリアします。
    pub fn logout(&self) {
        if let Err(e) = self.storage.clear_auth_info() {
            warn!("認証情報の削除に失敗しました: {e}");
        }
        *self.current_user.write().unwrap() = None;
        info!("ログアウトしました");
    }

    /// 保存済みセッションを復元する（起動時に一度呼び出す）
    ///
    /// キャッシュ済みユーザー情報が存在する場合、トークンをサーバーで
    /// 再検証せずにそのまま信用します。復元に失敗した場合はログで
    /// 記録し、ログアウト状態のままにします。
    pub fn restore(&self) -> Option<User> {
        match self.storage.get_current_user() {
            Ok(Some(user)) => {
                *self.current_user.write().unwrap() = Some(user.clone());
                info!("セッションを復元しました: user_id={}", user.id);
                Some(user)
            }
            Ok(None) => {
                info!("保存済みセッションが見つかりません");
                None
            }
            Err(e) => {
                warn!("セッション復元に失敗しました: {e}");
                None
            }
        }
    }

    /// 現在のユーザー情報を取得する
    pub fn current_user(&self) -> Option<User> {
        self.current_user.read().unwrap().clone()
    }

    /// ログイン済みかどうかを返す
    pub fn is_logged_in(&self) -> bool {
        self.current_user.read().unwrap().is_some()
    }
}
