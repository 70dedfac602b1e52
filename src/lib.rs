//! 出張経費管理アプリのセッション・データ同期レイヤー
//!
//! 経費・出張・レポートのメモリ上コレクションと認証済みセッションの
//! ライフサイクルを所有し、UIとリモートAPIの間のすべてのCRUD操作を
//! 仲介します。UIが読むデータの唯一のソースであり、ローカルの
//! セッション永続化への唯一の書き込み元です。
//!
//! 変更操作はすべてライトスルーリフレッシュ方式です：確定した
//! ラウンドトリップ後に一覧全件を再取得してコレクションを丸ごと
//! 置き換え、ローカルへの部分的なパッチ適用は行いません。

pub mod features;
pub mod shared;

use features::auth::{AuthService, SecureStorage, User};
use features::expenses::ExpenseSync;
use features::reports::ReportSync;
use features::sync::EntitySync;
use features::trips::TripSync;
use log::{info, warn};
use shared::api_client::{ApiClient, ApiClientConfig};
use shared::errors::AppResult;
use std::sync::Arc;

/// アプリケーションデータ（セッションとエンティティコレクションの保持者）
///
/// アプリ起動時に一度だけ構築し、各画面に注入して使用します。
/// ライフサイクル：起動時に `restore_session` を一度呼び出し、
/// `logout_user` でセッションとコレクションを破棄します。
///
/// すべての操作はエラーを診断ログに記録したうえで成否のbooleanに
/// 集約します。個別のエラーコードはUIに伝播しません。
pub struct AppData {
    auth: AuthService,
    /// 経費コレクションのシンクロナイザ
    pub expenses: ExpenseSync,
    /// 出張コレクションのシンクロナイザ
    pub trips: TripSync,
    /// レポートコレクションのシンクロナイザ
    pub reports: ReportSync,
}

impl AppData {
    /// 設定とストレージを指定して構築する
    pub fn new(config: ApiClientConfig, storage: SecureStorage) -> AppResult<Self> {
        let api = Arc::new(ApiClient::with_config(config)?);

        Ok(Self {
            auth: AuthService::new(Arc::clone(&api), storage.clone()),
            expenses: EntitySync::new(Arc::clone(&api), storage.clone()),
            trips: EntitySync::new(Arc::clone(&api), storage.clone()),
            reports: EntitySync::new(api, storage),
        })
    }

    /// 環境変数の設定で構築する
    pub fn from_env() -> AppResult<Self> {
        let storage = SecureStorage::new().map_err(shared::errors::AppError::Storage)?;
        Self::new(ApiClientConfig::from_env(), storage)
    }

    /// ユーザーを新規登録し、同じ認証情報でそのままログインする
    ///
    /// サインアップ自体が成功してもログインに失敗した場合は
    /// セッションは作成されず、falseを返します。
    pub async fn signup_user(&self, name: &str, email: &str, password: &str) -> bool {
        match self.auth.signup(name, email, password).await {
            Ok(()) => self.login_user(email, password).await,
            Err(e) => {
                warn!("サインアップに失敗しました: {e}");
                false
            }
        }
    }

    /// ログインしてセッションを確立し、全コレクションを更新する
    ///
    /// 3つのコレクションの更新は並行して行われ、一部の取得が
    /// 失敗しても他のコレクションの取得を妨げません。
    pub async fn login_user(&self, email: &str, password: &str) -> bool {
        match self.auth.login(email, password).await {
            Ok(_user) => {
                self.refresh_all().await;
                true
            }
            Err(e) => {
                warn!("ログインに失敗しました: {e}");
                false
            }
        }
    }

    /// セッションを破棄し、全コレクションを空にする
    ///
    /// 空になったコレクションは「データなし」を意味します
    /// （エラーではありません）。
    pub async fn logout_user(&self) {
        self.auth.logout();
        self.expenses.clear();
        self.trips.clear();
        self.reports.clear();
    }

    /// 保存済みセッションを復元する（起動時に一度呼び出す）
    ///
    /// キャッシュ済みユーザーが存在すればログイン済みとして扱い、
    /// 全コレクションを更新します。存在しない、または復元に失敗した
    /// 場合はログアウト状態のままfalseを返します。
    pub async fn restore_session(&self) -> bool {
        match self.auth.restore() {
            Some(user) => {
                info!("自動ログインします: user_id={}", user.id);
                self.refresh_all().await;
                true
            }
            None => false,
        }
    }

    /// 現在のユーザー情報を取得する
    pub fn current_user(&self) -> Option<User> {
        self.auth.current_user()
    }

    /// ログイン済みかどうかを返す
    pub fn is_logged_in(&self) -> bool {
        self.auth.is_logged_in()
    }

    /// 3つのコレクションを並行して全件更新する
    ///
    /// コレクション同士は独立しているため順序保証は不要です。
    /// 個々の失敗は各シンクロナイザ内でログに記録されます。
    async fn refresh_all(&self) {
        let (_, _, _) = futures::join!(
            self.expenses.fetch_all(),
            self.trips.fetch_all(),
            self.reports.fetch_all(),
        );
    }
}
