/// セキュアストレージモジュール
///
/// セッショントークンとキャッシュ済みユーザー情報をJSONファイルとして
/// 保存・取得します。エンティティデータは一切キャッシュしません —
/// 一覧は毎回リモートAPIから取得されます。
use crate::features::auth::models::User;
use log::{debug, info};
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

/// セキュアストレージのキー定義
pub struct SecureStorageKeys;

impl SecureStorageKeys {
    /// セッショントークンのキー
    pub const SESSION_TOKEN: &'static str = "session_token";
    /// キャッシュ済みユーザー情報のキー
    pub const CURRENT_USER: &'static str = "current_user";
    /// 最終ログイン日時のキー
    pub const LAST_LOGIN: &'static str = "last_login";
}

/// セキュアストレージサービス
#[derive(Debug, Clone)]
pub struct SecureStorage {
    /// ストアファイルのパス
    store_path: PathBuf,
}

impl SecureStorage {
    /// アプリケーションのデータディレクトリ配下にストアを作成する
    pub fn new() -> Result<Self, String> {
        let base_dir = dirs::data_dir().ok_or_else(|| {
            "アプリケーションデータディレクトリを特定できませんでした".to_string()
        })?;
        let store_dir = base_dir.join("shucchou-keihi");

        fs::create_dir_all(&store_dir)
            .map_err(|e| format!("ストアディレクトリの作成に失敗しました: {e}"))?;

        Ok(Self {
            store_path: store_dir.join("secure.json"),
        })
    }

    /// ストアファイルのパスを指定して作成する（テスト用）
    pub fn with_path(store_path: PathBuf) -> Self {
        Self { store_path }
    }

    /// セッショントークンを保存する
    pub fn save_session_token(&self, token: &str) -> Result<(), String> {
        self.set(SecureStorageKeys::SESSION_TOKEN, Value::String(token.to_string()))?;
        info!("セッショントークンを保存しました");
        Ok(())
    }

    /// セッショントークンを取得する
    pub fn get_session_token(&self) -> Result<Option<String>, String> {
        let store = self.read_store()?;
        Ok(store
            .get(SecureStorageKeys::SESSION_TOKEN)
            .and_then(|v| v.as_str().map(|s| s.to_string())))
    }

    /// キャッシュ済みユーザー情報を保存する
    pub fn save_current_user(&self, user: &User) -> Result<(), String> {
        let value = serde_json::to_value(user)
            .map_err(|e| format!("ユーザー情報のシリアライズに失敗しました: {e}"))?;
        self.set(SecureStorageKeys::CURRENT_USER, value)?;
        debug!("ユーザー情報を保存しました: user_id={}", user.id);
        Ok(())
    }

    /// キャッシュ済みユーザー情報を取得する
    pub fn get_current_user(&self) -> Result<Option<User>, String> {
        let store = self.read_store()?;
        match store.get(SecureStorageKeys::CURRENT_USER) {
            Some(value) => {
                let user: User = serde_json::from_value(value.clone())
                    .map_err(|e| format!("ユーザー情報の解析に失敗しました: {e}"))?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// 最終ログイン日時を保存する（RFC3339形式）
    pub fn save_last_login(&self, last_login: &str) -> Result<(), String> {
        self.set(SecureStorageKeys::LAST_LOGIN, Value::String(last_login.to_string()))?;
        debug!("最終ログイン日時を保存しました: last_login={last_login}");
        Ok(())
    }

    /// すべての認証情報を削除する（ログアウト時）
    pub fn clear_auth_info(&self) -> Result<(), String> {
        let mut store = self.read_store()?;
        store.remove(SecureStorageKeys::SESSION_TOKEN);
        store.remove(SecureStorageKeys::CURRENT_USER);
        store.remove(SecureStorageKeys::LAST_LOGIN);
        self.write_store(&store)?;

        info!("認証情報を削除しました");
        Ok(())
    }

    /// ストアの値を1件設定して保存する
    fn set(&self, key: &str, value: Value) -> Result<(), String> {
        let mut store = self.read_store()?;
        store.insert(key.to_string(), value);
        self.write_store(&store)
    }

    /// ストアファイルを読み込む（存在しない場合は空のストア）
    fn read_store(&self) -> Result<Map<String, Value>, String> {
        if !self.store_path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.store_path)
            .map_err(|e| format!("ストアの読み込みに失敗しました: {e}"))?;
        serde_json::from_str(&content).map_err(|e| format!("ストアの解析に失敗しました: {e}"))
    }

    /// ストアファイルを書き込む
    fn write_store(&self, store: &Map<String, Value>) -> Result<(), String> {
        let content = serde_json::to_string_pretty(store)
            .map_err(|e| format!("ストアのシリアライズに失敗しました: {e}"))?;
        fs::write(&self.store_path, content)
            .map_err(|e| format!("ストアの保存に失敗しました: {e}"))
    }
}
