use thiserror::Error;

/// アプリケーション全体で使用される統一エラー型
///
/// 同期レイヤーの内部では種別ごとにエラーを区別しますが、
/// 操作境界（`AppData`のメソッド）ではすべてログ出力のうえ
/// 成否のbooleanに集約されます。
#[derive(Debug, Error)]
pub enum AppError {
    /// 設定関連のエラー
    #[error("設定エラー: {0}")]
    Configuration(String),

    /// ネットワーク・トランスポート層のエラー（タイムアウト含む）
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// APIサーバーからの非2xxレスポンス
    #[error("APIサーバーエラー: status={status}, message={message}")]
    Api { status: u16, message: String },

    /// レスポンスに期待したフィールドがない、または解析に失敗した場合のエラー
    #[error("レスポンス解析エラー: {0}")]
    Parse(String),

    /// ローカルセキュアストレージのエラー
    #[error("ストレージエラー: {0}")]
    Storage(String),
}

impl AppError {
    /// 非2xxレスポンス用のエラーを作成するヘルパー関数
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        AppError::Api {
            status,
            message: message.into(),
        }
    }
}

/// Result型のエイリアス（アプリケーション全体で使用）
pub type AppResult<T> = Result<T, AppError>;
