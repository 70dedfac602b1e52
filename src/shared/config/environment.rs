/// 環境設定モジュール
///
/// .envファイルの読み込みとログシステムの初期化を行います。
/// どちらもアプリケーション起動時に一度だけ呼び出される想定です。
use log::{debug, info};

/// 環境に応じた.envファイルを読み込む
///
/// .envファイルが存在しない場合はエラーにせず、
/// プロセスの環境変数のみを使用します。
pub fn load_environment_variables() {
    match dotenv::dotenv() {
        Ok(path) => {
            debug!(".envファイルを読み込みました: {}", path.display());
        }
        Err(_) => {
            debug!(".envファイルが見つかりません - プロセスの環境変数を使用します");
        }
    }
}

/// ログシステムを初期化する
///
/// RUST_LOG環境変数でログレベルを制御できます（デフォルト: info）。
/// テストなどで複数回呼ばれても安全です。
pub fn initialize_logging_system() {
    let result =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();

    if result.is_ok() {
        info!("ログシステムを初期化しました");
    }
}

/// 環境変数を取得する（デフォルト値付き）
pub fn env_var_or_default(var_name: &str, default_value: &str) -> String {
    std::env::var(var_name).unwrap_or_else(|_| {
        debug!("環境変数 {var_name} が見つからないため、デフォルト値を使用します: {default_value}");
        default_value.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_or_default_returns_default() {
        let value = env_var_or_default("SHUCCHOU_KEIHI_TEST_MISSING_VAR", "default-value");
        assert_eq!(value, "default-value");
    }

    #[test]
    fn test_env_var_or_default_reads_existing() {
        std::env::set_var("SHUCCHOU_KEIHI_TEST_EXISTING_VAR", "configured");
        let value = env_var_or_default("SHUCCHOU_KEIHI_TEST_EXISTING_VAR", "default-value");
        assert_eq!(value, "configured");
        std::env::remove_var("SHUCCHOU_KEIHI_TEST_EXISTING_VAR");
    }

    #[test]
    fn test_initialize_logging_system_is_idempotent() {
        // 2回呼んでもパニックしないこと
        initialize_logging_system();
        initialize_logging_system();
    }
}
