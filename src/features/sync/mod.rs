/// エンティティ同期モジュール
///
/// 1つのメモリ上コレクションをリモートリソースと一致させるための
/// 汎用的な仕組みを提供します。経費・出張・レポートの3種類の
/// エンティティがこの仕組みを共有します。
///
/// 変更操作（作成・更新・削除）は成功後に必ず全件再取得を行います。
/// クライアント側で並び順由来の表示コードを計算しているため、
/// ローカルへの部分的なパッチ適用はサーバー側の並び順との乖離を
/// 生みます。変更のたびに1往復増えますが、人間の操作ペースでは
/// 問題になりません。
use crate::features::auth::secure_storage::SecureStorage;
use crate::shared::api_client::ApiClient;
use crate::shared::collection::Collection;
use crate::shared::errors::AppResult;
use log::warn;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// リモートリソースと同期されるエンティティ
pub trait SyncEntity: Clone + Send + Sync + 'static {
    /// サーバーから返される生のレコード形式
    type Raw: DeserializeOwned + Send;

    /// リソースのエンドポイント（末尾スラッシュ付き、例: "/trips/"）
    const ENDPOINT: &'static str;

    /// ログ出力用のエンティティ名
    const KIND: &'static str;

    /// 生レコードをローカルの形式に変換する
    ///
    /// `position` は一覧内の1始まりの位置で、表示コードの計算に
    /// 使用します。欠けているテキスト項目は空文字列、真偽値は
    /// falseで補完してください。
    fn from_raw(raw: Self::Raw, position: usize, base_url: &str) -> Self;
}

/// エンティティシンクロナイザ
///
/// 認証トークンはリクエストごとにセキュアストレージから取得します。
pub struct EntitySync<E: SyncEntity> {
    pub(crate) api: Arc<ApiClient>,
    pub(crate) storage: SecureStorage,
    collection: Collection<E>,
}

impl<E: SyncEntity> EntitySync<E> {
    pub fn new(api: Arc<ApiClient>, storage: SecureStorage) -> Self {
        Self {
            api,
            storage,
            collection: Collection::new(),
        }
    }

    /// 現在のコレクション内容のスナップショットを取得する
    pub fn items(&self) -> Vec<E> {
        self.collection.snapshot()
    }

    /// コレクションを空にする（ログアウト時）
    pub fn clear(&self) {
        self.collection.clear();
    }

    /// 一覧全件をリモートから取得してコレクションを置き換える
    ///
    /// 成功時はサーバーの並び順で表示コードを振り直し、コレクション
    /// 全体をアトミックに置き換えます。空の一覧は空のコレクションに
    /// なります（エラーではありません）。失敗時はログに記録し、
    /// 直前の内容をそのまま残します。
    pub async fn fetch_all(&self) -> bool {
        let token = self.auth_token();

        match self
            .api
            .get::<Vec<E::Raw>>(E::ENDPOINT, token.as_deref())
            .await
        {
            Ok(raw_list) => {
                let mapped: Vec<E> = raw_list
                    .into_iter()
                    .enumerate()
                    .map(|(idx, raw)| E::from_raw(raw, idx + 1, self.api.base_url()))
                    .collect();

                self.collection.replace(mapped);
                true
            }
            Err(e) => {
                warn!("{}一覧の取得に失敗しました: {e}", E::KIND);
                false
            }
        }
    }

    /// 指定したidのエンティティを削除する
    ///
    /// 成功時は全件再取得を行い、残りのエンティティの表示コードが
    /// 詰め直されます。
    pub async fn delete(&self, id: i64) -> bool {
        let token = self.auth_token();
        let endpoint = format!("{}{id}", E::ENDPOINT);

        match self.api.delete(&endpoint, token.as_deref()).await {
            Ok(()) => {
                self.fetch_all().await;
                true
            }
            Err(e) => {
                warn!("{}の削除に失敗しました: id={id}, {e}", E::KIND);
                false
            }
        }
    }

    /// 変更リクエストの結果を処理する共通ヘルパー
    ///
    /// 成功時は全件再取得してtrueを返し、失敗時はログに記録して
    /// ローカル状態に触れずfalseを返します。
    pub(crate) async fn refresh_after<T>(&self, result: AppResult<T>, operation: &str) -> bool {
        match result {
            Ok(_) => {
                self.fetch_all().await;
                true
            }
            Err(e) => {
                warn!("{}の{operation}に失敗しました: {e}", E::KIND);
                false
            }
        }
    }

    /// 保存済みセッショントークンを取得する
    pub(crate) fn auth_token(&self) -> Option<String> {
        match self.storage.get_session_token() {
            Ok(token) => token,
            Err(e) => {
                warn!("セッショントークンの取得に失敗しました: {e}");
                None
            }
        }
    }
}
