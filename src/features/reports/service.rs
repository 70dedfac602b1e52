/// レポート同期サービス
///
/// 汎用シンクロナイザにレポート固有の変更操作を追加します。
/// レポート本体の編集はリモートAPIに更新エンドポイントがないため
/// 提供しません（ステータスの部分更新のみ）。
use crate::features::reports::models::{RawReport, Report, ReportDraft};
use crate::features::sync::{EntitySync, SyncEntity};

/// レポートのエンティティシンクロナイザ
pub type ReportSync = EntitySync<Report>;

impl EntitySync<Report> {
    /// レポートを作成する
    pub async fn create(&self, draft: ReportDraft) -> bool {
        let token = self.auth_token();

        let result = self
            .api
            .post_json::<ReportDraft, RawReport>(Report::ENDPOINT, &draft, token.as_deref())
            .await;

        self.refresh_after(result, "作成").await
    }

    /// レポートのステータスのみを更新する
    pub async fn update_status(&self, id: i64, status: &str) -> bool {
        let token = self.auth_token();
        let endpoint = format!(
            "{}{id}/status?status={}",
            Report::ENDPOINT,
            urlencoding::encode(status)
        );

        let result = self
            .api
            .patch::<RawReport>(&endpoint, token.as_deref())
            .await;

        self.refresh_after(result, "ステータス更新").await
    }
}
