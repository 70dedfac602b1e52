/// 出張同期サービス
///
/// 汎用シンクロナイザに出張固有の変更操作を追加します。
use crate::features::sync::{EntitySync, SyncEntity};
use crate::features::trips::models::{RawTrip, Trip, TripDraft};

/// 出張のエンティティシンクロナイザ
pub type TripSync = EntitySync<Trip>;

impl EntitySync<Trip> {
    /// 出張を作成する
    pub async fn create(&self, draft: TripDraft) -> bool {
        let token = self.auth_token();

        let result = self
            .api
            .post_json::<TripDraft, RawTrip>(Trip::ENDPOINT, &draft, token.as_deref())
            .await;

        self.refresh_after(result, "作成").await
    }

    /// 出張のステータスのみを更新する
    ///
    /// ステータス値はクエリパラメータで送るため、URLエンコードします。
    pub async fn update_status(&self, id: i64, status: &str) -> bool {
        let token = self.auth_token();
        let endpoint = format!(
            "{}{id}/status?status={}",
            Trip::ENDPOINT,
            urlencoding::encode(status)
        );

        let result = self.api.patch::<RawTrip>(&endpoint, token.as_deref()).await;

        self.refresh_after(result, "ステータス更新").await
    }
}
