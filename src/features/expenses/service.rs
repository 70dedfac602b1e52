/// 経費同期サービス
///
/// 汎用シンクロナイザに経費固有の変更操作を追加します。
/// 経費の作成・更新は領収書画像を添付できるようマルチパート
/// エンコーディングを使用します。
use crate::features::expenses::models::{Expense, ExpenseDraft, RawExpense};
use crate::features::sync::{EntitySync, SyncEntity};

/// 経費のエンティティシンクロナイザ
pub type ExpenseSync = EntitySync<Expense>;

impl EntitySync<Expense> {
    /// 経費を作成する
    ///
    /// 成功時は全件再取得を行ってからtrueを返します。失敗時は
    /// ローカル状態に一切触れずfalseを返します。
    pub async fn create(&self, draft: ExpenseDraft) -> bool {
        let token = self.auth_token();

        let result = match draft.into_form() {
            Ok(form) => {
                self.api
                    .post_multipart::<RawExpense>(Expense::ENDPOINT, form, token.as_deref())
                    .await
            }
            Err(e) => Err(e),
        };

        self.refresh_after(result, "作成").await
    }

    /// 指定したidの経費を更新する
    ///
    /// 作成と同じエンコーディング規則で、対象idに向けて送信します。
    pub async fn update(&self, id: i64, draft: ExpenseDraft) -> bool {
        let token = self.auth_token();
        let endpoint = format!("{}{id}", Expense::ENDPOINT);

        let result = match draft.into_form() {
            Ok(form) => {
                self.api
                    .put_multipart::<RawExpense>(&endpoint, form, token.as_deref())
                    .await
            }
            Err(e) => Err(e),
        };

        self.refresh_after(result, "更新").await
    }
}
