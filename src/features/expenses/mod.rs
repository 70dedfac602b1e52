/// 経費機能モジュール
///
/// 経費の一覧取得・作成・更新・削除と、領収書画像の添付を提供します。
pub mod models;
pub mod service;

pub use models::{Expense, ExpenseDraft, ReceiptFile};
pub use service::ExpenseSync;
