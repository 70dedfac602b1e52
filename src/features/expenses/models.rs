use crate::features::sync::SyncEntity;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{display_code, CODE_WIDTH};
use reqwest::multipart;
use serde::{Deserialize, Serialize};

/// 経費データモデル（ローカル形式）
///
/// `expense_code` は一覧の並び順から導出される表示専用のコードで、
/// フェッチのたびに振り直されます。識別子は常に `id` を使用して
/// ください。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub name: String,
    pub merchant: String,
    pub category: String,
    /// 金額（10進文字列）
    pub amount: String,
    /// 支出日（ISO形式）
    pub date: String,
    pub reimburse: bool,
    /// アップロード前のローカル画像参照（サーバーからは返されない）
    pub receipt_uri: Option<String>,
    /// サーバーで解決された領収書画像URL
    pub image_url: Option<String>,
    /// 表示コード（#0001形式）
    pub expense_code: String,
}

/// サーバーから返される生の経費レコード
#[derive(Debug, Deserialize)]
pub struct RawExpense {
    pub id: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ocr_text: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub spent_at: Option<String>,
    #[serde(default)]
    pub receipt_images: Vec<RawReceiptImage>,
}

/// 領収書画像の生レコード
#[derive(Debug, Deserialize)]
pub struct RawReceiptImage {
    pub id: i64,
    pub file_path: String,
}

/// 添付する領収書画像ファイル
#[derive(Debug, Clone)]
pub struct ReceiptFile {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// 経費の作成・更新入力
///
/// バリデーションはUIレイヤーの責務のため、ここでは行いません。
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub name: String,
    pub merchant: String,
    pub category: String,
    pub amount: String,
    pub date: String,
    pub receipt: Option<ReceiptFile>,
}

impl ExpenseDraft {
    /// マルチパートフォームに変換する
    ///
    /// サーバー側のフィールド名（description / ocr_text / spent_at）に
    /// 合わせて詰め替え、領収書画像があれば `image` として添付します。
    pub(crate) fn into_form(self) -> AppResult<multipart::Form> {
        let mut form = multipart::Form::new()
            .text("amount", self.amount)
            .text("category", self.category)
            .text("description", self.name)
            .text("ocr_text", self.merchant)
            .text("spent_at", self.date);

        if let Some(receipt) = self.receipt {
            let mime = mime_for_filename(&receipt.file_name);
            let part = multipart::Part::bytes(receipt.data)
                .file_name(receipt.file_name)
                .mime_str(mime)
                .map_err(|e| AppError::Configuration(format!("MIMEタイプ設定エラー: {e}")))?;
            form = form.part("image", part);
        }

        Ok(form)
    }
}

/// ファイル名の拡張子からContent-Typeを取得する
pub(crate) fn mime_for_filename(filename: &str) -> &'static str {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

impl SyncEntity for Expense {
    type Raw = RawExpense;

    const ENDPOINT: &'static str = "/expenses/";
    const KIND: &'static str = "経費";

    fn from_raw(raw: RawExpense, position: usize, base_url: &str) -> Self {
        // 最初の領収書画像をサーバーのメディアURLに解決する
        let image_url = raw
            .receipt_images
            .first()
            .map(|img| format!("{base_url}/media/{}", img.file_path));

        Expense {
            id: raw.id,
            name: raw.description.unwrap_or_default(),
            merchant: raw.ocr_text.unwrap_or_default(),
            category: raw.category.unwrap_or_default(),
            amount: format!("{}", raw.amount.unwrap_or(0.0)),
            date: raw.spent_at.unwrap_or_default(),
            reimburse: false,
            receipt_uri: None,
            image_url,
            expense_code: format!("#{}", display_code(position, CODE_WIDTH)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_expense(id: i64) -> RawExpense {
        RawExpense {
            id,
            description: Some("ホテル代".to_string()),
            ocr_text: Some("タージバンガロール".to_string()),
            category: Some("Travel".to_string()),
            amount: Some(5200.0),
            spent_at: Some("2025-10-25T00:00:00".to_string()),
            receipt_images: vec![],
        }
    }

    #[test]
    fn test_from_raw_maps_fields() {
        let expense = Expense::from_raw(raw_expense(12), 1, "http://localhost:8000");

        assert_eq!(expense.id, 12);
        assert_eq!(expense.name, "ホテル代");
        assert_eq!(expense.merchant, "タージバンガロール");
        assert_eq!(expense.category, "Travel");
        assert_eq!(expense.amount, "5200");
        assert_eq!(expense.date, "2025-10-25T00:00:00");
        assert_eq!(expense.expense_code, "#0001");
    }

    #[test]
    fn test_from_raw_fills_missing_optionals() {
        let raw = RawExpense {
            id: 5,
            description: None,
            ocr_text: None,
            category: None,
            amount: None,
            spent_at: None,
            receipt_images: vec![],
        };
        let expense = Expense::from_raw(raw, 3, "http://localhost:8000");

        // 欠けているテキスト項目は空文字列、真偽値はfalseで補完される
        assert_eq!(expense.name, "");
        assert_eq!(expense.merchant, "");
        assert_eq!(expense.category, "");
        assert_eq!(expense.amount, "0");
        assert_eq!(expense.date, "");
        assert!(!expense.reimburse);
        assert_eq!(expense.receipt_uri, None);
        assert_eq!(expense.image_url, None);
        assert_eq!(expense.expense_code, "#0003");
    }

    #[test]
    fn test_from_raw_resolves_image_url() {
        let mut raw = raw_expense(1);
        raw.receipt_images = vec![RawReceiptImage {
            id: 99,
            file_path: "receipts/user1_exp1_receipt.jpg".to_string(),
        }];

        let expense = Expense::from_raw(raw, 1, "http://192.168.1.33:8000");
        assert_eq!(
            expense.image_url.as_deref(),
            Some("http://192.168.1.33:8000/media/receipts/user1_exp1_receipt.jpg")
        );
        // アップロード前参照はフェッチ後は常に空
        assert_eq!(expense.receipt_uri, None);
    }

    #[test]
    fn test_raw_expense_deserialization_with_missing_fields() {
        let json = r#"{"id": 1, "amount": 420.5}"#;
        let raw: RawExpense = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id, 1);
        assert_eq!(raw.amount, Some(420.5));
        assert!(raw.receipt_images.is_empty());
    }

    #[test]
    fn test_mime_for_filename() {
        assert_eq!(mime_for_filename("receipt.jpg"), "image/jpeg");
        assert_eq!(mime_for_filename("receipt.JPEG"), "image/jpeg");
        assert_eq!(mime_for_filename("scan.png"), "image/png");
        assert_eq!(mime_for_filename("invoice.pdf"), "application/pdf");
        assert_eq!(mime_for_filename("noext"), "application/octet-stream");
    }

    #[test]
    fn test_draft_into_form_with_receipt() {
        let draft = ExpenseDraft {
            name: "タクシー代".to_string(),
            merchant: "Ola".to_string(),
            category: "Transport".to_string(),
            amount: "420".to_string(),
            date: "2025-10-26".to_string(),
            receipt: Some(ReceiptFile {
                file_name: "receipt.jpg".to_string(),
                data: vec![0xFF, 0xD8, 0xFF],
            }),
        };

        assert!(draft.into_form().is_ok());
    }
}
