use crate::features::sync::SyncEntity;
use crate::shared::utils::{display_code, CODE_WIDTH};
use serde::{Deserialize, Serialize};

/// 経費レポートデータモデル（ローカル形式）
///
/// `report_code` は一覧の並び順から導出される表示専用のコードです。
/// `trip_id` は関連する出張への任意の外部キーです。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    /// 表示コード（0001形式）
    pub report_code: String,
    pub report_name: String,
    pub purpose: String,
    pub from_date: String,
    pub to_date: String,
    pub status: String,
    pub trip_id: Option<i64>,
}

/// サーバーから返される生のレポートレコード
#[derive(Debug, Deserialize)]
pub struct RawReport {
    pub id: i64,
    #[serde(default)]
    pub report_name: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub from_date: Option<String>,
    #[serde(default)]
    pub to_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub trip_id: Option<i64>,
}

/// レポートの作成入力
#[derive(Debug, Clone, Serialize)]
pub struct ReportDraft {
    pub report_name: String,
    pub purpose: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub status: Option<String>,
    pub trip_id: Option<i64>,
}

impl SyncEntity for Report {
    type Raw = RawReport;

    const ENDPOINT: &'static str = "/reports/";
    const KIND: &'static str = "レポート";

    fn from_raw(raw: RawReport, position: usize, _base_url: &str) -> Self {
        Report {
            id: raw.id,
            report_code: display_code(position, CODE_WIDTH),
            report_name: raw.report_name.unwrap_or_default(),
            purpose: raw.purpose.unwrap_or_default(),
            from_date: raw.from_date.unwrap_or_default(),
            to_date: raw.to_date.unwrap_or_default(),
            status: raw.status.unwrap_or_default(),
            trip_id: raw.trip_id,
        }
    }
}
