use crate::features::sync::SyncEntity;
use crate::shared::utils::{display_code, CODE_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 出張の種別
///
/// サーバー上は自由形式の文字列のため、既知の値以外は
/// `Other` としてそのまま保持します。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TravelType {
    Domestic,
    International,
    Other(String),
}

impl From<String> for TravelType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Domestic" => TravelType::Domestic,
            "International" => TravelType::International,
            _ => TravelType::Other(value),
        }
    }
}

impl From<TravelType> for String {
    fn from(value: TravelType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TravelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelType::Domestic => write!(f, "Domestic"),
            TravelType::International => write!(f, "International"),
            TravelType::Other(value) => write!(f, "{value}"),
        }
    }
}

impl Default for TravelType {
    fn default() -> Self {
        TravelType::Other(String::new())
    }
}

/// 出張データモデル（ローカル形式）
///
/// `trip_code` は一覧の並び順から導出される表示専用のコードです。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: i64,
    /// 表示コード（0001形式）
    pub trip_code: String,
    pub name: String,
    pub purpose: String,
    pub travel_type: TravelType,
    pub from_date: String,
    pub to_date: String,
    pub created_at: String,
    /// 承認フローのステータス（自由形式の文字列）
    pub status: String,
}

/// サーバーから返される生の出張レコード
#[derive(Debug, Deserialize)]
pub struct RawTrip {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub travel_type: Option<String>,
    #[serde(default)]
    pub from_date: Option<String>,
    #[serde(default)]
    pub to_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// 出張の作成入力
#[derive(Debug, Clone, Serialize)]
pub struct TripDraft {
    pub name: String,
    pub purpose: Option<String>,
    pub travel_type: TravelType,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub status: Option<String>,
}

impl SyncEntity for Trip {
    type Raw = RawTrip;

    const ENDPOINT: &'static str = "/trips/";
    const KIND: &'static str = "出張";

    fn from_raw(raw: RawTrip, position: usize, _base_url: &str) -> Self {
        Trip {
            id: raw.id,
            trip_code: display_code(position, CODE_WIDTH),
            name: raw.name.unwrap_or_default(),
            purpose: raw.purpose.unwrap_or_default(),
            travel_type: TravelType::from(raw.travel_type.unwrap_or_default()),
            from_date: raw.from_date.unwrap_or_default(),
            to_date: raw.to_date.unwrap_or_default(),
            created_at: raw.created_at.unwrap_or_default(),
            status: raw.status.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_type_parsing() {
        assert_eq!(TravelType::from("Domestic".to_string()), TravelType::Domestic);
        assert_eq!(
            TravelType::from("International".to_string()),
            TravelType::International
        );
        assert_eq!(
            TravelType::from("Bleisure".to_string()),
            TravelType::Other("Bleisure".to_string())
        );
    }

    #[test]
    fn test_travel_type_serializes_as_string() {
        let json = serde_json::to_string(&TravelType::Domestic).unwrap();
        assert_eq!(json, r#""Domestic""#);

        let parsed: TravelType = serde_json::from_str(r#""International""#).unwrap();
        assert_eq!(parsed, TravelType::International);
    }

    #[test]
    fn test_from_raw_assigns_position_code() {
        let raw = RawTrip {
            id: 42,
            name: Some("クライアント訪問".to_string()),
            purpose: Some("Client Meeting".to_string()),
            travel_type: Some("Domestic".to_string()),
            from_date: Some("2025-09-12".to_string()),
            to_date: Some("2025-09-14".to_string()),
            created_at: Some("2025-09-01T00:00:00".to_string()),
            status: Some("Pending".to_string()),
        };

        let trip = Trip::from_raw(raw, 2, "http://localhost:8000");
        assert_eq!(trip.id, 42);
        // 表示コードはidではなく位置から決まる（#なし）
        assert_eq!(trip.trip_code, "0002");
        assert_eq!(trip.travel_type, TravelType::Domestic);
        assert_eq!(trip.status, "Pending");
    }

    #[test]
    fn test_from_raw_fills_missing_optionals() {
        let raw = RawTrip {
            id: 1,
            name: None,
            purpose: None,
            travel_type: None,
            from_date: None,
            to_date: None,
            created_at: None,
            status: None,
        };

        let trip = Trip::from_raw(raw, 1, "http://localhost:8000");
        assert_eq!(trip.name, "");
        assert_eq!(trip.purpose, "");
        assert_eq!(trip.travel_type, TravelType::Other(String::new()));
        assert_eq!(trip.status, "");
    }

    #[test]
    fn test_trip_draft_serializes_wire_fields() {
        let draft = TripDraft {
            name: "カンファレンス".to_string(),
            purpose: Some("Conference".to_string()),
            travel_type: TravelType::International,
            from_date: Some("2025-08-05".to_string()),
            to_date: None,
            status: Some("Pending".to_string()),
        };

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["name"], "カンファレンス");
        assert_eq!(json["travel_type"], "International");
        assert_eq!(json["to_date"], serde_json::Value::Null);
    }
}
