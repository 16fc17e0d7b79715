use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use crate::domain::entities::Booking;
use crate::validation::rules::parse_iso8601;
use crate::validation::{Draft, Rule, Schema};

/// 예약 초안
///
/// 사용자와 여행지 참조는 검증 전에 별도로 해석되므로 초안에 포함되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    #[serde(deserialize_with = "iso8601")]
    pub start_date: DateTime<Utc>,
    #[serde(deserialize_with = "iso8601")]
    pub end_date: DateTime<Utc>,
    pub cost: f64,
}

impl BookingDraft {
    /// 생성/수정 요청에서 덮어쓰는 필드
    pub const FIELDS: &'static [&'static str] = &["startDate", "endDate", "cost"];

    /// 요청 본문에서 참조 ID를 읽습니다.
    ///
    /// 숫자와 숫자 문자열(`"3"`)을 모두 허용합니다.
    pub fn reference(payload: &Value, key: &str) -> Option<i64> {
        match payload.get(key)? {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }
}

/// 날짜만 있거나 오프셋이 없는 ISO 8601 문자열도 UTC 시각으로 받습니다.
fn iso8601<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_iso8601(&text).ok_or_else(|| de::Error::custom(format!("invalid ISO 8601 date: {}", text)))
}

impl Draft for BookingDraft {
    const SCHEMA: Schema = &[
        ("startDate", &[Rule::IsDateString]),
        ("endDate", &[Rule::IsDateString]),
        ("cost", &[Rule::NotEmpty, Rule::IsNumber]),
    ];
}

impl From<&Booking> for BookingDraft {
    fn from(booking: &Booking) -> Self {
        Self {
            start_date: booking.start_date,
            end_date: booking.end_date,
            cost: booking.cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_accepts_numbers_and_numeric_strings() {
        let payload = json!({ "destinationId": 3, "userId": "7", "other": "x" });

        assert_eq!(BookingDraft::reference(&payload, "destinationId"), Some(3));
        assert_eq!(BookingDraft::reference(&payload, "userId"), Some(7));
        assert_eq!(BookingDraft::reference(&payload, "other"), None);
        assert_eq!(BookingDraft::reference(&payload, "missing"), None);
    }

    #[test]
    fn test_date_only_values_become_utc_midnight() {
        let draft: BookingDraft = serde_json::from_value(json!({
            "startDate": "2022-03-26",
            "endDate": "2022-03-28T12:30:00",
            "cost": 200,
        }))
        .unwrap();

        assert_eq!(draft.start_date.to_rfc3339(), "2022-03-26T00:00:00+00:00");
        assert_eq!(draft.end_date.to_rfc3339(), "2022-03-28T12:30:00+00:00");
    }
}
