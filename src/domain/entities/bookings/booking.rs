//! Booking Entity Implementation

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// 예약 엔티티
///
/// 정확히 한 명의 사용자와 하나의 여행지를 참조합니다.
/// 참조 키는 응답 본문에 노출하지 않으며, 여행지는 필요할 때 레코드에 함께 실립니다.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub cost: f64,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub user_id: i64,
    #[serde(skip)]
    pub destination_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_keys_are_hidden() {
        let at = DateTime::parse_from_rfc3339("2022-03-26T00:15:23.138Z")
            .unwrap()
            .with_timezone(&Utc);
        let booking = Booking {
            id: 1,
            start_date: at,
            end_date: at,
            cost: 100.0,
            created_at: at,
            user_id: 1,
            destination_id: 2,
        };

        let json = serde_json::to_value(&booking).unwrap();

        assert_eq!(json["startDate"], "2022-03-26T00:15:23.138Z");
        assert!(json.get("userId").is_none());
        assert!(json.get("destinationId").is_none());
    }
}
