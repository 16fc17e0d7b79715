use serde::Serialize;
use crate::domain::entities::{Booking, Destination};

/// 여행지 조회 응답
///
/// 즉시 로딩된 경우 해당 여행지의 예약 목록(ID 내림차순)이 `bookings`로 함께 실립니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestinationRecord {
    #[serde(flatten)]
    pub destination: Destination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookings: Option<Vec<Booking>>,
}

impl DestinationRecord {
    pub fn shallow(destination: Destination) -> Self {
        Self {
            destination,
            bookings: None,
        }
    }

    pub fn with_bookings(destination: Destination, bookings: Vec<Booking>) -> Self {
        Self {
            destination,
            bookings: Some(bookings),
        }
    }
}
