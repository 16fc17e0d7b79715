use serde::Serialize;
use crate::domain::entities::{Booking, Destination};

/// 예약 조회 응답
///
/// 즉시 로딩된 경우 예약된 여행지가 `destination`으로 함께 실립니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRecord {
    #[serde(flatten)]
    pub booking: Booking,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,
}

impl BookingRecord {
    pub fn shallow(booking: Booking) -> Self {
        Self {
            booking,
            destination: None,
        }
    }

    pub fn with_destination(booking: Booking, destination: Destination) -> Self {
        Self {
            booking,
            destination: Some(destination),
        }
    }
}
