use serde::Serialize;
use crate::domain::entities::users::{Role, User};

/// 사용자 조회 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub role: Role,
    /// 예약 ID 내림차순, 즉시 로딩된 경우에만 포함
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookings: Option<Vec<UserBookingSummary>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserBookingSummary {
    pub id: i64,
    pub destination: BookedDestination,
}

/// 예약된 여행지의 요약 정보
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookedDestination {
    pub name: String,
    pub description: String,
    pub available: bool,
}

impl UserSummary {
    pub fn shallow(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            bookings: None,
        }
    }

    pub fn with_bookings(user: User, bookings: Vec<UserBookingSummary>) -> Self {
        Self {
            bookings: Some(bookings),
            ..Self::shallow(user)
        }
    }
}
