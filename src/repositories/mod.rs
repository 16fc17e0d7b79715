//! # Repository Layer
//!
//! 관계형 저장소에 대한 데이터 액세스 계층입니다.
//! 각 리포지토리는 [`Database`](crate::db::Database)를 복제해 들고 있으며
//! 쿼리 결과를 도메인 엔티티나 응답 레코드로 변환합니다.
//!
//! ## 관계 로딩
//!
//! 관계를 함께 읽을지는 쿼리마다 [`Load`] 인자로 명시합니다.
//!
//! ```rust,ignore
//! let destinations = repo.find_all(Load::Eager).await?;   // bookings 포함
//! let destination = repo.find_by_id(id).await?;           // 엔티티만
//! ```
//!
//! ## 에러 분류
//!
//! 저장소 에러는 [`StoreError`]로 분류됩니다. 유니크/외래 키 제약 위반은
//! 서비스 계층에서 리소스별 응답(409, 400)으로 바뀌고, 나머지는 500이 됩니다.

pub mod users;
pub mod destinations;
pub mod bookings;

pub use users::UserRepository;
pub use destinations::DestinationRepository;
pub use bookings::BookingRepository;

use chrono::{DateTime, SubsecRound, Utc};
use thiserror::Error;
use crate::core::errors::AppError;

/// 관계 로딩 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Load {
    /// 엔티티 자신의 컬럼만
    Shallow,
    /// 연관 레코드까지 함께
    Eager,
}

/// 저장소 연산 에러
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated")]
    UniqueViolation,

    #[error("foreign key constraint violated")]
    ForeignKeyViolation,

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_error) = &error {
            if db_error.is_unique_violation() {
                return StoreError::UniqueViolation;
            }
            if db_error.is_foreign_key_violation() {
                return StoreError::ForeignKeyViolation;
            }
        }
        StoreError::Database(error)
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// 저장용 현재 시각 (밀리초 단위로 절삭)
pub(crate) fn timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
