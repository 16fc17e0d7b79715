//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 각 엔티티는 관계형 저장소의 테이블 한 행과 1:1로 대응합니다.
//!
//! ```text
//! user 1 ──── * booking * ──── 1 destination
//! ```
//!
//! - [`users`] - 사용자 계정과 역할 (`ADMIN` | `USER`)
//! - [`destinations`] - 예약 가능한 여행지
//! - [`bookings`] - 사용자와 여행지를 잇는 예약
//!
//! ## 직렬화 규칙
//!
//! - JSON 필드명은 camelCase (`maxGuests`, `createdAt`)
//! - 컬럼명은 snake_case (`max_guests`, `created_at`), `sqlx::FromRow`로 매핑
//! - 비밀번호 해시와 외래 키 컬럼은 응답 본문에 포함되지 않습니다

pub mod users;
pub mod destinations;
pub mod bookings;

pub use users::*;
pub use destinations::*;
pub use bookings::*;
