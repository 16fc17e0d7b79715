//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다.
//!
//! | 종류 | 역할 |
//! |------|------|
//! | `request` | 인증 요청 본문, 검증 전 엔티티 초안 (`*Draft`) |
//! | `response` | 목록/단건 조회 응답 (관계를 포함한 레코드, 프로젝션) |
//!
//! 초안(`*Draft`)은 [`crate::validation::Draft`]를 구현하며 스키마 검증을 통과해야만
//! 타입이 있는 값으로 만들어집니다. 인증 요청은 `validator` derive로 필수 필드만 확인합니다.
//!
//! 모든 JSON 필드명은 camelCase입니다.

pub mod auth;
pub mod users;
pub mod destinations;
pub mod bookings;

pub use auth::{ChangePasswordRequest, LoginRequest};
pub use users::{BookedDestination, UserBookingSummary, UserDraft, UserSummary};
pub use destinations::{DestinationDraft, DestinationRecord};
pub use bookings::{BookingDraft, BookingRecord};
