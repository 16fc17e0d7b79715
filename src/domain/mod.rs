//! # Domain Layer Module
//!
//! 예약 관리 도메인의 핵심 타입을 모아 둔 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 테이블과 1:1 대응하는 영속 객체 (User, Destination, Booking)
//! ├── dto       - 요청 초안과 응답 레코드
//! └── models    - 토큰 클레임, 인증된 사용자, 접근 정책
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```
//!
//! 도메인 계층은 HTTP나 저장소 구현에 의존하지 않습니다.
//! 예외는 `FromRequest` 추출기로 쓰이는 [`models::AuthenticatedUser`]와
//! `sqlx::FromRow` 매핑 derive 정도입니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Booking, Destination, Role, User};
pub use models::{AccessPolicy, AuthenticatedUser, TokenClaims};
