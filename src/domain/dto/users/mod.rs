//! # User DTOs Module
//!
//! 사용자 관리 API의 요청/응답 구조를 정의합니다.
//!
//! - [`request::UserDraft`] - 생성/수정 시 검증되는 사용자 초안
//! - [`response::UserSummary`] - 목록/단건 조회 프로젝션
//!   (`id, username, role, bookings[{id, destination{name, description, available}}]`)
//!
//! 조회 응답에는 비밀번호 해시와 타임스탬프가 포함되지 않습니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
