//! # Domain Models Module
//!
//! 영속되지 않는 인증 관련 값 객체를 정의합니다.
//!
//! - [`token::TokenClaims`] - 토큰에 실리는 신원 클레임 (`userId`, `username`)
//! - [`auth::AuthenticatedUser`] - 접근 가드를 통과한 요청의 사용자 정보
//! - [`auth::AccessPolicy`] - 라우트 그룹별 허용 역할 표

pub mod auth;
pub mod token;

pub use auth::{AccessPolicy, AuthenticatedUser};
pub use token::TokenClaims;
