//! # Middlewares
//!
//! - [`AccessGuard`] - `auth` 헤더 토큰 검증, 역할 기반 인가, 토큰 자동 갱신
//! - [`security_headers`] - 브라우저 보안 응답 헤더

pub mod access_guard;
pub mod guard_inner;
pub mod security_headers;

pub use access_guard::AccessGuard;
pub use guard_inner::{AUTH_HEADER, TOKEN_HEADER};
pub use security_headers::security_headers;
