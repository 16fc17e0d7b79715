//! # Authentication Services
//!
//! - [`TokenService`] - HS256 토큰 발급/검증/갱신
//! - [`PasswordHasher`] - bcrypt 해싱과 검증
//! - [`AuthService`] - 로그인, 비밀번호 변경, 역할 확인

pub mod token_service;
pub mod password_hasher;
pub mod auth_service;

pub use token_service::TokenService;
pub use password_hasher::PasswordHasher;
pub use auth_service::AuthService;
