//! Users Entity Module
//!
//! 사용자 계정 엔티티와 닫힌 역할 집합을 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{Role, User};
//!
//! if user.role == Role::Admin {
//!     // 관리자 전용 처리
//! }
//! ```

pub mod user;
pub mod role;

pub use user::User;
pub use role::Role;
