//! # Service Layer
//!
//! 핸들러와 리포지토리 사이의 비즈니스 로직 계층입니다.
//!
//! ```text
//! handlers ──▶ services ──▶ repositories ──▶ SQLite
//!                 │
//!                 └── pipeline (초안 구성 → 검증 → 저장 → 응답 문구)
//! ```
//!
//! 서비스 인스턴스는 시작 시 [`AppContext`](crate::core::context::AppContext)에서
//! 한 번 만들어지고, 핸들러는 `web::Data<AppContext>`를 통해 접근합니다.

pub mod pipeline;
pub mod auth;
pub mod users;
pub mod destinations;
pub mod bookings;

pub use auth::{AuthService, PasswordHasher, TokenService};
pub use users::UserService;
pub use destinations::DestinationService;
pub use bookings::BookingService;
