//! # Core Module
//!
//! 백엔드 전반에서 공유하는 기반 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`context`] - 애플리케이션 컨텍스트
//! - **AppContext**: 저장소 핸들과 서비스 인스턴스를 시작 시 명시적으로 조립
//! - **주입**: `web::Data<AppContext>`로 핸들러/미들웨어에 전달
//! - **테스트 격리**: 테스트마다 인메모리 컨텍스트를 새로 생성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **자동 변환**: `thiserror` 기반, `sqlx::Error` → `DatabaseError`
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{get, web, HttpResponse};
//! use crate::core::{context::AppContext, errors::AppError};
//!
//! #[get("")]
//! async fn list(context: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
//!     let destinations = context.destinations.list().await?;
//!     Ok(HttpResponse::Ok().json(destinations))
//! }
//! ```

pub mod context;
pub mod errors;

pub use context::AppContext;
pub use errors::{AppError, AppResult};
