//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 받아 서비스에 위임하고 결과를 응답으로 바꾸는 웹 계층입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   AccessGuard - 토큰 검증, 역할 확인, 토큰 갱신
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈)                             ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증-저장 파이프라인                 ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - SQLite 접근                    ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<AppContext>`에서 서비스를 꺼내 쓰고, 모든 실패는 `AppError`로
//! 전파되어 [`ResponseError`](actix_web::ResponseError) 구현이 상태 코드와 본문을 결정합니다.
//!
//! | 결과 | 응답 |
//! |------|------|
//! | 생성 | 201 + 확인 문구 (text) |
//! | 수정/삭제 | 204 |
//! | 조회 | 200 + JSON |

use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

pub mod auth;
pub mod users;
pub mod destinations;
pub mod bookings;

/// 201 Created + 확인 문구
pub(crate) fn created(message: &'static str) -> HttpResponse {
    HttpResponse::Created()
        .content_type(ContentType::plaintext())
        .body(message)
}
