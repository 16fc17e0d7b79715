//! # Application Error Handling System
//!
//! 예약 관리 백엔드의 통합 에러 처리 시스템입니다.
//! 모든 컨트롤러는 저장소/조회 실패를 가장 가까운 `AppError` 변형으로 변환하며,
//! `actix_web::ResponseError` 구현이 이를 HTTP 응답으로 바꿉니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `ValidationError` | 400 Bad Request | 짧은 텍스트 |
//! | `InvalidEntity` | 400 Bad Request | 필드 위반 목록 (JSON) |
//! | `AuthenticationError` | 401 Unauthorized | 없음 |
//! | `AuthorizationError` | 401 Unauthorized | 없음 |
//! | `NotFound` | 404 Not Found | 짧은 텍스트 |
//! | `ConflictError` | 409 Conflict | 짧은 텍스트 |
//! | `DatabaseError` | 500 Internal Server Error | 고정 텍스트 |
//! | `InternalError` | 500 Internal Server Error | 고정 텍스트 |
//!
//! 인증 실패와 권한 부족은 호출자 입장에서 구분되지 않습니다.
//! 두 경우 모두 같은 상태 코드와 빈 본문으로 응답합니다.
//!
//! 5xx 에러의 상세 내용은 서버 로그에만 기록되고 클라이언트에는 노출되지 않습니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_destination(&self, id: i64) -> AppResult<Destination> {
//!     self.destinations
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("Destination not found".to_string()))
//! }
//! ```

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;
use crate::validation::FieldViolation;

/// 5xx 응답에 사용하는 고정 메시지
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?`로 전파된 에러가 그대로 HTTP 응답이 됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 잘못된 입력 (누락된 필드, 잘못된 형식, 잘못된 참조)
    ///
    /// 메시지가 그대로 응답 본문이 됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 엔티티 스키마 검증 실패
    ///
    /// 위반된 모든 규칙의 목록을 JSON 배열로 응답합니다.
    #[error("Entity validation failed with {} violation(s)", .0.len())]
    InvalidEntity(Vec<FieldViolation>),

    /// 인증 실패 (토큰 없음/만료/위조, 잘못된 자격 증명)
    ///
    /// 메시지는 로그용이며 응답 본문은 비어 있습니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족
    ///
    /// `AuthenticationError`와 동일하게 401 + 빈 본문으로 응답합니다.
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 요청한 ID에 해당하는 행이 없음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 유니크 제약 조건 위반
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 저장소 연산 실패
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 예상하지 못한 내부 오류 (토큰 서명 실패, 해싱 실패 등)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidEntity(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) | AppError::AuthorizationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());

        match self {
            AppError::InvalidEntity(violations) => response.json(violations),
            AppError::AuthenticationError(_) | AppError::AuthorizationError(_) => response.finish(),
            AppError::ValidationError(message)
            | AppError::NotFound(message)
            | AppError::ConflictError(message) => response
                .content_type(ContentType::plaintext())
                .body(message.clone()),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                log::error!("요청 처리 중 내부 오류 발생: {}", self);
                response
                    .content_type(ContentType::plaintext())
                    .body(INTERNAL_SERVER_ERROR_MESSAGE)
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hash = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;
    use std::collections::BTreeMap;

    async fn body_of(error: AppError) -> (StatusCode, String) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn test_validation_error_response() {
        let (status, body) = body_of(AppError::ValidationError("Provide valid user for booking".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Provide valid user for booking");
    }

    #[actix_web::test]
    async fn test_invalid_entity_response_lists_violations() {
        let mut constraints = BTreeMap::new();
        constraints.insert("isString".to_string(), "name must be a string".to_string());
        let violation = FieldViolation {
            property: "name".to_string(),
            value: serde_json::Value::Null,
            constraints,
        };

        let (status, body) = body_of(AppError::InvalidEntity(vec![violation])).await;
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parsed[0]["property"], "name");
        assert_eq!(parsed[0]["constraints"]["isString"], "name must be a string");
    }

    #[actix_web::test]
    async fn test_auth_failures_are_indistinguishable() {
        let (authn_status, authn_body) = body_of(AppError::AuthenticationError("token expired".to_string())).await;
        let (authz_status, authz_body) = body_of(AppError::AuthorizationError("role USER not allowed".to_string())).await;

        assert_eq!(authn_status, StatusCode::UNAUTHORIZED);
        assert_eq!(authn_status, authz_status);
        assert!(authn_body.is_empty());
        assert_eq!(authn_body, authz_body);
    }

    #[actix_web::test]
    async fn test_not_found_and_conflict_bodies() {
        let (status, body) = body_of(AppError::NotFound("User not found".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "User not found");

        let (status, body) = body_of(AppError::ConflictError("Destination already exist".to_string())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, "Destination already exist");
    }

    #[actix_web::test]
    async fn test_internal_errors_hide_details() {
        let (status, body) = body_of(AppError::DatabaseError("no such table: booking".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, INTERNAL_SERVER_ERROR_MESSAGE);
        assert!(!body.contains("booking"));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
