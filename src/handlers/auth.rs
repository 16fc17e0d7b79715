//! 인증 관련 HTTP 핸들러
//!
//! - `POST /api/auth/login` (공개) - 토큰을 text 본문으로 반환
//! - `POST /api/auth/change-password` (ADMIN) - 호출자 본인의 비밀번호 변경

use actix_web::http::header::ContentType;
use actix_web::{post, web, HttpResponse};
use crate::core::context::AppContext;
use crate::core::errors::AppError;
use crate::domain::dto::auth::{ChangePasswordRequest, LoginRequest};
use crate::domain::models::AuthenticatedUser;

/// 로그인 핸들러
///
/// # Responses
///
/// * `200` - 본문이 토큰 문자열
/// * `400` - `username` 또는 `password` 누락
/// * `401` - 알 수 없는 사용자 또는 잘못된 비밀번호 (빈 본문)
///
/// ```bash
/// curl -X POST http://localhost:8080/api/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"username":"admin","password":"admin"}'
/// ```
#[post("/login")]
pub async fn login(
    context: web::Data<AppContext>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let token = context.auth.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(token))
}

/// 비밀번호 변경 핸들러
///
/// 기존 비밀번호가 일치하지 않으면 401, 새 비밀번호가 사용자 스키마를 통과하지 못하면 400.
/// 접근 가드를 리소스 단위로 씌우기 위해 매크로 없이 `web::resource`로 등록합니다.
pub async fn change_password(
    context: web::Data<AppContext>,
    caller: AuthenticatedUser,
    payload: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse, AppError> {
    context
        .auth
        .change_password(&caller, payload.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
