//! # User Management HTTP Handlers
//!
//! 관리자 전용 사용자 CRUD 엔드포인트입니다. (`/api/users`, ADMIN 역할)
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users` | 사용자 목록 (예약 요약 포함) | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 OK / 404 |
//! | `POST` | `/users` | 사용자 생성 | 201 Created (`"User created"`) |
//! | `PUT` | `/users/{id}` | `username`, `role` 수정 | 204 No Content |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 204 No Content / 404 |
//!
//! 응답에는 비밀번호 해시가 포함되지 않습니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::Value;
use crate::core::context::AppContext;
use crate::core::errors::AppError;
use crate::handlers::created;
use crate::services::users::MESSAGES;

#[get("")]
pub async fn list_users(context: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let users = context.users.list().await?;

    Ok(HttpResponse::Ok().json(users))
}

#[get("/{id}")]
pub async fn get_user(
    context: web::Data<AppContext>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = context.users.get(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 생성 핸들러
///
/// 본문은 스키마 검증을 거친 뒤 저장됩니다. 이름이 중복되면 409를 반환합니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/users \
///   -H "auth: <token>" -H "Content-Type: application/json" \
///   -d '{"username":"traveler","password":"secret","role":"USER"}'
/// ```
#[post("")]
pub async fn create_user(
    context: web::Data<AppContext>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    context.users.create(&payload).await?;

    Ok(created(MESSAGES.created))
}

#[put("/{id}")]
pub async fn update_user(
    context: web::Data<AppContext>,
    id: web::Path<i64>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    context.users.update(id.into_inner(), &payload).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 사용자 삭제 핸들러
///
/// 사용자가 소유한 예약도 함께 삭제됩니다.
#[delete("/{id}")]
pub async fn delete_user(
    context: web::Data<AppContext>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    context.users.delete(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
