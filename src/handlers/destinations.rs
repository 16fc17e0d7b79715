//! 여행지 엔드포인트 (`/api/destinations`)
//!
//! 조회는 ADMIN/USER, 변경은 ADMIN만 가능합니다.
//! 목록과 단건 조회는 해당 여행지의 예약을 ID 내림차순으로 포함합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::Value;
use crate::core::context::AppContext;
use crate::core::errors::AppError;
use crate::handlers::created;
use crate::services::destinations::MESSAGES;

#[get("")]
pub async fn list_destinations(context: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let destinations = context.destinations.list().await?;

    Ok(HttpResponse::Ok().json(destinations))
}

#[get("/{id}")]
pub async fn get_destination(
    context: web::Data<AppContext>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let destination = context.destinations.get(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(destination))
}

/// 여행지 생성
///
/// `description`이 없으면 기본 문구, `available`이 없으면 `true`로 저장됩니다.
/// 같은 이름의 여행지가 있으면 409 `"Destination already exist"`.
#[post("")]
pub async fn create_destination(
    context: web::Data<AppContext>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    context.destinations.create(&payload).await?;

    Ok(created(MESSAGES.created))
}

#[put("/{id}")]
pub async fn update_destination(
    context: web::Data<AppContext>,
    id: web::Path<i64>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    context.destinations.update(id.into_inner(), &payload).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[delete("/{id}")]
pub async fn delete_destination(
    context: web::Data<AppContext>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    context.destinations.delete(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
