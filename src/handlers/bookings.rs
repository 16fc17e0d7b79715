//! 예약 엔드포인트 (`/api/bookings`, ADMIN/USER)
//!
//! 목록과 단건 조회는 예약된 여행지를 `destination` 필드에 포함합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::Value;
use crate::core::context::AppContext;
use crate::core::errors::AppError;
use crate::domain::models::AuthenticatedUser;
use crate::handlers::created;
use crate::services::bookings::MESSAGES;

#[get("")]
pub async fn list_bookings(context: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let bookings = context.bookings.list().await?;

    Ok(HttpResponse::Ok().json(bookings))
}

#[get("/{id}")]
pub async fn get_booking(
    context: web::Data<AppContext>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let booking = context.bookings.get(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(booking))
}

/// 예약 생성
///
/// `destinationId`는 필수이며, `userId`를 생략하면 요청한 사용자가 소유자가 됩니다.
/// 참조가 잘못되면 400 `"Provide valid user for booking"` /
/// `"Provide valid destination for booking"`.
#[post("")]
pub async fn create_booking(
    context: web::Data<AppContext>,
    caller: AuthenticatedUser,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    context.bookings.create(&caller, &payload).await?;

    Ok(created(MESSAGES.created))
}

#[put("/{id}")]
pub async fn update_booking(
    context: web::Data<AppContext>,
    id: web::Path<i64>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    context.bookings.update(id.into_inner(), &payload).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[delete("/{id}")]
pub async fn delete_booking(
    context: web::Data<AppContext>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    context.bookings.delete(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
