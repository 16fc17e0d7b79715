//! API 라우트 설정 모듈
//!
//! 리소스별 `web::scope`에 접근 가드를 씌워 등록합니다.
//!
//! | 경로 | 가드 정책 |
//! |------|-----------|
//! | `POST /api/auth/login` | 없음 (공개) |
//! | `POST /api/auth/change-password` | [`AccessPolicy::PASSWORD_CHANGE`] |
//! | `/api/users` | [`AccessPolicy::USER_ADMINISTRATION`] |
//! | `/api/destinations` | [`AccessPolicy::DESTINATIONS`] |
//! | `/api/bookings` | [`AccessPolicy::BOOKINGS`] |
//! | `GET /health` | 없음 |
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(context))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{web, HttpResponse};
use serde_json::json;
use crate::core::context::AppContext;
use crate::core::errors::AppError;
use crate::domain::models::AccessPolicy;
use crate::handlers;
use crate::middlewares::AccessGuard;
use crate::services::pipeline::ResourceMessages;
use crate::services::{bookings, destinations, users};

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_destination_routes(cfg);
    configure_booking_routes(cfg);
}

/// 본문 파싱 실패를 400 텍스트 응답으로 바꿉니다
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::debug!("요청 본문 파싱 실패: {} {} - {}", req.method(), req.path(), err);
        AppError::ValidationError(err.to_string()).into()
    })
}

/// 숫자가 아닌 ID 경로를 리소스의 404 문구로 바꿉니다
fn path_config(messages: ResourceMessages) -> web::PathConfig {
    web::PathConfig::default().error_handler(move |err, req| {
        log::debug!("경로 파라미터 파싱 실패: {} {} - {}", req.method(), req.path(), err);
        messages.not_found().into()
    })
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::login)
            .service(
                web::resource("/change-password")
                    .wrap(AccessGuard::new(AccessPolicy::PASSWORD_CHANGE))
                    .route(web::post().to(handlers::auth::change_password)),
            ),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .app_data(path_config(users::MESSAGES))
            .wrap(AccessGuard::new(AccessPolicy::USER_ADMINISTRATION))
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::create_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

fn configure_destination_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/destinations")
            .app_data(path_config(destinations::MESSAGES))
            .wrap(AccessGuard::new(AccessPolicy::DESTINATIONS))
            .service(handlers::destinations::list_destinations)
            .service(handlers::destinations::get_destination)
            .service(handlers::destinations::create_destination)
            .service(handlers::destinations::update_destination)
            .service(handlers::destinations::delete_destination),
    );
}

fn configure_booking_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/bookings")
            .app_data(path_config(bookings::MESSAGES))
            .wrap(AccessGuard::new(AccessPolicy::BOOKINGS))
            .service(handlers::bookings::list_bookings)
            .service(handlers::bookings::get_booking)
            .service(handlers::bookings::create_booking)
            .service(handlers::bookings::update_booking)
            .service(handlers::bookings::delete_booking),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 데이터베이스에 `SELECT 1`을 보내 연결 상태를 함께 보고합니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "booking_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "database": "up"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(context: web::Data<AppContext>) -> HttpResponse {
    let database_up = sqlx::query("SELECT 1")
        .execute(context.database().pool())
        .await
        .map_err(|e| log::error!("❌ 헬스체크 DB 확인 실패: {}", e))
        .is_ok();

    HttpResponse::Ok().json(json!({
        "status": if database_up { "healthy" } else { "degraded" },
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "database": if database_up { "up" } else { "down" },
    }))
}
