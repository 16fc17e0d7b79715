//! 예약 관리 백엔드 메인 애플리케이션
//!
//! SQLite 저장소를 연결하고 스키마 동기화와 기본 데이터 생성을 마친 뒤,
//! JWT 접근 가드가 적용된 REST API를 Actix-web HTTP 서버로 제공합니다.

use std::io;
use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use booking_service_backend::config::{AppConfig, ServerConfig};
use booking_service_backend::core::context::AppContext;
use booking_service_backend::core::errors::AppResult;
use booking_service_backend::db::{seed, Database};
use booking_service_backend::middlewares::{security_headers, AUTH_HEADER, TOKEN_HEADER};
use booking_service_backend::routes::configure_all_routes;
use booking_service_backend::utils::display_terminal::{
    print_boxed_title, print_step_complete, print_step_start, print_sub_task,
};

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("Booking Service Backend");
    info!("🚀 예약 관리 서비스 시작중...");

    let config = AppConfig::from_env();
    info!("실행 환경: {:?}", config.environment);

    let context = initialize_context(&config).await.map_err(|e| {
        error!("❌ 서비스 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(web::Data::new(context)).await
}

/// 저장소 연결 → 스키마 동기화 → 서비스 조립 → 기본 데이터 생성
async fn initialize_context(config: &AppConfig) -> AppResult<AppContext> {
    print_step_start(1, "데이터베이스 연결");
    let database = Database::connect(&config.database).await?;
    print_step_complete(1, "데이터베이스 연결", &config.database.url);

    print_step_start(2, "스키마 동기화");
    database.sync_schema().await?;
    print_step_complete(2, "스키마 동기화", "user, destination, booking");

    let context = AppContext::new(database, config);

    print_step_start(3, "기본 데이터 생성");
    seed::run(&context, &config.seed).await?;
    print_sub_task("관리자 계정", &config.seed.admin_username);
    print_sub_task("샘플 여행지", if config.seed.sample_data { "on" } else { "off" });
    print_step_complete(3, "기본 데이터 생성", "");

    Ok(context)
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 보안 헤더, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(context: web::Data<AppContext>) -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api", bind_address);

    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = ServerConfig::cors_allowed_origins();

    HttpServer::new(move || {
        App::new()
            .app_data(context.clone())
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(security_headers())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 요청의 `auth` 헤더를 허용하고, 응답의 `token` 헤더를 브라우저에 노출합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .allowed_header(HeaderName::from_static(AUTH_HEADER))
        .expose_headers(vec![HeaderName::from_static(TOKEN_HEADER)])
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
