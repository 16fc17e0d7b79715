//! 애플리케이션 컨텍스트
//!
//! 저장소 핸들, 서명 키, 서비스 인스턴스를 시작 시 한 번 명시적으로 조립합니다.
//! `web::Data<AppContext>`로 핸들러와 미들웨어에 주입되며 전역 상태는 없습니다.
//! 테스트는 각자 인메모리 데이터베이스를 가진 컨텍스트를 만듭니다.
//!
//! ```rust,ignore
//! let database = Database::connect(&config.database).await?;
//! let context = web::Data::new(AppContext::new(database, &config));
//!
//! HttpServer::new(move || App::new().app_data(context.clone()) /* ... */)
//! ```

use std::sync::Arc;
use crate::config::AppConfig;
use crate::db::{self, Database};
use crate::repositories::{BookingRepository, DestinationRepository, UserRepository};
use crate::services::{
    AuthService, BookingService, DestinationService, PasswordHasher, TokenService, UserService,
};
use super::errors::AppResult;

pub struct AppContext {
    database: Database,
    pub auth: AuthService,
    pub users: UserService,
    pub destinations: DestinationService,
    pub bookings: BookingService,
}

impl AppContext {
    pub fn new(database: Database, config: &AppConfig) -> Self {
        let tokens = Arc::new(TokenService::new(&config.jwt));
        let passwords = PasswordHasher::new(&config.password);

        let user_repo = UserRepository::new(database.clone());
        let destination_repo = DestinationRepository::new(database.clone());
        let booking_repo = BookingRepository::new(database.clone());

        Self {
            auth: AuthService::new(user_repo.clone(), tokens, passwords),
            users: UserService::new(user_repo.clone(), passwords),
            destinations: DestinationService::new(destination_repo.clone()),
            bookings: BookingService::new(booking_repo, user_repo, destination_repo),
            database,
        }
    }

    /// 스키마 동기화와 시드까지 마친 인메모리 컨텍스트
    pub async fn in_memory(config: &AppConfig) -> AppResult<Self> {
        let database = Database::in_memory().await?;
        database.sync_schema().await?;

        let context = Self::new(database, config);
        db::seed::run(&context, &config.seed).await?;

        Ok(context)
    }

    pub fn database(&self) -> &Database {
        &self.database
    }
}
