//! 시작 시 기본 데이터 생성
//!
//! - 관리자 계정 (`SEED_ADMIN_USERNAME` / `SEED_ADMIN_PASSWORD`, 기본 `admin`/`admin`)
//! - 선택: 샘플 여행지 "New York" (`SEED_SAMPLE_DATA=true`)
//!
//! 이미 존재하는 데이터는 건드리지 않으므로 재시작해도 안전합니다.

use log::info;
use serde_json::json;
use crate::config::SeedConfig;
use crate::core::context::AppContext;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::Role;

pub async fn run(context: &AppContext, seed: &SeedConfig) -> AppResult<()> {
    let admin = json!({
        "username": seed.admin_username,
        "password": seed.admin_password,
        "role": Role::Admin,
    });

    match context.users.create(&admin).await {
        Ok(user) => info!("🌱 관리자 계정 생성: {}", user.username),
        Err(AppError::ConflictError(_)) => info!("🌱 관리자 계정 이미 존재: {}", seed.admin_username),
        Err(e) => return Err(e),
    }

    if seed.sample_data {
        let sample = json!({
            "name": "New York",
            "description": "description",
            "state": "NY",
            "city": "New York",
            "cost": 100,
            "maxGuests": 2,
            "available": true,
        });

        match context.destinations.create(&sample).await {
            Ok(destination) => info!("🌱 샘플 여행지 생성: {}", destination.name),
            Err(AppError::ConflictError(_)) => info!("🌱 샘플 여행지 이미 존재"),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[actix_web::test]
    async fn test_seed_is_idempotent() {
        let mut config = AppConfig::for_tests();
        config.seed.sample_data = true;
        let context = AppContext::in_memory(&config).await.unwrap();

        run(&context, &config.seed).await.unwrap();

        let users = context.users.list().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role, Role::Admin);
        assert_eq!(context.destinations.list().await.unwrap().len(), 1);
    }
}
