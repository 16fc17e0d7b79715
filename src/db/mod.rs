//! Database Connection Management Module
//!
//! 관계형 저장소(SQLite, sqlx) 연결 관리를 담당하는 모듈입니다.
//! 커넥션 풀 생성, 외래 키 활성화, 시작 시 스키마 동기화를 제공합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! # sqlx 연결 URL
//! export DATABASE_URL="sqlite://booking.db?mode=rwc"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::connect(&config.database).await?;
//! database.sync_schema().await?;
//! ```

pub mod schema;
pub mod seed;

use std::str::FromStr;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use crate::config::DatabaseConfig;

/// 관계형 데이터베이스 연결 래퍼
///
/// 커넥션 풀을 소유하며 리포지토리 계층에 복제되어 전달됩니다.
/// 풀 자체가 참조 카운트 기반이므로 복제 비용은 작습니다.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 설정에 따라 새 커넥션 풀을 생성합니다.
    ///
    /// 모든 연결에서 외래 키 제약을 활성화합니다.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        info!("✅ 데이터베이스 연결 성공: {}", config.url);

        Ok(Self { pool })
    }

    /// 인메모리 데이터베이스를 생성합니다.
    ///
    /// 인메모리 SQLite는 연결마다 별개의 데이터베이스이므로
    /// 단일 연결을 유지하고 만료시키지 않습니다.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// 엔티티 정의로부터 테이블을 동기화합니다.
    ///
    /// 이미 존재하는 테이블과 인덱스는 그대로 둡니다.
    pub async fn sync_schema(&self) -> Result<(), sqlx::Error> {
        for statement in schema::STATEMENTS {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        info!("✅ 스키마 동기화 완료 ({}개 구문)", schema::STATEMENTS.len());
        Ok(())
    }

    /// 커넥션 풀을 반환합니다.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_sync_schema_is_idempotent() {
        let database = Database::in_memory().await.unwrap();

        database.sync_schema().await.unwrap();
        database.sync_schema().await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(database.pool())
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|(name,)| name.as_str()).collect();
        assert_eq!(names, vec!["booking", "destination", "user"]);
    }

    #[actix_web::test]
    async fn test_foreign_keys_are_enforced() {
        let database = Database::in_memory().await.unwrap();
        database.sync_schema().await.unwrap();

        let result = sqlx::query(
            "INSERT INTO booking (start_date, end_date, cost, created_at, user_id, destination_id) \
             VALUES ('2022-03-26T00:15:23.138Z', '2022-03-26T00:15:23.138Z', 100, '2022-03-26T00:15:23.138Z', 41, 42)",
        )
        .execute(database.pool())
        .await;

        assert!(result.is_err());
    }
}
