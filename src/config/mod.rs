//! # Configuration Module
//!
//! 예약 관리 백엔드의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값을 시작 시 한 번 읽어 [`AppConfig`]로 모읍니다.
//! 이후 설정은 읽기 전용으로 공유되며 실행 중에 바뀌지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, 시드 데이터 설정
//! - [`auth_config`] - JWT, 비밀번호 해싱 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::from_env();
//! let database = Database::connect(&config.database).await?;
//! let context = AppContext::new(database, &config);
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    /// 환경 변수에서 전체 설정을 읽어옵니다.
    pub fn from_env() -> Self {
        Self {
            environment: Environment::current(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            password: PasswordConfig::from_env(),
            seed: SeedConfig::from_env(),
        }
    }

    /// 테스트용 설정: 인메모리 SQLite, 고정 서명 키, 최소 bcrypt 비용
    pub fn for_tests() -> Self {
        Self {
            environment: Environment::Test,
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            jwt: JwtConfig::with_secret("test-secret"),
            password: PasswordConfig { bcrypt_cost: 4 },
            seed: SeedConfig::default(),
        }
    }
}
