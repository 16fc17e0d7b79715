//! # Data & Server Configuration
//!
//! 실행 환경, HTTP 서버, 데이터베이스, 시드 데이터 관련 설정을 환경 변수에서 읽어옵니다.
//!
//! ```bash
//! export ENVIRONMENT="production"           # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export DATABASE_URL="sqlite://booking.db?mode=rwc"
//! export DATABASE_MAX_CONNECTIONS="5"
//! export SEED_ADMIN_USERNAME="admin"
//! export SEED_ADMIN_PASSWORD="admin"
//! export SEED_SAMPLE_DATA="false"
//! ```

use std::env;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 환경을 결정합니다. 기본값은 운영 환경입니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 허용할 CORS Origin 목록 (콤마 구분)
    pub fn cors_allowed_origins() -> Vec<String> {
        env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// 데이터베이스 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// sqlx 연결 URL
    pub url: String,
    /// 커넥션 풀 최대 크기
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://booking.db?mode=rwc".to_string());

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n: &u32| *n > 0)
            .unwrap_or(5);

        Self { url, max_connections }
    }
}

/// 시작 시 생성되는 시드 데이터 설정
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub admin_username: String,
    pub admin_password: String,
    /// 샘플 여행지("New York") 생성 여부
    pub sample_data: bool,
}

impl SeedConfig {
    pub fn from_env() -> Self {
        Self {
            admin_username: env::var("SEED_ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password: env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string()),
            sample_data: env::var("SEED_SAMPLE_DATA")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            admin_username: "admin".to_string(),
            admin_password: "admin".to_string(),
            sample_data: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_seed_defaults() {
        let seed = SeedConfig::default();

        assert_eq!(seed.admin_username, "admin");
        assert_eq!(seed.admin_password, "admin");
        assert!(!seed.sample_data);
    }
}
