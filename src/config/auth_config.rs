//! # Authentication Configuration Module
//!
//! JWT 서명 키, 토큰 만료 시간, bcrypt 비용 계수를 환경 변수에서 읽어옵니다.
//! 서명 키는 시작 시 한 번만 읽히며 실행 중에는 교체되지 않습니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_MINUTES="60"
//! export BCRYPT_COST="8"               # 4-15 범위
//! ```

use std::env;

/// JWT 토큰 설정
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 서명 키
    pub secret: String,
    /// 토큰 유효 시간 (분)
    pub expiration_minutes: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        });

        let expiration_minutes = env::var("JWT_EXPIRATION_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|m: &i64| *m > 0)
            .unwrap_or(60);

        Self {
            secret,
            expiration_minutes,
        }
    }

    /// 주어진 서명 키와 기본 만료 시간(1시간)으로 설정을 만듭니다.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiration_minutes: 60,
        }
    }
}

/// 비밀번호 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    pub const DEFAULT_COST: u32 = 8;

    pub fn from_env() -> Self {
        Self {
            bcrypt_cost: Self::parse_cost(env::var("BCRYPT_COST").ok().as_deref()),
        }
    }

    /// 4-15 범위를 벗어나거나 숫자가 아니면 기본값을 사용합니다.
    pub fn parse_cost(raw: Option<&str>) -> u32 {
        raw.and_then(|v| v.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or(Self::DEFAULT_COST)
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: Self::DEFAULT_COST,
        }
    }
}
