//! JWT 토큰 관리 서비스 구현
//!
//! HS256 서명 토큰의 발급, 검증, 갱신을 담당합니다.
//! 토큰은 발급 후 정확히 1시간(설정 가능) 동안 유효하며,
//! 인증된 요청마다 만료 시간이 새로 설정된 토큰이 재발급됩니다.
//! 폐기 목록은 두지 않습니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::models::TokenClaims;

/// JWT 토큰 관리 서비스
///
/// 서명 키는 시작 시 한 번 만들어져 읽기 전용으로 공유됩니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl: Duration::minutes(config.expiration_minutes),
        }
    }

    /// 사용자 신원으로 새 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    pub fn issue(&self, user_id: i64, username: &str) -> Result<String, AppError> {
        self.issue_at(user_id, username, Utc::now())
    }

    /// 지정된 발급 시각 기준으로 토큰을 발급합니다.
    pub fn issue_at(&self, user_id: i64, username: &str, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        let claims = TokenClaims {
            user_id,
            username: username.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명과 만료 시간을 모두 확인하며 만료 유예 시간은 없습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 위조된 페이로드, 잘못된 서명 또는 형식
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("토큰 서명이 올바르지 않습니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// 검증된 클레임의 신원으로 만료 시간이 새로 설정된 토큰을 발급합니다.
    pub fn refresh(&self, claims: &TokenClaims) -> Result<String, AppError> {
        self.issue(claims.user_id, &claims.username)
    }
}
