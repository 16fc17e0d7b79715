//! JWT 인증 토큰 클레임
//!
//! RFC 7519 표준의 `iat`/`exp`와 애플리케이션 신원 클레임만 담습니다.
//! 역할은 토큰에 싣지 않고 매 요청마다 저장소에서 조회합니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `userId`: 사용자 ID
/// - `username`: 발급 시점의 사용자 이름
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp, 발급 후 정확히 1시간)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}
