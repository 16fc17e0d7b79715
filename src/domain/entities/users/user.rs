//! User Entity Implementation
//!
//! 사용자 계정 엔티티입니다. 비밀번호 컬럼에는 bcrypt 해시만 저장됩니다.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use super::Role;

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    /// 사용자 이름 (unique, 4-20자)
    pub username: String,
    /// bcrypt 해시
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
