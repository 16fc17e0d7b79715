//! Destination Entity Implementation

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// 여행지 엔티티
///
/// `name`은 저장소 수준에서 유일합니다.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub state: String,
    pub city: String,
    pub cost: f64,
    pub max_guests: i64,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Destination {
    /// 설명이 주어지지 않았을 때 사용되는 기본값
    pub const DEFAULT_DESCRIPTION: &'static str = "description";
}
