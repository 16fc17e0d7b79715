use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{Role, User};
use crate::validation::{Draft, Rule, Schema};

/// 사용자 초안
///
/// 생성 시에는 평문 비밀번호를, 수정 시에는 저장된 해시를 담은 채로 검증됩니다.
/// 어느 쪽이든 4-100자 규칙을 만족해야 합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl UserDraft {
    /// 생성 요청에서 읽는 필드
    pub const CREATE_FIELDS: &'static [&'static str] = &["username", "password", "role"];
    /// 수정 요청에서 덮어쓰는 필드
    pub const UPDATE_FIELDS: &'static [&'static str] = &["username", "role"];
}

impl Draft for UserDraft {
    const SCHEMA: Schema = &[
        ("username", &[Rule::IsString, Rule::Length { min: 4, max: 20 }]),
        ("password", &[Rule::IsString, Rule::Length { min: 4, max: 100 }]),
        ("role", &[Rule::NotEmpty, Rule::OneOf(Role::NAMES)]),
    ];
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            password: user.password.clone(),
            role: user.role,
        }
    }
}
