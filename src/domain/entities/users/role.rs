//! 사용자 역할

use std::fmt;
use serde::{Deserialize, Serialize};

/// 사용자 역할
///
/// 와이어 포맷과 저장 포맷 모두 대문자 문자열(`"ADMIN"`, `"USER"`)입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// 허용되는 역할 이름 목록 (검증 규칙에서 사용)
    pub const NAMES: &'static [&'static str] = &["ADMIN", "USER"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(serde_json::from_str::<Role>("\"USER\"").unwrap(), Role::User);
        assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
    }

    #[test]
    fn test_names_match_variants() {
        let names: Vec<&str> = [Role::Admin, Role::User].iter().map(Role::as_str).collect();
        assert_eq!(names, Role::NAMES);
    }
}
