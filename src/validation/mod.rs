//! 엔티티 스키마 검증
//!
//! 각 엔티티는 `(필드, 규칙 목록)` 쌍의 순서 있는 목록으로 스키마를 선언합니다.
//! 검증은 첫 실패에서 멈추지 않고 모든 규칙을 평가하여 위반 목록 전체를 반환합니다.
//!
//! ```rust,ignore
//! const SCHEMA: Schema = &[
//!     ("username", &[Rule::IsString, Rule::Length { min: 4, max: 20 }]),
//!     ("role", &[Rule::NotEmpty, Rule::OneOf(Role::NAMES)]),
//! ];
//!
//! let violations = validation::validate(&draft, SCHEMA);
//! ```

pub mod rules;

use std::collections::BTreeMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use rules::Rule;

/// 위반 목록에 값을 그대로 싣지 않는 필드
const REDACTED_PROPERTIES: &[&str] = &["password"];

/// 가려진 값 자리에 들어가는 문자열
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// 엔티티 하나의 검증 스키마
pub type Schema = &'static [(&'static str, &'static [Rule])];

/// 필드 하나에 대한 검증 위반 정보
///
/// `constraints`는 위반된 규칙 이름 → 사람이 읽을 수 있는 메시지입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub property: String,
    pub value: Value,
    pub constraints: BTreeMap<String, String>,
}

/// 스키마 검증을 거쳐야만 만들어지는 엔티티 초안
///
/// 초안은 JSON 필드 맵 상태로 조립되고 [`Draft::SCHEMA`] 검증을 통과한 뒤에
/// 타입이 있는 구조체로 역직렬화됩니다. 따라서 타입 불일치도 역직렬화 에러가 아닌
/// 위반 목록으로 보고됩니다.
pub trait Draft: Serialize + DeserializeOwned {
    const SCHEMA: Schema;
}

/// 초안 필드 맵을 스키마에 따라 검증합니다.
///
/// 스키마의 선언 순서대로 위반 정보를 반환하며, 위반이 없으면 빈 벡터입니다.
/// 초안에 없는 필드는 `null`로 취급됩니다. 비밀번호 값은 [`REDACTED_VALUE`]로 가려집니다.
pub fn validate(draft: &Map<String, Value>, schema: Schema) -> Vec<FieldViolation> {
    schema
        .iter()
        .filter_map(|(field, rules)| {
            let value = draft.get(*field).unwrap_or(&Value::Null);

            let constraints: BTreeMap<String, String> = rules
                .iter()
                .filter_map(|rule| {
                    rule.check(field, value)
                        .map(|message| (rule.name().to_string(), message))
                })
                .collect();

            if constraints.is_empty() {
                None
            } else {
                let value = if REDACTED_PROPERTIES.contains(field) && !value.is_null() {
                    Value::String(REDACTED_VALUE.to_string())
                } else {
                    value.clone()
                };

                Some(FieldViolation {
                    property: field.to_string(),
                    value,
                    constraints,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEMA: Schema = &[
        ("name", &[Rule::IsString]),
        ("cost", &[Rule::NotEmpty, Rule::IsNumber]),
        ("username", &[Rule::IsString, Rule::Length { min: 4, max: 20 }]),
        ("password", &[Rule::IsString, Rule::Length { min: 4, max: 100 }]),
    ];

    fn draft(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_valid_draft_has_no_violations() {
        let fields = draft(json!({ "name": "Paris", "cost": 120, "username": "traveler", "password": "secret" }));

        assert!(validate(&fields, SCHEMA).is_empty());
    }

    #[test]
    fn test_all_violations_are_reported_in_schema_order() {
        let fields = draft(json!({ "name": 3, "username": "abc", "password": "secret" }));

        let violations = validate(&fields, SCHEMA);
        let properties: Vec<&str> = violations.iter().map(|v| v.property.as_str()).collect();

        assert_eq!(properties, vec!["name", "cost", "username"]);
    }

    #[test]
    fn test_missing_field_collects_every_failed_rule() {
        let fields = draft(json!({ "name": "Paris", "username": "traveler", "password": "secret" }));

        let violations = validate(&fields, SCHEMA);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].value, Value::Null);
        assert!(violations[0].constraints.contains_key("isNotEmpty"));
        assert!(violations[0].constraints.contains_key("isNumber"));
    }

    #[test]
    fn test_rejected_password_is_not_echoed() {
        let fields = draft(json!({ "name": "Paris", "cost": 120, "username": "traveler", "password": "abc" }));

        let violations = validate(&fields, SCHEMA);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].property, "password");
        assert_eq!(violations[0].value, json!(REDACTED_VALUE));
        assert!(violations[0].constraints.contains_key("length"));
    }
}
