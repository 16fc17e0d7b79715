//! 필드 검증 규칙
//!
//! 문자열 길이와 필수 값 확인은 `validator` 크레이트의 검사 trait에 위임합니다.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use validator::{ValidateLength, ValidateRequired};

/// ISO 8601 날짜 문자열을 UTC 시각으로 해석합니다.
///
/// - 오프셋 포함 (`2022-03-26T00:15:23.138Z`, `2022-03-26T09:15:23+09:00`)
/// - 오프셋 없는 날짜-시간 (`2022-03-26T00:15:23`) - UTC로 간주
/// - 날짜만 (`2022-03-26`) - UTC 자정
pub fn parse_iso8601(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// 단일 필드에 적용되는 검증 규칙
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// `null`, 누락, 빈 문자열이 아니어야 함
    NotEmpty,
    /// 문자열이어야 함
    IsString,
    /// 유한한 숫자여야 함
    IsNumber,
    /// 정수여야 함
    IsInt,
    /// 불리언이어야 함
    IsBoolean,
    /// ISO 8601 날짜 문자열이어야 함 ([`parse_iso8601`])
    IsDateString,
    /// 문자 수가 `min..=max` 범위인 문자열이어야 함
    Length { min: u64, max: u64 },
    /// 허용된 값 중 하나인 문자열이어야 함
    OneOf(&'static [&'static str]),
}

impl Rule {
    /// 위반 목록에 사용되는 규칙 이름
    pub fn name(&self) -> &'static str {
        match self {
            Rule::NotEmpty => "isNotEmpty",
            Rule::IsString => "isString",
            Rule::IsNumber => "isNumber",
            Rule::IsInt => "isInt",
            Rule::IsBoolean => "isBoolean",
            Rule::IsDateString => "isDateString",
            Rule::Length { .. } => "length",
            Rule::OneOf(_) => "isIn",
        }
    }

    /// 값을 검사하여 위반 시 메시지를 반환합니다.
    pub fn check(&self, field: &str, value: &Value) -> Option<String> {
        match self {
            Rule::NotEmpty => {
                let present = (!value.is_null()).then_some(value);
                let filled = present.validate_required()
                    && value
                        .as_str()
                        .is_none_or(|text| text.validate_length(Some(1), None, None));
                (!filled).then(|| format!("{} should not be empty", field))
            }
            Rule::IsString => (!value.is_string()).then(|| format!("{} must be a string", field)),
            Rule::IsNumber => {
                let finite = value.as_f64().is_some_and(f64::is_finite);
                (!finite).then(|| {
                    format!("{} must be a number conforming to the specified constraints", field)
                })
            }
            Rule::IsInt => {
                (!(value.is_i64() || value.is_u64())).then(|| format!("{} must be an integer number", field))
            }
            Rule::IsBoolean => (!value.is_boolean()).then(|| format!("{} must be a boolean value", field)),
            Rule::IsDateString => {
                let parsed = value
                    .as_str()
                    .is_some_and(|text| parse_iso8601(text).is_some());
                (!parsed).then(|| format!("{} must be a valid ISO 8601 date string", field))
            }
            Rule::Length { min, max } => {
                let text = value.as_str();
                if !text.is_some_and(|text| text.validate_length(Some(*min), None, None)) {
                    Some(format!("{} must be longer than or equal to {} characters", field, min))
                } else if !text.is_some_and(|text| text.validate_length(None, Some(*max), None)) {
                    Some(format!("{} must be shorter than or equal to {} characters", field, max))
                } else {
                    None
                }
            }
            Rule::OneOf(allowed) => {
                let matches = value.as_str().is_some_and(|s| allowed.contains(&s));
                (!matches).then(|| {
                    format!("{} must be one of the following values: {}", field, allowed.join(", "))
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_empty() {
        assert!(Rule::NotEmpty.check("role", &json!("ADMIN")).is_none());
        assert!(Rule::NotEmpty.check("role", &json!("")).is_some());
        assert!(Rule::NotEmpty.check("role", &Value::Null).is_some());
        assert!(Rule::NotEmpty.check("cost", &json!(0)).is_none());
    }

    #[test]
    fn test_numeric_rules() {
        assert!(Rule::IsNumber.check("cost", &json!(100)).is_none());
        assert!(Rule::IsNumber.check("cost", &json!(99.5)).is_none());
        assert!(Rule::IsNumber.check("cost", &json!("100")).is_some());

        assert!(Rule::IsInt.check("maxGuests", &json!(2)).is_none());
        assert!(Rule::IsInt.check("maxGuests", &json!(2.5)).is_some());
    }

    #[test]
    fn test_length_bounds_count_characters() {
        let rule = Rule::Length { min: 4, max: 20 };

        assert!(rule.check("username", &json!("admin")).is_none());
        assert!(rule.check("username", &json!("한국어다")).is_none());
        assert!(rule.check("username", &json!("abc")).unwrap().contains("longer"));
        assert!(rule.check("username", &json!("a".repeat(21))).unwrap().contains("shorter"));
        assert!(rule.check("username", &json!(1234)).is_some());
    }

    #[test]
    fn test_date_string() {
        assert!(Rule::IsDateString.check("startDate", &json!("2022-03-26T00:15:23.138Z")).is_none());
        assert!(Rule::IsDateString.check("startDate", &json!("yesterday")).is_some());
        assert!(Rule::IsDateString.check("startDate", &json!(1648253723)).is_some());
    }

    #[test]
    fn test_date_string_accepts_iso8601_without_offset() {
        assert!(Rule::IsDateString.check("startDate", &json!("2022-03-26")).is_none());
        assert!(Rule::IsDateString.check("startDate", &json!("2022-03-26T00:15:23")).is_none());
        assert!(Rule::IsDateString.check("startDate", &json!("2022-03-26T00:15:23.138")).is_none());
        assert!(Rule::IsDateString.check("startDate", &json!("2022-13-40")).is_some());
    }

    #[test]
    fn test_parse_iso8601_normalizes_to_utc() {
        let expected = "2022-03-26T00:00:00Z".parse::<DateTime<Utc>>().unwrap();

        assert_eq!(parse_iso8601("2022-03-26"), Some(expected));
        assert_eq!(parse_iso8601("2022-03-26T00:00:00"), Some(expected));
        assert_eq!(parse_iso8601("2022-03-26T09:00:00+09:00"), Some(expected));
        assert_eq!(parse_iso8601("26/03/2022"), None);
    }

    #[test]
    fn test_one_of() {
        let rule = Rule::OneOf(&["ADMIN", "USER"]);

        assert!(rule.check("role", &json!("USER")).is_none());
        assert_eq!(
            rule.check("role", &json!("GUEST")).unwrap(),
            "role must be one of the following values: ADMIN, USER"
        );
    }
}
