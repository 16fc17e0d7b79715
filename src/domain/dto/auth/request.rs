//! 인증 요청관련 DTO
//!
//! 로그인과 비밀번호 변경 요청 본문을 매핑합니다.
//! 누락된 필드는 빈 문자열로 역직렬화된 뒤 `validate()`에서 걸러집니다.
use serde::Deserialize;
use validator::Validate;

/// 로그인 요청 구조체
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// 비밀번호 변경 요청 구조체
///
/// 새 비밀번호의 길이 규칙은 사용자 스키마 검증에서 확인합니다.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "oldPassword is required"))]
    pub old_password: String,

    #[validate(length(min = 1, message = "newPassword is required"))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_missing_fields_fail_validation() {
        let request: LoginRequest = serde_json::from_str(r#"{"username":"admin"}"#).unwrap();

        let errors = request.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("password"));
        assert!(!errors.field_errors().contains_key("username"));
    }

    #[test]
    fn test_change_password_request_uses_camel_case() {
        let request: ChangePasswordRequest =
            serde_json::from_str(r#"{"oldPassword":"admin","newPassword":"s3cret"}"#).unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.old_password, "admin");
        assert_eq!(request.new_password, "s3cret");
    }
}
