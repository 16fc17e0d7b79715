//! # 검증-저장 파이프라인
//!
//! 모든 리소스 서비스가 공유하는 요청 처리 순서입니다.
//!
//! ```text
//! 초안 구성 (수정: ID로 로드 → 없으면 404 → 허용 필드만 덮어쓰기)
//!     │
//!     ▼
//! 참조 해석 (예약만: userId, destinationId → 실패 시 400)
//!     │
//!     ▼
//! 스키마 검증 (위반 전체를 400으로, 저장 없음)
//!     │
//!     ▼
//! 저장 (유니크 위반 → 409, 수정 중 기타 실패 → 400)
//!     │
//!     ▼
//! 응답 (생성 201 + 확인 문구, 수정/삭제 204, 조회 200)
//! ```
//!
//! ```rust,ignore
//! let mut fields = DestinationDraft::defaults();
//! pipeline::overwrite(&mut fields, &payload, DestinationDraft::FIELDS);
//! let draft: DestinationDraft = pipeline::validate(fields)?;
//! repo.insert(&draft).await.map_err(|e| MESSAGES.on_create_error(e))?;
//! ```

use serde_json::{Map, Value};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::StoreError;
use crate::validation::{self, Draft};

/// 검증 전 초안 필드 맵
pub type Fields = Map<String, Value>;

/// 기존 엔티티에서 초안 필드 맵을 만듭니다 (수정 흐름의 시작점).
pub fn fields_of<D: Draft>(draft: &D) -> AppResult<Fields> {
    match serde_json::to_value(draft).context("초안 직렬화 실패")? {
        Value::Object(fields) => Ok(fields),
        other => Err(AppError::InternalError(format!(
            "초안이 JSON 객체가 아닙니다: {}",
            other
        ))),
    }
}

/// 요청 본문의 값으로 필드를 덮어씁니다. 본문에 없는 필드는 `null`이 됩니다.
pub fn overwrite(fields: &mut Fields, payload: &Value, names: &[&str]) {
    for name in names {
        let value = payload.get(*name).cloned().unwrap_or(Value::Null);
        fields.insert(name.to_string(), value);
    }
}

/// 요청 본문의 값이 `accept`를 만족할 때만 필드를 덮어씁니다.
pub fn overwrite_if(fields: &mut Fields, payload: &Value, name: &str, accept: fn(&Value) -> bool) {
    if let Some(value) = payload.get(name).filter(|value| accept(value)) {
        fields.insert(name.to_string(), value.clone());
    }
}

/// 스키마 검증 후 타입이 있는 초안으로 변환합니다.
///
/// 위반이 하나라도 있으면 위반 목록 전체를 담은 [`AppError::InvalidEntity`]를 반환합니다.
pub fn validate<D: Draft>(fields: Fields) -> AppResult<D> {
    let violations = validation::validate(&fields, D::SCHEMA);
    if !violations.is_empty() {
        log::debug!("엔티티 검증 실패: {}개 필드", violations.len());
        return Err(AppError::InvalidEntity(violations));
    }

    serde_json::from_value(Value::Object(fields)).context("검증된 초안 변환 실패")
}

/// 리소스별 응답 문구
#[derive(Debug, Clone, Copy)]
pub struct ResourceMessages {
    pub created: &'static str,
    pub conflict: &'static str,
    pub not_found: &'static str,
    pub update_failed: &'static str,
}

impl ResourceMessages {
    pub fn not_found(&self) -> AppError {
        AppError::NotFound(self.not_found.to_string())
    }

    /// 생성 중 저장 실패: 유니크 위반은 409, 나머지는 500
    pub fn on_create_error(&self, error: StoreError) -> AppError {
        match error {
            StoreError::UniqueViolation => AppError::ConflictError(self.conflict.to_string()),
            other => AppError::from(other),
        }
    }

    /// 수정 중 저장 실패: 유니크 위반은 409, 나머지는 400
    pub fn on_update_error(&self, error: StoreError) -> AppError {
        match error {
            StoreError::UniqueViolation => AppError::ConflictError(self.conflict.to_string()),
            other => {
                log::error!("❌ 수정 저장 실패: {}", other);
                AppError::ValidationError(self.update_failed.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::domain::dto::destinations::DestinationDraft;

    const MESSAGES: ResourceMessages = ResourceMessages {
        created: "Destination created",
        conflict: "Destination already exist",
        not_found: "Destination not found",
        update_failed: "Could not update destination",
    };

    #[test]
    fn test_overwrite_replaces_missing_fields_with_null() {
        let mut fields = DestinationDraft::defaults();
        overwrite(&mut fields, &json!({ "name": "New York" }), &["name", "state"]);

        assert_eq!(fields["name"], "New York");
        assert_eq!(fields["state"], Value::Null);
        assert_eq!(fields["description"], "description");
    }

    #[test]
    fn test_overwrite_if_keeps_default_on_type_mismatch() {
        let mut fields = DestinationDraft::defaults();
        let payload = json!({ "available": "no", "description": "Big apple" });

        overwrite_if(&mut fields, &payload, "available", Value::is_boolean);
        overwrite_if(&mut fields, &payload, "description", Value::is_string);

        assert_eq!(fields["available"], true);
        assert_eq!(fields["description"], "Big apple");
    }

    #[test]
    fn test_validate_reports_every_violation() {
        let mut fields = DestinationDraft::defaults();
        overwrite(&mut fields, &json!({ "name": "New York", "cost": "cheap" }), DestinationDraft::FIELDS);

        let Err(AppError::InvalidEntity(violations)) = validate::<DestinationDraft>(fields) else {
            panic!("expected InvalidEntity");
        };
        let properties: Vec<&str> = violations.iter().map(|v| v.property.as_str()).collect();

        assert_eq!(properties, vec!["state", "city", "cost", "maxGuests"]);
    }

    #[test]
    fn test_validate_produces_typed_draft() {
        let mut fields = DestinationDraft::defaults();
        let payload = json!({ "name": "New York", "state": "NY", "city": "New York", "cost": 100, "maxGuests": 2 });
        overwrite(&mut fields, &payload, DestinationDraft::FIELDS);

        let draft: DestinationDraft = validate(fields).unwrap();

        assert_eq!(draft.cost, 100.0);
        assert_eq!(draft.max_guests, 2);
        assert!(draft.available);
    }

    #[test]
    fn test_store_errors_map_to_resource_messages() {
        assert!(matches!(
            MESSAGES.on_create_error(StoreError::UniqueViolation),
            AppError::ConflictError(m) if m == "Destination already exist"
        ));
        assert!(matches!(
            MESSAGES.on_update_error(StoreError::ForeignKeyViolation),
            AppError::ValidationError(m) if m == "Could not update destination"
        ));
        assert!(matches!(
            MESSAGES.on_create_error(StoreError::ForeignKeyViolation),
            AppError::DatabaseError(_)
        ));
    }
}
