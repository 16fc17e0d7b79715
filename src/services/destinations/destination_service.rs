//! # 여행지 관리 서비스 구현
//!
//! `description`과 `available`은 요청에 올바른 타입의 값이 있을 때만 덮어쓰며,
//! 그렇지 않으면 생성 시 기본값(`"description"`, `true`), 수정 시 기존 값이 유지됩니다.

use serde_json::Value;
use crate::core::errors::AppResult;
use crate::domain::dto::destinations::{DestinationDraft, DestinationRecord};
use crate::domain::entities::Destination;
use crate::repositories::{DestinationRepository, Load};
use crate::services::pipeline::{self, Fields, ResourceMessages};

pub const MESSAGES: ResourceMessages = ResourceMessages {
    created: "Destination created",
    conflict: "Destination already exist",
    not_found: "Destination not found",
    update_failed: "Could not update destination",
};

pub struct DestinationService {
    destinations: DestinationRepository,
}

impl DestinationService {
    pub fn new(destinations: DestinationRepository) -> Self {
        Self { destinations }
    }

    /// 여행지 목록 (ID 내림차순, 예약 포함)
    pub async fn list(&self) -> AppResult<Vec<DestinationRecord>> {
        Ok(self.destinations.find_all(Load::Eager).await?)
    }

    pub async fn get(&self, id: i64) -> AppResult<DestinationRecord> {
        self.destinations
            .find_one(id, Load::Eager)
            .await?
            .ok_or_else(|| MESSAGES.not_found())
    }

    pub async fn create(&self, payload: &Value) -> AppResult<Destination> {
        let mut fields = DestinationDraft::defaults();
        apply(&mut fields, payload);
        let draft: DestinationDraft = pipeline::validate(fields)?;

        let destination = self
            .destinations
            .insert(&draft)
            .await
            .map_err(|e| MESSAGES.on_create_error(e))?;

        log::info!("🗺️ 여행지 생성: id={}, name={}", destination.id, destination.name);
        Ok(destination)
    }

    pub async fn update(&self, id: i64, payload: &Value) -> AppResult<Destination> {
        let existing = self
            .destinations
            .find_by_id(id)
            .await?
            .ok_or_else(|| MESSAGES.not_found())?;

        let mut fields = pipeline::fields_of(&DestinationDraft::from(&existing))?;
        apply(&mut fields, payload);
        let draft: DestinationDraft = pipeline::validate(fields)?;

        let destination = Destination {
            name: draft.name,
            description: draft.description,
            state: draft.state,
            city: draft.city,
            cost: draft.cost,
            max_guests: draft.max_guests,
            available: draft.available,
            ..existing
        };

        let saved = self
            .destinations
            .save(&destination)
            .await
            .map_err(|e| MESSAGES.on_update_error(e))?;

        log::info!("🗺️ 여행지 수정: id={}", saved.id);
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if self.destinations.find_by_id(id).await?.is_none() {
            return Err(MESSAGES.not_found());
        }

        self.destinations.delete(id).await?;

        log::info!("🗑️ 여행지 삭제: id={}", id);
        Ok(())
    }
}

fn apply(fields: &mut Fields, payload: &Value) {
    pipeline::overwrite(fields, payload, DestinationDraft::FIELDS);
    pipeline::overwrite_if(fields, payload, "description", Value::is_string);
    pipeline::overwrite_if(fields, payload, "available", Value::is_boolean);
}
