//! # 예약 관리 서비스 구현
//!
//! 생성 시 검증 전에 사용자와 여행지 참조를 먼저 해석합니다.
//! `userId`가 없으면 요청한 사용자 본인의 예약이 됩니다.

use serde_json::Value;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::bookings::{BookingDraft, BookingRecord};
use crate::domain::entities::Booking;
use crate::domain::models::AuthenticatedUser;
use crate::repositories::{BookingRepository, DestinationRepository, Load, UserRepository};
use crate::services::pipeline::{self, Fields, ResourceMessages};

pub const MESSAGES: ResourceMessages = ResourceMessages {
    created: "Bookings created",
    conflict: "Bookings already exist",
    not_found: "Booking not found",
    update_failed: "Could not update booking",
};

const INVALID_USER: &str = "Provide valid user for booking";
const INVALID_DESTINATION: &str = "Provide valid destination for booking";

pub struct BookingService {
    bookings: BookingRepository,
    users: UserRepository,
    destinations: DestinationRepository,
}

impl BookingService {
    pub fn new(
        bookings: BookingRepository,
        users: UserRepository,
        destinations: DestinationRepository,
    ) -> Self {
        Self {
            bookings,
            users,
            destinations,
        }
    }

    /// 예약 목록 (ID 내림차순, 여행지 포함)
    pub async fn list(&self) -> AppResult<Vec<BookingRecord>> {
        Ok(self.bookings.find_all(Load::Eager).await?)
    }

    pub async fn get(&self, id: i64) -> AppResult<BookingRecord> {
        self.bookings
            .find_one(id, Load::Eager)
            .await?
            .ok_or_else(|| MESSAGES.not_found())
    }

    pub async fn create(&self, caller: &AuthenticatedUser, payload: &Value) -> AppResult<Booking> {
        let user_id = match payload.get("userId") {
            None | Some(Value::Null) => Some(caller.user_id),
            Some(_) => BookingDraft::reference(payload, "userId"),
        };
        let user = match user_id {
            Some(id) => self.users.find_by_id(id).await?,
            None => None,
        }
        .ok_or_else(|| AppError::ValidationError(INVALID_USER.to_string()))?;

        let destination = match BookingDraft::reference(payload, "destinationId") {
            Some(id) => self.destinations.find_by_id(id).await?,
            None => None,
        }
        .ok_or_else(|| AppError::ValidationError(INVALID_DESTINATION.to_string()))?;

        let mut fields = Fields::new();
        pipeline::overwrite(&mut fields, payload, BookingDraft::FIELDS);
        let draft: BookingDraft = pipeline::validate(fields)?;

        let booking = self
            .bookings
            .insert(&draft, user.id, destination.id)
            .await
            .map_err(|e| MESSAGES.on_create_error(e))?;

        log::info!(
            "📅 예약 생성: id={}, user_id={}, destination_id={}",
            booking.id, user.id, destination.id
        );
        Ok(booking)
    }

    pub async fn update(&self, id: i64, payload: &Value) -> AppResult<Booking> {
        let existing = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| MESSAGES.not_found())?;

        let mut fields = pipeline::fields_of(&BookingDraft::from(&existing))?;
        pipeline::overwrite(&mut fields, payload, BookingDraft::FIELDS);
        let draft: BookingDraft = pipeline::validate(fields)?;

        let booking = Booking {
            start_date: draft.start_date,
            end_date: draft.end_date,
            cost: draft.cost,
            ..existing
        };

        let saved = self
            .bookings
            .save(&booking)
            .await
            .map_err(|e| MESSAGES.on_update_error(e))?;

        log::info!("📅 예약 수정: id={}", saved.id);
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if self.bookings.find_by_id(id).await?.is_none() {
            return Err(MESSAGES.not_found());
        }

        self.bookings.delete(id).await?;

        log::info!("🗑️ 예약 삭제: id={}", id);
        Ok(())
    }
}
