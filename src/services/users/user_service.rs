//! # 사용자 관리 서비스 구현
//!
//! 관리자 전용 사용자 CRUD를 검증-저장 파이프라인 위에서 처리합니다.
//!
//! - **생성**: `username`, `password`, `role` 검증 → 비밀번호 해싱 → 저장
//! - **수정**: `username`, `role`만 덮어쓰기 (비밀번호는 `/api/auth/change-password`로만 변경)
//! - **삭제**: 존재 확인 후 물리 삭제, 소유한 예약도 함께 삭제
//!
//! 조회 응답은 비밀번호 해시를 포함하지 않는 [`UserSummary`] 프로젝션입니다.

use serde_json::Value;
use crate::core::errors::AppResult;
use crate::domain::dto::users::{UserDraft, UserSummary};
use crate::domain::entities::users::User;
use crate::repositories::{Load, UserRepository};
use crate::services::auth::PasswordHasher;
use crate::services::pipeline::{self, Fields, ResourceMessages};

pub const MESSAGES: ResourceMessages = ResourceMessages {
    created: "User created",
    conflict: "Username already in use",
    not_found: "User not found",
    update_failed: "Could not update user",
};

pub struct UserService {
    users: UserRepository,
    passwords: PasswordHasher,
}

impl UserService {
    pub fn new(users: UserRepository, passwords: PasswordHasher) -> Self {
        Self { users, passwords }
    }

    pub async fn list(&self) -> AppResult<Vec<UserSummary>> {
        Ok(self.users.find_all(Load::Eager).await?)
    }

    pub async fn get(&self, id: i64) -> AppResult<UserSummary> {
        self.users
            .find_one(id, Load::Eager)
            .await?
            .ok_or_else(|| MESSAGES.not_found())
    }

    pub async fn create(&self, payload: &Value) -> AppResult<User> {
        let mut fields = Fields::new();
        pipeline::overwrite(&mut fields, payload, UserDraft::CREATE_FIELDS);

        let mut draft: UserDraft = pipeline::validate(fields)?;
        draft.password = self.passwords.hash(&draft.password)?;

        let user = self
            .users
            .insert(&draft)
            .await
            .map_err(|e| MESSAGES.on_create_error(e))?;

        log::info!("👤 사용자 생성: id={}, role={}", user.id, user.role);
        Ok(user)
    }

    pub async fn update(&self, id: i64, payload: &Value) -> AppResult<User> {
        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| MESSAGES.not_found())?;

        let mut fields = pipeline::fields_of(&UserDraft::from(&user))?;
        pipeline::overwrite(&mut fields, payload, UserDraft::UPDATE_FIELDS);
        let draft: UserDraft = pipeline::validate(fields)?;

        user.username = draft.username;
        user.role = draft.role;

        let saved = self
            .users
            .save(&user)
            .await
            .map_err(|e| MESSAGES.on_update_error(e))?;

        log::info!("👤 사용자 수정: id={}", saved.id);
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if self.users.find_by_id(id).await?.is_none() {
            return Err(MESSAGES.not_found());
        }

        self.users.delete(id).await?;

        log::info!("🗑️ 사용자 삭제: id={}", id);
        Ok(())
    }
}
