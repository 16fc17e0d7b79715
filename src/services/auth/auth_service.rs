//! 인증/인가 서비스
//!
//! 로그인, 비밀번호 변경, 그리고 접근 가드가 사용하는 역할 확인을 담당합니다.
//! 존재하지 않는 사용자와 잘못된 비밀번호는 호출자에게 같은 응답(401, 빈 본문)으로 보입니다.

use std::sync::Arc;
use serde_json::Value;
use validator::Validate;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::auth::{ChangePasswordRequest, LoginRequest};
use crate::domain::dto::users::UserDraft;
use crate::domain::entities::users::Role;
use crate::domain::models::{AuthenticatedUser, TokenClaims};
use crate::repositories::UserRepository;
use crate::services::auth::{PasswordHasher, TokenService};
use crate::services::pipeline;

pub struct AuthService {
    users: UserRepository,
    tokens: Arc<TokenService>,
    passwords: PasswordHasher,
}

impl AuthService {
    pub fn new(users: UserRepository, tokens: Arc<TokenService>, passwords: PasswordHasher) -> Self {
        Self {
            users,
            tokens,
            passwords,
        }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// 사용자 이름/비밀번호를 확인하고 새 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필드 누락 (저장소 조회 전)
    /// * `AppError::AuthenticationError` - 알 수 없는 사용자 또는 잘못된 비밀번호
    pub async fn login(&self, request: LoginRequest) -> AppResult<String> {
        request
            .validate()
            .map_err(|_| AppError::ValidationError("Username and password are required".to_string()))?;

        let Some(user) = self.users.find_by_username(&request.username).await? else {
            log::warn!("🔐 로그인 실패: 알 수 없는 사용자");
            return Err(AppError::AuthenticationError("invalid credentials".to_string()));
        };

        if !self.passwords.verify(&request.password, &user.password) {
            log::warn!("🔐 로그인 실패: 비밀번호 불일치 (user_id={})", user.id);
            return Err(AppError::AuthenticationError("invalid credentials".to_string()));
        }

        log::info!("✅ 로그인 성공: user_id={}", user.id);
        self.tokens.issue(user.id, &user.username)
    }

    /// 호출자의 비밀번호를 변경합니다.
    ///
    /// 새 비밀번호는 사용자 스키마의 길이 규칙(4-100자)으로 검증된 뒤 해시되어 저장됩니다.
    pub async fn change_password(
        &self,
        caller: &AuthenticatedUser,
        request: ChangePasswordRequest,
    ) -> AppResult<()> {
        request.validate().map_err(|_| {
            AppError::ValidationError("oldPassword and newPassword are required".to_string())
        })?;

        let Some(mut user) = self.users.find_by_id(caller.user_id).await? else {
            return Err(AppError::AuthenticationError("user no longer exists".to_string()));
        };

        if !self.passwords.verify(&request.old_password, &user.password) {
            log::warn!("🔐 비밀번호 변경 거부: 기존 비밀번호 불일치 (user_id={})", user.id);
            return Err(AppError::AuthenticationError("old password mismatch".to_string()));
        }

        let mut fields = pipeline::fields_of(&UserDraft::from(&user))?;
        fields.insert("password".to_string(), Value::String(request.new_password));
        let draft: UserDraft = pipeline::validate(fields)?;

        user.password = self.passwords.hash(&draft.password)?;
        self.users.save(&user).await?;

        log::info!("🔑 비밀번호 변경 완료: user_id={}", user.id);
        Ok(())
    }

    /// 클레임의 사용자가 아직 존재하고 허용 역할을 가졌는지 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthorizationError` - 사용자가 삭제되었거나 역할이 허용되지 않음
    pub async fn authorize(&self, claims: &TokenClaims, allowed: &[Role]) -> AppResult<AuthenticatedUser> {
        let Some(user) = self.users.find_by_id(claims.user_id).await? else {
            return Err(AppError::AuthorizationError(format!(
                "user {} no longer exists",
                claims.user_id
            )));
        };

        let caller = AuthenticatedUser {
            user_id: user.id,
            username: user.username,
            role: user.role,
        };

        if !caller.has_any_role(allowed) {
            return Err(AppError::AuthorizationError(format!(
                "role {} not allowed",
                caller.role
            )));
        }

        Ok(caller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{JwtConfig, PasswordConfig};
    use crate::repositories::fixtures;

    struct Fixture {
        service: AuthService,
        admin: AuthenticatedUser,
    }

    async fn fixture() -> Fixture {
        let users = UserRepository::new(fixtures::database().await);
        let passwords = PasswordHasher::new(&PasswordConfig { bcrypt_cost: 4 });
        let tokens = Arc::new(TokenService::new(&JwtConfig::with_secret("test-secret")));

        let admin = users
            .insert(&UserDraft {
                username: "admin".to_string(),
                password: passwords.hash("admin").unwrap(),
                role: Role::Admin,
            })
            .await
            .unwrap();

        Fixture {
            service: AuthService::new(users, tokens, passwords),
            admin: AuthenticatedUser {
                user_id: admin.id,
                username: admin.username,
                role: admin.role,
            },
        }
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_login_issues_verifiable_token() {
        let f = fixture().await;

        let token = f.service.login(login("admin", "admin")).await.unwrap();
        let claims = f.service.tokens().verify(&token).unwrap();

        assert_eq!(claims.user_id, f.admin.user_id);
        assert_eq!(claims.username, "admin");
    }

    #[actix_web::test]
    async fn test_unknown_user_and_wrong_password_are_identical() {
        let f = fixture().await;

        let unknown = f.service.login(login("nobody", "admin")).await.unwrap_err();
        let wrong = f.service.login(login("admin", "wrong")).await.unwrap_err();

        assert!(matches!(unknown, AppError::AuthenticationError(_)));
        assert!(matches!(wrong, AppError::AuthenticationError(_)));
    }

    #[actix_web::test]
    async fn test_missing_login_fields_fail_before_lookup() {
        let f = fixture().await;

        let error = f.service.login(login("admin", "")).await.unwrap_err();

        assert!(matches!(error, AppError::ValidationError(_)));
    }

    #[actix_web::test]
    async fn test_change_password_invalidates_old_plaintext() {
        let f = fixture().await;
        let request = ChangePasswordRequest {
            old_password: "admin".to_string(),
            new_password: "s3cret".to_string(),
        };

        f.service.change_password(&f.admin, request).await.unwrap();

        assert!(f.service.login(login("admin", "admin")).await.is_err());
        assert!(f.service.login(login("admin", "s3cret")).await.is_ok());
    }

    #[actix_web::test]
    async fn test_change_password_rules() {
        let f = fixture().await;

        let wrong_old = ChangePasswordRequest {
            old_password: "nope".to_string(),
            new_password: "s3cret".to_string(),
        };
        assert!(matches!(
            f.service.change_password(&f.admin, wrong_old).await,
            Err(AppError::AuthenticationError(_))
        ));

        let too_short = ChangePasswordRequest {
            old_password: "admin".to_string(),
            new_password: "abc".to_string(),
        };
        let Err(AppError::InvalidEntity(violations)) = f.service.change_password(&f.admin, too_short).await else {
            panic!("expected InvalidEntity");
        };
        assert_eq!(violations[0].property, "password");
    }

    #[actix_web::test]
    async fn test_authorize_checks_current_role() {
        let f = fixture().await;
        let token = f.service.login(login("admin", "admin")).await.unwrap();
        let claims = f.service.tokens().verify(&token).unwrap();

        assert!(f.service.authorize(&claims, &[Role::Admin]).await.is_ok());
        assert!(matches!(
            f.service.authorize(&claims, &[Role::User]).await,
            Err(AppError::AuthorizationError(_))
        ));

        let ghost = TokenClaims { user_id: 999, ..claims };
        assert!(matches!(
            f.service.authorize(&ghost, &[Role::Admin]).await,
            Err(AppError::AuthorizationError(_))
        ));
    }
}
