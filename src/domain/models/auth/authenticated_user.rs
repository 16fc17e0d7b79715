use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;
use crate::domain::entities::users::Role;

/// 접근 가드를 통과한 요청의 사용자 정보
///
/// 토큰 클레임의 신원과 저장소에서 조회한 현재 역할을 합친 값입니다.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    /// 허용 역할 목록에 포함되는지 확인
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 가드가 요청 확장에 넣어 둔 값을 꺼냅니다. 가드 밖의 라우트에서 사용하면 401입니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(""))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_user_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser {
            user_id: 1,
            username: "admin".to_string(),
            role: Role::Admin,
        });

        let user = AuthenticatedUser::extract(&req).await.unwrap();

        assert_eq!(user.user_id, 1);
        assert!(user.has_any_role(&[Role::Admin, Role::User]));
        assert!(!user.has_any_role(&[Role::User]));
    }

    #[actix_web::test]
    async fn test_missing_user_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        let result = AuthenticatedUser::extract(&req).await;

        assert!(result.is_err());
    }
}
