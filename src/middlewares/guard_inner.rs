//! AccessGuard 인증/인가 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::core::context::AppContext;
use crate::core::errors::AppError;
use crate::domain::entities::users::Role;
use crate::domain::models::{AccessPolicy, AuthenticatedUser};

/// 토큰을 담는 요청 헤더
pub const AUTH_HEADER: &str = "auth";

/// 갱신된 토큰을 담는 응답 헤더
pub const TOKEN_HEADER: &str = "token";

/// 실제 인증/인가 로직을 수행하는 서비스
pub struct AccessGuardService<S> {
    pub service: Rc<S>,
    pub policy: AccessPolicy,
}

impl<S, B> Service<ServiceRequest> for AccessGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let allowed = self.policy.allowed_roles(req.method());

        Box::pin(async move {
            let admission = match req.app_data::<web::Data<AppContext>>() {
                Some(context) => admit(&req, context, allowed).await,
                None => Err(AppError::InternalError("AppContext가 등록되지 않았습니다".to_string())),
            };

            let (user, renewed) = match admission {
                Ok(admitted) => admitted,
                Err(err) => {
                    log::warn!("🚫 접근 거부: {} {} - {}", req.method(), req.path(), err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            };

            log::debug!("인증 성공: 사용자 ID {} ({})", user.user_id, user.role);
            req.extensions_mut().insert(user);

            let mut res = service.call(req).await?;
            match HeaderValue::try_from(renewed) {
                Ok(value) => {
                    res.headers_mut().insert(HeaderName::from_static(TOKEN_HEADER), value);
                }
                Err(e) => log::error!("❌ 갱신 토큰 헤더 생성 실패: {}", e),
            }

            Ok(res.map_into_left_body())
        })
    }
}

/// 토큰 검증 → 갱신 토큰 발급 → 역할 확인
///
/// 성공 시 요청 사용자와 갱신된 토큰을 반환합니다.
async fn admit(
    req: &ServiceRequest,
    context: &AppContext,
    allowed: &[Role],
) -> Result<(AuthenticatedUser, String), AppError> {
    let token = req
        .headers()
        .get(AUTH_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("auth 헤더가 없습니다".to_string()))?;

    let tokens = context.auth.tokens();
    let claims = tokens.verify(token)?;
    let renewed = tokens.refresh(&claims)?;

    let user = context.auth.authorize(&claims, allowed).await?;

    Ok((user, renewed))
}
