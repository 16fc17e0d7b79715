//! JWT 접근 가드 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 `auth` 헤더의 토큰을 검증하고,
//! 저장소에서 조회한 사용자 역할이 정책에 허용되는지 확인합니다.
//!
//! - 실패: 핸들러를 호출하지 않고 401 + 빈 본문 (인증/인가 실패 구분 없음)
//! - 성공: [`AuthenticatedUser`](crate::domain::models::AuthenticatedUser)를 요청 확장에 저장하고,
//!   응답의 `token` 헤더에 만료 시간이 갱신된 토큰을 실어 보냄

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::AccessPolicy;
use crate::middlewares::guard_inner::AccessGuardService;

/// JWT 접근 가드
pub struct AccessGuard {
    policy: AccessPolicy,
}

impl AccessGuard {
    pub fn new(policy: AccessPolicy) -> Self {
        Self { policy }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AccessGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AccessGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessGuardService {
            service: Rc::new(service),
            policy: self.policy,
        }))
    }
}
