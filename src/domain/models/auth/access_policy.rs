//! 라우트 그룹별 접근 정책
//!
//! | 라우트 | 조회 (GET) | 변경 (POST/PUT/DELETE) |
//! |--------|------------|------------------------|
//! | `/api/auth/change-password` | - | ADMIN |
//! | `/api/users` | ADMIN | ADMIN |
//! | `/api/destinations` | ADMIN, USER | ADMIN |
//! | `/api/bookings` | ADMIN, USER | ADMIN, USER |

use actix_web::http::Method;
use crate::domain::entities::users::Role;

/// 요청 메서드에 따라 허용 역할을 고르는 정책
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccessPolicy {
    pub read: &'static [Role],
    pub write: &'static [Role],
}

impl AccessPolicy {
    pub const PASSWORD_CHANGE: AccessPolicy = AccessPolicy::uniform(&[Role::Admin]);

    pub const USER_ADMINISTRATION: AccessPolicy = AccessPolicy::uniform(&[Role::Admin]);

    pub const DESTINATIONS: AccessPolicy = AccessPolicy {
        read: &[Role::Admin, Role::User],
        write: &[Role::Admin],
    };

    pub const BOOKINGS: AccessPolicy = AccessPolicy::uniform(&[Role::Admin, Role::User]);

    /// 조회와 변경에 같은 역할 집합을 쓰는 정책
    pub const fn uniform(roles: &'static [Role]) -> Self {
        Self {
            read: roles,
            write: roles,
        }
    }

    /// 요청 메서드에 해당하는 허용 역할
    pub fn allowed_roles(&self, method: &Method) -> &'static [Role] {
        if method == Method::GET || method == Method::HEAD {
            self.read
        } else {
            self.write
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_writes_are_admin_only() {
        let policy = AccessPolicy::DESTINATIONS;

        assert_eq!(policy.allowed_roles(&Method::GET), &[Role::Admin, Role::User]);
        assert_eq!(policy.allowed_roles(&Method::POST), &[Role::Admin]);
        assert_eq!(policy.allowed_roles(&Method::DELETE), &[Role::Admin]);
    }

    #[test]
    fn test_admin_is_allowed_wherever_user_is() {
        let policies = [
            AccessPolicy::PASSWORD_CHANGE,
            AccessPolicy::USER_ADMINISTRATION,
            AccessPolicy::DESTINATIONS,
            AccessPolicy::BOOKINGS,
        ];

        for policy in policies {
            for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
                let roles = policy.allowed_roles(&method);
                if roles.contains(&Role::User) {
                    assert!(roles.contains(&Role::Admin));
                }
            }
        }
    }
}
