//! bcrypt 비밀번호 해싱

use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// 비밀번호 해셔
///
/// 평문은 저장 전에 반드시 이 타입을 거쳐 해시로 바뀝니다.
/// 검증 결과로는 일치 여부만 관찰할 수 있습니다.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(config: &PasswordConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    pub fn hash(&self, plaintext: &str) -> AppResult<String> {
        bcrypt::hash(plaintext, self.cost).context("비밀번호 해싱 실패")
    }

    /// 평문이 저장된 해시와 일치하는지 확인합니다.
    ///
    /// 해시 형식이 잘못된 경우에도 에러 대신 불일치로 처리합니다.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        bcrypt::verify(plaintext, hash).unwrap_or_else(|e| {
            log::warn!("⚠️ 비밀번호 해시 검증 실패: {}", e);
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verifies_only_original_plaintext() {
        let hasher = PasswordHasher::new(&PasswordConfig { bcrypt_cost: 4 });

        let hash = hasher.hash("admin").unwrap();

        assert_ne!(hash, "admin");
        assert!(hasher.verify("admin", &hash));
        assert!(!hasher.verify("admin1", &hash));
        assert!(!hasher.verify("admin", "not-a-bcrypt-hash"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new(&PasswordConfig { bcrypt_cost: 4 });

        assert_ne!(hasher.hash("admin").unwrap(), hasher.hash("admin").unwrap());
    }
}
