//! # 사용자 리포지토리 구현
//!
//! 자격 증명 저장소 역할을 겸합니다. 비밀번호 컬럼에는 해시만 전달되어야 하며,
//! 해싱은 서비스 계층의 [`PasswordHasher`](crate::services::auth::PasswordHasher) 몫입니다.
//!
//! - **유니크 제약**: `username` (위반 시 [`StoreError::UniqueViolation`])
//! - **정렬**: 사용자 목록은 ID 오름차순, 사용자별 예약은 ID 내림차순

use std::collections::HashMap;
use sqlx::FromRow;
use crate::db::Database;
use crate::domain::dto::users::{BookedDestination, UserBookingSummary, UserDraft, UserSummary};
use crate::domain::entities::users::User;
use crate::repositories::{timestamp, Load, StoreResult};

const SELECT_USER: &str =
    r#"SELECT id, username, password, role, created_at, updated_at FROM "user""#;

const SELECT_BOOKED: &str = r#"SELECT b.user_id, b.id, d.name, d.description, d.available
    FROM booking b JOIN destination d ON d.id = b.destination_id"#;

#[derive(FromRow)]
struct BookedRow {
    user_id: i64,
    id: i64,
    name: String,
    description: String,
    available: bool,
}

impl From<BookedRow> for UserBookingSummary {
    fn from(row: BookedRow) -> Self {
        Self {
            id: row.id,
            destination: BookedDestination {
                name: row.name,
                description: row.description,
                available: row.available,
            },
        }
    }
}

/// 사용자 데이터 액세스 리포지토리
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE username = ?"))
            .bind(username)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(user)
    }

    /// 사용자 목록 프로젝션
    pub async fn find_all(&self, load: Load) -> StoreResult<Vec<UserSummary>> {
        let users = sqlx::query_as::<_, User>(&format!("{SELECT_USER} ORDER BY id ASC"))
            .fetch_all(self.db.pool())
            .await?;

        if load == Load::Shallow {
            return Ok(users.into_iter().map(UserSummary::shallow).collect());
        }

        let rows = sqlx::query_as::<_, BookedRow>(&format!("{SELECT_BOOKED} ORDER BY b.id DESC"))
            .fetch_all(self.db.pool())
            .await?;

        let mut bookings: HashMap<i64, Vec<UserBookingSummary>> = HashMap::new();
        for row in rows {
            bookings.entry(row.user_id).or_default().push(row.into());
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let owned = bookings.remove(&user.id).unwrap_or_default();
                UserSummary::with_bookings(user, owned)
            })
            .collect())
    }

    /// 사용자 단건 프로젝션
    pub async fn find_one(&self, id: i64, load: Load) -> StoreResult<Option<UserSummary>> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        if load == Load::Shallow {
            return Ok(Some(UserSummary::shallow(user)));
        }

        let rows = sqlx::query_as::<_, BookedRow>(&format!(
            "{SELECT_BOOKED} WHERE b.user_id = ? ORDER BY b.id DESC"
        ))
        .bind(id)
        .fetch_all(self.db.pool())
        .await?;

        let bookings = rows.into_iter().map(UserBookingSummary::from).collect();
        Ok(Some(UserSummary::with_bookings(user, bookings)))
    }

    /// 새 사용자를 저장합니다. `draft.password`는 이미 해시된 값이어야 합니다.
    pub async fn insert(&self, draft: &UserDraft) -> StoreResult<User> {
        let now = timestamp();

        let result = sqlx::query(
            r#"INSERT INTO "user" (username, password, role, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(&draft.username)
        .bind(&draft.password)
        .bind(draft.role)
        .bind(now)
        .bind(now)
        .execute(self.db.pool())
        .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            username: draft.username.clone(),
            password: draft.password.clone(),
            role: draft.role,
            created_at: now,
            updated_at: now,
        })
    }

    /// 기존 사용자의 변경 사항을 저장하고 갱신된 엔티티를 반환합니다.
    pub async fn save(&self, user: &User) -> StoreResult<User> {
        let now = timestamp();

        sqlx::query(
            r#"UPDATE "user" SET username = ?, password = ?, role = ?, updated_at = ? WHERE id = ?"#,
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(user.role)
        .bind(now)
        .bind(user.id)
        .execute(self.db.pool())
        .await?;

        Ok(User {
            updated_at: now,
            ..user.clone()
        })
    }

    /// 사용자를 삭제합니다. 해당 사용자의 예약도 함께 삭제됩니다.
    pub async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query(r#"DELETE FROM "user" WHERE id = ?"#)
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
