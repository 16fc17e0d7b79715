//! # 여행지 리포지토리 구현
//!
//! - **유니크 제약**: `name`
//! - **정렬**: 여행지 목록과 여행지별 예약 모두 ID 내림차순

use std::collections::HashMap;
use crate::db::Database;
use crate::domain::dto::destinations::{DestinationDraft, DestinationRecord};
use crate::domain::entities::{Booking, Destination};
use crate::repositories::{timestamp, Load, StoreResult};

const SELECT_DESTINATION: &str = "SELECT id, name, description, state, city, cost, \
    max_guests, available, created_at, updated_at FROM destination";

const SELECT_BOOKING: &str =
    "SELECT id, start_date, end_date, cost, created_at, user_id, destination_id FROM booking";

#[derive(Debug, Clone)]
pub struct DestinationRepository {
    db: Database,
}

impl DestinationRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i64) -> StoreResult<Option<Destination>> {
        let destination =
            sqlx::query_as::<_, Destination>(&format!("{SELECT_DESTINATION} WHERE id = ?"))
                .bind(id)
                .fetch_optional(self.db.pool())
                .await?;

        Ok(destination)
    }

    pub async fn find_all(&self, load: Load) -> StoreResult<Vec<DestinationRecord>> {
        let destinations =
            sqlx::query_as::<_, Destination>(&format!("{SELECT_DESTINATION} ORDER BY id DESC"))
                .fetch_all(self.db.pool())
                .await?;

        if load == Load::Shallow {
            return Ok(destinations.into_iter().map(DestinationRecord::shallow).collect());
        }

        let bookings = sqlx::query_as::<_, Booking>(&format!("{SELECT_BOOKING} ORDER BY id DESC"))
            .fetch_all(self.db.pool())
            .await?;

        let mut grouped: HashMap<i64, Vec<Booking>> = HashMap::new();
        for booking in bookings {
            grouped.entry(booking.destination_id).or_default().push(booking);
        }

        Ok(destinations
            .into_iter()
            .map(|destination| {
                let bookings = grouped.remove(&destination.id).unwrap_or_default();
                DestinationRecord::with_bookings(destination, bookings)
            })
            .collect())
    }

    pub async fn find_one(&self, id: i64, load: Load) -> StoreResult<Option<DestinationRecord>> {
        let Some(destination) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        if load == Load::Shallow {
            return Ok(Some(DestinationRecord::shallow(destination)));
        }

        let bookings = sqlx::query_as::<_, Booking>(&format!(
            "{SELECT_BOOKING} WHERE destination_id = ? ORDER BY id DESC"
        ))
        .bind(id)
        .fetch_all(self.db.pool())
        .await?;

        Ok(Some(DestinationRecord::with_bookings(destination, bookings)))
    }

    pub async fn insert(&self, draft: &DestinationDraft) -> StoreResult<Destination> {
        let now = timestamp();

        let result = sqlx::query(
            "INSERT INTO destination \
             (name, description, state, city, cost, max_guests, available, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.state)
        .bind(&draft.city)
        .bind(draft.cost)
        .bind(draft.max_guests)
        .bind(draft.available)
        .bind(now)
        .bind(now)
        .execute(self.db.pool())
        .await?;

        Ok(Destination {
            id: result.last_insert_rowid(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            state: draft.state.clone(),
            city: draft.city.clone(),
            cost: draft.cost,
            max_guests: draft.max_guests,
            available: draft.available,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn save(&self, destination: &Destination) -> StoreResult<Destination> {
        let now = timestamp();

        sqlx::query(
            "UPDATE destination SET name = ?, description = ?, state = ?, city = ?, cost = ?, \
             max_guests = ?, available = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&destination.name)
        .bind(&destination.description)
        .bind(&destination.state)
        .bind(&destination.city)
        .bind(destination.cost)
        .bind(destination.max_guests)
        .bind(destination.available)
        .bind(now)
        .bind(destination.id)
        .execute(self.db.pool())
        .await?;

        Ok(Destination {
            updated_at: now,
            ..destination.clone()
        })
    }

    /// 여행지를 삭제합니다. 해당 여행지의 예약도 함께 삭제됩니다.
    pub async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM destination WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{fixtures, StoreError};

    fn draft(name: &str) -> DestinationDraft {
        DestinationDraft {
            name: name.to_string(),
            description: Destination::DEFAULT_DESCRIPTION.to_string(),
            state: "NY".to_string(),
            city: "New York".to_string(),
            cost: 100.0,
            max_guests: 2,
            available: true,
        }
    }

    #[actix_web::test]
    async fn test_list_is_ordered_by_descending_id() {
        let repo = DestinationRepository::new(fixtures::database().await);
        repo.insert(&draft("New York")).await.unwrap();
        repo.insert(&draft("Boston")).await.unwrap();

        let records = repo.find_all(Load::Eager).await.unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.destination.name.as_str()).collect();

        assert_eq!(names, vec!["Boston", "New York"]);
        assert_eq!(records[0].bookings, Some(vec![]));
    }

    #[actix_web::test]
    async fn test_duplicate_name_leaves_original_unchanged() {
        let repo = DestinationRepository::new(fixtures::database().await);
        let original = repo.insert(&draft("New York")).await.unwrap();

        let mut duplicate = draft("New York");
        duplicate.cost = 999.0;
        let result = repo.insert(&duplicate).await;

        assert!(matches!(result, Err(StoreError::UniqueViolation)));
        assert_eq!(repo.find_by_id(original.id).await.unwrap().unwrap(), original);
    }

    #[actix_web::test]
    async fn test_rename_to_existing_name_is_unique_violation() {
        let repo = DestinationRepository::new(fixtures::database().await);
        repo.insert(&draft("New York")).await.unwrap();
        let mut boston = repo.insert(&draft("Boston")).await.unwrap();

        boston.name = "New York".to_string();

        assert!(matches!(repo.save(&boston).await, Err(StoreError::UniqueViolation)));
    }
}
