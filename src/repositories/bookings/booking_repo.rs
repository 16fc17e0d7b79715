//! # 예약 리포지토리 구현
//!
//! 즉시 로딩 시 예약된 여행지를 JOIN으로 함께 읽습니다.
//! 예약 목록은 ID 내림차순입니다.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use crate::db::Database;
use crate::domain::dto::bookings::{BookingDraft, BookingRecord};
use crate::domain::entities::{Booking, Destination};
use crate::repositories::{timestamp, Load, StoreResult};

const SELECT_BOOKING: &str =
    "SELECT id, start_date, end_date, cost, created_at, user_id, destination_id FROM booking";

const SELECT_BOOKING_WITH_DESTINATION: &str = "SELECT \
    b.id, b.start_date, b.end_date, b.cost, b.created_at, b.user_id, b.destination_id, \
    d.name AS d_name, d.description AS d_description, d.state AS d_state, d.city AS d_city, \
    d.cost AS d_cost, d.max_guests AS d_max_guests, d.available AS d_available, \
    d.created_at AS d_created_at, d.updated_at AS d_updated_at \
    FROM booking b JOIN destination d ON d.id = b.destination_id";

/// 예약 + 여행지 JOIN 결과 한 행
#[derive(FromRow)]
struct BookingDestinationRow {
    #[sqlx(flatten)]
    booking: Booking,
    d_name: String,
    d_description: String,
    d_state: String,
    d_city: String,
    d_cost: f64,
    d_max_guests: i64,
    d_available: bool,
    d_created_at: DateTime<Utc>,
    d_updated_at: DateTime<Utc>,
}

impl From<BookingDestinationRow> for BookingRecord {
    fn from(row: BookingDestinationRow) -> Self {
        let destination = Destination {
            id: row.booking.destination_id,
            name: row.d_name,
            description: row.d_description,
            state: row.d_state,
            city: row.d_city,
            cost: row.d_cost,
            max_guests: row.d_max_guests,
            available: row.d_available,
            created_at: row.d_created_at,
            updated_at: row.d_updated_at,
        };
        BookingRecord::with_destination(row.booking, destination)
    }
}

#[derive(Debug, Clone)]
pub struct BookingRepository {
    db: Database,
}

impl BookingRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i64) -> StoreResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>(&format!("{SELECT_BOOKING} WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(booking)
    }

    pub async fn find_all(&self, load: Load) -> StoreResult<Vec<BookingRecord>> {
        let records: Vec<BookingRecord> = match load {
            Load::Shallow => {
                sqlx::query_as::<_, Booking>(&format!("{SELECT_BOOKING} ORDER BY id DESC"))
                    .fetch_all(self.db.pool())
                    .await?
                    .into_iter()
                    .map(BookingRecord::shallow)
                    .collect()
            }
            Load::Eager => sqlx::query_as::<_, BookingDestinationRow>(&format!(
                "{SELECT_BOOKING_WITH_DESTINATION} ORDER BY b.id DESC"
            ))
            .fetch_all(self.db.pool())
            .await?
            .into_iter()
            .map(BookingRecord::from)
            .collect(),
        };

        Ok(records)
    }

    pub async fn find_one(&self, id: i64, load: Load) -> StoreResult<Option<BookingRecord>> {
        let record = match load {
            Load::Shallow => self.find_by_id(id).await?.map(BookingRecord::shallow),
            Load::Eager => sqlx::query_as::<_, BookingDestinationRow>(&format!(
                "{SELECT_BOOKING_WITH_DESTINATION} WHERE b.id = ?"
            ))
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?
            .map(BookingRecord::from),
        };

        Ok(record)
    }

    pub async fn insert(
        &self,
        draft: &BookingDraft,
        user_id: i64,
        destination_id: i64,
    ) -> StoreResult<Booking> {
        let now = timestamp();

        let result = sqlx::query(
            "INSERT INTO booking (start_date, end_date, cost, created_at, user_id, destination_id) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(draft.start_date)
        .bind(draft.end_date)
        .bind(draft.cost)
        .bind(now)
        .bind(user_id)
        .bind(destination_id)
        .execute(self.db.pool())
        .await?;

        Ok(Booking {
            id: result.last_insert_rowid(),
            start_date: draft.start_date,
            end_date: draft.end_date,
            cost: draft.cost,
            created_at: now,
            user_id,
            destination_id,
        })
    }

    pub async fn save(&self, booking: &Booking) -> StoreResult<Booking> {
        sqlx::query("UPDATE booking SET start_date = ?, end_date = ?, cost = ? WHERE id = ?")
            .bind(booking.start_date)
            .bind(booking.end_date)
            .bind(booking.cost)
            .bind(booking.id)
            .execute(self.db.pool())
            .await?;

        Ok(booking.clone())
    }

    pub async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM booking WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::destinations::DestinationDraft;
    use crate::domain::dto::users::UserDraft;
    use crate::domain::entities::users::Role;
    use crate::repositories::{fixtures, DestinationRepository, StoreError, UserRepository};

    struct Fixture {
        bookings: BookingRepository,
        users: UserRepository,
        destinations: DestinationRepository,
        user_id: i64,
        destination_id: i64,
    }

    async fn fixture() -> Fixture {
        let database = fixtures::database().await;
        let users = UserRepository::new(database.clone());
        let destinations = DestinationRepository::new(database.clone());

        let user = users
            .insert(&UserDraft {
                username: "traveler".to_string(),
                password: "$2b$04$hash".to_string(),
                role: Role::User,
            })
            .await
            .unwrap();
        let destination = destinations
            .insert(&DestinationDraft {
                name: "New York".to_string(),
                description: "description".to_string(),
                state: "NY".to_string(),
                city: "New York".to_string(),
                cost: 100.0,
                max_guests: 2,
                available: true,
            })
            .await
            .unwrap();

        Fixture {
            bookings: BookingRepository::new(database),
            users,
            destinations,
            user_id: user.id,
            destination_id: destination.id,
        }
    }

    fn draft() -> BookingDraft {
        let at = DateTime::parse_from_rfc3339("2022-03-26T00:15:23.138Z")
            .unwrap()
            .with_timezone(&Utc);
        BookingDraft {
            start_date: at,
            end_date: at,
            cost: 100.0,
        }
    }

    #[actix_web::test]
    async fn test_eager_find_embeds_destination() {
        let f = fixture().await;
        let booking = f.bookings.insert(&draft(), f.user_id, f.destination_id).await.unwrap();

        let record = f.bookings.find_one(booking.id, Load::Eager).await.unwrap().unwrap();

        assert_eq!(record.booking, booking);
        assert_eq!(record.destination.unwrap().name, "New York");
        assert!(f.bookings.find_one(booking.id, Load::Shallow).await.unwrap().unwrap().destination.is_none());
    }

    #[actix_web::test]
    async fn test_unknown_reference_is_foreign_key_violation() {
        let f = fixture().await;

        let result = f.bookings.insert(&draft(), f.user_id, 999).await;

        assert!(matches!(result, Err(StoreError::ForeignKeyViolation)));
    }

    #[actix_web::test]
    async fn test_deleting_owner_or_destination_cascades() {
        let f = fixture().await;
        let first = f.bookings.insert(&draft(), f.user_id, f.destination_id).await.unwrap();

        f.users.delete(f.user_id).await.unwrap();
        assert!(f.bookings.find_by_id(first.id).await.unwrap().is_none());

        assert!(f.bookings.find_all(Load::Eager).await.unwrap().is_empty());
        assert!(f.destinations.delete(f.destination_id).await.unwrap());
    }

    #[actix_web::test]
    async fn test_list_is_ordered_by_descending_id() {
        let f = fixture().await;
        let first = f.bookings.insert(&draft(), f.user_id, f.destination_id).await.unwrap();
        let second = f.bookings.insert(&draft(), f.user_id, f.destination_id).await.unwrap();

        let ids: Vec<i64> = f
            .bookings
            .find_all(Load::Eager)
            .await
            .unwrap()
            .iter()
            .map(|record| record.booking.id)
            .collect();

        assert_eq!(ids, vec![second.id, first.id]);
    }
}
