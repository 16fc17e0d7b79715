//! 테이블 정의
//!
//! `user`, `destination`, `booking` 세 테이블과 booking → user, booking → destination
//! 외래 키로 구성됩니다. 예약이 남아 있는 사용자나 여행지를 삭제하면
//! 해당 예약도 함께 삭제됩니다 (`ON DELETE CASCADE`).

/// 시작 시 순서대로 실행되는 스키마 구문
pub const STATEMENTS: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS "user" (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        role TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS destination (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        description TEXT NOT NULL DEFAULT 'description',
        state TEXT NOT NULL,
        city TEXT NOT NULL,
        cost REAL NOT NULL,
        max_guests INTEGER NOT NULL,
        available INTEGER NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS booking (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        cost REAL NOT NULL,
        created_at TEXT NOT NULL,
        user_id INTEGER NOT NULL REFERENCES "user"(id) ON DELETE CASCADE,
        destination_id INTEGER NOT NULL REFERENCES destination(id) ON DELETE CASCADE
    )"#,
    "CREATE INDEX IF NOT EXISTS idx_booking_user_id ON booking(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_booking_destination_id ON booking(destination_id)",
];
