//! # Booking DTOs Module

pub mod request;
pub mod response;

pub use request::BookingDraft;
pub use response::BookingRecord;
