//! # Destination DTOs Module

pub mod request;
pub mod response;

pub use request::DestinationDraft;
pub use response::DestinationRecord;
