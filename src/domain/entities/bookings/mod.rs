//! Bookings Entity Module

pub mod booking;

pub use booking::Booking;
