//! Destinations Entity Module

pub mod destination;

pub use destination::Destination;
