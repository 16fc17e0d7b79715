pub mod request;

pub use request::{ChangePasswordRequest, LoginRequest};
