pub mod authenticated_user;
pub mod access_policy;

pub use authenticated_user::AuthenticatedUser;
pub use access_policy::AccessPolicy;
