pub mod user_draft;

pub use user_draft::UserDraft;
