// Per-user profile: lazily created, updated by merge-overwrite.

pub mod handlers;
pub mod store;
