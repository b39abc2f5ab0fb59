// Account lifecycle: signup, login, logout, session.
// Tokens are opaque DB-backed bearer keys so logout can revoke them
// server-side; passwords are Argon2id PHC strings.

pub mod handlers;
pub mod passwords;
pub mod store;
pub mod tokens;
