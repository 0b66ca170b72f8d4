//! Authentication route handlers
//!
//! - `POST /api/usrs/login` — credential check and token issuance
//! - `POST /api/usrs/logout` — token revocation; deliberately not behind
//!   the JWT middleware so its failures use the 400-coded logout contract

pub mod login;
pub mod logout;

pub use login::login;
pub use logout::logout;
