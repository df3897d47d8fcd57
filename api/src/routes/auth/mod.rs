//! Authentication route handlers
//!
//! - Registration (open)
//! - Login (password guard, returns a bearer token)
//! - Current author (token guard)

pub mod login;
pub mod me;
pub mod register;

pub use login::login;
pub use me::me;
pub use register::register;
