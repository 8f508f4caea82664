//! Credential handling: salted password hashes and signed session tokens.

pub mod password;
pub mod token;

pub use password::{hash_password, verify_password};
pub use token::{Claims, IssuedToken, TokenService};
