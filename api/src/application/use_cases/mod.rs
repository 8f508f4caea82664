pub mod auth;
pub mod follows;
pub mod likes;
pub mod tweets;
pub mod users;
