pub mod tweets;
pub mod users;
