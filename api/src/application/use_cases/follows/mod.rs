pub mod follow_user;
pub mod unfollow_user;
