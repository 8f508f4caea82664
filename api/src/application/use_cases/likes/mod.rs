pub mod like_tweet;
pub mod list_likers;
pub mod unlike_tweet;
