pub mod create_tweet;
pub mod delete_tweet;
pub mod get_feed;
pub mod list_my_tweets;
pub mod list_tweets;
pub mod search_tweets;
pub mod update_tweet;
