pub mod art;
pub mod config;
pub mod feed;
pub mod post;
