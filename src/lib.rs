//! Core of a small social feed: users who register and log in, short
//! posts, follow relationships, and the merged feed view. The HTTP
//! surface lives with the embedding application; everything here runs
//! against an explicit [`Store`] handle passed in by the caller.

pub mod auth;
pub mod config;
pub mod core;
pub mod feed;
pub mod follow;
pub mod models;
pub mod posts;
pub mod translate;
pub mod users;

pub use crate::core::errors::{Error, Result};
pub use crate::core::store::Store;
pub use crate::models::models::{FollowEdge, Post, Session, User};
