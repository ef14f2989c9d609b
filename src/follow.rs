use std::collections::HashSet;

use chrono::Utc;

use crate::config::{follow_key, follows_prefix};
use crate::core::errors::{Error, Result};
use crate::core::store::Store;
use crate::models::models::FollowEdge;
use crate::users;

pub fn follow(store: &Store, follower_id: &str, followed_id: &str) -> Result<()> {
    if follower_id == followed_id {
        return Err(Error::SelfFollow);
    }

    // Target must exist; NotFound propagates.
    users::get_user(store, followed_id)?;

    let edge = FollowEdge {
        follower_id: follower_id.to_string(),
        followed_id: followed_id.to_string(),
        created_at: Utc::now(),
    };

    // Insert-if-absent keeps the edge a set member; following someone
    // twice is a silent success.
    store.insert_json(&follow_key(follower_id, followed_id), &edge)?;
    Ok(())
}

// Removing an edge that is not there is fine; double clicks and
// retries should not surface errors.
pub fn unfollow(store: &Store, follower_id: &str, followed_id: &str) -> Result<()> {
    store.delete(&follow_key(follower_id, followed_id))?;
    Ok(())
}

pub fn is_following(store: &Store, follower_id: &str, followed_id: &str) -> Result<bool> {
    store.exists(&follow_key(follower_id, followed_id))
}

// Unordered; internal building block for feed composition.
pub fn following_of(store: &Store, user_id: &str) -> Result<HashSet<String>> {
    let prefix = follows_prefix(user_id);
    let keys = store.keys_with_prefix(&prefix)?;
    Ok(keys
        .into_iter()
        .map(|key| key[prefix.len()..].to_string())
        .collect())
}
