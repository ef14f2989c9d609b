use chrono::{DateTime, Utc};

use crate::config::{post_key, posts_prefix, MAX_POST_LENGTH, POST_SEQ_KEY};
use crate::core::errors::{Error, Result};
use crate::core::helpers::filter_post_body;
use crate::core::store::Store;
use crate::models::models::Post;
use crate::users;

pub fn create_post(store: &Store, author_id: &str, body: &str) -> Result<Post> {
    create_post_at(store, author_id, body, Utc::now())
}

// Same as create_post with an explicit creation time (import paths).
pub fn create_post_at(
    store: &Store,
    author_id: &str,
    body: &str,
    created_at: DateTime<Utc>,
) -> Result<Post> {
    if body.trim().is_empty() {
        return Err(Error::Validation("Post body is required".to_string()));
    }
    if body.len() > MAX_POST_LENGTH {
        return Err(Error::Validation("Post body too long (max 5000 chars)".to_string()));
    }

    users::get_user(store, author_id)?;

    let id = store.increment(POST_SEQ_KEY)?;
    let post = Post {
        id,
        author_id: author_id.to_string(),
        body: filter_post_body(body),
        created_at,
    };

    store.set_json(&post_key(author_id, id), &post)?;
    Ok(post)
}

pub fn posts_by_author(store: &Store, author_id: &str) -> Result<Vec<Post>> {
    let mut posts = Vec::new();
    for key in store.keys_with_prefix(&posts_prefix(author_id))? {
        if let Some(post) = store.get_json::<Post>(&key)? {
            posts.push(post);
        }
    }
    sort_newest_first(&mut posts);
    Ok(posts)
}

// Newest first. Ids are unique and monotonic, so they break timestamp
// ties and the order is a strict total order.
pub(crate) fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}
