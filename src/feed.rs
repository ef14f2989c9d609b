use crate::core::errors::Result;
use crate::core::store::Store;
use crate::follow;
use crate::models::models::Post;
use crate::posts;

// The user's own posts plus posts of everyone they follow, recomputed
// on each call. A user with no follows and no posts gets an empty vec.
pub fn feed_for(store: &Store, user_id: &str) -> Result<Vec<Post>> {
    let mut feed = posts::posts_by_author(store, user_id)?;

    for followed_id in follow::following_of(store, user_id)? {
        feed.extend(posts::posts_by_author(store, &followed_id)?);
    }

    posts::sort_newest_first(&mut feed);
    Ok(feed)
}
