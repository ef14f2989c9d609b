use chrono::Utc;
use uuid::Uuid;

use crate::config::{token_expiration_hours, token_key};
use crate::core::errors::{Error, Result};
use crate::core::store::Store;
use crate::models::models::{Session, User};
use crate::users;

pub fn login(store: &Store, username: &str, password: &str) -> Result<Session> {
    let user = users::authenticate(store, username, password)?;

    let session = Session {
        token: Uuid::new_v4().to_string(),
        user_id: user.id,
        created_at: Utc::now(),
    };
    store.set_json(&token_key(&session.token), &session)?;

    Ok(session)
}

pub fn logout(store: &Store, token: &str) -> Result<()> {
    store.delete(&token_key(token))?;
    Ok(())
}

// Resolves a bearer token to its user and records the activity. Auth
// failure for unknown, expired, or dangling tokens.
pub fn current_user(store: &Store, token: &str) -> Result<User> {
    let session: Session = store.get_json(&token_key(token))?.ok_or(Error::Auth)?;

    let now = Utc::now();
    let age_hours = (now - session.created_at).num_hours();
    if age_hours > token_expiration_hours() {
        store.delete(&token_key(token))?;
        return Err(Error::Auth);
    }

    // Check the user still exists before touching anything
    users::get_user(store, &session.user_id).map_err(|_| Error::Auth)?;

    users::touch_last_seen(store, &session.user_id, now)?;
    users::get_user(store, &session.user_id)
}
