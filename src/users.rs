use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::*;
use crate::core::errors::{Error, Result};
use crate::core::helpers::{hash_password, sanitize_text, verify_password};
use crate::core::store::Store;
use crate::models::models::User;

pub fn register(store: &Store, username: &str, email: &str, password: &str) -> Result<User> {
    // Sanitize username at input time
    let username = sanitize_text(username);

    if username.is_empty() {
        return Err(Error::Validation("Username is required".to_string()));
    }
    if username.len() < MIN_USERNAME_LENGTH || username.len() > MAX_USERNAME_LENGTH {
        return Err(Error::Validation("Username must be 3-50 characters".to_string()));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(Error::Validation("A valid email address is required".to_string()));
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(Error::Validation(
            "Password must be at least 3 characters".to_string(),
        ));
    }

    let id = Uuid::new_v4().to_string();

    // Usernames and emails compare as exact strings. The index keys are
    // the uniqueness constraint: insert-if-absent makes concurrent
    // registration of the same name a clean conflict, not a race.
    if !store.insert_json(&username_key(&username), &id)? {
        return Err(Error::Duplicate("Username already taken".to_string()));
    }
    if !store.insert_json(&email_key(email), &id)? {
        store.delete(&username_key(&username))?;
        return Err(Error::Duplicate("Email already registered".to_string()));
    }

    let user = User {
        id: id.clone(),
        username,
        email: email.to_string(),
        password_hash: hash_password(password)?,
        about: None,
        last_seen: None,
    };
    store.set_json(&user_key(&id), &user)?;

    Ok(user)
}

// Unknown username and wrong password are indistinguishable to the
// caller. Does not record activity; that is touch_last_seen's job.
pub fn authenticate(store: &Store, username: &str, password: &str) -> Result<User> {
    let user = match lookup_by_username(store, username)? {
        Some(user) => user,
        None => return Err(Error::Auth),
    };

    if !verify_password(password, &user.password_hash) {
        return Err(Error::Auth);
    }

    Ok(user)
}

pub fn find_by_username(store: &Store, username: &str) -> Result<User> {
    lookup_by_username(store, username)?
        .ok_or_else(|| Error::NotFound(format!("User {} not found", username)))
}

pub fn get_user(store: &Store, user_id: &str) -> Result<User> {
    store
        .get_json(&user_key(user_id))?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))
}

// Last-writer-wins; an older clock reading never rolls the value back.
// Compare and set under one lock, so a stale reading cannot land after
// a newer one.
pub fn touch_last_seen(store: &Store, user_id: &str, now: DateTime<Utc>) -> Result<()> {
    let found = store.update_json(&user_key(user_id), |user: &mut User| {
        if user.last_seen.map_or(true, |seen| seen <= now) {
            user.last_seen = Some(now);
            true
        } else {
            false
        }
    })?;

    if !found {
        return Err(Error::NotFound("User not found".to_string()));
    }
    Ok(())
}

pub fn edit_profile(
    store: &Store,
    user_id: &str,
    new_username: Option<&str>,
    new_about: Option<&str>,
) -> Result<User> {
    let mut user = get_user(store, user_id)?;

    // Validate every input before touching the store; a failed edit must
    // leave the record and the index keys exactly as they were.
    let new_username = match new_username {
        Some(name) => {
            let name = sanitize_text(name);
            if name.len() < MIN_USERNAME_LENGTH || name.len() > MAX_USERNAME_LENGTH {
                return Err(Error::Validation("Username must be 3-50 characters".to_string()));
            }
            Some(name)
        }
        None => None,
    };
    let new_about = match new_about {
        Some(about) => {
            if about.len() > MAX_ABOUT_LENGTH {
                return Err(Error::Validation("About text too long (max 500 chars)".to_string()));
            }
            Some(sanitize_text(about))
        }
        None => None,
    };

    if let Some(new_username) = new_username {
        if new_username != user.username {
            // Claim the new name before releasing the old one; the rename
            // only succeeds if no other user holds it.
            if !store.insert_json(&username_key(&new_username), &user.id)? {
                return Err(Error::Duplicate("Username already taken".to_string()));
            }
            store.delete(&username_key(&user.username))?;
            user.username = new_username;
        }
    }

    if let Some(about) = new_about {
        user.about = if about.is_empty() { None } else { Some(about) };
    }

    store.set_json(&user_key(&user.id), &user)?;
    Ok(user)
}

fn lookup_by_username(store: &Store, username: &str) -> Result<Option<User>> {
    let id: Option<String> = store.get_json(&username_key(username))?;
    match id {
        Some(id) => store.get_json(&user_key(&id)),
        None => Ok(None),
    }
}
