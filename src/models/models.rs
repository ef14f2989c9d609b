use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub about: Option<String>,
    pub last_seen: Option<DateTime<Utc>>,
}

impl User {
    // Public view; never includes the credential hash.
    pub fn profile_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "username": self.username,
            "about": self.about.as_ref().unwrap_or(&String::new()),
            "last_seen": self.last_seen,
        })
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Post {
    pub id: u64,
    pub author_id: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct FollowEdge {
    pub follower_id: String,
    pub followed_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}
