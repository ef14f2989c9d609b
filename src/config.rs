// === Input limits ===
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 50;
pub const MIN_PASSWORD_LENGTH: usize = 3;
pub const MAX_ABOUT_LENGTH: usize = 500;
pub const MAX_POST_LENGTH: usize = 5000;

// === Store key layout ===
pub const POST_SEQ_KEY: &str = "seq:post";

pub fn user_key(user_id: &str) -> String {
    format!("user:{}", user_id)
}

pub fn username_key(username: &str) -> String {
    format!("username:{}", username)
}

pub fn email_key(email: &str) -> String {
    format!("email:{}", email)
}

// Post ids are zero-padded so an ordered prefix scan walks an author's
// posts in id order.
pub fn post_key(author_id: &str, post_id: u64) -> String {
    format!("post:{}:{:020}", author_id, post_id)
}

pub fn posts_prefix(author_id: &str) -> String {
    format!("post:{}:", author_id)
}

pub fn follow_key(follower_id: &str, followed_id: &str) -> String {
    format!("follow:{}:{}", follower_id, followed_id)
}

pub fn follows_prefix(follower_id: &str) -> String {
    format!("follow:{}:", follower_id)
}

pub fn token_key(token: &str) -> String {
    format!("token:{}", token)
}

// === Settings ===
pub fn token_expiration_hours() -> i64 {
    std::env::var("RIPPLE_TOKEN_EXPIRATION_HOURS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(24)
}

pub fn translator_key() -> Option<String> {
    std::env::var("RIPPLE_TRANSLATOR_KEY")
        .ok()
        .filter(|key| !key.is_empty())
}
