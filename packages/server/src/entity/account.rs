/// An administrative login principal.
///
/// `password` holds a salted Argon2 hash, never plain text, and is never
/// serialized into a response.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

/// Account payload for insertion. `id` is assigned by the store and
/// `is_admin` always starts false.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    /// Already-hashed password.
    pub password: String,
}
