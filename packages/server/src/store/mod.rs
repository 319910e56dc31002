mod memory;

pub use memory::MemStorage;

use crate::entity::account::{Account, NewAccount};
use crate::entity::dog::{Dog, DogStatus, NewDog};

/// Filter criteria for listing queries. Absent or empty criteria are
/// ignored; provided criteria combine conjunctively.
#[derive(Debug, Default, Clone)]
pub struct DogFilters {
    /// Exact, case-sensitive breed match.
    pub breed: Option<String>,
    /// Case-insensitive substring match on the city.
    pub city: Option<String>,
    /// Case-insensitive substring match across breed, color, description,
    /// address, and city.
    pub query: Option<String>,
}

/// Data-access seam for the two tables.
///
/// The in-memory implementation is the only one today; a persistent backend
/// would be a second implementation of this same contract.
pub trait Storage: Send + Sync {
    /// Insert a listing: assigns the next id, sets `status = active`, and
    /// stamps `created_at`.
    fn create_dog(&self, dog: NewDog) -> Dog;

    fn dog_by_id(&self, id: i32) -> Option<Dog>;

    /// Linear scan over the dog table, filtered per [`DogFilters`] and
    /// sorted newest-first by creation time.
    fn dogs_with_filters(&self, filters: &DogFilters) -> Vec<Dog>;

    /// Replace the status of an existing listing. Returns `None` when the
    /// id is unknown.
    fn update_dog_status(&self, id: i32, status: DogStatus) -> Option<Dog>;

    /// Insert an account with `is_admin = false`. Username uniqueness is
    /// NOT enforced here; lookups return the first match.
    fn create_account(&self, account: NewAccount) -> Account;

    fn account_by_id(&self, id: i32) -> Option<Account>;

    /// Linear scan over the account table; first matching username wins.
    fn account_by_username(&self, username: &str) -> Option<Account>;
}
