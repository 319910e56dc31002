use std::sync::atomic::{AtomicI32, Ordering};

use chrono::Utc;
use dashmap::DashMap;

use crate::entity::account::{Account, NewAccount};
use crate::entity::dog::{Dog, DogStatus, NewDog};

use super::{DogFilters, Storage};

/// In-memory storage: two tables keyed by auto-incrementing integer ids.
///
/// All state lives for the process lifetime only. Ids are never reused.
/// Every operation is a single whole-record read or replacement, so no
/// handler can observe a torn intermediate state.
pub struct MemStorage {
    dogs: DashMap<i32, Dog>,
    accounts: DashMap<i32, Account>,
    next_dog_id: AtomicI32,
    next_account_id: AtomicI32,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            dogs: DashMap::new(),
            accounts: DashMap::new(),
            next_dog_id: AtomicI32::new(1),
            next_account_id: AtomicI32::new(1),
        }
    }

    /// Flip the admin flag on an existing account. Only the bootstrap seed
    /// uses this; there is no admin-promotion endpoint.
    pub fn make_admin(&self, id: i32) {
        if let Some(mut account) = self.accounts.get_mut(&id) {
            account.is_admin = true;
        }
    }

    pub fn dog_count(&self) -> usize {
        self.dogs.len()
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemStorage {
    fn create_dog(&self, dog: NewDog) -> Dog {
        let id = self.next_dog_id.fetch_add(1, Ordering::Relaxed);
        let dog = Dog {
            id,
            breed: dog.breed,
            color: dog.color,
            description: dog.description,
            image_urls: dog.image_urls,
            address: dog.address,
            city: dog.city,
            latitude: dog.latitude,
            longitude: dog.longitude,
            date_found: dog.date_found,
            time_found: dog.time_found,
            status: DogStatus::Active,
            finder_name: dog.finder_name,
            finder_phone: dog.finder_phone,
            finder_email: dog.finder_email,
            created_at: Utc::now(),
        };
        self.dogs.insert(id, dog.clone());
        dog
    }

    fn dog_by_id(&self, id: i32) -> Option<Dog> {
        self.dogs.get(&id).map(|d| d.clone())
    }

    fn dogs_with_filters(&self, filters: &DogFilters) -> Vec<Dog> {
        let mut results: Vec<Dog> = self
            .dogs
            .iter()
            .filter(|dog| matches_filters(dog.value(), filters))
            .map(|dog| dog.value().clone())
            .collect();

        // Newest first; id breaks created_at ties deterministically.
        results.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        results
    }

    fn update_dog_status(&self, id: i32, status: DogStatus) -> Option<Dog> {
        let mut dog = self.dogs.get_mut(&id)?;
        dog.status = status;
        Some(dog.clone())
    }

    fn create_account(&self, account: NewAccount) -> Account {
        let id = self.next_account_id.fetch_add(1, Ordering::Relaxed);
        let account = Account {
            id,
            username: account.username,
            password: account.password,
            is_admin: false,
        };
        self.accounts.insert(id, account.clone());
        account
    }

    fn account_by_id(&self, id: i32) -> Option<Account> {
        self.accounts.get(&id).map(|a| a.clone())
    }

    fn account_by_username(&self, username: &str) -> Option<Account> {
        self.accounts
            .iter()
            .find(|a| a.username == username)
            .map(|a| a.clone())
    }
}

fn matches_filters(dog: &Dog, filters: &DogFilters) -> bool {
    if let Some(breed) = non_empty(&filters.breed)
        && dog.breed.as_deref() != Some(breed)
    {
        return false;
    }

    if let Some(city) = non_empty(&filters.city)
        && !dog.city.to_lowercase().contains(&city.to_lowercase())
    {
        return false;
    }

    if let Some(query) = non_empty(&filters.query) {
        let query = query.to_lowercase();
        let breed_hit = dog
            .breed
            .as_deref()
            .is_some_and(|b| b.to_lowercase().contains(&query));
        let hit = breed_hit
            || dog.color.to_lowercase().contains(&query)
            || dog.description.to_lowercase().contains(&query)
            || dog.address.to_lowercase().contains(&query)
            || dog.city.to_lowercase().contains(&query);
        if !hit {
            return false;
        }
    }

    true
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
