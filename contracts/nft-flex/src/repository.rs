use soroban_sdk::{Env, Vec};

use nftflex_lib::{Rental, PERSISTENT_TTL_EXTEND, PERSISTENT_TTL_THRESHOLD};

use crate::storage::DataKey;

/// Owns the rental table and the id counter.
///
/// `RentalManager` is the only caller; business rules never touch
/// `env.storage()` for rentals directly.
pub struct RentalRepository {
    env: Env,
}

impl RentalRepository {
    pub fn new(env: Env) -> Self {
        Self { env }
    }

    // ------------------------------------------------------------------
    // Id allocation
    // ------------------------------------------------------------------

    pub fn rental_count(&self) -> u64 {
        self.env
            .storage()
            .instance()
            .get(&DataKey::RentalCount)
            .unwrap_or(0)
    }

    /// Reserve the next id. Ids are zero-based and never reused.
    pub fn allocate_id(&self) -> u64 {
        let id = self.rental_count();
        self.env
            .storage()
            .instance()
            .set(&DataKey::RentalCount, &(id + 1));
        id
    }

    pub fn exists(&self, rental_id: u64) -> bool {
        rental_id < self.rental_count()
    }

    // ------------------------------------------------------------------
    // Rental CRUD
    // ------------------------------------------------------------------

    pub fn save(&self, rental: &Rental) {
        let key = DataKey::Rental(rental.id);
        self.env.storage().persistent().set(&key, rental);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
    }

    pub fn load(&self, rental_id: u64) -> Option<Rental> {
        if !self.exists(rental_id) {
            return None;
        }
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Rental(rental_id))
    }

    /// Rentals in id order starting at `start_id`, at most `limit` of them.
    pub fn load_page(&self, start_id: u64, limit: u32) -> Vec<Rental> {
        let mut page = Vec::new(&self.env);
        let end = self
            .rental_count()
            .min(start_id.saturating_add(u64::from(limit)));

        for id in start_id..end {
            if let Some(rental) = self.load(id) {
                page.push_back(rental);
            }
        }
        page
    }
}
