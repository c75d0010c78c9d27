use soroban_sdk::{contracttype, Env};

use nftflex_lib::{INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Next rental id; also the number of rentals ever created.
    RentalCount,
    Rental(u64),
}

/* ---------------- INSTANCE ---------------- */

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}
