use soroban_sdk::{Env, Symbol};

use nftflex_lib::{
    EarningsWithdrawnEvent, RentalCreatedEvent, RentalEndedEvent, RentalStartedEvent,
};

pub const RENTAL_CREATED: &str = "RentalCreated";
pub const RENTAL_STARTED: &str = "RentalStarted";
pub const RENTAL_ENDED: &str = "RentalEnded";
pub const EARNINGS_WITHDRAWN: &str = "EarningsWithdrawn";

pub fn rental_created(env: &Env, event: RentalCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, RENTAL_CREATED), event.rental_id), event);
}

pub fn rental_started(env: &Env, event: RentalStartedEvent) {
    env.events()
        .publish((Symbol::new(env, RENTAL_STARTED), event.rental_id), event);
}

pub fn rental_ended(env: &Env, event: RentalEndedEvent) {
    env.events()
        .publish((Symbol::new(env, RENTAL_ENDED), event.rental_id), event);
}

pub fn earnings_withdrawn(env: &Env, event: EarningsWithdrawnEvent) {
    env.events()
        .publish((Symbol::new(env, EARNINGS_WITHDRAWN), event.rental_id), event);
}
