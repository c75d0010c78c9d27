use soroban_sdk::{contracttype, Address};

/// Currency a rental is priced and collateralized in.
///
/// Rent and collateral always travel together in one transfer, so a single
/// currency identity covers both.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CollateralAsset {
    /// The network's native asset, resolved through the token contract
    /// configured at initialization.
    Native,
    /// An explicit fungible token contract.
    Token(Address),
}

/// Lifecycle state of a rental slot.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RentalState {
    /// Listed by the owner, waiting for a renter.
    Listed = 0,
    /// Rented; payment is held in escrow.
    Active = 1,
    /// Collateral returned to the renter. Terminal.
    Settled = 2,
}

/// A single rental slot.
///
/// Stored under `DataKey::Rental(id)` in persistent storage. Settled rentals
/// are kept as historical records.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rental {
    pub id: u64,
    pub asset_address: Address,
    pub token_id: u64,
    pub owner: Address,
    pub price_per_hour: i128,
    pub is_fractional: bool,
    pub collateral_token: CollateralAsset,
    pub collateral_amount: i128,
    pub renter: Option<Address>,
    pub start_time: Option<u64>,
    pub end_time: Option<u64>,
    pub state: RentalState,
    /// Rent portion of the renter's payment, owed to the owner.
    pub rent_paid: i128,
    pub earnings_withdrawn: bool,
    pub created_at: u64,
}

impl Rental {
    pub fn is_active(&self) -> bool {
        self.state == RentalState::Active
    }

    /// True once the rental has been activated, whether or not it has
    /// since been settled.
    pub fn was_activated(&self) -> bool {
        self.renter.is_some()
    }

    /// Returns `true` when `now` has reached the end of the rental window.
    /// The boundary is inclusive.
    pub fn has_expired_at(&self, now: u64) -> bool {
        match self.end_time {
            Some(end) => now >= end,
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Event payloads
// ---------------------------------------------------------------------------

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentalCreatedEvent {
    pub rental_id: u64,
    pub owner: Address,
    pub asset_address: Address,
    pub token_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentalStartedEvent {
    pub rental_id: u64,
    pub renter: Address,
    pub start_time: u64,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentalEndedEvent {
    pub rental_id: u64,
    pub renter: Address,
    pub collateral_returned: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EarningsWithdrawnEvent {
    pub rental_id: u64,
    pub owner: Address,
    pub amount: i128,
}
