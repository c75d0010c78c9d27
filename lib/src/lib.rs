#![no_std]
pub mod admin;
pub mod audit;
pub mod errors;
pub mod storage_keys;
pub mod types;
pub mod validation;


pub use errors::ContractError;
pub use storage_keys::*;
pub use types::*;

// Time
pub const SECONDS_PER_HOUR: u64 = 3600;
pub const MAX_RENTAL_DURATION_HOURS: u64 = 36500 * 24; // ~100 years

// Pagination
pub const DEFAULT_RENTALS_PAGE: u32 = 50;
pub const MAX_RENTALS_PAGE: u32 = 200;
pub const DEFAULT_AUDIT_PAGE: u32 = 100;

// Storage TTL (in ledgers, ~5s per ledger)
pub const PERSISTENT_TTL_THRESHOLD: u32 = 518_400; // ~30 days
pub const PERSISTENT_TTL_EXTEND: u32 = 1_036_800; // ~60 days
pub const INSTANCE_TTL_THRESHOLD: u32 = 17_280; // ~1 day
pub const INSTANCE_TTL_EXTEND: u32 = 518_400; // ~30 days
