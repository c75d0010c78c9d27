/// Audit logging for rental ledger operations
///
/// Every successful state change appends an immutable entry with an
/// auto-incrementing id. Entries live in persistent storage under their own
/// keys so they never collide with rental records.
use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::{
    AUDIT_LOG_COUNTER_KEY, AUDIT_LOG_ENTRY_KEY, DEFAULT_AUDIT_PAGE, PERSISTENT_TTL_EXTEND,
    PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// AUDIT LOG TYPES
// ============================================================================

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum OperationType {
    // Rental lifecycle
    RentalCreated = 1,
    RentalStarted = 2,
    RentalEnded = 3,
    EarningsWithdrawn = 4,

    // Configuration
    ContractInitialized = 10,
    NativeTokenChanged = 11,
    AdminTransferred = 12,
}

/// Immutable audit log entry
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditLog {
    pub id: u64,
    pub timestamp: u64,
    /// Address that triggered the operation
    pub operator: Address,
    pub operation_type: OperationType,
    /// Rental the operation touched, if any
    pub rental_id: Option<u64>,
    /// Value moved by the operation (0 when nothing moved)
    pub amount: i128,
}

/// Result of a paginated audit log query
#[contracttype]
#[derive(Clone, Debug)]
pub struct AuditLogQueryResult {
    pub logs: Vec<AuditLog>,
    pub total_count: u64,
    pub start_id: u64,
    pub end_id: u64,
    pub has_more: bool,
}

// ============================================================================
// STORAGE
// ============================================================================

pub fn get_log_id_counter(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get::<_, u64>(&AUDIT_LOG_COUNTER_KEY)
        .unwrap_or(0)
}

fn increment_log_id_counter(env: &Env) -> u64 {
    let next = get_log_id_counter(env).saturating_add(1);
    env.storage().persistent().set(&AUDIT_LOG_COUNTER_KEY, &next);
    env.storage().persistent().extend_ttl(
        &AUDIT_LOG_COUNTER_KEY,
        PERSISTENT_TTL_THRESHOLD,
        PERSISTENT_TTL_EXTEND,
    );
    next
}

fn store_audit_log(env: &Env, log: &AuditLog) {
    let key = (AUDIT_LOG_ENTRY_KEY, log.id);
    env.storage().persistent().set(&key, log);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

pub fn get_audit_log(env: &Env, log_id: u64) -> Option<AuditLog> {
    env.storage().persistent().get(&(AUDIT_LOG_ENTRY_KEY, log_id))
}

// ============================================================================
// CREATION
// ============================================================================

/// Append a new entry and return its id.
pub fn create_audit_log(
    env: &Env,
    operator: Address,
    operation_type: OperationType,
    rental_id: Option<u64>,
    amount: i128,
) -> u64 {
    let id = increment_log_id_counter(env);
    let log = AuditLog {
        id,
        timestamp: env.ledger().timestamp(),
        operator,
        operation_type,
        rental_id,
        amount,
    };
    store_audit_log(env, &log);
    id
}

// ============================================================================
// QUERYING
// ============================================================================

/// Query audit logs with pagination.
///
/// Returns logs inclusive of `start_id` and `end_id`. A `start_id` of 0 means
/// the first entry, an `end_id` past the end is clamped, and `max_results`
/// of 0 means the default page size.
pub fn query_audit_logs(
    env: &Env,
    start_id: u64,
    end_id: u64,
    max_results: u32,
) -> AuditLogQueryResult {
    let total_count = get_log_id_counter(env);

    let actual_start = if start_id == 0 { 1 } else { start_id };
    let actual_end = end_id.min(total_count);
    let limit = if max_results == 0 {
        DEFAULT_AUDIT_PAGE
    } else {
        max_results
    };

    let mut logs: Vec<AuditLog> = Vec::new(env);

    if actual_start > actual_end {
        return AuditLogQueryResult {
            logs,
            total_count,
            start_id: actual_start,
            end_id: actual_end,
            has_more: false,
        };
    }

    let mut count = 0u32;
    let mut current_id = actual_start;

    while current_id <= actual_end && count < limit {
        if let Some(log) = get_audit_log(env, current_id) {
            logs.push_back(log);
            count += 1;
        }
        current_id += 1;
    }

    // Stopped on the limit rather than the end of the range
    let has_more = count == limit && current_id <= actual_end;

    AuditLogQueryResult {
        logs,
        total_count,
        start_id: actual_start,
        end_id: if has_more { current_id - 1 } else { actual_end },
        has_more,
    }
}
