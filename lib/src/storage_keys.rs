use soroban_sdk::{symbol_short, Symbol};

pub const ADMIN_KEY: Symbol = symbol_short!("admin");
pub const NATIVE_TOKEN_KEY: Symbol = symbol_short!("native");
pub const AUDIT_LOG_COUNTER_KEY: Symbol = symbol_short!("audit_ctr");
pub const AUDIT_LOG_ENTRY_KEY: Symbol = symbol_short!("audit_log");
