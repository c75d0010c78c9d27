use soroban_sdk::{Address, Env};

use crate::{errors::ContractError, ADMIN_KEY, NATIVE_TOKEN_KEY};

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&ADMIN_KEY)
}

pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&ADMIN_KEY)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN_KEY, admin);
}

pub fn verify_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let admin = get_admin(env)?;
    if &admin != caller {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn transfer_admin(
    env: &Env,
    current_admin: &Address,
    new_admin: &Address,
) -> Result<(), ContractError> {
    current_admin.require_auth();
    verify_admin(env, current_admin)?;
    set_admin(env, new_admin);
    Ok(())
}

/* ---------------- NATIVE TOKEN ---------------- */

pub fn get_native_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&NATIVE_TOKEN_KEY)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_native_token(env: &Env, token: &Address) {
    env.storage().instance().set(&NATIVE_TOKEN_KEY, token);
}
