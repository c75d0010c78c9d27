#![no_std]

mod escrow;
mod events;
mod manager;
mod registry;
mod repository;
mod storage;

#[cfg(test)]
mod testutils;

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};
use nftflex_lib::{
    admin,
    audit::{self, create_audit_log, AuditLogQueryResult, OperationType},
    CollateralAsset, ContractError, Rental,
};

use manager::{ListingTerms, RentalManager};
use storage::bump_instance;

#[contract]
pub struct NftFlex;

#[contractimpl]
impl NftFlex {
    /// Initialize contract with admin and the token contract standing in for
    /// the native asset
    pub fn init_contract(
        env: Env,
        admin: Address,
        native_token: Address,
    ) -> Result<(), ContractError> {
        if admin::has_admin(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();
        admin::set_admin(&env, &admin);
        admin::set_native_token(&env, &native_token);
        bump_instance(&env);

        create_audit_log(&env, admin, OperationType::ContractInitialized, None, 0);
        Ok(())
    }

    /// Replace the native asset token contract (admin only)
    pub fn set_native_token(env: Env, admin: Address, token: Address) -> Result<(), ContractError> {
        admin.require_auth();
        admin::verify_admin(&env, &admin)?;
        admin::set_native_token(&env, &token);
        bump_instance(&env);

        create_audit_log(&env, admin, OperationType::NativeTokenChanged, None, 0);
        Ok(())
    }

    pub fn transfer_admin(
        env: Env,
        admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        admin::transfer_admin(&env, &admin, &new_admin)?;
        bump_instance(&env);

        create_audit_log(&env, admin, OperationType::AdminTransferred, None, 0);
        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        admin::get_admin(&env)
    }

    pub fn get_native_token(env: Env) -> Result<Address, ContractError> {
        admin::get_native_token(&env)
    }

    // ---------------- RENTAL LIFECYCLE ----------------

    /// List `token_id` of `asset_address` for hourly rent. The caller must
    /// currently own the token. Returns the new rental id.
    pub fn create_rental(
        env: Env,
        asset_address: Address,
        token_id: u64,
        price_per_hour: i128,
        is_fractional: bool,
        collateral_token: CollateralAsset,
        collateral_amount: i128,
        owner: Address,
    ) -> Result<u64, ContractError> {
        let id = RentalManager::new(env.clone()).create_rental(
            &owner,
            ListingTerms {
                asset_address,
                token_id,
                price_per_hour,
                is_fractional,
                collateral_token,
                collateral_amount,
            },
        )?;
        bump_instance(&env);
        Ok(id)
    }

    /// Rent a listed NFT. `payment` must equal
    /// `price_per_hour * duration_hours + collateral_amount` exactly.
    pub fn rent_nft(
        env: Env,
        rental_id: u64,
        duration_hours: u64,
        renter: Address,
        payment: i128,
    ) -> Result<(), ContractError> {
        RentalManager::new(env.clone()).rent(rental_id, duration_hours, &renter, payment)?;
        bump_instance(&env);
        Ok(())
    }

    /// End an expired rental and return collateral to the renter
    pub fn end_rental(env: Env, rental_id: u64, renter: Address) -> Result<(), ContractError> {
        RentalManager::new(env.clone()).end(rental_id, &renter)?;
        bump_instance(&env);
        Ok(())
    }

    /// Pay out the rent collected for a rental to its owner
    pub fn withdraw_earnings(
        env: Env,
        rental_id: u64,
        owner: Address,
    ) -> Result<i128, ContractError> {
        let amount = RentalManager::new(env.clone()).withdraw_earnings(rental_id, &owner)?;
        bump_instance(&env);
        Ok(amount)
    }

    // ---------------- QUERIES ----------------

    /// Whether the rental is currently rented out
    pub fn get_rental_status(env: Env, rental_id: u64) -> Result<bool, ContractError> {
        RentalManager::new(env).is_active(rental_id)
    }

    pub fn get_rental(env: Env, rental_id: u64) -> Result<Rental, ContractError> {
        RentalManager::new(env).load(rental_id)
    }

    pub fn get_rental_count(env: Env) -> u64 {
        RentalManager::new(env).rental_count()
    }

    /// Page through the rental table in id order. `limit` of 0 uses the
    /// default page size.
    pub fn get_rentals(env: Env, start_id: u64, limit: u32) -> Vec<Rental> {
        RentalManager::new(env).list(start_id, limit)
    }

    // ---------------- AUDIT ----------------

    pub fn get_audit_logs(
        env: Env,
        start_id: u64,
        end_id: u64,
        max_results: u32,
    ) -> AuditLogQueryResult {
        audit::query_audit_logs(&env, start_id, end_id, max_results)
    }

    pub fn get_audit_log_count(env: Env) -> u64 {
        audit::get_log_id_counter(&env)
    }
}
