#![no_std]


use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, Address, Env, Symbol,
};

const TTL_THRESHOLD: u32 = 518_400; // ~30 days
const TTL_EXTEND: u32 = 1_036_800; // ~60 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    NextTokenId,
    Owner(u64),
    Balance(Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    NonexistentToken = 4,
    NotOwner = 5,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferEvent {
    pub from: Option<Address>,
    pub to: Address,
    pub token_id: u64,
}

#[contract]
pub struct SimpleNft;

#[contractimpl]
impl SimpleNft {
    /// Initialize contract with the admin allowed to mint
    pub fn init_contract(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::NextTokenId, &1u64);
        Ok(())
    }

    /// Mint the next token id to `to`. Token ids start at 1.
    pub fn mint(env: Env, to: Address) -> Result<u64, Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();

        let token_id = Self::next_token_id(env.clone());
        env.storage()
            .instance()
            .set(&DataKey::NextTokenId, &(token_id + 1));

        Self::write_owner(&env, token_id, &to);
        Self::adjust_balance(&env, &to, 1);

        env.events().publish(
            (Symbol::new(&env, "Transfer"),),
            TransferEvent {
                from: None,
                to,
                token_id,
            },
        );

        Ok(token_id)
    }

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Owner(token_id))
            .ok_or(Error::NonexistentToken)
    }

    pub fn balance_of(env: Env, owner: Address) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(owner))
            .unwrap_or(0)
    }

    pub fn next_token_id(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::NextTokenId)
            .unwrap_or(1)
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();

        let owner = Self::owner_of(env.clone(), token_id)?;
        if owner != from {
            return Err(Error::NotOwner);
        }

        Self::write_owner(&env, token_id, &to);
        Self::adjust_balance(&env, &from, -1);
        Self::adjust_balance(&env, &to, 1);

        env.events().publish(
            (Symbol::new(&env, "Transfer"),),
            TransferEvent {
                from: Some(from),
                to,
                token_id,
            },
        );
        Ok(())
    }

    fn write_owner(env: &Env, token_id: u64, owner: &Address) {
        let key = DataKey::Owner(token_id);
        env.storage().persistent().set(&key, owner);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND);
    }

    fn adjust_balance(env: &Env, owner: &Address, delta: i64) {
        let key = DataKey::Balance(owner.clone());
        let current: u64 = env.storage().persistent().get(&key).unwrap_or(0);
        let next = current.saturating_add_signed(delta);
        env.storage().persistent().set(&key, &next);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND);
    }
}
