#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env, Symbol, TryFromVal, Val,
};

use nftflex_lib::CollateralAsset;
use simple_nft::{SimpleNft, SimpleNftClient};

use crate::{NftFlex, NftFlexClient};

pub const ONE: i128 = 1_000_000_000_000_000_000; // 1e18
pub const HOUR: u64 = 3600;
pub const START_TIME: u64 = 1_700_000_000;

/// A deployed marketplace with a native token, a second fungible token and
/// an NFT registry, plus funded participants.
pub struct Setup<'a> {
    pub env: Env,
    pub admin: Address,
    pub owner: Address,
    pub renter: Address,
    pub other_renter: Address,
    pub contract_id: Address,
    pub client: NftFlexClient<'a>,
    pub nft: SimpleNftClient<'a>,
    pub native: TokenClient<'a>,
    pub usdc: TokenClient<'a>,
}

impl<'a> Setup<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().with_mut(|li| li.timestamp = START_TIME);

        let admin = Address::generate(&env);
        let owner = Address::generate(&env);
        let renter = Address::generate(&env);
        let other_renter = Address::generate(&env);

        let native_id = env.register_stellar_asset_contract_v2(admin.clone()).address();
        let usdc_id = env.register_stellar_asset_contract_v2(admin.clone()).address();
        for token in [&native_id, &usdc_id] {
            let issuer = StellarAssetClient::new(&env, token);
            issuer.mint(&renter, &(100 * ONE));
            issuer.mint(&other_renter, &(100 * ONE));
            issuer.mint(&owner, &(100 * ONE));
        }

        let nft_id = env.register(SimpleNft, ());
        let nft = SimpleNftClient::new(&env, &nft_id);
        nft.init_contract(&admin);

        let contract_id = env.register(NftFlex, ());
        let client = NftFlexClient::new(&env, &contract_id);
        client.init_contract(&admin, &native_id);

        Self {
            native: TokenClient::new(&env, &native_id),
            usdc: TokenClient::new(&env, &usdc_id),
            env,
            admin,
            owner,
            renter,
            other_renter,
            contract_id,
            client,
            nft,
        }
    }

    /// Mint a fresh token to the owner and list it with native collateral.
    pub fn list(&self, price_per_hour: i128, collateral_amount: i128) -> u64 {
        self.list_with(price_per_hour, collateral_amount, CollateralAsset::Native)
    }

    pub fn list_with(
        &self,
        price_per_hour: i128,
        collateral_amount: i128,
        collateral_token: CollateralAsset,
    ) -> u64 {
        let token_id = self.nft.mint(&self.owner);
        self.client.create_rental(
            &self.nft.address,
            &token_id,
            &price_per_hour,
            &false,
            &collateral_token,
            &collateral_amount,
            &self.owner,
        )
    }

    pub fn advance(&self, seconds: u64) {
        let now = self.env.ledger().timestamp();
        self.env.ledger().with_mut(|li| li.timestamp = now + seconds);
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }
}

/// Payload of the most recent event named `name` published by `contract`.
///
/// Only the latest top-level invocation's events are recorded, so call this
/// straight after the invocation under test, before any other client call.
pub fn last_event<T>(env: &Env, contract: &Address, name: &str) -> Option<T>
where
    T: TryFromVal<Env, Val>,
{
    let topic = Symbol::new(env, name);
    let mut found = None;
    for (source, topics, data) in env.events().all().iter() {
        if &source != contract {
            continue;
        }
        let matches = topics
            .get(0)
            .and_then(|t| Symbol::try_from_val(env, &t).ok())
            .map(|s| s == topic)
            .unwrap_or(false);
        if matches {
            found = T::try_from_val(env, &data).ok();
        }
    }
    found
}
