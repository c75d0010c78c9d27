use soroban_sdk::{contractclient, Address, Env};

/// Minimal view of an NFT registry contract.
#[allow(dead_code)]
#[contractclient(name = "NftRegistryClient")]
pub trait NftRegistryInterface {
    fn owner_of(env: Env, token_id: u64) -> Address;
}

/// Source of truth for asset ownership at listing time.
pub trait AssetRegistry {
    /// Current owner of `token_id` on `asset`, or `None` when the registry
    /// cannot answer (unknown token, missing or failing contract).
    fn owner_of(&self, asset: &Address, token_id: u64) -> Option<Address>;
}

/// Asks the asset's own registry contract through a cross-contract call.
pub struct ContractRegistry {
    env: Env,
}

impl ContractRegistry {
    pub fn new(env: Env) -> Self {
        Self { env }
    }
}

impl AssetRegistry for ContractRegistry {
    fn owner_of(&self, asset: &Address, token_id: u64) -> Option<Address> {
        match NftRegistryClient::new(&self.env, asset).try_owner_of(&token_id) {
            Ok(Ok(owner)) => Some(owner),
            _ => None,
        }
    }
}
