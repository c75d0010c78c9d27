use soroban_sdk::{token, Address, Env};

use nftflex_lib::{admin, CollateralAsset, ContractError};

/// Moves value between a party and the contract's escrow.
///
/// A failing transfer aborts the whole invocation, so callers perform all
/// validation before calling into this trait.
pub trait ValueTransfer {
    /// Pull `amount` from `from` into escrow.
    fn collect(&self, from: &Address, amount: i128);
    /// Pay `amount` out of escrow to `to`.
    fn release(&self, to: &Address, amount: i128);
}

/// Escrow backed by a Soroban token contract. The native asset is reached
/// through its configured token contract, fungible collateral through its
/// own.
pub struct TokenEscrow<'a> {
    token: token::Client<'a>,
    vault: Address,
}

impl<'a> TokenEscrow<'a> {
    pub fn for_asset(env: &Env, asset: &CollateralAsset) -> Result<Self, ContractError> {
        let token_address = match asset {
            CollateralAsset::Native => admin::get_native_token(env)?,
            CollateralAsset::Token(address) => address.clone(),
        };

        Ok(Self {
            token: token::Client::new(env, &token_address),
            vault: env.current_contract_address(),
        })
    }
}

impl ValueTransfer for TokenEscrow<'_> {
    fn collect(&self, from: &Address, amount: i128) {
        if amount > 0 {
            self.token.transfer(from, &self.vault, &amount);
        }
    }

    fn release(&self, to: &Address, amount: i128) {
        if amount > 0 {
            self.token.transfer(&self.vault, to, &amount);
        }
    }
}
