use soroban_sdk::{Address, Env, Vec};

use nftflex_lib::{
    audit::{create_audit_log, OperationType},
    validation, CollateralAsset, ContractError, EarningsWithdrawnEvent, Rental,
    RentalCreatedEvent, RentalEndedEvent, RentalStartedEvent, RentalState,
    DEFAULT_RENTALS_PAGE, MAX_RENTALS_PAGE,
};

use crate::{
    escrow::{TokenEscrow, ValueTransfer},
    events,
    registry::{AssetRegistry, ContractRegistry},
    repository::RentalRepository,
};

/// Listing parameters supplied by the owner.
pub struct ListingTerms {
    pub asset_address: Address,
    pub token_id: u64,
    pub price_per_hour: i128,
    pub is_fractional: bool,
    pub collateral_token: CollateralAsset,
    pub collateral_amount: i128,
}

/// Encapsulates all rental business rules.
///
/// Every operation validates completely before its first write or transfer;
/// the host rolls the invocation back if a transfer fails afterwards.
pub struct RentalManager<R: AssetRegistry = ContractRegistry> {
    env: Env,
    repo: RentalRepository,
    registry: R,
}

impl RentalManager<ContractRegistry> {
    pub fn new(env: Env) -> Self {
        Self::with_registry(env.clone(), ContractRegistry::new(env))
    }
}

impl<R: AssetRegistry> RentalManager<R> {
    pub fn with_registry(env: Env, registry: R) -> Self {
        Self {
            repo: RentalRepository::new(env.clone()),
            env,
            registry,
        }
    }

    // ------------------------------------------------------------------
    // Listing
    // ------------------------------------------------------------------

    /// List an asset for rent. Moves neither the asset nor any funds.
    pub fn create_rental(
        &self,
        owner: &Address,
        terms: ListingTerms,
    ) -> Result<u64, ContractError> {
        owner.require_auth();

        validation::validate_price(terms.price_per_hour)?;
        validation::validate_collateral_amount(terms.collateral_amount)?;

        match self.registry.owner_of(&terms.asset_address, terms.token_id) {
            Some(current) if &current == owner => {}
            _ => return Err(ContractError::SenderIsNotOwnerOfTheNFT),
        }

        let id = self.repo.allocate_id();
        let rental = Rental {
            id,
            asset_address: terms.asset_address,
            token_id: terms.token_id,
            owner: owner.clone(),
            price_per_hour: terms.price_per_hour,
            is_fractional: terms.is_fractional,
            collateral_token: terms.collateral_token,
            collateral_amount: terms.collateral_amount,
            renter: None,
            start_time: None,
            end_time: None,
            state: RentalState::Listed,
            rent_paid: 0,
            earnings_withdrawn: false,
            created_at: self.env.ledger().timestamp(),
        };
        self.repo.save(&rental);

        create_audit_log(&self.env, owner.clone(), OperationType::RentalCreated, Some(id), 0);
        events::rental_created(
            &self.env,
            RentalCreatedEvent {
                rental_id: id,
                owner: rental.owner,
                asset_address: rental.asset_address,
                token_id: rental.token_id,
            },
        );

        Ok(id)
    }

    // ------------------------------------------------------------------
    // Activation
    // ------------------------------------------------------------------

    /// Rent a listed slot for `duration_hours`, paying rent and collateral
    /// in a single transfer of exactly `payment`.
    ///
    /// # Errors
    /// Checked in this order:
    /// | Condition | Error |
    /// |---|---|
    /// | Unknown id | `RentalDoesNotExist` |
    /// | Not `Listed` | `NFTAlreadyRented` |
    /// | `duration_hours == 0` | `DurationMustBeGreaterThanZero` |
    /// | Duration past the maximum | `DurationTooLong` |
    /// | `payment != price * hours + collateral` | `IncorrectPaymentAmount` |
    /// | Renter is the owner | `OwnerCannotRentOwnNFT` |
    pub fn rent(
        &self,
        rental_id: u64,
        duration_hours: u64,
        renter: &Address,
        payment: i128,
    ) -> Result<Rental, ContractError> {
        renter.require_auth();

        let mut rental = self.load(rental_id)?;
        if rental.state != RentalState::Listed {
            return Err(ContractError::NFTAlreadyRented);
        }
        validation::validate_duration(duration_hours)?;
        let rent = validation::validate_payment(
            rental.price_per_hour,
            duration_hours,
            rental.collateral_amount,
            payment,
        )?;
        if renter == &rental.owner {
            return Err(ContractError::OwnerCannotRentOwnNFT);
        }

        let start_time = self.env.ledger().timestamp();
        let end_time = validation::rental_end_time(start_time, duration_hours)
            .ok_or(ContractError::DurationTooLong)?;
        let escrow = TokenEscrow::for_asset(&self.env, &rental.collateral_token)?;

        rental.renter = Some(renter.clone());
        rental.start_time = Some(start_time);
        rental.end_time = Some(end_time);
        rental.rent_paid = rent;
        rental.state = RentalState::Active;
        self.repo.save(&rental);

        escrow.collect(renter, payment);

        create_audit_log(
            &self.env,
            renter.clone(),
            OperationType::RentalStarted,
            Some(rental_id),
            payment,
        );
        events::rental_started(
            &self.env,
            RentalStartedEvent {
                rental_id,
                renter: renter.clone(),
                start_time,
                end_time,
            },
        );

        Ok(rental)
    }

    // ------------------------------------------------------------------
    // Settlement
    // ------------------------------------------------------------------

    /// Close an expired rental and return the collateral to its renter.
    /// Expiry is inclusive: a call at exactly `end_time` succeeds.
    pub fn end(&self, rental_id: u64, caller: &Address) -> Result<Rental, ContractError> {
        caller.require_auth();

        let mut rental = self.load(rental_id)?;
        if !rental.is_active() {
            return Err(ContractError::RentalNotActive);
        }
        let renter = rental
            .renter
            .clone()
            .ok_or(ContractError::RentalNotActive)?;
        if &renter != caller {
            return Err(ContractError::OnlyRenterCanEndRental);
        }
        if !rental.has_expired_at(self.env.ledger().timestamp()) {
            return Err(ContractError::RentalPeriodNotEnded);
        }
        let escrow = TokenEscrow::for_asset(&self.env, &rental.collateral_token)?;

        rental.state = RentalState::Settled;
        self.repo.save(&rental);

        escrow.release(&renter, rental.collateral_amount);

        create_audit_log(
            &self.env,
            renter.clone(),
            OperationType::RentalEnded,
            Some(rental_id),
            rental.collateral_amount,
        );
        events::rental_ended(
            &self.env,
            RentalEndedEvent {
                rental_id,
                renter,
                collateral_returned: rental.collateral_amount,
            },
        );

        Ok(rental)
    }

    /// Pay the owner the rent collected for this rental. Allowed once per
    /// rental, any time after activation.
    pub fn withdraw_earnings(
        &self,
        rental_id: u64,
        caller: &Address,
    ) -> Result<i128, ContractError> {
        caller.require_auth();

        let mut rental = self.load(rental_id)?;
        if &rental.owner != caller {
            return Err(ContractError::OnlyOwnerCanWithdraw);
        }
        if !rental.was_activated() {
            return Err(ContractError::NoEarningsToWithdraw);
        }
        if rental.earnings_withdrawn {
            return Err(ContractError::EarningsAlreadyWithdrawn);
        }
        let escrow = TokenEscrow::for_asset(&self.env, &rental.collateral_token)?;

        let amount = rental.rent_paid;
        rental.earnings_withdrawn = true;
        self.repo.save(&rental);

        escrow.release(caller, amount);

        create_audit_log(
            &self.env,
            caller.clone(),
            OperationType::EarningsWithdrawn,
            Some(rental_id),
            amount,
        );
        events::earnings_withdrawn(
            &self.env,
            EarningsWithdrawnEvent {
                rental_id,
                owner: caller.clone(),
                amount,
            },
        );

        Ok(amount)
    }

    // ------------------------------------------------------------------
    // Read-only queries
    // ------------------------------------------------------------------

    pub fn load(&self, rental_id: u64) -> Result<Rental, ContractError> {
        self.repo
            .load(rental_id)
            .ok_or(ContractError::RentalDoesNotExist)
    }

    pub fn is_active(&self, rental_id: u64) -> Result<bool, ContractError> {
        Ok(self.load(rental_id)?.is_active())
    }

    pub fn rental_count(&self) -> u64 {
        self.repo.rental_count()
    }

    pub fn list(&self, start_id: u64, limit: u32) -> Vec<Rental> {
        let limit = match limit {
            0 => DEFAULT_RENTALS_PAGE,
            n => n.min(MAX_RENTALS_PAGE),
        };
        self.repo.load_page(start_id, limit)
    }
}
