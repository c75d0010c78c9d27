use crate::{errors::ContractError, MAX_RENTAL_DURATION_HOURS, SECONDS_PER_HOUR};

pub fn validate_price(price_per_hour: i128) -> Result<(), ContractError> {
    if price_per_hour <= 0 {
        return Err(ContractError::PriceMustBeGreaterThanZero);
    }
    Ok(())
}

pub fn validate_collateral_amount(collateral_amount: i128) -> Result<(), ContractError> {
    if collateral_amount < 0 {
        return Err(ContractError::InvalidCollateralAmount);
    }
    Ok(())
}

pub fn validate_duration(duration_hours: u64) -> Result<(), ContractError> {
    if duration_hours == 0 {
        return Err(ContractError::DurationMustBeGreaterThanZero);
    }
    if duration_hours > MAX_RENTAL_DURATION_HOURS {
        return Err(ContractError::DurationTooLong);
    }
    Ok(())
}

/// Rent owed for `duration_hours`, or `None` on overflow.
pub fn rent_for(price_per_hour: i128, duration_hours: u64) -> Option<i128> {
    price_per_hour.checked_mul(i128::from(duration_hours))
}

/// Exact amount a renter must attach: rent plus collateral.
pub fn expected_payment(
    price_per_hour: i128,
    duration_hours: u64,
    collateral_amount: i128,
) -> Option<i128> {
    rent_for(price_per_hour, duration_hours)?.checked_add(collateral_amount)
}

/// Checks that `payment` matches the expected amount exactly and returns the
/// rent portion of it.
pub fn validate_payment(
    price_per_hour: i128,
    duration_hours: u64,
    collateral_amount: i128,
    payment: i128,
) -> Result<i128, ContractError> {
    match expected_payment(price_per_hour, duration_hours, collateral_amount) {
        Some(expected) if expected == payment => Ok(payment - collateral_amount),
        _ => Err(ContractError::IncorrectPaymentAmount),
    }
}

pub fn rental_end_time(start_time: u64, duration_hours: u64) -> Option<u64> {
    duration_hours
        .checked_mul(SECONDS_PER_HOUR)
        .and_then(|secs| start_time.checked_add(secs))
}
