use soroban_sdk::contracterror;

/// Error taxonomy shared by the NFTFlex contracts.
///
/// Discriminants are part of the contract interface and must not be
/// renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Setup
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,

    // Listing
    PriceMustBeGreaterThanZero = 10,
    SenderIsNotOwnerOfTheNFT = 11,
    InvalidCollateralAmount = 12,

    // Renting
    RentalDoesNotExist = 20,
    NFTAlreadyRented = 21,
    DurationMustBeGreaterThanZero = 22,
    DurationTooLong = 23,
    IncorrectPaymentAmount = 24,
    OwnerCannotRentOwnNFT = 25,

    // Settlement
    RentalNotActive = 30,
    OnlyRenterCanEndRental = 31,
    RentalPeriodNotEnded = 32,

    // Earnings
    OnlyOwnerCanWithdraw = 40,
    NoEarningsToWithdraw = 41,
    EarningsAlreadyWithdrawn = 42,
}
