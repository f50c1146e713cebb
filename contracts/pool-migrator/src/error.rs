use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MigratorError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Caller is not the governor
    AccessDenied = 3,
    /// Operation not allowed in the route's current migration state
    InvalidState = 4,
    /// Pool output below the caller's minimum
    SlippageExceeded = 5,
    UnknownRoute = 6,
    /// The gauge has neither made this contract its admin nor committed
    /// it as the next admin, as the operation requires
    GaugeNotHandedOver = 7,
    /// The gauge has no shares to move
    NothingToMigrate = 8,
    ArithmeticOverflow = 9,
    /// Route pools are identical or hold different token pairs
    InvalidRoute = 10,
}
