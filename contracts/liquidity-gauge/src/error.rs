use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GaugeError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Caller is not the admin (or not the committed candidate)
    AccessDenied = 3,
    /// Withdrawal or transfer exceeds the available balance
    InsufficientFunds = 4,
    /// Zero, negative, or rounds to zero at the current scaling
    InvalidAmount = 5,
    /// Installing a scaling factor <= 0
    InvalidScalingFactor = 6,
    /// Converting with an installed factor <= 0
    ZeroScalingFactor = 7,
    NoPendingAdmin = 8,
    /// Recovery would leave less staking asset than depositors are owed
    Undercollateralized = 9,
    ArithmeticOverflow = 10,
    RewardAlreadyRegistered = 11,
    UnknownReward = 12,
}
