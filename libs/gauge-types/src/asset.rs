use soroban_sdk::{contracttype, Address};

/// Token currently accepted by a gauge for staking
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetDescriptor {
    /// Token contract address
    pub address: Address,
    /// Decimals reported by the token at installation time
    pub decimals: u32,
}

/// Reward bookkeeping owned by the reward subsystem
///
/// The gauge only stores it. Nothing in the staking or migration paths
/// writes to these fields.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardData {
    /// Address allowed to fund this reward
    pub distributor: Address,
    /// Timestamp at which the current reward period ends
    pub period_finish: u64,
    /// Reward emitted per second
    pub rate: i128,
    /// Timestamp of the last accrual checkpoint
    pub last_update: u64,
    /// Reward per share accumulated so far
    pub integral: i128,
}

impl RewardData {
    pub fn new(distributor: Address) -> Self {
        Self {
            distributor,
            period_finish: 0,
            rate: 0,
            last_update: 0,
            integral: 0,
        }
    }
}
