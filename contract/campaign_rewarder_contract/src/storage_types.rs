use soroban_sdk::{contracterror, contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Token,
    RewardAmount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Registered(Address),
    PaidOut(Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RewarderError {
    NotOwner = 1,
    NotRegistered = 2,
    InvalidAmount = 3,
}

impl RewarderError {
    /// Human-readable reason attached to a rejected call.
    pub fn reason(&self) -> &'static str {
        match self {
            RewarderError::NotOwner => "Operation not allowed. You're not the owner",
            RewarderError::NotRegistered => "Cannot pay reward. Campaign is not registered",
            RewarderError::InvalidAmount => "Amount must be > 0",
        }
    }
}

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
