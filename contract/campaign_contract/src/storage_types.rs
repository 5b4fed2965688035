use soroban_sdk::{contracttype, Address, String, Vec};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Organizers,
    Beneficiaries,
    Token,
    Deadline,
    Deactivated,
    Distribution,
    RewardTiers,
    Milestones,
    NextMilestone,
    TotalRaised,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Funded(Address),
    BeneficiaryAmount(Address),
    Withdrawn(Address),
    DonationCount(Address),
    DonorTotal(Address),
}

/// Lifecycle phase, derived on read from the funding flags, the deadline and
/// the deactivation flag.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum CampaignStatus {
    Inactive = 0,
    Ongoing = 1,
    Concluded = 2,
    Disabled = 4,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RewardTier {
    pub threshold: i128, // cumulative donor total needed
    pub code: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct MilestonePlan {
    pub thresholds: Vec<i128>, // against total raised, strictly ascending
    pub rewarder: Address,
}

// Constants
pub const PERCENT_BASE: u32 = 100;
pub const MILESTONE_EXTENSION: u64 = 7 * 86400; // 7 days
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
