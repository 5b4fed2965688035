use soroban_sdk::contracterror;

/// Failure category shared by every rejected campaign call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Unauthorized,
    InvalidInput,
    AlreadyDone,
    Expired,
    NotReady,
    NothingToClaim,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    NotOrganizer = 1,
    DistributionMismatch = 2,
    ZeroFunding = 3,
    AlreadyFunded = 4,
    CampaignExpired = 5,
    NotOngoing = 6,
    NotConcluded = 7,
    NothingToWithdraw = 8,
    BeneficiariesPending = 9,
    RewardsAlreadySet = 10,
    RewardSizeMismatch = 11,
    NoRewards = 12,
    MilestonesAlreadySet = 13,
    InvalidSplit = 14,
    ZeroDonation = 15,
    InvalidThresholds = 16,
    CampaignDisabled = 17,
    InvalidParticipants = 18,
    IndexOutOfBounds = 19,
    AmountOverflow = 20,
}

impl CampaignError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CampaignError::NotOrganizer => ErrorKind::Unauthorized,
            CampaignError::DistributionMismatch
            | CampaignError::ZeroFunding
            | CampaignError::RewardSizeMismatch
            | CampaignError::InvalidSplit
            | CampaignError::ZeroDonation
            | CampaignError::InvalidThresholds
            | CampaignError::InvalidParticipants
            | CampaignError::IndexOutOfBounds
            | CampaignError::AmountOverflow => ErrorKind::InvalidInput,
            CampaignError::AlreadyFunded
            | CampaignError::RewardsAlreadySet
            | CampaignError::MilestonesAlreadySet => ErrorKind::AlreadyDone,
            CampaignError::CampaignExpired => ErrorKind::Expired,
            CampaignError::NotOngoing
            | CampaignError::NotConcluded
            | CampaignError::BeneficiariesPending
            | CampaignError::CampaignDisabled => ErrorKind::NotReady,
            CampaignError::NothingToWithdraw | CampaignError::NoRewards => {
                ErrorKind::NothingToClaim
            }
        }
    }

    /// Reason string surfaced to callers. Codes 1 to 13 carry fixed wire
    /// strings that clients match on.
    pub fn reason(&self) -> &'static str {
        match self {
            CampaignError::NotOrganizer => "Operation not allowed by non-organizer",
            CampaignError::DistributionMismatch => "Distributions don't match the beneficiaries",
            CampaignError::ZeroFunding => "Initial funding must be > 0",
            CampaignError::AlreadyFunded => "Initial funding already sent",
            CampaignError::CampaignExpired => "Campaign has expired",
            CampaignError::NotOngoing => {
                "Can't accept donations. Organizers must fund the Campaign first"
            }
            CampaignError::NotConcluded => "Operation not permitted. Campaign is not concluded",
            CampaignError::NothingToWithdraw => {
                "Error. No amount available or beneficiary non-existing"
            }
            CampaignError::BeneficiariesPending => {
                "Operation not permitted. Beneficiaries didn't withdraw"
            }
            CampaignError::RewardsAlreadySet => "Rewards not set. Configuration already present",
            CampaignError::RewardSizeMismatch => "Rewards not set. Parameter sizes do not match",
            CampaignError::NoRewards => "Cannot claim rewards. None are present",
            CampaignError::MilestonesAlreadySet => {
                "Milestones not set. Configuration already present"
            }
            CampaignError::InvalidSplit => "Distributions must add up to 100",
            CampaignError::ZeroDonation => "Donation must be > 0",
            CampaignError::InvalidThresholds => "Thresholds must be positive and ascending",
            CampaignError::CampaignDisabled => "Operation not permitted. Campaign is disabled",
            CampaignError::InvalidParticipants => {
                "Organizers and beneficiaries must be non-empty and unique"
            }
            CampaignError::IndexOutOfBounds => "Index out of bounds",
            CampaignError::AmountOverflow => "Amount too large to split",
        }
    }
}
