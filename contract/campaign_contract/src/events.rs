use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct CampaignFundedEvent {
    pub organizer: Address,
    pub amount: i128,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct DonationReceivedEvent {
    pub donor: Address,
    pub amount: i128,
    pub donation_count: u32,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct MilestoneReachedEvent {
    pub index: u32,
    pub threshold: i128,
    pub bonus: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct WithdrawalEvent {
    pub beneficiary: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignDisabledEvent {
    pub organizer: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct RewardSetEvent {
    pub organizer: Address,
    pub tiers: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct MilestonesSetEvent {
    pub organizer: Address,
    pub milestones: u32,
    pub rewarder: Address,
}

pub fn emit_campaign_funded(env: &Env, event: CampaignFundedEvent) {
    env.events().publish((Symbol::new(env, "campaign_funded"),), event);
}

pub fn emit_donation_received(env: &Env, event: DonationReceivedEvent) {
    env.events().publish((Symbol::new(env, "donation_received"),), event);
}

pub fn emit_milestone_reached(env: &Env, event: MilestoneReachedEvent) {
    env.events().publish((Symbol::new(env, "milestone_reached"),), event);
}

pub fn emit_withdrawal(env: &Env, event: WithdrawalEvent) {
    env.events().publish((Symbol::new(env, "withdrawal"),), event);
}

pub fn emit_campaign_disabled(env: &Env, event: CampaignDisabledEvent) {
    env.events().publish((Symbol::new(env, "campaign_disabled"),), event);
}

pub fn emit_reward_set(env: &Env, event: RewardSetEvent) {
    env.events().publish((Symbol::new(env, "reward_set"),), event);
}

pub fn emit_milestones_set(env: &Env, event: MilestonesSetEvent) {
    env.events().publish((Symbol::new(env, "milestones_set"),), event);
}
