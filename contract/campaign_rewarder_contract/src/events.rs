use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct PoolFundedEvent {
    pub from: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignRegistryEvent {
    pub campaign: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct RewardPaidEvent {
    pub campaign: Address,
    pub amount: i128,
    pub pool_remaining: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct RewardAmountSetEvent {
    pub amount: i128,
}

pub fn emit_pool_funded(env: &Env, event: PoolFundedEvent) {
    env.events().publish((Symbol::new(env, "pool_funded"),), event);
}

pub fn emit_campaign_added(env: &Env, event: CampaignRegistryEvent) {
    env.events().publish((Symbol::new(env, "campaign_added"),), event);
}

pub fn emit_campaign_removed(env: &Env, event: CampaignRegistryEvent) {
    env.events().publish((Symbol::new(env, "campaign_removed"),), event);
}

pub fn emit_reward_paid(env: &Env, event: RewardPaidEvent) {
    env.events().publish((Symbol::new(env, "reward_paid"),), event);
}

pub fn emit_reward_amount_set(env: &Env, event: RewardAmountSetEvent) {
    env.events().publish((Symbol::new(env, "reward_amount_set"),), event);
}
