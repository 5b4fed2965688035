use soroban_sdk::{contractclient, Address, Env};

/// The only call a campaign makes into a rewarder pool: pull one milestone
/// bonus into `campaign` and learn how much arrived.
#[contractclient(name = "RewarderClient")]
pub trait RewarderInterface {
    fn claim_reward(env: Env, campaign: Address) -> i128;
}
