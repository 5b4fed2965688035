#![no_std]


mod events;
mod storage_types;

pub use storage_types::RewarderError;
use storage_types::{DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT};

use soroban_sdk::{contract, contractimpl, log, panic_with_error, token, Address, Env, String};

/// Shared bonus pool. Anyone can fund it; the owner decides which campaigns
/// may draw from it, and each registered campaign pulls `reward_amount` per
/// milestone it crosses.
#[contract]
pub struct CampaignRewarderContract;

#[contractimpl]
impl CampaignRewarderContract {
    pub fn __constructor(e: Env, owner: Address, token: Address, reward_amount: i128) {
        if reward_amount <= 0 {
            panic_with_error!(&e, RewarderError::InvalidAmount);
        }

        e.storage().instance().set(&DataKey::Owner, &owner);
        e.storage().instance().set(&DataKey::Token, &token);
        e.storage().instance().set(&DataKey::RewardAmount, &reward_amount);
        extend_instance(&e);
    }

    /// Move `amount` of the pool token from `from` into the pool.
    ///
    /// A plain token transfer to this contract's address funds the pool just
    /// as well; this entry point only adds the event.
    pub fn fund(e: Env, from: Address, amount: i128) -> Result<(), RewarderError> {
        if amount <= 0 {
            return Err(reject(&e, RewarderError::InvalidAmount));
        }
        from.require_auth();

        token_client(&e).transfer(&from, &e.current_contract_address(), &amount);

        events::emit_pool_funded(&e, events::PoolFundedEvent { from, amount });
        Ok(())
    }

    pub fn add_campaign(e: Env, owner: Address, campaign: Address) -> Result<(), RewarderError> {
        check_owner(&e, &owner)?;

        let key = PersistentKey::Registered(campaign.clone());
        e.storage().persistent().set(&key, &true);
        extend_persistent(&e, &key);
        extend_instance(&e);

        events::emit_campaign_added(&e, events::CampaignRegistryEvent { campaign });
        Ok(())
    }

    pub fn remove_campaign(e: Env, owner: Address, campaign: Address) -> Result<(), RewarderError> {
        check_owner(&e, &owner)?;

        e.storage()
            .persistent()
            .remove(&PersistentKey::Registered(campaign.clone()));
        extend_instance(&e);

        events::emit_campaign_removed(&e, events::CampaignRegistryEvent { campaign });
        Ok(())
    }

    pub fn set_reward_amount(e: Env, owner: Address, amount: i128) -> Result<(), RewarderError> {
        check_owner(&e, &owner)?;
        if amount <= 0 {
            return Err(reject(&e, RewarderError::InvalidAmount));
        }

        e.storage().instance().set(&DataKey::RewardAmount, &amount);
        extend_instance(&e);

        events::emit_reward_amount_set(&e, events::RewardAmountSetEvent { amount });
        Ok(())
    }

    /// Pay one milestone bonus to `campaign` and return the amount paid.
    ///
    /// The payout is `reward_amount` capped at the current pool balance, so
    /// a drained pool pays zero instead of failing the caller's donation.
    pub fn claim_reward(e: Env, campaign: Address) -> Result<i128, RewarderError> {
        campaign.require_auth();

        if !Self::is_registered(e.clone(), campaign.clone()) {
            return Err(reject(&e, RewarderError::NotRegistered));
        }

        let token = token_client(&e);
        let pool = token.balance(&e.current_contract_address());
        let reward_amount: i128 = e.storage().instance().get(&DataKey::RewardAmount).unwrap_or(0);
        let payout = reward_amount.min(pool);

        if payout > 0 {
            let key = PersistentKey::PaidOut(campaign.clone());
            let paid: i128 = e.storage().persistent().get(&key).unwrap_or(0);
            e.storage().persistent().set(&key, &(paid + payout));
            extend_persistent(&e, &key);

            token.transfer(&e.current_contract_address(), &campaign, &payout);
        }

        events::emit_reward_paid(
            &e,
            events::RewardPaidEvent {
                campaign,
                amount: payout,
                pool_remaining: pool - payout,
            },
        );

        Ok(payout)
    }

    /// View functions
    pub fn owner(e: Env) -> Address {
        read_owner(&e)
    }

    pub fn token(e: Env) -> Address {
        read_token(&e)
    }

    pub fn reward_amount(e: Env) -> i128 {
        e.storage().instance().get(&DataKey::RewardAmount).unwrap_or(0)
    }

    pub fn pool_balance(e: Env) -> i128 {
        token_client(&e).balance(&e.current_contract_address())
    }

    pub fn is_registered(e: Env, campaign: Address) -> bool {
        e.storage()
            .persistent()
            .get(&PersistentKey::Registered(campaign))
            .unwrap_or(false)
    }

    pub fn paid_out(e: Env, campaign: Address) -> i128 {
        e.storage()
            .persistent()
            .get(&PersistentKey::PaidOut(campaign))
            .unwrap_or(0)
    }
}

// Helper functions
fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn read_owner(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::Owner).unwrap()
}

fn read_token(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::Token).unwrap()
}

fn token_client<'a>(e: &Env) -> token::Client<'a> {
    token::Client::new(e, &read_token(e))
}

fn check_owner(e: &Env, caller: &Address) -> Result<(), RewarderError> {
    if *caller != read_owner(e) {
        return Err(reject(e, RewarderError::NotOwner));
    }
    caller.require_auth();
    Ok(())
}

fn reject(e: &Env, err: RewarderError) -> RewarderError {
    log!(e, "rewarder call rejected", String::from_str(e, err.reason()));
    err
}
