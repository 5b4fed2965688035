#![no_std]


mod errors;
mod events;
mod rewarder;
mod shares;
mod storage_types;

pub use errors::{CampaignError, ErrorKind};
pub use rewarder::RewarderClient;
pub use storage_types::{CampaignStatus, MilestonePlan, RewardTier};
use storage_types::{
    DataKey, PersistentKey, MILESTONE_EXTENSION, TTL_INSTANCE, TTL_PERSISTENT,
};

use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token, Address, Env, IntoVal, String, Val,
    Vec,
};

/// Escrow crowdfunding campaign.
///
/// Organizers each fund the campaign once, which opens it to donations until
/// the deadline. Every incoming amount is split among the beneficiaries on
/// the spot; they can withdraw their share once the deadline has passed.
#[contract]
pub struct CampaignContract;

#[contractimpl]
impl CampaignContract {
    pub fn __constructor(
        e: Env,
        organizers: Vec<Address>,
        beneficiaries: Vec<Address>,
        deadline: u64,
        token: Address,
    ) {
        if !is_unique_nonempty(&organizers) || !is_unique_nonempty(&beneficiaries) {
            panic_with_error!(&e, CampaignError::InvalidParticipants);
        }

        e.storage().instance().set(&DataKey::Organizers, &organizers);
        e.storage().instance().set(&DataKey::Beneficiaries, &beneficiaries);
        e.storage().instance().set(&DataKey::Deadline, &deadline);
        e.storage().instance().set(&DataKey::Token, &token);
        e.storage().instance().set(&DataKey::Deactivated, &false);
        e.storage().instance().set(&DataKey::NextMilestone, &0u32);
        e.storage().instance().set(&DataKey::TotalRaised, &0i128);
        extend_instance(&e);
    }

    /// Organizer funding. Each organizer sends its quota exactly once; the
    /// first accepted distribution becomes the campaign's distribution.
    pub fn initialize(
        e: Env,
        organizer: Address,
        distribution: Vec<u32>,
        amount: i128,
    ) -> Result<(), CampaignError> {
        check_not_disabled(&e)?;
        check_organizer(&e, &organizer)?;
        let beneficiaries = read_beneficiaries(&e);
        check_split(&e, &distribution, beneficiaries.len())?;

        if amount <= 0 {
            return Err(reject(&e, CampaignError::ZeroFunding));
        }
        let funded_key = PersistentKey::Funded(organizer.clone());
        if e.storage().persistent().get(&funded_key).unwrap_or(false) {
            return Err(reject(&e, CampaignError::AlreadyFunded));
        }
        if is_expired(&e) {
            return Err(reject(&e, CampaignError::CampaignExpired));
        }

        let fixed = read_distribution(&e);
        let credits = split_amount(&e, amount, fixed.as_ref().unwrap_or(&distribution))?;

        organizer.require_auth();

        if fixed.is_none() {
            e.storage().instance().set(&DataKey::Distribution, &distribution);
        }

        store(&e, &funded_key, &true);
        credit_beneficiaries(&e, &beneficiaries, &credits);
        let total_raised = read_total_raised(&e) + amount;
        e.storage().instance().set(&DataKey::TotalRaised, &total_raised);
        extend_instance(&e);

        token_client(&e).transfer(&organizer, &e.current_contract_address(), &amount);

        events::emit_campaign_funded(
            &e,
            events::CampaignFundedEvent {
                organizer,
                amount,
                total_raised,
            },
        );
        Ok(())
    }

    /// Donate `amount`, split among beneficiaries by `split` percentages.
    ///
    /// Crossing one or more milestones extends the deadline and pulls one
    /// bonus per milestone from the rewarder. If a bonus cannot be pulled the
    /// whole donation fails.
    pub fn donate(e: Env, donor: Address, split: Vec<u32>, amount: i128) -> Result<(), CampaignError> {
        check_not_disabled(&e)?;
        if amount <= 0 {
            return Err(reject(&e, CampaignError::ZeroDonation));
        }
        if !all_organizers_funded(&e) {
            return Err(reject(&e, CampaignError::NotOngoing));
        }
        if is_expired(&e) {
            return Err(reject(&e, CampaignError::CampaignExpired));
        }
        let beneficiaries = read_beneficiaries(&e);
        check_split(&e, &split, beneficiaries.len())?;
        let credits = split_amount(&e, amount, &split)?;

        donor.require_auth();

        credit_beneficiaries(&e, &beneficiaries, &credits);

        let count_key = PersistentKey::DonationCount(donor.clone());
        let donation_count = e.storage().persistent().get::<_, u32>(&count_key).unwrap_or(0) + 1;
        store(&e, &count_key, &donation_count);

        let total_key = PersistentKey::DonorTotal(donor.clone());
        let donor_total = e.storage().persistent().get::<_, i128>(&total_key).unwrap_or(0) + amount;
        store(&e, &total_key, &donor_total);

        let total_raised = read_total_raised(&e) + amount;
        e.storage().instance().set(&DataKey::TotalRaised, &total_raised);
        let crossed = advance_milestones(&e, total_raised);
        extend_instance(&e);

        token_client(&e).transfer(&donor, &e.current_contract_address(), &amount);

        events::emit_donation_received(
            &e,
            events::DonationReceivedEvent {
                donor,
                amount,
                donation_count,
                total_raised,
            },
        );

        if let Some((plan, first, end)) = crossed {
            pay_milestone_bonuses(&e, &plan, first, end, &beneficiaries)?;
        }
        Ok(())
    }

    /// Pay out the caller's whole accumulated share. Only once the campaign
    /// has concluded.
    pub fn withdraw(e: Env, beneficiary: Address) -> Result<i128, CampaignError> {
        if Self::get_status(e.clone()) != CampaignStatus::Concluded {
            return Err(reject(&e, CampaignError::NotConcluded));
        }

        let amount_key = PersistentKey::BeneficiaryAmount(beneficiary.clone());
        let amount: i128 = e.storage().persistent().get(&amount_key).unwrap_or(0);
        if amount <= 0 || !read_beneficiaries(&e).contains(&beneficiary) {
            return Err(reject(&e, CampaignError::NothingToWithdraw));
        }

        beneficiary.require_auth();

        store(&e, &amount_key, &0i128);
        store(&e, &PersistentKey::Withdrawn(beneficiary.clone()), &true);
        extend_instance(&e);

        token_client(&e).transfer(&e.current_contract_address(), &beneficiary, &amount);

        events::emit_withdrawal(&e, events::WithdrawalEvent { beneficiary, amount });
        Ok(amount)
    }

    /// Shut the campaign down for good. Only a concluded campaign whose
    /// beneficiaries have all taken their share can be disabled.
    pub fn deactivate(e: Env, organizer: Address) -> Result<(), CampaignError> {
        check_not_disabled(&e)?;
        check_organizer(&e, &organizer)?;
        if Self::get_status(e.clone()) != CampaignStatus::Concluded {
            return Err(reject(&e, CampaignError::BeneficiariesPending));
        }

        for beneficiary in read_beneficiaries(&e).iter() {
            if read_beneficiary_amount(&e, beneficiary) > 0 {
                return Err(reject(&e, CampaignError::BeneficiariesPending));
            }
        }

        organizer.require_auth();

        e.storage().instance().set(&DataKey::Deactivated, &true);
        extend_instance(&e);

        events::emit_campaign_disabled(&e, events::CampaignDisabledEvent { organizer });
        Ok(())
    }

    /// Configure reward tiers once. `amounts[i]` is the cumulative donation
    /// needed to unlock `codes[i]`.
    pub fn set_rewards(
        e: Env,
        organizer: Address,
        amounts: Vec<i128>,
        codes: Vec<String>,
    ) -> Result<(), CampaignError> {
        check_not_disabled(&e)?;
        check_organizer(&e, &organizer)?;
        if amounts.len() != codes.len() {
            return Err(reject(&e, CampaignError::RewardSizeMismatch));
        }
        if e.storage().instance().has(&DataKey::RewardTiers) {
            return Err(reject(&e, CampaignError::RewardsAlreadySet));
        }
        if !shares::is_ascending(&amounts) {
            return Err(reject(&e, CampaignError::InvalidThresholds));
        }

        organizer.require_auth();

        let mut tiers = Vec::new(&e);
        for (threshold, code) in amounts.iter().zip(codes.iter()) {
            tiers.push_back(RewardTier { threshold, code });
        }
        e.storage().instance().set(&DataKey::RewardTiers, &tiers);
        extend_instance(&e);

        events::emit_reward_set(
            &e,
            events::RewardSetEvent {
                organizer,
                tiers: tiers.len(),
            },
        );
        Ok(())
    }

    /// Codes of every tier unlocked by `donor`'s cumulative donations, in
    /// ascending threshold order.
    pub fn claim_rewards(e: Env, donor: Address) -> Result<Vec<String>, CampaignError> {
        let donor_total = Self::donor_total(e.clone(), donor);

        let mut codes = Vec::new(&e);
        for tier in Self::get_rewards(e.clone()).iter() {
            if tier.threshold > donor_total {
                break;
            }
            codes.push_back(tier.code);
        }

        if codes.is_empty() {
            return Err(reject(&e, CampaignError::NoRewards));
        }
        Ok(codes)
    }

    /// Configure milestones once, together with the pool paying their
    /// bonuses.
    pub fn set_milestones(
        e: Env,
        organizer: Address,
        thresholds: Vec<i128>,
        rewarder: Address,
    ) -> Result<(), CampaignError> {
        check_not_disabled(&e)?;
        check_organizer(&e, &organizer)?;
        if e.storage().instance().has(&DataKey::Milestones) {
            return Err(reject(&e, CampaignError::MilestonesAlreadySet));
        }
        if !shares::is_ascending(&thresholds) {
            return Err(reject(&e, CampaignError::InvalidThresholds));
        }

        organizer.require_auth();

        let plan = MilestonePlan {
            thresholds,
            rewarder: rewarder.clone(),
        };
        e.storage().instance().set(&DataKey::Milestones, &plan);
        extend_instance(&e);

        events::emit_milestones_set(
            &e,
            events::MilestonesSetEvent {
                organizer,
                milestones: plan.thresholds.len(),
                rewarder,
            },
        );
        Ok(())
    }

    /// View functions
    pub fn get_status(e: Env) -> CampaignStatus {
        if e.storage().instance().get(&DataKey::Deactivated).unwrap_or(false) {
            CampaignStatus::Disabled
        } else if !all_organizers_funded(&e) {
            CampaignStatus::Inactive
        } else if is_expired(&e) {
            CampaignStatus::Concluded
        } else {
            CampaignStatus::Ongoing
        }
    }

    pub fn organizer(e: Env, index: u32) -> Result<Address, CampaignError> {
        read_organizers(&e)
            .get(index)
            .ok_or_else(|| reject(&e, CampaignError::IndexOutOfBounds))
    }

    pub fn get_organizers(e: Env) -> Vec<Address> {
        read_organizers(&e)
    }

    pub fn beneficiary(e: Env, index: u32) -> Result<Address, CampaignError> {
        read_beneficiaries(&e)
            .get(index)
            .ok_or_else(|| reject(&e, CampaignError::IndexOutOfBounds))
    }

    pub fn get_beneficiaries(e: Env) -> Vec<Address> {
        read_beneficiaries(&e)
    }

    pub fn deadline(e: Env) -> u64 {
        read_deadline(&e)
    }

    pub fn token(e: Env) -> Address {
        e.storage().instance().get(&DataKey::Token).unwrap()
    }

    pub fn has_funded(e: Env, organizer: Address) -> bool {
        e.storage()
            .persistent()
            .get(&PersistentKey::Funded(organizer))
            .unwrap_or(false)
    }

    pub fn beneficiary_amount(e: Env, beneficiary: Address) -> i128 {
        read_beneficiary_amount(&e, beneficiary)
    }

    pub fn has_withdrawn(e: Env, beneficiary: Address) -> bool {
        e.storage()
            .persistent()
            .get(&PersistentKey::Withdrawn(beneficiary))
            .unwrap_or(false)
    }

    pub fn donations_of(e: Env, donor: Address) -> u32 {
        e.storage()
            .persistent()
            .get(&PersistentKey::DonationCount(donor))
            .unwrap_or(0)
    }

    pub fn donor_total(e: Env, donor: Address) -> i128 {
        e.storage()
            .persistent()
            .get(&PersistentKey::DonorTotal(donor))
            .unwrap_or(0)
    }

    pub fn total_raised(e: Env) -> i128 {
        read_total_raised(&e)
    }

    /// Tokens currently held by the campaign.
    pub fn held_balance(e: Env) -> i128 {
        token_client(&e).balance(&e.current_contract_address())
    }

    pub fn get_distribution(e: Env) -> Option<Vec<u32>> {
        read_distribution(&e)
    }

    pub fn get_rewards(e: Env) -> Vec<RewardTier> {
        e.storage()
            .instance()
            .get(&DataKey::RewardTiers)
            .unwrap_or_else(|| Vec::new(&e))
    }

    pub fn get_milestones(e: Env) -> Option<MilestonePlan> {
        e.storage().instance().get(&DataKey::Milestones)
    }

    pub fn next_milestone(e: Env) -> u32 {
        e.storage().instance().get(&DataKey::NextMilestone).unwrap_or(0)
    }
}

// Helper functions
fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn store<V: IntoVal<Env, Val>>(e: &Env, key: &PersistentKey, value: &V) {
    e.storage().persistent().set(key, value);
    extend_persistent(e, key);
}

fn reject(e: &Env, err: CampaignError) -> CampaignError {
    log!(e, "campaign call rejected", String::from_str(e, err.reason()));
    err
}

fn read_organizers(e: &Env) -> Vec<Address> {
    e.storage().instance().get(&DataKey::Organizers).unwrap()
}

fn read_beneficiaries(e: &Env) -> Vec<Address> {
    e.storage().instance().get(&DataKey::Beneficiaries).unwrap()
}

fn read_deadline(e: &Env) -> u64 {
    e.storage().instance().get(&DataKey::Deadline).unwrap()
}

fn read_distribution(e: &Env) -> Option<Vec<u32>> {
    e.storage().instance().get(&DataKey::Distribution)
}

fn read_total_raised(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::TotalRaised).unwrap_or(0)
}

fn read_beneficiary_amount(e: &Env, beneficiary: Address) -> i128 {
    e.storage()
        .persistent()
        .get(&PersistentKey::BeneficiaryAmount(beneficiary))
        .unwrap_or(0)
}

fn token_client<'a>(e: &Env) -> token::Client<'a> {
    let token: Address = e.storage().instance().get(&DataKey::Token).unwrap();
    token::Client::new(e, &token)
}

fn is_expired(e: &Env) -> bool {
    e.ledger().timestamp() >= read_deadline(e)
}

fn all_organizers_funded(e: &Env) -> bool {
    read_organizers(e).iter().all(|organizer| {
        e.storage()
            .persistent()
            .get(&PersistentKey::Funded(organizer))
            .unwrap_or(false)
    })
}

fn is_unique_nonempty(addresses: &Vec<Address>) -> bool {
    if addresses.is_empty() {
        return false;
    }
    for i in 0..addresses.len() {
        for j in (i + 1)..addresses.len() {
            if addresses.get(i) == addresses.get(j) {
                return false;
            }
        }
    }
    true
}

fn check_not_disabled(e: &Env) -> Result<(), CampaignError> {
    if e.storage().instance().get(&DataKey::Deactivated).unwrap_or(false) {
        return Err(reject(e, CampaignError::CampaignDisabled));
    }
    Ok(())
}

fn check_organizer(e: &Env, caller: &Address) -> Result<(), CampaignError> {
    if !read_organizers(e).contains(caller) {
        return Err(reject(e, CampaignError::NotOrganizer));
    }
    Ok(())
}

/// Weights must match the beneficiaries one to one and add up to exactly
/// 100, so every split credits the whole amount.
fn check_split(e: &Env, weights: &Vec<u32>, beneficiaries: u32) -> Result<(), CampaignError> {
    if weights.len() != beneficiaries {
        return Err(reject(e, CampaignError::DistributionMismatch));
    }
    if !shares::is_valid_split(weights) {
        return Err(reject(e, CampaignError::InvalidSplit));
    }
    Ok(())
}

fn split_amount(e: &Env, amount: i128, weights: &Vec<u32>) -> Result<Vec<i128>, CampaignError> {
    shares::apportion(e, amount, weights).ok_or_else(|| reject(e, CampaignError::AmountOverflow))
}

fn credit_beneficiaries(e: &Env, beneficiaries: &Vec<Address>, credits: &Vec<i128>) {
    for (beneficiary, share) in beneficiaries.iter().zip(credits.iter()) {
        if share == 0 {
            continue;
        }
        let key = PersistentKey::BeneficiaryAmount(beneficiary);
        let current: i128 = e.storage().persistent().get(&key).unwrap_or(0);
        store(e, &key, &(current + share));
    }
}

/// Move the milestone cursor past every threshold `total_raised` has reached
/// and push the deadline out once per crossed milestone. Returns the plan and
/// the crossed index range, if any.
fn advance_milestones(e: &Env, total_raised: i128) -> Option<(MilestonePlan, u32, u32)> {
    let plan: MilestonePlan = e.storage().instance().get(&DataKey::Milestones)?;
    let first: u32 = e.storage().instance().get(&DataKey::NextMilestone).unwrap_or(0);

    let mut next = first;
    while let Some(threshold) = plan.thresholds.get(next) {
        if total_raised < threshold {
            break;
        }
        next += 1;
    }
    if next == first {
        return None;
    }

    let deadline = read_deadline(e) + MILESTONE_EXTENSION * (next - first) as u64;
    e.storage().instance().set(&DataKey::NextMilestone, &next);
    e.storage().instance().set(&DataKey::Deadline, &deadline);

    Some((plan, first, next))
}

fn pay_milestone_bonuses(
    e: &Env,
    plan: &MilestonePlan,
    first: u32,
    end: u32,
    beneficiaries: &Vec<Address>,
) -> Result<(), CampaignError> {
    let rewarder = RewarderClient::new(e, &plan.rewarder);
    let token = token_client(e);
    let this = e.current_contract_address();
    let distribution = read_distribution(e).unwrap_or_else(|| Vec::new(e));
    let deadline = read_deadline(e);

    for index in first..end {
        // Only what arrived in the campaign token is credited, whatever the
        // rewarder reports. The host rejects re-entry into this contract, so
        // the bonus can be credited after the call returns.
        let before = token.balance(&this);
        rewarder.claim_reward(&this);
        let bonus = (token.balance(&this) - before).max(0);
        if bonus > 0 {
            credit_beneficiaries(e, beneficiaries, &split_amount(e, bonus, &distribution)?);
        }

        events::emit_milestone_reached(
            e,
            events::MilestoneReachedEvent {
                index,
                threshold: plan.thresholds.get(index).unwrap_or(0),
                bonus,
                deadline,
            },
        );
    }
    Ok(())
}
