use soroban_sdk::{Env, Vec};

use crate::storage_types::PERCENT_BASE;

/// Weights must add up to exactly `PERCENT_BASE`.
pub fn is_valid_split(weights: &Vec<u32>) -> bool {
    let total: u64 = weights.iter().map(|w| w as u64).sum();
    total == PERCENT_BASE as u64
}

/// Split `amount` by percentage `weights`, one share per beneficiary.
///
/// Each share is `amount * weight / 100` rounded down. Whatever integer
/// division leaves over goes to the beneficiary with the largest weight
/// (the first one on ties), so the shares always add up to `amount`.
/// `None` if `amount * weight` does not fit in an `i128`.
pub fn apportion(env: &Env, amount: i128, weights: &Vec<u32>) -> Option<Vec<i128>> {
    let mut shares = Vec::new(env);
    let mut credited: i128 = 0;
    let mut largest_index: u32 = 0;
    let mut largest_weight: u32 = 0;

    for (i, weight) in weights.iter().enumerate() {
        let share = amount.checked_mul(weight as i128)? / PERCENT_BASE as i128;
        shares.push_back(share);
        credited += share;
        if weight > largest_weight {
            largest_weight = weight;
            largest_index = i as u32;
        }
    }

    let dust = amount - credited;
    if dust > 0 {
        if let Some(share) = shares.get(largest_index) {
            shares.set(largest_index, share + dust);
        }
    }

    Some(shares)
}

/// Strictly ascending and positive; used for reward tiers and milestones.
pub fn is_ascending(thresholds: &Vec<i128>) -> bool {
    if thresholds.is_empty() {
        return false;
    }

    let mut previous: i128 = 0;
    for threshold in thresholds.iter() {
        if threshold <= previous {
            return false;
        }
        previous = threshold;
    }
    true
}
