#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    pub price: i128,
    pub lock_period: u64,
    pub timestamp: u64,
}

/// Fired when a user opens a new stake entry.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub user: Address,
    pub stake_index: u32,
    pub amount: i128,
    pub locked_amount: i128,
    pub extra_reward: i128,
    pub referrer: Option<Address>,
    pub timestamp: u64,
}

/// Fired when a stake establishes a new referral relationship.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferralRegisteredEvent {
    pub user: Address,
    pub referrer: Address,
    pub bonus: i128,
    pub timestamp: u64,
}

/// Fired when a user claims the locked amount of an entry.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimedEvent {
    pub user: Address,
    pub stake_index: u32,
    pub locked_amount: i128,
    pub timestamp: u64,
}

/// Fired when the owner unlocks one user's entries.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockRevokedEvent {
    pub user: Address,
    pub entries_unlocked: u32,
    pub timestamp: u64,
}

/// Fired when the owner unlocks every entry and halts staking.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockRevokedForAllEvent {
    pub stakers: u32,
    pub timestamp: u64,
}

/// Fired when the owner sweeps a token balance out of the contract.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub token: Address,
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when the owner changes the deposit price.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceSetEvent {
    pub old_price: i128,
    pub new_price: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    owner: Address,
    stake_token: Address,
    reward_token: Address,
    price: i128,
    lock_period: u64,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            stake_token,
            reward_token,
            price,
            lock_period,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    user: Address,
    stake_index: u32,
    amount: i128,
    locked_amount: i128,
    extra_reward: i128,
    referrer: Option<Address>,
) {
    env.events().publish(
        (symbol_short!("STAKED"), user.clone()),
        StakedEvent {
            user,
            stake_index,
            amount,
            locked_amount,
            extra_reward,
            referrer,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_referral_registered(env: &Env, user: Address, referrer: Address, bonus: i128) {
    env.events().publish(
        (symbol_short!("REFERRED"), referrer.clone()),
        ReferralRegisteredEvent {
            user,
            referrer,
            bonus,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_claimed(env: &Env, user: Address, stake_index: u32, locked_amount: i128) {
    env.events().publish(
        (symbol_short!("CLAIMED"), user.clone()),
        ClaimedEvent {
            user,
            stake_index,
            locked_amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_lock_revoked(env: &Env, user: Address, entries_unlocked: u32) {
    env.events().publish(
        (symbol_short!("LOCK_REV"), user.clone()),
        LockRevokedEvent {
            user,
            entries_unlocked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_lock_revoked_for_all(env: &Env, stakers: u32) {
    env.events().publish(
        (symbol_short!("LOCK_ALL"),),
        LockRevokedForAllEvent {
            stakers,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, token: Address, to: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), token.clone()),
        WithdrawnEvent {
            token,
            to,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_price_set(env: &Env, old_price: i128, new_price: i128) {
    env.events().publish(
        (symbol_short!("PRICE_SET"),),
        PriceSetEvent {
            old_price,
            new_price,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_XFER"), new_owner.clone()),
        OwnershipTransferredEvent {
            previous_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}
