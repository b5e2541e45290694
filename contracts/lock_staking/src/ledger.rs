//! Per-user stake entries and the global staker registry.
//!
//! Both collections are append-only arenas: an entry lives at
//! `(STAKE, user, index)` and a staker at `(STAKER, index)`, with the
//! lengths stored separately. Nothing is ever removed or reordered, so an
//! index handed out by `deposit` stays valid for the lifetime of the ledger.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

use crate::config::{
    extend_persistent, EXTRA_REWARD_PERCENT, LOCK_PERIOD, REFERRAL_REWARD_PERCENT,
};
use crate::errors::ContractError;
use crate::{gateway, referral, rewards};

// ── Storage key constants ───────────────────────────────────────────────────

const STAKE: Symbol = symbol_short!("STAKE");
const STAKE_CNT: Symbol = symbol_short!("STK_CNT");
const STAKER: Symbol = symbol_short!("STAKER");
const STAKER_CNT: Symbol = symbol_short!("STKR_CNT");
const STATUS: Symbol = symbol_short!("STATUS");

// ── Types ───────────────────────────────────────────────────────────────────

/// One deposit. Entries are kept after claiming as an audit record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeEntry {
    /// Reward-token units released by `claim`; fixed at creation.
    pub locked_amount: i128,
    /// Ledger timestamp from which `claim` is permitted. Only moves earlier.
    pub lock_end_time: u64,
    /// Becomes `true` once the locked amount has been paid out.
    pub claimed: bool,
    /// Instant bonus paid at creation.
    pub extra_reward: i128,
}

/// Whether new deposits are accepted. The only transition is
/// `Active` → `Halted`, made by `revoke_lock_for_all`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StakingStatus {
    Active,
    Halted,
}

/// Token contracts the ledger moves value through.
pub struct TokenPair {
    pub stake: Address,
    pub reward: Address,
}

/// Outcome of a successful deposit, used for event emission.
pub struct DepositReceipt {
    pub index: u32,
    pub entry: StakeEntry,
    pub referral_bonus: Option<i128>,
}

// ── Halt latch ──────────────────────────────────────────────────────────────

pub fn status(env: &Env) -> StakingStatus {
    env.storage()
        .instance()
        .get(&STATUS)
        .unwrap_or(StakingStatus::Active)
}

fn halt(env: &Env) {
    env.storage().instance().set(&STATUS, &StakingStatus::Halted);
}

// ── Entry arena ─────────────────────────────────────────────────────────────

fn entry_key(user: &Address, index: u32) -> (Symbol, Address, u32) {
    (STAKE, user.clone(), index)
}

fn count_key(user: &Address) -> (Symbol, Address) {
    (STAKE_CNT, user.clone())
}

/// Number of entries `user` has ever created.
pub fn stake_count(env: &Env, user: &Address) -> u32 {
    let key = count_key(user);
    let count: Option<u32> = env.storage().persistent().get(&key);
    match count {
        Some(n) => {
            extend_persistent(env, &key);
            n
        }
        None => 0,
    }
}

fn read_entry(env: &Env, user: &Address, index: u32) -> Option<StakeEntry> {
    let key = entry_key(user, index);
    let entry: Option<StakeEntry> = env.storage().persistent().get(&key);
    if entry.is_some() {
        extend_persistent(env, &key);
    }
    entry
}

fn write_entry(env: &Env, user: &Address, index: u32, entry: &StakeEntry) {
    let key = entry_key(user, index);
    env.storage().persistent().set(&key, entry);
    extend_persistent(env, &key);
}

/// Entry `index` of `user`, or `IndexOutOfRange`.
pub fn get_entry(env: &Env, user: &Address, index: u32) -> Result<StakeEntry, ContractError> {
    if index >= stake_count(env, user) {
        return Err(ContractError::IndexOutOfRange);
    }
    read_entry(env, user, index).ok_or(ContractError::IndexOutOfRange)
}

/// Append `entry` to `user`'s collection and return its index. The first
/// entry also registers `user` as a staker.
fn append_entry(env: &Env, user: &Address, entry: &StakeEntry) -> Result<u32, ContractError> {
    let index = stake_count(env, user);
    if index == 0 {
        register_staker(env, user)?;
    }
    write_entry(env, user, index, entry);

    let next = index.checked_add(1).ok_or(ContractError::Overflow)?;
    let key = count_key(user);
    env.storage().persistent().set(&key, &next);
    extend_persistent(env, &key);

    Ok(index)
}

/// Snapshot of every entry `user` has created, in creation order.
pub fn entries_of(env: &Env, user: &Address) -> Vec<StakeEntry> {
    let mut entries = Vec::new(env);
    for i in 0..stake_count(env, user) {
        if let Some(entry) = read_entry(env, user, i) {
            entries.push_back(entry);
        }
    }
    entries
}

pub fn total_unclaimed_locked(env: &Env, user: &Address) -> i128 {
    entries_of(env, user)
        .iter()
        .filter(|e| !e.claimed)
        .fold(0i128, |acc, e| acc.saturating_add(e.locked_amount))
}

pub fn total_unclaimed_bonus(env: &Env, user: &Address) -> i128 {
    entries_of(env, user)
        .iter()
        .filter(|e| !e.claimed)
        .fold(0i128, |acc, e| acc.saturating_add(e.extra_reward))
}

// ── Staker registry ─────────────────────────────────────────────────────────

pub fn staker_count(env: &Env) -> u32 {
    env.storage().instance().get(&STAKER_CNT).unwrap_or(0)
}

pub fn staker_at(env: &Env, index: u32) -> Option<Address> {
    let key = (STAKER, index);
    let staker: Option<Address> = env.storage().persistent().get(&key);
    if staker.is_some() {
        extend_persistent(env, &key);
    }
    staker
}

fn register_staker(env: &Env, user: &Address) -> Result<(), ContractError> {
    let index = staker_count(env);
    let key = (STAKER, index);
    env.storage().persistent().set(&key, user);
    extend_persistent(env, &key);

    let next = index.checked_add(1).ok_or(ContractError::Overflow)?;
    env.storage().instance().set(&STAKER_CNT, &next);
    Ok(())
}

// ── Mutations ───────────────────────────────────────────────────────────────

/// Take `amount` stake tokens from `user` and open a new locked entry.
///
/// Order of effects:
/// 1. pull the deposit into custody,
/// 2. pay the referral bonus if this call establishes the relationship,
/// 3. append the entry (registering `user` on their first deposit),
/// 4. pay the instant bonus to `user`.
///
/// Any error returns before the invocation completes, and the host discards
/// every write and transfer made so far.
pub fn deposit(
    env: &Env,
    user: &Address,
    amount: i128,
    referrer: Option<&Address>,
    tokens: &TokenPair,
    price: i128,
) -> Result<DepositReceipt, ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    if status(env) == StakingStatus::Halted {
        return Err(ContractError::StakingDisabled);
    }

    let locked_amount = rewards::compute_lock(amount, price)?;
    let extra_reward = rewards::compute_instant_bonus(locked_amount, EXTRA_REWARD_PERCENT)?;
    let lock_end_time = env
        .ledger()
        .timestamp()
        .checked_add(LOCK_PERIOD)
        .ok_or(ContractError::Overflow)?;

    let custody = env.current_contract_address();
    gateway::transfer(env, &tokens.stake, user, &custody, amount)?;

    let mut referral_bonus = None;
    if let Some(referrer) = referrer {
        if referral::register_if_absent(env, user, Some(referrer))? {
            let bonus = rewards::compute_referral_bonus(locked_amount, REFERRAL_REWARD_PERCENT)?;
            if bonus > 0 {
                gateway::transfer(env, &tokens.reward, &custody, referrer, bonus)?;
            }
            referral_bonus = Some(bonus);
        }
    }

    let entry = StakeEntry {
        locked_amount,
        lock_end_time,
        claimed: false,
        extra_reward,
    };
    let index = append_entry(env, user, &entry)?;

    if extra_reward > 0 {
        gateway::transfer(env, &tokens.reward, &custody, user, extra_reward)?;
    }

    Ok(DepositReceipt {
        index,
        entry,
        referral_bonus,
    })
}

/// Release the locked amount of entry `index` to `user`.
///
/// Checks run in a fixed order: index, non-empty entry, lock expiry, and
/// finally the claimed flag. The flag is only written after the transfer
/// succeeded.
pub fn claim(
    env: &Env,
    user: &Address,
    index: u32,
    reward_token: &Address,
) -> Result<i128, ContractError> {
    let mut entry = get_entry(env, user, index)?;

    // Guards degenerate entries; deposits never record a zero lock.
    if entry.locked_amount == 0 {
        return Err(ContractError::NothingStaked);
    }
    if env.ledger().timestamp() < entry.lock_end_time {
        return Err(ContractError::StillLocked);
    }
    if entry.claimed {
        return Err(ContractError::AlreadyClaimed);
    }

    gateway::transfer(
        env,
        reward_token,
        &env.current_contract_address(),
        user,
        entry.locked_amount,
    )?;

    entry.claimed = true;
    write_entry(env, user, index, &entry);

    Ok(entry.locked_amount)
}

/// Pull every unclaimed lock end of `user` back to `now`. Entries already
/// past `now` keep their earlier lock end. Returns how many entries moved.
fn unlock_entries(env: &Env, user: &Address, now: u64) -> u32 {
    let mut moved = 0u32;
    for i in 0..stake_count(env, user) {
        if let Some(mut entry) = read_entry(env, user, i) {
            if !entry.claimed && entry.lock_end_time > now {
                entry.lock_end_time = now;
                write_entry(env, user, i, &entry);
                moved = moved.saturating_add(1);
            }
        }
    }
    moved
}

/// Unlock all of `user`'s unclaimed entries immediately.
///
/// Fails with `NoStakeFound` if `user` never staked. Repeating the call is a
/// successful no-op.
pub fn revoke_lock(env: &Env, user: &Address) -> Result<u32, ContractError> {
    if stake_count(env, user) == 0 {
        return Err(ContractError::NoStakeFound);
    }
    Ok(unlock_entries(env, user, env.ledger().timestamp()))
}

/// Unlock every unclaimed entry of every registered staker, then latch the
/// ledger into `Halted`. Cost is linear in the total number of entries.
/// Returns the number of stakers visited.
pub fn revoke_lock_for_all(env: &Env) -> u32 {
    let now = env.ledger().timestamp();
    let stakers = staker_count(env);
    for i in 0..stakers {
        if let Some(user) = staker_at(env, i) {
            unlock_entries(env, &user, now);
        }
    }
    halt(env);
    stakers
}
