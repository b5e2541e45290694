#![no_std]

pub mod config;
pub mod errors;
pub mod events;
pub mod gateway;
pub mod ledger;
pub mod referral;
pub mod rewards;

use common::ownable;
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol, Vec};

pub use errors::ContractError;
pub use ledger::{StakeEntry, StakingStatus};

use config::{
    extend_instance, DEFAULT_TOKEN_PRICE, EXTRA_REWARD_PERCENT, LOCK_PERIOD,
    REFERRAL_REWARD_PERCENT,
};
use ledger::TokenPair;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const STAKE_TOKEN: Symbol = symbol_short!("STK_TOK");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const TOKEN_PRICE: Symbol = symbol_short!("PRICE");

/// The ledger's stand-in for a null identity: its own address. No external
/// party can sign for it, so it may never own the ledger or earn referrals.
pub(crate) fn is_null_identity(env: &Env, who: &Address) -> bool {
    *who == env.current_contract_address()
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct LockStakingContract;

#[contractimpl]
impl LockStakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `owner`        – address allowed to call the administrative entry points.
    /// * `stake_token`  – SAC address of the token users deposit.
    /// * `reward_token` – SAC address of the token locked, paid as bonuses and
    ///                    released on claim. The contract must be funded with it.
    pub fn initialize(
        env: Env,
        owner: Address,
        stake_token: Address,
        reward_token: Address,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if stake_token == reward_token {
            return Err(ContractError::TokensIdentical);
        }
        if is_null_identity(&env, &owner) {
            return Err(ContractError::ZeroAddress);
        }

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&STAKE_TOKEN, &stake_token);
        env.storage().instance().set(&REWARD_TOKEN, &reward_token);
        env.storage().instance().set(&TOKEN_PRICE, &DEFAULT_TOKEN_PRICE);
        ownable::init_owner(&env, &owner);
        extend_instance(&env);

        events::publish_initialized(
            &env,
            owner,
            stake_token,
            reward_token,
            DEFAULT_TOKEN_PRICE,
            LOCK_PERIOD,
        );

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` stake tokens and open a locked entry worth
    /// `amount × price` reward tokens.
    ///
    /// The instant bonus is paid to `user` right away. If `referrer` names
    /// someone other than `user` and `user` has never been referred before,
    /// the relationship is recorded and the referrer is paid a one-time bonus.
    /// Returns the index of the new entry.
    pub fn stake(
        env: Env,
        user: Address,
        amount: i128,
        referrer: Option<Address>,
    ) -> Result<u32, ContractError> {
        Self::require_initialized(&env)?;
        user.require_auth();

        let tokens = Self::load_tokens(&env)?;
        let price = Self::load_price(&env)?;

        let receipt = ledger::deposit(&env, &user, amount, referrer.as_ref(), &tokens, price)?;

        if let (Some(bonus), Some(r)) = (receipt.referral_bonus, referrer.clone()) {
            events::publish_referral_registered(&env, user.clone(), r, bonus);
        }
        events::publish_staked(
            &env,
            user,
            receipt.index,
            amount,
            receipt.entry.locked_amount,
            receipt.entry.extra_reward,
            referrer,
        );

        Ok(receipt.index)
    }

    /// Release the locked reward tokens of entry `stake_index` once its lock
    /// has expired. Returns the amount transferred.
    pub fn claim(env: Env, user: Address, stake_index: u32) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        user.require_auth();

        let tokens = Self::load_tokens(&env)?;
        let amount = ledger::claim(&env, &user, stake_index, &tokens.reward)?;

        events::publish_claimed(&env, user, stake_index, amount);

        Ok(amount)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Return `(unclaimed instant bonus total, referral count)` for `user`.
    pub fn get_user_rewards_and_referrals(env: Env, user: Address) -> (i128, u32) {
        (
            ledger::total_unclaimed_bonus(&env, &user),
            referral::count_for(&env, &user),
        )
    }

    /// Return the sum of locked amounts over `user`'s unclaimed entries.
    pub fn get_total_staked(env: Env, user: Address) -> i128 {
        ledger::total_unclaimed_locked(&env, &user)
    }

    /// Return every entry `user` has created, claimed ones included.
    pub fn get_user_stakes(env: Env, user: Address) -> Vec<StakeEntry> {
        ledger::entries_of(&env, &user)
    }

    pub fn get_stake(
        env: Env,
        user: Address,
        stake_index: u32,
    ) -> Result<StakeEntry, ContractError> {
        ledger::get_entry(&env, &user, stake_index)
    }

    pub fn get_stake_count(env: Env, user: Address) -> u32 {
        ledger::stake_count(&env, &user)
    }

    pub fn get_referrer(env: Env, user: Address) -> Option<Address> {
        referral::referrer_of(&env, &user)
    }

    pub fn get_referral_count(env: Env, referrer: Address) -> u32 {
        referral::count_for(&env, &referrer)
    }

    /// Number of distinct users that have ever staked.
    pub fn get_staker_count(env: Env) -> u32 {
        ledger::staker_count(&env)
    }

    /// The staker registered at `index`, in first-deposit order.
    pub fn get_staker(env: Env, index: u32) -> Option<Address> {
        ledger::staker_at(&env, index)
    }

    pub fn get_token_price(env: Env) -> Result<i128, ContractError> {
        Self::load_price(&env)
    }

    pub fn get_lock_period() -> u64 {
        LOCK_PERIOD
    }

    pub fn get_extra_reward_percent() -> i128 {
        EXTRA_REWARD_PERCENT
    }

    pub fn get_referral_reward_percent() -> i128 {
        REFERRAL_REWARD_PERCENT
    }

    pub fn get_staking_status(env: Env) -> StakingStatus {
        ledger::status(&env)
    }

    pub fn is_staking_disabled(env: Env) -> bool {
        ledger::status(&env) == StakingStatus::Halted
    }

    pub fn get_stake_token(env: Env) -> Result<Address, ContractError> {
        Ok(Self::load_tokens(&env)?.stake)
    }

    pub fn get_reward_token(env: Env) -> Result<Address, ContractError> {
        Ok(Self::load_tokens(&env)?.reward)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        ownable::get_owner(&env).ok_or(ContractError::NotInitialized)
    }

    // ── Owner functions ──────────────────────────────────────────────────────

    /// Unlock every unclaimed entry of `user` immediately. Claimed entries
    /// are left untouched. Calling it again is a no-op.
    pub fn revoke_lock(env: Env, caller: Address, user: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let unlocked = ledger::revoke_lock(&env, &user)?;

        events::publish_lock_revoked(&env, user, unlocked);

        Ok(())
    }

    /// Unlock every unclaimed entry of every staker and permanently disable
    /// new deposits. There is no way to re-enable staking afterwards.
    pub fn revoke_lock_for_all(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let stakers = ledger::revoke_lock_for_all(&env);

        events::publish_lock_revoked_for_all(&env, stakers);

        Ok(())
    }

    /// Set the reward-token price of one stake token. Existing entries keep
    /// the price they were created at.
    pub fn set_token_price(
        env: Env,
        caller: Address,
        new_price: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if new_price <= 0 {
            return Err(ContractError::InvalidPrice);
        }

        let old_price = Self::load_price(&env)?;
        env.storage().instance().set(&TOKEN_PRICE, &new_price);
        extend_instance(&env);

        events::publish_price_set(&env, old_price, new_price);

        Ok(())
    }

    /// Sweep `amount` of any token held by the contract to the owner.
    ///
    /// This includes the stake and reward tokens backing open entries; the
    /// owner is trusted with full custody.
    pub fn withdraw_tokens(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let custody = env.current_contract_address();
        if gateway::balance(&env, &token, &custody)? < amount {
            return Err(ContractError::InsufficientBalance);
        }
        gateway::transfer(&env, &token, &custody, &caller, amount)?;

        events::publish_withdrawn(&env, token, caller, amount);

        Ok(())
    }

    /// Hand ownership to `new_owner` in a single step.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if is_null_identity(&env, &new_owner) {
            return Err(ContractError::ZeroAddress);
        }

        let previous = ownable::transfer_ownership(&env, &caller, &new_owner)
            .ok_or(ContractError::NotOwner)?;
        extend_instance(&env);

        events::publish_ownership_transferred(&env, previous, new_owner);

        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        extend_instance(env);
        Ok(())
    }

    /// Guard: revert if `caller` is not the stored owner.
    fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !ownable::is_owner(env, caller) {
            return Err(ContractError::NotOwner);
        }
        Ok(())
    }

    fn load_tokens(env: &Env) -> Result<TokenPair, ContractError> {
        let stake: Address = env
            .storage()
            .instance()
            .get(&STAKE_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        let reward: Address = env
            .storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        Ok(TokenPair { stake, reward })
    }

    fn load_price(env: &Env) -> Result<i128, ContractError> {
        env.storage()
            .instance()
            .get(&TOKEN_PRICE)
            .ok_or(ContractError::NotInitialized)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
