use soroban_sdk::{Env, IntoVal, Val};

// ── Economic parameters ──────────────────────────────────────────────────────

/// Reward-token units credited per stake-token unit until the owner changes it.
pub const DEFAULT_TOKEN_PRICE: i128 = 74;

/// Seconds a stake entry stays locked after creation (4 × 30 days).
pub const LOCK_PERIOD: u64 = 4 * 30 * 24 * 60 * 60;

/// Instant bonus paid to the staker, as a percentage of the locked amount.
pub const EXTRA_REWARD_PERCENT: i128 = 30;

/// One-time bonus paid to a new referrer, as a percentage of the locked amount.
pub const REFERRAL_REWARD_PERCENT: i128 = 10;

pub const PERCENT_DENOMINATOR: i128 = 100;

// ── Storage TTL policy ───────────────────────────────────────────────────────

/// TTL constants for instance and persistent storage (in ledgers)
pub const TTL_THRESHOLD: u32 = 17_280; // ~1 day
pub const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

/// Extends the TTL of the contract instance (configuration and counters).
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the TTL of a persistent key. The key must exist.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
