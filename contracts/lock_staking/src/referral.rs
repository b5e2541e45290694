use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::config::extend_persistent;
use crate::errors::ContractError;

// ── Storage key constants ───────────────────────────────────────────────────

const REFERRER: Symbol = symbol_short!("REFERRER");
const REF_COUNT: Symbol = symbol_short!("REF_CNT");

// ── Storage helpers ─────────────────────────────────────────────────────────

fn referrer_key(user: &Address) -> (Symbol, Address) {
    (REFERRER, user.clone())
}

fn count_key(referrer: &Address) -> (Symbol, Address) {
    (REF_COUNT, referrer.clone())
}

/// Record `referrer` for `user` unless a relationship already exists.
///
/// Returns `Ok(true)` only when a new relationship was written, which is the
/// single case where a referral bonus is owed. A missing referrer, the null
/// identity, or self-referral never establishes anything. Once `user` has a
/// referrer every later call is a no-op, whatever referrer it names.
pub fn register_if_absent(
    env: &Env,
    user: &Address,
    referrer: Option<&Address>,
) -> Result<bool, ContractError> {
    let referrer = match referrer {
        Some(r) if r != user && !crate::is_null_identity(env, r) => r,
        _ => return Ok(false),
    };

    let key = referrer_key(user);
    if env.storage().persistent().has(&key) {
        extend_persistent(env, &key);
        return Ok(false);
    }

    let count = count_for(env, referrer)
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;

    env.storage().persistent().set(&key, referrer);
    extend_persistent(env, &key);

    let ckey = count_key(referrer);
    env.storage().persistent().set(&ckey, &count);
    extend_persistent(env, &ckey);

    Ok(true)
}

/// The referrer recorded for `user`, if any.
pub fn referrer_of(env: &Env, user: &Address) -> Option<Address> {
    let key = referrer_key(user);
    let referrer: Option<Address> = env.storage().persistent().get(&key);
    if referrer.is_some() {
        extend_persistent(env, &key);
    }
    referrer
}

/// Number of distinct users that named `referrer`.
pub fn count_for(env: &Env, referrer: &Address) -> u32 {
    let key = count_key(referrer);
    let count: Option<u32> = env.storage().persistent().get(&key);
    match count {
        Some(n) => {
            extend_persistent(env, &key);
            n
        }
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LockStakingContract;
    use soroban_sdk::testutils::Address as _;

    fn with_contract<R>(env: &Env, f: impl FnOnce() -> R) -> R {
        let id = env.register(LockStakingContract, ());
        env.as_contract(&id, f)
    }

    #[test]
    fn test_first_referrer_is_kept() {
        let env = Env::default();
        let user = Address::generate(&env);
        let first = Address::generate(&env);
        let second = Address::generate(&env);

        with_contract(&env, || {
            assert_eq!(register_if_absent(&env, &user, Some(&first)), Ok(true));
            assert_eq!(register_if_absent(&env, &user, Some(&second)), Ok(false));
            assert_eq!(register_if_absent(&env, &user, Some(&first)), Ok(false));

            assert_eq!(referrer_of(&env, &user), Some(first.clone()));
            assert_eq!(count_for(&env, &first), 1);
            assert_eq!(count_for(&env, &second), 0);
        });
    }

    #[test]
    fn test_self_and_missing_referrer_are_no_ops() {
        let env = Env::default();
        let user = Address::generate(&env);

        with_contract(&env, || {
            assert_eq!(register_if_absent(&env, &user, None), Ok(false));
            assert_eq!(register_if_absent(&env, &user, Some(&user)), Ok(false));
            let me = env.current_contract_address();
            assert_eq!(register_if_absent(&env, &user, Some(&me)), Ok(false));
            assert_eq!(referrer_of(&env, &user), None);
        });
    }

    #[test]
    fn test_saturated_count_reports_overflow() {
        let env = Env::default();
        let user = Address::generate(&env);
        let referrer = Address::generate(&env);

        with_contract(&env, || {
            env.storage()
                .persistent()
                .set(&count_key(&referrer), &u32::MAX);

            assert_eq!(
                register_if_absent(&env, &user, Some(&referrer)),
                Err(ContractError::Overflow)
            );
            assert_eq!(referrer_of(&env, &user), None);
            assert_eq!(count_for(&env, &referrer), u32::MAX);
        });
    }
}
