use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");

// ── Core Functions ───────────────────────────────────────────────────────────

/// Records the initial owner. Only callable internally during contract
/// initialization; callers must check that no owner exists yet.
pub fn init_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

/// Returns the current owner address, if one has been set.
pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

/// Returns `true` if `caller` is the current owner.
///
/// The caller must have already been authenticated via `require_auth()`.
pub fn is_owner(env: &Env, caller: &Address) -> bool {
    match get_owner(env) {
        Some(owner) => owner == *caller,
        None => false,
    }
}

/// Hands ownership from `caller` to `new_owner`.
///
/// Returns the previous owner on success, or `None` if `caller` is not the
/// current owner. Rejecting unusable `new_owner` values is left to the
/// calling contract, which knows what its null identity is.
pub fn transfer_ownership(env: &Env, caller: &Address, new_owner: &Address) -> Option<Address> {
    let previous = get_owner(env)?;
    if previous != *caller {
        return None;
    }
    env.storage().instance().set(&OWNER, new_owner);
    Some(previous)
}
