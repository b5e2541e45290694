use soroban_sdk::{token, Address, Env};

use crate::errors::ContractError;

/// Move `amount` of `token` from `from` to `to`.
///
/// A failed transfer never leaves partial effects: the token contract either
/// applies it fully or returns an error, which is surfaced as
/// `TransferFailed` so the enclosing invocation is rolled back.
pub fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    match token::Client::new(env, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::TransferFailed),
    }
}

/// Balance of `token` held by `holder`.
pub fn balance(env: &Env, token: &Address, holder: &Address) -> Result<i128, ContractError> {
    match token::Client::new(env, token).try_balance(holder) {
        Ok(Ok(amount)) => Ok(amount),
        _ => Err(ContractError::TransferFailed),
    }
}
