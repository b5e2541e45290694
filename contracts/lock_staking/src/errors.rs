/// Error codes returned by every fallible entry point of the ledger.
///
/// Discriminants are part of the public ABI and must never be renumbered.
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotOwner = 3,
    ZeroAddress = 4,
    InvalidAmount = 5,
    InvalidPrice = 6,
    TokensIdentical = 7,
    StakingDisabled = 8,
    TransferFailed = 9,
    IndexOutOfRange = 10,
    NothingStaked = 11,
    StillLocked = 12,
    AlreadyClaimed = 13,
    NoStakeFound = 14,
    InsufficientBalance = 15,
    Overflow = 16,
}

impl ContractError {
    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::NotOwner => "Caller is not the owner",
            ContractError::ZeroAddress => "New owner is the null identity",
            ContractError::InvalidAmount => "Amount must be greater than 0",
            ContractError::InvalidPrice => "Price must be greater than 0",
            ContractError::TokensIdentical => "Stake and reward tokens must differ",
            ContractError::StakingDisabled => "Staking is currently disabled",
            ContractError::TransferFailed => "Token transfer failed",
            ContractError::IndexOutOfRange => "Invalid stake index",
            ContractError::NothingStaked => "No staking found for this entry",
            ContractError::StillLocked => "Tokens are still locked",
            ContractError::AlreadyClaimed => "Already claimed",
            ContractError::NoStakeFound => "No staking found",
            ContractError::InsufficientBalance => "Insufficient token balance",
            ContractError::Overflow => "Arithmetic overflow",
        }
    }
}
