use anchor_lang::prelude::*;

/// Error codes for the token vault program.
#[error_code]
pub enum VaultError {
    #[msg("Unauthorized: caller is not permitted to invoke this operation")]
    Unauthorized,

    #[msg("Vault has not been allocated yet")]
    NotAllocated,

    #[msg("Vault is already allocated")]
    AlreadyAllocated,

    #[msg("Vault balance must equal the total allocation exactly")]
    BalanceMismatch,

    #[msg("Lock period has not elapsed")]
    CliffNotReached,

    #[msg("Reserve has already been claimed")]
    AlreadyClaimed,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Vault does not accept native currency")]
    NativeTransferRejected,
}

/// Result type for the program's pure core logic.
pub type VaultResult<T> = core::result::Result<T, VaultError>;
