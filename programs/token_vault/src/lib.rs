#![allow(unexpected_cfgs)]

pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use error::*;
pub use instructions::*;
pub use state::*;

declare_id!("AFrUafAP9wA9nyWW2PYf57Gn9dZ4yXzgu2U7vu3dhxfE");

#[program]
pub mod token_vault {
    use super::*;

    pub fn initialize_vault(ctx: Context<InitializeVault>, params: VaultParams) -> Result<()> {
        instructions::initialize_vault::initialize_vault(ctx, params)
    }

    // Administrator

    pub fn allocate(ctx: Context<Allocate>) -> Result<()> {
        instructions::allocate::allocate(ctx)
    }

    pub fn recover_failed_lock(ctx: Context<RecoverFailedLock>) -> Result<()> {
        instructions::recover_failed_lock::recover_failed_lock(ctx)
    }

    // Beneficiaries

    pub fn get_locked_balance(ctx: Context<ReserveQuery>) -> Result<u64> {
        instructions::reserve_queries::get_locked_balance(ctx)
    }

    pub fn team_vesting_stage(ctx: Context<ReserveQuery>) -> Result<u8> {
        instructions::reserve_queries::team_vesting_stage(ctx)
    }

    pub fn claim_team_reserve(ctx: Context<ClaimReserve>) -> Result<()> {
        instructions::claim_reserve::claim_team_reserve(ctx)
    }

    pub fn can_collect(ctx: Context<ReserveQuery>) -> Result<bool> {
        instructions::reserve_queries::can_collect(ctx)
    }

    pub fn claim_token_reserve(ctx: Context<ClaimReserve>) -> Result<()> {
        instructions::claim_reserve::claim_token_reserve(ctx)
    }

    // Public views

    pub fn get_token(ctx: Context<VaultQuery>) -> Result<Pubkey> {
        instructions::vault_queries::get_token(ctx)
    }

    pub fn get_owner(ctx: Context<VaultQuery>) -> Result<Pubkey> {
        instructions::vault_queries::get_owner(ctx)
    }

    pub fn get_locked_at(ctx: Context<VaultQuery>) -> Result<i64> {
        instructions::vault_queries::get_locked_at(ctx)
    }

    pub fn get_total_balance(ctx: Context<VaultQuery>) -> Result<u64> {
        instructions::vault_queries::get_total_balance(ctx)
    }

    pub fn receive_native(ctx: Context<ReceiveNative>, lamports: u64) -> Result<()> {
        instructions::receive_native::receive_native(ctx, lamports)
    }
}
