use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{VAULT_SEED, VAULT_STATE_SEED};
use crate::state::VaultState;

pub fn get_token(ctx: Context<VaultQuery>) -> Result<Pubkey> {
    Ok(ctx.accounts.vault_state.mint)
}

pub fn get_owner(ctx: Context<VaultQuery>) -> Result<Pubkey> {
    Ok(ctx.accounts.vault_state.admin)
}

pub fn get_locked_at(ctx: Context<VaultQuery>) -> Result<i64> {
    Ok(ctx.accounts.vault_state.locked_at)
}

pub fn get_total_balance(ctx: Context<VaultQuery>) -> Result<u64> {
    Ok(ctx.accounts.vault.amount)
}

#[derive(Accounts)]
pub struct VaultQuery<'info> {
    #[account(
        seeds = [VAULT_STATE_SEED, vault_state.mint.as_ref(), vault_state.admin.as_ref()],
        bump = vault_state.bump
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        seeds = [VAULT_SEED, vault_state.key().as_ref()],
        bump = vault_state.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,
}
