use anchor_lang::prelude::*;

use crate::constants::VAULT_STATE_SEED;
use crate::state::VaultState;

// Beneficiary-scoped views. Values travel back as instruction return data.

pub fn get_locked_balance(ctx: Context<ReserveQuery>) -> Result<u64> {
    let st = &ctx.accounts.vault_state;
    Ok(st.locked_balance(&ctx.accounts.beneficiary.key())?)
}

pub fn team_vesting_stage(ctx: Context<ReserveQuery>) -> Result<u8> {
    let now = Clock::get()?.unix_timestamp;
    let st = &ctx.accounts.vault_state;
    Ok(st.team_vesting_stage(&ctx.accounts.beneficiary.key(), now)?)
}

pub fn can_collect(ctx: Context<ReserveQuery>) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    let st = &ctx.accounts.vault_state;
    Ok(st.can_collect(&ctx.accounts.beneficiary.key(), now)?)
}

#[derive(Accounts)]
pub struct ReserveQuery<'info> {
    #[account(
        seeds = [VAULT_STATE_SEED, vault_state.mint.as_ref(), vault_state.admin.as_ref()],
        bump = vault_state.bump
    )]
    pub vault_state: Account<'info, VaultState>,

    pub beneficiary: Signer<'info>,
}
