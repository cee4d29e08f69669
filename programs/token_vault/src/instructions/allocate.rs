use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{VAULT_SEED, VAULT_STATE_SEED};
use crate::state::VaultState;

pub fn allocate(ctx: Context<Allocate>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let balance = ctx.accounts.vault.amount;

    let st = &mut ctx.accounts.vault_state;
    st.allocate(&ctx.accounts.admin.key(), balance, now)?;

    emit!(TokensAllocated {
        admin: st.admin,
        locked_at: st.locked_at,
        total_allocation: st.total_allocation,
        team_reserve: st.team_reserve.allocation,
        first_reserve: st.first_reserve.allocation,
        second_reserve: st.second_reserve.allocation,
        team_unlocks_at: st.team_reserve.unlock_ts(st.locked_at)?,
        first_reserve_unlocks_at: st.first_reserve.unlock_ts(st.locked_at)?,
        second_reserve_unlocks_at: st.second_reserve.unlock_ts(st.locked_at)?,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Allocate<'info> {
    #[account(
        mut,
        seeds = [VAULT_STATE_SEED, vault_state.mint.as_ref(), vault_state.admin.as_ref()],
        bump = vault_state.bump
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        seeds = [VAULT_SEED, vault_state.key().as_ref()],
        bump = vault_state.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,
}

#[event]
pub struct TokensAllocated {
    pub admin: Pubkey,
    pub locked_at: i64,
    pub total_allocation: u64,
    pub team_reserve: u64,
    pub first_reserve: u64,
    pub second_reserve: u64,
    pub team_unlocks_at: i64,
    pub first_reserve_unlocks_at: i64,
    pub second_reserve_unlocks_at: i64,
}
