use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{VAULT_SEED, VAULT_STATE_SEED};
use crate::state::{VaultParams, VaultState};

pub fn initialize_vault(ctx: Context<InitializeVault>, params: VaultParams) -> Result<()> {
    let state = VaultState::new(
        ctx.accounts.mint.key(),
        ctx.accounts.admin.key(),
        ctx.accounts.vault.key(),
        ctx.accounts.mint.decimals,
        &params,
        ctx.bumps.vault_state,
        ctx.bumps.vault,
    )?;
    ctx.accounts.vault_state.set_inner(state);

    let st = &ctx.accounts.vault_state;
    emit!(VaultInitialized {
        mint: st.mint,
        admin: st.admin,
        vault: st.vault,
        total_allocation: st.total_allocation,
        team_beneficiary: st.team_reserve.beneficiary,
        first_reserve_beneficiary: st.first_reserve.beneficiary,
        second_reserve_beneficiary: st.second_reserve.beneficiary,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    // Scoped by admin so nobody else can occupy the vault address for this mint.
    #[account(
        init,
        payer = admin,
        space = 8 + VaultState::SIZE,
        seeds = [VAULT_STATE_SEED, mint.key().as_ref(), admin.key().as_ref()],
        bump
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = vault_state,
        seeds = [VAULT_SEED, vault_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VaultInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub vault: Pubkey,
    pub total_allocation: u64,
    pub team_beneficiary: Pubkey,
    pub first_reserve_beneficiary: Pubkey,
    pub second_reserve_beneficiary: Pubkey,
}
