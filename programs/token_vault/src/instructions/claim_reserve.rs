use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{VAULT_SEED, VAULT_STATE_SEED};
use crate::ledger::SplTokenLedger;
use crate::state::{ReserveKind, VaultState};

pub fn claim_team_reserve(ctx: Context<ClaimReserve>) -> Result<()> {
    claim(ctx, ClaimEntry::Team)
}

pub fn claim_token_reserve(ctx: Context<ClaimReserve>) -> Result<()> {
    claim(ctx, ClaimEntry::TokenReserve)
}

enum ClaimEntry {
    Team,
    TokenReserve,
}

fn claim(ctx: Context<ClaimReserve>, entry: ClaimEntry) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // Capture AccountInfos/keys before taking the mutable state borrow.
    let authority = ctx.accounts.vault_state.to_account_info();
    let token_program = ctx.accounts.token_program.to_account_info();
    let beneficiary = ctx.accounts.beneficiary.key();
    let mint = ctx.accounts.vault_state.mint;
    let admin = ctx.accounts.vault_state.admin;
    let bump = [ctx.accounts.vault_state.bump];
    let [prefix, mint_seed, admin_seed] = VaultState::pda_seeds(&mint, &admin);
    let seeds: &[&[u8]] = &[prefix, mint_seed, admin_seed, &bump];
    let signer_seeds = &[seeds];

    let mut ledger = SplTokenLedger::new(
        &ctx.accounts.vault,
        &ctx.accounts.beneficiary_destination,
        authority,
        token_program,
        signer_seeds,
    );
    let st = &mut ctx.accounts.vault_state;
    let (reserve, amount) = match entry {
        ClaimEntry::Team => (
            ReserveKind::Team,
            st.claim_team_reserve(&beneficiary, &mut ledger, now)?,
        ),
        ClaimEntry::TokenReserve => st.claim_token_reserve(&beneficiary, &mut ledger, now)?,
    };

    emit!(ReserveClaimed {
        reserve,
        beneficiary,
        amount,
        claimed_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimReserve<'info> {
    #[account(
        mut,
        seeds = [VAULT_STATE_SEED, vault_state.mint.as_ref(), vault_state.admin.as_ref()],
        bump = vault_state.bump
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.key().as_ref()],
        bump = vault_state.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Token account owned by the beneficiary; checked at transfer time.
    #[account(mut)]
    pub beneficiary_destination: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ReserveClaimed {
    pub reserve: ReserveKind,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub claimed_at: i64,
}
