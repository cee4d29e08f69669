use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{VAULT_SEED, VAULT_STATE_SEED};
use crate::ledger::SplTokenLedger;
use crate::state::VaultState;

pub fn recover_failed_lock(ctx: Context<RecoverFailedLock>) -> Result<()> {
    let authority = ctx.accounts.vault_state.to_account_info();
    let token_program = ctx.accounts.token_program.to_account_info();

    let st = &ctx.accounts.vault_state;
    let bump = [st.bump];
    let [prefix, mint_seed, admin_seed] = VaultState::pda_seeds(&st.mint, &st.admin);
    let seeds: &[&[u8]] = &[prefix, mint_seed, admin_seed, &bump];
    let signer_seeds = &[seeds];

    let mut ledger = SplTokenLedger::new(
        &ctx.accounts.vault,
        &ctx.accounts.admin_destination,
        authority,
        token_program,
        signer_seeds,
    );
    let amount = st.recover_failed_lock(&ctx.accounts.admin.key(), &mut ledger)?;

    emit!(FailedLockRecovered {
        admin: st.admin,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RecoverFailedLock<'info> {
    #[account(
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

    #[account(mut)]
    pub admin_destination: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct FailedLockRecovered {
    pub admin: Pubkey,
    pub amount: u64,
}
