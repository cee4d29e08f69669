use anchor_lang::prelude::*;

use crate::constants::VAULT_STATE_SEED;
use crate::state::VaultState;

/// Only native-value entry point of the program; lamports sent by the system
/// program directly to the accounts bypass it.
pub fn receive_native(ctx: Context<ReceiveNative>, lamports: u64) -> Result<()> {
    msg!(
        "rejecting {} lamports from {}",
        lamports,
        ctx.accounts.sender.key()
    );
    Ok(ctx.accounts.vault_state.accept_native(lamports)?)
}

#[derive(Accounts)]
pub struct ReceiveNative<'info> {
    #[account(
        seeds = [VAULT_STATE_SEED, vault_state.mint.as_ref(), vault_state.admin.as_ref()],
        bump = vault_state.bump
    )]
    pub vault_state: Account<'info, VaultState>,

    pub sender: Signer<'info>,
}
