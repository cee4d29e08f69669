//! Token ledger seam. The vault only observes its own balance and moves
//! tokens out of it; minting and inbound transfers happen elsewhere.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount, Transfer};

use crate::error::{VaultError, VaultResult};

pub trait TokenLedger {
    /// Current token balance held by the vault.
    fn balance(&self) -> u64;

    /// Move `amount` from the vault to the wallet `to`.
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> VaultResult<()>;
}

/// A payout may only land in a token account of the vault mint owned by `to`.
pub fn check_destination(
    vault_mint: &Pubkey,
    destination_mint: &Pubkey,
    destination_owner: &Pubkey,
    to: &Pubkey,
) -> VaultResult<()> {
    if destination_mint != vault_mint {
        return Err(VaultError::InvalidTokenMint);
    }
    if destination_owner != to {
        return Err(VaultError::InvalidTokenAccount);
    }
    Ok(())
}

/// SPL Token ledger bound to one destination token account.
/// Transfers are signed by the vault state PDA.
pub struct SplTokenLedger<'a, 'info> {
    vault: &'a Account<'info, TokenAccount>,
    destination: &'a Account<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> SplTokenLedger<'a, 'info> {
    pub fn new(
        vault: &'a Account<'info, TokenAccount>,
        destination: &'a Account<'info, TokenAccount>,
        authority: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> Self {
        Self {
            vault,
            destination,
            authority,
            token_program,
            signer_seeds,
        }
    }
}

impl TokenLedger for SplTokenLedger<'_, '_> {
    fn balance(&self) -> u64 {
        self.vault.amount
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> VaultResult<()> {
        check_destination(
            &self.vault.mint,
            &self.destination.mint,
            &self.destination.owner,
            to,
        )?;

        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.destination.to_account_info(),
                    authority: self.authority.clone(),
                },
                self.signer_seeds,
            ),
            amount,
        )
        .map_err(|e| {
            msg!("vault transfer of {} to {} failed: {}", amount, to, e);
            VaultError::TransferFailed
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn destination_of_vault_mint_owned_by_recipient_is_accepted() {
        assert!(check_destination(&key(1), &key(1), &key(5), &key(5)).is_ok());
    }

    #[test]
    fn destination_of_other_mint_is_rejected() {
        assert!(matches!(
            check_destination(&key(1), &key(2), &key(5), &key(5)),
            Err(VaultError::InvalidTokenMint)
        ));
    }

    #[test]
    fn destination_owned_by_someone_else_is_rejected() {
        assert!(matches!(
            check_destination(&key(1), &key(1), &key(6), &key(5)),
            Err(VaultError::InvalidTokenAccount)
        ));
    }
}
