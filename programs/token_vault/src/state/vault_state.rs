use anchor_lang::prelude::*;

use crate::constants::{
    FIRST_RESERVE_LOCK_SECONDS, FIRST_RESERVE_TOKENS, SECOND_RESERVE_LOCK_SECONDS,
    SECOND_RESERVE_TOKENS, TEAM_LOCK_SECONDS, TEAM_RESERVE_TOKENS, TOTAL_ALLOCATION_TOKENS,
    VAULT_STATE_SEED,
};
use crate::error::{VaultError, VaultResult};
use crate::ledger::TokenLedger;
use crate::state::{ReserveKind, ReserveRecord};
use crate::utils::schedule;

/// Beneficiary wallets supplied when the vault is created.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VaultParams {
    pub team_beneficiary: Pubkey,
    pub first_reserve_beneficiary: Pubkey,
    pub second_reserve_beneficiary: Pubkey,
}

/// Singleton vault state PDA.
#[account]
#[derive(Debug)]
pub struct VaultState {
    /// Token mint custodied by the vault.
    pub mint: Pubkey,
    /// Administrator: the only signer allowed to allocate or recover.
    pub admin: Pubkey,
    /// Vault token account (PDA, authority = this account).
    pub vault: Pubkey,
    /// Allocation timestamp (Unix seconds), 0 until `allocate`.
    pub locked_at: i64,
    /// Exact balance required at allocation.
    pub total_allocation: u64,
    pub team_reserve: ReserveRecord,
    pub first_reserve: ReserveRecord,
    pub second_reserve: ReserveRecord,
    pub bump: u8,
    pub vault_bump: u8,
}

impl VaultState {
    pub const SIZE: usize =
        32 + // mint
        32 + // admin
        32 + // vault
        8 +  // locked_at
        8 +  // total_allocation
        3 * ReserveRecord::SIZE +
        1 +  // bump
        1;   // vault_bump

    /// PDA seeds without the bump: `["vault_state", mint, admin]`.
    pub fn pda_seeds<'a>(mint: &'a Pubkey, admin: &'a Pubkey) -> [&'a [u8]; 3] {
        [VAULT_STATE_SEED, mint.as_ref(), admin.as_ref()]
    }

    /// Builds an unallocated vault, scaling the fixed whole-token reserve
    /// sizes by the mint's decimals.
    pub fn new(
        mint: Pubkey,
        admin: Pubkey,
        vault: Pubkey,
        decimals: u8,
        params: &VaultParams,
        bump: u8,
        vault_bump: u8,
    ) -> VaultResult<Self> {
        let wallets = [
            admin,
            params.team_beneficiary,
            params.first_reserve_beneficiary,
            params.second_reserve_beneficiary,
        ];
        for (i, w) in wallets.iter().enumerate() {
            if *w == Pubkey::default() {
                return Err(VaultError::InvalidPubkey);
            }
            if wallets[..i].contains(w) {
                return Err(VaultError::InvalidConfig);
            }
        }

        let state = Self {
            mint,
            admin,
            vault,
            locked_at: 0,
            total_allocation: scale(TOTAL_ALLOCATION_TOKENS, decimals)?,
            team_reserve: ReserveRecord::new(
                params.team_beneficiary,
                scale(TEAM_RESERVE_TOKENS, decimals)?,
                TEAM_LOCK_SECONDS,
            ),
            first_reserve: ReserveRecord::new(
                params.first_reserve_beneficiary,
                scale(FIRST_RESERVE_TOKENS, decimals)?,
                FIRST_RESERVE_LOCK_SECONDS,
            ),
            second_reserve: ReserveRecord::new(
                params.second_reserve_beneficiary,
                scale(SECOND_RESERVE_TOKENS, decimals)?,
                SECOND_RESERVE_LOCK_SECONDS,
            ),
            bump,
            vault_bump,
        };
        if !state.allocations_balanced()? {
            return Err(VaultError::InvalidConfig);
        }
        Ok(state)
    }

    pub fn is_allocated(&self) -> bool {
        self.locked_at != 0
    }

    pub fn reserve(&self, kind: ReserveKind) -> &ReserveRecord {
        match kind {
            ReserveKind::Team => &self.team_reserve,
            ReserveKind::FirstReserve => &self.first_reserve,
            ReserveKind::SecondReserve => &self.second_reserve,
        }
    }

    fn reserve_mut(&mut self, kind: ReserveKind) -> &mut ReserveRecord {
        match kind {
            ReserveKind::Team => &mut self.team_reserve,
            ReserveKind::FirstReserve => &mut self.first_reserve,
            ReserveKind::SecondReserve => &mut self.second_reserve,
        }
    }

    /// team + first + second == total, summed without wraparound.
    pub fn allocations_balanced(&self) -> VaultResult<bool> {
        let mut sum: u128 = 0;
        for kind in ReserveKind::ALL {
            sum = sum
                .checked_add(self.reserve(kind).allocation as u128)
                .ok_or(VaultError::MathOverflow)?;
        }
        Ok(sum == self.total_allocation as u128)
    }

    pub fn require_admin(&self, caller: &Pubkey) -> VaultResult<()> {
        if *caller != self.admin {
            return Err(VaultError::Unauthorized);
        }
        Ok(())
    }

    /// Maps a signer to the reserve it is the beneficiary of.
    pub fn reserve_of(&self, caller: &Pubkey) -> VaultResult<ReserveKind> {
        ReserveKind::ALL
            .into_iter()
            .find(|kind| self.reserve(*kind).beneficiary == *caller)
            .ok_or(VaultError::Unauthorized)
    }

    fn require_team(&self, caller: &Pubkey) -> VaultResult<()> {
        match self.reserve_of(caller)? {
            ReserveKind::Team => Ok(()),
            _ => Err(VaultError::Unauthorized),
        }
    }

    fn require_token_reserve(&self, caller: &Pubkey) -> VaultResult<ReserveKind> {
        let kind = self.reserve_of(caller)?;
        if !kind.is_token_reserve() {
            return Err(VaultError::Unauthorized);
        }
        Ok(kind)
    }

    fn require_allocated(&self) -> VaultResult<()> {
        if !self.is_allocated() {
            return Err(VaultError::NotAllocated);
        }
        Ok(())
    }

    /// One-time split: binds the reserves to the observed vault balance and
    /// starts every lock at `now_ts`.
    pub fn allocate(&mut self, caller: &Pubkey, vault_balance: u64, now_ts: i64) -> VaultResult<()> {
        self.require_admin(caller)?;
        if self.is_allocated() {
            return Err(VaultError::AlreadyAllocated);
        }
        if vault_balance != self.total_allocation {
            return Err(VaultError::BalanceMismatch);
        }
        if now_ts <= 0 {
            return Err(VaultError::InvalidTimestamp);
        }
        self.locked_at = now_ts;
        Ok(())
    }

    /// Returns the whole vault balance to the administrator. Only possible
    /// before allocation. Returns the amount moved.
    pub fn recover_failed_lock<L: TokenLedger>(
        &self,
        caller: &Pubkey,
        ledger: &mut L,
    ) -> VaultResult<u64> {
        self.require_admin(caller)?;
        if self.is_allocated() {
            return Err(VaultError::AlreadyAllocated);
        }
        let amount = ledger.balance();
        if amount > 0 {
            ledger.transfer(&self.admin, amount)?;
        }
        Ok(amount)
    }

    /// The vault custodies its token only; native currency is never accepted.
    pub fn accept_native(&self, _lamports: u64) -> VaultResult<()> {
        Err(VaultError::NativeTransferRejected)
    }

    pub fn locked_balance(&self, caller: &Pubkey) -> VaultResult<u64> {
        let kind = self.reserve_of(caller)?;
        self.require_allocated()?;
        Ok(self.reserve(kind).locked_balance())
    }

    /// Reporting only; claims are gated by the team lock alone.
    pub fn team_vesting_stage(&self, caller: &Pubkey, now_ts: i64) -> VaultResult<u8> {
        self.require_team(caller)?;
        self.require_allocated()?;
        schedule::vesting_stage(now_ts, self.locked_at)
    }

    pub fn can_collect(&self, caller: &Pubkey, now_ts: i64) -> VaultResult<bool> {
        let kind = self.require_token_reserve(caller)?;
        self.require_allocated()?;
        self.reserve(kind).lock_open(now_ts, self.locked_at)
    }

    pub fn claim_team_reserve<L: TokenLedger>(
        &mut self,
        caller: &Pubkey,
        ledger: &mut L,
        now_ts: i64,
    ) -> VaultResult<u64> {
        self.require_team(caller)?;
        self.claim(ReserveKind::Team, ledger, now_ts)
    }

    pub fn claim_token_reserve<L: TokenLedger>(
        &mut self,
        caller: &Pubkey,
        ledger: &mut L,
        now_ts: i64,
    ) -> VaultResult<(ReserveKind, u64)> {
        let kind = self.require_token_reserve(caller)?;
        let amount = self.claim(kind, ledger, now_ts)?;
        Ok((kind, amount))
    }

    // `claimed` is only set after the ledger transfer returns Ok.
    fn claim<L: TokenLedger>(
        &mut self,
        kind: ReserveKind,
        ledger: &mut L,
        now_ts: i64,
    ) -> VaultResult<u64> {
        self.require_allocated()?;
        let reserve = *self.reserve(kind);
        let amount = reserve.claimable(now_ts, self.locked_at)?;
        ledger.transfer(&reserve.beneficiary, amount)?;
        self.reserve_mut(kind).claimed = true;
        Ok(amount)
    }
}

fn scale(tokens: u64, decimals: u8) -> VaultResult<u64> {
    10u64
        .checked_pow(decimals as u32)
        .and_then(|unit| tokens.checked_mul(unit))
        .ok_or(VaultError::MathOverflow)
}
