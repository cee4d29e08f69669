use anchor_lang::prelude::*;

use crate::error::{VaultError, VaultResult};
use crate::utils::schedule;

/// The three fixed reserves a vault splits its supply into.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReserveKind {
    Team,
    FirstReserve,
    SecondReserve,
}

impl ReserveKind {
    pub const ALL: [ReserveKind; 3] = [
        ReserveKind::Team,
        ReserveKind::FirstReserve,
        ReserveKind::SecondReserve,
    ];

    pub fn is_token_reserve(self) -> bool {
        matches!(self, ReserveKind::FirstReserve | ReserveKind::SecondReserve)
    }
}

/// Per-reserve record embedded in the vault state.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReserveRecord {
    /// Only wallet allowed to query or claim this reserve.
    pub beneficiary: Pubkey,
    /// Full reserve amount in base units, released all at once.
    pub allocation: u64,
    /// Lock measured from `locked_at`.
    pub lock_seconds: i64,
    /// Set once, after the allocation has left the vault.
    pub claimed: bool,
}

impl ReserveRecord {
    pub const SIZE: usize =
        32 + // beneficiary
        8 +  // allocation
        8 +  // lock_seconds
        1;   // claimed

    pub fn new(beneficiary: Pubkey, allocation: u64, lock_seconds: i64) -> Self {
        Self {
            beneficiary,
            allocation,
            lock_seconds,
            claimed: false,
        }
    }

    /// Amount still held for the beneficiary.
    pub fn locked_balance(&self) -> u64 {
        if self.claimed {
            0
        } else {
            self.allocation
        }
    }

    pub fn lock_open(&self, now_ts: i64, locked_at: i64) -> VaultResult<bool> {
        schedule::lock_open(now_ts, locked_at, self.lock_seconds)
    }

    /// First instant at which this reserve can be claimed.
    pub fn unlock_ts(&self, locked_at: i64) -> VaultResult<i64> {
        schedule::unlock_ts(locked_at, self.lock_seconds)
    }

    /// Checks the time lock and single-claim rule, returning the amount to release.
    pub fn claimable(&self, now_ts: i64, locked_at: i64) -> VaultResult<u64> {
        if !self.lock_open(now_ts, locked_at)? {
            return Err(VaultError::CliffNotReached);
        }
        if self.claimed {
            return Err(VaultError::AlreadyClaimed);
        }
        Ok(self.allocation)
    }
}
