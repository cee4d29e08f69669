//! Elapsed-time rules for reserve locks and team vesting stages.
//! - elapsed = now - locked_at, floored at zero
//! - a lock of `d` seconds opens strictly after `d` has elapsed (first open instant: locked_at + d + 1)
//! - team stage = floor(elapsed / stage window), capped at the last stage

use crate::constants::{TEAM_VESTING_MAX_STAGE, TEAM_VESTING_STAGE_SECONDS};
use crate::error::VaultError;

/// Seconds elapsed since allocation. `locked_at == 0` means not allocated.
pub fn elapsed_since(now_ts: i64, locked_at: i64) -> Result<i64, VaultError> {
    if locked_at <= 0 {
        return Err(VaultError::NotAllocated);
    }
    let elapsed = now_ts
        .checked_sub(locked_at)
        .ok_or(VaultError::MathOverflow)?;
    Ok(elapsed.max(0))
}

/// True once more than `lock_seconds` have elapsed since allocation.
pub fn lock_open(now_ts: i64, locked_at: i64, lock_seconds: i64) -> Result<bool, VaultError> {
    Ok(elapsed_since(now_ts, locked_at)? > lock_seconds)
}

/// First timestamp at which a lock of `lock_seconds` is open.
pub fn unlock_ts(locked_at: i64, lock_seconds: i64) -> Result<i64, VaultError> {
    if locked_at <= 0 {
        return Err(VaultError::NotAllocated);
    }
    locked_at
        .checked_add(lock_seconds)
        .and_then(|t| t.checked_add(1))
        .ok_or(VaultError::MathOverflow)
}

/// Informational team vesting stage in `[0, TEAM_VESTING_MAX_STAGE]`.
pub fn vesting_stage(now_ts: i64, locked_at: i64) -> Result<u8, VaultError> {
    let windows = elapsed_since(now_ts, locked_at)? / TEAM_VESTING_STAGE_SECONDS;
    Ok(windows.min(TEAM_VESTING_MAX_STAGE as i64) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SECONDS_PER_DAY, TEAM_LOCK_SECONDS};

    const T: i64 = 1_700_000_000;

    fn days(n: i64) -> i64 {
        n * SECONDS_PER_DAY
    }

    #[test]
    fn unallocated_vault_has_no_elapsed_time() {
        assert!(matches!(elapsed_since(T, 0), Err(VaultError::NotAllocated)));
        assert!(matches!(vesting_stage(T, 0), Err(VaultError::NotAllocated)));
        assert!(matches!(lock_open(T, 0, 1), Err(VaultError::NotAllocated)));
    }

    #[test]
    fn clock_behind_lock_counts_as_zero() {
        assert_eq!(elapsed_since(T - 10, T).unwrap(), 0);
        assert_eq!(vesting_stage(T - 10, T).unwrap(), 0);
    }

    #[test]
    fn stage_steps_every_hundred_days() {
        assert_eq!(vesting_stage(T, T).unwrap(), 0);
        assert_eq!(vesting_stage(T + days(100) - 1, T).unwrap(), 0);
        assert_eq!(vesting_stage(T + days(100), T).unwrap(), 1);
        assert_eq!(vesting_stage(T + days(200), T).unwrap(), 2);
        assert_eq!(vesting_stage(T + days(300), T).unwrap(), 3);
        assert_eq!(vesting_stage(T + days(400), T).unwrap(), 4);
    }

    #[test]
    fn stage_saturates_and_never_decreases() {
        let mut last = 0u8;
        for d in (0..3_000).step_by(7) {
            let stage = vesting_stage(T + days(d), T).unwrap();
            assert!(stage >= last);
            assert!(stage <= TEAM_VESTING_MAX_STAGE);
            last = stage;
        }
        assert_eq!(last, TEAM_VESTING_MAX_STAGE);
    }

    #[test]
    fn lock_opens_one_second_after_duration() {
        let open_at = unlock_ts(T, TEAM_LOCK_SECONDS).unwrap();
        assert_eq!(open_at, T + days(365) + 1);
        assert!(!lock_open(open_at - 1, T, TEAM_LOCK_SECONDS).unwrap());
        assert!(lock_open(open_at, T, TEAM_LOCK_SECONDS).unwrap());
        assert!(lock_open(T + days(366), T, TEAM_LOCK_SECONDS).unwrap());
    }

    #[test]
    fn far_future_clock_overflow_is_reported() {
        assert!(matches!(
            unlock_ts(i64::MAX, TEAM_LOCK_SECONDS),
            Err(VaultError::MathOverflow)
        ));
    }
}
