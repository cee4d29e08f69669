//! Program-wide constants fixed at deployment.

/// PDA seed for the singleton vault state (scoped by mint).
pub const VAULT_STATE_SEED: &[u8] = b"vault_state";

/// PDA seed for the token account that custodies the reserves.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Whole-token allocation sizes, scaled by `10^decimals` at initialization.
pub const TOTAL_ALLOCATION_TOKENS: u64 = 500_000_000;
pub const TEAM_RESERVE_TOKENS: u64 = 200_000_000;
pub const FIRST_RESERVE_TOKENS: u64 = 150_000_000;
pub const SECOND_RESERVE_TOKENS: u64 = 150_000_000;

/// Team reserve lock: 1 year. Claimable strictly after this has elapsed.
pub const TEAM_LOCK_SECONDS: i64 = 365 * SECONDS_PER_DAY;

/// First token reserve lock: 2 years.
pub const FIRST_RESERVE_LOCK_SECONDS: i64 = 2 * 365 * SECONDS_PER_DAY;

/// Second token reserve lock: 3 years.
pub const SECOND_RESERVE_LOCK_SECONDS: i64 = 3 * 365 * SECONDS_PER_DAY;

/// Width of one team vesting stage window.
pub const TEAM_VESTING_STAGE_SECONDS: i64 = 100 * SECONDS_PER_DAY;

/// Last reportable team vesting stage.
pub const TEAM_VESTING_MAX_STAGE: u8 = 4;
