pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["config", authority]
pub const CONFIG: &[u8] = b"config";

// Seeds for PDA derivation: ["staking_pool", authority]
pub const STAKING_POOL: &[u8] = b"staking_pool";

// Seeds for PDA derivation: ["treasury", authority]
pub const TREASURY: &[u8] = b"treasury";

// Seeds for PDA derivation: ["oracle", authority]
pub const ORACLE: &[u8] = b"oracle";

// Seeds for PDA derivation: ["proposal", config, proposal_id]
pub const PROPOSAL: &[u8] = b"proposal";

// Seeds for PDA derivation: ["stake", owner]
pub const USER_STAKE: &[u8] = b"stake";

// Token vault seeds, all scoped to the config PDA
pub const SUPPLY_VAULT: &[u8] = b"supply_vault";
pub const TEAM_RESERVE: &[u8] = b"team_reserve";
pub const POOL_VAULT: &[u8] = b"pool_vault";
pub const TREASURY_VAULT: &[u8] = b"treasury_vault";

// Maximum number of multisig signers stored in the config
pub const MAX_SIGNERS: usize = 10;

// Maximum number of registered oracle identities
pub const MAX_ORACLES: usize = 5;

pub const TOKEN_DECIMALS: u8 = 9;

pub const BPS_DENOMINATOR: u64 = 10_000;

// Share of total supply reserved for the team, locked behind the vesting cliff
pub const TEAM_SHARE_BPS: u64 = 1_000;

// Scale factor for the per-share reward accumulator
pub const REWARD_PRECISION: u128 = 1_000_000_000_000;

// Attestations agree when all values sit within this band of their minimum
pub const ORACLE_TOLERANCE_BPS: u16 = 100;

// Attestations older than this are ignored by the consensus gate
pub const ORACLE_FRESHNESS_SECS: i64 = 300;

// Proposals expire after: created_at + expiry period (7 days in seconds)
pub const PROPOSAL_EXPIRY_SECS: i64 = 7 * 24 * 60 * 60;
