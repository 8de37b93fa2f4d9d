use anchor_lang::prelude::*;

#[error_code]
pub enum AurumError {
    // Validation errors
    #[msg("Total supply must be greater than zero")]
    InvalidSupply,

    #[msg("Vesting end must be strictly in the future")]
    InvalidVestingWindow,

    #[msg("Signer set is empty, oversized, or contains an invalid key")]
    InvalidSignerSet,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("This action cannot be proposed through this instruction")]
    InvalidProposalAction,

    #[msg("Recipient account does not match the proposal")]
    InvalidRecipient,

    // Authorization errors
    #[msg("Signer is not in the configured multisig signer set")]
    NotAuthorizedSigner,

    #[msg("Signer is not a registered oracle")]
    UnauthorizedOracle,

    // State-conflict errors
    #[msg("Program state already exists for this mint")]
    AlreadyInitialized,

    #[msg("Signer has already approved this proposal")]
    AlreadyApproved,

    #[msg("Proposal has already been executed")]
    AlreadyExecuted,

    #[msg("Team allocation has already been released")]
    AlreadyReleased,

    #[msg("Proposal does not belong to this config")]
    ProposalMismatch,

    #[msg("Proposal predates the current signer set")]
    StaleSignerSet,

    #[msg("Oracle is already registered")]
    DuplicateOracle,

    // Precondition errors
    #[msg("Proposal has not reached the quorum threshold")]
    QuorumNotMet,

    #[msg("Vesting cliff has not been reached")]
    VestingNotReached,

    #[msg("Oracle attestations have not converged on a value")]
    ConsensusNotReached,

    #[msg("Attestation is stale or behind the previous one")]
    StaleAttestation,

    #[msg("Caller has less staked than requested")]
    InsufficientStake,

    #[msg("Treasury balance cannot cover this withdrawal")]
    InsufficientBalance,

    #[msg("Cannot accrue rewards while the pool is empty")]
    NoStakers,

    #[msg("Treasury cannot cover the accrued rewards")]
    TreasuryInsufficientForRewards,

    #[msg("Proposal has expired and can no longer be acted on")]
    ProposalExpired,

    #[msg("Oracle set is full")]
    OracleSetFull,

    // Policy-deny errors
    #[msg("Transfer from the team reserve exceeds the released allocation")]
    VestingLocked,

    #[msg("Transfers are paused by governance")]
    TransfersPaused,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    Overflow,
}
