use anchor_lang::prelude::*;

use crate::constants::MAX_SIGNERS;

// Proposal status enum
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace)]
pub enum ProposalStatus {
    // Proposal is active and can receive approvals
    Active,
    // Proposal has been executed
    Executed,
}

impl Default for ProposalStatus {
    fn default() -> Self {
        ProposalStatus::Active
    }
}

// Multisig-gated actions
//
// WithdrawTreasury carries its own entry point (propose_withdrawal);
// the remaining payloads go through the generic propose instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace)]
pub enum GovAction {
    // Move funds out of the treasury vault to a fixed recipient
    WithdrawTreasury { amount: u64, recipient: Pubkey },

    // Flip the governance pause flag consulted by the transfer hook
    SetPause { paused: bool },

    // Replace the multisig signer set and quorum threshold
    // Only the first signer_count entries of the array are meaningful
    UpdateSigners {
        signers: [Pubkey; MAX_SIGNERS],
        signer_count: u8,
        quorum_threshold: u8,
    },

    // Register an additional oracle identity with the consensus gate
    RegisterOracle { oracle: Pubkey },

    // Distribute rewards to the staking pool accumulator
    AccrueRewards { amount: u64 },
}

// Proposal account
// Stores a pending action requiring multisig approval
#[account]
#[derive(InitSpace)]
pub struct Proposal {
    // The config this proposal belongs to
    pub config: Pubkey,

    // Unique proposal number within this config
    pub proposal_id: u64,

    // Who created this proposal (must be a configured signer)
    pub proposer: Pubkey,

    // What action to execute
    pub action: GovAction,

    // Signer-set epoch this proposal was opened under; approvals are void
    // once the set is replaced
    pub signer_set_epoch: u64,

    // Current status
    pub status: ProposalStatus,

    // Bitmap of approvals: bit i set means signer i approved
    pub approval_bitmap: u64,

    // Current approval count
    pub approval_count: u8,

    // Timestamp when proposal was created
    pub created_at: i64,

    // Timestamp when proposal expires; expired proposals cannot be
    // approved or executed
    pub expires_at: i64,

    // Timestamp when proposal was executed (0 if not executed)
    pub executed_at: i64,

    // PDA bump seed
    pub bump: u8,
}

impl Proposal {
    // Check if the signer at the given index has approved
    pub fn has_approved(&self, signer_index: usize) -> bool {
        if signer_index >= MAX_SIGNERS {
            return false;
        }
        (self.approval_bitmap & (1u64 << signer_index)) != 0
    }

    // Record an approval from the signer at the given index
    // Returns false if out of range or already approved
    pub fn approve(&mut self, signer_index: usize) -> bool {
        if signer_index >= MAX_SIGNERS || self.has_approved(signer_index) {
            return false;
        }
        self.approval_bitmap |= 1u64 << signer_index;
        self.approval_count += 1;
        true
    }

    // Check if proposal has reached the quorum threshold
    pub fn is_ready_to_execute(&self, quorum_threshold: u8) -> bool {
        self.approval_count >= quorum_threshold && self.status == ProposalStatus::Active
    }

    pub fn is_active(&self) -> bool {
        self.status == ProposalStatus::Active
    }

    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp > self.expires_at
    }
}
