use anchor_lang::prelude::*;

use crate::constants::MAX_SIGNERS;
use crate::errors::AurumError;

// Root state account
//
// Holds the global token parameters and the multisig signer set.
// Created exactly once per mint by `initialize`; total_supply is never
// written again afterwards. Every other component keeps a read-only
// reference to this account through its PDA seeds.
#[account]
#[derive(InitSpace)]
pub struct Config {
    // Identity the program PDAs are derived from
    pub authority: Pubkey,

    // The Token-2022 mint this config governs
    pub mint: Pubkey,

    // Minted once at initialization, immutable afterwards
    pub total_supply: u64,

    // Single-cliff vesting boundary for the team allocation
    pub team_vest_end: i64,

    // Amount of the supply reserved for the team
    pub team_allocation: u64,

    // Portion of the team allocation unlocked by release_vested
    // Only ever 0 or team_allocation, never decreases
    pub released_amount: u64,

    // Token account holding the team allocation
    pub team_reserve: Pubkey,

    // Token account holding the circulating allocation at genesis
    pub supply_vault: Pubkey,

    // Trust model of the oracle gate: quorum consensus vs single oracle
    pub multi_oracle_consensus: bool,

    // Governance pause flag, set only through a multisig proposal
    pub paused: bool,

    // Ordered, deduplicated multisig signer set
    // Fixed-size array avoids realloc vulnerabilities
    pub multisig_signers: [Pubkey; MAX_SIGNERS],
    pub signer_count: u8,

    // Distinct approvals required to execute a proposal
    // 1 <= quorum_threshold <= signer_count
    pub quorum_threshold: u8,

    // Bumped every time the signer set is replaced; proposals record the
    // epoch they were opened under, so approvals cannot outlive the set
    // that granted them
    pub signer_set_epoch: u64,

    // Total proposals ever created (used for proposal numbering)
    pub proposal_count: u64,

    pub bump: u8,
}

impl Config {
    // Check if a pubkey is a configured multisig signer
    pub fn is_multisig_signer(&self, key: &Pubkey) -> bool {
        self.signer_index(key).is_some()
    }

    // Get the index of a signer, returns None if not found
    pub fn signer_index(&self, key: &Pubkey) -> Option<usize> {
        self.multisig_signers
            .iter()
            .take(self.signer_count as usize)
            .position(|signer| signer == key)
    }

    // Replace the signer set with a sanitized one
    pub fn set_signers(&mut self, input: &[Pubkey], quorum_threshold: u8) -> Result<()> {
        let (signers, count) = Self::sanitize_signers(input)?;
        require!(
            quorum_threshold >= 1 && quorum_threshold <= count,
            AurumError::InvalidSignerSet
        );
        self.multisig_signers = signers;
        self.signer_count = count;
        self.quorum_threshold = quorum_threshold;
        self.signer_set_epoch = self
            .signer_set_epoch
            .checked_add(1)
            .ok_or(AurumError::Overflow)?;
        Ok(())
    }

    // Signer intake with ordered-set semantics
    //
    // Duplicate entries collapse into one slot; the empty set, an oversized
    // set, or a set containing the default pubkey is rejected.
    pub fn sanitize_signers(input: &[Pubkey]) -> Result<([Pubkey; MAX_SIGNERS], u8)> {
        require!(
            !input.is_empty() && input.len() <= MAX_SIGNERS,
            AurumError::InvalidSignerSet
        );

        let mut signers = [Pubkey::default(); MAX_SIGNERS];
        let mut count: usize = 0;
        for key in input {
            require!(*key != Pubkey::default(), AurumError::InvalidSignerSet);
            if !signers[..count].contains(key) {
                signers[count] = *key;
                count += 1;
            }
        }

        Ok((signers, count as u8))
    }

    // Majority quorum for a signer set of the given size
    pub fn majority_quorum(signer_count: u8) -> u8 {
        signer_count / 2 + 1
    }
}
