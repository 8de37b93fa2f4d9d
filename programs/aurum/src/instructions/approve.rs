use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

// Approve Instruction
//
// Adds one configured signer's approval to an active proposal. The
// approval bitmap makes this idempotent per signer: a second approval by
// the same key fails AlreadyApproved without changing the count.

#[derive(Accounts)]
pub struct Approve<'info> {
    pub signer: Signer<'info>,

    /// CHECK: identity the config PDA is derived from
    pub authority: UncheckedAccount<'info>,

    #[account(
        seeds = [CONFIG, authority.key().as_ref()],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [
            PROPOSAL,
            config.key().as_ref(),
            &proposal.proposal_id.to_le_bytes(),
        ],
        bump = proposal.bump,
    )]
    pub proposal: Account<'info, Proposal>,
}

impl<'info> Approve<'info> {
    pub fn approve(&mut self) -> Result<()> {
        // 1. Proposal-Config Relationship
        // Prevents approving a proposal that belongs to another config
        require!(
            self.proposal.config == self.config.key(),
            AurumError::ProposalMismatch
        );

        // 2. Signer Membership
        let signer_index = self
            .config
            .signer_index(&self.signer.key())
            .ok_or(AurumError::NotAuthorizedSigner)?;

        // 3. Signer-Set Epoch
        // Approvals only accumulate against the set the proposal was
        // opened under
        require!(
            self.proposal.signer_set_epoch == self.config.signer_set_epoch,
            AurumError::StaleSignerSet
        );

        // 4. Status Check
        // Executed proposals are immutable
        require!(self.proposal.is_active(), AurumError::AlreadyExecuted);

        // 5. Expiry Check
        let clock = Clock::get()?;
        require!(
            !self.proposal.is_expired(clock.unix_timestamp),
            AurumError::ProposalExpired
        );

        // 6. Record Approval
        require!(
            self.proposal.approve(signer_index),
            AurumError::AlreadyApproved
        );

        msg!(
            "Proposal {}: {}/{} approvals",
            self.proposal.proposal_id,
            self.proposal.approval_count,
            self.config.quorum_threshold
        );
        Ok(())
    }
}
