use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

// Propose Instruction
//
// Any configured multisig signer can open a proposal for a governance
// action. Payload-specific validation happens here, before the proposal
// account is written; treasury withdrawals carry extra transfer data and
// go through propose_withdrawal instead.
//
// The proposer automatically approves their own proposal.

#[derive(Accounts)]
pub struct Propose<'info> {
    #[account(mut)]
    pub proposer: Signer<'info>,

    /// CHECK: identity the config PDA is derived from
    pub authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [CONFIG, authority.key().as_ref()],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = proposer,
        space = ANCHOR_DISCRIMINATOR + Proposal::INIT_SPACE,
        seeds = [
            PROPOSAL,
            config.key().as_ref(),
            &config.proposal_count.to_le_bytes(),
        ],
        bump,
    )]
    pub proposal: Account<'info, Proposal>,

    pub system_program: Program<'info, System>,
}

impl<'info> Propose<'info> {
    pub fn propose(&mut self, action: GovAction, bumps: &ProposeBumps) -> Result<()> {
        // 1. Signer Membership
        let proposer_index = self
            .config
            .signer_index(&self.proposer.key())
            .ok_or(AurumError::NotAuthorizedSigner)?;

        // 2. Payload Validation
        match &action {
            GovAction::WithdrawTreasury { .. } => {
                // Withdrawals have a dedicated entry point
                return err!(AurumError::InvalidProposalAction);
            }
            GovAction::SetPause { .. } => {}
            GovAction::UpdateSigners {
                signers,
                signer_count,
                quorum_threshold,
            } => {
                let count = *signer_count as usize;
                require!(
                    count >= 1 && count <= MAX_SIGNERS,
                    AurumError::InvalidSignerSet
                );
                // Reject sets the execute step would refuse anyway
                let (_, deduped) = Config::sanitize_signers(&signers[..count])?;
                require!(
                    *quorum_threshold >= 1 && *quorum_threshold <= deduped,
                    AurumError::InvalidSignerSet
                );
            }
            GovAction::RegisterOracle { oracle } => {
                require!(*oracle != Pubkey::default(), AurumError::UnauthorizedOracle);
            }
            GovAction::AccrueRewards { amount } => {
                require!(*amount > 0, AurumError::InvalidAmount);
            }
        }

        open_proposal(
            &mut self.config,
            &mut self.proposal,
            self.proposer.key(),
            proposer_index,
            action,
            bumps.proposal,
        )
    }
}

// Shared proposal bookkeeping for propose and propose_withdrawal
pub fn open_proposal(
    config: &mut Account<Config>,
    proposal: &mut Account<Proposal>,
    proposer: Pubkey,
    proposer_index: usize,
    action: GovAction,
    bump: u8,
) -> Result<()> {
    let clock = Clock::get()?;

    let proposal_id = config.proposal_count;
    config.proposal_count = config
        .proposal_count
        .checked_add(1)
        .ok_or(AurumError::Overflow)?;

    let expires_at = clock
        .unix_timestamp
        .checked_add(PROPOSAL_EXPIRY_SECS)
        .ok_or(AurumError::Overflow)?;

    // Proposer auto-approves
    let approval_bitmap = 1u64 << proposer_index;

    proposal.set_inner(Proposal {
        config: config.key(),
        proposal_id,
        proposer,
        action,
        signer_set_epoch: config.signer_set_epoch,
        status: ProposalStatus::Active,
        approval_bitmap,
        approval_count: 1,
        created_at: clock.unix_timestamp,
        expires_at,
        executed_at: 0,
        bump,
    });

    msg!("Proposal {} opened", proposal_id);
    Ok(())
}
