use anchor_lang::prelude::*;

use crate::instructions::propose::open_proposal;
use crate::{constants::*, errors::*, state::*};

// Propose Withdrawal Instruction
//
// Opens a WithdrawTreasury proposal. The treasury balance is deliberately
// NOT checked here: it may change before quorum is reached, so the check
// belongs to execution time.

#[derive(Accounts)]
pub struct ProposeWithdrawal<'info> {
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

impl<'info> ProposeWithdrawal<'info> {
    pub fn propose_withdrawal(
        &mut self,
        amount: u64,
        recipient: Pubkey,
        bumps: &ProposeWithdrawalBumps,
    ) -> Result<()> {
        let proposer_index = self
            .config
            .signer_index(&self.proposer.key())
            .ok_or(AurumError::NotAuthorizedSigner)?;

        require!(amount > 0, AurumError::InvalidAmount);
        require!(recipient != Pubkey::default(), AurumError::InvalidRecipient);

        open_proposal(
            &mut self.config,
            &mut self.proposal,
            self.proposer.key(),
            proposer_index,
            GovAction::WithdrawTreasury { amount, recipient },
            bumps.proposal,
        )
    }
}
