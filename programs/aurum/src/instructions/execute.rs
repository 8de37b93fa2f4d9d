use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::{constants::*, errors::*, state::*};

// Execute Instruction
//
// Applies an approved proposal's action to its target component.
// A proposal executes at most once: the status flips to Executed in the
// same transaction that applies the effect, and a re-execution attempt
// fails AlreadyExecuted.
//
// Treasury withdrawals re-check the balance here, not only at proposal
// time, and consult the oracle gate when multi-oracle consensus mode is
// on; they are the privileged fund movement the gate protects.

#[derive(Accounts)]
pub struct Execute<'info> {
    #[account(mut)]
    pub executor: Signer<'info>,

    /// CHECK: identity the config PDA is derived from
    pub authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [CONFIG, authority.key().as_ref()],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [
            PROPOSAL,
            config.key().as_ref(),
            &proposal.proposal_id.to_le_bytes(),
        ],
        bump = proposal.bump,
    )]
    pub proposal: Box<Account<'info, Proposal>>,

    #[account(
        mut,
        seeds = [STAKING_POOL, authority.key().as_ref()],
        bump = staking_pool.bump,
    )]
    pub staking_pool: Box<Account<'info, StakingPool>>,

    #[account(
        mut,
        seeds = [TREASURY, authority.key().as_ref()],
        bump = treasury.bump,
    )]
    pub treasury: Box<Account<'info, Treasury>>,

    #[account(
        mut,
        seeds = [ORACLE, authority.key().as_ref()],
        bump = oracle_state.bump,
    )]
    pub oracle_state: Box<Account<'info, OracleState>>,

    #[account(address = config.mint)]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        address = treasury.vault,
    )]
    pub treasury_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    // Only consulted for WithdrawTreasury actions
    #[account(mut)]
    pub recipient_token_account: Option<Box<InterfaceAccount<'info, TokenAccount>>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> Execute<'info> {
    pub fn execute(&mut self) -> Result<()> {
        // 1. Executor Membership
        require!(
            self.config.is_multisig_signer(&self.executor.key()),
            AurumError::NotAuthorizedSigner
        );

        // 2. Single-Execution Guard
        require!(self.proposal.is_active(), AurumError::AlreadyExecuted);

        // 3. Signer-Set Epoch
        // A proposal approved under a replaced signer set carries
        // approvals no current signer granted
        require!(
            self.proposal.signer_set_epoch == self.config.signer_set_epoch,
            AurumError::StaleSignerSet
        );

        // 4. Quorum Check
        require!(
            self.proposal
                .is_ready_to_execute(self.config.quorum_threshold),
            AurumError::QuorumNotMet
        );

        // 5. Expiry Check
        let clock = Clock::get()?;
        require!(
            !self.proposal.is_expired(clock.unix_timestamp),
            AurumError::ProposalExpired
        );

        // 6. Apply The Action
        let action = self.proposal.action;
        match action {
            GovAction::WithdrawTreasury { amount, recipient } => {
                self.withdraw_treasury(amount, recipient, clock.unix_timestamp)?;
            }
            GovAction::SetPause { paused } => {
                self.config.paused = paused;
                msg!("Governance pause set to {}", paused);
            }
            GovAction::UpdateSigners {
                signers,
                signer_count,
                quorum_threshold,
            } => {
                self.config
                    .set_signers(&signers[..signer_count as usize], quorum_threshold)?;
                msg!(
                    "Signer set replaced: {} signers, quorum {}",
                    self.config.signer_count,
                    quorum_threshold
                );
            }
            GovAction::RegisterOracle { oracle } => {
                self.oracle_state.register(oracle)?;
                msg!("Oracle {} registered", oracle);
            }
            GovAction::AccrueRewards { amount } => {
                // Earmark before touching the accumulator so the pool can
                // never owe more than the treasury has allocated
                self.treasury.allocate_rewards(amount)?;
                self.staking_pool.accrue(amount)?;
                msg!("Accrued {} to the staking pool", amount);
            }
        }

        // 7. Mark Executed
        self.proposal.status = ProposalStatus::Executed;
        self.proposal.executed_at = clock.unix_timestamp;

        Ok(())
    }

    fn withdraw_treasury(&mut self, amount: u64, recipient: Pubkey, now: i64) -> Result<()> {
        // Oracle gate for privileged fund movement
        self.oracle_state
            .consensus(now, !self.config.multi_oracle_consensus)?;

        // Balance re-check at execution time
        self.treasury.withdraw(amount)?;

        let recipient_account = self
            .recipient_token_account
            .as_ref()
            .ok_or(AurumError::InvalidRecipient)?;
        require!(
            recipient_account.key() == recipient,
            AurumError::InvalidRecipient
        );

        let authority_key = self.authority.key();
        let treasury_seeds: &[&[&[u8]]] =
            &[&[TREASURY, authority_key.as_ref(), &[self.treasury.bump]]];

        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.treasury_vault.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: recipient_account.to_account_info(),
                    authority: self.treasury.to_account_info(),
                },
                treasury_seeds,
            ),
            amount,
            self.mint.decimals,
        )?;

        msg!("Treasury withdrawal of {} executed", amount);
        Ok(())
    }
}
