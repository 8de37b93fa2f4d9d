use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

// Accrue Instruction
//
// Single-transaction multisig gate: the remaining accounts must carry at
// least quorum_threshold distinct configured signers that actually signed
// this transaction (the SPL-token multisig pattern). The proposal path
// (AccrueRewards action) covers the same effect when signatures cannot be
// collected in one transaction.
//
// Effect: earmarks the amount in the treasury and folds it into the pool
// accumulator. Fails NoStakers while the pool is empty; the funds stay in
// the treasury for a later accrual.

#[derive(Accounts)]
pub struct Accrue<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: identity the config PDA is derived from
    pub authority: UncheckedAccount<'info>,

    #[account(
        seeds = [CONFIG, authority.key().as_ref()],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [STAKING_POOL, authority.key().as_ref()],
        bump = staking_pool.bump,
    )]
    pub staking_pool: Account<'info, StakingPool>,

    #[account(
        mut,
        seeds = [TREASURY, authority.key().as_ref()],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
}

pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, Accrue<'info>>,
    amount: u64,
) -> Result<()> {
    let config = &ctx.accounts.config;

    // Count distinct configured signers among the extra accounts,
    // bitmap-deduplicated so one key cannot be counted twice
    let mut seen: u64 = 0;
    let mut approvals: u8 = 0;
    for account in ctx.remaining_accounts {
        if !account.is_signer {
            continue;
        }
        if let Some(index) = config.signer_index(account.key) {
            let bit = 1u64 << index;
            if seen & bit == 0 {
                seen |= bit;
                approvals += 1;
            }
        }
    }
    require!(
        approvals >= config.quorum_threshold,
        AurumError::QuorumNotMet
    );

    ctx.accounts.treasury.allocate_rewards(amount)?;
    ctx.accounts.staking_pool.accrue(amount)?;

    msg!("Accrued {} to the staking pool", amount);
    Ok(())
}
