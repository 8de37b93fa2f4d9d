use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount};

use crate::{constants::*, errors::*, state::*};

// Transfer Hook Instruction
//
// Invoked by the token runtime on every transfer of the mint, routed in
// through the fallback entrypoint's interface dispatch. Pure allow/deny:
// the hook never moves funds and has no side effects.
//
// The first five accounts follow the transfer-hook interface order
// (source, mint, destination, owner, extra-account-metas); the program
// state PDAs come in as the resolved extra accounts.
//
// Checks, in order:
// 1. Team-reserve outflow must fit the released vesting budget
// 2. Governance pause blocks everything except protocol vault movement

#[derive(Accounts)]
pub struct TransferHook<'info> {
    #[account(token::mint = mint)]
    pub source_token: InterfaceAccount<'info, TokenAccount>,

    #[account(address = config.mint)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(token::mint = mint)]
    pub destination_token: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: owner of the source account, may be a PDA mid-transfer
    pub owner: UncheckedAccount<'info>,

    /// CHECK: extra-account-metas PDA, resolved by the token runtime
    pub extra_account_meta_list: UncheckedAccount<'info>,

    #[account(
        seeds = [CONFIG, config.authority.as_ref()],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [STAKING_POOL, config.authority.as_ref()],
        bump = staking_pool.bump,
    )]
    pub staking_pool: Account<'info, StakingPool>,

    #[account(
        seeds = [TREASURY, config.authority.as_ref()],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
}

impl<'info> TransferHook<'info> {
    pub fn transfer_hook(&self, amount: u64) -> Result<()> {
        let source = self.source_token.key();

        // 1. Vesting Budget
        // Applies pre- and post-cliff: only released_amount may leave the
        // team reserve
        if source == self.config.team_reserve {
            require!(
                amount <= self.config.released_amount,
                AurumError::VestingLocked
            );
        }

        // 2. Governance Pause
        // Protocol vaults stay operational so treasury-approved movement
        // and unstaking are not frozen with the market
        if self.config.paused {
            let exempt = source == self.treasury.vault
                || source == self.staking_pool.vault
                || source == self.config.supply_vault;
            require!(exempt, AurumError::TransfersPaused);
        }

        Ok(())
    }
}
