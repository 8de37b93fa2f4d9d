use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::{constants::*, errors::*, state::*};

// Stake Instruction
//
// Moves tokens from the caller into the pool vault. The position is
// settled against the current accumulator before it grows, so a deposit
// can never claim rewards accrued before it existed.

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

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
        init_if_needed,
        payer = user,
        space = ANCHOR_DISCRIMINATOR + StakeAccount::INIT_SPACE,
        seeds = [USER_STAKE, user.key().as_ref()],
        bump,
    )]
    pub user_stake: Account<'info, StakeAccount>,

    #[account(address = config.mint)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub user_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        address = staking_pool.vault,
    )]
    pub pool_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Stake<'info> {
    pub fn stake(&mut self, amount: u64, bumps: &StakeBumps) -> Result<()> {
        require!(amount > 0, AurumError::InvalidAmount);

        // Move principal into the pool vault
        transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.user_token_account.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: self.pool_vault.to_account_info(),
                    authority: self.user.to_account_info(),
                },
            ),
            amount,
            self.mint.decimals,
        )?;

        let user_stake = &mut self.user_stake;
        user_stake.owner = self.user.key();
        user_stake.bump = bumps.user_stake;

        // Settle before growing the position
        let new_amount = user_stake
            .amount
            .checked_add(amount)
            .ok_or(AurumError::Overflow)?;
        user_stake.settle(self.staking_pool.acc_reward_per_share, new_amount)?;

        self.staking_pool.total_staked = self
            .staking_pool
            .total_staked
            .checked_add(amount)
            .ok_or(AurumError::Overflow)?;

        msg!("Staked {}", amount);
        Ok(())
    }
}
