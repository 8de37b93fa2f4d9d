use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::{constants::*, errors::*, state::*};

// Unstake Instruction
//
// Returns principal from the pool vault and pays the accrued reward from
// the treasury vault. Rewards come out of the treasury's earmarked slice;
// if the earmark cannot cover the payout the whole instruction fails and
// the position is untouched.
//
// A stake followed immediately by an unstake with no accrual in between
// returns exactly the principal.

#[derive(Accounts)]
pub struct Unstake<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// CHECK: identity the config PDA is derived from
    pub authority: UncheckedAccount<'info>,

    #[account(
        seeds = [CONFIG, authority.key().as_ref()],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

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
        seeds = [USER_STAKE, user.key().as_ref()],
        bump = user_stake.bump,
        constraint = user_stake.owner == user.key() @ AurumError::InsufficientStake,
    )]
    pub user_stake: Box<Account<'info, StakeAccount>>,

    #[account(address = config.mint)]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut)]
    pub user_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = staking_pool.vault,
    )]
    pub pool_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = treasury.vault,
    )]
    pub treasury_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> Unstake<'info> {
    pub fn unstake(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, AurumError::InvalidAmount);
        require!(
            self.user_stake.amount >= amount,
            AurumError::InsufficientStake
        );

        // Reward owed to the whole position as of now
        let reward = self
            .user_stake
            .pending_reward(self.staking_pool.acc_reward_per_share)?;

        // Treasury side first: fails before any token movement if the
        // earmark cannot cover the payout
        if reward > 0 {
            self.treasury.pay_rewards(reward)?;
        }

        let authority_key = self.authority.key();

        // Principal from the pool vault, pool PDA signs
        let pool_seeds: &[&[&[u8]]] = &[&[
            STAKING_POOL,
            authority_key.as_ref(),
            &[self.staking_pool.bump],
        ]];
        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.pool_vault.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: self.user_token_account.to_account_info(),
                    authority: self.staking_pool.to_account_info(),
                },
                pool_seeds,
            ),
            amount,
            self.mint.decimals,
        )?;

        // Reward from the treasury vault, treasury PDA signs
        if reward > 0 {
            let treasury_seeds: &[&[&[u8]]] =
                &[&[TREASURY, authority_key.as_ref(), &[self.treasury.bump]]];
            transfer_checked(
                CpiContext::new_with_signer(
                    self.token_program.to_account_info(),
                    TransferChecked {
                        from: self.treasury_vault.to_account_info(),
                        mint: self.mint.to_account_info(),
                        to: self.user_token_account.to_account_info(),
                        authority: self.treasury.to_account_info(),
                    },
                    treasury_seeds,
                ),
                reward,
                self.mint.decimals,
            )?;
        }

        // Shrink the position; the settle re-snapshots the tally and the
        // payout clears unclaimed
        let new_amount = self
            .user_stake
            .amount
            .checked_sub(amount)
            .ok_or(AurumError::Overflow)?;
        self.user_stake
            .settle(self.staking_pool.acc_reward_per_share, new_amount)?;
        self.user_stake.unclaimed = 0;

        self.staking_pool.total_staked = self
            .staking_pool
            .total_staked
            .checked_sub(amount)
            .ok_or(AurumError::Overflow)?;

        msg!("Unstaked {} plus {} reward", amount, reward);
        Ok(())
    }
}
