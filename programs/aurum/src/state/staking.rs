use anchor_lang::prelude::*;

use crate::constants::REWARD_PRECISION;
use crate::errors::AurumError;

// Staking pool state
//
// Rewards use a scaled per-share accumulator: each accrual adds
// reward * REWARD_PRECISION / total_staked, and every position snapshots
// the accumulator so its share is (amount * acc) - tally at settlement.
#[account]
#[derive(InitSpace)]
pub struct StakingPool {
    pub total_staked: u64,

    // Monotonically non-decreasing, scaled by REWARD_PRECISION
    pub acc_reward_per_share: u128,

    // Token account holding staked principal
    pub vault: Pubkey,

    pub bump: u8,
}

impl StakingPool {
    // Fold a reward amount into the accumulator
    // Caller is responsible for the treasury-side earmark
    pub fn accrue(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, AurumError::InvalidAmount);
        require!(self.total_staked > 0, AurumError::NoStakers);

        let delta = (amount as u128)
            .checked_mul(REWARD_PRECISION)
            .ok_or(AurumError::Overflow)?
            .checked_div(self.total_staked as u128)
            .ok_or(AurumError::Overflow)?;
        self.acc_reward_per_share = self
            .acc_reward_per_share
            .checked_add(delta)
            .ok_or(AurumError::Overflow)?;
        Ok(())
    }
}

// Per-staker position
#[account]
#[derive(InitSpace)]
pub struct StakeAccount {
    pub owner: Pubkey,

    // Staked principal
    pub amount: u64,

    // Accumulator snapshot taken at the last position change
    pub reward_tally: u128,

    // Reward settled into the position but not yet paid out
    pub unclaimed: u64,

    pub bump: u8,
}

impl StakeAccount {
    // Reward earned since the last snapshot, excluding unclaimed
    fn accrued_since_snapshot(&self, acc_reward_per_share: u128) -> Result<u64> {
        let earned = (self.amount as u128)
            .checked_mul(acc_reward_per_share)
            .ok_or(AurumError::Overflow)?
            .checked_div(REWARD_PRECISION)
            .ok_or(AurumError::Overflow)?;
        let pending = earned
            .checked_sub(self.reward_tally)
            .ok_or(AurumError::Overflow)?;
        u64::try_from(pending).map_err(|_| error!(AurumError::Overflow))
    }

    // Fold accrued reward into unclaimed and re-snapshot at the new amount
    pub fn settle(&mut self, acc_reward_per_share: u128, new_amount: u64) -> Result<()> {
        let accrued = self.accrued_since_snapshot(acc_reward_per_share)?;
        self.unclaimed = self
            .unclaimed
            .checked_add(accrued)
            .ok_or(AurumError::Overflow)?;
        self.amount = new_amount;
        self.reward_tally = (new_amount as u128)
            .checked_mul(acc_reward_per_share)
            .ok_or(AurumError::Overflow)?
            .checked_div(REWARD_PRECISION)
            .ok_or(AurumError::Overflow)?;
        Ok(())
    }

    // Total reward owed to the position right now
    pub fn pending_reward(&self, acc_reward_per_share: u128) -> Result<u64> {
        let accrued = self.accrued_since_snapshot(acc_reward_per_share)?;
        self.unclaimed
            .checked_add(accrued)
            .ok_or(error!(AurumError::Overflow))
    }
}
