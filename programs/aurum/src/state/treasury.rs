use anchor_lang::prelude::*;

use crate::errors::AurumError;

// Protocol-owned funds under multisig custody
//
// balance mirrors the treasury vault token amount. reward_allocated is the
// slice of balance earmarked for staking rewards by accruals; withdrawals
// can only spend the unallocated remainder.
#[account]
#[derive(InitSpace)]
pub struct Treasury {
    pub balance: u64,

    // Invariant: reward_allocated <= balance
    pub reward_allocated: u64,

    // Token account holding the funds
    pub vault: Pubkey,

    pub bump: u8,
}

impl Treasury {
    // Balance not earmarked for rewards
    pub fn available(&self) -> Result<u64> {
        self.balance
            .checked_sub(self.reward_allocated)
            .ok_or(error!(AurumError::Overflow))
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AurumError::Overflow)?;
        Ok(())
    }

    // Earmark part of the unallocated balance for staking rewards
    pub fn allocate_rewards(&mut self, amount: u64) -> Result<()> {
        require!(
            amount <= self.available()?,
            AurumError::TreasuryInsufficientForRewards
        );
        self.reward_allocated = self
            .reward_allocated
            .checked_add(amount)
            .ok_or(AurumError::Overflow)?;
        Ok(())
    }

    // Pay out earmarked rewards
    pub fn pay_rewards(&mut self, amount: u64) -> Result<()> {
        require!(
            amount <= self.reward_allocated,
            AurumError::TreasuryInsufficientForRewards
        );
        self.reward_allocated -= amount;
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(AurumError::Overflow)?;
        Ok(())
    }

    // Spend unallocated balance, re-checked at execution time
    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.available()?, AurumError::InsufficientBalance);
        self.balance -= amount;
        Ok(())
    }
}
