use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::{constants::*, errors::*, state::*};

// Deposit Instruction
//
// Permissionless treasury top-up (fee capture, donations). Always
// succeeds for a non-zero amount the depositor actually holds.

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    /// CHECK: identity the config PDA is derived from
    pub authority: UncheckedAccount<'info>,

    #[account(
        seeds = [CONFIG, authority.key().as_ref()],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [TREASURY, authority.key().as_ref()],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(address = config.mint)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub depositor_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        address = treasury.vault,
    )]
    pub treasury_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> Deposit<'info> {
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, AurumError::InvalidAmount);

        transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.depositor_token_account.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: self.treasury_vault.to_account_info(),
                    authority: self.depositor.to_account_info(),
                },
            ),
            amount,
            self.mint.decimals,
        )?;

        self.treasury.record_deposit(amount)?;

        msg!("Treasury deposit of {}", amount);
        Ok(())
    }
}
