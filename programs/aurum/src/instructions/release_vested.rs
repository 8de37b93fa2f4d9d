use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

// Release Vested Instruction
//
// Single-cliff model: once the ledger clock reaches team_vest_end, the
// full team allocation unlocks in one step. No tokens move here; the
// transfer hook compares outgoing team-reserve transfers against
// released_amount, so flipping the budget is the release.
//
// Permissionless: the cliff is a pure function of time. A second call
// fails AlreadyReleased without touching state.

#[derive(Accounts)]
pub struct ReleaseVested<'info> {
    pub caller: Signer<'info>,

    /// CHECK: identity the config PDA is derived from
    pub authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [CONFIG, authority.key().as_ref()],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> ReleaseVested<'info> {
    pub fn release_vested(&mut self) -> Result<()> {
        let clock = Clock::get()?;
        require!(
            clock.unix_timestamp >= self.config.team_vest_end,
            AurumError::VestingNotReached
        );
        require!(self.config.released_amount == 0, AurumError::AlreadyReleased);

        self.config.released_amount = self.config.team_allocation;

        msg!(
            "Team allocation of {} released at {}",
            self.config.team_allocation,
            clock.unix_timestamp
        );
        Ok(())
    }
}
