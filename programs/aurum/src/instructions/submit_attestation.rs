use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

// Submit Attestation Instruction
//
// A registered oracle reports an observed value. The report timestamp is
// validated against the ledger clock, never trusted as "now", and must
// not move the oracle's window backwards.

#[derive(Accounts)]
pub struct SubmitAttestation<'info> {
    pub oracle: Signer<'info>,

    /// CHECK: identity the config PDA is derived from
    pub authority: UncheckedAccount<'info>,

    #[account(
        seeds = [CONFIG, authority.key().as_ref()],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [ORACLE, authority.key().as_ref()],
        bump = oracle_state.bump,
    )]
    pub oracle_state: Account<'info, OracleState>,
}

impl<'info> SubmitAttestation<'info> {
    pub fn submit_attestation(&mut self, value: u64, observed_at: i64) -> Result<()> {
        let index = self
            .oracle_state
            .oracle_index(&self.oracle.key())
            .ok_or(AurumError::UnauthorizedOracle)?;

        let clock = Clock::get()?;
        self.oracle_state
            .record(index, value, observed_at, clock.unix_timestamp)?;

        msg!("Oracle {} attested {}", self.oracle.key(), value);
        Ok(())
    }
}
