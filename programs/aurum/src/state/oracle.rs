use anchor_lang::prelude::*;

use crate::constants::MAX_ORACLES;
use crate::errors::AurumError;

// One oracle's latest report
// observed_at == 0 means the slot has never attested
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, InitSpace)]
pub struct Attestation {
    pub value: u64,
    pub observed_at: i64,
}

// Oracle consensus gate
//
// Keeps the latest attestation per registered oracle (the bounded
// recent-attestation window) and derives an agreed value only when a
// quorum of fresh attestations sit within the tolerance band. In bypass
// mode the first registered oracle is trusted directly; the flag changes
// the trust model, not the interface.
#[account]
#[derive(InitSpace)]
pub struct OracleState {
    pub oracles: [Pubkey; MAX_ORACLES],
    pub oracle_count: u8,

    pub attestations: [Attestation; MAX_ORACLES],

    // Attestations agree when all values lie within this band of their minimum
    pub tolerance_bps: u16,

    // Attestations older than this are ignored
    pub freshness_secs: i64,

    pub bump: u8,
}

impl OracleState {
    pub fn oracle_index(&self, key: &Pubkey) -> Option<usize> {
        self.oracles
            .iter()
            .take(self.oracle_count as usize)
            .position(|oracle| oracle == key)
    }

    pub fn register(&mut self, oracle: Pubkey) -> Result<()> {
        require!(oracle != Pubkey::default(), AurumError::UnauthorizedOracle);
        require!(self.oracle_index(&oracle).is_none(), AurumError::DuplicateOracle);
        require!(
            (self.oracle_count as usize) < MAX_ORACLES,
            AurumError::OracleSetFull
        );
        self.oracles[self.oracle_count as usize] = oracle;
        self.oracle_count += 1;
        Ok(())
    }

    // Overwrite one oracle's slot in the window
    //
    // The report timestamp is caller-supplied but checked against the
    // ledger clock for freshness, and against the previous report so the
    // window only moves forward.
    pub fn record(&mut self, index: usize, value: u64, observed_at: i64, now: i64) -> Result<()> {
        require!(
            observed_at <= now && now - observed_at <= self.freshness_secs,
            AurumError::StaleAttestation
        );
        require!(
            observed_at >= self.attestations[index].observed_at,
            AurumError::StaleAttestation
        );
        self.attestations[index] = Attestation { value, observed_at };
        Ok(())
    }

    // Quorum of agreeing oracles required in consensus mode
    pub fn oracle_quorum(&self) -> usize {
        self.oracle_count as usize / 2 + 1
    }

    // Derive the agreed value as of `now`
    //
    // Bypass mode trusts the first registered oracle's latest fresh
    // attestation. Consensus mode needs at least oracle_quorum() fresh
    // attestations whose values all sit within tolerance_bps of the
    // smallest of the agreeing set, and returns their median.
    pub fn consensus(&self, now: i64, bypass: bool) -> Result<u64> {
        require!(self.oracle_count > 0, AurumError::ConsensusNotReached);

        if bypass {
            let latest = &self.attestations[0];
            require!(
                latest.observed_at != 0 && now - latest.observed_at <= self.freshness_secs,
                AurumError::ConsensusNotReached
            );
            return Ok(latest.value);
        }

        let mut fresh: Vec<u64> = self
            .attestations
            .iter()
            .take(self.oracle_count as usize)
            .filter(|a| a.observed_at != 0 && now - a.observed_at <= self.freshness_secs)
            .map(|a| a.value)
            .collect();
        fresh.sort_unstable();

        let quorum = self.oracle_quorum();
        require!(fresh.len() >= quorum, AurumError::ConsensusNotReached);

        // Largest run of sorted values within tolerance of its minimum
        let mut best: Option<(usize, usize)> = None;
        for start in 0..fresh.len() {
            let band = (fresh[start] as u128 * self.tolerance_bps as u128 / 10_000) as u64;
            let mut end = start;
            while end + 1 < fresh.len() && fresh[end + 1] - fresh[start] <= band {
                end += 1;
            }
            let len = end - start + 1;
            if best.map_or(true, |(s, e)| len > e - s + 1) {
                best = Some((start, end));
            }
        }

        match best {
            Some((start, end)) if end - start + 1 >= quorum => {
                Ok(fresh[start + (end - start) / 2])
            }
            _ => err!(AurumError::ConsensusNotReached),
        }
    }
}
