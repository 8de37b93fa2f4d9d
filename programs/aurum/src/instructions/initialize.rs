use anchor_lang::prelude::*;
use anchor_spl::token_interface::{mint_to, Mint, MintTo, TokenAccount, TokenInterface};

use crate::{constants::*, errors::*, state::*};

// Initialize Instruction
//
// One-shot creation of the whole program state for a mint:
// - Config, StakingPool, Treasury and OracleState PDAs
// - the Token-2022 mint (authority = config PDA, so the program alone
//   controls issuance; no further mint path exists)
// - four PDA-owned token vaults
//
// The team share of the supply is minted into the team reserve, where the
// transfer hook locks it until release_vested unlocks the budget; the
// remainder goes to the supply vault. Nothing is minted to the caller.
//
// All preconditions are validated before any account state is written or
// any CPI is issued; a failed initialize leaves no partial state because
// the transaction reverts as a whole.

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct InitParams {
    pub total_supply: u64,
    pub team_vest_end: i64,
    pub multi_oracle_consensus: bool,
    pub multisig_signers: Vec<Pubkey>,
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Config::INIT_SPACE,
        seeds = [CONFIG, authority.key().as_ref()],
        bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + StakingPool::INIT_SPACE,
        seeds = [STAKING_POOL, authority.key().as_ref()],
        bump,
    )]
    pub staking_pool: Box<Account<'info, StakingPool>>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Treasury::INIT_SPACE,
        seeds = [TREASURY, authority.key().as_ref()],
        bump,
    )]
    pub treasury: Box<Account<'info, Treasury>>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + OracleState::INIT_SPACE,
        seeds = [ORACLE, authority.key().as_ref()],
        bump,
    )]
    pub oracle_state: Box<Account<'info, OracleState>>,

    #[account(
        init,
        payer = authority,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = config,
        mint::token_program = token_program,
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    // Circulating allocation at genesis
    #[account(
        init,
        payer = authority,
        token::mint = mint,
        token::authority = config,
        token::token_program = token_program,
        seeds = [SUPPLY_VAULT, config.key().as_ref()],
        bump,
    )]
    pub supply_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    // Team allocation, locked by the transfer hook until the cliff
    #[account(
        init,
        payer = authority,
        token::mint = mint,
        token::authority = config,
        token::token_program = token_program,
        seeds = [TEAM_RESERVE, config.key().as_ref()],
        bump,
    )]
    pub team_reserve: Box<InterfaceAccount<'info, TokenAccount>>,

    // Staked principal
    #[account(
        init,
        payer = authority,
        token::mint = mint,
        token::authority = staking_pool,
        token::token_program = token_program,
        seeds = [POOL_VAULT, config.key().as_ref()],
        bump,
    )]
    pub pool_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    // Treasury funds
    #[account(
        init,
        payer = authority,
        token::mint = mint,
        token::authority = treasury,
        token::token_program = token_program,
        seeds = [TREASURY_VAULT, config.key().as_ref()],
        bump,
    )]
    pub treasury_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, params: InitParams, bumps: &InitializeBumps) -> Result<()> {
        let clock = Clock::get()?;

        // 1. Supply Validation
        require!(params.total_supply > 0, AurumError::InvalidSupply);

        // 2. Vesting Window Validation
        // The cliff must be strictly in the future per the ledger clock
        require!(
            params.team_vest_end > clock.unix_timestamp,
            AurumError::InvalidVestingWindow
        );

        // 3. Signer Set Intake
        // Ordered-set semantics: duplicates collapse, quorum is a majority
        // of the deduplicated set
        let (multisig_signers, signer_count) =
            Config::sanitize_signers(&params.multisig_signers)?;
        let quorum_threshold = Config::majority_quorum(signer_count);

        // 4. Team Allocation Split
        let team_allocation = ((params.total_supply as u128 * TEAM_SHARE_BPS as u128)
            / BPS_DENOMINATOR as u128) as u64;
        let circulating = params
            .total_supply
            .checked_sub(team_allocation)
            .ok_or(AurumError::Overflow)?;

        // 5. Root State
        self.config.set_inner(Config {
            authority: self.authority.key(),
            mint: self.mint.key(),
            total_supply: params.total_supply,
            team_vest_end: params.team_vest_end,
            team_allocation,
            released_amount: 0,
            team_reserve: self.team_reserve.key(),
            supply_vault: self.supply_vault.key(),
            multi_oracle_consensus: params.multi_oracle_consensus,
            paused: false,
            multisig_signers,
            signer_count,
            quorum_threshold,
            signer_set_epoch: 0,
            proposal_count: 0,
            bump: bumps.config,
        });

        // 6. Component State
        self.staking_pool.set_inner(StakingPool {
            total_staked: 0,
            acc_reward_per_share: 0,
            vault: self.pool_vault.key(),
            bump: bumps.staking_pool,
        });

        self.treasury.set_inner(Treasury {
            balance: 0,
            reward_allocated: 0,
            vault: self.treasury_vault.key(),
            bump: bumps.treasury,
        });

        self.oracle_state.set_inner(OracleState {
            oracles: [Pubkey::default(); MAX_ORACLES],
            oracle_count: 0,
            attestations: [Attestation::default(); MAX_ORACLES],
            tolerance_bps: ORACLE_TOLERANCE_BPS,
            freshness_secs: ORACLE_FRESHNESS_SECS,
            bump: bumps.oracle_state,
        });

        // 7. Mint The Supply
        // Config PDA is the mint authority; issuance happens exactly once
        let authority_key = self.authority.key();
        let config_seeds: &[&[&[u8]]] =
            &[&[CONFIG, authority_key.as_ref(), &[bumps.config]]];

        if team_allocation > 0 {
            mint_to(
                CpiContext::new_with_signer(
                    self.token_program.to_account_info(),
                    MintTo {
                        mint: self.mint.to_account_info(),
                        to: self.team_reserve.to_account_info(),
                        authority: self.config.to_account_info(),
                    },
                    config_seeds,
                ),
                team_allocation,
            )?;
        }

        mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.mint.to_account_info(),
                    to: self.supply_vault.to_account_info(),
                    authority: self.config.to_account_info(),
                },
                config_seeds,
            ),
            circulating,
        )?;

        msg!(
            "Initialized: supply {} minted, {} reserved for team until {}",
            params.total_supply,
            team_allocation,
            params.team_vest_end
        );
        Ok(())
    }
}
