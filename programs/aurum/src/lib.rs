use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_error::ProgramError;
use spl_transfer_hook_interface::instruction::TransferHookInstruction;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use errors::*;
pub use instructions::*;
pub use state::*;

declare_id!("GkAAPmKrVx4HxnCxey25zJDUfrxcBnJqiCtQ6y568cn");

#[program]
pub mod aurum {
    use super::*;

    // Create the full program state for a mint in one atomic transaction:
    // config, staking pool, treasury, oracle gate, the Token-2022 mint and
    // its vaults. Callable exactly once per authority.
    pub fn initialize(ctx: Context<Initialize>, params: InitParams) -> Result<()> {
        ctx.accounts.initialize(params, &ctx.bumps)
    }

    // Open a governance proposal (pause, signer-set change, oracle
    // registration, reward accrual). Proposer must be a configured signer
    // and auto-approves.
    pub fn propose(ctx: Context<Propose>, action: GovAction) -> Result<()> {
        ctx.accounts.propose(action, &ctx.bumps)
    }

    // Open a treasury-withdrawal proposal. Balance is re-checked at
    // execution time, not here.
    pub fn propose_withdrawal(
        ctx: Context<ProposeWithdrawal>,
        amount: u64,
        recipient: Pubkey,
    ) -> Result<()> {
        ctx.accounts.propose_withdrawal(amount, recipient, &ctx.bumps)
    }

    // Add one signer's approval to an active proposal. Idempotent per
    // signer via the approval bitmap.
    pub fn approve(ctx: Context<Approve>) -> Result<()> {
        ctx.accounts.approve()
    }

    // Apply an approved proposal's action once quorum is reached.
    // Executes at most once.
    pub fn execute(ctx: Context<Execute>) -> Result<()> {
        ctx.accounts.execute()
    }

    // Record a registered oracle's observation in the attestation window.
    pub fn submit_attestation(
        ctx: Context<SubmitAttestation>,
        value: u64,
        observed_at: i64,
    ) -> Result<()> {
        ctx.accounts.submit_attestation(value, observed_at)
    }

    // Unlock the team allocation once the vesting cliff has passed.
    pub fn release_vested(ctx: Context<ReleaseVested>) -> Result<()> {
        ctx.accounts.release_vested()
    }

    // Permissionless treasury top-up.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        ctx.accounts.deposit(amount)
    }

    // Stake tokens into the pool.
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        ctx.accounts.stake(amount, &ctx.bumps)
    }

    // Withdraw staked principal plus accrued rewards.
    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        ctx.accounts.unstake(amount)
    }

    // Distribute rewards to the pool, co-signed by a quorum of multisig
    // signers in this same transaction (passed as remaining accounts).
    pub fn accrue<'info>(
        ctx: Context<'_, '_, 'info, 'info, Accrue<'info>>,
        amount: u64,
    ) -> Result<()> {
        instructions::accrue::handler(ctx, amount)
    }

    // Invoked by the token runtime on every transfer of the mint.
    // Allow/deny only; never moves funds.
    pub fn transfer_hook(ctx: Context<TransferHook>, amount: u64) -> Result<()> {
        ctx.accounts.transfer_hook(amount)
    }

    // Fallback for the SPL transfer-hook interface: the Token-2022 runtime
    // invokes the hook through an interface discriminator rather than the
    // Anchor one. Execute routes into the transfer_hook handler; anything
    // else is refused.
    pub fn fallback<'info>(
        program_id: &Pubkey,
        accounts: &'info [AccountInfo<'info>],
        data: &[u8],
    ) -> Result<()> {
        let instruction = TransferHookInstruction::unpack(data)?;
        match instruction {
            TransferHookInstruction::Execute { amount } => {
                let amount_bytes = amount.to_le_bytes();
                __private::__global::transfer_hook(program_id, accounts, &amount_bytes)
            }
            _ => Err(ProgramError::InvalidInstructionData.into()),
        }
    }
}
