// Test utilities for the aurum token-governance program

use litesvm::LiteSVM;
use solana_sdk::{
    account::Account,
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use solana_system_interface::program::ID as system_program;

// Program ID matching declare_id!
pub const AURUM_PROGRAM_ID: Pubkey = Pubkey::new_from_array(aurum::ID.to_bytes());

// Token-2022 program, preloaded by LiteSVM
pub const TOKEN_2022_PROGRAM_ID: Pubkey =
    Pubkey::new_from_array(anchor_spl::token_2022::ID.to_bytes());

// PDA Seeds (must match constants.rs)
pub const CONFIG: &[u8] = b"config";
pub const STAKING_POOL: &[u8] = b"staking_pool";
pub const TREASURY: &[u8] = b"treasury";
pub const ORACLE: &[u8] = b"oracle";
pub const PROPOSAL: &[u8] = b"proposal";
pub const SUPPLY_VAULT: &[u8] = b"supply_vault";
pub const TEAM_RESERVE: &[u8] = b"team_reserve";
pub const POOL_VAULT: &[u8] = b"pool_vault";
pub const TREASURY_VAULT: &[u8] = b"treasury_vault";

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

// Setup LiteSVM with the aurum program
//
// The SBF artifact is produced by `cargo build-sbf`; when it is absent
// (plain host `cargo test`) the integration tests skip with a notice and
// the unit tests in src/ carry the logic coverage.
pub fn setup_svm() -> Option<LiteSVM> {
    let so_path =
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../target/deploy/aurum.so");
    let program_bytes = std::fs::read(&so_path).ok()?;
    let mut svm = LiteSVM::new();
    svm.add_program(AURUM_PROGRAM_ID, &program_bytes);
    Some(svm)
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Write a Token-2022 account straight into the SVM. The program only ever
// mints into its own vaults, so tests fabricate user balances this way.
pub fn create_token_account(
    svm: &mut LiteSVM,
    mint: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Pubkey {
    let address = Pubkey::new_unique();
    // SPL base account layout: mint, owner, amount, delegate COption,
    // state, is_native COption, delegated_amount, close_authority COption
    let mut data = vec![0u8; 165];
    data[0..32].copy_from_slice(mint.as_ref());
    data[32..64].copy_from_slice(owner.as_ref());
    data[64..72].copy_from_slice(&amount.to_le_bytes());
    data[108] = 1; // AccountState::Initialized
    svm.set_account(
        address,
        Account {
            lamports: 2_039_280,
            data,
            owner: TOKEN_2022_PROGRAM_ID,
            executable: false,
            rent_epoch: 0,
        },
    )
    .expect("set_account should succeed");
    address
}

// Read the amount field of a token account
pub fn token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    let account = svm
        .get_account(token_account)
        .expect("Token account should exist");
    u64::from_le_bytes(account.data[64..72].try_into().unwrap())
}

// ======================== PDA DERIVATION ========================

pub fn derive_config_pda(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG, authority.as_ref()], &AURUM_PROGRAM_ID)
}

pub fn derive_staking_pool_pda(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAKING_POOL, authority.as_ref()], &AURUM_PROGRAM_ID)
}

pub fn derive_treasury_pda(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY, authority.as_ref()], &AURUM_PROGRAM_ID)
}

pub fn derive_oracle_pda(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ORACLE, authority.as_ref()], &AURUM_PROGRAM_ID)
}

pub fn derive_proposal_pda(config: &Pubkey, proposal_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PROPOSAL, config.as_ref(), &proposal_id.to_le_bytes()],
        &AURUM_PROGRAM_ID,
    )
}

pub fn derive_vault_pda(label: &[u8], config: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[label, config.as_ref()], &AURUM_PROGRAM_ID)
}

// ======================== INSTRUCTION BUILDERS ========================

// Build initialize instruction
// Account order must match the Initialize context
pub fn build_initialize_ix(
    authority: &Pubkey,
    mint: &Pubkey,
    total_supply: u64,
    team_vest_end: i64,
    multi_oracle_consensus: bool,
    multisig_signers: &[Pubkey],
) -> Instruction {
    let (config, _) = derive_config_pda(authority);
    let (staking_pool, _) = derive_staking_pool_pda(authority);
    let (treasury, _) = derive_treasury_pda(authority);
    let (oracle_state, _) = derive_oracle_pda(authority);
    let (supply_vault, _) = derive_vault_pda(SUPPLY_VAULT, &config);
    let (team_reserve, _) = derive_vault_pda(TEAM_RESERVE, &config);
    let (pool_vault, _) = derive_vault_pda(POOL_VAULT, &config);
    let (treasury_vault, _) = derive_vault_pda(TREASURY_VAULT, &config);

    let mut data = anchor_discriminator("initialize").to_vec();
    data.extend_from_slice(&total_supply.to_le_bytes());
    data.extend_from_slice(&team_vest_end.to_le_bytes());
    data.push(multi_oracle_consensus as u8);
    data.extend_from_slice(&(multisig_signers.len() as u32).to_le_bytes());
    for signer in multisig_signers {
        data.extend_from_slice(signer.as_ref());
    }

    Instruction {
        program_id: AURUM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(config, false),
            AccountMeta::new(staking_pool, false),
            AccountMeta::new(treasury, false),
            AccountMeta::new(oracle_state, false),
            AccountMeta::new(*mint, true),
            AccountMeta::new(supply_vault, false),
            AccountMeta::new(team_reserve, false),
            AccountMeta::new(pool_vault, false),
            AccountMeta::new(treasury_vault, false),
            AccountMeta::new_readonly(TOKEN_2022_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// GovAction wire encoding (borsh enum index + payload)
pub fn encode_set_pause(paused: bool) -> Vec<u8> {
    vec![1, paused as u8]
}

pub fn encode_register_oracle(oracle: &Pubkey) -> Vec<u8> {
    let mut data = vec![3];
    data.extend_from_slice(oracle.as_ref());
    data
}

pub fn encode_update_signers(signers: &[Pubkey], quorum_threshold: u8) -> Vec<u8> {
    let mut data = vec![2];
    for slot in 0..10 {
        let key = signers.get(slot).copied().unwrap_or_default();
        data.extend_from_slice(key.as_ref());
    }
    data.push(signers.len() as u8);
    data.push(quorum_threshold);
    data
}

pub fn encode_accrue_rewards(amount: u64) -> Vec<u8> {
    let mut data = vec![4];
    data.extend_from_slice(&amount.to_le_bytes());
    data
}

// Build propose instruction; proposal ids are sequential, tests track
// them themselves
pub fn build_propose_ix(
    proposer: &Pubkey,
    authority: &Pubkey,
    action: &[u8],
    proposal_id: u64,
) -> Instruction {
    let (config, _) = derive_config_pda(authority);
    let (proposal, _) = derive_proposal_pda(&config, proposal_id);

    let mut data = anchor_discriminator("propose").to_vec();
    data.extend_from_slice(action);

    Instruction {
        program_id: AURUM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*proposer, true),
            AccountMeta::new_readonly(*authority, false),
            AccountMeta::new(config, false),
            AccountMeta::new(proposal, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build propose_withdrawal instruction
pub fn build_propose_withdrawal_ix(
    proposer: &Pubkey,
    authority: &Pubkey,
    amount: u64,
    recipient: &Pubkey,
    proposal_id: u64,
) -> Instruction {
    let (config, _) = derive_config_pda(authority);
    let (proposal, _) = derive_proposal_pda(&config, proposal_id);

    let mut data = anchor_discriminator("propose_withdrawal").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());
    data.extend_from_slice(recipient.as_ref());

    Instruction {
        program_id: AURUM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*proposer, true),
            AccountMeta::new_readonly(*authority, false),
            AccountMeta::new(config, false),
            AccountMeta::new(proposal, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build approve instruction
pub fn build_approve_ix(signer: &Pubkey, authority: &Pubkey, proposal_id: u64) -> Instruction {
    let (config, _) = derive_config_pda(authority);
    let (proposal, _) = derive_proposal_pda(&config, proposal_id);

    Instruction {
        program_id: AURUM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*signer, true),
            AccountMeta::new_readonly(*authority, false),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(proposal, false),
        ],
        data: anchor_discriminator("approve").to_vec(),
    }
}

// Build execute instruction
// recipient_token_account = None is signalled with the program's own ID
// (Anchor optional-account convention)
pub fn build_execute_ix(
    executor: &Pubkey,
    authority: &Pubkey,
    proposal_id: u64,
    mint: &Pubkey,
    recipient_token_account: Option<Pubkey>,
) -> Instruction {
    let (config, _) = derive_config_pda(authority);
    let (staking_pool, _) = derive_staking_pool_pda(authority);
    let (treasury, _) = derive_treasury_pda(authority);
    let (oracle_state, _) = derive_oracle_pda(authority);
    let (proposal, _) = derive_proposal_pda(&config, proposal_id);
    let (treasury_vault, _) = derive_vault_pda(TREASURY_VAULT, &config);

    let recipient_meta = match recipient_token_account {
        Some(key) => AccountMeta::new(key, false),
        None => AccountMeta::new_readonly(AURUM_PROGRAM_ID, false),
    };

    Instruction {
        program_id: AURUM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*executor, true),
            AccountMeta::new_readonly(*authority, false),
            AccountMeta::new(config, false),
            AccountMeta::new(proposal, false),
            AccountMeta::new(staking_pool, false),
            AccountMeta::new(treasury, false),
            AccountMeta::new(oracle_state, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(treasury_vault, false),
            recipient_meta,
            AccountMeta::new_readonly(TOKEN_2022_PROGRAM_ID, false),
        ],
        data: anchor_discriminator("execute").to_vec(),
    }
}

// Build submit_attestation instruction
pub fn build_submit_attestation_ix(
    oracle: &Pubkey,
    authority: &Pubkey,
    value: u64,
    observed_at: i64,
) -> Instruction {
    let (config, _) = derive_config_pda(authority);
    let (oracle_state, _) = derive_oracle_pda(authority);

    let mut data = anchor_discriminator("submit_attestation").to_vec();
    data.extend_from_slice(&value.to_le_bytes());
    data.extend_from_slice(&observed_at.to_le_bytes());

    Instruction {
        program_id: AURUM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*oracle, true),
            AccountMeta::new_readonly(*authority, false),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(oracle_state, false),
        ],
        data,
    }
}

// Build release_vested instruction
pub fn build_release_vested_ix(caller: &Pubkey, authority: &Pubkey) -> Instruction {
    let (config, _) = derive_config_pda(authority);

    Instruction {
        program_id: AURUM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*caller, true),
            AccountMeta::new_readonly(*authority, false),
            AccountMeta::new(config, false),
        ],
        data: anchor_discriminator("release_vested").to_vec(),
    }
}

// Build transfer_hook instruction (called directly in tests; on a live
// cluster the token runtime invokes it through the fallback routing).
// Account order follows the transfer-hook interface: source, mint,
// destination, owner, extra-account-metas, then the state PDAs.
pub fn build_transfer_hook_ix(
    authority: &Pubkey,
    mint: &Pubkey,
    source_token: &Pubkey,
    destination_token: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Instruction {
    let (config, _) = derive_config_pda(authority);
    let (staking_pool, _) = derive_staking_pool_pda(authority);
    let (treasury, _) = derive_treasury_pda(authority);
    let (extra_account_meta_list, _) = Pubkey::find_program_address(
        &[b"extra-account-metas", mint.as_ref()],
        &AURUM_PROGRAM_ID,
    );

    let mut data = anchor_discriminator("transfer_hook").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: AURUM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*source_token, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(*destination_token, false),
            AccountMeta::new_readonly(*owner, false),
            AccountMeta::new_readonly(extra_account_meta_list, false),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new_readonly(staking_pool, false),
            AccountMeta::new_readonly(treasury, false),
        ],
        data,
    }
}

// Build deposit instruction
pub fn build_deposit_ix(
    depositor: &Pubkey,
    authority: &Pubkey,
    mint: &Pubkey,
    depositor_token_account: &Pubkey,
    amount: u64,
) -> Instruction {
    let (config, _) = derive_config_pda(authority);
    let (treasury, _) = derive_treasury_pda(authority);
    let (treasury_vault, _) = derive_vault_pda(TREASURY_VAULT, &config);

    let mut data = anchor_discriminator("deposit").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: AURUM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*depositor, true),
            AccountMeta::new_readonly(*authority, false),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(treasury, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(*depositor_token_account, false),
            AccountMeta::new(treasury_vault, false),
            AccountMeta::new_readonly(TOKEN_2022_PROGRAM_ID, false),
        ],
        data,
    }
}

// ======================== STATE DECODING ========================

// Decoded view of the Config account (fields in declaration order after
// the 8-byte discriminator)
pub struct ParsedConfig {
    pub total_supply: u64,
    pub team_vest_end: i64,
    pub team_allocation: u64,
    pub released_amount: u64,
    pub multi_oracle_consensus: bool,
    pub paused: bool,
    pub signer_count: u8,
    pub quorum_threshold: u8,
    pub signer_set_epoch: u64,
}

pub fn parse_config(data: &[u8]) -> ParsedConfig {
    let u64_at = |offset: usize| u64::from_le_bytes(data[offset..offset + 8].try_into().unwrap());
    ParsedConfig {
        // 8 disc + 32 authority + 32 mint
        total_supply: u64_at(72),
        team_vest_end: u64_at(80) as i64,
        team_allocation: u64_at(88),
        released_amount: u64_at(96),
        // + 32 team_reserve + 32 supply_vault
        multi_oracle_consensus: data[168] != 0,
        paused: data[169] != 0,
        // + 320 multisig_signers
        signer_count: data[490],
        quorum_threshold: data[491],
        signer_set_epoch: u64_at(492),
    }
}
