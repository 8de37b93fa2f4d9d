pub mod accrue;
pub mod approve;
pub mod deposit;
pub mod execute;
pub mod initialize;
pub mod propose;
pub mod propose_withdrawal;
pub mod release_vested;
pub mod stake;
pub mod submit_attestation;
pub mod transfer_hook;
pub mod unstake;

pub use accrue::*;
pub use approve::*;
pub use deposit::*;
pub use execute::*;
pub use initialize::*;
pub use propose::*;
pub use propose_withdrawal::*;
pub use release_vested::*;
pub use stake::*;
pub use submit_attestation::*;
pub use transfer_hook::*;
pub use unstake::*;
