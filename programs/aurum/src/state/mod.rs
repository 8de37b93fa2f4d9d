pub mod config;
pub mod oracle;
pub mod proposal;
pub mod staking;
pub mod treasury;

pub use config::*;
pub use oracle::*;
pub use proposal::*;
pub use staking::*;
pub use treasury::*;
