pub mod contract;
pub mod error;
pub mod ledger;
pub mod migration;
pub mod msg;
pub mod state;
pub mod utils;
