#![no_std]

mod access;
mod contract;
mod errors;
mod events;
mod ledger;
mod math;
mod schedule;
mod storage;
mod types;


pub use contract::{PhasedSaleContract, PhasedSaleContractClient};
pub use errors::{Error, ErrorCategory, ErrorInfo};
pub use events::{PurchaseEvent, ReceiverChangedEvent, WithdrawalEvent};
pub use ledger::{PhaseShift, SaleState};
pub use math::{TOKEN_DECIMALS, TOKEN_UNIT};
pub use types::{Amount18, Amount6, Phase, Receipt, SaleConfig, SaleWindow, Timestamp};
