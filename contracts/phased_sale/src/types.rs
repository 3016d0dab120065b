use soroban_sdk::{contracttype, Address};

/// Amount of a payment instrument, 6 decimals.
pub type Amount6 = u128;

/// Amount of the sold asset, 18 decimals.
pub type Amount18 = u128;

/// Ledger timestamp in seconds.
pub type Timestamp = u64;

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Phase {
    pub cumulative_cap: Amount18, // total sold at which this phase is exhausted
    pub unit_price: Amount6,      // price of one whole sold-asset unit
    pub deadline: Timestamp,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleWindow {
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}

impl SaleWindow {
    pub fn is_valid(&self) -> bool {
        self.end_time > self.start_time
    }
}

/// Construction-time settings, immutable for the lifetime of the sale.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub first_instrument: Address,
    pub second_instrument: Address,
    pub native_asset: Address, // recovered by withdraw_native
    pub max_selling_amount: Amount18,
    pub window: SaleWindow,
}

impl SaleConfig {
    pub fn accepts(&self, instrument: &Address) -> bool {
        *instrument == self.first_instrument || *instrument == self.second_instrument
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Receipt {
    pub participant: Address,
    pub instrument: Address,
    pub paid_amount: Amount6,
    pub token_amount: Amount18,
    pub phase: u32,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Owner,
    FundsReceiver,
    Phases,
    State,
    Balance(Address),
    Blacklisted(Address),
}
