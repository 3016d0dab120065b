use crate::errors::Error;
use crate::schedule::PhaseSchedule;
use crate::types::{Amount18, Timestamp};
use soroban_sdk::contracttype;

/// Sale-wide accounting. Only [`Ledger`] writes to it. Participant balances
/// live under their own storage keys so this entry stays the same size
/// however many participants buy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct SaleState {
    pub total_sold: Amount18,
    pub current_phase: u32,
}

/// Movement of the phase cursor produced by one `advance_phase` call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PhaseShift {
    pub from: u32,
    pub to: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CapExceeded;

impl From<CapExceeded> for Error {
    fn from(_: CapExceeded) -> Self {
        Error::SoldOut
    }
}

pub struct Ledger {
    schedule: PhaseSchedule,
    max_selling_amount: Amount18,
    state: SaleState,
}

impl Ledger {
    pub fn new(schedule: PhaseSchedule, max_selling_amount: Amount18, state: SaleState) -> Self {
        Self {
            schedule,
            max_selling_amount,
            state,
        }
    }

    pub fn state(&self) -> &SaleState {
        &self.state
    }

    pub fn current_phase(&self) -> u32 {
        self.state.current_phase
    }

    pub fn remaining(&self) -> Amount18 {
        self.max_selling_amount.saturating_sub(self.state.total_sold)
    }

    pub fn current_price(&self) -> Result<u128, Error> {
        self.schedule.price_at(self.state.current_phase)
    }

    /// Moves the cursor forward past every phase whose cap has been reached
    /// or whose deadline has passed. The last phase is terminal.
    pub fn advance_phase(&mut self, now: Timestamp) -> Option<PhaseShift> {
        let from = self.state.current_phase;
        let last = self.schedule.last_index();

        while self.state.current_phase < last {
            let index = self.state.current_phase;
            let (Ok(cap), Ok(deadline)) =
                (self.schedule.cap_at(index), self.schedule.deadline_at(index))
            else {
                break;
            };
            if self.state.total_sold < cap && now < deadline {
                break;
            }
            self.state.current_phase += 1;
        }

        let to = self.state.current_phase;
        (to != from).then_some(PhaseShift { from, to })
    }

    /// Adds `amount` to a participant whose stored balance is `balance` and
    /// returns the balance to store. The only path that increases
    /// `total_sold`; on failure nothing changes.
    pub fn credit(&mut self, balance: Amount18, amount: Amount18) -> Result<Amount18, CapExceeded> {
        let new_total = self
            .state
            .total_sold
            .checked_add(amount)
            .filter(|total| *total <= self.max_selling_amount)
            .ok_or(CapExceeded)?;
        let new_balance = balance.checked_add(amount).ok_or(CapExceeded)?;

        self.state.total_sold = new_total;
        Ok(new_balance)
    }
}
