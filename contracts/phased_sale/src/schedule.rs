use crate::errors::Error;
use crate::types::{Amount18, Amount6, Phase, Timestamp};
use soroban_sdk::Vec;

/// Ordered pricing tiers. Only constructed through [`PhaseSchedule::validate`]
/// and never mutated afterwards.
#[derive(Clone)]
pub struct PhaseSchedule {
    phases: Vec<Phase>,
}

impl PhaseSchedule {
    pub fn validate(phases: Vec<Phase>) -> Result<Self, Error> {
        if phases.is_empty() {
            return Err(Error::EmptySchedule);
        }

        let mut previous: Option<Phase> = None;
        for phase in phases.iter() {
            if phase.unit_price == 0 {
                return Err(Error::ZeroPrice);
            }
            if let Some(prev) = previous {
                if phase.cumulative_cap < prev.cumulative_cap {
                    return Err(Error::NonMonotonicCap);
                }
                if phase.deadline < prev.deadline {
                    return Err(Error::NonMonotonicDeadline);
                }
            }
            previous = Some(phase);
        }

        Ok(Self { phases })
    }

    pub fn len(&self) -> u32 {
        self.phases.len()
    }

    pub fn last_index(&self) -> u32 {
        // validate() rejects empty schedules
        self.len() - 1
    }

    pub fn get(&self, index: u32) -> Option<Phase> {
        self.phases.get(index)
    }

    pub fn phase_at(&self, index: u32) -> Result<Phase, Error> {
        self.get(index).ok_or(Error::IndexOutOfRange)
    }

    pub fn price_at(&self, index: u32) -> Result<Amount6, Error> {
        Ok(self.phase_at(index)?.unit_price)
    }

    pub fn cap_at(&self, index: u32) -> Result<Amount18, Error> {
        Ok(self.phase_at(index)?.cumulative_cap)
    }

    pub fn deadline_at(&self, index: u32) -> Result<Timestamp, Error> {
        Ok(self.phase_at(index)?.deadline)
    }

    pub fn phases(&self) -> Vec<Phase> {
        self.phases.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{vec, Env};

    fn phase(cap: u128, price: u128, deadline: u64) -> Phase {
        Phase {
            cumulative_cap: cap,
            unit_price: price,
            deadline,
        }
    }

    #[test]
    fn test_validate_accepts_ordered_schedule() {
        let env = Env::default();
        let schedule = PhaseSchedule::validate(vec![
            &env,
            phase(1_000, 1_000_000, 100),
            phase(2_000, 2_000_000, 200),
            phase(2_000, 3_000_000, 200),
        ])
        .unwrap();

        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.last_index(), 2);
        assert_eq!(schedule.price_at(1), Ok(2_000_000));
        assert_eq!(schedule.cap_at(2), Ok(2_000));
        assert_eq!(schedule.deadline_at(0), Ok(100));
    }

    #[test]
    fn test_validate_rejects_empty_schedule() {
        let env = Env::default();
        let result = PhaseSchedule::validate(Vec::new(&env));
        assert_eq!(result.err(), Some(Error::EmptySchedule));
    }

    #[test]
    fn test_validate_rejects_decreasing_cap() {
        let env = Env::default();
        let result = PhaseSchedule::validate(vec![
            &env,
            phase(2_000, 1_000_000, 100),
            phase(1_000, 2_000_000, 200),
        ]);
        assert_eq!(result.err(), Some(Error::NonMonotonicCap));
    }

    #[test]
    fn test_validate_rejects_decreasing_deadline() {
        let env = Env::default();
        let result = PhaseSchedule::validate(vec![
            &env,
            phase(1_000, 1_000_000, 200),
            phase(2_000, 2_000_000, 100),
        ]);
        assert_eq!(result.err(), Some(Error::NonMonotonicDeadline));
    }

    #[test]
    fn test_validate_rejects_zero_price() {
        let env = Env::default();
        let result = PhaseSchedule::validate(vec![
            &env,
            phase(1_000, 1_000_000, 100),
            phase(2_000, 0, 200),
        ]);
        assert_eq!(result.err(), Some(Error::ZeroPrice));
    }

    #[test]
    fn test_accessors_are_bounds_checked() {
        let env = Env::default();
        let schedule = PhaseSchedule::validate(vec![&env, phase(1_000, 1_000_000, 100)]).unwrap();

        assert_eq!(schedule.price_at(1), Err(Error::IndexOutOfRange));
        assert_eq!(schedule.cap_at(5), Err(Error::IndexOutOfRange));
        assert_eq!(schedule.deadline_at(u32::MAX), Err(Error::IndexOutOfRange));
    }
}
