use crate::errors::Error;
use crate::ledger::SaleState;
use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

const DAY_IN_LEDGERS: u32 = 17_280;
const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const LIFETIME_THRESHOLD: u32 = BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_funds_receiver(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::FundsReceiver)
}

pub fn set_funds_receiver(env: &Env, receiver: &Option<Address>) {
    match receiver {
        Some(addr) => env.storage().instance().set(&DataKey::FundsReceiver, addr),
        None => env.storage().instance().remove(&DataKey::FundsReceiver),
    }
}

pub fn get_phases(env: &Env) -> Result<Vec<Phase>, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Phases)
        .ok_or(Error::NotInitialized)
}

pub fn set_phases(env: &Env, phases: &Vec<Phase>) {
    env.storage().instance().set(&DataKey::Phases, phases);
}

pub fn get_state(env: &Env) -> Result<SaleState, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::State)
        .ok_or(Error::NotInitialized)
}

pub fn set_state(env: &Env, state: &SaleState) {
    env.storage().persistent().set(&DataKey::State, state);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::State, LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

pub fn get_balance(env: &Env, participant: &Address) -> Amount18 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(participant.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, participant: &Address, balance: Amount18) {
    let key = DataKey::Balance(participant.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }
}

pub fn is_blacklisted(env: &Env, participant: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Blacklisted(participant.clone()))
        .unwrap_or(false)
}

pub fn set_blacklisted(env: &Env, participant: &Address, blocked: bool) {
    let key = DataKey::Blacklisted(participant.clone());
    if blocked {
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    } else {
        env.storage().persistent().remove(&key);
    }
}
