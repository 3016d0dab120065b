use crate::ledger::PhaseShift;
use crate::types::{Amount18, Amount6, Receipt, SaleConfig};
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

pub const INIT: Symbol = symbol_short!("INIT");
pub const PURCHASE: Symbol = symbol_short!("PURCHASE");
pub const PHASE_ADVANCED: Symbol = symbol_short!("PHASE_ADV");
pub const RECEIVER_CHANGED: Symbol = symbol_short!("RECV_UPD");
pub const BLACKLIST_UPDATED: Symbol = symbol_short!("BL_UPD");
pub const OWNER_CHANGED: Symbol = symbol_short!("OWNER_UPD");
pub const WITHDRAWN: Symbol = symbol_short!("WITHDRAW");

// ==================== Event Payloads ====================

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PurchaseEvent {
    pub participant: Address,
    pub paid_amount: Amount6,
    pub token_amount: Amount18,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ReceiverChangedEvent {
    pub old: Option<Address>,
    pub new: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct WithdrawalEvent {
    pub token: Address,
    pub to: Address,
    pub amount: i128,
}

// ==================== Event Publishing Functions ====================

pub fn emit_initialized(env: &Env, owner: &Address, config: &SaleConfig, phase_count: u32) {
    env.events().publish(
        (INIT, owner.clone()),
        (config.max_selling_amount, phase_count),
    );
}

pub fn emit_purchase(env: &Env, receipt: &Receipt) {
    let event = PurchaseEvent {
        participant: receipt.participant.clone(),
        paid_amount: receipt.paid_amount,
        token_amount: receipt.token_amount,
    };
    env.events()
        .publish((PURCHASE, receipt.instrument.clone()), event);
}

pub fn emit_phase_advanced(env: &Env, shift: PhaseShift) {
    env.events().publish((PHASE_ADVANCED,), shift);
}

pub fn emit_receiver_changed(env: &Env, old: Option<Address>, new: Address) {
    env.events()
        .publish((RECEIVER_CHANGED,), ReceiverChangedEvent { old, new });
}

pub fn emit_blacklist_updated(env: &Env, participant: &Address, blocked: bool) {
    env.events()
        .publish((BLACKLIST_UPDATED, participant.clone()), blocked);
}

pub fn emit_owner_changed(env: &Env, old: &Address, new: &Address) {
    env.events()
        .publish((OWNER_CHANGED,), (old.clone(), new.clone()));
}

pub fn emit_withdrawn(env: &Env, token: &Address, to: &Address, amount: i128) {
    let event = WithdrawalEvent {
        token: token.clone(),
        to: to.clone(),
        amount,
    };
    env.events().publish((WITHDRAWN,), event);
}
