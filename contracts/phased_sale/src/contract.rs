use crate::access;
use crate::errors::{Error, ErrorInfo};
use crate::events;
use crate::ledger::{Ledger, SaleState};
use crate::math;
use crate::schedule::PhaseSchedule;
use crate::storage;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env, Vec};

contractmeta!(
    key = "Description",
    val = "Phased stable-asset sale with a hard allocation cap"
);

#[contract]
pub struct PhasedSaleContract;

fn load_ledger(env: &Env, config: &SaleConfig) -> Result<Ledger, Error> {
    let schedule = PhaseSchedule::validate(storage::get_phases(env)?)?;
    let state = storage::get_state(env)?;
    Ok(Ledger::new(schedule, config.max_selling_amount, state))
}

fn check_window(window: &SaleWindow, now: Timestamp) -> Result<(), Error> {
    if now < window.start_time {
        return Err(Error::BeforeWindow);
    }
    if now > window.end_time {
        return Err(Error::AfterWindow);
    }
    Ok(())
}

/// Payment amounts travel through the token interface as `i128`.
fn transfer_amount(paid_amount: Amount6) -> Result<i128, Error> {
    if paid_amount == 0 {
        return Err(Error::InvalidAmount);
    }
    i128::try_from(paid_amount).map_err(|_| Error::InvalidAmount)
}

fn recover_balance(env: &Env, caller: &Address, asset: &Address) -> Result<i128, Error> {
    let owner = access::require_owner(env, caller)?;
    let client = token::Client::new(env, asset);
    let contract = env.current_contract_address();

    let balance = client.balance(&contract);
    if balance > 0 {
        if !matches!(client.try_transfer(&contract, &owner, &balance), Ok(Ok(()))) {
            return Err(Error::TransferFailed);
        }
        events::emit_withdrawn(env, asset, &owner, balance);
    }
    Ok(balance)
}

#[contractimpl]
impl PhasedSaleContract {
    /// Initialize the sale. Phases, window and caps are fixed from here on.
    pub fn initialize(
        env: Env,
        owner: Address,
        config: SaleConfig,
        funds_receiver: Option<Address>,
        phases: Vec<Phase>,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if !config.window.is_valid() {
            return Err(Error::InvalidWindow);
        }
        if config.first_instrument == config.second_instrument {
            return Err(Error::InvalidInstruments);
        }
        if config.max_selling_amount == 0 {
            return Err(Error::InvalidMaxSelling);
        }
        let schedule = PhaseSchedule::validate(phases)?;

        storage::set_config(&env, &config);
        storage::set_owner(&env, &owner);
        storage::set_funds_receiver(&env, &funds_receiver);
        storage::set_phases(&env, &schedule.phases());
        storage::set_state(&env, &SaleState::default());
        storage::extend_instance(&env);

        events::emit_initialized(&env, &owner, &config, schedule.len());
        log!(&env, "sale initialized", owner, schedule.len());
        Ok(())
    }

    /// Pay `paid_amount` of `instrument` and receive an allocation at the
    /// price of the phase active when the purchase starts.
    pub fn buy(
        env: Env,
        participant: Address,
        instrument: Address,
        paid_amount: Amount6,
    ) -> Result<Receipt, Error> {
        participant.require_auth();
        let config = storage::get_config(&env)?;

        access::ensure_not_blacklisted(&env, &participant)?;
        let now = env.ledger().timestamp();
        check_window(&config.window, now)?;
        if !config.accepts(&instrument) {
            return Err(Error::UnsupportedInstrument);
        }
        let amount = transfer_amount(paid_amount)?;
        let receiver = storage::get_funds_receiver(&env).ok_or(Error::ReceiverNotSet)?;

        let mut ledger = load_ledger(&env, &config)?;
        let checkpoint = *ledger.state();
        let prior_balance = storage::get_balance(&env, &participant);

        let opening_shift = ledger.advance_phase(now);
        let phase = ledger.current_phase();
        let token_amount = math::to_token_amount(paid_amount, ledger.current_price()?)?;
        if token_amount == 0 {
            return Err(Error::AmountTooSmall);
        }
        let balance = ledger.credit(prior_balance, token_amount)?;
        let closing_shift = ledger.advance_phase(now);

        // Commit before handing control to the instrument contract.
        storage::set_state(&env, ledger.state());
        storage::set_balance(&env, &participant, balance);
        storage::extend_instance(&env);

        let payment = token::Client::new(&env, &instrument);
        if !matches!(
            payment.try_transfer(&participant, &receiver, &amount),
            Ok(Ok(()))
        ) {
            storage::set_state(&env, &checkpoint);
            storage::set_balance(&env, &participant, prior_balance);
            log!(&env, "payment transfer failed, purchase reverted", participant);
            return Err(Error::TransferFailed);
        }

        for shift in [opening_shift, closing_shift].into_iter().flatten() {
            events::emit_phase_advanced(&env, shift);
            log!(&env, "phase advanced", shift.from, shift.to);
        }

        let receipt = Receipt {
            participant,
            instrument,
            paid_amount,
            token_amount,
            phase,
        };
        events::emit_purchase(&env, &receipt);
        Ok(receipt)
    }

    /// Phase that prices a purchase made now. Read-only: the stored cursor
    /// only moves with the next successful purchase.
    pub fn advance_phase(env: Env) -> Result<u32, Error> {
        let config = storage::get_config(&env)?;
        let mut ledger = load_ledger(&env, &config)?;
        ledger.advance_phase(env.ledger().timestamp());
        Ok(ledger.current_phase())
    }

    /// Token amount a purchase of `paid_amount` would receive right now.
    pub fn quote(env: Env, paid_amount: Amount6) -> Result<Amount18, Error> {
        let config = storage::get_config(&env)?;
        transfer_amount(paid_amount)?;

        let mut ledger = load_ledger(&env, &config)?;
        ledger.advance_phase(env.ledger().timestamp());
        let token_amount = math::to_token_amount(paid_amount, ledger.current_price()?)?;
        if token_amount == 0 {
            return Err(Error::AmountTooSmall);
        }
        if token_amount > ledger.remaining() {
            return Err(Error::SoldOut);
        }
        Ok(token_amount)
    }

    // ==================== Owner Operations ====================

    pub fn set_blacklisted(
        env: Env,
        caller: Address,
        participant: Address,
        blocked: bool,
    ) -> Result<(), Error> {
        access::require_owner(&env, &caller)?;
        storage::set_blacklisted(&env, &participant, blocked);
        events::emit_blacklist_updated(&env, &participant, blocked);
        Ok(())
    }

    pub fn set_funds_receiver(env: Env, caller: Address, receiver: Address) -> Result<(), Error> {
        access::require_owner(&env, &caller)?;
        let old = storage::get_funds_receiver(&env);
        storage::set_funds_receiver(&env, &Some(receiver.clone()));
        events::emit_receiver_changed(&env, old, receiver);
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        let owner = access::require_owner(&env, &caller)?;
        storage::set_owner(&env, &new_owner);
        events::emit_owner_changed(&env, &owner, &new_owner);
        Ok(())
    }

    /// Sends the contract's whole balance of `token` to the owner.
    pub fn withdraw_token(env: Env, caller: Address, token: Address) -> Result<i128, Error> {
        recover_balance(&env, &caller, &token)
    }

    /// Sends the contract's whole native-asset balance to the owner.
    pub fn withdraw_native(env: Env, caller: Address) -> Result<i128, Error> {
        let config = storage::get_config(&env)?;
        recover_balance(&env, &caller, &config.native_asset)
    }

    // ==================== View Functions ====================

    pub fn owner(env: Env) -> Result<Address, Error> {
        storage::get_owner(&env)
    }

    pub fn config(env: Env) -> Result<SaleConfig, Error> {
        storage::get_config(&env)
    }

    pub fn funds_receiver(env: Env) -> Option<Address> {
        storage::get_funds_receiver(&env)
    }

    pub fn phases(env: Env) -> Result<Vec<Phase>, Error> {
        storage::get_phases(&env)
    }

    pub fn phase(env: Env, index: u32) -> Result<Phase, Error> {
        storage::get_phases(&env)?
            .get(index)
            .ok_or(Error::IndexOutOfRange)
    }

    pub fn phase_count(env: Env) -> Result<u32, Error> {
        Ok(storage::get_phases(&env)?.len())
    }

    /// Stored cursor; may lag the clock until the next purchase.
    pub fn current_phase(env: Env) -> Result<u32, Error> {
        Ok(storage::get_state(&env)?.current_phase)
    }

    pub fn total_sold(env: Env) -> Result<Amount18, Error> {
        Ok(storage::get_state(&env)?.total_sold)
    }

    pub fn remaining(env: Env) -> Result<Amount18, Error> {
        let config = storage::get_config(&env)?;
        Ok(load_ledger(&env, &config)?.remaining())
    }

    pub fn balance_of(env: Env, participant: Address) -> Result<Amount18, Error> {
        storage::get_config(&env)?;
        Ok(storage::get_balance(&env, &participant))
    }

    pub fn sale_state(env: Env) -> Result<SaleState, Error> {
        storage::get_state(&env)
    }

    pub fn is_blacklisted(env: Env, participant: Address) -> bool {
        storage::is_blacklisted(&env, &participant)
    }

    pub fn get_error_info(_env: Env, code: u32) -> Option<ErrorInfo> {
        Error::from_code(code).map(|error| error.info())
    }
}
