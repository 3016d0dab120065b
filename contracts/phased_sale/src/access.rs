use crate::errors::Error;
use crate::storage;
use soroban_sdk::{Address, Env};

/// Authenticates `caller` and checks it is the sale owner. Runs before any
/// owner-only mutation.
pub fn require_owner(env: &Env, caller: &Address) -> Result<Address, Error> {
    caller.require_auth();
    let owner = storage::get_owner(env)?;
    if *caller != owner {
        return Err(Error::Unauthorized);
    }
    Ok(owner)
}

pub fn ensure_not_blacklisted(env: &Env, participant: &Address) -> Result<(), Error> {
    if storage::is_blacklisted(env, participant) {
        return Err(Error::ParticipantBlocked);
    }
    Ok(())
}
