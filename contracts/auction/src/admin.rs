use crate::errors::Error;
use crate::storage;
use soroban_sdk::{Address, Env};

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    let stored_admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
    caller.require_auth();
    if stored_admin != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
