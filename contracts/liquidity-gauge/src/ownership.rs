use crate::error::GaugeError;
use crate::storage::{clear_future_admin, get_admin, get_future_admin, set_admin, set_future_admin};
use soroban_sdk::{Address, Env, Symbol};

/// Fail unless `caller` is the current admin
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), GaugeError> {
    caller.require_auth();

    let admin = get_admin(env).ok_or(GaugeError::NotInitialized)?;
    if *caller != admin {
        return Err(GaugeError::AccessDenied);
    }
    Ok(())
}

/// Admin nominates `candidate`; a later commit replaces an earlier one
pub fn commit(env: &Env, caller: &Address, candidate: &Address) -> Result<(), GaugeError> {
    require_admin(env, caller)?;

    set_future_admin(env, candidate);

    env.events().publish(
        (Symbol::new(env, "commit_ownership"),),
        (caller.clone(), candidate.clone()),
    );
    Ok(())
}

/// Committed candidate takes over the admin role
pub fn accept(env: &Env, caller: &Address) -> Result<(), GaugeError> {
    caller.require_auth();

    let candidate = get_future_admin(env).ok_or(GaugeError::NoPendingAdmin)?;
    if *caller != candidate {
        return Err(GaugeError::AccessDenied);
    }

    set_admin(env, &candidate);
    clear_future_admin(env);

    env.events().publish(
        (Symbol::new(env, "apply_ownership"),),
        (candidate,),
    );
    Ok(())
}
