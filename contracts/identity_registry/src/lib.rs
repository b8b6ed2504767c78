#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, Address,
    BytesN, Env, Symbol,
};


contractmeta!(
    key = "Description",
    val = "Registry linking wallets to off-ledger identity credential hashes"
);

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Identity(Address),
}

const EVT_REGISTER: Symbol = symbol_short!("register");
const EVT_REVOKE: Symbol = symbol_short!("revoke");

#[contract]
pub struct IdentityRegistry;

#[contractimpl]
impl IdentityRegistry {
    pub fn initialize(env: Env, admin: Address) -> Result<(), RegistryError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(RegistryError::AlreadyInitialized);
        }
        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        Ok(())
    }

    /// Link a wallet to the hash of its identity credential. Re-registering
    /// replaces the previous hash.
    pub fn register(
        env: Env,
        caller: Address,
        wallet: Address,
        hash: BytesN<32>,
    ) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;

        env.storage()
            .persistent()
            .set(&DataKey::Identity(wallet.clone()), &hash);

        env.events().publish((EVT_REGISTER, wallet), hash);
        Ok(())
    }

    pub fn revoke(env: Env, caller: Address, wallet: Address) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;

        env.storage()
            .persistent()
            .remove(&DataKey::Identity(wallet.clone()));

        env.events().publish((EVT_REVOKE, wallet), ());
        Ok(())
    }

    pub fn has_identity(env: Env, wallet: Address) -> bool {
        env.storage().persistent().has(&DataKey::Identity(wallet))
    }

    pub fn identity_hash(env: Env, wallet: Address) -> Option<BytesN<32>> {
        env.storage().persistent().get(&DataKey::Identity(wallet))
    }

    pub fn transfer_admin(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;
        new_admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &new_admin);
        Ok(())
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Admin)
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), RegistryError> {
        caller.require_auth();

        let stored_admin: Option<Address> = env.storage().instance().get(&DataKey::Admin);
        match stored_admin {
            Some(stored) if stored == *caller => Ok(()),
            Some(_) => Err(RegistryError::NotAuthorized),
            None => Err(RegistryError::NotInitialized),
        }
    }
}
