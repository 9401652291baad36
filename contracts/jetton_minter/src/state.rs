use crate::storage_types::{
    DataKey, IssuanceState, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
};
use crate::supply::SupplyTerms;
use soroban_sdk::Env;

pub fn read_state(e: &Env) -> IssuanceState {
    e.storage().instance().get(&DataKey::State).unwrap()
}

pub fn write_state(e: &Env, state: &IssuanceState) {
    e.storage().instance().set(&DataKey::State, state);
}

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

impl IssuanceState {
    pub fn terms(&self) -> SupplyTerms {
        SupplyTerms {
            total_supply: self.total_supply,
            capped_supply: self.capped_supply,
            price: self.price,
        }
    }

    pub fn is_mintable(&self) -> bool {
        self.terms().is_mintable()
    }
}
