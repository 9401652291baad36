use crate::error::MinterError;
use crate::state::{bump_instance, read_state, write_state};
use crate::storage_types::{
    AdminChangedEvent, IssuanceState, JettonData, MintEvent, SupplyPrice, WalletDiscovery,
};
use crate::supply::plan_mint;
use crate::wallet::{credit_wallet, wallet_address};
use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, token, Address, Bytes, BytesN, Env,
};

#[contract]
pub struct JettonMinter;

#[contractimpl]
impl JettonMinter {
    pub fn __constructor(
        e: Env,
        admin: Address,
        payment_asset: Address,
        wallet_code: BytesN<32>,
        content: Bytes,
        capped_supply: i128,
        price: i128,
    ) {
        if price <= 0 || capped_supply < 0 {
            panic_with_error!(&e, MinterError::InvalidConfig);
        }
        write_state(
            &e,
            &IssuanceState {
                total_supply: 0,
                capped_supply,
                price,
                admin,
                content,
                wallet_code,
                payment_asset,
            },
        );
    }

    /// Sells `floor(total_amount / price)` units to `to`, paid by `requestor`.
    ///
    /// `forward_amount` is the part of the payment the requestor earmarks for
    /// the recipient notification and may not exceed `total_amount`. Either the
    /// whole mint lands or nothing does.
    pub fn mint(
        e: Env,
        requestor: Address,
        to: Address,
        forward_amount: i128,
        total_amount: i128,
    ) -> Result<i128, MinterError> {
        requestor.require_auth();

        let mut state = read_state(&e);
        let plan = plan_mint(state.terms(), forward_amount, total_amount)?;

        token::Client::new(&e, &state.payment_asset).transfer(
            &requestor,
            &e.current_contract_address(),
            &total_amount,
        );

        state.total_supply = plan.new_supply;
        write_state(&e, &state);
        bump_instance(&e);

        let wallet = credit_wallet(
            &e,
            &state.wallet_code,
            &to,
            plan.units,
            &requestor,
            forward_amount,
        );

        e.events().publish(
            (symbol_short!("mint"), to.clone()),
            MintEvent {
                requestor,
                recipient: to,
                wallet,
                amount: plan.units,
                payment: total_amount,
                forward_amount,
                total_supply: plan.new_supply,
            },
        );

        Ok(plan.units)
    }

    pub fn change_admin(e: Env, caller: Address, new_admin: Address) -> Result<(), MinterError> {
        caller.require_auth();

        let mut state = read_state(&e);
        if caller != state.admin {
            return Err(MinterError::Unauthorized);
        }

        let previous = state.admin.clone();
        state.admin = new_admin.clone();
        write_state(&e, &state);
        bump_instance(&e);

        e.events().publish(
            (symbol_short!("admin"),),
            AdminChangedEvent {
                previous,
                new_admin,
            },
        );
        Ok(())
    }

    /// Moves accumulated mint payments out of the minter.
    pub fn collect_proceeds(
        e: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), MinterError> {
        caller.require_auth();

        let state = read_state(&e);
        if caller != state.admin {
            return Err(MinterError::Unauthorized);
        }
        if amount < 0 {
            return Err(MinterError::InvalidAmount);
        }

        token::Client::new(&e, &state.payment_asset).transfer(
            &e.current_contract_address(),
            &to,
            &amount,
        );
        bump_instance(&e);
        Ok(())
    }

    pub fn provide_wallet_address(e: Env, owner: Address, include_address: bool) -> WalletDiscovery {
        let state = read_state(&e);
        WalletDiscovery {
            wallet_address: wallet_address(&e, &owner, &state.wallet_code),
            owner: if include_address { Some(owner) } else { None },
        }
    }

    pub fn get_wallet_address(e: Env, owner: Address) -> Address {
        let state = read_state(&e);
        wallet_address(&e, &owner, &state.wallet_code)
    }

    pub fn get_jetton_data(e: Env) -> JettonData {
        let state = read_state(&e);
        JettonData {
            total_supply: state.total_supply,
            mintable: state.is_mintable(),
            admin: state.admin,
            content: state.content,
            wallet_code: state.wallet_code,
        }
    }

    pub fn get_supply_price(e: Env) -> SupplyPrice {
        let state = read_state(&e);
        SupplyPrice {
            capped_supply: state.capped_supply,
            price: state.price,
        }
    }
}
