use soroban_sdk::xdr::{AccountId, PublicKey, ScAddress, Uint256};
use soroban_sdk::{Address, Env, String as SorobanString};
use stellar_strkey::Strkey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("Invalid strkey {input}: {details}")]
    InvalidStrkey { input: String, details: String },

    #[error("Unsupported address type for {0}: expected an account (G...) or contract (C...)")]
    Unsupported(String),

    #[error("Address cannot be rendered as a strkey")]
    Unrepresentable,
}

/// Parse an account or contract strkey into a host `Address`.
pub fn parse_address(env: &Env, input: &str) -> Result<Address, AddressError> {
    let strkey = Strkey::from_string(input).map_err(|e| AddressError::InvalidStrkey {
        input: input.to_string(),
        details: e.to_string(),
    })?;

    match strkey {
        Strkey::PublicKeyEd25519(_) | Strkey::Contract(_) => {
            Ok(Address::from_string(&SorobanString::from_str(env, input)))
        }
        _ => Err(AddressError::Unsupported(input.to_string())),
    }
}

/// Render a host `Address` as its strkey (`G...` for accounts, `C...` for contracts).
pub fn to_strkey(address: &Address) -> Result<String, AddressError> {
    let sc_address = ScAddress::try_from(address).map_err(|_| AddressError::Unrepresentable)?;

    #[allow(unreachable_patterns)]
    let strkey = match sc_address {
        ScAddress::Account(AccountId(PublicKey::PublicKeyTypeEd25519(Uint256(bytes)))) => {
            Strkey::PublicKeyEd25519(stellar_strkey::ed25519::PublicKey(bytes))
        }
        ScAddress::Contract(hash) => Strkey::Contract(stellar_strkey::Contract(hash.0)),
        _ => return Err(AddressError::Unrepresentable),
    };
    Ok(strkey.to_string())
}
