use crate::error::MinterError;

/// The numeric part of the issuance state that decides whether a mint fits.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SupplyTerms {
    pub total_supply: i128,
    pub capped_supply: i128,
    pub price: i128,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MintPlan {
    pub units: i128,
    pub new_supply: i128,
}

impl SupplyTerms {
    pub fn is_mintable(&self) -> bool {
        self.total_supply < self.capped_supply
    }
}

/// Checks a mint request against `terms` and works out how many units
/// `total_amount` buys. Checks run in order: amounts, forward reservation,
/// exhaustion, payment size, then the cap. Nothing is mutated here.
pub fn plan_mint(
    terms: SupplyTerms,
    forward_amount: i128,
    total_amount: i128,
) -> Result<MintPlan, MinterError> {
    if forward_amount < 0 || total_amount < 0 {
        return Err(MinterError::InvalidAmount);
    }
    if forward_amount > total_amount {
        return Err(MinterError::ForwardExceedsPayment);
    }

    // Once the cap is reached no payment can buy anything.
    if !terms.is_mintable() {
        return Err(MinterError::CappedSupplyExceeded);
    }

    let units = total_amount / terms.price;
    if units == 0 {
        return Err(MinterError::InsufficientPayment);
    }

    // An overflowing sum is necessarily above any representable cap.
    let new_supply = terms
        .total_supply
        .checked_add(units)
        .ok_or(MinterError::CappedSupplyExceeded)?;
    if new_supply > terms.capped_supply {
        return Err(MinterError::CappedSupplyExceeded);
    }

    Ok(MintPlan { units, new_supply })
}
