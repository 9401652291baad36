use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MinterError {
    /// Price must be positive and the cap non-negative.
    InvalidConfig = 1,
    InvalidAmount = 2,
    ForwardExceedsPayment = 3,
    /// The payment does not cover a single unit.
    InsufficientPayment = 4,
    Unauthorized = 73,
    /// High exit code: the mint can never succeed and must not be retried.
    CappedSupplyExceeded = 256,
}
