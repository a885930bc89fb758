use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 0,
    NotInitialized = 1,
    InsufficientPayment = 2,
    OnlyOwner = 3,
    WithdrawalFailed = 4,
    RefundFailed = 5,
    ArithmeticOverflow = 6,
    PaymentFailed = 7,
}
