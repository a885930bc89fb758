use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    RecordNotFound = 0,
    AlreadyInitialized = 1,
    NotInitialized = 2,
}
