use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Caller is not the registry authority")]
    Unauthorized,

    #[msg("Domain not found")]
    NotFound,

    #[msg("Registry is at max supply")]
    CapacityExceeded,

    #[msg("Domain already claimed")]
    AlreadyClaimed,

    #[msg("Payment below domain price")]
    InsufficientPayment,

    #[msg("Registry cannot cover the transfer")]
    TransferFailure,

    #[msg("Name too long (max 32 bytes)")]
    NameTooLong,

    #[msg("Name must not be empty")]
    EmptyName,

    #[msg("Symbol too long (max 10 bytes)")]
    SymbolTooLong,

    #[msg("Max supply must be between 1 and 100")]
    InvalidMaxSupply,

    #[msg("Arithmetic overflow")]
    Overflow,
}
