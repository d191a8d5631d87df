use anchor_lang::prelude::*;

use crate::state::OverpaymentPolicy;

#[event]
pub struct RegistryInitialized {
    pub authority: Pubkey,
    pub name: String,
    pub symbol: String,
    pub max_supply: u64,
    pub overpayment_policy: OverpaymentPolicy,
}

#[event]
pub struct DomainListed {
    pub id: u64,
    pub name: String,
    pub price: u64,
}

#[event]
pub struct DomainClaimed {
    pub id: u64,
    pub owner: Pubkey,
    /// Lamports moved into the registry (equals payment under `Retain`)
    pub paid: u64,
    pub total_supply: u64,
}

#[event]
pub struct ProceedsWithdrawn {
    pub authority: Pubkey,
    pub amount: u64,
}
