use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::{DomainView, OverpaymentPolicy, RegistryInfo};

declare_id!("58x4rJGng6PmsjfisVrSmuFCZF6T8gzzmLrmRuCT42xQ");

#[program]
pub mod domain_registry {
    use super::*;

    // =========================================================================
    // Mutating Instructions
    // =========================================================================

    /// One-time setup: creates the registry PDA with the signer as authority.
    pub fn initialize(
        ctx: Context<Initialize>,
        name: String,
        symbol: String,
        max_supply: u64,
        overpayment_policy: OverpaymentPolicy,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, name, symbol, max_supply, overpayment_policy)
    }

    /// List a new domain under the next sequential id (authority only).
    pub fn list_domain(ctx: Context<ListDomain>, name: String, price: u64) -> Result<()> {
        instructions::list_domain::handler(ctx, name, price)
    }

    /// Claim a listed domain by paying at least its price.
    pub fn claim_domain(ctx: Context<ClaimDomain>, id: u64, payment: u64) -> Result<()> {
        instructions::claim_domain::handler(ctx, id, payment)
    }

    /// Move the whole unwithdrawn balance to the authority (authority only).
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::handler(ctx)
    }

    // =========================================================================
    // View Instructions
    // =========================================================================

    /// Name, price and claim status of a domain.
    pub fn get_domain(ctx: Context<ViewRegistry>, id: u64) -> Result<DomainView> {
        ctx.accounts.registry.get_domain(id)
    }

    /// Owner of a claimed domain.
    pub fn owner_of(ctx: Context<ViewRegistry>, id: u64) -> Result<Pubkey> {
        ctx.accounts.registry.owner_of(id)
    }

    /// Collection metadata, supply counters and balance.
    pub fn get_registry_info(ctx: Context<ViewRegistry>) -> Result<RegistryInfo> {
        Ok(ctx.accounts.registry.info())
    }
}
