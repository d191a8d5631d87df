use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::errors::RegistryError;
use crate::events::DomainListed;
use crate::state::Registry;

#[derive(Accounts)]
pub struct ListDomain<'info> {
    /// Registry authority (must sign)
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = authority @ RegistryError::Unauthorized
    )]
    pub registry: Account<'info, Registry>,
}

pub fn handler(ctx: Context<ListDomain>, name: String, price: u64) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let registry = &mut ctx.accounts.registry;

    let id = registry.list(&authority, name.clone(), price)?;

    msg!("Listed domain {} ({}) at {} lamports", id, name, price);
    emit!(DomainListed { id, name, price });

    Ok(())
}
