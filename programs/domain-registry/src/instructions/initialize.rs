use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::events::RegistryInitialized;
use crate::state::{OverpaymentPolicy, Registry};

#[derive(Accounts)]
#[instruction(name: String, symbol: String, max_supply: u64)]
pub struct Initialize<'info> {
    /// Registry authority, also pays for the registry account
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Registry PDA, sized for `max_supply` domains
    #[account(
        init,
        payer = authority,
        space = Registry::space(max_supply),
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    name: String,
    symbol: String,
    max_supply: u64,
    overpayment_policy: OverpaymentPolicy,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();

    ctx.accounts.registry.set_inner(Registry::new(
        authority,
        name.clone(),
        symbol.clone(),
        max_supply,
        overpayment_policy,
        ctx.bumps.registry,
    )?);

    emit!(RegistryInitialized {
        authority,
        name,
        symbol,
        max_supply,
        overpayment_policy,
    });

    Ok(())
}
