use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::errors::RegistryError;
use crate::events::ProceedsWithdrawn;
use crate::state::Registry;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// Registry authority; receives the proceeds
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = authority @ RegistryError::Unauthorized
    )]
    pub registry: Account<'info, Registry>,
}

pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let authority = ctx.accounts.authority.key();

    // Ledger first: the balance is zero before any lamports move.
    let amount = ctx.accounts.registry.take_balance(&authority)?;

    if amount > 0 {
        let registry_info = ctx.accounts.registry.to_account_info();
        let rent_floor = Rent::get()?.minimum_balance(registry_info.data_len());
        let available = registry_info.lamports().saturating_sub(rent_floor);
        require!(available >= amount, RegistryError::TransferFailure);

        // The registry is program-owned, so lamports move without a CPI.
        ctx.accounts.registry.sub_lamports(amount)?;
        ctx.accounts.authority.add_lamports(amount)?;
    }

    msg!("Withdrew {} lamports", amount);
    emit!(ProceedsWithdrawn { authority, amount });

    Ok(())
}
