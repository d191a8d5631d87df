use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::REGISTRY_SEED;
use crate::events::DomainClaimed;
use crate::state::Registry;

#[derive(Accounts)]
pub struct ClaimDomain<'info> {
    /// Claimer; becomes the domain owner and pays for it
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Registry PDA, also receives the payment
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ClaimDomain>, id: u64, payment: u64) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();

    // === PHASE 1: Validate and record the claim ===
    // A failure in phase 2 aborts the transaction, reverting this write too.
    let (collected, total_supply) = {
        let registry = &mut ctx.accounts.registry;
        let collected = registry.claim(id, buyer, payment)?;
        (collected, registry.total_supply)
    };

    // === PHASE 2: Pull the payment into the registry ===
    if collected > 0 {
        transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.buyer.to_account_info(),
                    to: ctx.accounts.registry.to_account_info(),
                },
            ),
            collected,
        )?;
    }

    emit!(DomainClaimed {
        id,
        owner: buyer,
        paid: collected,
        total_supply,
    });

    Ok(())
}
