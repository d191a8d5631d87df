use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::state::Registry;

/// Read-only access to the registry. Results are returned as Borsh-encoded
/// return data, so these are meant to be simulated rather than sent.
#[derive(Accounts)]
pub struct ViewRegistry<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,
}
