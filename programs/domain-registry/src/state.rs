use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::RegistryError;

// ============================================================================
// Domain Records
// ============================================================================

/// What a claim does with lamports paid above the domain price.
///
/// Chosen once at initialization and never changed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OverpaymentPolicy {
    /// The whole payment is collected and credited to the balance
    #[default]
    Retain,
    /// Only the price is collected; the excess never leaves the claimer
    Refund,
}

impl OverpaymentPolicy {
    /// Lamports collected for a claim where `payment >= price` already holds
    pub fn collected(self, price: u64, payment: u64) -> u64 {
        match self {
            OverpaymentPolicy::Retain => payment,
            OverpaymentPolicy::Refund => price,
        }
    }
}

/// One listed domain. Lives in the registry arena at index `id - 1`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct Domain {
    /// 1-based, dense, assigned at listing
    pub id: u64,
    pub name: String,
    /// Price in lamports
    pub price: u64,
    /// None until claimed
    pub owner: Option<Pubkey>,
}

impl Domain {
    /// id (8) + name (4 + 32) + price (8) + owner (1 + 32)
    pub const SIZE: usize = 8 + 4 + MAX_NAME_LENGTH + 8 + 1 + 32; // 85 bytes

    pub fn is_claimed(&self) -> bool {
        self.owner.is_some()
    }

    pub fn view(&self) -> DomainView {
        DomainView {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            is_claimed: self.is_claimed(),
        }
    }
}

/// Snapshot returned by `get_domain`. Exposes claim status, not the owner.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct DomainView {
    pub id: u64,
    pub name: String,
    pub price: u64,
    pub is_claimed: bool,
}

/// Snapshot returned by `get_registry_info`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct RegistryInfo {
    pub authority: Pubkey,
    pub name: String,
    pub symbol: String,
    pub max_supply: u64,
    pub total_listed: u64,
    pub total_supply: u64,
    pub balance: u64,
    pub overpayment_policy: OverpaymentPolicy,
}

// ============================================================================
// Registry State
// ============================================================================

/// Registry account: configuration, domain arena and proceeds ledger.
/// PDA seeds: [b"registry"]
///
/// The account also holds the proceeds themselves. Its lamports are always
/// at least the rent-exempt minimum plus `balance`.
#[account]
#[derive(Debug)]
pub struct Registry {
    /// Only identity allowed to list domains and withdraw proceeds
    pub authority: Pubkey,

    /// Collection name
    pub name: String,

    /// Collection symbol
    pub symbol: String,

    /// Ceiling on the number of domains ever listed
    pub max_supply: u64,

    /// Number of claimed domains (not listed ones)
    pub total_supply: u64,

    /// Lamports received from claims and not yet withdrawn
    pub balance: u64,

    pub overpayment_policy: OverpaymentPolicy,

    /// PDA bump seed
    pub bump: u8,

    /// Domain arena, indexed by `id - 1`
    pub domains: Vec<Domain>,
}

impl Registry {
    /// discriminator (8) + authority (32) + name (4 + 32) + symbol (4 + 10)
    /// + max_supply (8) + total_supply (8) + balance (8) + policy (1) + bump (1)
    /// + domains length prefix (4)
    pub const BASE_SIZE: usize =
        8 + 32 + 4 + MAX_NAME_LENGTH + 4 + MAX_SYMBOL_LENGTH + 8 + 8 + 8 + 1 + 1 + 4; // 120 bytes

    /// Account size with room for `max_supply` domains.
    ///
    /// Clamped to `MAX_SUPPLY_LIMIT` so an out-of-range argument reaches the
    /// handler's validation instead of failing the allocation.
    pub fn space(max_supply: u64) -> usize {
        let slots = max_supply.clamp(1, MAX_SUPPLY_LIMIT) as usize;
        Self::BASE_SIZE + slots * Domain::SIZE
    }

    pub fn new(
        authority: Pubkey,
        name: String,
        symbol: String,
        max_supply: u64,
        overpayment_policy: OverpaymentPolicy,
        bump: u8,
    ) -> Result<Self> {
        require!(name.len() <= MAX_NAME_LENGTH, RegistryError::NameTooLong);
        require!(symbol.len() <= MAX_SYMBOL_LENGTH, RegistryError::SymbolTooLong);
        require!(
            (1..=MAX_SUPPLY_LIMIT).contains(&max_supply),
            RegistryError::InvalidMaxSupply
        );

        Ok(Self {
            authority,
            name,
            symbol,
            max_supply,
            total_supply: 0,
            balance: 0,
            overpayment_policy,
            bump,
            domains: Vec::new(),
        })
    }

    pub fn total_listed(&self) -> u64 {
        self.domains.len() as u64
    }

    pub fn is_authority(&self, key: &Pubkey) -> bool {
        self.authority == *key
    }

    /// Append a domain with the next sequential id. Returns that id.
    pub fn list(&mut self, caller: &Pubkey, name: String, price: u64) -> Result<u64> {
        require!(self.is_authority(caller), RegistryError::Unauthorized);
        require!(!name.is_empty(), RegistryError::EmptyName);
        require!(name.len() <= MAX_NAME_LENGTH, RegistryError::NameTooLong);
        require!(
            self.total_listed() < self.max_supply,
            RegistryError::CapacityExceeded
        );

        let id = self
            .total_listed()
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        self.domains.push(Domain {
            id,
            name,
            price,
            owner: None,
        });

        Ok(id)
    }

    fn index_of(&self, id: u64) -> Result<usize> {
        let index = id.checked_sub(1).ok_or(RegistryError::NotFound)?;
        let index = usize::try_from(index).map_err(|_| RegistryError::NotFound)?;
        require!(index < self.domains.len(), RegistryError::NotFound);
        Ok(index)
    }

    pub fn domain(&self, id: u64) -> Result<&Domain> {
        let index = self.index_of(id)?;
        Ok(&self.domains[index])
    }

    pub fn get_domain(&self, id: u64) -> Result<DomainView> {
        Ok(self.domain(id)?.view())
    }

    /// Owner of a claimed domain. Unclaimed domains report `NotFound`.
    pub fn owner_of(&self, id: u64) -> Result<Pubkey> {
        let owner = self.domain(id)?.owner.ok_or(RegistryError::NotFound)?;
        Ok(owner)
    }

    /// Record `caller` as owner of domain `id`.
    ///
    /// Every check and every counter update is computed before the first
    /// write, so a rejected claim leaves the registry untouched. Returns the
    /// lamports the caller must transfer in.
    pub fn claim(&mut self, id: u64, caller: Pubkey, payment: u64) -> Result<u64> {
        let index = self.index_of(id)?;
        let domain = &self.domains[index];
        require!(!domain.is_claimed(), RegistryError::AlreadyClaimed);
        require!(payment >= domain.price, RegistryError::InsufficientPayment);

        let collected = self.overpayment_policy.collected(domain.price, payment);
        let total_supply = self
            .total_supply
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        let balance = self
            .balance
            .checked_add(collected)
            .ok_or(RegistryError::Overflow)?;

        self.domains[index].owner = Some(caller);
        self.total_supply = total_supply;
        self.balance = balance;

        Ok(collected)
    }

    /// Zero the balance and return what it held.
    ///
    /// Must run before any lamports leave the registry: a re-entrant
    /// withdrawal then observes a zero balance.
    pub fn take_balance(&mut self, caller: &Pubkey) -> Result<u64> {
        require!(self.is_authority(caller), RegistryError::Unauthorized);
        Ok(std::mem::take(&mut self.balance))
    }

    pub fn info(&self) -> RegistryInfo {
        RegistryInfo {
            authority: self.authority,
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            max_supply: self.max_supply,
            total_listed: self.total_listed(),
            total_supply: self.total_supply,
            balance: self.balance,
            overpayment_policy: self.overpayment_policy,
        }
    }
}
