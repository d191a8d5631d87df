/// PDA seed for the registry account
pub const REGISTRY_SEED: &[u8] = b"registry";

/// Maximum length for a collection or domain name (bytes)
pub const MAX_NAME_LENGTH: usize = 32;

/// Maximum length for the collection symbol (bytes)
pub const MAX_SYMBOL_LENGTH: usize = 10;

/// Upper bound on `max_supply`.
///
/// The domain arena is allocated up front at initialization, and accounts
/// created through CPI are limited to 10 KiB. 100 domains at
/// `Domain::SIZE` bytes each stays well inside that.
pub const MAX_SUPPLY_LIMIT: u64 = 100;
