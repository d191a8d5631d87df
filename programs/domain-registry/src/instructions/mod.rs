#![allow(ambiguous_glob_reexports)]

pub mod claim_domain;
pub mod initialize;
pub mod list_domain;
pub mod views;
pub mod withdraw;

pub use claim_domain::*;
pub use initialize::*;
pub use list_domain::*;
pub use views::*;
pub use withdraw::*;
