//! Flat-file infrastructure for the quoting system
//!
//! Two stores, both plain files:
//! - the startup defaults file (policy seed + rate constants), read once at
//!   startup and rewritten after each completed policy
//! - the append-only policy register, one versioned JSON record per line

pub mod defaults;
pub mod error;
pub mod register;

pub use defaults::StartupDefaults;
pub use error::StoreError;
pub use register::{PolicyRegister, RegisterRecord, REGISTER_SCHEMA_VERSION};
