//! Credential persistence
//!
//! Defines the backing-store interface, the on-disk line format and the
//! flat file and in-memory backends.

pub mod backend;
pub mod flat_file;
pub mod format;
pub mod memory;
pub mod results;

pub use backend::CredentialBackend;
pub use flat_file::FlatFileBackend;
pub use memory::MemoryBackend;
pub use results::{CredentialRecord, CredentialSet, LoadReport};
