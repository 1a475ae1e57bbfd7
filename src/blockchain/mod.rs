pub use block::{Block, PureHeader};
pub use genesis::{build_genesis, ensure_genesis, verify_genesis, GenesisParams};
pub use pow::{PowData, PowHasher, Sha256dHasher};
pub use script::Script;
pub use transaction::Transaction;
pub use types::*;

pub mod block;
pub mod genesis;
pub mod hash_utils;
pub mod pow;
pub mod script;
pub mod transaction;
pub mod types;
