pub use blockchain::block::Block;
pub use blockchain::genesis::GenesisParams;
pub use blockchain::transaction::Transaction;
pub use blockchain::{Hash160, Hash256, PowAlgo};

pub use crate::bytes::Bytes;
pub use crate::commons::*;
pub use crate::context::Context;
pub use crate::error::ParamsError;
pub use crate::miner::{GenesisMiner, MineError, MinedGenesis};
pub use crate::params::{average_target_spacing, network_for_magic, ChainParams, ChainType};
pub use crate::settings::Settings;

pub mod blockchain;
pub mod commons;
pub mod miner;
pub mod context;
pub mod params;
pub mod settings;
pub mod bytes;
pub mod error;
pub mod ser;
