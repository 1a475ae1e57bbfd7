#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::commons::LOG_TARGET_MAIN;
use crate::error::ParamsError;
use crate::miner::GenesisMiner;
use crate::params::ChainParams;
use crate::Settings;

pub struct Context {
    pub app_version: String,
    pub settings: Settings,
    pub params: ChainParams,
}

impl Context {
    /// Builds the parameters of the network selected in settings
    pub fn new(app_version: String, settings: Settings) -> Result<Context, ParamsError> {
        let chain_type = settings.chain_type()?;
        let signet = settings.signet_options()?;
        let regtest = settings.regtest_options()?;
        let params = ChainParams::new(chain_type, &signet, &regtest);
        debug!(target: LOG_TARGET_MAIN, "Selected {} chain with genesis {}", chain_type, params.genesis_hash());
        Ok(Context { app_version, settings, params })
    }

    pub fn get_params(&self) -> &ChainParams {
        &self.params
    }

    pub fn miner(&self) -> GenesisMiner {
        GenesisMiner::new(self.settings.mining.threads)
    }
}
