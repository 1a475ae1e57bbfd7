use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use serde::{Deserialize, Serialize};

use crate::bytes::Bytes;
use crate::commons::LOG_TARGET_MAIN;
use crate::error::ParamsError;
use crate::params::{BuriedDeployment, ChainType, DeploymentPos, RegTestOptions, SigNetOptions, VersionBitsParameters};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_chain")]
    pub chain: String,
    #[serde(default)]
    pub signet: SigNet,
    #[serde(default)]
    pub regtest: RegTest,
    #[serde(default)]
    pub mining: Mining,
}

impl Settings {
    /// Loads settings from a TOML file, creating it with default values if it doesn't exist
    pub fn load(filename: &str) -> Result<Settings, ParamsError> {
        match File::open(filename) {
            Ok(mut file) => {
                let mut text = String::new();
                file.read_to_string(&mut text).map_err(|e| ParamsError::Settings(format!("{}: {}", filename, e)))?;
                Settings::parse(&text)
            }
            Err(..) => {
                let settings = Settings::default();
                let string = toml::to_string(&settings).map_err(|e| ParamsError::Settings(e.to_string()))?;
                match File::create(filename) {
                    Ok(mut f) => {
                        if let Err(e) = f.write_all(string.as_bytes()) {
                            error!(target: LOG_TARGET_MAIN, "Error saving settings file: {}", e);
                        }
                    }
                    Err(_) => { error!(target: LOG_TARGET_MAIN, "Error saving settings file!"); }
                }
                Ok(settings)
            }
        }
    }

    pub fn parse(text: &str) -> Result<Settings, ParamsError> {
        toml::from_str(text).map_err(|e| ParamsError::Settings(e.to_string()))
    }

    pub fn chain_type(&self) -> Result<ChainType, ParamsError> {
        self.chain.parse()
    }

    pub fn signet_options(&self) -> Result<SigNetOptions, ParamsError> {
        let challenge = match &self.signet.challenge {
            None => None,
            Some(hex) => Some(Bytes::from_hex(hex)?)
        };
        Ok(SigNetOptions { challenge, seeds: self.signet.seeds.clone() })
    }

    pub fn regtest_options(&self) -> Result<RegTestOptions, ParamsError> {
        let mut options = RegTestOptions { fastprune: self.regtest.fastprune, ..RegTestOptions::default() };
        for (name, height) in &self.regtest.activation_heights {
            let dep: BuriedDeployment = name.parse()?;
            options.activation_heights.insert(dep, activation_height(name, *height)?);
        }
        for deployment in &self.regtest.deployments {
            let pos: DeploymentPos = deployment.name.parse()?;
            let parameters = VersionBitsParameters {
                start_time: deployment.start_time,
                timeout: deployment.timeout,
                min_activation_height: deployment.min_activation_height
            };
            options.version_bits_parameters.insert(pos, parameters);
        }
        Ok(options)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            chain: default_chain(),
            signet: SigNet::default(),
            regtest: RegTest::default(),
            mining: Mining::default()
        }
    }
}

/// Heights are non-negative and fit into i32, -1 disables the deployment
fn activation_height(name: &str, height: i64) -> Result<i32, ParamsError> {
    match height {
        -1 => Ok(i32::MAX),
        h if (0..i32::MAX as i64).contains(&h) => Ok(h as i32),
        h => Err(ParamsError::InvalidActivationHeight { deployment: name.to_owned(), height: h })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigNet {
    /// Hex encoded challenge script
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seeds: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegTest {
    #[serde(default)]
    pub fastprune: bool,
    #[serde(default)]
    pub deployments: Vec<Deployment>,
    /// Buried deployment heights by name, -1 disables
    #[serde(default)]
    pub activation_heights: HashMap<String, i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub name: String,
    pub start_time: i64,
    #[serde(default = "default_timeout")]
    pub timeout: i64,
    #[serde(default)]
    pub min_activation_height: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mining {
    /// Zero means one thread per CPU
    #[serde(default)]
    pub threads: usize,
}

fn default_chain() -> String {
    ChainType::Main.name().to_owned()
}

fn default_timeout() -> i64 {
    crate::params::Bip9Deployment::NO_TIMEOUT
}
