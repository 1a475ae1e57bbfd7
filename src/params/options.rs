use std::collections::HashMap;

use crate::bytes::Bytes;
use crate::params::{BuriedDeployment, DeploymentPos};

/// Overrides for the signet network
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SigNetOptions {
    /// Block signing challenge script, the default one is used if empty
    pub challenge: Option<Bytes>,
    pub seeds: Option<Vec<String>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionBitsParameters {
    pub start_time: i64,
    pub timeout: i64,
    pub min_activation_height: i32,
}

/// Overrides for the regression test network
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegTestOptions {
    pub version_bits_parameters: HashMap<DeploymentPos, VersionBitsParameters>,
    pub activation_heights: HashMap<BuriedDeployment, i32>,
    pub fastprune: bool,
}
