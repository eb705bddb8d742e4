//! JSON model configuration for a complete CFP input set.
//!
//! ```json
//! {
//!   "model_name": "out/karst",
//!   "output_control": { "nnodes": 2, "node_numbers": [1, 5], "node_interval": 10,
//!                       "npipes": 1, "pipe_numbers": [3] },
//!   "recharge": { "node_numbers": [1, 5], "stress_periods": [1, 2],
//!                 "flags": [1, -1], "fractions": [0.5, 0.5] },
//!   "network": { "nnodes": 5, "npipes": 4, "nlayers": 1,
//!                "files": { "network_info": "network.txt", "geoheight": "geoheight.txt",
//!                           "pipe_info": "pipes.txt", "node_head": "heads.txt",
//!                           "wall_permeability": "kexch.txt" } },
//!   "units": { "coc": 16, "crch": 18, "cfp": 17 }
//! }
//! ```
//!
//! Table paths under `network.files` are relative to the configuration file;
//! `model_name` is used as given.

use crate::domain::{CfpError, CfpResult, DatasetBlock};
use crate::modules::{
    ConduitNetwork, NameFileUnits, OutputControl, PackageBuilder, RechargeRouting,
    build_packages, write_input_files,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelConfig {
    pub model_name: String,
    pub output_control: OutputControl,
    pub recharge: RechargeRouting,
    pub network: ConduitNetwork,
    #[serde(default)]
    pub units: NameFileUnits,
}

impl ModelConfig {
    pub fn from_path(path: &Path) -> CfpResult<Self> {
        let source = fs::read_to_string(path).map_err(|source| {
            CfpError::io_system(
                "IO.MODEL_CONFIG_READ",
                format!("failed to read model config '{}': {}", path.display(), source),
            )
        })?;
        let mut config = Self::from_json(&source).map_err(|error| {
            CfpError::parse(
                error.placeholder(),
                format!("{} ({})", error.message(), path.display()),
            )
        })?;

        if let Some(base) = path.parent() {
            config.network.files = config.network.files.resolve_against(base);
        }
        Ok(config)
    }

    pub fn from_json(source: &str) -> CfpResult<Self> {
        serde_json::from_str(source).map_err(|source| {
            CfpError::parse(
                "PARSE.MODEL_CONFIG",
                format!("invalid model config: {}", source),
            )
        })
    }

    pub fn build_blocks(&self) -> CfpResult<Vec<DatasetBlock>> {
        let builders: [&dyn PackageBuilder; 3] =
            [&self.output_control, &self.recharge, &self.network];
        build_packages(&builders)
    }

    pub fn write_inputs(&self) -> CfpResult<Vec<PathBuf>> {
        let blocks = self.build_blocks()?;
        write_input_files(&self.model_name, &blocks)
    }
}
