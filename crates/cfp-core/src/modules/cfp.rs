//! CFP: primary conduit-flow input (mode 1, pipes only).
//!
//! Dataset numbering follows the CFP input description. The network, node
//! elevation, pipe, node head and wall permeability tables are supplied as
//! pre-built text files and embedded verbatim.

use super::serialization::{format_real, format_real_trimmed};
use super::traits::PackageBuilder;
use crate::domain::{CfpError, CfpPackage, CfpResult, DatasetBlock};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CFP_LINE_COUNT: usize = 30;

const DS0_MODE: &str = "# mode";
const DS2_MODE1: &str = "#data for mode 1 conduit pipe system";
const DS3_COUNTS: &str = "#number of nodes / tubes / layers";
const DS5_TEMPERATURE: &str = "#temperature";
const DS7_NETWORK: &str = "#No mc mr ml Nb1 Nb2 Nb3 Nb4 Nb5 Nb6 tb1 tb2 tb3 tb4 tb5 tb6";
const DS9_ELEVATION: &str = "#elevation of conduit nodes. Two possibilities";
const DS10_ELEVATION_PER_NODE: &str = "#first: node # elevation (1 line for each node)";
const DS11_ELEVATION_CONSTANT: &str =
    "#second: nbrnodes elevaton (only one line used to assign constant value)";
const DS13_EXCHANGE_MODE: &str =
    "#surface dependent exchange (set 1) or constant exchange (set 0)";
const DS15_EPSILON: &str = "#criterion for convergence";
const DS17_NITER: &str = "#maximum number for loop iterations";
const DS19_RELAX: &str = "#parameter of relaxation";
const DS21_PRINT: &str = "#newton raphson print flag";
const DS23_TUBES: &str = "#data for tube parameters";
const DS24_TUBE_COLUMNS: &str = "#no. diameter tortuosity roughness lreynolds treynolds";
const DS26_NODE_HEADS: &str = "#node heads (if head unequal -1 the head is fixed)";
const DS28_EXCHANGE: &str = "#exchange terms for flow between continuum and pipe-network";

/// Externally prepared tables, in dataset order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkFiles {
    pub network_info: PathBuf,
    pub geoheight: PathBuf,
    pub pipe_info: PathBuf,
    pub node_head: PathBuf,
    pub wall_permeability: PathBuf,
}

impl NetworkFiles {
    pub fn resolve_against(&self, base: &Path) -> Self {
        Self {
            network_info: base.join(&self.network_info),
            geoheight: base.join(&self.geoheight),
            pipe_info: base.join(&self.pipe_info),
            node_head: base.join(&self.node_head),
            wall_permeability: base.join(&self.wall_permeability),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SolverSettings {
    pub mode: i32,
    pub temperature: f64,
    pub surface_exchange: i32,
    pub epsilon: f64,
    pub max_iterations: u32,
    pub relaxation: f64,
    pub newton_raphson_print: i32,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            mode: 1,
            temperature: 25.0,
            surface_exchange: 1,
            epsilon: 1.0e-5,
            max_iterations: 100,
            relaxation: 1.0,
            newton_raphson_print: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConduitNetwork {
    pub nnodes: u32,
    pub npipes: u32,
    pub nlayers: u32,
    pub files: NetworkFiles,
    #[serde(default)]
    pub settings: SolverSettings,
}

impl ConduitNetwork {
    pub fn new(nnodes: u32, npipes: u32, nlayers: u32, files: NetworkFiles) -> Self {
        Self {
            nnodes,
            npipes,
            nlayers,
            files,
            settings: SolverSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: SolverSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn to_block(&self) -> CfpResult<DatasetBlock> {
        let network_info = read_embedded_table(&self.files.network_info, "network info")?;
        let geoheight = read_embedded_table(&self.files.geoheight, "geoheight")?;
        let pipe_info = read_embedded_table(&self.files.pipe_info, "pipe info")?;
        let node_head = read_embedded_table(&self.files.node_head, "node head")?;
        let wall_permeability =
            read_embedded_table(&self.files.wall_permeability, "wall permeability")?;

        let settings = &self.settings;
        let lines = vec![
            DS0_MODE.to_string(),
            settings.mode.to_string(),
            DS2_MODE1.to_string(),
            DS3_COUNTS.to_string(),
            format!("{} {} {}", self.nnodes, self.npipes, self.nlayers),
            DS5_TEMPERATURE.to_string(),
            format_real(settings.temperature),
            DS7_NETWORK.to_string(),
            network_info,
            DS9_ELEVATION.to_string(),
            DS10_ELEVATION_PER_NODE.to_string(),
            DS11_ELEVATION_CONSTANT.to_string(),
            geoheight,
            DS13_EXCHANGE_MODE.to_string(),
            settings.surface_exchange.to_string(),
            DS15_EPSILON.to_string(),
            format_real(settings.epsilon),
            DS17_NITER.to_string(),
            settings.max_iterations.to_string(),
            DS19_RELAX.to_string(),
            format_real_trimmed(settings.relaxation),
            DS21_PRINT.to_string(),
            settings.newton_raphson_print.to_string(),
            DS23_TUBES.to_string(),
            DS24_TUBE_COLUMNS.to_string(),
            pipe_info,
            DS26_NODE_HEADS.to_string(),
            node_head,
            DS28_EXCHANGE.to_string(),
            wall_permeability,
        ];

        Ok(DatasetBlock::new(CfpPackage::Cfp, lines))
    }
}

impl PackageBuilder for ConduitNetwork {
    fn package(&self) -> CfpPackage {
        CfpPackage::Cfp
    }

    fn build(&self) -> CfpResult<DatasetBlock> {
        self.to_block()
    }
}

fn read_embedded_table(path: &Path, table_name: &str) -> CfpResult<String> {
    let source = fs::read_to_string(path).map_err(|source| {
        CfpError::io_system(
            "IO.CFP_INPUT_READ",
            format!(
                "failed to read CFP {} file '{}': {}",
                table_name,
                path.display(),
                source
            ),
        )
    })?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "embedded CFP {table_name} table");
    Ok(source)
}
