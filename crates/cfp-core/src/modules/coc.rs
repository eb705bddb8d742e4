//! COC: conduit output control.
//!
//! Selects the nodes whose head/flow series and the pipes whose flow/Reynolds
//! series the simulator writes, and the time-step interval for each.

use super::serialization::join_lines;
use super::traits::PackageBuilder;
use crate::domain::{CfpPackage, CfpResult, DatasetBlock};
use serde::{Deserialize, Serialize};

pub const COC_HEADER: &str = "#COC file: Mode 1 time series output";
pub const COC_NODE_COUNT_COMMENT: &str = "#Number of nodes for output";
pub const COC_NODE_NUMBERS_COMMENT: &str = "#Node numbers, one per line";
pub const COC_INTERVAL_COMMENT: &str = "#Output each n time steps";
pub const COC_PIPE_COUNT_COMMENT: &str = "#Number of pipes for output";
pub const COC_PIPE_NUMBERS_COMMENT: &str = "#Pipe numbers, one per line";

pub const COC_LINE_COUNT: usize = 13;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputControl {
    pub nnodes: u32,
    pub node_numbers: Vec<u32>,
    pub node_interval: u32,
    pub npipes: u32,
    pub pipe_numbers: Vec<u32>,
    #[serde(default = "default_pipe_interval")]
    pub pipe_interval: u32,
}

fn default_pipe_interval() -> u32 {
    1
}

impl OutputControl {
    pub fn new(
        nnodes: u32,
        node_numbers: Vec<u32>,
        node_interval: u32,
        npipes: u32,
        pipe_numbers: Vec<u32>,
    ) -> Self {
        Self {
            nnodes,
            node_numbers,
            node_interval,
            npipes,
            pipe_numbers,
            pipe_interval: default_pipe_interval(),
        }
    }

    pub fn with_pipe_interval(mut self, pipe_interval: u32) -> Self {
        self.pipe_interval = pipe_interval;
        self
    }

    // Counts are written as given; they are not checked against the lists.
    pub fn to_block(&self) -> DatasetBlock {
        let lines = vec![
            COC_HEADER.to_string(),
            COC_NODE_COUNT_COMMENT.to_string(),
            self.nnodes.to_string(),
            COC_NODE_NUMBERS_COMMENT.to_string(),
            join_lines(&self.node_numbers),
            COC_INTERVAL_COMMENT.to_string(),
            self.node_interval.to_string(),
            COC_PIPE_COUNT_COMMENT.to_string(),
            self.npipes.to_string(),
            COC_PIPE_NUMBERS_COMMENT.to_string(),
            join_lines(&self.pipe_numbers),
            COC_INTERVAL_COMMENT.to_string(),
            self.pipe_interval.to_string(),
        ];
        DatasetBlock::new(CfpPackage::Coc, lines)
    }
}

impl PackageBuilder for OutputControl {
    fn package(&self) -> CfpPackage {
        CfpPackage::Coc
    }

    fn build(&self) -> CfpResult<DatasetBlock> {
        Ok(self.to_block())
    }
}
