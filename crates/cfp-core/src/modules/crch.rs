//! CRCH: routes a fraction of diffuse recharge directly into conduit nodes,
//! one dataset per stress period.
//!
//! The `node fraction` table is built once from the configured nodes and is
//! written for every stress period whose flag is exactly `1`. Any other flag
//! value (including `-1`, which the simulator reads as "reuse the previous
//! period") is written alone. Per-period tables therefore never differ.

use super::serialization::format_real;
use super::traits::PackageBuilder;
use crate::domain::{CfpError, CfpPackage, CfpResult, DatasetBlock};
use serde::{Deserialize, Serialize};

pub const CRCH_PERIOD_PREFIX: &str = "IFLAG_RCH for stress period ";
pub const CRCH_TABLE_FLAG: i32 = 1;
pub const CRCH_REUSE_FLAG: i32 = -1;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RechargeRouting {
    pub node_numbers: Vec<u32>,
    pub stress_periods: Vec<u32>,
    pub flags: Vec<i32>,
    pub fractions: Vec<f64>,
}

impl RechargeRouting {
    pub fn new(
        node_numbers: Vec<u32>,
        stress_periods: Vec<u32>,
        flags: Vec<i32>,
        fractions: Vec<f64>,
    ) -> Self {
        Self {
            node_numbers,
            stress_periods,
            flags,
            fractions,
        }
    }

    pub fn fraction_table(&self) -> CfpResult<String> {
        let rows = self
            .node_numbers
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let fraction = self.fractions.get(index).ok_or_else(|| {
                    CfpError::input_validation(
                        "INPUT.CRCH_FRACTIONS",
                        format!(
                            "recharge fraction index {} out of range: {} fractions for {} nodes",
                            index,
                            self.fractions.len(),
                            self.node_numbers.len()
                        ),
                    )
                })?;
                Ok(format!("{} {}", node, format_real(*fraction)))
            })
            .collect::<CfpResult<Vec<_>>>()?;
        Ok(rows.join("\n"))
    }

    pub fn to_block(&self) -> CfpResult<DatasetBlock> {
        let table = self.fraction_table()?;

        let mut lines = Vec::with_capacity(self.stress_periods.len());
        for (index, period) in self.stress_periods.iter().enumerate() {
            let flag = self.flags.get(index).ok_or_else(|| {
                CfpError::input_validation(
                    "INPUT.CRCH_FLAGS",
                    format!(
                        "recharge flag index {} out of range: {} flags for {} stress periods",
                        index,
                        self.flags.len(),
                        self.stress_periods.len()
                    ),
                )
            })?;

            if *flag == CRCH_TABLE_FLAG {
                lines.push(format!("{CRCH_PERIOD_PREFIX}{period}\n{flag}\n{table}"));
            } else {
                lines.push(format!("{CRCH_PERIOD_PREFIX}{period}\n{flag}"));
            }
        }

        Ok(DatasetBlock::new(CfpPackage::Crch, lines))
    }
}

impl PackageBuilder for RechargeRouting {
    fn package(&self) -> CfpPackage {
        CfpPackage::Crch
    }

    fn build(&self) -> CfpResult<DatasetBlock> {
        self.to_block()
    }
}
