use crate::domain::{CfpPackage, CfpResult, DatasetBlock};

pub trait PackageBuilder {
    fn package(&self) -> CfpPackage;

    fn build(&self) -> CfpResult<DatasetBlock>;
}

/// Builds the COC, CRCH and CFP blocks in the order the file writer expects.
pub fn build_packages(builders: &[&dyn PackageBuilder]) -> CfpResult<Vec<DatasetBlock>> {
    builders.iter().map(|builder| builder.build()).collect()
}
