use super::serialization::append_to_existing;
use super::writer::model_file_path;
use crate::domain::{CfpError, CfpPackage, CfpResult};
use serde::{Deserialize, Serialize};

pub const NAME_FILE_SUFFIX: &str = "nam";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NameFileUnits {
    pub coc: u32,
    pub crch: u32,
    pub cfp: u32,
}

impl Default for NameFileUnits {
    fn default() -> Self {
        Self {
            coc: CfpPackage::Coc.default_unit(),
            crch: CfpPackage::Crch.default_unit(),
            cfp: CfpPackage::Cfp.default_unit(),
        }
    }
}

impl NameFileUnits {
    pub fn unit_for(&self, package: CfpPackage) -> u32 {
        match package {
            CfpPackage::Coc => self.coc,
            CfpPackage::Crch => self.crch,
            CfpPackage::Cfp => self.cfp,
        }
    }
}

pub fn name_file_entry(model_name: &str, package: CfpPackage, unit: u32) -> String {
    format!(
        "{}{:>width$}  {}.{}",
        package.as_str(),
        unit,
        model_name,
        package.default_suffix(),
        width = package.unit_field_width()
    )
}

pub fn name_file_entries(model_name: &str, units: &NameFileUnits) -> Vec<String> {
    CfpPackage::ALL
        .iter()
        .map(|package| name_file_entry(model_name, *package, units.unit_for(*package)))
        .collect()
}

/// Registers the COC, CRCH and CFP files at the end of `<model>.nam`.
/// The name file must already exist.
pub fn update_name_file(model_name: &str, units: &NameFileUnits) -> CfpResult<()> {
    let path = model_file_path(model_name, NAME_FILE_SUFFIX);
    let mut content = String::new();
    for entry in name_file_entries(model_name, units) {
        content.push_str(&entry);
        content.push('\n');
    }

    append_to_existing(&path, &content).map_err(|source| {
        CfpError::io_system(
            "IO.NAME_FILE_APPEND",
            format!(
                "failed to append CFP packages to name file '{}': {}",
                path.display(),
                source
            ),
        )
    })?;
    tracing::info!(
        path = %path.display(),
        coc = units.coc,
        crch = units.crch,
        cfp = units.cfp,
        "registered CFP packages in name file"
    );
    Ok(())
}
