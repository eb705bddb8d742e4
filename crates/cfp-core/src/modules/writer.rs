use super::serialization::write_dataset_lines;
use crate::domain::{CfpError, CfpPackage, CfpResult, DatasetBlock};
use std::path::{Path, PathBuf};

pub const DEFAULT_SUFFIXES: [&str; 3] = [
    CfpPackage::Coc.default_suffix(),
    CfpPackage::Crch.default_suffix(),
    CfpPackage::Cfp.default_suffix(),
];

/// `<model>.<suffix>`; the model name may carry a directory prefix.
pub fn model_file_path(model_name: &str, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{model_name}.{suffix}"))
}

pub fn write_input_files(model_name: &str, blocks: &[DatasetBlock]) -> CfpResult<Vec<PathBuf>> {
    write_input_files_with_suffixes(model_name, blocks, &DEFAULT_SUFFIXES)
}

/// Writes each block to `<model>.<suffix>`, truncating existing files.
pub fn write_input_files_with_suffixes(
    model_name: &str,
    blocks: &[DatasetBlock],
    suffixes: &[&str],
) -> CfpResult<Vec<PathBuf>> {
    if blocks.len() != suffixes.len() {
        return Err(CfpError::input_validation(
            "INPUT.WRITER_FILE_COUNT",
            format!(
                "{} dataset blocks cannot be paired with {} file suffixes",
                blocks.len(),
                suffixes.len()
            ),
        ));
    }

    let mut written = Vec::with_capacity(blocks.len());
    for (block, suffix) in blocks.iter().zip(suffixes) {
        let path = model_file_path(model_name, suffix);
        write_block(&path, block)?;
        written.push(path);
    }
    Ok(written)
}

fn write_block(path: &Path, block: &DatasetBlock) -> CfpResult<()> {
    write_dataset_lines(path, block.lines()).map_err(|source| {
        CfpError::io_system(
            "IO.WRITER_OUTPUT",
            format!(
                "failed to write {} file '{}': {}",
                block.package(),
                path.display(),
                source
            ),
        )
    })?;
    tracing::debug!(
        package = %block.package(),
        path = %path.display(),
        lines = block.len(),
        "wrote dataset block"
    );
    Ok(())
}
