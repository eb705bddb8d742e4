use super::CliError;
use anyhow::Context;
use cfp_core::config::ModelConfig;
use cfp_core::domain::CfpPackage;
use cfp_core::modules::budget::DEFAULT_LIST_EXTENSION;
use cfp_core::modules::{NameFileUnits, NodeBudget, read_node_budget, update_name_file};
use serde::Serialize;
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct WriteArgs {
    /// JSON model configuration path
    #[arg(long, default_value = "cfp.json")]
    config: PathBuf,

    /// Also append the package registrations to `<model>.nam`
    #[arg(long)]
    update_nam: bool,
}

#[derive(clap::Args)]
pub(super) struct UpdateNamArgs {
    /// Model name; `<model>.nam` must already exist
    #[arg(value_name = "model")]
    model: String,

    /// Unit number for the COC file
    #[arg(long, default_value_t = CfpPackage::Coc.default_unit())]
    coc_unit: u32,

    /// Unit number for the CRCH file
    #[arg(long, default_value_t = CfpPackage::Crch.default_unit())]
    crch_unit: u32,

    /// Unit number for the CFP file
    #[arg(long, default_value_t = CfpPackage::Cfp.default_unit())]
    cfp_unit: u32,
}

impl UpdateNamArgs {
    fn units(&self) -> NameFileUnits {
        NameFileUnits {
            coc: self.coc_unit,
            crch: self.crch_unit,
            cfp: self.cfp_unit,
        }
    }
}

#[derive(clap::Args)]
pub(super) struct BudgetArgs {
    /// Model name; the list file is `<model><ext>`
    #[arg(value_name = "model")]
    model: String,

    /// 1-based conduit node number
    #[arg(long)]
    node: usize,

    /// List file extension, including the leading dot
    #[arg(long, default_value = DEFAULT_LIST_EXTENSION)]
    ext: String,

    /// Print the series as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct BudgetReport<'a> {
    model_name: &'a str,
    node: usize,
    #[serde(flatten)]
    budget: &'a NodeBudget,
}

pub(super) fn run_write_command(args: WriteArgs) -> Result<i32, CliError> {
    let config = ModelConfig::from_path(&args.config)?;
    tracing::debug!(
        config = %args.config.display(),
        model = %config.model_name,
        "loaded model config"
    );

    let written = config.write_inputs()?;
    for path in &written {
        tracing::info!(path = %path.display(), "wrote input file");
        println!("Wrote {}", path.display());
    }

    if args.update_nam {
        update_name_file(&config.model_name, &config.units)?;
        println!("Updated {}.nam", config.model_name);
    } else {
        tracing::debug!(model = %config.model_name, "name file left unchanged");
    }
    Ok(0)
}

pub(super) fn run_update_nam_command(args: UpdateNamArgs) -> Result<i32, CliError> {
    update_name_file(&args.model, &args.units())?;
    println!("Updated {}.nam", args.model);
    Ok(0)
}

pub(super) fn run_budget_command(args: BudgetArgs) -> Result<i32, CliError> {
    let budget = read_node_budget(&args.model, args.node, &args.ext)?;
    if budget.is_empty() {
        tracing::warn!(
            model = %args.model,
            ext = %args.ext,
            "list file contains no node water budget tables"
        );
    }
    if args.json {
        let report = BudgetReport {
            model_name: &args.model,
            node: args.node,
            budget: &budget,
        };
        let rendered =
            serde_json::to_string_pretty(&report).context("failed to render budget report")?;
        println!("{rendered}");
    } else {
        println!("{:>16} {:>16}", "time", "flow");
        for (time, flow) in budget.records() {
            println!("{time:>16} {flow:>16}");
        }
    }
    Ok(0)
}
