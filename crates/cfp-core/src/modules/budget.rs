//! Node water budget extraction from the simulation list file.
//!
//! Each `NODE WATER BUDGET` table in the list file is a fixed-width block: the
//! total simulation time sits two lines below the marker and the per-node rows
//! start six lines below it. The column ranges below are the list-file layout
//! and are read as-is.

use crate::domain::{CfpError, ParserResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::Range;

pub const NODE_BUDGET_MARKER: &str = "NODE WATER BUDGET";
pub const DEFAULT_LIST_EXTENSION: &str = ".list";

pub const TIME_LINE_OFFSET: usize = 2;
pub const TIME_COLUMNS: Range<usize> = 24..30;
/// Line offset of the row for node `n` is `FLOW_ROW_BASE_OFFSET + n`.
pub const FLOW_ROW_BASE_OFFSET: usize = 6;
pub const FLOW_COLUMNS: Range<usize> = 7..17;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NodeBudget {
    pub times: Vec<f64>,
    pub flows: Vec<f64>,
}

impl NodeBudget {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.flows.iter().copied())
    }
}

/// Reads `<model><extension>` and extracts the series for the 1-based `node`.
pub fn read_node_budget(model_name: &str, node: usize, extension: &str) -> ParserResult<NodeBudget> {
    let path = format!("{model_name}{extension}");
    let source = fs::read_to_string(&path).map_err(|source| {
        CfpError::io_system(
            "IO.BUDGET_LIST_READ",
            format!("failed to read list file '{}': {}", path, source),
        )
    })?;

    let budget = parse_node_budget(&source, node)?;
    tracing::info!(
        path = %path,
        node,
        records = budget.len(),
        "extracted node water budget"
    );
    Ok(budget)
}

pub fn read_default_node_budget(model_name: &str, node: usize) -> ParserResult<NodeBudget> {
    read_node_budget(model_name, node, DEFAULT_LIST_EXTENSION)
}

pub fn parse_node_budget(source: &str, node: usize) -> ParserResult<NodeBudget> {
    let lines: Vec<&str> = source.lines().collect();
    let mut budget = NodeBudget::default();

    for (marker_index, line) in lines.iter().enumerate() {
        if !line.contains(NODE_BUDGET_MARKER) {
            continue;
        }

        let time = read_column_value(
            &lines,
            marker_index.checked_add(TIME_LINE_OFFSET),
            TIME_COLUMNS,
            "PARSE.BUDGET_TIME",
            "time",
        )?;
        let flow = read_column_value(
            &lines,
            marker_index
                .checked_add(FLOW_ROW_BASE_OFFSET)
                .and_then(|index| index.checked_add(node)),
            FLOW_COLUMNS,
            "PARSE.BUDGET_FLOW",
            "flow",
        )?;

        budget.times.push(time);
        budget.flows.push(flow);
    }

    Ok(budget)
}

/// `line_index` is `None` when the offset from the marker overflows.
fn read_column_value(
    lines: &[&str],
    line_index: Option<usize>,
    columns: Range<usize>,
    placeholder: &'static str,
    field: &str,
) -> ParserResult<f64> {
    let (line_index, line) = line_index
        .and_then(|index| lines.get(index).map(|line| (index, line)))
        .ok_or_else(|| {
            let requested = line_index
                .and_then(|index| index.checked_add(1))
                .map_or_else(|| "beyond usize range".to_string(), |line| line.to_string());
            CfpError::input_validation(
                "INPUT.BUDGET_LINE_RANGE",
                format!(
                    "{} line {} is past the end of the list file ({} lines)",
                    field,
                    requested,
                    lines.len()
                ),
            )
        })?;

    let text = column_slice(line, columns.clone());
    text.trim().parse::<f64>().map_err(|_| {
        CfpError::parse(
            placeholder,
            format!(
                "non-numeric {} '{}' in columns {}..{} of line {}",
                field,
                text,
                columns.start,
                columns.end,
                line_index + 1
            ),
        )
    })
}

/// Character columns `[start, end)` clamped to the line length.
fn column_slice(line: &str, columns: Range<usize>) -> String {
    line.chars()
        .skip(columns.start)
        .take(columns.end.saturating_sub(columns.start))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{FLOW_ROW_BASE_OFFSET, NODE_BUDGET_MARKER, column_slice, parse_node_budget};
    use crate::domain::CfpErrorCategory;

    fn budget_table(time: &str, flows: &[&str]) -> String {
        let mut table = vec![
            format!("          {NODE_BUDGET_MARKER} FOR TIME STEP 1"),
            String::new(),
            format!("{:<24}{:>6}", " TOTAL SIMULATION TIME", time),
            " ---------------------------".to_string(),
            "  NODE   FLOW".to_string(),
            "         (L3/T)".to_string(),
            " ---------------------------".to_string(),
        ];
        for (index, flow) in flows.iter().enumerate() {
            table.push(format!("{:>7}{:>10}   0.0", index + 1, flow));
        }
        table.join("\n")
    }

    #[test]
    fn column_slice_clamps_to_line_length() {
        assert_eq!(column_slice("abcdef", 2..4), "cd");
        assert_eq!(column_slice("abc", 2..10), "c");
        assert_eq!(column_slice("abc", 5..10), "");
    }

    #[test]
    fn extracts_one_record_per_marker() {
        let source = [
            "HEADER LINE",
            &budget_table("1.5", &["-0.25", "3.0E-2"]),
            "",
            &budget_table("30.0", &["-1.5", "4.5"]),
        ]
        .join("\n");

        let first = parse_node_budget(&source, 1).expect("budget should parse");
        assert_eq!(first.times, [1.5, 30.0]);
        assert_eq!(first.flows, [-0.25, -1.5]);

        let second = parse_node_budget(&source, 2).expect("budget should parse");
        assert_eq!(second.flows, [3.0e-2, 4.5]);
        assert_eq!(second.records().collect::<Vec<_>>(), [(1.5, 3.0e-2), (30.0, 4.5)]);
    }

    #[test]
    fn file_without_markers_yields_empty_series() {
        let budget = parse_node_budget("no budget here\n", 1).expect("budget should parse");
        assert!(budget.is_empty());
        assert!(budget.flows.is_empty());
    }

    #[test]
    fn truncated_table_is_a_range_error() {
        let source = budget_table("2.0", &["1.0"]);
        let error = parse_node_budget(&source, 3).expect_err("node 3 row is missing");

        assert_eq!(error.category(), CfpErrorCategory::InputValidationError);
        assert_eq!(error.placeholder(), "INPUT.BUDGET_LINE_RANGE");
    }

    #[test]
    fn node_offset_overflow_is_a_range_error() {
        let source = budget_table("2.0", &["1.0"]);
        let error = parse_node_budget(&source, usize::MAX).expect_err("offset overflows usize");

        assert_eq!(error.category(), CfpErrorCategory::InputValidationError);
        assert_eq!(error.placeholder(), "INPUT.BUDGET_LINE_RANGE");
        assert!(error.message().contains("beyond usize range"));
    }

    #[test]
    fn node_offset_just_past_usize_end_is_a_range_error() {
        let source = budget_table("2.0", &["1.0"]);
        let node = usize::MAX - FLOW_ROW_BASE_OFFSET;
        let error = parse_node_budget(&source, node).expect_err("row index is far past the end");

        assert_eq!(error.placeholder(), "INPUT.BUDGET_LINE_RANGE");
    }

    #[test]
    fn non_numeric_time_is_a_parse_error() {
        let source = budget_table("abc", &["1.0"]);
        let error = parse_node_budget(&source, 1).expect_err("time is not numeric");

        assert_eq!(error.category(), CfpErrorCategory::ParseError);
        assert_eq!(error.placeholder(), "PARSE.BUDGET_TIME");
    }

    #[test]
    fn later_bad_table_discards_earlier_records() {
        let source = [budget_table("1.0", &["2.0"]), budget_table("2.0", &["oops"])].join("\n");
        let error = parse_node_budget(&source, 1).expect_err("second flow is not numeric");
        assert_eq!(error.placeholder(), "PARSE.BUDGET_FLOW");
    }
}
