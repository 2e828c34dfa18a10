use prettytable::{Cell, Row, Table};

use crate::solver::strategy::StrategyKind;
use crate::sweep::SweepRecord;

/// Per-strategy aggregation over a sweep's records.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategySummary {
    pub strategy: StrategyKind,
    pub runs: usize,
    pub solved: usize,
    pub mean_iterations: f64,
    pub max_iterations: u64,
    pub mean_seconds: f64,
}

pub fn summarize(records: &[SweepRecord]) -> Vec<StrategySummary> {
    StrategyKind::ALL
        .iter()
        .map(|&strategy| {
            let mut runs = 0;
            let mut solved = 0;
            let mut total_iterations = 0u64;
            let mut max_iterations = 0u64;
            let mut total_seconds = 0.0;
            for record in records.iter().filter(|r| r.strategy == strategy) {
                runs += 1;
                solved += usize::from(record.solved);
                total_iterations += record.iterations;
                max_iterations = max_iterations.max(record.iterations);
                total_seconds += record.seconds;
            }
            let (mean_iterations, mean_seconds) = if runs > 0 {
                (
                    total_iterations as f64 / runs as f64,
                    total_seconds / runs as f64,
                )
            } else {
                (0.0, 0.0)
            };
            StrategySummary {
                strategy,
                runs,
                solved,
                mean_iterations,
                max_iterations,
                mean_seconds,
            }
        })
        .collect()
}

pub fn render_summary_table(summaries: &[StrategySummary]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Strategy"),
        Cell::new("Runs"),
        Cell::new("Solved"),
        Cell::new("Mean Iterations"),
        Cell::new("Max Iterations"),
        Cell::new("Mean Time (ms)"),
    ]));

    for summary in summaries {
        table.add_row(Row::new(vec![
            Cell::new(summary.strategy.name()),
            Cell::new(&summary.runs.to_string()),
            Cell::new(&summary.solved.to_string()),
            Cell::new(&format!("{:.2}", summary.mean_iterations)),
            Cell::new(&summary.max_iterations.to_string()),
            Cell::new(&format!("{:.3}", summary.mean_seconds * 1000.0)),
        ]));
    }

    table.to_string()
}
