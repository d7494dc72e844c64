use lockstep_diff::config::Config;
use lockstep_diff::differ::line_diff::SimilarLineDiff;
use lockstep_diff::differ::{Differ, LineResult, ProcessOutcome, Side};
use std::fs;
use std::process::ExitCode;
use std::sync::Arc;

const COLUMN_WIDTH: usize = 40;

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let mut args = std::env::args().skip(1);
    let (Some(left), Some(right)) = (args.next(), args.next()) else {
        eprintln!("Usage: lockstep-diff <left> <right>");
        return ExitCode::from(2);
    };

    match run(&left, &right) {
        Ok(ProcessOutcome::NoDifference) => ExitCode::SUCCESS,
        Ok(ProcessOutcome::Changed) => ExitCode::from(1),
        Err(e) => {
            eprintln!("lockstep-diff: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(left: &str, right: &str) -> Result<ProcessOutcome, Box<dyn std::error::Error>> {
    let source = fs::read_to_string(left)?;
    let target = fs::read_to_string(right)?;
    let settings = Config::default().settings;

    let mut differ = Differ::with_algorithm(SimilarLineDiff::new(settings.algorithm))
        .with_style(settings.preview);
    differ.set_buffer_views(Arc::new(source.clone()), Arc::new(target.clone()));
    let outcome = differ.process()?;

    let lhs_lines: Vec<&str> = source.lines().collect();
    let rhs_lines: Vec<&str> = target.lines().collect();

    for row in 0..differ.lhs_diff().len() {
        println!(
            "{} | {}",
            cell(&differ, Side::Lhs, row, &lhs_lines),
            cell(&differ, Side::Rhs, row, &rhs_lines)
        );
    }

    let stats = differ.stats();
    println!(
        "\n{} unchanged, {} inserted, {} deleted",
        stats.unchanged, stats.inserted, stats.deleted
    );

    Ok(outcome)
}

/// One side of a table row: original line number, marker and text
fn cell(differ: &Differ, side: Side, row: usize, lines: &[&str]) -> String {
    let line = differ.diff(side)[row];
    let original = differ
        .diff_to_original_position(side, row)
        .filter(|_| !line.is_padding());

    let Some(n) = original else {
        return format!("{:>5}   {:<width$}", "", "", width = COLUMN_WIDTH);
    };

    let marker = match line.result {
        LineResult::Inserted => '+',
        LineResult::Deleted => '-',
        LineResult::Unchanged | LineResult::Padding => ' ',
    };
    let text: String = lines
        .get(n)
        .map(|text| text.chars().take(COLUMN_WIDTH).collect())
        .unwrap_or_default();

    format!("{:>5} {} {:<width$}", n + 1, marker, text, width = COLUMN_WIDTH)
}
