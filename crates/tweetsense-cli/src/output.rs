//! Output formatting utilities

use colored::Colorize;
use tweetsense::model_selection::SelectionResult;
use tweetsense::pipeline::PipelineReport;

/// Print a section header
pub(crate) fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Print one C search as a table of fold statistics, marking the chosen row.
pub(crate) fn selection_table(selection: &SelectionResult) {
    section(&format!("Hyperparameter selection ({})", selection.metric));
    println!(
        "  {:>10}  {:>8}  {:>8}  {:>8}  {:>8}",
        "C".bold(),
        "mean".bold(),
        "std".bold(),
        "min".bold(),
        "max".bold()
    );
    for candidate in &selection.candidates {
        let row = format!(
            "  {:>10.4}  {:>8.4}  {:>8.4}  {:>8.4}  {:>8.4}",
            candidate.c, candidate.score, candidate.std, candidate.min, candidate.max
        );
        if candidate.c == selection.best_c {
            println!("{}  {}", row.green(), "<- best".green());
        } else {
            println!("{row}");
        }
    }
    kv("best C", format_c(selection.best_c));
}

/// Print a full pipeline report.
pub(crate) fn report(report: &PipelineReport) {
    section("Data");
    kv(
        "feature matrix",
        format!("{} x {}", report.n_examples, report.n_features),
    );
    kv("train / test", format!("{} / {}", report.n_train, report.n_test));
    let folds = if report.stratified {
        format!("{} (stratified)", report.n_folds)
    } else {
        report.n_folds.to_string()
    };
    kv("folds", folds);

    for selection in &report.selections {
        selection_table(selection);
    }

    section(&format!(
        "Held-out performance (C = {})",
        format_c(report.final_c)
    ));
    for score in &report.test_scores {
        kv(score.metric.name(), format!("{:.4}", score.score));
    }
}

/// Shortest readable form of a grid value: `0.001`, `1`, `100`.
pub(crate) fn format_c(c: f32) -> String {
    format!("{c}")
}
