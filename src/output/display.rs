//! Display functions for command results

use super::formatters::{colorize_feedback, feedback_to_emoji, word_list};
use crate::commands::{AnalysisResult, ScoreResult};
use colored::Colorize;

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} against {}",
        result.guess.to_uppercase().bright_yellow().bold(),
        result.secret.to_uppercase().bright_yellow().bold()
    );
    println!(
        "   {}   {}",
        colorize_feedback(&result.feedback),
        feedback_to_emoji(&result.feedback)
    );
}

/// Print how a guess splits the word list
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.guess.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} candidates split into {} groups:\n",
        result.total_candidates,
        result.groups.len()
    );

    for group in &result.groups {
        let marker = if group.chosen {
            "→".bright_red().bold()
        } else {
            " ".normal()
        };
        println!(
            " {marker} {} {}  {:3} {}  {}",
            colorize_feedback(&group.feedback),
            feedback_to_emoji(&group.feedback),
            group.members.len(),
            "words".bright_black(),
            word_list(&group.members)
        );
    }

    if let Some(chosen) = result.chosen() {
        println!(
            "\n{} {} candidates",
            "Adversary keeps".bright_cyan().bold(),
            format!("{}", chosen.members.len()).bright_yellow()
        );
    }
}
