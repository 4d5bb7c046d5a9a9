// Colored terminal output for vocabulary profiles, ranks and relevance.
//
// This module handles all terminal-specific formatting. The main.rs command
// handlers delegate here.

use colored::Colorize;

use super::score_bar;
use crate::vocabulary::Vocabulary;

const BAR_WIDTH: usize = 20;

/// Display the highest-ranked words of a vocabulary as a bar chart.
pub fn display_profile(vocabulary: &Vocabulary, top_n: usize) {
    if vocabulary.is_empty() {
        println!("Vocabulary is empty. Nothing to profile.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Vocabulary Profile ({} distinct words, max count {}, longest word {} chars) ===",
            vocabulary.len(),
            vocabulary.max(),
            vocabulary.max_length()
        )
        .bold()
    );
    println!();

    for (i, (word, rank)) in vocabulary.top(top_n).iter().enumerate() {
        println!(
            "  {:>3}. {:<24} {} {:.3}  {}",
            i + 1,
            word.bold(),
            colorize_bar(*rank),
            rank,
            format!("x{}", vocabulary.count(word)).dimmed()
        );
    }
    println!();
}

/// Display the rank of each requested word.
pub fn display_ranks(vocabulary: &Vocabulary, words: &[String]) {
    for word in words {
        let rank = vocabulary.rank(word);
        let label = if rank > 0.0 {
            word.normal()
        } else {
            word.dimmed()
        };
        println!("  {:<24} {} {:.3}", label, colorize_bar(rank), rank);
    }
}

/// Display words in rank order, unranked words dimmed.
pub fn display_order(vocabulary: &Vocabulary, ordered: &[String]) {
    if ordered.is_empty() {
        println!("No words to order.");
        return;
    }
    for (i, word) in ordered.iter().enumerate() {
        let rank = vocabulary.rank(word);
        if rank > 0.0 {
            println!("  {:>3}. {:<24} {:.3}", i + 1, word, rank);
        } else {
            println!("  {:>3}. {}", i + 1, word.dimmed());
        }
    }
}

/// Display relevance in both directions between two named vocabularies.
pub fn display_relevance(name_a: &str, a: &Vocabulary, name_b: &str, b: &Vocabulary) {
    println!("\n{}", "=== Relevance ===".bold());
    println!();

    let a_in_b = a.relevance_of(b);
    let b_in_a = b.relevance_of(a);
    println!(
        "  {:<40} {} {:.3}",
        format!("{name_a} understood by {name_b}"),
        colorize_bar(a_in_b),
        a_in_b
    );
    println!(
        "  {:<40} {} {:.3}",
        format!("{name_b} understood by {name_a}"),
        colorize_bar(b_in_a),
        b_in_a
    );
    println!();
}

/// Color a score bar by magnitude.
fn colorize_bar(score: f64) -> colored::ColoredString {
    let bar = score_bar(score, BAR_WIDTH);
    if score >= 0.5 {
        bar.bright_green()
    } else if score >= 0.1 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    }
}
