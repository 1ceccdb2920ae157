/// Output formatting: terminal tables and JSON.
use outrank_core::{AhpResult, ElectreResult, PrometheeResult};
use serde::Serialize;

/// Print any result as pretty JSON, mirroring the result record one-to-one.
pub fn print_json<T: Serialize>(result: &T) {
    println!("{}", serde_json::to_string_pretty(result).unwrap());
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(str::len).max().unwrap_or(11).max(11) // at least "Alternative"
}

/// PROMETHEE ranking table with the three flows per alternative.
pub fn print_promethee_table(result: &PrometheeResult) {
    let width = name_width(result.ranking.iter().map(|r| r.alternative.as_str()));

    println!(" # | {:<width$} |      φ+ |      φ- |  Net flow", "Alternative");
    println!("---|-{}-|---------|---------|----------", "-".repeat(width));
    for r in &result.ranking {
        println!(
            "{:>2} | {:<width$} | {:>7.4} | {:>7.4} | {:>+9.4}",
            r.rank, r.alternative, r.positive_flow, r.negative_flow, r.net_flow,
        );
    }
}

/// AHP ranking table plus criteria weights and consistency verdicts.
pub fn print_ahp_table(result: &AhpResult, criteria_names: &[String]) {
    let width = name_width(result.ranking.iter().map(|r| r.alternative.as_str()));

    println!(" # | {:<width$} |   Score", "Alternative");
    println!("---|-{}-|--------", "-".repeat(width));
    for r in &result.ranking {
        println!("{:>2} | {:<width$} | {:>6.4}", r.rank, r.alternative, r.score);
    }

    println!("\nCriteria weights:");
    for (name, weight) in criteria_names.iter().zip(&result.criteria_weights) {
        println!("  {name}: {:.1}%", weight * 100.0);
    }

    let c = &result.criteria_consistency;
    println!(
        "\nCriteria matrix consistency: CR = {:.4} (λmax = {:.4}, CI = {:.4}) — {}",
        c.consistency_ratio,
        c.lambda_max,
        c.consistency_index,
        verdict(c.is_acceptable()),
    );
    for (name, c) in criteria_names.iter().zip(&result.alternative_consistency) {
        println!(
            "  {name} matrix: CR = {:.4} — {}",
            c.consistency_ratio,
            verdict(c.is_acceptable()),
        );
    }
}

fn verdict(acceptable: bool) -> &'static str {
    if acceptable {
        "acceptable"
    } else {
        "needs review (CR >= 0.1)"
    }
}

/// ELECTRE dominance table plus the kernel.
pub fn print_electre_table(result: &ElectreResult) {
    let width = name_width(result.ranking.iter().map(|r| r.alternative.as_str()));

    println!(" # | {:<width$} | Outranks | Outranked by | Net", "Alternative");
    println!("---|-{}-|----------|--------------|-----", "-".repeat(width));
    for r in &result.ranking {
        println!(
            "{:>2} | {:<width$} | {:>8} | {:>12} | {:>+4}",
            r.rank, r.alternative, r.outranks, r.outranked_by, r.net_dominance,
        );
    }

    println!(
        "\nThresholds: concordance >= {}, discordance <= {}",
        result.thresholds.concordance, result.thresholds.discordance,
    );
    if result.kernel.is_empty() {
        println!("Kernel: empty (cyclic outranking relation)");
    } else {
        println!("Kernel: {}", result.kernel.join(", "));
    }
}
