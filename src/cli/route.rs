//! Scoring, routing and model lookup commands.

use std::path::PathBuf;

use crate::config::Config;
use crate::llm::routing::{
    ModelRouter, RoutingDecision, RoutingOverrides, ScoreBreakdown, score_complexity_breakdown,
};
use crate::llm::{fallback_model, is_routable};

pub(super) fn run_score(task: &str, explain: bool, json: bool) -> anyhow::Result<()> {
    let breakdown = score_complexity_breakdown(task);
    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else if explain {
        print!("{}", format_breakdown(&breakdown));
    } else {
        println!("{}", breakdown.total);
    }
    Ok(())
}

pub(super) fn run_route(
    task: &str,
    settings: Option<PathBuf>,
    overrides: &RoutingOverrides,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load(settings, overrides)?;
    let show_complexity = config.routing.show_complexity;
    let decision = ModelRouter::new(config.routing).route(task);

    if json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        print!("{}", format_decision(&decision, show_complexity));
    }
    Ok(())
}

pub(super) fn run_check(model: &str) {
    if is_routable(model) {
        println!("{model}: routable");
    } else {
        println!("{model}: not routable");
    }
}

pub(super) fn run_fallback(model: &str) {
    println!("{}", fallback_model(model));
}

fn format_decision(decision: &RoutingDecision, show_complexity: bool) -> String {
    let mut out = format!(
        "  Model:       {} ({})\n",
        decision.model_id(),
        decision.selected_model.short_name()
    );
    if show_complexity {
        out.push_str(&format!("  Complexity:  {}%\n", decision.complexity));
    }
    out.push_str(&format!("  Reason:      {}\n", decision.reasoning));
    out
}

fn format_breakdown(breakdown: &ScoreBreakdown) -> String {
    let mut out = format!("Complexity: {}/100\n", breakdown.total);
    for (name, value) in &breakdown.components {
        if *value != 0 {
            out.push_str(&format!("  {:<22} {:+}\n", name, value));
        }
    }
    for hint in &breakdown.hints {
        out.push_str(&format!("  - {}\n", hint));
    }
    out
}
