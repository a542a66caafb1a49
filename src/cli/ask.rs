//! One-shot classification command

use anyhow::Result;
use console::style;
use serde_json::{json, Value};

use crate::classify;
use crate::decision::{Decision, SCORE_THRESHOLD};
use crate::features::Features;

pub fn run(text: &str, format: &str, explain: bool) -> Result<()> {
    let (features, decision) = classify(text);

    if format == "json" {
        let payload = json_payload(&features, &decision, explain);
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}", style(decision.verdict).bold());
    for (name, value) in features.render() {
        println!("{}: {}", name, value);
    }

    if explain {
        println!();
        for check in &decision.checks {
            let mark = if check.passed { "x" } else { " " };
            println!("[{}] {}", mark, check.name);
        }
        println!(
            "score: {}/8 (YES needs {})",
            decision.score, SCORE_THRESHOLD
        );
    }

    Ok(())
}

/// The `checks` key appears only with `--explain`; scripted consumers never
/// see an always-null field.
fn json_payload(features: &Features, decision: &Decision, explain: bool) -> Value {
    let mut payload = json!({
        "verdict": decision.verdict,
        "score": decision.score,
        "features": features,
    });
    if explain {
        payload["checks"] = json!(&decision.checks);
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_payload_omits_checks_unless_explaining() {
        let (features, decision) = classify("Hi");

        let plain = json_payload(&features, &decision, false);
        assert_eq!(plain["verdict"], "YES");
        assert!(plain.get("checks").is_none());

        let explained = json_payload(&features, &decision, true);
        assert_eq!(explained["checks"].as_array().unwrap().len(), 8);
    }
}
