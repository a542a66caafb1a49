//! Interactive chat loop over stdin/stdout
//!
//! Thin I/O glue around the pure pipeline: prompt, read a line, classify,
//! print the verdict and the feature listing, repeat until `exit` or EOF.
//! The loop body is generic over its streams so tests can drive it.

use anyhow::{Context, Result};
use console::style;
use std::io::{BufRead, BufReader, Write};

use crate::classify;

pub fn run() -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session(BufReader::new(stdin.lock()), stdout.lock())
}

fn session(reader: impl BufRead, mut out: impl Write) -> Result<()> {
    writeln!(out, "=== MATCHAT (YES/NO) ===")?;
    writeln!(out, "Type 'exit' to quit.\n")?;

    prompt(&mut out)?;

    for line in reader.lines() {
        let line = line.context("failed to read from stdin")?;

        if line.trim().eq_ignore_ascii_case("exit") {
            writeln!(out, "{} BYE!", style("Chatbot:").green().bold())?;
            return Ok(());
        }

        let (features, decision) = classify(&line);

        writeln!(
            out,
            "{} {}\n",
            style("Chatbot:").green().bold(),
            style(decision.verdict).bold()
        )?;
        writeln!(out, "Math Operations Results:")?;
        for (name, value) in features.render() {
            writeln!(out, "{}: {}", name, value)?;
        }
        writeln!(out, "---\n")?;

        prompt(&mut out)?;
    }

    // EOF: leave the loop cleanly
    writeln!(out)?;
    Ok(())
}

fn prompt(out: &mut impl Write) -> Result<()> {
    write!(out, "{}", style("You: ").cyan().bold())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(input: &str) -> String {
        let mut out = Vec::new();
        session(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_exit_terminates_without_classifying() {
        // The line after exit must never be processed
        let text = transcript("exit\nhello\n");

        assert!(text.contains("BYE!"));
        assert!(!text.contains("Math Operations Results:"));
    }

    #[test]
    fn test_exit_matches_any_case_and_surrounding_whitespace() {
        for input in ["EXIT\n", "Exit\n", "  eXiT  \n"] {
            let text = transcript(input);
            assert!(text.contains("BYE!"), "no farewell for {:?}", input);
            assert!(!text.contains("Math Operations Results:"));
        }
    }

    #[test]
    fn test_reply_lists_features_in_order_with_separator() {
        let text = transcript("Hi\nexit\n");

        assert!(text.contains("=== MATCHAT (YES/NO) ==="));
        assert!(text.contains("YES"));
        assert!(text.contains("Math Operations Results:"));
        assert!(text.contains("---"));
        assert!(text.contains("BYE!"));

        // The eight feature lines appear in the fixed order
        let names = [
            "det: ", "trace: ", "eigen_sum: ", "dot: ", "norm: ", "cross: ", "cosine: ",
            "hash: ",
        ];
        let mut last = 0;
        for name in names {
            let at = text[last..]
                .find(name)
                .unwrap_or_else(|| panic!("missing {:?}", name));
            last += at;
        }
    }

    #[test]
    fn test_eof_ends_session_cleanly() {
        // No exit command: the loop still answers, then ends at EOF
        let text = transcript("hello\n");

        assert!(text.contains("Math Operations Results:"));
        assert!(!text.contains("BYE!"));
    }

    #[test]
    fn test_whole_floats_print_with_decimal_point() {
        // "Hi" -> trace 72, eigen_sum 72.0, det 0.0
        let text = transcript("Hi\nexit\n");

        assert!(text.contains("det: 0.0"));
        assert!(text.contains("trace: 72"));
        assert!(!text.contains("det: 0\n"));
    }
}
