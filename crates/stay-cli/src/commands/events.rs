//! Events command for inspecting how a travel log was parsed.
//!
//! This module outputs the normalized events as JSONL for debugging.

use std::io::Write;

use anyhow::Result;
use stay_core::parse_log;

/// Runs the events command, writing one JSON object per accepted row.
pub fn run<W: Write>(writer: &mut W, log_text: &str) -> Result<()> {
    for event in parse_log(log_text) {
        let json = serde_json::to_string(&event)?;
        writeln!(writer, "{json}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    #[test]
    fn events_command_outputs_sorted_jsonl() {
        let log = "Row DATE TYPE LOCATION\n\
                   2 2024-05-10 Departure NYC\n\
                   bad row\n\
                   1 2024-05-01 Arrival NYC";
        let mut output = Vec::new();
        run(&mut output, log).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r#"
        {"date":"2024-05-01","kind":"Arrival","location":"NYC"}
        {"date":"2024-05-10","kind":"Departure","location":"NYC"}
        "#);
    }
}
