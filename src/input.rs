use anyhow::{anyhow, Context};
use std::io::{BufRead, Write};

use crate::PROMPT;

/// Writes the prompt and flushes so it is visible before the read blocks.
pub fn write_prompt<W: Write>(out: &mut W) -> std::io::Result<()> {
    write!(out, "{}", PROMPT)?;
    out.flush()
}

/// Reads the first whitespace-delimited token from the source and
/// parses it as a signed term count.
///
/// Leading blank lines are skipped, matching the stream-extraction
/// behavior of reading a number from a console. EOF before any token
/// and non-integer tokens are errors.
pub fn read_term_count<R: BufRead>(source: &mut R) -> anyhow::Result<i64> {
    let mut line = String::new();
    loop {
        line.clear();
        let bytes = source
            .read_line(&mut line)
            .context("failed to read term count")?;
        if bytes == 0 {
            return Err(anyhow!("no input provided"));
        }
        if let Some(token) = line.split_whitespace().next() {
            return token
                .parse::<i64>()
                .with_context(|| format!("'{}' is not a valid integer", token));
        }
    }
}
