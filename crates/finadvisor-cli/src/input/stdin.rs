use serde_json::Value;
use std::io::{self, Read};

/// Read piped JSON from stdin. Returns None when stdin is an interactive
/// terminal or nothing was piped.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    if buffer.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(buffer.trim())?;
    Ok(Some(value))
}
