//! Basic logfmt serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_logfmt::{from_str, to_string};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Access {
    level: String,
    msg: String,
    status: u16,
    duration_ms: f64,
    user: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let access = Access {
        level: "info".to_string(),
        msg: "request done".to_string(),
        status: 200,
        duration_ms: 12.5,
        user: None,
    };

    // Serialize to logfmt
    let line = to_string(&access)?;
    println!("logfmt output:\n{}\n", line);

    // Deserialize back to struct
    let access_back: Access = from_str(&line)?;
    assert_eq!(access, access_back);
    println!("✓ Round-trip successful");

    Ok(())
}
