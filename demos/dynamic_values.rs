//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use serde_logfmt::{decode_with_options, from_value, to_value, DecodeOptions, Value};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let line = r#"host=localhost port=8080 debug=true features.[0]=auth features.[1]=metrics"#;
    let config = decode_with_options(line, &DecodeOptions::typed());

    println!("Decoded tree: {:?}\n", config);

    // Access values dynamically
    if let Some(Value::String(host)) = config.get("host") {
        println!("Accessing field 'host': {}", host);
    }

    if let Some(port) = config.get("port").and_then(|v| v.as_i64()) {
        println!("Accessing field 'port': {}", port);
    }

    if let Some(Value::Array(features)) = config.get("features") {
        println!("Accessing field 'features': {} items\n", features.len());
    }

    // Convert existing struct to Value and back
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let user_value = to_value(&user)?;
    println!("User as logfmt: {}\n", user_value);

    let parsed: Value = "id=7 name=bob roles.[0]=ops".parse()?;
    let bob: User = from_value(parsed)?;
    println!("Parsed user: {:?}\n", bob);

    // Runtime type checking
    println!("Type checks:");
    println!("  is_object: {}", user_value.is_object());
    println!("  is_array:  {}", user_value.is_array());
    println!("  is_string: {}", user_value.is_string());

    Ok(())
}
