//! Using the logfmt! macro for dynamic value construction.
//!
//! Run with: cargo run --example macro

use serde_logfmt::{encode, logfmt, Value};

fn main() {
    let numbers = logfmt!([1, 2, 3]);
    let mixed = logfmt!([1, "two", true, null]);

    println!("Arrays:");
    println!("  Numbers: {}", encode(&numbers));
    println!("  Mixed:   {}\n", encode(&mixed));

    let event = logfmt!({
        "level": "warn",
        "msg": "disk almost full",
        "free_ratio": 0.07,
        "retry": false
    });

    println!("Objects:");
    println!("{}\n", encode(&event));

    let config = logfmt!({
        "app": {
            "name": "MyApp",
            "version": "1.0.0"
        },
        "database": {
            "host": "localhost",
            "port": 5432
        },
        "features": ["auth", "logging", "metrics"]
    });

    println!("Nested structures:");
    println!("{}\n", encode(&config));

    let items = vec![
        logfmt!({"id": 1, "status": "active"}),
        logfmt!({"id": 2, "status": "pending"}),
    ];

    let summary = logfmt!({
        "total": 2,
        "items": items
    });

    println!("Dynamic construction:");
    println!("{}\n", encode(&summary));

    // A bare scalar has no key and encodes to nothing
    println!("Scalar at the root: {:?}", encode(&logfmt!("alone")));

    if let Some(Value::Object(app)) = config.get("app") {
        if let Some(name) = app.get("name").and_then(|v| v.as_str()) {
            println!("App name: {}", name);
        }
    }
}
