//! Tuning decoding and encoding with DecodeOptions and EncodeOptions.
//!
//! Run with: cargo run --example custom_options

use serde_logfmt::{decode_with_options, encode_with_options, DecodeOptions, EncodeOptions};

fn main() {
    let line = "zone=eu count=3 ratio=0.5 cached=false owner=null ids.[2]=9";

    // Default: every value is kept as text
    let plain = decode_with_options(line, &DecodeOptions::new());
    println!("Strings only:\n{:?}\n", plain);

    // Typed: null, bools and numbers are recognised
    let typed = decode_with_options(line, &DecodeOptions::typed());
    println!("Typed:\n{:?}\n", typed);

    // Index objects longer than the limit stay objects
    let capped = decode_with_options(line, &DecodeOptions::new().with_max_list_len(2));
    println!("List limit 2:\n{:?}\n", capped.get("ids"));

    // Insertion order by default, or sorted keys
    println!("Insertion order: {}", encode_with_options(&typed, &EncodeOptions::new()));
    println!("Sorted keys:     {}", encode_with_options(&typed, &EncodeOptions::sorted()));
}
