//! Key paths, lists and sparse indices.
//!
//! Run with: cargo run --example nested_arrays

use serde::{Deserialize, Serialize};
use serde_logfmt::{decode, encode, from_str, to_string};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Deploy {
    service: String,
    hosts: Vec<Host>,
    matrix: Vec<Vec<u8>>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Host {
    name: String,
    zone: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let deploy = Deploy {
        service: "billing".to_string(),
        hosts: vec![
            Host {
                name: "web-1".to_string(),
                zone: "a".to_string(),
            },
            Host {
                name: "web-2".to_string(),
                zone: "b".to_string(),
            },
        ],
        matrix: vec![vec![1, 0], vec![0, 1]],
    };

    let line = to_string(&deploy)?;
    println!("Lists are written with .[i] segments:\n{}\n", line);

    let back: Deploy = from_str(&line)?;
    assert_eq!(deploy, back);

    // Brackets work with or without a dot, in any order
    let shuffled = "tags[1]=b tags.[0]=a";
    println!("{:<28} => {}", shuffled, encode(&decode(shuffled)));

    // Missing positions become null
    let sparse = "slots.[3]=taken";
    println!("{:<28} => {}", sparse, encode(&decode(sparse)));

    // A whole line can be a list
    let root = "[0]=first [1]=second";
    println!("{:<28} => {:?}", root, decode(root).as_array().map(Vec::len));

    Ok(())
}
