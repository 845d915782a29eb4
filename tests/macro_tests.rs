use serde::Serialize;
use serde_logfmt::{decode, decode_with_options, encode, logfmt, to_value, DecodeOptions, Value};
use std::collections::BTreeMap;

#[derive(Serialize)]
struct Caller {
    file: &'static str,
    line: u32,
}

#[test]
fn test_record_encodes_in_literal_order() {
    let value = logfmt!({
        "ts": "2024-05-01T10:00:00Z",
        "level": "error",
        "msg": "upstream timed out",
        "retry": false
    });
    assert_eq!(
        encode(&value),
        r#"ts=2024-05-01T10:00:00Z level=error msg="upstream timed out" retry=false"#
    );
}

#[test]
fn test_literal_matches_decoded_line() {
    let line = "req.id=7f3a req.hops.[0]=edge req.hops.[1]=api ok=true";
    assert_eq!(
        decode(line),
        logfmt!({
            "req": { "id": "7f3a", "hops": ["edge", "api"] },
            "ok": "true"
        })
    );
}

#[test]
fn test_typed_literal_matches_typed_decode() {
    let line = "status=503 latency=1.25 cached=null attempts.[0]=-1";
    assert_eq!(
        decode_with_options(line, &DecodeOptions::typed()),
        logfmt!({
            "status": 503,
            "latency": 1.25,
            "cached": null,
            "attempts": [-1]
        })
    );
}

#[test]
fn test_root_list_literal() {
    assert_eq!(encode(&logfmt!(["a", ["b", "c"]])), "[0]=a [1].[0]=b [1].[1]=c");
    assert_eq!(decode("[0]=a [1].[0]=b [1].[1]=c"), logfmt!(["a", ["b", "c"]]));
}

#[test]
fn test_bracket_keys_are_plain_keys() {
    // keys in a literal are not key paths, so no reconciliation happens
    let value = logfmt!({ "[0]": "a", "[1]": "b" });
    assert!(value.is_object());
    assert_eq!(encode(&value), "[0]=a [1]=b");
    assert_eq!(decode(&encode(&value)), logfmt!(["a", "b"]));
}

#[test]
fn test_empty_literals_write_nothing() {
    assert_eq!(encode(&logfmt!({})), "");
    assert_eq!(encode(&logfmt!([])), "");
    assert_eq!(encode(&logfmt!({ "a": {}, "b": [], "c": 1 })), "c=1");
}

#[test]
fn test_scalar_literal_has_no_tokens() {
    assert_eq!(encode(&logfmt!("alone")), "");
    assert_eq!(encode(&logfmt!(-12)), "");
}

#[test]
fn test_expressions_are_serialized() {
    let caller = Caller {
        file: "main.rs",
        line: 42,
    };
    let hosts = vec!["db-1", "db-2"];
    let value = logfmt!({ "caller": caller, "hosts": hosts, "port": 5432u16 });

    assert_eq!(
        encode(&value),
        "caller.file=main.rs caller.line=42 hosts.[0]=db-1 hosts.[1]=db-2 port=5432"
    );
}

#[test]
fn test_literal_equals_to_value() {
    let mut fields = BTreeMap::new();
    fields.insert("a", 1);
    fields.insert("b", 2);
    assert_eq!(logfmt!({ "a": 1, "b": 2 }), to_value(&fields).unwrap());
    assert_eq!(logfmt!(fields), to_value(&fields).unwrap());
}

#[test]
fn test_quoting_of_literal_strings() {
    let value = logfmt!({ "path": "C:\\Program Files", "note": "said \"no\"" });
    assert_eq!(
        encode(&value),
        r#"path="C:\\Program Files" note="said \"no\"""#
    );
    assert_eq!(decode(&encode(&value)), value);
}

#[test]
#[should_panic(expected = "cannot serialize")]
fn test_unserializable_map_key_panics() {
    let mut by_list = BTreeMap::new();
    by_list.insert(vec![1u8], "x");
    let _ = logfmt!({ "bad": by_list });
}

#[test]
fn test_value_through_macro() {
    let inner = logfmt!({ "k": "v" });
    let outer = logfmt!({ "wrap": inner });
    assert_eq!(outer.get("wrap").and_then(|w| w.get("k")), Some(&Value::from("v")));
}
