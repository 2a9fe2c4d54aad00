// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use pjson::{Directive, Error, Event, Info};

/// Parses `json` with an always-continue visitor and returns every event.
pub fn events(json: &[u8]) -> Result<(usize, Vec<Event>), Error> {
    let mut events = Vec::new();
    let consumed = pjson::parse(json, |start, end, info| {
        events.push(Event::new(start, end, info));
        Directive::Continue
    })?;
    Ok((consumed, events))
}

/// Concatenates the bytes of every event the visitor saw, letting `steer`
/// pick the directive for each one.
pub fn stitch<F>(json: &[u8], mut steer: F) -> (Result<usize, Error>, String)
where
    F: FnMut(Info) -> Directive,
{
    let mut out = Vec::new();
    let res = pjson::parse(json, |start, end, info| {
        out.extend_from_slice(&json[start..end]);
        steer(info)
    });
    (res, String::from_utf8(out).expect("events split a UTF-8 sequence"))
}

/// Test oracle: drops whitespace outside of string literals.
pub fn minify(json: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(json.len());
    let mut in_string = false;
    let mut escaped = false;
    for &b in json {
        if in_string {
            out.push(b);
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
        } else if !matches!(b, b' ' | b'\t' | b'\n' | b'\r') {
            if b == b'"' {
                in_string = true;
            }
            out.push(b);
        }
    }
    out
}

pub fn load_test_file(filename: &str) -> Vec<u8> {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let path = Path::new(&manifest_dir).join("tests/data").join(filename);
    fs::read(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", filename))
}
