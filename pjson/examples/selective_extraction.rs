// SPDX-License-Identifier: Apache-2.0

//! Pulls one value out of a document by key path, skipping every subtree
//! that cannot contain it.

use std::ops::Range;

use pjson::{Directive, Info};

const JSON: &str = r#"{
    "widget": {
        "debug": "on",
        "window": {"title": "Sample Konfabulator Widget", "width": 500},
        "image": {"src": "Images/Sun.png", "hOffset": 250},
        "text": {"data": "Click Here", "size": 36}
    }
}"#;

/// Returns the raw bytes of the value at `path`, if there is one.
fn extract<'a>(json: &'a [u8], path: &[&str]) -> Result<Option<&'a [u8]>, pjson::Error> {
    let mut depth = 0;
    let mut matched = 0;
    let mut wanted = false;
    let mut open_at = None;
    let mut found: Option<Range<usize>> = None;

    pjson::parse(json, |start, end, info| {
        if let Some(begin) = open_at {
            // the close right after a skipped target
            found = Some(begin..end);
            return Directive::Stop;
        }
        if info.contains(Info::KEY) {
            let key = &json[start + 1..end - 1];
            wanted = matched + 1 == depth
                && path.get(matched).is_some_and(|p| p.as_bytes() == key);
            return Directive::Continue;
        }
        if info.contains(Info::CLOSE) {
            depth -= 1;
            return Directive::Continue;
        }
        let opens = info.contains(Info::OPEN);
        if opens {
            depth += 1;
        }
        if !info.contains(Info::VALUE) {
            return Directive::Continue;
        }
        if !std::mem::take(&mut wanted) {
            return if opens {
                Directive::SkipSubtree
            } else {
                Directive::Continue
            };
        }

        matched += 1;
        if matched == path.len() {
            if opens {
                open_at = Some(start);
                return Directive::SkipSubtree;
            }
            found = Some(start..end);
            return Directive::Stop;
        }
        if info.contains(Info::OBJECT) {
            Directive::Continue
        } else {
            // the path runs through a scalar or an array
            Directive::Stop
        }
    })?;

    Ok(found.map(|range| &json[range]))
}

fn main() -> Result<(), pjson::Error> {
    let json = JSON.as_bytes();
    for path in [
        &["widget", "window", "title"][..],
        &["widget", "image"][..],
        &["widget", "text", "size"][..],
        &["widget", "debug", "level"][..],
        &["widget", "missing"][..],
    ] {
        match extract(json, path)? {
            Some(value) => println!("{}: {}", path.join("."), String::from_utf8_lossy(value)),
            None => println!("{}: not found", path.join(".")),
        }
    }
    Ok(())
}
