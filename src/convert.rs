// SPDX-FileCopyrightText: 2026 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

//! Converts GMP elements into plain key value structures.
//!
//! - attributes are stored as `@name`
//! - children are stored by their tag, repeated tags become an array
//! - text of an element with attributes or children is stored as `#text`
//! - a leaf without attributes becomes its trimmed text, or null without text
use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::Element;

/// Converts an element into a value, without wrapping it into its tag
pub fn to_value(element: &Element) -> Value {
    let text = element.text.as_deref().map(str::trim);
    if element.children.is_empty() && element.attributes.is_empty() {
        return match text {
            Some(text) => Value::String(text.to_string()),
            None => Value::Null,
        };
    }

    let mut grouped: BTreeMap<&str, Vec<Value>> = BTreeMap::new();
    for child in &element.children {
        grouped
            .entry(child.name.as_str())
            .or_default()
            .push(to_value(child));
    }
    let mut result: Map<String, Value> = grouped
        .into_iter()
        .map(|(name, mut values)| {
            let value = if values.len() == 1 {
                values.remove(0)
            } else {
                Value::Array(values)
            };
            (name.to_string(), value)
        })
        .collect();
    for (key, value) in &element.attributes {
        result.insert(format!("@{key}"), Value::String(value.clone()));
    }
    match text {
        Some(text) if !text.is_empty() => {
            result.insert("#text".to_string(), Value::String(text.to_string()));
        }
        _ => {}
    }
    Value::Object(result)
}
