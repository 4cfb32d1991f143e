// SPDX-FileCopyrightText: 2026 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

//! Filter strings for GMP list commands.
//!
//! A filter is a space separated list of `key="value"` terms. Keys with an
//! empty value (None, empty string, 0 or false) are omitted.
//!
//! ```
//! use gvmlib::Filter;
//!
//! let filter = Filter::new()
//!     .with("name", "Full and fast")
//!     .with("comment", None::<&str>);
//! assert_eq!(filter.to_string(), r#"name="Full and fast""#);
//! ```
use std::fmt;

/// Value of a filter term
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterValue {
    /// A text value
    Text(String),
    /// A numeric value
    Number(i64),
    /// A flag, written as 1
    Flag(bool),
    /// No value
    Absent,
}

impl FilterValue {
    /// Returns false for values that are left out of a filter string
    pub fn is_set(&self) -> bool {
        match self {
            FilterValue::Text(s) => !s.is_empty(),
            FilterValue::Number(n) => *n != 0,
            FilterValue::Flag(b) => *b,
            FilterValue::Absent => false,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(s) => write!(f, "{s}"),
            FilterValue::Number(n) => write!(f, "{n}"),
            FilterValue::Flag(b) => write!(f, "{}", *b as u8),
            FilterValue::Absent => Ok(()),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<&String> for FilterValue {
    fn from(value: &String) -> Self {
        FilterValue::Text(value.clone())
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Flag(value)
    }
}

macro_rules! number_filter_value {
    ($($t:ty),*) => {
        $(impl From<$t> for FilterValue {
            fn from(value: $t) -> Self {
                FilterValue::Number(value as i64)
            }
        })*
    };
}

number_filter_value!(i8, i16, i32, i64, u8, u16, u32);

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FilterValue::Absent)
    }
}

/// Keyword constraints of a list command
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    terms: Vec<(String, FilterValue)>,
}

impl Filter {
    /// Creates an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a term
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FilterValue>,
    {
        self.terms.push((key.into(), value.into()));
        self
    }

    /// Returns true when no term would be written
    pub fn is_empty(&self) -> bool {
        !self.terms.iter().any(|(_, v)| v.is_set())
    }

    /// Returns the filter string or None when it would be empty
    pub fn as_filter_string(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in self.terms.iter().filter(|(_, v)| v.is_set()) {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{key}=\"{value}\"")?;
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for Filter
where
    K: Into<String>,
    V: Into<FilterValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Filter::new(), |filter, (k, v)| filter.with(k, v))
    }
}
