/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! `Display` rendering shared by every shape.
//!
//! A shape renders as `{Member: value,Member: value}` in declaration order. Absent members are
//! omitted, lists render as `[a, b]`, maps as `{k=v, k2=v2}` and timestamps in RFC 3339.

use aws_smithy_types::date_time::Format;
use aws_smithy_types::DateTime;
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

pub(crate) const REDACTED: &str = "*** Sensitive Data Redacted ***";

/// Writes the members of one shape, mirroring the shape of [`fmt::DebugStruct`].
pub(crate) struct ShapeDisplay<'a, 'b> {
    f: &'a mut Formatter<'b>,
    result: fmt::Result,
    has_members: bool,
}

impl<'a, 'b> ShapeDisplay<'a, 'b> {
    pub(crate) fn new(f: &'a mut Formatter<'b>) -> Self {
        let result = f.write_str("{");
        Self {
            f,
            result,
            has_members: false,
        }
    }

    fn member(&mut self, name: &str, value: &dyn Display) -> &mut Self {
        self.result = self.result.and_then(|_| {
            if self.has_members {
                self.f.write_str(",")?;
            }
            write!(self.f, "{}: {}", name, value)
        });
        self.has_members = true;
        self
    }

    pub(crate) fn field<T: Display>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        match value {
            Some(value) => self.member(name, value),
            None => self,
        }
    }

    pub(crate) fn sensitive<T>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        match value {
            Some(_) => self.member(name, &REDACTED),
            None => self,
        }
    }

    pub(crate) fn list<T: Display>(&mut self, name: &str, value: &Option<Vec<T>>) -> &mut Self {
        match value {
            Some(items) => self.member(name, &ListDisplay(items)),
            None => self,
        }
    }

    pub(crate) fn map(
        &mut self,
        name: &str,
        value: &Option<BTreeMap<String, String>>,
    ) -> &mut Self {
        match value {
            Some(entries) => self.member(name, &MapDisplay(entries)),
            None => self,
        }
    }

    pub(crate) fn timestamp(&mut self, name: &str, value: &Option<DateTime>) -> &mut Self {
        match value {
            Some(value) => self.member(name, &TimestampDisplay(value)),
            None => self,
        }
    }

    pub(crate) fn finish(&mut self) -> fmt::Result {
        self.result.and_then(|_| self.f.write_str("}"))
    }
}

struct ListDisplay<'a, T>(&'a [T]);

impl<T: Display> Display for ListDisplay<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, item) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

struct MapDisplay<'a>(&'a BTreeMap<String, String>);

impl Display for MapDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (k, v)) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", k, v)?;
        }
        f.write_str("}")
    }
}

struct TimestampDisplay<'a>(&'a DateTime);

impl Display for TimestampDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match DateTime::fmt(self.0, Format::DateTime) {
            Ok(formatted) => f.write_str(&formatted),
            // out of range for RFC 3339
            Err(_) => write!(f, "{}", self.0.secs()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::ShapeDisplay;
    use aws_smithy_types::DateTime;
    use std::collections::BTreeMap;
    use std::fmt;

    struct Sample {
        name: Option<String>,
        secret: Option<String>,
        tags: Option<Vec<String>>,
        metadata: Option<BTreeMap<String, String>>,
        created: Option<DateTime>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            ShapeDisplay::new(f)
                .field("Name", &self.name)
                .sensitive("Secret", &self.secret)
                .list("Tags", &self.tags)
                .map("Metadata", &self.metadata)
                .timestamp("Created", &self.created)
                .finish()
        }
    }

    fn empty() -> Sample {
        Sample {
            name: None,
            secret: None,
            tags: None,
            metadata: None,
            created: None,
        }
    }

    #[test]
    fn empty_shape_renders_braces() {
        assert_eq!(empty().to_string(), "{}");
    }

    #[test]
    fn members_render_in_order_without_trailing_comma() {
        let sample = Sample {
            name: Some("jane".into()),
            secret: Some("hunter2".into()),
            tags: Some(vec!["a".into(), "b".into()]),
            metadata: Some(BTreeMap::from([
                ("k2".to_string(), "v2".to_string()),
                ("k".to_string(), "v".to_string()),
            ])),
            created: Some(DateTime::from_secs(0)),
        };
        assert_eq!(
            sample.to_string(),
            "{Name: jane,Secret: *** Sensitive Data Redacted ***,Tags: [a, b],Metadata: {k=v, k2=v2},Created: 1970-01-01T00:00:00Z}"
        );
    }

    #[test]
    fn empty_collections_are_rendered() {
        let sample = Sample {
            tags: Some(vec![]),
            metadata: Some(BTreeMap::new()),
            ..empty()
        };
        assert_eq!(sample.to_string(), "{Tags: [],Metadata: {}}");
    }
}
