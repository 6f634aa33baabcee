use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Number, Value};
use std::borrow::Cow;

use super::field_path::{value_text, FieldPath};

/// Field access used by search and status filtering.
///
/// Implementors return the text form of the value at `path`, or `None` when
/// the path does not resolve or the value is absent. A `None` is never
/// treated as an empty string.
pub trait TableRecord {
    fn field_text(&self, path: &FieldPath) -> Option<Cow<'_, str>>;
}

impl TableRecord for Value {
    fn field_text(&self, path: &FieldPath) -> Option<Cow<'_, str>> {
        path.resolve(self).and_then(value_text)
    }
}

impl<T: TableRecord + ?Sized> TableRecord for &T {
    fn field_text(&self, path: &FieldPath) -> Option<Cow<'_, str>> {
        (**self).field_text(path)
    }
}

/// Helpers for hand-written `TableRecord` impls
pub(crate) fn text(value: &str) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(value))
}

pub(crate) fn opt_text(value: &Option<String>) -> Option<Cow<'_, str>> {
    value.as_deref().map(Cow::Borrowed)
}

pub(crate) fn display<T: ToString>(value: T) -> Option<Cow<'static, str>> {
    Some(Cow::Owned(value.to_string()))
}

/// Decimal text as it appears on the wire, so `39.0` stays `39.0`
pub(crate) fn decimal(value: f64) -> Option<Cow<'static, str>> {
    Number::from_f64(value).map(|n| Cow::Owned(n.to_string()))
}

/// Timestamp text as it appears on the wire (`Z` suffix, no padding)
pub(crate) fn timestamp(at: &DateTime<Utc>) -> Option<Cow<'static, str>> {
    Some(Cow::Owned(at.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
}
