//! Query-string parameters with the backend's filtering contract.
//!
//! Keys whose value is null or an empty string are dropped before encoding;
//! list endpoints rely on this so callers can pass an unfiltered form
//! straight through.

use serde::{Deserialize, Serialize};

/// A single scalar query value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

impl QueryValue {
    /// Whether the value is dropped before encoding.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Str(s) => s.is_empty(),
            _ => false,
        }
    }

    fn render(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::UInt(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Str(s) => s.clone(),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for QueryValue {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for QueryValue {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<i64> for QueryValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for QueryValue {
    fn from(n: u32) -> Self {
        Self::UInt(n.into())
    }
}

impl From<u64> for QueryValue {
    fn from(n: u64) -> Self {
        Self::UInt(n)
    }
}

impl From<f64> for QueryValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<chrono::NaiveDate> for QueryValue {
    fn from(date: chrono::NaiveDate) -> Self {
        Self::Str(date.format("%Y-%m-%d").to_string())
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

/// Ordered query parameters.
///
/// ```rust,ignore
/// let params = QueryParams::new()
///     .with("page", 1)
///     .with("pageSize", "")
///     .with("status", None::<&str>);
/// assert_eq!(params.encode().as_deref(), Some("page=1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams(Vec<(String, QueryValue)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for the `page` / `pageSize` pair most list endpoints take.
    pub fn page(page: u32, page_size: u32) -> Self {
        Self::new().with("page", page).with("pageSize", page_size)
    }

    pub fn with(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`, replacing any earlier value so each key appears once.
    pub fn insert(&mut self, key: &str, value: impl Into<QueryValue>) {
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|(_, v)| v.is_blank())
    }

    /// Encode to `k=v&...`, or `None` when nothing survives filtering.
    pub fn encode(&self) -> Option<String> {
        let pairs: Vec<(&str, String)> = self
            .0
            .iter()
            .filter(|(_, v)| !v.is_blank())
            .map(|(k, v)| (k.as_str(), v.render()))
            .collect();
        if pairs.is_empty() {
            return None;
        }
        serde_urlencoded::to_string(&pairs).ok()
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(&k.into(), v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_dropped() {
        let params = QueryParams::new()
            .with("page", 1)
            .with("pageSize", "")
            .with("status", None::<&str>);
        assert_eq!(params.encode().as_deref(), Some("page=1"));
    }

    #[test]
    fn all_blank_encodes_to_none() {
        let params = QueryParams::new().with("keyword", "").with("date", QueryValue::Null);
        assert!(params.is_empty());
        assert_eq!(params.encode(), None);
    }

    #[test]
    fn values_are_url_encoded() {
        let params = QueryParams::new()
            .with("keyword", "张三 & co")
            .with("exported", false);
        assert_eq!(
            params.encode().as_deref(),
            Some("keyword=%E5%BC%A0%E4%B8%89+%26+co&exported=false")
        );
    }

    #[test]
    fn zero_and_false_are_kept() {
        let params = QueryParams::new().with("page", 0).with("exported", false);
        assert_eq!(params.encode().as_deref(), Some("page=0&exported=false"));
    }

    #[test]
    fn insert_replaces_existing_key() {
        let mut params = QueryParams::page(1, 20);
        params.insert("page", 3);
        assert_eq!(params.encode().as_deref(), Some("page=3&pageSize=20"));
    }

    #[test]
    fn collects_from_pairs() {
        let params: QueryParams = vec![("status", "pending"), ("phone", "")].into_iter().collect();
        assert_eq!(params.get("status"), Some(&QueryValue::from("pending")));
        assert_eq!(params.encode().as_deref(), Some("status=pending"));
    }

    #[test]
    fn dates_render_as_iso_days() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let params = QueryParams::new().with("startDate", date).with("endDate", None::<chrono::NaiveDate>);
        assert_eq!(params.encode().as_deref(), Some("startDate=2024-01-05"));
    }
}
