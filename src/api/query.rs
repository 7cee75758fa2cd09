// src/api/query.rs
//
// Query-string building. Only parameters that are set are sent.

use url::form_urlencoded::Serializer;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub search: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ProductQuery {
    pub fn category(name: &str) -> Self {
        Self { category: Some(s!(name)), ..Self::default() }
    }

    /// `category=..&min_price=..` in the backend's parameter names.
    pub fn to_query_string(&self) -> String {
        let mut q = Serializer::new(s!());
        if let Some(c) = &self.category { q.append_pair("category", c); }
        if let Some(v) = self.min_price { q.append_pair("min_price", &v.to_string()); }
        if let Some(v) = self.max_price { q.append_pair("max_price", &v.to_string()); }
        if let Some(v) = self.min_rating { q.append_pair("min_rating", &v.to_string()); }
        if let Some(s) = &self.search { q.append_pair("search", s); }
        if let Some(n) = self.limit { q.append_pair("limit", &n.to_string()); }
        if let Some(n) = self.offset { q.append_pair("offset", &n.to_string()); }
        q.finish()
    }
}

/// Encode arbitrary `(key, value)` pairs.
pub fn encode_pairs(pairs: &[(&str, String)]) -> String {
    let mut q = Serializer::new(s!());
    for (k, v) in pairs {
        q.append_pair(k, v);
    }
    q.finish()
}

/// Percent-encode one path segment (product ids are opaque).
pub fn encode_segment(seg: &str) -> String {
    url::form_urlencoded::byte_serialize(seg.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_empty() {
        assert_eq!(ProductQuery::default().to_query_string(), "");
    }

    #[test]
    fn only_set_params_are_encoded() {
        let q = ProductQuery {
            category: Some(s!("Home & Kitchen")),
            min_price: Some(10.0),
            min_rating: Some(4.5),
            ..ProductQuery::default()
        };
        assert_eq!(q.to_query_string(), "category=Home+%26+Kitchen&min_price=10&min_rating=4.5");
    }

    #[test]
    fn segments_are_percent_encoded() {
        assert_eq!(encode_segment("B00 X/1"), "B00%20X%2F1");
    }
}
