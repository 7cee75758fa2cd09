// src/api/types.rs
//! Wire records for every backend endpoint.
//!
//! The backend serializes SQL decimals as strings, ids as either strings or
//! integers, and leaves columns null freely, so numeric fields go through the
//! lenient decoders in [`de`]. Anything that is not the documented shape at
//! all (e.g. a string where a product object should be) fails decoding.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/* ---------------- Product id ---------------- */

/// Opaque product key. Integers from the wire are kept in decimal form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self { ProductId(s!(s)) }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self { ProductId(s) }
}

impl From<u64> for ProductId {
    fn from(n: u64) -> Self { ProductId(n.to_string()) }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ProductId {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        de::product_id(d)
    }
}

/* ---------------- Products ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub price: f64,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub original_price: Option<f64>,
    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub rating: f64,
    #[serde(default, deserialize_with = "de::u64_or_zero")]
    pub rating_count: u64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub product_url: Option<String>,

    /// `/compare` and `?with_reviews=true`
    #[serde(default, deserialize_with = "de::vec_or_empty")]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub review_stats: Option<ReviewStats>,
}

impl Product {
    /// `original_price` only counts when strictly above `price`.
    pub fn is_discounted(&self) -> bool {
        matches!(self.original_price, Some(op) if op > self.price)
    }
}

/* ---------------- Categories ---------------- */

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub category: String,
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub product_count: Option<u64>,
}

/* ---------------- Comparison ---------------- */

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompareRequest {
    pub product_ids: Vec<ProductId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// The backend's extra verdicts. Only the value pick (lowest price per
/// rating point) is not derivable from the table rows, so only it is read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ServerWinners {
    #[serde(default, deserialize_with = "de::opt_product_id")]
    pub value_winner: Option<ProductId>,
}

/// Canonical `/compare` result.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CompareResult {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub comparison: Option<ServerWinners>,
    #[serde(default)]
    pub session_id: Option<String>,
    /// Some failures come back as 200 with an `error` field
    #[serde(default)]
    pub error: Option<String>,
}

/// Both observed `/compare` response shapes.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum CompareWire {
    List(Vec<Product>),
    Object(CompareResult),
}

impl CompareWire {
    pub fn is_list(&self) -> bool { matches!(self, CompareWire::List(_)) }

    pub fn into_result(self) -> CompareResult {
        match self {
            CompareWire::Object(r) => r,
            CompareWire::List(products) => CompareResult { products, ..CompareResult::default() },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HistoryEntry {
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub id: Option<u64>,
    #[serde(default)]
    pub session_id: Option<String>,
    /// A list, or the comma-joined column as stored
    #[serde(default, deserialize_with = "de::id_list")]
    pub product_ids: Vec<ProductId>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/* ---------------- Reviews ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Review {
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub review_id: Option<u64>,
    #[serde(default, deserialize_with = "de::opt_product_id")]
    pub product_id: Option<ProductId>,
    /// `user_name` column
    #[serde(default, alias = "user_name")]
    pub reviewer: Option<String>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub title: Option<String>,
    /// `content` column
    #[serde(default, alias = "content", alias = "review_text")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "de::u64_or_zero")]
    pub helpful_votes: u64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub sentiment_score: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ReviewStats {
    #[serde(default, deserialize_with = "de::u64_or_zero")]
    pub review_count: u64,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub average_rating: Option<f64>,
    #[serde(default, deserialize_with = "de::u64_or_zero")]
    pub positive_reviews: u64,
    #[serde(default, deserialize_with = "de::u64_or_zero")]
    pub negative_reviews: u64,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub average_sentiment: Option<f64>,
    /// Star ("1".."5") -> count
    #[serde(default)]
    pub rating_distribution: Option<BTreeMap<String, u64>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ReviewSentiment {
    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub average_sentiment: f64,
    #[serde(default, deserialize_with = "de::u64_or_zero")]
    pub positive_count: u64,
    #[serde(default, deserialize_with = "de::u64_or_zero")]
    pub neutral_count: u64,
    #[serde(default, deserialize_with = "de::u64_or_zero")]
    pub negative_count: u64,
    #[serde(default, deserialize_with = "de::vec_or_empty")]
    pub top_positive: Vec<Review>,
    #[serde(default, deserialize_with = "de::vec_or_empty")]
    pub top_negative: Vec<Review>,
}

/* ---------------- Lenient decoders ---------------- */

pub(crate) mod de {
    use serde::de::{Deserialize, Deserializer, Error};
    use serde_json::Value;

    use super::ProductId;

    fn number(v: &Value) -> Option<f64> {
        match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|f| f.is_finite())
    }

    pub fn opt_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let v = Option::<Value>::deserialize(d)?;
        Ok(v.as_ref().and_then(number))
    }

    pub fn f64_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(opt_f64(d)?.unwrap_or(0.0))
    }

    pub fn opt_u64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
        let v = Option::<Value>::deserialize(d)?;
        Ok(v.as_ref()
            .and_then(number)
            .filter(|f| *f >= 0.0)
            .map(|f| f.round() as u64))
    }

    pub fn u64_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
        Ok(opt_u64(d)?.unwrap_or(0))
    }

    pub fn string_or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
    }

    pub fn vec_or_empty<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
    }

    fn id_from_value<E: Error>(v: Value) -> Result<ProductId, E> {
        match v {
            Value::String(s) if !s.trim().is_empty() => Ok(ProductId(s!(s.trim()))),
            Value::Number(n) => Ok(ProductId(n.to_string())),
            other => Err(E::custom(format!("invalid product id: {other}"))),
        }
    }

    pub fn product_id<'de, D: Deserializer<'de>>(d: D) -> Result<ProductId, D::Error> {
        id_from_value(Value::deserialize(d)?)
    }

    pub fn opt_product_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<ProductId>, D::Error> {
        match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => Ok(None),
            Some(v) => id_from_value(v).map(Some),
        }
    }

    pub fn id_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<ProductId>, D::Error> {
        match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::String(s)) => Ok(s
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(ProductId::from)
                .collect()),
            Some(Value::Array(items)) => items.into_iter().map(id_from_value).collect(),
            Some(other) => Err(D::Error::custom(format!("invalid product id list: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_decodes_strings_nulls_and_int_ids() {
        let p: Product = serde_json::from_value(json!({
            "product_id": 42,
            "title": "Kettle",
            "price": "19.99",
            "original_price": null,
            "rating": "4.5",
            "rating_count": null
        }))
        .unwrap();
        assert_eq!(p.product_id, ProductId::from("42"));
        assert_eq!(p.price, 19.99);
        assert_eq!(p.original_price, None);
        assert_eq!(p.rating, 4.5);
        assert_eq!(p.rating_count, 0);
        assert!(p.reviews.is_empty());
    }

    #[test]
    fn product_without_id_is_rejected() {
        let r: Result<Product, _> = serde_json::from_value(json!({ "title": "x" }));
        assert!(r.is_err());
    }

    #[test]
    fn history_accepts_comma_joined_ids() {
        let h: HistoryEntry = serde_json::from_value(json!({
            "id": 3, "session_id": "s", "product_ids": "a, b,c", "created_at": "2024-01-01"
        }))
        .unwrap();
        assert_eq!(h.product_ids, vec![ProductId::from("a"), ProductId::from("b"), ProductId::from("c")]);
    }

    #[test]
    fn review_reads_backend_column_names() {
        let r: Review = serde_json::from_value(json!({
            "product_id": "B01",
            "user_name": "Ann",
            "rating": "4.0",
            "title": "Solid",
            "content": "Works great",
            "helpful_votes": 3,
            "date": "2024-02-01"
        }))
        .unwrap();
        assert_eq!(r.reviewer.as_deref(), Some("Ann"));
        assert_eq!(r.text.as_deref(), Some("Works great"));
        assert_eq!(r.rating, Some(4.0));
        assert_eq!(r.helpful_votes, 3);
    }

    #[test]
    fn sentiment_top_reviews_keep_their_text() {
        let s: ReviewSentiment = serde_json::from_value(json!({
            "average_sentiment": 0.4,
            "positive_count": 1,
            "top_positive": [{ "sentiment_score": 0.9, "content": "Love it" }],
            "top_negative": null
        }))
        .unwrap();
        assert_eq!(s.top_positive[0].text.as_deref(), Some("Love it"));
        assert_eq!(s.top_positive[0].sentiment_score, Some(0.9));
        assert!(s.top_negative.is_empty());
    }

    #[test]
    fn compare_object_keeps_value_pick() {
        let r: CompareResult = serde_json::from_value(json!({
            "products": [],
            "comparison": { "price_winner": 1, "value_winner": 2 }
        }))
        .unwrap();
        assert_eq!(r.comparison.unwrap().value_winner, Some(ProductId::from("2")));
    }

    #[test]
    fn compare_request_serializes_ids_as_strings() {
        let req = CompareRequest { product_ids: vec![ProductId::from(7u64), ProductId::from("B0X")], session_id: None };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v, json!({ "product_ids": ["7", "B0X"] }));
    }
}
