// src/core/compare.rs
//! Comparison table construction and per-row winner selection.
//!
//! A table is a fixed list of row descriptors applied to the selected
//! products in selection order. Ranked rows (price, discount, rating,
//! rating count) mark at most one winning column; descriptive rows
//! (image, category, brand, availability, link) never do.
//!
//! The Original Price and Discount rows only exist when at least one
//! product is actually discounted (`original_price > price`).

use crate::api::types::{Product, ProductId};
use super::format::{discount_percent, format_count, format_price, star_rating, Stars};

/// Which end of the scale wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Lowest strictly-positive value wins (price).
    Minimize,
    /// Highest value wins, zero included.
    Maximize,
}

/// Numeric field used for ranking a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankKey {
    Price,
    Discount,
    Rating,
    RatingCount,
}

impl RankKey {
    /// Missing or non-numeric values rank as 0.
    pub fn value(&self, p: &Product) -> f64 {
        let v = match self {
            RankKey::Price => p.price,
            RankKey::Discount => discount_percent(p.price, p.original_price).unwrap_or(0) as f64,
            RankKey::Rating => p.rating,
            RankKey::RatingCount => p.rating_count as f64,
        };
        if v.is_finite() { v } else { 0.0 }
    }
}

/// Index of the winning value, leftmost on ties.
///
/// Under `Minimize` zeros never win (an absent price is not "cheapest"),
/// so an all-zero row has no winner. Under `Maximize` every value takes
/// part and an all-zero row goes to index 0.
pub fn pick_winner(values: &[f64], policy: Policy) -> Option<usize> {
    let clean = |v: f64| if v.is_finite() { v } else { 0.0 };

    let mut best: Option<(usize, f64)> = None;
    for (i, &raw) in values.iter().enumerate() {
        let v = clean(raw);
        if policy == Policy::Minimize && v <= 0.0 { continue; }
        best = match best {
            None => Some((i, v)),
            Some((_, b)) if policy == Policy::Minimize && v < b => Some((i, v)),
            Some((_, b)) if policy == Policy::Maximize && v > b => Some((i, v)),
            keep => keep,
        };
    }
    best.map(|(i, _)| i)
}

/// One rendered table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Stars { stars: Stars, rating: f64 },
    /// Image URL, or `None` for the placeholder
    Image(Option<String>),
    /// Product page URL, or `None` when unavailable
    Link(Option<String>),
    NotAvailable,
}

impl Cell {
    /// Plain-text rendering used by copy/export and the CLI.
    pub fn text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Stars { stars, rating } => format!("{} ({:.1})", stars, rating),
            Cell::Image(Some(url)) => url.clone(),
            Cell::Image(None) => s!(crate::config::consts::PLACEHOLDER_IMAGE),
            Cell::Link(Some(url)) => url.clone(),
            Cell::Link(None) => s!("Link not available"),
            Cell::NotAvailable => s!("N/A"),
        }
    }
}

/// Label + extractor + optional ranking.
#[derive(Clone, Copy)]
pub struct RowDescriptor {
    pub label: &'static str,
    pub extract: fn(&Product) -> Cell,
    pub rank: Option<(RankKey, Policy)>,
}

impl RowDescriptor {
    const fn plain(label: &'static str, extract: fn(&Product) -> Cell) -> Self {
        Self { label, extract, rank: None }
    }

    const fn ranked(
        label: &'static str,
        extract: fn(&Product) -> Cell,
        key: RankKey,
        policy: Policy,
    ) -> Self {
        Self { label, extract, rank: Some((key, policy)) }
    }

    pub fn apply(&self, products: &[Product]) -> ComparisonRow {
        let cells = products.iter().map(self.extract).collect();
        let winner = self.rank.and_then(|(key, policy)| {
            let values: Vec<f64> = products.iter().map(|p| key.value(p)).collect();
            pick_winner(&values, policy)
        });
        ComparisonRow { label: self.label, cells, winner }
    }
}

fn text_or_na(s: &Option<String>) -> Cell {
    match s.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => Cell::Text(s!(t)),
        _ => Cell::NotAvailable,
    }
}

fn image_cell(p: &Product) -> Cell { Cell::Image(p.image_url.clone().filter(|u| !u.is_empty())) }
fn price_cell(p: &Product) -> Cell { Cell::Text(format_price(Some(p.price))) }

fn original_price_cell(p: &Product) -> Cell {
    match p.original_price {
        Some(op) if op != 0.0 => Cell::Text(format_price(Some(op))),
        _ => Cell::NotAvailable,
    }
}

fn discount_cell(p: &Product) -> Cell {
    match discount_percent(p.price, p.original_price) {
        Some(pct) => Cell::Text(format!("{}%", pct)),
        None => Cell::NotAvailable,
    }
}

fn rating_cell(p: &Product) -> Cell { Cell::Stars { stars: star_rating(p.rating), rating: p.rating } }
fn rating_count_cell(p: &Product) -> Cell { Cell::Text(format_count(p.rating_count)) }
fn category_cell(p: &Product) -> Cell { text_or_na(&p.category) }
fn brand_cell(p: &Product) -> Cell { text_or_na(&p.brand) }
fn availability_cell(p: &Product) -> Cell { text_or_na(&p.availability) }
fn link_cell(p: &Product) -> Cell { Cell::Link(p.product_url.clone().filter(|u| !u.is_empty())) }

pub const IMAGE: RowDescriptor = RowDescriptor::plain("Image", image_cell);
pub const PRICE: RowDescriptor = RowDescriptor::ranked("Price", price_cell, RankKey::Price, Policy::Minimize);
pub const ORIGINAL_PRICE: RowDescriptor = RowDescriptor::plain("Original Price", original_price_cell);
pub const DISCOUNT: RowDescriptor = RowDescriptor::ranked("Discount", discount_cell, RankKey::Discount, Policy::Maximize);
pub const RATING: RowDescriptor = RowDescriptor::ranked("Rating", rating_cell, RankKey::Rating, Policy::Maximize);
pub const RATING_COUNT: RowDescriptor = RowDescriptor::ranked("Rating Count", rating_count_cell, RankKey::RatingCount, Policy::Maximize);
pub const CATEGORY: RowDescriptor = RowDescriptor::plain("Category", category_cell);
pub const BRAND: RowDescriptor = RowDescriptor::plain("Brand", brand_cell);
pub const AVAILABILITY: RowDescriptor = RowDescriptor::plain("Availability", availability_cell);
pub const LINK: RowDescriptor = RowDescriptor::plain("Amazon Link", link_cell);

/// True when any product has `original_price > price`.
pub fn has_discounts(products: &[Product]) -> bool {
    products.iter().any(|p| p.is_discounted())
}

/// Rows to show for this product set, in display order.
pub fn row_descriptors(products: &[Product]) -> Vec<RowDescriptor> {
    let mut rows = vec![IMAGE, PRICE];
    if has_discounts(products) {
        rows.push(ORIGINAL_PRICE);
        rows.push(DISCOUNT);
    }
    rows.extend([RATING, RATING_COUNT, CATEGORY, BRAND, AVAILABILITY, LINK]);
    rows
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub cells: Vec<Cell>,
    pub winner: Option<usize>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComparisonTable {
    /// Column headers, one per product
    pub titles: Vec<String>,
    pub ids: Vec<ProductId>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn ncols(&self) -> usize { self.titles.len() }

    pub fn row(&self, label: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    pub fn has_row(&self, label: &str) -> bool { self.row(label).is_some() }

    pub fn column_of(&self, id: &ProductId) -> Option<usize> {
        self.ids.iter().position(|i| i == id)
    }

    /// Note naming the backend's value pick (lowest price per rating point).
    /// `None` when there is no pick or it isn't one of the columns.
    pub fn best_value_note(&self, pick: Option<&ProductId>) -> Option<String> {
        let title = self.titles.get(self.column_of(pick?)?)?;
        Some(format!("Best value (price per rating point): {}", title))
    }

    /// Flatten to strings for copy/export. First column is the row label;
    /// `mark_winners` appends `*` to winning cells.
    pub fn to_string_rows(&self, mark_winners: bool) -> (Vec<String>, Vec<Vec<String>>) {
        let mut headers = Vec::with_capacity(self.ncols() + 1);
        headers.push(s!());
        headers.extend(self.titles.iter().cloned());

        let rows = self
            .rows
            .iter()
            .map(|r| {
                let mut out = Vec::with_capacity(r.cells.len() + 1);
                out.push(s!(r.label));
                for (i, c) in r.cells.iter().enumerate() {
                    let mut t = c.text();
                    if mark_winners && r.winner == Some(i) { t.push_str(" *"); }
                    out.push(t);
                }
                out
            })
            .collect();

        (headers, rows)
    }
}

/// Reorder `products` to follow `ids`. Products the ids don't mention keep
/// their relative order at the end.
pub fn in_selection_order(mut products: Vec<Product>, ids: &[ProductId]) -> Vec<Product> {
    let rank = |p: &Product| ids.iter().position(|id| id == &p.product_id).unwrap_or(ids.len());
    products.sort_by_key(rank);
    products
}

/// Build the full comparison table for `products` (selection order).
pub fn build_table(products: &[Product]) -> ComparisonTable {
    let rows = row_descriptors(products)
        .iter()
        .map(|d| d.apply(products))
        .collect();

    ComparisonTable {
        titles: products.iter().map(|p| p.title.clone()).collect(),
        ids: products.iter().map(|p| p.product_id.clone()).collect(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimize_skips_zero() {
        assert_eq!(pick_winner(&[10.0, 0.0, 5.0], Policy::Minimize), Some(2));
    }

    #[test]
    fn minimize_all_zero_has_no_winner() {
        assert_eq!(pick_winner(&[0.0, 0.0], Policy::Minimize), None);
        assert_eq!(pick_winner(&[], Policy::Minimize), None);
    }

    #[test]
    fn maximize_all_zero_goes_to_first() {
        assert_eq!(pick_winner(&[0.0, 0.0, 0.0], Policy::Maximize), Some(0));
    }

    #[test]
    fn ties_go_left() {
        assert_eq!(pick_winner(&[3.0, 5.0, 5.0], Policy::Maximize), Some(1));
        assert_eq!(pick_winner(&[7.0, 4.0, 4.0, 9.0], Policy::Minimize), Some(1));
    }

    #[test]
    fn response_is_put_back_in_selection_order() {
        let p = |id: &str| Product { product_id: ProductId::from(id), ..Product::default() };
        let ids = [ProductId::from("b"), ProductId::from("a")];
        let out = in_selection_order(vec![p("a"), p("x"), p("b")], &ids);
        let got: Vec<&str> = out.iter().map(|p| p.product_id.as_str()).collect();
        assert_eq!(got, ["b", "a", "x"]);
    }

    #[test]
    fn best_value_note_names_the_column() {
        let p = |id: &str, title: &str| Product {
            product_id: ProductId::from(id),
            title: s!(title),
            ..Product::default()
        };
        let table = build_table(&[p("1", "Lamp"), p("2", "Kettle")]);
        assert_eq!(
            table.best_value_note(Some(&ProductId::from("2"))).as_deref(),
            Some("Best value (price per rating point): Kettle")
        );
        assert_eq!(table.best_value_note(Some(&ProductId::from("9"))), None);
        assert_eq!(table.best_value_note(None), None);
    }

    #[test]
    fn nan_ranks_as_zero() {
        assert_eq!(pick_winner(&[f64::NAN, 2.0], Policy::Minimize), Some(1));
        assert_eq!(pick_winner(&[f64::NAN, 0.0], Policy::Maximize), Some(0));
    }
}
