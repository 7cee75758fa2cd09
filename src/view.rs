// src/view.rs
//! Pure view models. Built from wire records plus the current selection each
//! frame; egui widgets are then drawn straight from these. Nothing in here
//! touches the UI or the network.

use crate::api::types::{Product, ProductId};
use crate::core::format::{discount_percent, format_count, format_price, star_rating, Stars};
use crate::core::SelectionSet;
use crate::config::consts::PLACEHOLDER_IMAGE;

pub const ADD_LABEL: &str = "Add to Compare";
pub const REMOVE_LABEL: &str = "Remove from Comparison";
pub const DETAILS_LABEL: &str = "View Details";

/* ---------- status texts ---------- */

pub const LOADING_CATEGORIES: &str = "Loading categories...";
pub const LOADING_PRODUCTS: &str = "Loading products...";
pub const LOADING_COMPARE: &str = "Comparing products...";
pub const LOADING_DEALS: &str = "Loading top deals...";
pub const LOADING_DETAIL: &str = "Loading product details...";
pub const LOADING_HISTORY: &str = "Loading comparison history...";

pub const EMPTY_PRODUCTS: &str = "No products found matching your filters.";
pub const EMPTY_DEALS: &str = "No deals found at the moment.";
pub const EMPTY_HISTORY: &str = "No comparisons yet.";

pub const ERROR_CATEGORIES: &str = "Error loading categories. Please try again.";
pub const ERROR_PRODUCTS: &str = "Error loading products. Please try again.";
pub const ERROR_COMPARE: &str = "Error comparing products. Please try again.";
pub const ERROR_DEALS: &str = "Error loading deals. Please try again.";
pub const ERROR_DETAIL: &str = "Error loading product details. Please try again.";
pub const ERROR_HISTORY: &str = "Error loading comparison history. Please try again.";

/* ---------- regions ---------- */

/// State of one fetch-driven area of the UI.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Region<T> {
    #[default]
    Idle,
    Loading(&'static str),
    Ready(T),
    Empty(&'static str),
    Failed(&'static str),
}

impl<T> Region<T> {
    #[inline] pub fn is_loading(&self) -> bool { matches!(self, Region::Loading(_)) }
    #[inline] pub fn is_failed(&self) -> bool { matches!(self, Region::Failed(_)) }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Region::Ready(v) => Some(v),
            _ => None,
        }
    }

    /// Loading / empty / error text, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Region::Loading(m) | Region::Empty(m) | Region::Failed(m) => Some(m),
            _ => None,
        }
    }
}

impl<T> Region<Vec<T>> {
    /// `Ready(items)`, or `Empty(text)` when there are none.
    pub fn from_list(items: Vec<T>, empty: &'static str) -> Self {
        if items.is_empty() { Region::Empty(empty) } else { Region::Ready(items) }
    }
}

/* ---------- cards ---------- */

#[derive(Clone, Debug, PartialEq)]
pub struct ProductCardView {
    pub id: ProductId,
    pub title: String,
    pub image_url: String,
    pub price: String,
    /// Set only when discounted
    pub original_price: Option<String>,
    /// `-N%`, set only when discounted
    pub badge: Option<String>,
    pub stars: Stars,
    /// `(1,234)`
    pub rating_count: String,
    pub category: Option<String>,
    pub selected: bool,
    pub button: &'static str,
}

impl ProductCardView {
    pub fn build(p: &Product, selection: &SelectionSet) -> Self {
        let selected = selection.contains(&p.product_id);
        let mut card = Self::base(p);
        card.selected = selected;
        card.button = if selected { REMOVE_LABEL } else { ADD_LABEL };
        card
    }

    fn base(p: &Product) -> Self {
        let pct = discount_percent(p.price, p.original_price);
        Self {
            id: p.product_id.clone(),
            title: p.title.clone(),
            image_url: image_or_placeholder(p.image_url.as_deref()),
            price: format_price(Some(p.price)),
            original_price: pct.and(p.original_price).map(|op| format_price(Some(op))),
            badge: pct.map(|n| format!("-{}%", n)),
            stars: star_rating(p.rating),
            rating_count: format!("({})", format_count(p.rating_count)),
            category: p.category.clone().filter(|c| !c.trim().is_empty()),
            selected: false,
            button: ADD_LABEL,
        }
    }
}

/// A product card on the Deals page. Never reflects the selection.
#[derive(Clone, Debug, PartialEq)]
pub struct DealCardView(pub ProductCardView);

impl DealCardView {
    pub fn build(p: &Product) -> Self {
        let mut card = ProductCardView::base(p);
        card.button = DETAILS_LABEL;
        DealCardView(card)
    }

    pub fn card(&self) -> &ProductCardView { &self.0 }
}

pub fn image_or_placeholder(url: Option<&str>) -> String {
    match url.map(str::trim) {
        Some(u) if !u.is_empty() => s!(u),
        _ => s!(PLACEHOLDER_IMAGE),
    }
}

/* ---------- selection panel ---------- */

#[derive(Clone, Debug, PartialEq)]
pub struct SelectedEntry {
    pub id: ProductId,
    pub title: String,
    pub price: String,
    pub image_url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSummary {
    /// `(n)`
    pub count_text: String,
    pub compare_enabled: bool,
    pub entries: Vec<SelectedEntry>,
}

impl SelectionSummary {
    pub fn build(selection: &SelectionSet) -> Self {
        Self {
            count_text: format!("({})", selection.count()),
            compare_enabled: selection.can_compare(),
            entries: selection
                .iter()
                .map(|p| SelectedEntry {
                    id: p.product_id.clone(),
                    title: p.title.clone(),
                    price: format_price(Some(p.price)),
                    image_url: image_or_placeholder(p.image_url.as_deref()),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64, original: Option<f64>) -> Product {
        Product {
            product_id: ProductId::from(id),
            title: s!("Desk Lamp"),
            price,
            original_price: original,
            rating: 4.5,
            rating_count: 1234,
            ..Product::default()
        }
    }

    #[test]
    fn discounted_card_has_badge_and_strikethrough_price() {
        let card = ProductCardView::build(&product("a", 80.0, Some(100.0)), &SelectionSet::new());
        assert_eq!(card.price, "$80.00");
        assert_eq!(card.original_price.as_deref(), Some("$100.00"));
        assert_eq!(card.badge.as_deref(), Some("-20%"));
        assert_eq!(card.rating_count, "(1,234)");
        assert_eq!(card.image_url, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn equal_original_price_shows_no_badge() {
        let card = ProductCardView::build(&product("a", 100.0, Some(100.0)), &SelectionSet::new());
        assert_eq!(card.original_price, None);
        assert_eq!(card.badge, None);
    }

    #[test]
    fn selected_card_offers_removal() {
        let p = product("a", 10.0, None);
        let mut set = SelectionSet::new();
        set.add(p.clone()).unwrap();
        let card = ProductCardView::build(&p, &set);
        assert!(card.selected);
        assert_eq!(card.button, REMOVE_LABEL);
    }

    #[test]
    fn deal_card_button_is_view_details() {
        let deal = DealCardView::build(&product("a", 10.0, Some(20.0)));
        assert_eq!(deal.card().button, DETAILS_LABEL);
        assert!(!deal.card().selected);
    }

    #[test]
    fn empty_list_becomes_empty_region() {
        let r: Region<Vec<u8>> = Region::from_list(vec![], EMPTY_DEALS);
        assert_eq!(r.message(), Some(EMPTY_DEALS));
        assert!(Region::from_list(vec![1u8], EMPTY_DEALS).ready().is_some());
    }
}
