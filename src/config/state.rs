// src/config/state.rs
use super::options::{AppOptions, PageKind};
use crate::api::query::ProductQuery;

/// Raw text of the Compare page filter bar, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterForm {
    /// Empty means "All Categories"
    pub category: String,
    pub min_price: String,
    pub max_price: String,
    pub min_rating: String,
    pub search: String,
}

impl FilterForm {
    /// Build the `/products` query. Blank fields are left out; numeric
    /// fields that don't parse are dropped too.
    pub fn to_query(&self) -> ProductQuery {
        ProductQuery {
            category: non_blank(&self.category),
            min_price: parse_num(&self.min_price),
            max_price: parse_num(&self.max_price),
            min_rating: parse_num(&self.min_rating),
            search: non_blank(&self.search),
            limit: None,
            offset: None,
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(s!(t)) }
}

fn parse_num(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() { return None; }
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            tracing::debug!("Filter: ignoring non-numeric input {:?}", t);
            None
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab
    pub current_page: PageKind,

    pub filters: FilterForm,

    pub window_w: u32,
    pub window_h: u32,

    /// Compare page -> show/hide the session history panel
    pub show_history: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page: PageKind::Home,
            filters: FilterForm::default(),
            window_w: 1200,
            window_h: 780,
            show_history: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_garbage_fields_are_dropped() {
        let form = FilterForm {
            category: s!("  "),
            min_price: s!("10"),
            max_price: s!("abc"),
            min_rating: s!(" 4.5 "),
            search: s!(""),
        };
        let q = form.to_query();
        assert_eq!(q.category, None);
        assert_eq!(q.min_price, Some(10.0));
        assert_eq!(q.max_price, None);
        assert_eq!(q.min_rating, Some(4.5));
        assert_eq!(q.search, None);
    }
}
