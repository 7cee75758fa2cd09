// tests/view_models.rs
use amasift_compare::api::types::{Product, ProductId};
use amasift_compare::config::consts::PLACEHOLDER_IMAGE;
use amasift_compare::core::SelectionSet;
use amasift_compare::view::{
    image_or_placeholder, ProductCardView, SelectionSummary, ADD_LABEL, REMOVE_LABEL,
};

fn product(id: &str, price: f64) -> Product {
    Product {
        product_id: ProductId::from(id),
        title: format!("Item {}", id),
        price,
        image_url: Some(format!("https://img.example/{}.jpg", id)),
        ..Product::default()
    }
}

#[test]
fn compare_button_enables_at_two() {
    let mut set = SelectionSet::new();
    let summary = SelectionSummary::build(&set);
    assert_eq!(summary.count_text, "(0)");
    assert!(!summary.compare_enabled);

    set.add(product("a", 1.0)).unwrap();
    assert!(!SelectionSummary::build(&set).compare_enabled);

    set.add(product("b", 2.0)).unwrap();
    let summary = SelectionSummary::build(&set);
    assert_eq!(summary.count_text, "(2)");
    assert!(summary.compare_enabled);
}

#[test]
fn summary_lists_in_selection_order() {
    let mut set = SelectionSet::new();
    set.add(product("b", 12.5)).unwrap();
    set.add(product("a", 3.0)).unwrap();

    let summary = SelectionSummary::build(&set);
    let titles: Vec<&str> = summary.entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Item b", "Item a"]);
    assert_eq!(summary.entries[0].price, "$12.50");
    assert_eq!(summary.entries[1].image_url, "https://img.example/a.jpg");
}

#[test]
fn card_button_follows_selection() {
    let p = product("a", 5.0);
    let mut set = SelectionSet::new();
    assert_eq!(ProductCardView::build(&p, &set).button, ADD_LABEL);

    set.toggle(&p).unwrap();
    assert_eq!(ProductCardView::build(&p, &set).button, REMOVE_LABEL);

    set.toggle(&p).unwrap();
    assert_eq!(ProductCardView::build(&p, &set).button, ADD_LABEL);
}

#[test]
fn blank_image_falls_back_to_placeholder() {
    assert_eq!(image_or_placeholder(None), PLACEHOLDER_IMAGE);
    assert_eq!(image_or_placeholder(Some("  ")), PLACEHOLDER_IMAGE);
    assert_eq!(image_or_placeholder(Some("x.png")), "x.png");
}
