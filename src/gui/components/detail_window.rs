// src/gui/components/detail_window.rs
//
// Floating product detail: card data, review stats, sentiment and the
// latest reviews.

use eframe::egui::{self, RichText};

use crate::{
    api::types::{Review, ReviewSentiment, ReviewStats},
    core::format::{format_count, format_price, star_rating},
    gui::app::{App, ProductDetail},
    view::image_or_placeholder,
};

use super::{product_card, region};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(detail) = app.detail.as_ref() else { return };

    let mut open = true;
    egui::Window::new("Product details")
        .open(&mut open)
        .default_width(460.0)
        .resizable(true)
        .collapsible(false)
        .show(ctx, |ui| {
            if region::draw_message(ui, detail) { return; }
            if let Some(d) = detail.ready() {
                egui::ScrollArea::vertical().max_height(560.0).show(ui, |ui| body(ui, d));
            }
        });

    if !open {
        app.detail = None;
    }
}

fn body(ui: &mut egui::Ui, d: &ProductDetail) {
    let p = &d.product;

    ui.horizontal(|ui| {
        product_card::image(ui, &image_or_placeholder(p.image_url.as_deref()), egui::vec2(140.0, 140.0));
        ui.vertical(|ui| {
            ui.label(RichText::new(&p.title).strong().size(16.0));
            ui.horizontal(|ui| {
                ui.label(RichText::new(format_price(Some(p.price))).strong());
                if p.is_discounted() {
                    ui.label(RichText::new(format_price(p.original_price)).strikethrough().weak());
                }
            });
            ui.label(format!("{} ({:.1}) {} ratings",
                star_rating(p.rating), p.rating, format_count(p.rating_count)));
            for (k, v) in [("Brand", &p.brand), ("Category", &p.category), ("Availability", &p.availability)] {
                if let Some(v) = v.as_deref().filter(|s| !s.is_empty()) {
                    ui.label(format!("{}: {}", k, v));
                }
            }
            if let Some(url) = p.product_url.as_deref().filter(|u| !u.is_empty()) {
                ui.hyperlink_to("View on Amazon", url);
            }
        });
    });

    if let Some(stats) = d.stats.as_ref().or(p.review_stats.as_ref()) {
        ui.separator();
        stats_block(ui, stats);
    }

    if let Some(sent) = &d.sentiment {
        ui.separator();
        sentiment_block(ui, sent);
    }

    if !p.reviews.is_empty() {
        ui.separator();
        ui.label(RichText::new("Reviews").strong());
        for r in &p.reviews {
            review(ui, r);
        }
    }
}

fn stats_block(ui: &mut egui::Ui, s: &ReviewStats) {
    ui.label(RichText::new("Review statistics").strong());
    ui.label(format!(
        "{} reviews, average {}, {} positive / {} negative",
        format_count(s.review_count),
        s.average_rating.map(|r| format!("{:.1}", r)).unwrap_or_else(|| s!("-")),
        s.positive_reviews,
        s.negative_reviews,
    ));

    let Some(dist) = &s.rating_distribution else { return };
    let total: u64 = dist.values().sum::<u64>().max(1);
    for star in (1..=5).rev() {
        let n = dist.get(&star.to_string()).copied().unwrap_or(0);
        ui.horizontal(|ui| {
            ui.label(format!("{}★", star));
            ui.add(egui::ProgressBar::new(n as f32 / total as f32)
                .desired_width(200.0)
                .text(n.to_string()));
        });
    }
}

fn sentiment_block(ui: &mut egui::Ui, s: &ReviewSentiment) {
    ui.label(RichText::new("Sentiment").strong());
    ui.label(format!(
        "average {:.2}: {} positive, {} neutral, {} negative",
        s.average_sentiment, s.positive_count, s.neutral_count, s.negative_count
    ));
    if let Some(r) = s.top_positive.first() {
        ui.weak("Most positive:");
        review(ui, r);
    }
    if let Some(r) = s.top_negative.first() {
        ui.weak("Most negative:");
        review(ui, r);
    }
}

fn review(ui: &mut egui::Ui, r: &Review) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            if let Some(rating) = r.rating {
                ui.label(star_rating(rating).glyphs());
            }
            if let Some(t) = &r.title {
                ui.label(RichText::new(t).strong());
            }
        });
        if let Some(text) = &r.text {
            ui.add(egui::Label::new(text).wrap());
        }
        ui.horizontal(|ui| {
            ui.weak(r.reviewer.as_deref().unwrap_or("Anonymous"));
            if let Some(date) = &r.date { ui.weak(date); }
            if r.helpful_votes > 0 {
                ui.weak(format!("{} found this helpful", r.helpful_votes));
            }
        });
    });
}
