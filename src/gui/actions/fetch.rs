// src/gui/actions/fetch.rs
//
// Every network call runs on its own thread with a ticket from RequestSeq.
// Results come back through App's channel and are applied in `apply` on the
// UI thread; stale tickets never reach it.

use crate::{
    api::{
        types::{Category, CompareResult, HistoryEntry, Product, ProductId},
        ApiClient, ApiResult,
    },
    config::consts::{DEALS_LIMIT, HISTORY_LIMIT, MIN_COMPARE},
    config::options::PageKind,
    core::{
        compare::{build_table, in_selection_order},
        sequence::{Slot, Ticket},
    },
    gui::{
        app::{App, ComparisonView, ProductDetail},
        router,
    },
    view::*,
};

pub struct Fetched {
    pub ticket: Ticket,
    pub payload: Payload,
}

pub enum Payload {
    Categories(ApiResult<Vec<Category>>),
    Products(ApiResult<Vec<Product>>),
    Compare {
        ids: Vec<ProductId>,
        result: ApiResult<CompareResult>,
    },
    Deals(ApiResult<Vec<Product>>),
    Detail(ApiResult<ProductDetail>),
    History(ApiResult<Vec<HistoryEntry>>),
}

/// Run `job` on a worker thread. Returns false if the thread could not be
/// started; the caller marks its region failed.
fn spawn<F>(app: &mut App, slot: Slot, job: F) -> bool
where
    F: FnOnce(&ApiClient) -> Payload + Send + 'static,
{
    let ticket = app.seq.begin(slot);
    let client = app.client.clone();
    let tx = app.tx.clone();
    let ctx = app.egui_ctx.clone();

    let spawned = std::thread::Builder::new()
        .name(format!("fetch-{:?}", slot).to_lowercase())
        .spawn(move || {
            let payload = job(&client);
            // Receiver only goes away on shutdown
            let _ = tx.send(Fetched { ticket, payload });
            ctx.request_repaint();
        });

    match spawned {
        Ok(_) => {
            tracing::debug!("Fetch: {:?} started (seq={})", slot, ticket.seq);
            true
        }
        Err(e) => {
            tracing::error!("Fetch: could not start {:?} worker: {}", slot, e);
            false
        }
    }
}

/* ---------- triggers ---------- */

pub fn load_categories(app: &mut App) {
    app.categories = Region::Loading(LOADING_CATEGORIES);
    app.status(LOADING_CATEGORIES);
    if !spawn(app, Slot::Categories, |c| Payload::Categories(c.categories(true))) {
        app.categories = Region::Failed(ERROR_CATEGORIES);
    }
}

pub fn load_products(app: &mut App) {
    let query = app.state.gui.filters.to_query();
    tracing::info!("Fetch: products {:?}", query.to_query_string());

    app.products = Region::Loading(LOADING_PRODUCTS);
    app.status(LOADING_PRODUCTS);
    if !spawn(app, Slot::Products, move |c| Payload::Products(c.products(&query))) {
        app.products = Region::Failed(ERROR_PRODUCTS);
    }
}

/// Category card on Home: filter by it and show the Compare tab.
pub fn browse_category(app: &mut App, category: &str) {
    app.state.gui.filters.category = s!(category);
    app.highlight = None;
    load_products(app);
    router::navigate(app, PageKind::Compare);
}

/// "View Details" on a deal: open its category on the Compare tab and
/// highlight the product there. The other filters are left as they are.
pub fn view_deal(app: &mut App, p: &Product) {
    tracing::info!("UI: View deal {} ({:?})", p.product_id, p.category);
    app.state.gui.filters.category = p.category.clone().unwrap_or_default();
    app.highlight = Some(p.product_id.clone());
    load_products(app);
    router::navigate(app, PageKind::Compare);
}

pub fn load_deals(app: &mut App) {
    app.deals = Region::Loading(LOADING_DEALS);
    app.status(LOADING_DEALS);
    if !spawn(app, Slot::Deals, |c| Payload::Deals(c.deals(DEALS_LIMIT))) {
        app.deals = Region::Failed(ERROR_DEALS);
    }
}

/// Compare the current selection.
pub fn compare(app: &mut App) {
    let ids = app.selection.ids();
    compare_ids(app, ids);
}

pub fn compare_ids(app: &mut App, ids: Vec<ProductId>) {
    if ids.len() < MIN_COMPARE {
        tracing::debug!("Compare: ignored with {} product(s)", ids.len());
        return;
    }
    tracing::info!("Compare: {:?}", ids);

    app.comparison = Region::Loading(LOADING_COMPARE);
    app.status(LOADING_COMPARE);

    let session = app.session_id.clone();
    let ok = spawn(app, Slot::Compare, move |c| {
        let result = c.compare(&ids, session.as_deref());
        Payload::Compare { ids, result }
    });
    if !ok {
        app.comparison = Region::Failed(ERROR_COMPARE);
    }
}

/// Open the detail window for `id`. Review stats and sentiment are
/// best-effort; the window still shows the product without them.
pub fn load_detail(app: &mut App, id: &ProductId) {
    app.detail = Some(Region::Loading(LOADING_DETAIL));
    let id = id.clone();
    let ok = spawn(app, Slot::Detail, move |c| {
        let res = c.product(&id, true).map(|product| {
            let stats = c.review_stats(&id)
                .inspect_err(|e| tracing::warn!("Fetch: review stats for {} failed: {}", id, e))
                .ok();
            let sentiment = c.review_sentiment(&id)
                .inspect_err(|e| tracing::warn!("Fetch: sentiment for {} failed: {}", id, e))
                .ok();
            ProductDetail { product, stats, sentiment }
        });
        Payload::Detail(res)
    });
    if !ok {
        app.detail = Some(Region::Failed(ERROR_DETAIL));
    }
}

pub fn load_history(app: &mut App) {
    let Some(session) = app.session_id.clone() else {
        tracing::debug!("History: no session yet");
        return;
    };
    app.history = Region::Loading(LOADING_HISTORY);
    if !spawn(app, Slot::History, move |c| Payload::History(c.history(&session, HISTORY_LIMIT))) {
        app.history = Region::Failed(ERROR_HISTORY);
    }
}

/* ---------- results (UI thread) ---------- */

pub fn apply(app: &mut App, payload: Payload) {
    match payload {
        Payload::Categories(Ok(cats)) => {
            tracing::info!("Fetch: {} categories", cats.len());
            app.categories = Region::Ready(cats);
            app.status("Ready");
        }
        Payload::Categories(Err(e)) => {
            tracing::error!("Fetch: categories failed: {}", e);
            app.categories = Region::Failed(ERROR_CATEGORIES);
            app.status(ERROR_CATEGORIES);
        }

        Payload::Products(Ok(list)) => {
            tracing::info!("Fetch: {} products", list.len());
            app.status(format!("{} products", list.len()));
            app.products = Region::from_list(list, EMPTY_PRODUCTS);
        }
        Payload::Products(Err(e)) => {
            tracing::error!("Fetch: products failed: {}", e);
            app.products = Region::Failed(ERROR_PRODUCTS);
            app.status(ERROR_PRODUCTS);
        }

        Payload::Compare { ids, result: Ok(res) } => {
            if let Some(sid) = res.session_id.filter(|s| !s.is_empty()) {
                if app.session_id.as_deref() != Some(sid.as_str()) {
                    tracing::info!("Compare: session {}", sid);
                }
                app.session_id = Some(sid);
            }

            let products = in_selection_order(res.products, &ids);
            let table = build_table(&products);
            tracing::info!("Compare: {} columns, {} rows", table.ncols(), table.rows.len());
            let pick = res.comparison.and_then(|c| c.value_winner);
            let best_value = table.best_value_note(pick.as_ref());
            tracing::debug!("Compare: backend value pick {:?}", pick);

            app.comparison = Region::Ready(ComparisonView { table, best_value });
            app.status("Comparison ready");

            if app.state.gui.show_history {
                load_history(app);
            }
        }
        Payload::Compare { result: Err(e), .. } => {
            tracing::error!("Compare: failed: {}", e);
            app.comparison = Region::Failed(ERROR_COMPARE);
            app.status(ERROR_COMPARE);
        }

        Payload::Deals(Ok(list)) => {
            tracing::info!("Fetch: {} deals", list.len());
            app.deals = Region::from_list(list, EMPTY_DEALS);
            app.status("Ready");
        }
        Payload::Deals(Err(e)) => {
            tracing::error!("Fetch: deals failed: {}", e);
            app.deals = Region::Failed(ERROR_DEALS);
            app.status(ERROR_DEALS);
        }

        // Window closed while loading -> drop
        Payload::Detail(res) if app.detail.is_none() => {
            tracing::debug!("Fetch: detail arrived after close (ok={})", res.is_ok());
        }
        Payload::Detail(Ok(d)) => {
            app.detail = Some(Region::Ready(d));
        }
        Payload::Detail(Err(e)) => {
            tracing::error!("Fetch: product detail failed: {}", e);
            app.detail = Some(Region::Failed(ERROR_DETAIL));
        }

        Payload::History(Ok(list)) => {
            app.history = Region::from_list(list, EMPTY_HISTORY);
        }
        Payload::History(Err(e)) => {
            tracing::error!("Fetch: history failed: {}", e);
            app.history = Region::Failed(ERROR_HISTORY);
        }
    }
}
