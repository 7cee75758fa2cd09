// src/gui/app.rs
use std::{error::Error, sync::mpsc};

use eframe::egui;

use crate::{
    api::{
        types::{Category, HistoryEntry, Product, ProductId, ReviewSentiment, ReviewStats},
        ApiClient,
    },
    config::{
        options::{AppOptions, PageKind},
        state::{AppState, GuiState},
    },
    core::{compare::ComparisonTable, sequence::RequestSeq, SelectionSet},
    view::Region,
};

use super::{actions::{self, Fetched}, components, router};

/// Launch parameters (`--section`, `--category`).
#[derive(Clone, Debug, Default)]
pub struct Launch {
    pub section: Option<PageKind>,
    pub category: Option<String>,
}

pub fn run(
    native: eframe::NativeOptions,
    options: AppOptions,
    launch: Launch,
) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "AmaSift Compare",
        native,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let state = AppState { options, gui: GuiState::default() };
            Ok(Box::new(App::new(cc.egui_ctx.clone(), state, launch)))
        }),
    )?;
    Ok(())
}

/// A finished comparison, ready to draw.
#[derive(Clone, Debug)]
pub struct ComparisonView {
    pub table: ComparisonTable,
    /// Backend's value pick, as a note under the table
    pub best_value: Option<String>,
}

/// Product detail window contents.
#[derive(Clone, Debug)]
pub struct ProductDetail {
    pub product: Product,
    pub stats: Option<ReviewStats>,
    pub sentiment: Option<ReviewSentiment>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub client: ApiClient,
    pub egui_ctx: egui::Context,

    pub selection: SelectionSet,
    pub seq: RequestSeq,

    // worker threads -> UI
    pub(super) tx: mpsc::Sender<Fetched>,
    rx: mpsc::Receiver<Fetched>,

    // fetch-driven regions
    pub categories: Region<Vec<Category>>,
    pub products: Region<Vec<Product>>,
    pub comparison: Region<ComparisonView>,
    pub deals: Region<Vec<Product>>,
    pub history: Region<Vec<HistoryEntry>>,

    /// `Some` while the detail window is open
    pub detail: Option<Region<ProductDetail>>,

    /// Issued by the backend on the first comparison
    pub session_id: Option<String>,

    /// Product to highlight in the grid after "View Details"
    pub highlight: Option<ProductId>,

    /// Blocking notice (capacity)
    pub notice: Option<String>,

    /// Status line; set by actions on the UI thread
    status: String,
}

impl App {
    pub fn new(egui_ctx: egui::Context, state: AppState, launch: Launch) -> Self {
        let client = ApiClient::new(&state.options.api);
        Self::with_client(egui_ctx, state, client, launch)
    }

    /// Same as [`App::new`] over a caller-built client.
    pub fn with_client(egui_ctx: egui::Context, state: AppState, client: ApiClient, launch: Launch) -> Self {
        let (tx, rx) = mpsc::channel();

        tracing::info!("Init: api={}, launch={:?}", client.base_url(), launch);

        let mut app = Self {
            state,
            client,
            egui_ctx,
            selection: SelectionSet::new(),
            seq: RequestSeq::new(),
            tx,
            rx,
            categories: Region::Idle,
            products: Region::Idle,
            comparison: Region::Idle,
            deals: Region::Idle,
            history: Region::Idle,
            detail: None,
            session_id: None,
            highlight: None,
            notice: None,
            status: s!("Idle"),
        };

        actions::load_categories(&mut app);
        app.apply_launch(launch);
        app
    }

    /// Category first, so entering Compare loads the filtered grid.
    fn apply_launch(&mut self, launch: Launch) {
        if let Some(cat) = launch.category {
            self.state.gui.filters.category = cat;
        }
        if let Some(kind) = launch.section {
            router::navigate(self, kind);
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.state.gui.current_page }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    #[inline]
    pub fn status_text(&self) -> &str { &self.status }

    /// True while any region is waiting on the network.
    pub fn busy(&self) -> bool {
        self.categories.is_loading()
            || self.products.is_loading()
            || self.comparison.is_loading()
            || self.deals.is_loading()
            || self.history.is_loading()
            || self.detail.as_ref().is_some_and(Region::is_loading)
    }

    /// Apply every finished fetch. Stale tickets are dropped.
    fn drain_inbox(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            if !self.seq.accept(&msg.ticket) {
                continue;
            }
            actions::apply(self, msg.payload);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_inbox();

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            components::nav::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        if self.current_page_kind() == PageKind::Compare {
            egui::SidePanel::right("selection")
                .resizable(false)
                .default_width(240.0)
                .show(ctx, |ui| {
                    components::selection_panel::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            router::page_for(self.current_page_kind()).draw(ui, self);
        });

        components::detail_window::draw(ctx, self);
        components::notice::draw(ctx, self);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        api::{
            net::{HttpRequest, HttpResponse, Transport},
            types::{CompareResult, ServerWinners},
            ApiError, ApiResult,
        },
        config::options::ApiOptions,
        core::sequence::Slot,
        gui::actions::Payload,
        view::{EMPTY_PRODUCTS, ERROR_COMPARE, ERROR_PRODUCTS},
    };

    struct Offline;

    impl Transport for Offline {
        fn send(&self, req: &HttpRequest) -> ApiResult<HttpResponse> {
            Err(ApiError::Transport { url: req.url.clone(), reason: s!("offline") })
        }
    }

    fn app() -> App {
        let client = ApiClient::with_transport(&ApiOptions::default(), Arc::new(Offline));
        App::with_client(egui::Context::default(), AppState::default(), client, Launch::default())
    }

    fn product(id: &str, title: &str, price: f64) -> Product {
        Product { product_id: ProductId::from(id), title: s!(title), price, ..Product::default() }
    }

    #[test]
    fn failed_fetch_shows_static_message() {
        let mut app = app();
        let err = ApiError::Status { code: 500, text: s!("Internal Server Error"), url: s!("http://t/api/products") };
        actions::apply(&mut app, Payload::Products(Err(err)));

        assert_eq!(app.products, Region::Failed(ERROR_PRODUCTS));
        assert_eq!(app.status_text(), ERROR_PRODUCTS);
    }

    #[test]
    fn empty_product_list_shows_empty_text() {
        let mut app = app();
        actions::apply(&mut app, Payload::Products(Ok(vec![])));
        assert_eq!(app.products, Region::Empty(EMPTY_PRODUCTS));
    }

    #[test]
    fn failed_compare_keeps_selection() {
        let mut app = app();
        app.selection.add(product("a", "A", 1.0)).unwrap();
        app.selection.add(product("b", "B", 2.0)).unwrap();
        let ids = app.selection.ids();
        actions::apply(&mut app, Payload::Compare {
            ids,
            result: Err(ApiError::Backend(s!("Products not found"))),
        });

        assert_eq!(app.comparison.message(), Some(ERROR_COMPARE));
        assert_eq!(app.selection.count(), 2);
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut app = app();
        let old = app.seq.begin(Slot::Products);
        let new = app.seq.begin(Slot::Products);

        let stale = vec![product("x", "Old", 1.0)];
        app.tx.send(Fetched { ticket: old, payload: Payload::Products(Ok(stale)) }).unwrap();
        app.drain_inbox();
        assert_eq!(app.products, Region::Idle);

        let fresh = vec![product("a", "New", 1.0), product("b", "Newer", 2.0)];
        app.tx.send(Fetched { ticket: new, payload: Payload::Products(Ok(fresh)) }).unwrap();
        app.drain_inbox();
        assert_eq!(app.products.ready().map(Vec::len), Some(2));
    }

    #[test]
    fn compare_result_follows_selection_and_notes_value_pick() {
        let mut app = app();
        let result = CompareResult {
            products: vec![product("a", "A", 5.0), product("b", "B", 9.0)],
            comparison: Some(ServerWinners { value_winner: Some(ProductId::from("a")) }),
            session_id: Some(s!("s1")),
            error: None,
        };
        actions::apply(&mut app, Payload::Compare {
            ids: vec![ProductId::from("b"), ProductId::from("a")],
            result: Ok(result),
        });

        let view = app.comparison.ready().unwrap();
        assert_eq!(view.table.titles, ["B", "A"]);
        assert_eq!(view.best_value.as_deref(), Some("Best value (price per rating point): A"));
        assert_eq!(app.session_id.as_deref(), Some("s1"));
    }

    #[test]
    fn view_deal_sets_category_and_keeps_other_filters() {
        let mut app = app();
        app.state.gui.filters.min_price = s!("10");
        app.state.gui.filters.search = s!("usb");

        let deal = Product { category: Some(s!("Electronics")), ..product("d1", "Cable", 4.0) };
        actions::view_deal(&mut app, &deal);

        let filters = &app.state.gui.filters;
        assert_eq!(filters.category, "Electronics");
        assert_eq!(filters.min_price, "10");
        assert_eq!(filters.search, "usb");
        assert_eq!(app.highlight, Some(ProductId::from("d1")));
        assert_eq!(app.state.gui.current_page, PageKind::Compare);
    }

    #[test]
    fn detail_after_close_is_ignored() {
        let mut app = app();
        let detail = ProductDetail { product: product("a", "A", 1.0), stats: None, sentiment: None };
        actions::apply(&mut app, Payload::Detail(Ok(detail)));
        assert!(app.detail.is_none());
    }
}
