// src/cli.rs
//
// Command-line front end. One subcommand per backend endpoint; output goes
// to stdout as an aligned table, CSV or TSV.

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::{
    api::{query::ProductQuery, types::*, ApiClient},
    config::{
        consts::{DEALS_LIMIT, HISTORY_LIMIT, MIN_COMPARE, REVIEWS_LIMIT},
        options::{ApiOptions, ExportFormat},
    },
    core::{
        compare::{build_table, in_selection_order, ComparisonTable},
        format::{discount_percent, format_count, format_price, star_rating},
        SelectionSet,
    },
    csv,
};

#[derive(Parser, Debug)]
#[command(name = "amasift-cli", version, about = "Query the AmaSift Compare backend from the terminal")]
pub struct Cli {
    /// Full API base URL (overrides --host)
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// Backend host; localhost uses the dev port
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Output format: table, csv or tsv
    #[arg(long, global = true, default_value = "table", value_parser = parse_format)]
    pub format: ExportFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List product categories
    Categories {
        /// Include product counts
        #[arg(long)]
        with_count: bool,
    },
    /// Search and filter products
    Products(ProductArgs),
    /// Show one product
    Product {
        id: String,
        /// Include recent reviews
        #[arg(long)]
        with_reviews: bool,
    },
    /// Top discounted products
    Deals {
        #[arg(short = 'n', long, default_value_t = DEALS_LIMIT)]
        limit: u32,
    },
    /// Compare 2 to 4 products side by side
    Compare {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
        /// Continue an existing comparison session
        #[arg(long)]
        session: Option<String>,
    },
    /// Past comparisons of a session
    History {
        #[arg(long)]
        session: String,
        #[arg(short = 'n', long, default_value_t = HISTORY_LIMIT)]
        limit: u32,
    },
    /// Reviews of a product
    Reviews {
        id: String,
        #[arg(short = 'n', long, default_value_t = REVIEWS_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Review statistics of a product
    Stats { id: String },
    /// Review sentiment summary of a product
    Sentiment { id: String },
}

#[derive(Args, Debug, Default)]
pub struct ProductArgs {
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub min_price: Option<f64>,
    #[arg(long)]
    pub max_price: Option<f64>,
    #[arg(long)]
    pub min_rating: Option<f64>,
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long)]
    pub offset: Option<u32>,
}

impl From<ProductArgs> for ProductQuery {
    fn from(a: ProductArgs) -> Self {
        ProductQuery {
            category: a.category,
            min_price: a.min_price,
            max_price: a.max_price,
            min_rating: a.min_rating,
            search: a.search,
            limit: a.limit,
            offset: a.offset,
        }
    }
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    ExportFormat::parse(s).ok_or_else(|| format!("unknown format '{}' (table, csv, tsv)", s))
}

impl Cli {
    pub fn api_options(&self) -> ApiOptions {
        ApiOptions::resolve(self.api.as_deref(), self.host.as_deref())
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let client = ApiClient::new(&cli.api_options());
    tracing::info!("CLI: {:?} via {}", cli.command, client.base_url());
    let out = execute(&client, cli.command, cli.format)?;
    print!("{}", out);
    Ok(())
}

/// Run one command and render its output.
pub fn execute(client: &ApiClient, command: Command, format: ExportFormat) -> Result<String> {
    let render = |headers: &[&str], rows: Vec<Vec<String>>| {
        let headers: Vec<String> = headers.iter().map(|h| s!(*h)).collect();
        csv::format_rows(&headers, &rows, format)
    };

    let out = match command {
        Command::Categories { with_count } => {
            let cats = client.categories(with_count).wrap_err("loading categories")?;
            let rows = cats
                .into_iter()
                .map(|c| vec![c.category, c.product_count.map(format_count).unwrap_or_default()])
                .collect();
            render(&["Category", "Products"], rows)
        }

        Command::Products(args) => {
            let list = client.products(&args.into()).wrap_err("loading products")?;
            if list.is_empty() && format == ExportFormat::Table {
                return Ok(s!("No products found matching your filters.\n"));
            }
            render(PRODUCT_HEADERS, list.iter().map(product_row).collect())
        }

        Command::Product { id, with_reviews } => {
            let p = client.product(&ProductId::from(id), with_reviews).wrap_err("loading product")?;
            let mut out = render(&["Field", "Value"], product_fields(&p));
            if !p.reviews.is_empty() {
                out.push('\n');
                out.push_str(&render(REVIEW_HEADERS, p.reviews.iter().map(review_row).collect()));
            }
            out
        }

        Command::Deals { limit } => {
            let list = client.deals(limit).wrap_err("loading deals")?;
            if list.is_empty() && format == ExportFormat::Table {
                return Ok(s!("No deals found at the moment.\n"));
            }
            render(PRODUCT_HEADERS, list.iter().map(product_row).collect())
        }

        Command::Compare { ids, session } => {
            let selection = select_ids(&ids)?;
            let ids = selection.ids();
            let res = client
                .compare(&ids, session.as_deref())
                .wrap_err("comparing products")?;

            let products = in_selection_order(res.products, &ids);
            let table = build_table(&products);
            let pick = res.comparison.and_then(|c| c.value_winner);
            compare_output(&table, pick.as_ref(), res.session_id.as_deref(), format)
        }

        Command::History { session, limit } => {
            let list = client.history(&session, limit).wrap_err("loading history")?;
            let rows = list
                .into_iter()
                .map(|h| {
                    let ids: Vec<&str> = h.product_ids.iter().map(ProductId::as_str).collect();
                    vec![
                        h.id.map(|n| n.to_string()).unwrap_or_default(),
                        h.created_at.unwrap_or_default(),
                        ids.join(","),
                    ]
                })
                .collect();
            render(&["ID", "Created", "Products"], rows)
        }

        Command::Reviews { id, limit, offset } => {
            let list = client
                .reviews(&ProductId::from(id), limit, offset)
                .wrap_err("loading reviews")?;
            render(REVIEW_HEADERS, list.iter().map(review_row).collect())
        }

        Command::Stats { id } => {
            let s = client.review_stats(&ProductId::from(id)).wrap_err("loading review stats")?;
            let mut rows = vec![
                vec![s!("Reviews"), format_count(s.review_count)],
                vec![s!("Average rating"), opt_num(s.average_rating, 1)],
                vec![s!("Positive"), s.positive_reviews.to_string()],
                vec![s!("Negative"), s.negative_reviews.to_string()],
                vec![s!("Average sentiment"), opt_num(s.average_sentiment, 2)],
            ];
            if let Some(dist) = s.rating_distribution {
                for star in (1..=5).rev() {
                    let n = dist.get(&star.to_string()).copied().unwrap_or(0);
                    rows.push(vec![format!("{} star", star), n.to_string()]);
                }
            }
            render(&["Field", "Value"], rows)
        }

        Command::Sentiment { id } => {
            let s = client.review_sentiment(&ProductId::from(id)).wrap_err("loading sentiment")?;
            let mut rows = vec![
                vec![s!("Average sentiment"), format!("{:.2}", s.average_sentiment)],
                vec![s!("Positive"), s.positive_count.to_string()],
                vec![s!("Neutral"), s.neutral_count.to_string()],
                vec![s!("Negative"), s.negative_count.to_string()],
            ];
            for r in s.top_positive.iter().take(3) {
                rows.push(vec![s!("Top positive"), review_summary(r)]);
            }
            for r in s.top_negative.iter().take(3) {
                rows.push(vec![s!("Top negative"), review_summary(r)]);
            }
            render(&["Field", "Value"], rows)
        }
    };

    Ok(out)
}

/// Comparison table in `format`. The table format adds a legend, the
/// backend's value pick and the session; CSV/TSV stay pure data.
pub fn compare_output(
    table: &ComparisonTable,
    value_pick: Option<&ProductId>,
    session: Option<&str>,
    format: ExportFormat,
) -> String {
    let marked = format == ExportFormat::Table;
    let (headers, rows) = table.to_string_rows(marked);
    let mut out = csv::format_rows(&headers, &rows, format);
    if !marked {
        return out;
    }

    out.push_str("\n* = best in row\n");
    if let Some(note) = table.best_value_note(value_pick) {
        out.push_str(&note);
        out.push('\n');
    }
    if let Some(sid) = session {
        out.push_str(&format!("Session: {}\n", sid));
    }
    out
}

/// Ids -> Selection Set. Same bounds as the GUI: unique, 2 to 4.
pub fn select_ids(ids: &[String]) -> Result<SelectionSet> {
    let mut set = SelectionSet::new();
    for id in ids {
        let p = Product { product_id: ProductId::from(id.trim()), ..Product::default() };
        set.add(p).map_err(|e| eyre!(e))?;
    }
    if !set.can_compare() {
        return Err(eyre!("need at least {} products to compare, got {}", MIN_COMPARE, set.count()));
    }
    Ok(set)
}

/* ---------- row builders ---------- */

const PRODUCT_HEADERS: &[&str] =
    &["ID", "Title", "Price", "Original", "Discount", "Rating", "Reviews", "Category"];

fn product_row(p: &Product) -> Vec<String> {
    let discount = discount_percent(p.price, p.original_price);
    vec![
        p.product_id.to_string(),
        p.title.clone(),
        format_price(Some(p.price)),
        discount.and(p.original_price).map(|op| format_price(Some(op))).unwrap_or_default(),
        discount.map(|d| format!("-{}%", d)).unwrap_or_default(),
        format!("{} {:.1}", star_rating(p.rating), p.rating),
        format_count(p.rating_count),
        p.category.clone().unwrap_or_default(),
    ]
}

fn product_fields(p: &Product) -> Vec<Vec<String>> {
    let mut rows = product_row(p)
        .into_iter()
        .zip(PRODUCT_HEADERS)
        .map(|(v, h)| vec![s!(*h), v])
        .collect::<Vec<_>>();
    let extra = [
        ("Brand", &p.brand),
        ("Availability", &p.availability),
        ("Image", &p.image_url),
        ("Link", &p.product_url),
    ];
    for (k, v) in extra {
        rows.push(vec![s!(k), v.clone().unwrap_or_default()]);
    }
    rows
}

const REVIEW_HEADERS: &[&str] = &["Rating", "Title", "Reviewer", "Date", "Helpful"];

fn review_row(r: &Review) -> Vec<String> {
    vec![
        opt_num(r.rating, 1),
        r.title.clone().unwrap_or_default(),
        r.reviewer.clone().unwrap_or_default(),
        r.date.clone().unwrap_or_default(),
        r.helpful_votes.to_string(),
    ]
}

fn review_summary(r: &Review) -> String {
    let head = r.title.as_deref().or(r.text.as_deref()).unwrap_or("");
    match r.sentiment_score {
        Some(s) => format!("{} ({:.2})", head, s),
        None => s!(head),
    }
}

fn opt_num(v: Option<f64>, decimals: usize) -> String {
    v.map(|x| format!("{:.*}", decimals, x)).unwrap_or_else(|| s!("-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_needs_two_distinct_ids() {
        assert!(select_ids(&[s!("a")]).is_err());
        assert!(select_ids(&[s!("a"), s!("a")]).is_err());
        assert_eq!(select_ids(&[s!("a"), s!("b")]).unwrap().count(), 2);
    }

    #[test]
    fn fifth_id_is_rejected() {
        let ids: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s!(*s)).collect();
        let err = select_ids(&ids).unwrap_err();
        assert!(err.to_string().starts_with("You can compare up to 4 products"));
    }

    fn item(id: &str, price: f64, rating: f64) -> Product {
        Product {
            product_id: ProductId::from(id),
            title: format!("Item {}", id),
            price,
            rating,
            ..Product::default()
        }
    }

    #[test]
    fn table_output_names_value_pick() {
        let table = build_table(&[item("1", 10.0, 4.0), item("2", 30.0, 5.0)]);
        let out = compare_output(&table, Some(&ProductId::from("1")), Some("s-1"), ExportFormat::Table);
        assert!(out.contains("Best value (price per rating point): Item 1\n"));
        assert!(out.contains("Session: s-1\n"));
        assert!(out.contains("$10.00 *"));
    }

    #[test]
    fn csv_output_has_no_notes() {
        let table = build_table(&[item("1", 10.0, 4.0), item("2", 30.0, 5.0)]);
        let out = compare_output(&table, Some(&ProductId::from("1")), Some("s-1"), ExportFormat::Csv);
        assert!(!out.contains("Best value"));
        assert!(!out.contains('*'));
        assert!(out.starts_with(",Item 1,Item 2\n"));
    }

    #[test]
    fn api_flag_beats_host() {
        let cli = Cli::try_parse_from([
            "cli", "--host", "shop.example", "--api", "http://x/api/", "categories",
        ])
        .unwrap();
        assert_eq!(cli.api_options().base_url, "http://x/api");
    }

    #[test]
    fn host_selects_base() {
        let cli = Cli::try_parse_from(["cli", "--host", "shop.example", "deals"]).unwrap();
        assert_eq!(cli.api_options().base_url, "http://shop.example/api");
    }
}
