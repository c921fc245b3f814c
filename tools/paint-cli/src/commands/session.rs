//! Scripted shopping session command.

use std::io::Read;

use anyhow::{Context as _, Result};
use paint_commerce::cart::{CheckoutSummary, LineItem};
use paint_commerce::search::FilterState;
use paint_commerce::{ProductId, Storefront};
use serde::Serialize;

use super::SessionArgs;
use crate::context::Context;
use crate::script::{self, Action};

/// Run the session command.
pub fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let source = read_script(&args.script, ctx)?;
    let steps = script::parse(&source).with_context(|| format!("Invalid script: {}", args.script))?;
    ctx.output.debug(&format!("Parsed {} event(s)", steps.len()));

    let mut store = ctx.storefront()?;
    for step in &steps {
        tracing::debug!(line = step.line, action = ?step.action, "applying event");
        let outcome = apply(&mut store, &step.action);
        if let Outcome::UnknownProduct(id) = outcome {
            ctx.output.warn(&format!(
                "line {}: no product with id {} in the catalog",
                step.line, id
            ));
        }
        if !ctx.output.is_json() && renders_cart(&outcome, args.trace) {
            render_cart(&store, ctx);
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&SessionReport::capture(&store));
    } else {
        render_cart(&store, ctx);
    }
    Ok(())
}

fn read_script(path: &str, ctx: &Context) -> Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read script from stdin")?;
        return Ok(source);
    }

    let path = ctx.resolve_path(path);
    std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read script: {}", path.display()))
}

/// What applying an event asks of the presentation layer.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Applied,
    UnknownProduct(ProductId),
    Show,
}

fn apply(store: &mut Storefront, action: &Action) -> Outcome {
    match action {
        Action::Category(category) => store.set_active_category(category.clone()),
        Action::Search(query) => store.set_search_query(query.clone()),
        Action::Clear => store.clear_filters(),
        Action::Add(id) => {
            if !store.add_to_cart_by_id(*id) {
                return Outcome::UnknownProduct(*id);
            }
        }
        Action::Remove(id) => store.remove_from_cart(*id),
        Action::Quantity(id, delta) => {
            store.update_quantity(*id, *delta);
        }
        Action::Show => return Outcome::Show,
    }
    Outcome::Applied
}

/// Whether the cart is printed after this event. `--trace` prints after every event.
fn renders_cart(outcome: &Outcome, trace: bool) -> bool {
    trace || *outcome == Outcome::Show
}

fn render_cart(store: &Storefront, ctx: &Context) {
    let listing = store.listing();
    ctx.output.header("Shopping Cart");
    ctx.output.kv(
        "Showing",
        &format!("{} ({} product(s))", listing.heading, listing.len()),
    );
    if !store.filter().search_query.is_empty() {
        ctx.output.kv("Search", &store.filter().search_query);
    }

    if store.line_items().is_empty() {
        ctx.output.info("Your cart is empty");
        return;
    }

    let default_price = store.pricing().default_unit_price;
    ctx.output.table_row(&["ID", "NAME", "QTY", "UNIT", "TOTAL"], &[4, 30, 5, 16, 16]);
    for item in store.line_items() {
        ctx.output.table_row(
            &[
                &item.product_id.to_string(),
                &item.name,
                &item.quantity.to_string(),
                &ctx.price(item.unit_price(default_price)),
                &ctx.price(item.total_price(default_price)),
            ],
            &[4, 30, 5, 16, 16],
        );
    }

    let summary = store.summary();
    ctx.output.plain("");
    ctx.output.kv("Items", &summary.item_count.to_string());
    ctx.output.kv("Subtotal", &ctx.price(summary.subtotal));
    ctx.output.kv("Delivery", &ctx.price(summary.delivery_fee));
    ctx.output.kv("Total", &ctx.price(summary.grand_total));
}

/// Final session state for `--json`.
#[derive(Serialize)]
struct SessionReport {
    filter: FilterState,
    visible: Vec<ProductId>,
    items: Vec<LineItem>,
    summary: CheckoutSummary,
}

impl SessionReport {
    fn capture(store: &Storefront) -> Self {
        Self {
            filter: store.filter().clone(),
            visible: store.visible_products().iter().map(|p| p.id).collect(),
            items: store.line_items().to_vec(),
            summary: store.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(source: &str) -> (Storefront, Vec<Outcome>) {
        let mut store = Storefront::paints();
        let outcomes = script::parse(source)
            .unwrap()
            .iter()
            .map(|step| apply(&mut store, &step.action))
            .collect();
        (store, outcomes)
    }

    #[test]
    fn test_report_reflects_final_state() {
        let (store, _) = run_script("category Stone Seal\nadd 7\nadd 7\nadd 8\nqty 8 -1\n");

        let report = SessionReport::capture(&store);
        assert_eq!(report.visible, vec![ProductId::new(7), ProductId::new(8)]);
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].quantity, 2);
        assert_eq!(report.summary.item_count, 2);
    }

    #[test]
    fn test_unknown_product_is_reported_not_added() {
        let (store, outcomes) = run_script("add 99\nshow\nremove 99\nqty 99 -4");
        assert_eq!(
            outcomes,
            vec![
                Outcome::UnknownProduct(ProductId::new(99)),
                Outcome::Show,
                Outcome::Applied,
                Outcome::Applied,
            ]
        );
        assert!(store.line_items().is_empty());
    }

    #[test]
    fn test_trace_renders_after_every_event() {
        let (_, outcomes) = run_script("add 1\nadd 99\nremove 1\nshow");
        assert!(outcomes.iter().all(|o| renders_cart(o, true)));

        let untraced: Vec<bool> = outcomes.iter().map(|o| renders_cart(o, false)).collect();
        assert_eq!(untraced, vec![false, false, false, true]);
    }

    #[test]
    fn test_clear_resets_filters() {
        let (store, _) = run_script("category Emulsion\nsearch luxury\nclear");
        assert_eq!(store.filter(), &FilterState::default());
        assert_eq!(store.visible_products().len(), 12);
    }
}
