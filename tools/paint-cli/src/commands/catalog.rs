//! Catalog listing command.

use anyhow::Result;
use paint_commerce::search::Listing;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::selector;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    store.set_active_category(args.category);
    store.set_search_query(args.search);

    let listing = store.listing();
    if ctx.output.is_json() {
        ctx.output.json(&listing);
        return Ok(());
    }

    render_listing(&listing, ctx);
    Ok(())
}

/// Print a listing: category bar, heading and product table.
pub fn render_listing(listing: &Listing<'_>, ctx: &Context) {
    let bar: Vec<String> = listing
        .facets
        .iter()
        .map(|f| selector(&format!("{} ({})", f.category, f.count), f.selected))
        .collect();

    ctx.output.header(&format!("{} - {}", ctx.config.shop.name, listing.heading));
    ctx.output.plain(&format!("  {}", bar.join("  ")));
    ctx.output.plain("");

    if listing.is_empty() {
        ctx.output.info("No results found.");
        if listing.filtered {
            ctx.output
                .info("Clear filters with `--category All` and an empty `--search`.");
        }
        return;
    }

    ctx.output.table_row(&["ID", "NAME", "CATEGORY", "PRICE"], &[4, 30, 16, 16]);
    for product in &listing.items {
        let id = product.id.to_string();
        let price = product
            .price
            .map(|p| ctx.price(p))
            .unwrap_or_else(|| format!("{}*", ctx.price(ctx.config.pricing.default_unit_price)));
        ctx.output.table_row(
            &[&id, &product.name, &product.category, &price],
            &[4, 30, 16, 16],
        );
    }

    if listing.items.iter().any(|p| p.price.is_none()) {
        ctx.output.plain("");
        ctx.output.kv("*", "default unit price");
    }
}
