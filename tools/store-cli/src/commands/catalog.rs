//! Full catalog listing.

use anyhow::Result;
use store_commerce::prelude::*;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::product_card;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let only = args
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()?;
    let catalog = Catalog::global();

    if ctx.output.is_json() {
        let products: Vec<_> = catalog
            .iter()
            .filter(|p| only.map_or(true, |c| p.category == c))
            .collect();
        ctx.output.json(&products);
        return Ok(());
    }

    for category in Category::ALL {
        if only.is_some_and(|c| c != category) {
            continue;
        }
        ctx.output.header(category.display_name());
        for product in catalog.in_category(category) {
            let card = product_card(product, &ctx.config.display);
            ctx.output.list_item(&card.join(" | "));
        }
    }

    Ok(())
}
