//! One-shot filtered listing.

use anyhow::Result;
use store_commerce::prelude::*;

use super::BrowseArgs;
use crate::context::Context;

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    apply_args(&mut store, &args, ctx.config.price_bounds())?;

    let results = store.products();
    tracing::debug!(count = results.len(), "browse results");
    ctx.output.products(&results, &ctx.config.display);
    Ok(())
}

/// Apply command-line filters on top of the session defaults.
fn apply_args(store: &mut Storefront<'_>, args: &BrowseArgs, bounds: PriceBounds) -> Result<()> {
    if let Some(category) = &args.category {
        store.set_category(category.parse()?);
    }
    if args.exclusive {
        store.set_exclusive_only(true);
    }
    if args.min.is_some() || args.max.is_some() {
        let current = store.filters().price_range;
        let requested = PriceRange::new(
            args.min.unwrap_or(current.min),
            args.max.unwrap_or(current.max),
        );
        store.set_price_range(bounds.clamp(requested));
    }
    if let Some(search) = &args.search {
        store.set_search(search.clone());
    }
    if let Some(sort) = &args.sort {
        store.set_sort(sort.parse()?);
    }
    Ok(())
}
