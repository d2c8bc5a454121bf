//! Scripted storefront session.
//!
//! Replays one user action per line against a single session, the way the
//! page's controls would: filter setters, cart actions and two views.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::str::FromStr;

use anyhow::{anyhow, bail, Context as _, Result};
use store_commerce::prelude::*;

use super::SessionArgs;
use crate::context::Context;

/// A single user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Select a category.
    Category(Category),
    /// Toggle the exclusive-only filter.
    Exclusive(bool),
    /// Set the price range.
    Price(PriceRange),
    /// Set the name search; empty clears it.
    Search(String),
    /// Choose the sort order.
    Sort(SortOption),
    /// Add one unit of a product.
    Add(ProductId),
    /// Drop a product's whole line.
    Remove(ProductId),
    /// Print the current product list.
    List,
    /// Print the cart.
    Cart,
    /// Restore the starting filters.
    Reset,
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let action = match verb.to_lowercase().as_str() {
            "category" => Action::Category(required(rest, "category")?.parse()?),
            "exclusive" => Action::Exclusive(parse_switch(rest)?),
            "price" => {
                let mut bounds = rest.split_whitespace();
                let (Some(min), Some(max), None) = (bounds.next(), bounds.next(), bounds.next())
                else {
                    bail!("usage: price <min> <max>");
                };
                let min = min.parse().with_context(|| format!("bad price: {}", min))?;
                let max = max.parse().with_context(|| format!("bad price: {}", max))?;
                Action::Price(PriceRange::new(min, max))
            }
            "search" => Action::Search(rest.to_string()),
            "sort" => Action::Sort(required(rest, "sort key")?.parse()?),
            "add" => Action::Add(ProductId::new(required(rest, "product id")?)),
            "remove" => Action::Remove(ProductId::new(required(rest, "product id")?)),
            "list" => Action::List,
            "cart" => Action::Cart,
            "reset" => Action::Reset,
            other => bail!("unknown action: {}", other),
        };
        Ok(action)
    }
}

fn required<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    if value.is_empty() {
        Err(anyhow!("missing {}", what))
    } else {
        Ok(value)
    }
}

fn parse_switch(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => bail!("expected on/off, got: {}", other),
    }
}

/// Parse one script line; blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Action>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

/// Run the session command.
pub fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let reader: Box<dyn BufRead> = match &args.script {
        Some(path) => {
            let path = ctx.resolve_path(path);
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin().lock())),
    };

    let mut store = ctx.storefront()?;
    let mut failures = 0usize;

    for (number, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read script")?;
        if ctx.output.is_verbose() && !line.trim().is_empty() {
            ctx.output.info(&format!("> {}", line.trim()));
        }
        let outcome = parse_line(&line).and_then(|action| match action {
            Some(action) => apply(&mut store, action, ctx),
            None => Ok(()),
        });

        if let Err(e) = outcome {
            failures += 1;
            tracing::warn!(line = number + 1, error = %e, "session action failed");
            ctx.output.warn(&format!("line {}: {:#}", number + 1, e));
        }
    }

    if args.show_cart {
        ctx.output.cart(&store.cart_summary());
    }

    if failures > 0 {
        ctx.output.warn(&format!("{} action(s) failed", failures));
    }
    Ok(())
}

/// Apply one action to the session.
pub fn apply(store: &mut Storefront<'_>, action: Action, ctx: &Context) -> Result<()> {
    tracing::debug!(?action, "session action");
    match action {
        Action::Category(category) => store.set_category(category),
        Action::Exclusive(on) => store.set_exclusive_only(on),
        Action::Price(range) => store.set_price_range(ctx.config.price_bounds().clamp(range)),
        Action::Search(text) => store.set_search(text),
        Action::Sort(sort) => store.set_sort(sort),
        Action::Add(id) => {
            let quantity = store.add_to_cart(&id)?;
            ctx.output.success(&format!("{} в корзине: {}", id, quantity));
        }
        Action::Remove(id) => {
            if store.remove_from_cart(&id) {
                ctx.output.success(&format!("{} удален из корзины", id));
            } else {
                ctx.output.info(&format!("{} нет в корзине", id));
            }
        }
        Action::List => {
            let results = store.products();
            ctx.output.products(&results, &ctx.config.display);
        }
        Action::Cart => ctx.output.cart(&store.cart_summary()),
        Action::Reset => store.reset_filters(),
    }
    Ok(())
}
