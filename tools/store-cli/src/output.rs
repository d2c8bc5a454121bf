//! Output formatting for the CLI.

use console::style;
use store_commerce::prelude::*;

use crate::config::DisplayConfig;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Print a filtered product list, or the empty state.
    pub fn products(&self, results: &FilterResults, display: &DisplayConfig) {
        if self.json {
            self.json(results);
            return;
        }

        self.header(results.state.category.display_name());
        println!(
            "{}",
            style(format!("Найдено товаров: {}", results.len())).dim()
        );

        if results.is_empty() {
            println!("\n  {}", style("Товары не найдены").dim());
            return;
        }

        for product in results {
            println!();
            for line in product_card(product, display) {
                println!("  {}", line);
            }
        }
    }

    /// Print the cart panel.
    pub fn cart(&self, summary: &CartSummary) {
        if self.json {
            self.json(summary);
            return;
        }

        let title = match summary.badge() {
            Some(n) => format!("Корзина ({})", n),
            None => "Корзина".to_string(),
        };
        self.header(&title);

        if summary.is_empty() {
            println!("  {}", style("Корзина пуста").dim());
            return;
        }

        for line in &summary.lines {
            println!(
                "  {} {}  {}",
                style(format!("[{}]", line.product_id)).dim(),
                line.name,
                style(line.price_label()).dim()
            );
        }
        println!(
            "  {} {}",
            style("Итого:").bold(),
            style(summary.total.display()).bold()
        );
    }
}

/// Render one product as display lines.
pub fn product_card(product: &Product, display: &DisplayConfig) -> Vec<String> {
    let mut badges = Vec::new();
    if product.exclusive {
        badges.push(style("ЭКСКЛЮЗИВ").reverse().to_string());
    }
    if let Some(left) = product.limited {
        badges.push(style(format!("Осталось: {}", left)).yellow().to_string());
    }

    let mut title = format!(
        "{} {}",
        style(format!("[{}]", product.id)).dim(),
        style(&product.name).bold()
    );
    if !badges.is_empty() {
        title.push(' ');
        title.push_str(&badges.join(" "));
    }

    let mut lines = vec![title, product.price.display()];

    if display.show_sizes {
        if let Some(sizes) = &product.sizes {
            lines.push(format!("Размеры: {}", sizes.join(", ")));
        }
    }
    if display.show_colors {
        if let Some(colors) = &product.colors {
            lines.push(format!("Цвета: {}", colors.join(", ")));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: Vec<String>) -> Vec<String> {
        lines
            .into_iter()
            .map(|l| console::strip_ansi_codes(&l).into_owned())
            .collect()
    }

    #[test]
    fn test_product_card_limited_exclusive() {
        let product = Catalog::global().get(&ProductId::new("m6")).unwrap();
        let lines = plain(product_card(product, &DisplayConfig::default()));

        assert_eq!(lines[0], "[m6] Футболка Лимитед ЭКСКЛЮЗИВ Осталось: 50");
        assert_eq!(lines[1], "5 000 \u{20bd}");
        assert_eq!(lines[2], "Размеры: S, M, L, XL");
        assert_eq!(lines[3], "Цвета: Черный, Белый");
    }

    #[test]
    fn test_product_card_hides_optional_sections() {
        let product = Catalog::global().get(&ProductId::new("m8")).unwrap();
        let display = DisplayConfig {
            show_colors: false,
            ..DisplayConfig::default()
        };
        let lines = plain(product_card(product, &display));

        assert_eq!(lines, vec!["[m8] Полотенце с логотипом", "2 000 \u{20bd}"]);
    }
}
