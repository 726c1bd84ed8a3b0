//! Demonstration driver: runs a fixed walkthrough against an [`Inventory`]
//! and reports each step to a writer.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use core::str::FromStr;
use serde::Serialize;

use stockroom_inventory::{Inventory, InventoryConfig};
use stockroom_products::Product;

pub const ENV_OUTPUT: &str = "STOCKROOM_OUTPUT";

/// How step results are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Titled, human-readable blocks.
    #[default]
    Text,
    /// One JSON object per step, one per line.
    Json,
}

impl OutputFormat {
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var(ENV_OUTPUT) {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(Self::default()),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("{ENV_OUTPUT}: expected `text` or `json`, got `{other}`"),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Outcome<'a> {
    Products(Vec<&'a Product>),
    Product(Option<&'a Product>),
}

#[derive(Debug, Serialize)]
struct StepRecord<'a> {
    step: &'a str,
    result: Outcome<'a>,
}

struct Reporter<W> {
    out: W,
    format: OutputFormat,
    steps: usize,
}

impl<W: Write> Reporter<W> {
    fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            steps: 0,
        }
    }

    fn products(&mut self, step: &str, products: &[Arc<Product>]) -> anyhow::Result<()> {
        let listed: Vec<&Product> = products.iter().map(|p| p.as_ref()).collect();
        match self.format {
            OutputFormat::Text => {
                let rendered: Vec<String> = listed.iter().map(|p| p.to_string()).collect();
                self.text_block(step, &format!("[{}]", rendered.join(", ")))
            }
            OutputFormat::Json => self.json_line(step, Outcome::Products(listed)),
        }
    }

    fn product(&mut self, step: &str, product: Option<&Arc<Product>>, absent: &str) -> anyhow::Result<()> {
        let product = product.map(|p| p.as_ref());
        match self.format {
            OutputFormat::Text => {
                let rendered = product.map_or_else(|| absent.to_string(), |p| p.to_string());
                self.text_block(step, &rendered)
            }
            OutputFormat::Json => self.json_line(step, Outcome::Product(product)),
        }
    }

    fn text_block(&mut self, title: &str, body: &str) -> anyhow::Result<()> {
        if self.steps > 0 {
            writeln!(self.out)?;
        }
        self.steps += 1;
        writeln!(self.out, "{title}:")?;
        writeln!(self.out, "{body}")?;
        Ok(())
    }

    fn json_line(&mut self, step: &str, result: Outcome<'_>) -> anyhow::Result<()> {
        self.steps += 1;
        let line = serde_json::to_string(&StepRecord { step, result })
            .context("failed to encode step result")?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}

/// Run the walkthrough: add three products, look one up, remove one, cycle
/// the restock queue, then drain the low-stock heap.
pub fn run(config: InventoryConfig, format: OutputFormat, out: impl Write) -> anyhow::Result<()> {
    let mut inventory = Inventory::with_config(config);
    let mut report = Reporter::new(out, format);

    inventory.add_product(Product::new("A100", 20.5, "Electronics", 15)?)?;
    let b200 = inventory.add_product(Product::new("B200", 10.0, "Groceries", 5)?)?;
    inventory.add_product(Product::new("C300", 50.0, "Clothing", 2)?)?;

    report.products("Inventory after adding products", &inventory.display_inventory())?;

    report.product(
        "Fetching product B200",
        inventory.get_product("B200").as_ref(),
        "Product not found",
    )?;

    inventory.remove_product("A100");
    report.products("Inventory after removing product A100", &inventory.display_inventory())?;

    inventory.enqueue_restock(b200);
    report.product(
        "Processing restock",
        inventory.process_restock().as_ref(),
        "No products to restock.",
    )?;

    report.product(
        "Product with lowest stock",
        inventory.get_low_stock_product().as_ref(),
        "No low-stock products.",
    )?;

    let remaining: Vec<Arc<Product>> =
        std::iter::from_fn(|| inventory.get_low_stock_product()).collect();
    report.products("Remaining low-stock queue", &remaining)?;

    report.out.flush()?;
    Ok(())
}
