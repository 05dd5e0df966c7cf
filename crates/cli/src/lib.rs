//! `stockroom` driver: walks the inventory through every query and prints the answers.
//!
//! The lookups' inputs come from flags, or are prompted for on stdin.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use stockroom_core::ItemId;
use stockroom_inventory::{
    INVENTORY_DISPLAY, Item, Surfaces, TextSurface, WriteSink, count_items, display_inventory,
    item_by_id, items_by_category, load_inventory_json, log_names, price_by_name,
    sample_inventory, total_price, uppercase_names,
};

/// Query the grocery inventory.
#[derive(Debug, Clone, Parser)]
#[command(name = "stockroom", version)]
pub struct Cli {
    /// JSON dataset to load instead of the built-in sample.
    #[arg(long, env = "STOCKROOM_INVENTORY")]
    pub inventory: Option<PathBuf>,

    /// Item id to look up.
    #[arg(long)]
    pub id: Option<String>,

    /// Item name whose price to look up.
    #[arg(long)]
    pub name: Option<String>,

    /// Category to list.
    #[arg(long)]
    pub category: Option<String>,

    /// Use defaults instead of prompting for missing answers.
    #[arg(long)]
    pub no_prompt: bool,

    /// Display surface to render the inventory list onto.
    #[arg(long, default_value = INVENTORY_DISPLAY)]
    pub surface: String,
}

/// Load the configured dataset, or the sample one.
pub fn load_items(path: Option<&Path>) -> Result<Vec<Item>> {
    let Some(path) = path else {
        tracing::info!("using built-in sample inventory");
        return Ok(sample_inventory());
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read inventory file {}", path.display()))?;
    let items = load_inventory_json(&json)
        .with_context(|| format!("failed to load inventory file {}", path.display()))?;
    tracing::info!(path = %path.display(), items = items.len(), "loaded inventory file");
    Ok(items)
}

struct Prompter<'a, R> {
    input: &'a mut R,
    enabled: bool,
}

impl<R: BufRead> Prompter<'_, R> {
    /// Explicit answer if given, else ask; blank input or EOF takes `default`.
    fn answer<W: Write>(
        &mut self,
        out: &mut W,
        explicit: Option<&str>,
        question: &str,
        default: &str,
    ) -> Result<String> {
        if let Some(answer) = explicit {
            return Ok(answer.to_string());
        }
        if !self.enabled {
            return Ok(default.to_string());
        }

        write!(out, "{question} [{default}] ")?;
        out.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line).context("failed to read answer")?;
        let line = line.trim();
        if line.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(line.to_string())
        }
    }
}

/// Run the full walkthrough, writing program output to `out`.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, out: &mut W) -> Result<()> {
    let items = load_items(cli.inventory.as_deref())?;
    let mut prompter = Prompter {
        input,
        enabled: !cli.no_prompt,
    };

    writeln!(out, "Welcome! We carry the following items:")?;
    log_names(&items, &mut WriteSink::new(&mut *out));

    writeln!(out, "Here are the names again in all uppercase:")?;
    writeln!(out, "{}", serde_json::to_string(&uppercase_names(&items))?)?;

    writeln!(out, "In total, we have {} items in stock.", count_items(&items))?;
    writeln!(
        out,
        "It would cost ${} to purchase everything in stock.",
        total_price(&items)
    )?;

    let id = prompter.answer(out, cli.id.as_deref(), "Enter the ID of an item:", "1")?;
    writeln!(out, "The item with id #{id} is:")?;
    let found = match id.parse::<ItemId>() {
        Ok(id) => item_by_id(&items, id),
        Err(err) => {
            tracing::warn!(error = %err, "item id is not numeric; nothing can match");
            None
        }
    };
    match found {
        Some(item) => writeln!(out, "{}", serde_json::to_string_pretty(item)?)?,
        None => writeln!(out, "none")?,
    }

    let name = prompter.answer(out, cli.name.as_deref(), "Enter the name of an item:", "apple")?;
    match price_by_name(&items, &name) {
        Some(price) => writeln!(out, "The price of {name} is {price}.")?,
        None => writeln!(out, "The price of {name} is none.")?,
    }

    let category = prompter.answer(
        out,
        cli.category.as_deref(),
        "Enter a category you would like to see:",
        "fruit",
    )?;
    writeln!(out, "The items in the {category} category are:")?;
    writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(&items_by_category(&items, &category))?
    )?;

    {
        let mut surfaces = Surfaces::new();
        surfaces.insert(Box::new(TextSurface::new(INVENTORY_DISPLAY, &mut *out)));
        let surface = surfaces.require(&cli.surface)?;
        display_inventory(&items, surface);
    }

    out.flush()?;
    Ok(())
}
