//! Inventory query module.
//!
//! Stateless lookups, filters, aggregates and renderers over a caller-owned
//! `&[Item]`. Nothing here owns or mutates the collection; output goes through
//! the `OutputSink` / `DisplaySurface` collaborators.

pub mod dataset;
pub mod item;
pub mod query;
pub mod render;
pub mod surface;

pub use dataset::{load_inventory_json, sample_inventory};
pub use item::Item;
pub use query::{
    count_items, item_by_id, items_by_category, price_by_name, total_price, uppercase_names,
};
pub use render::{display_inventory, log_names, render_line};
pub use surface::{
    DisplaySurface, INVENTORY_DISPLAY, MemorySink, MemorySurface, OutputSink, StdoutSink, Surfaces,
    TextSurface, WriteSink,
};
