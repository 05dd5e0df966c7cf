//! Text emitters: name logging and the inventory list.

use crate::item::Item;
use crate::surface::{DisplaySurface, OutputSink};

/// Append each item name, in order, to `sink`.
pub fn log_names<S: OutputSink + ?Sized>(items: &[Item], sink: &mut S) {
    for item in items {
        sink.append_line(item.name());
    }
}

/// One display row: `apple (fruit) - $1.75 each, Quantity: 100`.
pub fn render_line(item: &Item) -> String {
    format!(
        "{} ({}) - ${} each, Quantity: {}",
        item.name(),
        item.category(),
        item.price(),
        item.quantity()
    )
}

/// Replace whatever `surface` shows with the full inventory list.
pub fn display_inventory<D: DisplaySurface + ?Sized>(items: &[Item], surface: &mut D) {
    tracing::debug!(surface = surface.handle(), items = items.len(), "rendering inventory");
    surface.clear();
    surface.write_list(items.iter().map(render_line).collect());
}
