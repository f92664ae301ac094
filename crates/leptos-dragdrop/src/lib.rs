//! Leptos DragDrop Utilities
//!
//! Native HTML5 drag-and-drop helpers for Leptos.
//! The dragged element carries a single string payload; drop targets
//! track hover state for visual feedback and forward the payload.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

/// MIME type used for the transfer payload
pub const PAYLOAD_FORMAT: &str = "text/plain";

/// Cosmetic classes applied to the element while it is being dragged
pub const DRAGGING_CLASSES: [&str; 4] = ["opacity-70", "scale-105", "shadow-xl", "cursor-grabbing"];

/// Hover state signals for a drop target
#[derive(Clone, Copy)]
pub struct HoverSignals {
    pub is_over_read: ReadSignal<bool>,
    pub is_over_write: WriteSignal<bool>,
}

pub fn create_hover_signals() -> HoverSignals {
    let (is_over_read, is_over_write) = signal(false);
    HoverSignals {
        is_over_read,
        is_over_write,
    }
}

/// Payload as written at dragstart; an empty payload counts as missing
pub fn normalize_payload(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Read the payload written by `make_on_dragstart`
pub fn read_payload(ev: &DragEvent) -> Option<String> {
    let transfer = ev.data_transfer()?;
    let raw = transfer.get_data(PAYLOAD_FORMAT).ok()?;
    normalize_payload(&raw)
}

/// Compose the class string of a drop target
pub fn zone_class(base: &str, extra: &str, hovered: bool, over_class: &str, idle_class: &str) -> String {
    let mut c = base.to_string();
    for part in [extra, if hovered { over_class } else { idle_class }] {
        if !part.is_empty() {
            c.push(' ');
            c.push_str(part);
        }
    }
    c
}

fn toggle_dragging_classes(ev: &DragEvent, on: bool) {
    let Some(el) = ev
        .current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
    else {
        return;
    };
    let list = el.class_list();
    for class in DRAGGING_CLASSES {
        let _ = if on { list.add_1(class) } else { list.remove_1(class) };
    }
}

/// Create dragstart handler for a draggable element
/// Writes the payload and applies the dragging classes
pub fn make_on_dragstart(payload: String) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            let _ = transfer.set_data(PAYLOAD_FORMAT, &payload);
        }
        toggle_dragging_classes(&ev, true);
    }
}

/// Create dragend handler that strips the dragging classes
pub fn make_on_dragend() -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| toggle_dragging_classes(&ev, false)
}

/// Create dragover handler for drop targets
/// Default must be prevented or the browser refuses the drop
pub fn make_on_dragover(hover: HoverSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        hover.is_over_write.set(true);
    }
}

/// Create dragleave handler for drop targets
pub fn make_on_dragleave(hover: HoverSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        hover.is_over_write.set(false);
    }
}

/// Create drop handler: clears hover and forwards the payload, if any
pub fn make_on_drop<F>(hover: HoverSignals, on_drop: F) -> impl Fn(DragEvent) + 'static
where
    F: Fn(String) + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        hover.is_over_write.set(false);
        match read_payload(&ev) {
            Some(payload) => on_drop(payload),
            None => leptos::logging::debug_warn!("[DND] Drop without payload ignored"),
        }
    }
}
