//! Statement Card Component
//!
//! One draggable clinical statement.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart};

use crate::models::Item;

const CARD_CLASS: &str = "draggable p-3 sm:p-4 bg-white border border-gray-200 rounded-lg shadow-sm \
    font-semibold text-gray-800 text-center hover:bg-gray-100 transition-all duration-150 cursor-grab";

/// Draggable statement; the drag payload is the item id
#[component]
pub fn StatementCard(item: Item) -> impl IntoView {
    let on_dragstart = make_on_dragstart(item.id.clone());

    view! {
        <div
            id=item.id.clone()
            data-id=item.id.clone()
            draggable="true"
            class=CARD_CLASS
            on:dragstart=on_dragstart
            on:dragend=make_on_dragend()
        >
            {item.text}
        </div>
    }
}
