//! Bin Zone Component
//!
//! One drop target ("recommended" / "avoid") holding the statements placed in it.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::StatementCard;
use crate::config::BinConfig;
use crate::models::{Bin, Item};

const ZONE_CLASS: &str = "droppable lg:w-1/2 p-4 sm:p-6 rounded-xl shadow-md min-h-[150px] \
    border-2 border-dashed transition-all duration-300";
const OVER_CLASS: &str = "border-indigo-400 bg-indigo-100 scale-105";
const IDLE_CLASS: &str = "border-transparent";

/// Drop target for one bin
#[component]
pub fn BinZone(
    bin: Bin,
    config: BinConfig,
    /// Statements currently in this bin, in drop order
    #[prop(into)]
    items: Signal<Vec<Item>>,
    /// Called with (item id, bin) when a statement is dropped here
    on_drop: Callback<(String, Bin)>,
) -> impl IntoView {
    let hover = create_hover_signals();
    let BinConfig { title, panel_class, heading_class } = config;

    let class = move || zone_class(ZONE_CLASS, &panel_class, hover.is_over_read.get(), OVER_CLASS, IDLE_CLASS);

    view! {
        <div
            data-target=bin.as_str()
            class=class
            on:dragover=make_on_dragover(hover)
            on:dragleave=make_on_dragleave(hover)
            on:drop=make_on_drop(hover, move |id| on_drop.run((id, bin)))
        >
            <h3 class=format!("text-lg sm:text-xl font-bold mb-4 text-center {}", heading_class)>
                {title}
            </h3>
            <div class="space-y-3">
                <For
                    each=move || items.get()
                    key=|item| item.id.clone()
                    children=move |item| view! { <StatementCard item=item /> }
                />
            </div>
        </div>
    }
}
