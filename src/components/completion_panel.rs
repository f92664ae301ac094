//! Completion Panel Component
//!
//! Shown by the app shell after the matching screen hands over its answers.

use leptos::prelude::*;

use crate::config::ScreenConfig;
use crate::models::{AnswerMap, Item};

#[component]
pub fn CompletionPanel(answers: AnswerMap, items: Vec<Item>, config: ScreenConfig) -> impl IntoView {
    // Dataset order, not id order
    let rows = items
        .into_iter()
        .filter_map(|item| answers.get(&item.id).map(|bin| (item, *bin)))
        .map(|(item, bin)| {
            let bin_cfg = config.bin(bin);
            view! {
                <li class="flex justify-between gap-4 p-3 bg-white rounded-lg shadow-sm" data-answer=bin.as_str()>
                    <span class="text-gray-800">{item.text}</span>
                    <span class=format!("font-semibold {}", bin_cfg.heading_class)>{bin_cfg.title.clone()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="phase-screen animate-fade-in">
            <h2 class="text-xl sm:text-2xl font-bold text-gray-700 mb-6 text-center">{config.done_heading.clone()}</h2>
            <ul class="space-y-2">{rows}</ul>
        </div>
    }
}
