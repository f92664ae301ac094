//! Matching Screen Component
//!
//! Step one of the quiz: drag every statement into a bin, then submit.

use leptos::logging::{debug_warn, log};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BinZone, StatementCard};
use crate::config::ScreenConfig;
use crate::models::{AnswerMap, Bin, Item};
use crate::store::{ScreenState, ScreenStateStoreFields, ScreenStore};

const SUBMIT_CLASS: &str = "px-8 py-3 bg-indigo-600 text-white font-semibold rounded-lg hover:bg-indigo-700 \
    transition-all duration-300 shadow-lg hover:shadow-xl disabled:opacity-50 disabled:cursor-not-allowed \
    transform enabled:hover:scale-105";

#[component]
pub fn MatchingScreen(
    items: Vec<Item>,
    config: ScreenConfig,
    /// Receives the answer map once, when the user submits
    #[prop(into)]
    on_complete: Callback<AnswerMap>,
) -> impl IntoView {
    let store: ScreenStore = Store::new(ScreenState::new(items));

    let on_drop = Callback::new(move |(id, bin): (String, Bin)| {
        let from = store.placement().read_untracked().bin_of(&id);
        if store.write().drop_item(&id, bin) {
            match from {
                Some(from) => log!("[QUIZ] Moved {} from {} to {}", id, from, bin),
                None => log!("[QUIZ] Placed {} in {}", id, bin),
            }
        } else {
            debug_warn!("[QUIZ] Ignored drop of {:?} on {}", id, bin);
        }
    });

    let on_submit = move |_| {
        let answers = store.write().submit();
        if let Some(answers) = answers {
            log!("[QUIZ] Submitting {} answers", answers.len());
            on_complete.run(answers);
        }
    };

    let unplaced = move || store.placement().read().unplaced().to_vec();
    let can_submit = move || store.read().can_submit();
    let progress = move || {
        let placement = store.placement().read();
        format!("{} / {}", placement.placed_count(), placement.len())
    };
    let bins_class = config.bins_row_class();

    let zones = Bin::ALL
        .into_iter()
        .map(|bin| {
            let in_bin = Signal::derive(move || store.placement().read().in_bin(bin).to_vec());
            view! {
                <BinZone
                    bin=bin
                    config=config.bin(bin).clone()
                    items=in_bin
                    on_drop=on_drop
                />
            }
        })
        .collect_view();

    view! {
        <div class="phase-screen animate-fade-in">
            <h2 class="text-xl sm:text-2xl font-bold text-gray-700 mb-6 text-center">{config.heading.clone()}</h2>
            <p class="text-gray-600 mb-8 text-center">{config.instructions.clone()}</p>

            <div class="mb-10 space-y-4 min-h-[80px]">
                <For
                    each=unplaced
                    key=|item| item.id.clone()
                    children=move |item| view! { <StatementCard item=item /> }
                />
            </div>

            <div class=bins_class>
                {zones}
            </div>

            <div class="flex flex-col items-center gap-2 mt-8">
                <span class="text-sm text-gray-500">{progress}</span>
                <button class=SUBMIT_CLASS on:click=on_submit disabled=move || !can_submit()>
                    {config.submit_label.clone()}
                </button>
            </div>
        </div>
    }
}
