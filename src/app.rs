//! SGLT2 Quiz Frontend App
//!
//! Minimal parent flow: runs the matching screen and keeps its answers.

use leptos::logging::{error, log, warn};
use leptos::prelude::*;

use crate::components::{CompletionPanel, MatchingScreen};
use crate::config::ScreenConfig;
use crate::dataset;
use crate::models::AnswerMap;

#[component]
pub fn App() -> impl IntoView {
    let config = ScreenConfig::bundled().unwrap_or_else(|e| {
        warn!("[APP] {}; falling back to default screen copy", e);
        ScreenConfig::default()
    });

    let items = match dataset::bundled_items() {
        Ok(items) => items,
        Err(e) => {
            error!("[APP] Failed to load statements: {}", e);
            return view! {
                <main class="max-w-4xl mx-auto p-8 text-center text-red-700">
                    {format!("Could not load the quiz statements: {}", e)}
                </main>
            }
            .into_any();
        }
    };
    log!("[APP] Loaded {} statements", items.len());

    // Filled once by the matching screen
    let (answers, set_answers) = signal(None::<AnswerMap>);
    let on_complete = move |submitted: AnswerMap| {
        log!("[APP] Step one complete: {} answers", submitted.len());
        set_answers.set(Some(submitted));
    };

    let lang = config.lang.clone();
    let dir = config.dir.clone();

    view! {
        <main class="max-w-4xl mx-auto p-4 sm:p-8" lang=lang dir=dir>
            {move || match answers.get() {
                Some(submitted) => view! {
                    <CompletionPanel answers=submitted items=items.clone() config=config.clone() />
                }.into_any(),
                None => view! {
                    <MatchingScreen items=items.clone() config=config.clone() on_complete=on_complete />
                }.into_any(),
            }}
        </main>
    }
    .into_any()
}
