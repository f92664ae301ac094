//! UI Components
//!
//! Leptos components of the matching screen.

mod statement_card;
mod bin_zone;
mod matching_screen;
mod completion_panel;

pub use statement_card::StatementCard;
pub use bin_zone::BinZone;
pub use matching_screen::MatchingScreen;
pub use completion_panel::CompletionPanel;
