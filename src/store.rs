//! Screen State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use reactive_stores::Store;

use crate::models::{AnswerMap, Bin, Item};
use crate::placement::Placement;

/// State owned by the matching screen
#[derive(Clone, Debug, Store)]
pub struct ScreenState {
    pub placement: Placement,
    /// Latched on the first submit so the callback fires once
    pub submitted: bool,
}

impl ScreenState {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            placement: Placement::new(items),
            submitted: false,
        }
    }

    /// Submit button enabled
    pub fn can_submit(&self) -> bool {
        !self.submitted && self.placement.is_complete()
    }

    /// Apply a drop; ignored once answers are submitted
    pub fn drop_item(&mut self, id: &str, bin: Bin) -> bool {
        if self.submitted {
            return false;
        }
        self.placement.place(id, bin)
    }

    /// Take the answers exactly once
    pub fn submit(&mut self) -> Option<AnswerMap> {
        if !self.can_submit() {
            return None;
        }
        self.submitted = true;
        Some(self.placement.answers())
    }
}

pub type ScreenStore = Store<ScreenState>;

#[cfg(test)]
mod tests {
    use super::*;

    fn state(ids: &[&str]) -> ScreenState {
        ScreenState::new(
            ids.iter()
                .map(|id| Item { id: id.to_string(), text: id.to_uppercase() })
                .collect(),
        )
    }

    #[test]
    fn test_submit_blocked_until_complete() {
        let mut s = state(&["a", "b"]);
        assert!(!s.can_submit());
        assert!(s.submit().is_none());

        s.drop_item("a", Bin::Recommended);
        assert!(s.submit().is_none());
        assert!(!s.submitted);
    }

    #[test]
    fn test_submit_fires_once() {
        let mut s = state(&["a", "b"]);
        s.drop_item("a", Bin::Recommended);
        s.drop_item("b", Bin::Avoid);
        assert!(s.can_submit());

        let answers = s.submit().unwrap();
        assert_eq!(answers["a"], Bin::Recommended);
        assert_eq!(answers["b"], Bin::Avoid);

        assert!(!s.can_submit());
        assert!(s.submit().is_none());
    }

    #[test]
    fn test_drops_ignored_after_submit() {
        let mut s = state(&["a"]);
        s.drop_item("a", Bin::Avoid);
        s.submit().unwrap();

        assert!(!s.drop_item("a", Bin::Recommended));
        assert_eq!(s.placement.bin_of("a"), Some(Bin::Avoid));
    }
}
