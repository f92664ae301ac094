//! Placement State
//!
//! Partition of the statement set into unplaced / recommended / avoid.
//! Every item sits in exactly one of the three lists at all times.

use crate::models::{AnswerMap, Bin, Item};

#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Full dataset, used to resolve dropped ids
    items: Vec<Item>,
    unplaced: Vec<Item>,
    recommended: Vec<Item>,
    avoid: Vec<Item>,
}

impl Placement {
    /// All items start unplaced, in dataset order
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            unplaced: items.clone(),
            items,
            recommended: Vec::new(),
            avoid: Vec::new(),
        }
    }

    pub fn unplaced(&self) -> &[Item] {
        &self.unplaced
    }

    pub fn recommended(&self) -> &[Item] {
        &self.recommended
    }

    pub fn avoid(&self) -> &[Item] {
        &self.avoid
    }

    pub fn in_bin(&self, bin: Bin) -> &[Item] {
        match bin {
            Bin::Recommended => self.recommended(),
            Bin::Avoid => self.avoid(),
        }
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn placed_count(&self) -> usize {
        self.recommended.len() + self.avoid.len()
    }

    /// Submission gate
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    pub fn bin_of(&self, id: &str) -> Option<Bin> {
        Bin::ALL
            .into_iter()
            .find(|&bin| self.in_bin(bin).iter().any(|i| i.id == id))
    }

    /// Move `id` to the end of `bin`, wherever it currently is.
    /// Returns false (and changes nothing) for unknown ids.
    pub fn place(&mut self, id: &str, bin: Bin) -> bool {
        let Some(item) = self.items.iter().find(|i| i.id == id).cloned() else {
            return false;
        };

        self.unplaced.retain(|i| i.id != id);
        self.recommended.retain(|i| i.id != id);
        self.avoid.retain(|i| i.id != id);

        match bin {
            Bin::Recommended => self.recommended.push(item),
            Bin::Avoid => self.avoid.push(item),
        }
        true
    }

    pub fn answers(&self) -> AnswerMap {
        Bin::ALL
            .into_iter()
            .flat_map(|bin| self.in_bin(bin).iter().map(move |i| (i.id.clone(), bin)))
            .collect()
    }
}
