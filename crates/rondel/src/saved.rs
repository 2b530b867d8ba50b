//! Flat view-state persistence over a plain word buffer: the host owns the
//! buffer and the widget appends its triple after whatever prefix the host
//! keeps for itself.

use crate::error::{SelectorError, StateError};
use crate::selector::state::{Redraw, SelectorState};
use serde::{Deserialize, Serialize};

/// Number of words the wire form occupies.
pub const SAVED_STATE_WORDS: usize = 3;

/// Snapshot of everything the widget restores across host teardown.
///
/// Wire form: the ordered `i32` triple `(current_index, looped,
/// show_labels)` with the flags encoded as `0`/`1`, written and read back
/// in exactly that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    pub current_index: usize,
    pub looped: bool,
    pub show_labels: bool,
}

impl Default for SavedState {
    fn default() -> Self {
        Self {
            current_index: 0,
            looped: false,
            show_labels: true,
        }
    }
}

impl SavedState {
    pub fn capture(state: &SelectorState) -> Self {
        Self {
            current_index: state.current_index(),
            looped: state.is_looped(),
            show_labels: state.shows_labels(),
        }
    }

    /// Append the wire triple to a host-owned word buffer.
    pub fn write_to(&self, words: &mut Vec<i32>) {
        words.push(self.current_index as i32);
        words.push(i32::from(self.looped));
        words.push(i32::from(self.show_labels));
    }

    /// Read the wire triple from the front of `words` (the host has already
    /// consumed its own prefix) and return the remaining words.
    pub fn read_from(words: &[i32]) -> Result<(Self, &[i32]), StateError> {
        if words.len() < SAVED_STATE_WORDS {
            return Err(StateError::Truncated {
                expected: SAVED_STATE_WORDS,
                found: words.len(),
            });
        }
        if words[0] < 0 {
            return Err(StateError::NegativeIndex(words[0]));
        }

        let saved = Self {
            current_index: words[0] as usize,
            looped: words[1] != 0,
            show_labels: words[2] != 0,
        };
        Ok((saved, &words[SAVED_STATE_WORDS..]))
    }

    /// Apply through the validating setters so the range invariant is
    /// re-checked against the current item list. The index is applied
    /// first: a stale snapshot leaves the state untouched.
    pub fn apply(&self, state: &mut SelectorState) -> Result<Redraw, SelectorError> {
        let mut redraw = state.set_current_index(self.current_index)?;
        if state.set_looped(self.looped).is_needed() {
            redraw = Redraw::Needed;
        }
        if state.set_show_labels(self.show_labels).is_needed() {
            redraw = Redraw::Needed;
        }
        Ok(redraw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{GlyphRef, Item, Label};

    fn items(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item::new(Label::new(format!("item {i}")), GlyphRef::new("stub")))
            .collect()
    }

    #[test]
    fn wire_triple_round_trips() {
        let saved = SavedState {
            current_index: 2,
            looped: true,
            show_labels: false,
        };

        let mut words = Vec::new();
        saved.write_to(&mut words);
        assert_eq!(words, vec![2, 1, 0]);

        let (restored, rest) = SavedState::read_from(&words).unwrap();
        assert_eq!(restored, saved);
        assert!(rest.is_empty());
    }

    #[test]
    fn triple_chains_after_a_host_prefix() {
        let saved = SavedState {
            current_index: 4,
            looped: false,
            show_labels: true,
        };

        // the host writes its own words first and strips them on the way in
        let mut words = vec![0x7a11, -3];
        saved.write_to(&mut words);

        let (restored, rest) = SavedState::read_from(&words[2..]).unwrap();
        assert_eq!(restored, saved);
        assert!(rest.is_empty());
    }

    #[test]
    fn truncated_buffer_is_rejected() {
        let err = SavedState::read_from(&[1, 0]).unwrap_err();
        assert_eq!(
            err,
            StateError::Truncated {
                expected: SAVED_STATE_WORDS,
                found: 2
            }
        );
    }

    #[test]
    fn negative_index_is_rejected() {
        let err = SavedState::read_from(&[-1, 0, 1]).unwrap_err();
        assert_eq!(err, StateError::NegativeIndex(-1));
    }

    #[test]
    fn structured_form_round_trips_through_serde() {
        let saved = SavedState {
            current_index: 3,
            looped: false,
            show_labels: true,
        };

        let json = serde_json::to_string(&saved).unwrap();
        assert_eq!(serde_json::from_str::<SavedState>(&json).unwrap(), saved);
    }

    #[test]
    fn capture_and_apply_restore_observable_state() {
        let mut original = SelectorState::new(true, true);
        let _ = original.set_items(items(4));
        let _ = original.set_current_index(2).unwrap();
        let _ = original.set_show_labels(false);

        let saved = SavedState::capture(&original);

        let mut fresh = SelectorState::default();
        let _ = fresh.set_items(items(4));
        let redraw = saved.apply(&mut fresh).unwrap();

        assert!(redraw.is_needed());
        assert_eq!(fresh.current_index(), 2);
        assert!(fresh.is_looped());
        assert!(!fresh.shows_labels());
    }

    #[test]
    fn stale_snapshot_leaves_the_state_untouched() {
        let saved = SavedState {
            current_index: 9,
            looped: true,
            show_labels: false,
        };

        let mut state = SelectorState::default();
        let _ = state.set_items(items(3));

        assert!(saved.apply(&mut state).is_err());
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_looped());
        assert!(state.shows_labels());
    }
}
