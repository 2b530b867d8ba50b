use crate::error::SelectorError;
use crate::item::Item;

/// Outcome of a state mutation: whether the host needs to repaint.
///
/// Mutations hand this back instead of invalidating implicitly, so the
/// render trigger is visible at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "forward redraw requests to the host, e.g. by queueing a draw"]
pub enum Redraw {
    Needed,
    Unchanged,
}

impl Redraw {
    pub fn is_needed(self) -> bool {
        matches!(self, Redraw::Needed)
    }
}

/// Navigation state of the selector: the ordered items, the current index
/// and the two behavior flags.
///
/// Invariant: `current_index` addresses a valid item whenever `items` is
/// non-empty; with no items it is pinned to 0 and every operation is a
/// no-op.
#[derive(Debug, Clone)]
pub struct SelectorState {
    items: Vec<Item>,
    current_index: usize,
    looped: bool,
    show_labels: bool,
}

impl Default for SelectorState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_index: 0,
            looped: false,
            show_labels: true,
        }
    }
}

impl SelectorState {
    pub fn new(looped: bool, show_labels: bool) -> Self {
        Self {
            looped,
            show_labels,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.items.get(self.current_index)
    }

    pub fn is_looped(&self) -> bool {
        self.looped
    }

    pub fn shows_labels(&self) -> bool {
        self.show_labels
    }

    /// Index drawn on the left arc, if any: the previous item, wrapping to
    /// the last one only in loop mode.
    pub fn left_neighbor(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else if self.current_index > 0 {
            Some(self.current_index - 1)
        } else if self.looped {
            Some(self.items.len() - 1)
        } else {
            None
        }
    }

    /// Index drawn on the right arc, wrapping to the first item only in
    /// loop mode.
    pub fn right_neighbor(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else if self.current_index + 1 < self.items.len() {
            Some(self.current_index + 1)
        } else if self.looped {
            Some(0)
        } else {
            None
        }
    }

    /// Step to the next item, wrapping in loop mode.
    pub fn advance(&mut self) -> Redraw {
        if self.current_index + 1 < self.items.len() {
            self.current_index += 1;
            Redraw::Needed
        } else if self.looped && self.current_index != 0 {
            self.current_index = 0;
            Redraw::Needed
        } else {
            Redraw::Unchanged
        }
    }

    /// Step to the previous item, wrapping in loop mode.
    pub fn retreat(&mut self) -> Redraw {
        if self.current_index > 0 {
            self.current_index -= 1;
            Redraw::Needed
        } else if self.looped && self.items.len() > 1 {
            self.current_index = self.items.len() - 1;
            Redraw::Needed
        } else {
            Redraw::Unchanged
        }
    }

    /// Replace the item list. An index past the end of the new list clamps
    /// to the last item; an empty list resets it to 0.
    pub fn set_items(&mut self, items: Vec<Item>) -> Redraw {
        self.items = items;
        if self.items.is_empty() {
            self.current_index = 0;
            Redraw::Unchanged
        } else {
            self.current_index = self.current_index.min(self.items.len() - 1);
            Redraw::Needed
        }
    }

    /// Jump straight to an index. Unlike [`set_items`](Self::set_items),
    /// an out-of-range index here is a caller bug and is rejected, never
    /// clamped. On an empty list only 0 is accepted.
    pub fn set_current_index(&mut self, index: usize) -> Result<Redraw, SelectorError> {
        if self.items.is_empty() {
            return if index == 0 {
                Ok(Redraw::Unchanged)
            } else {
                Err(SelectorError::IndexOutOfRange { index, len: 0 })
            };
        }
        if index >= self.items.len() {
            return Err(SelectorError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let changed = self.current_index != index;
        self.current_index = index;
        Ok(if changed {
            Redraw::Needed
        } else {
            Redraw::Unchanged
        })
    }

    pub fn set_looped(&mut self, looped: bool) -> Redraw {
        if self.looped == looped {
            return Redraw::Unchanged;
        }
        self.looped = looped;
        Redraw::Needed
    }

    pub fn set_show_labels(&mut self, show: bool) -> Redraw {
        if self.show_labels == show {
            return Redraw::Unchanged;
        }
        self.show_labels = show;
        Redraw::Needed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{GlyphRef, Label};

    fn items(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item::new(Label::new(format!("item {i}")), GlyphRef::new("stub")))
            .collect()
    }

    fn state(n: usize, looped: bool) -> SelectorState {
        let mut s = SelectorState::new(looped, true);
        let _ = s.set_items(items(n));
        s
    }

    #[test]
    fn advance_stops_at_the_end_without_loop() {
        let mut s = state(3, false);
        let _ = s.set_current_index(2).unwrap();

        assert_eq!(s.advance(), Redraw::Unchanged);
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn advance_wraps_when_looped() {
        let mut s = state(3, true);
        let _ = s.set_current_index(2).unwrap();

        assert_eq!(s.advance(), Redraw::Needed);
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn retreat_stops_at_the_start_without_loop() {
        let mut s = state(3, false);

        assert_eq!(s.retreat(), Redraw::Unchanged);
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn retreat_wraps_when_looped() {
        let mut s = state(3, true);

        assert_eq!(s.retreat(), Redraw::Needed);
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn advance_then_retreat_round_trips_off_boundary() {
        let mut s = state(5, false);
        let _ = s.set_current_index(2).unwrap();

        let _ = s.advance();
        let _ = s.retreat();
        assert_eq!(s.current_index(), 2);

        let _ = s.retreat();
        let _ = s.advance();
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn index_stays_in_range_under_any_sequence() {
        for looped in [false, true] {
            let mut s = state(4, looped);
            for step in 0..100 {
                if step % 3 == 0 {
                    let _ = s.retreat();
                } else {
                    let _ = s.advance();
                }
                assert!(s.current_index() < s.len());
            }
        }
    }

    #[test]
    fn empty_list_navigation_is_a_noop() {
        let mut s = SelectorState::new(true, true);

        assert_eq!(s.advance(), Redraw::Unchanged);
        assert_eq!(s.retreat(), Redraw::Unchanged);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.left_neighbor(), None);
        assert_eq!(s.right_neighbor(), None);
    }

    #[test]
    fn single_looped_item_never_moves_or_redraws() {
        let mut s = state(1, true);

        assert_eq!(s.advance(), Redraw::Unchanged);
        assert_eq!(s.retreat(), Redraw::Unchanged);
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn neighbors_without_loop_stop_at_the_ends() {
        let mut s = state(3, false);
        assert_eq!(s.left_neighbor(), None);
        assert_eq!(s.right_neighbor(), Some(1));

        let _ = s.set_current_index(2).unwrap();
        assert_eq!(s.left_neighbor(), Some(1));
        assert_eq!(s.right_neighbor(), None);
    }

    #[test]
    fn neighbors_wrap_when_looped() {
        let mut s = state(3, true);
        assert_eq!(s.left_neighbor(), Some(2));

        let _ = s.set_current_index(2).unwrap();
        assert_eq!(s.right_neighbor(), Some(0));
    }

    #[test]
    fn set_current_index_rejects_out_of_range() {
        let mut s = state(3, false);

        let err = s.set_current_index(3).unwrap_err();
        assert_eq!(err, SelectorError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(s.current_index(), 0);

        for i in 0..3 {
            assert!(s.set_current_index(i).is_ok());
            assert_eq!(s.current_index(), i);
        }
    }

    #[test]
    fn set_current_index_on_empty_list_accepts_only_zero() {
        let mut s = SelectorState::default();

        assert_eq!(s.set_current_index(0), Ok(Redraw::Unchanged));
        assert!(s.set_current_index(1).is_err());
    }

    #[test]
    fn set_items_clamps_a_stranded_index() {
        let mut s = state(5, false);
        let _ = s.set_current_index(4).unwrap();

        assert_eq!(s.set_items(items(2)), Redraw::Needed);
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn set_items_with_empty_list_resets_the_index() {
        let mut s = state(5, false);
        let _ = s.set_current_index(3).unwrap();

        assert_eq!(s.set_items(Vec::new()), Redraw::Unchanged);
        assert_eq!(s.current_index(), 0);
        assert!(s.is_empty());
    }

    #[test]
    fn flag_setters_request_redraw_only_on_change() {
        let mut s = state(2, false);

        assert_eq!(s.set_looped(true), Redraw::Needed);
        assert_eq!(s.set_looped(true), Redraw::Unchanged);
        assert_eq!(s.set_show_labels(false), Redraw::Needed);
        assert_eq!(s.set_show_labels(false), Redraw::Unchanged);
    }

    #[test]
    fn set_current_index_to_same_value_requests_no_redraw() {
        let mut s = state(3, false);
        let _ = s.set_current_index(1).unwrap();

        assert_eq!(s.set_current_index(1), Ok(Redraw::Unchanged));
        assert_eq!(s.set_current_index(2), Ok(Redraw::Needed));
    }
}
