//! Picks the window next to (or before) the focused one.
//!
//! Both functions keep the list order untouched and wrap around at the
//! ends.  `None` means "nothing to do": no entry in the list is focused.

use crate::command::Direction;
use crate::visible::VisibleWindow;

/// Id of the window after the focused one, wrapping to the first.
pub fn find_next(windows: &[VisibleWindow]) -> Option<i64> {
    let mut seen_focused = false;

    for window in windows {
        if window.focused {
            seen_focused = true;
            continue;
        }
        if seen_focused {
            return Some(window.id);
        }
    }

    if seen_focused {
        windows.first().map(|w| w.id)
    } else {
        None
    }
}

/// Id of the window before the focused one, wrapping to the last.
pub fn find_prev(windows: &[VisibleWindow]) -> Option<i64> {
    let mut previous = windows.last()?.id;

    for window in windows {
        if window.focused {
            return Some(previous);
        }
        previous = window.id;
    }

    None
}

/// Dispatch to [`find_next`] or [`find_prev`].
pub fn find(windows: &[VisibleWindow], direction: Direction) -> Option<i64> {
    match direction {
        Direction::Next => find_next(windows),
        Direction::Prev => find_prev(windows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(ids: &[i64], focused: Option<i64>) -> Vec<VisibleWindow> {
        ids.iter()
            .map(|&id| VisibleWindow {
                id,
                focused: Some(id) == focused,
            })
            .collect()
    }

    #[test]
    fn focus_in_the_middle() {
        let l = list(&[10, 11, 12], Some(11));
        assert_eq!(find_next(&l), Some(12));
        assert_eq!(find_prev(&l), Some(10));
    }

    #[test]
    fn focus_on_last_wraps_forward() {
        let l = list(&[10, 11, 12], Some(12));
        assert_eq!(find_next(&l), Some(10));
        assert_eq!(find_prev(&l), Some(11));
    }

    #[test]
    fn focus_on_first_wraps_backward() {
        let l = list(&[10, 11, 12], Some(10));
        assert_eq!(find_next(&l), Some(11));
        assert_eq!(find_prev(&l), Some(12));
    }

    #[test]
    fn nothing_focused_is_noop() {
        let l = list(&[10, 11, 12], None);
        assert_eq!(find_next(&l), None);
        assert_eq!(find_prev(&l), None);
    }

    #[test]
    fn empty_list_is_noop() {
        assert_eq!(find_next(&[]), None);
        assert_eq!(find_prev(&[]), None);
    }

    #[test]
    fn single_window_selects_itself() {
        let l = list(&[7], Some(7));
        assert_eq!(find_next(&l), Some(7));
        assert_eq!(find_prev(&l), Some(7));
    }

    #[test]
    fn next_and_prev_are_modular_for_every_position() {
        let ids = [3, 1, 4, 15, 9];
        let n = ids.len();
        for i in 0..n {
            let l = list(&ids, Some(ids[i]));
            assert_eq!(find_next(&l), Some(ids[(i + 1) % n]));
            assert_eq!(find_prev(&l), Some(ids[(i + n - 1) % n]));
        }
    }

    #[test]
    fn find_dispatches_on_direction() {
        let l = list(&[10, 11, 12], Some(11));
        assert_eq!(find(&l, Direction::Next), Some(12));
        assert_eq!(find(&l, Direction::Prev), Some(10));
    }
}
