//! Keyboard cycling over a flat result list.
//!
//! Arrow keys move the highlight through the flattened search results with
//! wraparound at both ends. `None` means nothing is highlighted yet.

/// Move the highlight one row down, entering at the top.
pub fn cycle_down(len: usize, current: Option<usize>) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        None => Some(0),
        Some(i) => Some((i + 1) % len),
    }
}

/// Move the highlight one row up, entering at the bottom.
pub fn cycle_up(len: usize, current: Option<usize>) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        None | Some(0) => Some(len - 1),
        Some(i) => Some(i - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_never_highlights() {
        assert_eq!(cycle_down(0, None), None);
        assert_eq!(cycle_up(0, Some(3)), None);
    }

    #[test]
    fn down_enters_at_the_top_and_wraps_at_the_bottom() {
        assert_eq!(cycle_down(3, None), Some(0));
        assert_eq!(cycle_down(3, Some(0)), Some(1));
        assert_eq!(cycle_down(3, Some(2)), Some(0));
    }

    #[test]
    fn up_enters_at_the_bottom_and_wraps_at_the_top() {
        assert_eq!(cycle_up(3, None), Some(2));
        assert_eq!(cycle_up(3, Some(2)), Some(1));
        assert_eq!(cycle_up(3, Some(0)), Some(2));
    }

    #[test]
    fn single_row_cycles_onto_itself() {
        assert_eq!(cycle_down(1, Some(0)), Some(0));
        assert_eq!(cycle_up(1, Some(0)), Some(0));
    }
}
