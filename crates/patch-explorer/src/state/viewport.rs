//! Scroll origin geometry.

use super::SelectionRange;

/// Compute the scroll origin that keeps `selection` visible.
///
/// Moves as little as possible: the origin is unchanged while the whole
/// selection is inside `[origin, origin + height)`, otherwise it scrolls up
/// to reveal `start` or down to reveal `end`. The result is clamped to
/// `[0, max(0, total_lines - height)]`.
pub fn calculate_origin(
    current_origin: usize,
    buffer_height: usize,
    total_lines: usize,
    selection: Option<SelectionRange>,
) -> usize {
    let max_origin = total_lines.saturating_sub(buffer_height);

    let origin = match selection {
        Some(range) if buffer_height > 0 => {
            if range.start < current_origin {
                range.start
            } else if range.end >= current_origin + buffer_height {
                range.end + 1 - buffer_height
            } else {
                current_origin
            }
        }
        _ => current_origin,
    };

    origin.min(max_origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: usize, end: usize) -> Option<SelectionRange> {
        Some(SelectionRange::new(start, end))
    }

    #[test]
    fn test_visible_selection_keeps_origin() {
        assert_eq!(calculate_origin(5, 10, 50, range(7, 9)), 5);
        assert_eq!(calculate_origin(5, 10, 50, range(5, 14)), 5);
    }

    #[test]
    fn test_scroll_down_reveals_end() {
        assert_eq!(calculate_origin(5, 10, 50, range(20, 22)), 13);
        assert_eq!(calculate_origin(5, 10, 50, range(15, 15)), 6);
    }

    #[test]
    fn test_scroll_up_reveals_start() {
        assert_eq!(calculate_origin(20, 10, 50, range(3, 4)), 3);
        assert_eq!(calculate_origin(20, 10, 50, range(19, 25)), 19);
    }

    #[test]
    fn test_origin_is_clamped() {
        // Content shorter than the view.
        assert_eq!(calculate_origin(8, 10, 6, range(2, 2)), 0);
        // Stale origin past the end.
        assert_eq!(calculate_origin(45, 10, 50, range(44, 44)), 40);
        // Zero height view never scrolls past the end.
        assert_eq!(calculate_origin(3, 0, 5, range(4, 4)), 3);
        assert_eq!(calculate_origin(9, 0, 5, range(4, 4)), 5);
    }

    #[test]
    fn test_no_selection() {
        assert_eq!(calculate_origin(4, 10, 50, None), 4);
        assert_eq!(calculate_origin(45, 10, 50, None), 40);
    }

    #[test]
    fn test_result_always_within_bounds() {
        for total in 0..30 {
            for height in 0..12 {
                for origin in 0..35 {
                    for start in 0..total {
                        for end in start..total.min(start + 4) {
                            let result = calculate_origin(origin, height, total, range(start, end));
                            assert!(result <= total.saturating_sub(height));
                            let visible = start >= origin && end < origin + height;
                            if visible && origin <= total.saturating_sub(height) {
                                assert_eq!(result, origin);
                            }
                        }
                    }
                }
            }
        }
    }
}
