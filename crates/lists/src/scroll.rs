use core::ops::Range;

/// Compute the visible index range `[start, end)` for a virtual/infinite
/// scroll list.
///
/// `start = floor(scroll_top / item_height)`; the window covers
/// `ceil(viewport_height / item_height)` items plus one of overscan so fast
/// scrolling does not flash blank rows. Degenerate geometry (non-positive or
/// non-finite heights) yields the empty range.
pub fn visible_range(
    scroll_top: f64,
    viewport_height: f64,
    item_height: f64,
    len: usize,
) -> Range<usize> {
    if !(item_height.is_finite() && item_height > 0.0)
        || !viewport_height.is_finite()
        || !scroll_top.is_finite()
    {
        return 0..0;
    }

    let start = ((scroll_top.max(0.0) / item_height).floor() as usize).min(len);
    let visible = (viewport_height.max(0.0) / item_height).ceil() as usize + 1;
    let end = start.saturating_add(visible).min(len);

    start..end
}
