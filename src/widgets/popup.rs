use ratatui::layout::Rect;
use serde::Deserialize;

/// Edge position an overlay rests against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    #[default]
    TopCenter,
    TopRight,
}

/// Rect of the given size resting against the top edge of `frame_area`.
///
/// Width and height are clamped so the margin fits on both sides.
pub fn top_anchored(frame_area: Rect, width: u16, height: u16, anchor: Anchor, margin: u16) -> Rect {
    let popup_width = width.min(frame_area.width.saturating_sub(margin * 2));
    let popup_height = height.min(frame_area.height.saturating_sub(margin * 2));

    let popup_x = match anchor {
        Anchor::TopCenter => frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2,
        Anchor::TopRight => {
            frame_area.x + frame_area.width.saturating_sub(popup_width + margin)
        }
    };

    Rect {
        x: popup_x,
        y: frame_area.y + margin.min(frame_area.height),
        width: popup_width,
        height: popup_height,
    }
}

/// Shift `rect` up by `lift` rows and keep the part inside `bounds`.
///
/// Returns the visible rect and how many of its top rows were cut off, or
/// `None` when nothing is left inside `bounds`.
pub fn lifted(rect: Rect, lift: u16, bounds: Rect) -> Option<(Rect, u16)> {
    let top = i32::from(rect.y) - i32::from(lift);
    let bottom = top + i32::from(rect.height);
    let visible_top = top.max(i32::from(bounds.y));

    if bottom <= visible_top {
        return None;
    }

    let visible = Rect {
        x: rect.x,
        y: visible_top as u16,
        width: rect.width,
        height: (bottom - visible_top) as u16,
    };
    Some((visible, (visible_top - top) as u16))
}
