//! Toast rendering
//!
//! Draws a [`SurfaceState`] as an overlay and animates its transitions. The
//! notifier never sees any of this; it only flips the surface between its
//! hidden and shown presentation.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use std::time::Instant;

use super::color::Rgba;
use super::surface::{Backdrop, ProgressScale, SurfaceState};
use crate::theme;
use crate::widgets::popup::{self, Anchor};

/// Gap between the frame edge and the resting toast
pub const MARGIN: u16 = 2;

/// Border, content row, progress row, border
const HEIGHT: u16 = 4;

/// How far a hidden toast is lifted, relative to its height
const LIFT_FACTOR: f32 = 1.5;

/// Cells reserved for the close glyph and the space before it
const CLOSE_WIDTH: u16 = 2;

/// Screen regions of a drawn toast, for mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastRegions {
    /// The on-screen part of the toast
    pub surface: Rect,
    /// `None` while the close control is above the frame
    pub close: Option<Rect>,
}

impl ToastRegions {
    pub fn close_contains(&self, column: u16, row: u16) -> bool {
        self.close
            .is_some_and(|close| close.contains(Position::new(column, row)))
    }
}

/// Render the toast overlay as it looks at `now`
///
/// Call after rendering the main UI so the toast appears on top. Returns
/// `None` when nothing was drawn (fully hidden, or no room).
pub fn render_notification(
    frame: &mut Frame,
    surface: &SurfaceState,
    anchor: Anchor,
    now: Instant,
) -> Option<ToastRegions> {
    let t = surface.transition_progress(now);
    let shown = if surface.is_visible() { t } else { 1.0 - t };
    if shown <= 0.0 {
        return None;
    }

    let content = Line::from(vec![
        Span::raw(" "),
        Span::raw(surface.icon.as_str()),
        Span::raw(" "),
        Span::raw(surface.message.as_str()),
        Span::raw(" "),
    ]);
    let content_width = u16::try_from(content.width()).unwrap_or(u16::MAX);
    let width = content_width.saturating_add(CLOSE_WIDTH + 2);

    let frame_area = frame.area();
    let resting = popup::top_anchored(frame_area, width, HEIGHT, anchor, MARGIN);
    if resting.width < 5 || resting.height < 3 {
        return None;
    }

    let lift = ((1.0 - shown) * f32::from(resting.height) * LIFT_FACTOR).round() as u16;
    let (visible, cropped) = popup::lifted(resting, lift, frame_area)?;

    // The whole box is drawn off-screen, then only its on-screen rows are copied,
    // so a lifted toast slides instead of being re-laid out
    let mut scratch = Buffer::empty(Rect::new(0, 0, resting.width, resting.height));
    if !matches!(surface.backdrop, Backdrop::Blur(_)) {
        copy_rows(frame.buffer_mut(), visible, &mut scratch, cropped);
    }

    let close = draw_box(&mut scratch, surface, content, shown, t);

    paste_rows(&scratch, cropped, frame.buffer_mut(), visible);

    let close = close
        .filter(|close| close.y >= cropped)
        .map(|close| Rect {
            x: visible.x + close.x,
            y: visible.y + (close.y - cropped),
            ..close
        });

    Some(ToastRegions {
        surface: visible,
        close,
    })
}

/// Draw the full toast into `buf`; returns the close control in `buf` coordinates
fn draw_box(
    buf: &mut Buffer,
    surface: &SurfaceState,
    content: Line<'_>,
    shown: f32,
    t: f32,
) -> Option<Rect> {
    let area = buf.area;
    let backdrop = theme::toast::BACKDROP;
    let bg = surface.background.composite_over(backdrop);
    let fade = |color: Rgba| backdrop.mix(color.composite_over(bg), shown).to_color();
    let bg_style = Style::default().bg(fade(bg));

    let block = match surface.border {
        Some(border) => Block::default()
            .borders(Borders::ALL)
            .border_style(bg_style.fg(fade(border.color))),
        None => Block::default().borders(Borders::NONE),
    }
    .style(bg_style);

    let inner = block.inner(area);
    block.render(area, buf);

    if inner.width <= CLOSE_WIDTH || inner.height == 0 {
        return None;
    }

    let message_area = Rect {
        width: inner.width - CLOSE_WIDTH,
        height: 1,
        ..inner
    };
    let close = Rect {
        x: inner.x + inner.width - CLOSE_WIDTH,
        y: inner.y,
        width: CLOSE_WIDTH,
        height: 1,
    };

    Paragraph::new(content)
        .style(bg_style.fg(fade(surface.message_color)))
        .render(message_area, buf);
    Paragraph::new(theme::toast::CLOSE_GLYPH)
        .style(bg_style.fg(fade(theme::toast::CLOSE)))
        .render(close, buf);

    if inner.height >= 2 {
        let scale = match surface.progress {
            ProgressScale::Full => t,
            ProgressScale::Zero => 1.0 - t,
        };
        let filled = (f32::from(inner.width) * scale).round() as usize;
        let progress_area = Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        };

        Paragraph::new(Span::styled(
            theme::toast::PROGRESS_GLYPH.repeat(filled),
            bg_style.fg(fade(surface.progress_color)),
        ))
        .render(progress_area, buf);
    }

    Some(close)
}

/// Copy what is on screen under `visible` into `scratch`, from row `cropped` down
fn copy_rows(screen: &Buffer, visible: Rect, scratch: &mut Buffer, cropped: u16) {
    for row in 0..visible.height {
        for col in 0..visible.width {
            scratch[(col, cropped + row)] = screen[(visible.x + col, visible.y + row)].clone();
        }
    }
}

/// Copy `scratch` rows from `cropped` down onto the screen at `visible`
fn paste_rows(scratch: &Buffer, cropped: u16, screen: &mut Buffer, visible: Rect) {
    for row in 0..visible.height {
        for col in 0..visible.width {
            screen[(visible.x + col, visible.y + row)] = scratch[(col, cropped + row)].clone();
        }
    }
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
