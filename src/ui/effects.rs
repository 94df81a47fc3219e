//! Entrance-transition styling for revealed sections.
//!
//! A section is in one of three presentation states: hidden (its latch has
//! never fired), entering (latch fired less than [`REVEAL_DURATION`] ago),
//! or settled. The transforms here restyle already-built lines without
//! changing their count, so section heights never depend on animation
//! state and the page layout stays stable through the transition.

use std::time::{Duration, Instant};

use ratatui::style::Color;
use ratatui::text::Line;

use super::theme::Theme;

/// Fixed duration of the slide-up/fade entrance.
pub const REVEAL_DURATION: Duration = Duration::from_millis(1000);

/// Rows a section's content starts displaced by before sliding up.
const SLIDE_ROWS: usize = 3;

/// How a section presents this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presentation {
    /// Not yet seen: neutral, dimmed, fully readable.
    Hidden,
    /// Mid-transition, progress in `(0, 1)`.
    Entering(f32),
    /// Transition finished; normal styling.
    Settled,
}

/// Presentation for a latch that fired at `revealed_at` (if ever).
pub fn presentation(revealed_at: Option<Instant>, now: Instant) -> Presentation {
    match revealed_at {
        None => Presentation::Hidden,
        Some(start) => {
            let elapsed = now.saturating_duration_since(start);
            if elapsed >= REVEAL_DURATION {
                Presentation::Settled
            } else {
                let t = elapsed.as_secs_f32() / REVEAL_DURATION.as_secs_f32();
                Presentation::Entering(ease_out_cubic(t))
            }
        }
    }
}

/// Ease-out cubic: fast start, slow finish.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Linear RGB interpolation from `from` toward `to`.
///
/// Non-RGB colors pass through untouched at any positive progress.
pub fn fade(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => Color::Rgb(
            lerp_channel(r0, r1, t),
            lerp_channel(g0, g1, t),
            lerp_channel(b0, b1, t),
        ),
        _ => {
            if t > 0.0 {
                to
            } else {
                from
            }
        }
    }
}

fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * t).round() as u8
}

/// Apply a presentation to a section's settled lines.
///
/// Hidden sections are dimmed to the muted color. Entering sections slide
/// up from [`SLIDE_ROWS`] below their resting position while every span's
/// foreground fades in from the background color. The returned vector
/// always has the same length as the input.
pub fn apply(lines: Vec<Line<'static>>, pres: Presentation, theme: &Theme) -> Vec<Line<'static>> {
    match pres {
        Presentation::Settled => lines,
        Presentation::Hidden => lines
            .into_iter()
            .map(|line| recolor(line, |_| theme.muted))
            .collect(),
        Presentation::Entering(t) => {
            let len = lines.len();
            let offset = ((1.0 - t) * SLIDE_ROWS as f32).round() as usize;
            let offset = offset.min(len);
            let mut out: Vec<Line<'static>> = Vec::with_capacity(len);
            out.resize(offset, Line::default());
            for line in lines.into_iter().take(len - offset) {
                out.push(recolor(line, |fg| fade(theme.bg, fg, t)));
            }
            out
        }
    }
}

fn recolor(line: Line<'static>, map: impl Fn(Color) -> Color) -> Line<'static> {
    let spans = line
        .spans
        .into_iter()
        .map(|mut span| {
            let fg = span.style.fg.unwrap_or(Color::Reset);
            span.style.fg = Some(map(fg));
            span
        })
        .collect::<Vec<_>>();
    Line::from(spans).alignment(line.alignment.unwrap_or(ratatui::layout::Alignment::Left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DEFAULT_THEME;
    use ratatui::text::Span;

    #[test]
    fn presentation_follows_elapsed_time() {
        let now = Instant::now();
        assert_eq!(presentation(None, now), Presentation::Hidden);
        assert_eq!(presentation(Some(now - REVEAL_DURATION), now), Presentation::Settled);
        match presentation(Some(now - Duration::from_millis(300)), now) {
            Presentation::Entering(t) => assert!(t > 0.0 && t < 1.0),
            other => panic!("expected Entering, got {:?}", other),
        }
    }

    #[test]
    fn easing_is_monotonic_and_clamped() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        let mut prev = 0.0;
        for step in 0..=10 {
            let t = ease_out_cubic(step as f32 / 10.0);
            assert!(t >= prev);
            prev = t;
        }
    }

    #[test]
    fn fade_endpoints_are_exact() {
        let from = Color::Rgb(0, 0, 0);
        let to = Color::Rgb(200, 100, 50);
        assert_eq!(fade(from, to, 0.0), from);
        assert_eq!(fade(from, to, 1.0), to);
        assert_eq!(fade(from, to, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn apply_preserves_line_count() {
        let lines: Vec<Line<'static>> = (0..8)
            .map(|i| Line::from(Span::raw(format!("line {}", i))))
            .collect();
        for pres in [
            Presentation::Hidden,
            Presentation::Entering(0.2),
            Presentation::Entering(0.9),
            Presentation::Settled,
        ] {
            let out = apply(lines.clone(), pres, &DEFAULT_THEME);
            assert_eq!(out.len(), lines.len());
        }
    }

    #[test]
    fn entering_slides_content_down_from_blank_rows() {
        let lines: Vec<Line<'static>> =
            (0..6).map(|i| Line::from(format!("row {}", i))).collect();
        let out = apply(lines, Presentation::Entering(0.0), &DEFAULT_THEME);
        // Progress 0 pushes the content down by the full slide offset.
        assert!(out[0].spans.is_empty());
        assert!(out[1].spans.is_empty());
        assert!(out[2].spans.is_empty());
        assert_eq!(out[3].spans[0].content, "row 0");
        // The rows pushed past the section bottom are dropped.
        assert_eq!(out[5].spans[0].content, "row 2");
    }
}
