//! Hero banner: name, headline, tagline, and quick links, vertically
//! centered over one full viewport of backdrop space.

use ratatui::style::{Modifier, Style};
use ratatui::text::Line;

use crate::content::data;
use super::util;
use super::RenderCtx;

pub fn lines(ctx: &RenderCtx) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let (content, pad) = util::layout(ctx.width);
    let height = ctx.viewport.max(8);

    let mut body: Vec<Line<'static>> = Vec::new();
    body.push(util::center(
        data::PROFILE.name,
        content,
        Style::default().fg(theme.heading).add_modifier(Modifier::BOLD),
    ));
    body.push(util::blank());
    body.push(util::center(
        data::PROFILE.headline,
        content,
        Style::default().fg(theme.muted),
    ));
    body.push(util::blank());
    body.extend(util::centered_wrapped(
        data::PROFILE.tagline,
        content.min(72),
        Style::default().fg(theme.fg),
    ));
    body.push(util::blank());
    body.push(util::center(
        "g GitHub   l LinkedIn   m Email   r Resume",
        content,
        Style::default().fg(theme.secondary),
    ));
    body.push(util::blank());
    body.push(util::center(
        "Explore my work: scroll ↓ or press 2–9",
        content,
        Style::default().fg(theme.primary),
    ));

    // Center the copy inside the viewport; the backdrop fills the rest.
    let body_height = body.len();
    let top_pad = height.saturating_sub(body_height + 2) / 2;
    let mut out: Vec<Line<'static>> = Vec::with_capacity(height);
    out.resize(top_pad, util::blank());
    out.extend(util::indent(body, pad));
    while out.len() + 1 < height {
        out.push(util::blank());
    }
    if out.len() < height {
        // Scroll indicator hugging the bottom of the banner.
        out.push(util::center("▼", ctx.width as usize, Style::default().fg(theme.primary)));
    }
    out.truncate(height);
    out
}
