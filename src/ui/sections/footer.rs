//! Page footer: brand blurb, quick links, contact recap.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::data;
use super::util;
use super::RenderCtx;

pub fn lines(ctx: &RenderCtx) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let (content, pad) = util::layout(ctx.width);

    let mut out: Vec<Line<'static>> = Vec::new();
    out.push(Line::from(Span::styled(
        "─".repeat(content),
        Style::default().fg(theme.card_border),
    )));
    out.push(util::blank());
    out.push(util::center(
        data::PROFILE.name,
        content,
        Style::default().fg(theme.heading).add_modifier(Modifier::BOLD),
    ));
    out.push(util::blank());
    out.extend(util::centered_wrapped(
        data::FOOTER_BLURB,
        content.min(72),
        Style::default().fg(theme.muted),
    ));
    out.push(util::blank());
    out.push(util::center(
        "Quick links: 2 About · 5 Skills · 8 Projects · 9 Contact",
        content,
        Style::default().fg(theme.fg),
    ));
    out.push(util::center(
        &format!("{}  ·  {}", data::PROFILE.email, data::PROFILE.location),
        content,
        Style::default().fg(theme.muted),
    ));
    out.push(util::blank());
    out.push(util::center(
        "© 2025 Ari R. Made with ♥ for data science · Home returns to the top",
        content,
        Style::default().fg(theme.muted),
    ));
    out.push(util::blank());

    util::indent(out, pad)
}
