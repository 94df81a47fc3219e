//! About section: professional summary card and core-skills badge grid.

use ratatui::style::{Modifier, Style};
use ratatui::text::Line;

use crate::content::data;
use super::util;
use super::RenderCtx;

pub fn lines(ctx: &RenderCtx) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let (content, pad) = util::layout(ctx.width);
    let inner = content - 4;

    let mut out = util::header("About Me", data::ABOUT_LEAD, content, theme);

    let mut summary: Vec<Line<'static>> = Vec::new();
    for (i, paragraph) in data::PROFILE.summary.iter().enumerate() {
        if i > 0 {
            summary.push(util::blank());
        }
        summary.extend(util::wrapped(paragraph, inner, Style::default().fg(theme.fg)));
    }
    out.extend(util::card(
        Some((
            data::PROFILE.about_title,
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        summary,
        content,
        Style::default().fg(theme.card_border),
    ));
    out.push(util::blank());

    let badges = util::badge_rows(
        data::PROFILE.core_skills,
        inner,
        Style::default().fg(theme.badge_fg).bg(theme.badge_bg),
    );
    out.extend(util::card(
        Some((
            "Core Skills",
            Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
        )),
        badges,
        content,
        Style::default().fg(theme.card_border),
    ));
    out.push(util::blank());

    util::indent(out, pad)
}
