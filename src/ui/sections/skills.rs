//! Technical skills section: one card per category.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::data;
use super::util;
use super::RenderCtx;

pub fn lines(ctx: &RenderCtx) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let (content, pad) = util::layout(ctx.width);
    let inner = content - 4;

    let mut out = util::header("Technical Skills", data::SKILLS_LEAD, content, theme);

    for category in data::SKILL_CATEGORIES {
        let mut body: Vec<Line<'static>> = Vec::new();
        for skill in category.skills {
            for (i, row) in util::wrap(skill, inner.saturating_sub(2)).into_iter().enumerate() {
                let marker = if i == 0 { "▪ " } else { "  " };
                body.push(Line::from(vec![
                    Span::styled(marker.to_string(), Style::default().fg(theme.accent)),
                    Span::styled(row, Style::default().fg(theme.fg)),
                ]));
            }
        }
        out.extend(util::card(
            Some((
                category.title,
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            )),
            body,
            content,
            Style::default().fg(theme.card_border),
        ));
        out.push(util::blank());
    }

    util::indent(out, pad)
}
