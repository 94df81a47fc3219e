//! Core competencies section: one compact tile per competency.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::data;
use super::util;
use super::RenderCtx;

pub fn lines(ctx: &RenderCtx) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let (content, pad) = util::layout(ctx.width);
    let inner = content - 4;

    let mut out = util::header("Core Competencies", data::COMPETENCIES_LEAD, content, theme);

    let mut body: Vec<Line<'static>> = Vec::new();
    for (i, competency) in data::COMPETENCIES.iter().enumerate() {
        if i > 0 {
            body.push(util::blank());
        }
        body.push(Line::from(vec![
            Span::styled("◆ ", Style::default().fg(theme.accent)),
            Span::styled(
                competency.title.to_string(),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            ),
        ]));
        for row in util::wrap(competency.description, inner.saturating_sub(2)) {
            body.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(row, Style::default().fg(theme.muted)),
            ]));
        }
    }
    out.extend(util::card(None, body, content, Style::default().fg(theme.card_border)));
    out.push(util::blank());

    util::indent(out, pad)
}
