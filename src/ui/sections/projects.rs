//! Featured projects section: one card per project plus the view-all
//! pointer.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::data;
use super::util;
use super::RenderCtx;

pub fn lines(ctx: &RenderCtx) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let (content, pad) = util::layout(ctx.width);
    let inner = content - 4;

    let mut out = util::header("Featured Projects", data::PROJECTS_LEAD, content, theme);

    for (i, project) in data::PROJECTS.iter().enumerate() {
        let mut body: Vec<Line<'static>> = Vec::new();
        body.extend(util::badge_rows(
            &[project.category],
            inner,
            Style::default().fg(theme.badge_fg).bg(theme.badge_bg),
        ));
        body.push(util::blank());
        body.push(Line::from(Span::styled(
            format!("{}. {}", i + 1, project.title),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )));
        body.extend(util::wrapped(project.description, inner, Style::default().fg(theme.muted)));
        body.push(util::blank());
        body.extend(util::badge_rows(
            project.technologies,
            inner,
            Style::default().fg(theme.badge_fg).bg(theme.badge_bg),
        ));
        body.push(util::blank());
        body.push(Line::from(vec![
            Span::styled("↗ ", Style::default().fg(theme.secondary)),
            Span::styled(project.repository.to_string(), Style::default().fg(theme.link)),
        ]));
        out.extend(util::card(None, body, content, Style::default().fg(theme.card_border)));
        out.push(util::blank());
    }

    out.push(util::center(
        "o then 1-4 opens a repository · g shows all projects on GitHub",
        content,
        Style::default().fg(theme.primary),
    ));
    out.push(util::blank());

    util::indent(out, pad)
}
