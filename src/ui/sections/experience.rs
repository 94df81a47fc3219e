//! Professional experience section: one large card with responsibilities
//! and achievement stats.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::data;
use super::util;
use super::RenderCtx;

pub fn lines(ctx: &RenderCtx) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let (content, pad) = util::layout(ctx.width);
    let inner = content - 4;
    let exp = &data::EXPERIENCE;

    let mut out = util::header("Professional Experience", data::EXPERIENCE_LEAD, content, theme);

    let mut body: Vec<Line<'static>> = Vec::new();
    body.push(Line::from(Span::styled(
        exp.role.to_string(),
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
    )));
    body.push(Line::from(Span::styled(
        exp.company.to_string(),
        Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
    )));
    body.extend(util::badge_rows(
        &[exp.tenure],
        inner,
        Style::default().fg(theme.badge_fg).bg(theme.badge_bg),
    ));
    body.push(Line::from(Span::styled(
        format!("{}  ·  {}", exp.period, exp.location),
        Style::default().fg(theme.muted),
    )));
    body.push(util::blank());

    body.push(Line::from(Span::styled(
        "Key Responsibilities".to_string(),
        Style::default().fg(theme.heading).add_modifier(Modifier::BOLD),
    )));
    for item in exp.responsibilities {
        body.extend(util::bullet(item, inner, theme));
    }
    body.push(util::blank());

    body.push(Line::from(Span::styled(
        "Key Achievements".to_string(),
        Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
    )));
    for achievement in exp.achievements {
        // Split the leading figure from its caption.
        let mut words = achievement.split(' ');
        let figure = words.next().unwrap_or("");
        let rest = words.collect::<Vec<_>>().join(" ");
        body.push(Line::from(vec![
            Span::styled(
                format!("{} ", figure),
                Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(rest, Style::default().fg(theme.muted)),
        ]));
    }

    out.extend(util::card(None, body, content, Style::default().fg(theme.card_border)));
    out.push(util::blank());

    util::indent(out, pad)
}
