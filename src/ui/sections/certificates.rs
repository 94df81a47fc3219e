//! Certificates section: one card per certification.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::data;
use super::util;
use super::RenderCtx;

pub fn lines(ctx: &RenderCtx) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let (content, pad) = util::layout(ctx.width);
    let inner = content - 4;

    let mut out = util::header("Certificates", data::CERTIFICATES_LEAD, content, theme);

    for cert in data::CERTIFICATES {
        let mut body: Vec<Line<'static>> = Vec::new();
        body.extend(util::badge_rows(
            &[cert.category],
            inner,
            Style::default().fg(theme.badge_fg).bg(theme.badge_bg),
        ));
        body.push(util::blank());
        body.push(Line::from(Span::styled(
            cert.title.to_string(),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )));
        body.push(Line::from(Span::styled(
            cert.issuer.to_string(),
            Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
        )));
        body.extend(util::wrapped(cert.description, inner, Style::default().fg(theme.muted)));
        body.push(util::blank());
        body.push(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(theme.bullet)),
            Span::styled("Verified Certificate", Style::default().fg(theme.muted)),
        ]));
        out.extend(util::card(None, body, content, Style::default().fg(theme.card_border)));
        out.push(util::blank());
    }

    util::indent(out, pad)
}
