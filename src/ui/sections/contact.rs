//! Contact section: contact details, social links, resume export, and the
//! three-field message form.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::data;
use crate::ui::form::{ContactForm, FormField};
use super::util;
use super::RenderCtx;

pub fn lines(ctx: &RenderCtx) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let (content, pad) = util::layout(ctx.width);
    let inner = content - 4;

    let mut out = util::header("Get In Touch", data::CONTACT_LEAD, content, theme);

    // Contact details.
    let mut info: Vec<Line<'static>> = Vec::new();
    info.push(Line::from(vec![
        Span::styled(data::PROFILE.name.to_string(), Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", data::PROFILE.email), Style::default().fg(theme.muted)),
    ]));
    info.push(Line::from(Span::styled(
        data::PROFILE.location.to_string(),
        Style::default().fg(theme.muted),
    )));
    out.extend(util::card(
        Some((
            "Contact Information",
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        info,
        content,
        Style::default().fg(theme.card_border),
    ));
    out.push(util::blank());

    // Social links with their shortcut keys.
    let mut social: Vec<Line<'static>> = Vec::new();
    for (key, link) in ["g", "l", "m"].iter().zip(data::SOCIAL_LINKS.iter()) {
        social.push(Line::from(vec![
            Span::styled(format!("{} ", key), Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD)),
            Span::styled(format!("{:<10}", link.name), Style::default().fg(theme.fg)),
            Span::styled(link.url.to_string(), Style::default().fg(theme.link)),
        ]));
    }
    out.extend(util::card(
        Some((
            "Connect With Me",
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        social,
        content,
        Style::default().fg(theme.card_border),
    ));
    out.push(util::blank());

    // Resume export.
    let mut resume: Vec<Line<'static>> = Vec::new();
    resume.extend(util::wrapped(
        "Export my complete resume for detailed information about my experience and \
         qualifications.",
        inner,
        Style::default().fg(theme.muted),
    ));
    resume.push(Line::from(vec![
        Span::styled("r ", Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD)),
        Span::styled("Export resume (plain text)", Style::default().fg(theme.fg)),
    ]));
    out.extend(util::card(
        Some((
            "Resume",
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        resume,
        content,
        Style::default().fg(theme.card_border),
    ));
    out.push(util::blank());

    // The message form.
    out.extend(util::card(
        Some((
            "Send a Message",
            Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
        )),
        form_body(ctx.form, ctx.form_focus, inner, theme),
        content,
        Style::default().fg(theme.card_border),
    ));
    out.push(util::blank());
    out.push(util::center(
        if ctx.form_focus.is_some() {
            "Tab next field · Enter advance/submit · Esc leave form"
        } else {
            "Press Enter to fill in the message form"
        },
        content,
        Style::default().fg(theme.muted),
    ));
    out.push(util::blank());
    out.extend(util::centered_wrapped(
        data::AVAILABILITY_NOTE,
        content,
        Style::default().fg(theme.muted),
    ));
    out.push(util::blank());

    util::indent(out, pad)
}

fn form_body(
    form: &ContactForm,
    focus: Option<FormField>,
    width: usize,
    theme: &crate::ui::theme::Theme,
) -> Vec<Line<'static>> {
    let mut body: Vec<Line<'static>> = Vec::new();
    for field in [FormField::Name, FormField::Email, FormField::Message] {
        let focused = focus == Some(field);
        let label_style = if focused {
            Style::default().fg(theme.field_focus).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.field_label)
        };
        body.push(Line::from(Span::styled(field.label().to_string(), label_style)));
        body.extend(field_value_lines(form, field, focused, width, theme));
        body.push(util::blank());
    }

    let send_focused = focus == Some(FormField::Send);
    let send_style = if send_focused {
        Style::default()
            .fg(theme.bg)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.primary)
    };
    body.push(Line::from(Span::styled("[ Send Message ]".to_string(), send_style)));
    body
}

/// The field's current value, wrapped, with a cursor cell when focused and
/// the placeholder when empty.
fn field_value_lines(
    form: &ContactForm,
    field: FormField,
    focused: bool,
    width: usize,
    theme: &crate::ui::theme::Theme,
) -> Vec<Line<'static>> {
    let value = form.value(field);
    let value_style = Style::default().fg(theme.fg);
    let mut out: Vec<Line<'static>> = Vec::new();

    if value.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(Span::styled("█".to_string(), Style::default().fg(theme.field_focus)));
            spans.push(Span::raw(" "));
        } else {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            field.placeholder().to_string(),
            Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
        ));
        out.push(Line::from(spans));
        return out;
    }

    // Respect explicit line breaks (message field), wrap each paragraph.
    let body_width = width.saturating_sub(2).max(1);
    for paragraph in value.split('\n') {
        for row in util::wrap(paragraph, body_width) {
            out.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(row, value_style),
            ]));
        }
    }
    if focused {
        // Cursor sits after the last character.
        if let Some(last) = out.last_mut() {
            last.spans.push(Span::styled(
                "█".to_string(),
                Style::default().fg(theme.field_focus),
            ));
        }
    }
    out
}
