//! Rendering logic for each page section.
//!
//! Every section exposes one `lines` function that builds its full,
//! settled content as styled lines at the current width. The app measures
//! those lines for the page layout, lets the entrance effects restyle
//! them, and draws the visible slice. The navigation and status bars are
//! the only parts rendered directly into frame areas.

pub mod util;

mod about;
mod certificates;
mod competencies;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod projects;
mod skills;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::page::SectionId;
use crate::ui::form::{ContactForm, FormField};
use crate::ui::theme::Theme;

/// Everything a section needs to build its lines.
pub struct RenderCtx<'a> {
    pub width: u16,
    /// Viewport height in rows; the hero fills exactly one viewport.
    pub viewport: usize,
    pub theme: &'static Theme,
    pub form: &'a ContactForm,
    pub form_focus: Option<FormField>,
}

/// Build the settled content lines for `id`.
pub fn lines_for(id: SectionId, ctx: &RenderCtx) -> Vec<Line<'static>> {
    match id {
        SectionId::Home => hero::lines(ctx),
        SectionId::About => about::lines(ctx),
        SectionId::Education => education::lines(ctx),
        SectionId::Experience => experience::lines(ctx),
        SectionId::Skills => skills::lines(ctx),
        SectionId::Certificates => certificates::lines(ctx),
        SectionId::Competencies => competencies::lines(ctx),
        SectionId::Projects => projects::lines(ctx),
        SectionId::Contact => contact::lines(ctx),
        SectionId::Footer => footer::lines(ctx),
    }
}

/// Top navigation bar: brand plus section titles, current one highlighted.
pub fn render_nav_bar(frame: &mut Frame, area: Rect, current: SectionId, theme: &Theme) {
    let mut spans: Vec<Span<'static>> = vec![
        Span::styled(
            " Ari R ",
            Style::default().fg(theme.heading).add_modifier(Modifier::BOLD),
        ),
        Span::styled("▏", Style::default().fg(theme.card_border)),
    ];
    for (i, id) in SectionId::ALL.iter().enumerate() {
        if *id == SectionId::Footer {
            continue;
        }
        let style = if *id == current || (*id == SectionId::Contact && current == SectionId::Footer)
        {
            Style::default().fg(theme.nav_active).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        spans.push(Span::styled(format!(" {} ", i + 1), Style::default().fg(theme.card_border)));
        spans.push(Span::styled(id.title().to_string(), style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg)),
        area,
    );
}

/// Bottom status bar: message on the left, key hints and scroll position
/// on the right.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    message_is_error: bool,
    scroll_fraction: f64,
    theme: &Theme,
) {
    let percent = (scroll_fraction * 100.0).round() as u16;
    let hints = format!("↑↓ scroll · 1-9 jump · q quit · {:>3}%", percent);
    let message_style = if message_is_error {
        Style::default().fg(theme.error)
    } else {
        Style::default().fg(theme.fg)
    };

    let width = area.width as usize;
    let left = format!(" {}", message);
    let pad = width
        .saturating_sub(left.chars().count())
        .saturating_sub(hints.chars().count() + 1);
    let line = Line::from(vec![
        Span::styled(left, message_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(hints, Style::default().fg(theme.muted)),
        Span::raw(" "),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(theme.bg)), area);
}
