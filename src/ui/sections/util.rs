//! Shared text-layout helpers for the section renderers.
//!
//! Sections build their content as plain `Vec<Line>` at a fixed content
//! width; these helpers handle word wrapping, centering, card borders, and
//! badge rows. All width math assumes single-cell characters, which holds
//! for the content tables (the backdrop's wide glyphs never pass through
//! here).

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::ui::theme::Theme;

/// Widest a section's content column gets, regardless of terminal size.
pub const MAX_CONTENT_WIDTH: usize = 96;

/// Content width and left padding for a terminal `width` columns wide.
pub fn layout(width: u16) -> (usize, usize) {
    let total = width as usize;
    let content = total.saturating_sub(4).clamp(20, MAX_CONTENT_WIDTH);
    let pad = (total.saturating_sub(content)) / 2;
    (content, pad)
}

/// Greedy word wrap. Words longer than `width` are split hard.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word;
        // Hard-split oversized words so the loop below always terminates.
        while word.chars().count() > width {
            let split: String = word.chars().take(width).collect();
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(split.clone());
            word = &word[split.len()..];
        }
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Wrap `text` into styled lines.
pub fn wrapped(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, style)))
        .collect()
}

pub fn blank() -> Line<'static> {
    Line::default()
}

/// Display width of a line, in cells.
pub fn line_width(line: &Line) -> usize {
    line.spans.iter().map(|s| s.content.chars().count()).sum()
}

/// Center `text` within `width` by left padding.
pub fn center(text: &str, width: usize, style: Style) -> Line<'static> {
    let len = text.chars().count();
    let pad = width.saturating_sub(len) / 2;
    Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(text.to_string(), style),
    ])
}

/// Center pre-wrapped styled text line by line.
pub fn centered_wrapped(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|l| center(&l, width, style))
        .collect()
}

/// Prefix every line with `pad` spaces.
pub fn indent(lines: Vec<Line<'static>>, pad: usize) -> Vec<Line<'static>> {
    if pad == 0 {
        return lines;
    }
    let prefix = " ".repeat(pad);
    lines
        .into_iter()
        .map(|line| {
            let mut spans = vec![Span::raw(prefix.clone())];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}

/// Box a block of lines with rounded borders, optionally with a title in
/// the top border. Interior lines are padded so the right border stays
/// aligned; overlong lines are left untouched rather than clipped.
pub fn card(
    title: Option<(&str, Style)>,
    body: Vec<Line<'static>>,
    width: usize,
    border: Style,
) -> Vec<Line<'static>> {
    let width = width.max(6);
    let inner = width - 4;
    let mut out = Vec::with_capacity(body.len() + 2);

    let top = match title {
        Some((text, style)) => {
            let text: String = text.chars().take(inner.saturating_sub(2)).collect();
            let fill = inner.saturating_sub(text.chars().count() + 1);
            Line::from(vec![
                Span::styled("╭─ ", border),
                Span::styled(text, style),
                Span::styled(format!(" {}╮", "─".repeat(fill)), border),
            ])
        }
        None => Line::from(Span::styled(format!("╭{}╮", "─".repeat(width - 2)), border)),
    };
    out.push(top);

    for line in body {
        let fill = inner.saturating_sub(line_width(&line));
        let mut spans = vec![Span::styled("│ ".to_string(), border)];
        spans.extend(line.spans);
        spans.push(Span::raw(" ".repeat(fill)));
        spans.push(Span::styled(" │".to_string(), border));
        out.push(Line::from(spans));
    }

    out.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(width - 2)),
        border,
    )));
    out
}

/// Flow `[ item ]` chips into as many rows as `width` requires.
pub fn badge_rows(items: &[&str], width: usize, style: Style) -> Vec<Line<'static>> {
    let mut rows = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;
    for item in items {
        let chip = format!(" {} ", item);
        let cost = chip.chars().count() + if used == 0 { 0 } else { 1 };
        if used != 0 && used + cost > width {
            rows.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if used != 0 {
            spans.push(Span::raw(" "));
            used += 1;
        }
        used += chip.chars().count();
        spans.push(Span::styled(chip, style));
    }
    if !spans.is_empty() {
        rows.push(Line::from(spans));
    }
    rows
}

/// A wrapped bullet item with a hanging indent.
pub fn bullet(text: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let body_width = width.saturating_sub(2).max(1);
    let mut out = Vec::new();
    for (i, row) in wrap(text, body_width).into_iter().enumerate() {
        let marker = if i == 0 { "• " } else { "  " };
        out.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(theme.bullet)),
            Span::styled(row, Style::default().fg(theme.fg)),
        ]));
    }
    out
}

/// Standard section header: centered title plus a centered muted lead.
pub fn header(title: &str, lead: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut out = vec![blank(), blank()];
    out.push(center(
        title,
        width,
        Style::default()
            .fg(theme.heading)
            .add_modifier(ratatui::style::Modifier::BOLD),
    ));
    out.push(blank());
    out.extend(centered_wrapped(
        lead,
        width.min(72),
        Style::default().fg(theme.muted),
    ));
    out.push(blank());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn wrap_splits_oversized_words() {
        let lines = wrap("antidisestablishmentarianism", 10);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
    }

    #[test]
    fn wrap_of_empty_text_yields_one_blank_line() {
        assert_eq!(wrap("", 20), vec![String::new()]);
    }

    #[test]
    fn card_borders_are_flush() {
        let body = vec![Line::from("hi"), Line::from("a longer row")];
        let lines = card(None, body, 20, Style::default());
        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert_eq!(line_width(line), 20);
        }
    }

    #[test]
    fn titled_card_embeds_the_title() {
        let lines = card(Some(("Title", Style::default())), vec![], 24, Style::default());
        let top: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(top.contains("Title"));
        assert_eq!(top.chars().count(), 24);
    }

    #[test]
    fn badge_rows_flow_to_width() {
        let items = ["Python", "SQL", "Machine Learning", "Statistics"];
        let rows = badge_rows(&items, 24, Style::default());
        assert!(rows.len() >= 2);
        for row in &rows {
            assert!(line_width(row) <= 24);
        }
    }

    #[test]
    fn layout_caps_and_centers() {
        let (content, pad) = layout(200);
        assert_eq!(content, MAX_CONTENT_WIDTH);
        assert_eq!(pad, (200 - MAX_CONTENT_WIDTH) / 2);
        let (content, _) = layout(40);
        assert_eq!(content, 36);
    }
}
