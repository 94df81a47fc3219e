//! Main TUI application state and logic

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};
use rustc_hash::FxHashMap;

use crate::backdrop::Backdrop;
use crate::content::data;
use crate::launch;
use crate::page::{Page, SectionId};
use crate::reveal::{RevealHandle, RevealObserver};
use crate::ui::effects::{self, Presentation};
use crate::ui::form::{ContactForm, FormField};
use crate::ui::sections::{self, RenderCtx};
use crate::ui::theme::DEFAULT_THEME;

/// Rows taken by the navigation and status bars.
const CHROME_ROWS: u16 = 2;

/// Startup options resolved from the command line.
pub struct AppConfig {
    /// Animate the hero backdrop (off for reduced motion).
    pub animate_backdrop: bool,
    /// Where the resume export lands.
    pub resume_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            animate_backdrop: true,
            resume_path: PathBuf::from("Ari_R_Resume.txt"),
        }
    }
}

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    /// Scrolling the page.
    Page,
    /// Editing the contact form.
    Form(FormField),
    /// Waiting for a project number to open its repository.
    ProjectLinks,
}

/// Section lines measured at one width, reused until the terminal resizes
/// or the form changes.
struct LayoutCache {
    width: u16,
    viewport: usize,
    form_rev: u64,
    lines: FxHashMap<SectionId, Vec<Line<'static>>>,
}

/// The main application state
pub struct App {
    /// Scroll model for the stacked sections.
    page: Page,

    /// Fan-in point for intersection samples.
    observer: RevealObserver<SectionId>,

    /// One reveal latch per observed section.
    handles: FxHashMap<SectionId, RevealHandle<SectionId>>,

    /// When each section's latch fired, for the entrance transition.
    revealed_at: FxHashMap<SectionId, Instant>,

    /// Decorative particle field behind the hero.
    backdrop: Backdrop,

    /// Contact form fields, transient.
    form: ContactForm,

    /// Bumped on every form edit or focus change to refresh the layout.
    form_rev: u64,

    focus: Focus,

    /// Status message to display
    status_message: String,
    status_is_error: bool,

    resume_path: PathBuf,

    /// Whether the app should quit
    should_quit: bool,

    /// Last frame time, for backdrop animation.
    last_frame: Instant,

    layout: Option<LayoutCache>,
}

impl App {
    /// Create the app and subscribe every observed section's reveal latch.
    pub fn new(config: AppConfig) -> Self {
        let page = Page::new();
        let observer = RevealObserver::new();
        let mut handles = FxHashMap::default();
        for id in SectionId::ALL {
            if let Some(threshold) = id.reveal_threshold() {
                // Unresolvable regions degrade to a permanently unset latch.
                let handle = if page.contains(id) {
                    observer.observe(id, threshold)
                } else {
                    RevealHandle::detached()
                };
                handles.insert(id, handle);
            }
        }

        App {
            page,
            observer,
            handles,
            revealed_at: FxHashMap::default(),
            backdrop: Backdrop::new(config.animate_backdrop),
            form: ContactForm::new(),
            form_rev: 0,
            focus: Focus::Page,
            status_message: String::from("Ready! Scroll to explore"),
            status_is_error: false,
            resume_path: config.resume_path,
            should_quit: false,
            last_frame: Instant::now(),
            layout: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let size = terminal.size()?;
            self.update(size.width, size.height);

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            self.backdrop.tick(now.saturating_duration_since(self.last_frame));
            self.last_frame = now;

            // Poll with a timeout so the backdrop and entrance transitions
            // keep animating while the keyboard is idle.
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Relayout if needed, then deliver intersection samples to the
    /// reveal observer. Runs before drawing, off the render path.
    fn update(&mut self, width: u16, height: u16) {
        let viewport = height.saturating_sub(CHROME_ROWS) as usize;
        self.ensure_layout(width, viewport);

        let now = Instant::now();
        for (id, ratio) in self.page.samples() {
            if self.observer.deliver(id, ratio) {
                self.revealed_at.entry(id).or_insert(now);
            }
        }
    }

    /// Rebuild the section lines when the terminal or the form changed.
    fn ensure_layout(&mut self, width: u16, viewport: usize) {
        let stale = match &self.layout {
            Some(cache) => {
                cache.width != width
                    || cache.viewport != viewport
                    || cache.form_rev != self.form_rev
            }
            None => true,
        };
        if stale {
            let ctx = RenderCtx {
                width,
                viewport,
                theme: &DEFAULT_THEME,
                form: &self.form,
                form_focus: match self.focus {
                    Focus::Form(field) => Some(field),
                    _ => None,
                },
            };
            let mut lines = FxHashMap::default();
            for id in SectionId::ALL {
                lines.insert(id, sections::lines_for(id, &ctx));
            }
            self.layout = Some(LayoutCache {
                width,
                viewport,
                form_rev: self.form_rev,
                lines,
            });
        }

        let cache = self.layout.as_ref().expect("layout cache just ensured");
        let mut heights = [0usize; SectionId::ALL.len()];
        for (i, id) in SectionId::ALL.iter().enumerate() {
            heights[i] = cache.lines[id].len();
        }
        self.page.set_layout(heights, viewport);
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        sections::render_nav_bar(frame, chunks[0], self.page.current_section(), &DEFAULT_THEME);
        self.render_page(frame, chunks[1]);
        sections::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.status_is_error,
            self.page.scroll_fraction(),
            &DEFAULT_THEME,
        );
    }

    /// Draw the visible slice of every section, with its entrance
    /// presentation applied.
    fn render_page(&self, frame: &mut Frame, area: Rect) {
        let cache = match &self.layout {
            Some(cache) => cache,
            None => return,
        };
        let now = Instant::now();
        let base = Style::default().bg(DEFAULT_THEME.bg).fg(DEFAULT_THEME.fg);
        frame.render_widget(Paragraph::new("").style(base), area);

        for slice in self.page.visible_slices() {
            if slice.screen_row >= area.height {
                continue;
            }
            let presentation = self.presentation_of(slice.id, now);
            let lines = cache.lines[&slice.id].clone();
            let styled = effects::apply(lines, presentation, &DEFAULT_THEME);
            let visible: Vec<Line<'static>> = styled
                .into_iter()
                .skip(slice.skip_rows)
                .take(slice.rows as usize)
                .collect();

            let rect = Rect::new(
                area.x,
                area.y + slice.screen_row,
                area.width,
                slice.rows.min(area.height - slice.screen_row),
            );
            frame.render_widget(Paragraph::new(visible).style(base), rect);

            // The backdrop fills whatever the hero copy left empty.
            if slice.id == SectionId::Home {
                self.backdrop.render(frame.buffer_mut(), rect);
            }
        }
    }

    /// Presentation state of a section this frame, read synchronously off
    /// its latch. Unobserved sections (the footer) are settled chrome.
    fn presentation_of(&self, id: SectionId, now: Instant) -> Presentation {
        match self.handles.get(&id) {
            None => Presentation::Settled,
            Some(handle) if !handle.is_visible() => Presentation::Hidden,
            Some(_) => match self.revealed_at.get(&id) {
                Some(&start) => effects::presentation(Some(start), now),
                None => Presentation::Settled,
            },
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::Form(field) => self.handle_form_key(key, field),
            Focus::ProjectLinks => self.handle_project_links_key(key),
            Focus::Page => self.handle_page_key(key),
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        let viewport = self.page.viewport();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Up => self.page.scroll_by(-1),
            KeyCode::Down => self.page.scroll_by(1),
            KeyCode::PageUp => self.page.scroll_by(-(viewport.saturating_sub(2) as isize)),
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.page.scroll_by(viewport.saturating_sub(2) as isize)
            }
            KeyCode::Home => self.page.scroll_to_top(),
            KeyCode::End => self.page.scroll_to_bottom(),
            // Number keys jump straight to a section.
            KeyCode::Char(c @ '1'..='9') => {
                let index = c.to_digit(10).unwrap() as usize - 1;
                let id = SectionId::ALL[index];
                self.page.jump_to(id);
                self.set_status(format!("Jumped to {}", id.title()));
            }
            KeyCode::Tab => {
                let next = self.page.current_section().next();
                self.page.jump_to(next);
            }
            KeyCode::BackTab => {
                let prev = self.page.current_section().prev();
                self.page.jump_to(prev);
            }
            KeyCode::Char('g') => self.open_link(data::GITHUB_URL, "Opened GitHub profile"),
            KeyCode::Char('l') => self.open_link(data::LINKEDIN_URL, "Opened LinkedIn profile"),
            KeyCode::Char('m') => {
                let url = format!("mailto:{}", data::PROFILE.email);
                self.open_link(&url, "Opened email composer");
            }
            KeyCode::Char('r') => self.export_resume(),
            KeyCode::Char('o') => {
                self.focus = Focus::ProjectLinks;
                self.set_status(format!(
                    "Open which repository? 1-{}, Esc cancels",
                    data::PROJECTS.len()
                ));
            }
            KeyCode::Enter => {
                // Enter the form only while the contact section is on
                // screen.
                if self.page.intersection_ratio(SectionId::Contact) > 0.0 {
                    self.focus = Focus::Form(FormField::Name);
                    self.form_rev += 1;
                    self.set_status("Editing the message form".to_string());
                }
            }
            _ => {}
        }
    }

    /// One project number opens that repository; anything else cancels.
    fn handle_project_links_key(&mut self, key: KeyEvent) {
        self.focus = Focus::Page;
        if let KeyCode::Char(c @ '1'..='9') = key.code {
            let index = c.to_digit(10).unwrap() as usize - 1;
            if let Some(project) = data::PROJECTS.get(index) {
                self.open_link(project.repository, &format!("Opened {}", project.title));
                return;
            }
        }
        self.set_status("Cancelled".to_string());
    }

    fn handle_form_key(&mut self, key: KeyEvent, field: FormField) {
        match key.code {
            KeyCode::Esc => {
                self.focus = Focus::Page;
                self.set_status("Left the message form".to_string());
            }
            KeyCode::Tab => self.focus = Focus::Form(field.next()),
            KeyCode::BackTab => self.focus = Focus::Form(field.prev()),
            KeyCode::Enter => match field {
                FormField::Name | FormField::Email => self.focus = Focus::Form(field.next()),
                FormField::Message => self.form.newline(field),
                FormField::Send => self.submit_form(),
            },
            KeyCode::Backspace => self.form.backspace(field),
            KeyCode::Char(c) => self.form.insert(field, c),
            _ => {}
        }
        self.form_rev += 1;
    }

    /// Build the pre-filled mailto link and hand it to the platform.
    fn submit_form(&mut self) {
        let url = launch::mailto_url(&self.form.name, &self.form.email, &self.form.message);
        match launch::open_url(&url) {
            Ok(()) => {
                self.form.clear();
                self.focus = Focus::Page;
                self.set_status("Email client opened with your message".to_string());
            }
            Err(e) => self.set_error(format!("Could not open email client: {}", e)),
        }
    }

    fn open_link(&mut self, url: &str, ok_message: &str) {
        match launch::open_url(url) {
            Ok(()) => self.set_status(ok_message.to_string()),
            Err(e) => self.set_error(format!("{}", e)),
        }
    }

    fn export_resume(&mut self) {
        match launch::export_resume(&self.resume_path) {
            Ok(bytes) => self.set_status(format!(
                "Resume exported to {} ({} bytes)",
                self.resume_path.display(),
                bytes
            )),
            Err(e) => self.set_error(format!("Resume export failed: {}", e)),
        }
    }

    fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: String) {
        self.status_message = message;
        self.status_is_error = true;
    }
}
