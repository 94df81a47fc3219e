//! The virtual page: a fixed vertical sequence of named sections.
//!
//! The page knows nothing about rendering. It holds the section order,
//! their row heights at the current terminal width, and a clamped scroll
//! offset, and answers the two questions the rest of the app asks every
//! frame: how much of each section is inside the viewport (intersection
//! ratios for the reveal latches), and which slice of each section lands
//! where on screen (for drawing).

/// One content block of the single-page layout, in fixed vertical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Education,
    Experience,
    Skills,
    Certificates,
    Competencies,
    Projects,
    Contact,
    Footer,
}

impl SectionId {
    /// Every section, top to bottom.
    pub const ALL: [SectionId; 10] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Certificates,
        SectionId::Competencies,
        SectionId::Projects,
        SectionId::Contact,
        SectionId::Footer,
    ];

    /// Stable region name, used to resolve reveal subscriptions.
    pub fn name(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Education => "education",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Certificates => "certificates",
            SectionId::Competencies => "competencies",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
            SectionId::Footer => "footer",
        }
    }

    /// Display title for the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Education => "Education",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Certificates => "Certificates",
            SectionId::Competencies => "Competencies",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
            SectionId::Footer => "Footer",
        }
    }

    /// Intersection fraction that must be visible before the section's
    /// entrance animation triggers. The footer is part of the static page
    /// chrome and is never observed.
    pub fn reveal_threshold(self) -> Option<f64> {
        match self {
            SectionId::Skills | SectionId::Projects | SectionId::Contact => Some(0.2),
            SectionId::Footer => None,
            _ => Some(0.3),
        }
    }

    /// The next section down the page, stopping at the footer.
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(pos + 1).min(Self::ALL.len() - 1)]
    }

    /// The previous section up the page, stopping at the top.
    pub fn prev(self) -> Self {
        let pos = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[pos.saturating_sub(1)]
    }
}

/// The slice of a section that lands inside the viewport this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleSlice {
    pub id: SectionId,
    /// Row inside the viewport where the slice starts.
    pub screen_row: u16,
    /// Rows of the section scrolled off above the viewport.
    pub skip_rows: usize,
    /// Rows of the section actually on screen.
    pub rows: u16,
}

/// Scroll model for the stacked sections.
pub struct Page {
    /// Section heights in rows, in `SectionId::ALL` order.
    heights: [usize; SectionId::ALL.len()],
    scroll: usize,
    viewport: usize,
}

impl Page {
    pub fn new() -> Self {
        Page {
            heights: [0; SectionId::ALL.len()],
            scroll: 0,
            viewport: 0,
        }
    }

    /// Replace the layout after a resize or content change.
    ///
    /// Heights are given in rows at the current width. The scroll offset is
    /// re-clamped so the viewport never runs past the bottom of the page.
    pub fn set_layout(&mut self, heights: [usize; SectionId::ALL.len()], viewport: usize) {
        self.heights = heights;
        self.viewport = viewport;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Whether `id` resolves to a region of this page. Sections that fail
    /// to resolve are never observed; their reveal latches stay unset.
    pub fn contains(&self, id: SectionId) -> bool {
        SectionId::ALL.contains(&id)
    }

    pub fn total_height(&self) -> usize {
        self.heights.iter().sum()
    }

    pub fn max_scroll(&self) -> usize {
        self.total_height().saturating_sub(self.viewport)
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    /// Scroll fraction in `[0, 1]` for the status bar.
    pub fn scroll_fraction(&self) -> f64 {
        let max = self.max_scroll();
        if max == 0 {
            0.0
        } else {
            self.scroll as f64 / max as f64
        }
    }

    pub fn scroll_by(&mut self, delta: isize) {
        if delta >= 0 {
            self.scroll = self.scroll.saturating_add(delta as usize).min(self.max_scroll());
        } else {
            self.scroll = self.scroll.saturating_sub(delta.unsigned_abs());
        }
    }

    pub fn scroll_to(&mut self, row: usize) {
        self.scroll = row.min(self.max_scroll());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Align the top of `id` with the top of the viewport where possible.
    pub fn jump_to(&mut self, id: SectionId) {
        if let Some(top) = self.top_of(id) {
            self.scroll_to(top);
        }
    }

    /// Row offset of the section's top inside the page.
    pub fn top_of(&self, id: SectionId) -> Option<usize> {
        let idx = index_of(id);
        if self.heights[idx] == 0 {
            return None;
        }
        Some(self.heights[..idx].iter().sum())
    }

    /// Fraction of the section currently inside the viewport, in `[0, 1]`.
    pub fn intersection_ratio(&self, id: SectionId) -> f64 {
        let idx = index_of(id);
        let height = self.heights[idx];
        if height == 0 || self.viewport == 0 {
            return 0.0;
        }
        let top: usize = self.heights[..idx].iter().sum();
        let bottom = top + height;
        let view_top = self.scroll;
        let view_bottom = self.scroll + self.viewport;
        let overlap = bottom.min(view_bottom).saturating_sub(top.max(view_top));
        overlap as f64 / height as f64
    }

    /// One intersection sample per section, delivered to the reveal
    /// observer after every scroll.
    pub fn samples(&self) -> Vec<(SectionId, f64)> {
        SectionId::ALL
            .iter()
            .map(|&id| (id, self.intersection_ratio(id)))
            .collect()
    }

    /// The section under the top of the viewport, for the nav highlight.
    pub fn current_section(&self) -> SectionId {
        let mut top = 0usize;
        for (&id, &height) in SectionId::ALL.iter().zip(self.heights.iter()) {
            if self.scroll < top + height {
                return id;
            }
            top += height;
        }
        SectionId::Footer
    }

    /// The on-screen slices of every partially visible section, top to
    /// bottom. Together they tile the viewport exactly (modulo a short
    /// page).
    pub fn visible_slices(&self) -> Vec<VisibleSlice> {
        let mut slices = Vec::new();
        let view_top = self.scroll;
        let view_bottom = self.scroll + self.viewport;
        let mut top = 0usize;
        for (&id, &height) in SectionId::ALL.iter().zip(self.heights.iter()) {
            let bottom = top + height;
            let overlap = bottom.min(view_bottom).saturating_sub(top.max(view_top));
            if overlap > 0 {
                slices.push(VisibleSlice {
                    id,
                    screen_row: top.saturating_sub(view_top) as u16,
                    skip_rows: view_top.saturating_sub(top),
                    rows: overlap as u16,
                });
            }
            top = bottom;
        }
        slices
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

fn index_of(id: SectionId) -> usize {
    SectionId::ALL
        .iter()
        .position(|s| *s == id)
        .expect("section is in ALL")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(heights: [usize; 10], viewport: usize) -> Page {
        let mut page = Page::new();
        page.set_layout(heights, viewport);
        page
    }

    #[test]
    fn sections_keep_fixed_order() {
        assert_eq!(SectionId::ALL[0], SectionId::Home);
        assert_eq!(SectionId::ALL[9], SectionId::Footer);
        assert_eq!(SectionId::Home.next(), SectionId::About);
        assert_eq!(SectionId::Footer.next(), SectionId::Footer);
        assert_eq!(SectionId::Home.prev(), SectionId::Home);
    }

    #[test]
    fn scroll_clamps_to_page() {
        let mut page = page_with([10; 10], 20);
        page.scroll_by(-5);
        assert_eq!(page.scroll(), 0);
        page.scroll_by(1000);
        assert_eq!(page.scroll(), 100 - 20);
        page.scroll_to_bottom();
        assert_eq!(page.scroll(), page.max_scroll());
    }

    #[test]
    fn fully_visible_section_has_ratio_one() {
        let page = page_with([10; 10], 25);
        assert_eq!(page.intersection_ratio(SectionId::Home), 1.0);
        assert_eq!(page.intersection_ratio(SectionId::About), 1.0);
        // Third section is half cut by the viewport bottom.
        assert_eq!(page.intersection_ratio(SectionId::Education), 0.5);
        assert_eq!(page.intersection_ratio(SectionId::Footer), 0.0);
    }

    #[test]
    fn ratios_stay_in_unit_range() {
        let mut page = page_with([3, 40, 7, 12, 9, 5, 22, 11, 6, 4], 18);
        for step in 0..40 {
            page.scroll_to(step * 3);
            for (_, ratio) in page.samples() {
                assert!((0.0..=1.0).contains(&ratio));
            }
        }
    }

    #[test]
    fn jump_aligns_section_top() {
        let mut page = page_with([10; 10], 20);
        page.jump_to(SectionId::Skills);
        assert_eq!(page.scroll(), page.top_of(SectionId::Skills).unwrap());
        assert_eq!(page.intersection_ratio(SectionId::Skills), 1.0);
        // Jumping near the bottom clamps instead of overshooting.
        page.jump_to(SectionId::Footer);
        assert_eq!(page.scroll(), page.max_scroll());
    }

    #[test]
    fn current_section_tracks_viewport_top() {
        let mut page = page_with([10; 10], 20);
        assert_eq!(page.current_section(), SectionId::Home);
        page.scroll_to(10);
        assert_eq!(page.current_section(), SectionId::About);
        page.scroll_to(19);
        assert_eq!(page.current_section(), SectionId::About);
        page.scroll_to_bottom();
        assert_eq!(page.current_section(), SectionId::Contact);
    }

    #[test]
    fn visible_slices_tile_the_viewport() {
        let mut page = page_with([8, 15, 30, 12, 9, 14, 21, 18, 10, 6], 24);
        for step in 0..60 {
            page.scroll_to(step * 2);
            let slices = page.visible_slices();
            let covered: usize = slices.iter().map(|s| s.rows as usize).sum();
            assert_eq!(covered, page.viewport().min(page.total_height()));
            // Slices are contiguous from the top of the viewport.
            let mut row = 0u16;
            for slice in &slices {
                assert_eq!(slice.screen_row, row);
                row += slice.rows;
            }
        }
    }

    #[test]
    fn relayout_reclamps_scroll() {
        let mut page = page_with([10; 10], 20);
        page.scroll_to_bottom();
        page.set_layout([2; 10], 18);
        assert_eq!(page.scroll(), page.max_scroll());
    }

    #[test]
    fn footer_has_no_reveal_threshold() {
        assert!(SectionId::Footer.reveal_threshold().is_none());
        assert_eq!(SectionId::Skills.reveal_threshold(), Some(0.2));
        assert_eq!(SectionId::About.reveal_threshold(), Some(0.3));
    }
}
