use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,       // Secondary copy, leads, metadata
    pub primary: Color,     // Sky blue
    pub secondary: Color,   // Teal
    pub accent: Color,      // Violet
    pub heading: Color,     // Section titles
    pub badge_fg: Color,
    pub badge_bg: Color,
    pub card_border: Color,
    pub bullet: Color,      // List bullets and grade dots
    pub link: Color,        // Repository and profile URLs
    pub nav_active: Color,  // Highlighted nav entry
    pub error: Color,
    pub field_label: Color, // Form field labels
    pub field_focus: Color, // Border of the focused form field
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(15, 20, 32),
    fg: Color::Rgb(205, 214, 244),
    muted: Color::Rgb(128, 136, 160),
    primary: Color::Rgb(14, 165, 233),   // Sky blue
    secondary: Color::Rgb(20, 184, 166), // Teal
    accent: Color::Rgb(139, 92, 246),    // Violet
    heading: Color::Rgb(56, 189, 248),   // Lighter sky for titles
    badge_fg: Color::Rgb(205, 214, 244),
    badge_bg: Color::Rgb(35, 45, 68),
    card_border: Color::Rgb(62, 72, 98),
    bullet: Color::Rgb(20, 184, 166),    // Teal dots
    link: Color::Rgb(125, 211, 252),     // Pale sky for URLs
    nav_active: Color::Rgb(249, 226, 175), // Warm highlight
    error: Color::Rgb(243, 139, 168),
    field_label: Color::Rgb(148, 163, 184),
    field_focus: Color::Rgb(56, 189, 248),
};
