use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub muted: Color,     // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub number: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color, // Background for highlighted cells/nodes
    pub border_focused: Color,
    pub border_normal: Color,
    pub title: Color,
    pub label: Color, // Cyan for front/rear/top markers and indices
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    muted: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(250, 179, 135),         // Orange for values
    highlight_fg: Color::Rgb(30, 30, 46),      // Dark text on bright cells
    highlight_bg: Color::Rgb(249, 226, 175),   // Yellow for emphasized elements
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    title: Color::Rgb(137, 180, 250),
    label: Color::Rgb(148, 226, 213), // Cyan/teal for structural markers
};
