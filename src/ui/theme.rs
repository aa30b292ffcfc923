use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color, // Blue
    pub comment: Color, // Grey
    pub success: Color, // Green
    pub error: Color,   // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub fault_line_bg: Color,
    pub function: Color,
    pub node_label: Color, // Cyan for AST node kinds
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250), // Blue
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    string: Color::Rgb(250, 179, 135),         // Orange for strings
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for bars
    fault_line_bg: Color::Rgb(80, 40, 55),     // Dark red BG for faulty lines
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    node_label: Color::Rgb(148, 226, 213),     // Cyan/teal for node kinds
};
