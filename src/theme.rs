// Theme support for the terminal front end
//
// "auto" uses the terminal's ANSI palette, the named themes use true color.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the terminal front end
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Chrome
    pub title: Color,
    pub border: Color,
    pub border_type: BorderType,
    pub status_bar: Color,
    pub background: Color,
    pub foreground: Color,

    // Contents list
    pub heading: Color,
    pub muted: Color,
    /// Row under the pointer, hovered heading
    pub selection: Color,
    /// Alternating row background
    pub stripe: Color,
    pub button: Color,
    pub checkbox_on: Color,
    pub checkbox_off: Color,

    // Overlays
    pub tooltip_border: Color,
    pub highlight: Color,
}

impl Theme {
    /// Load theme by name; unknown names fall back to "auto"
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::auto(),
        }
    }

    /// Terminal ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            title: Color::Cyan,
            border: Color::Gray,
            border_type: BorderType::Plain,
            status_bar: Color::Gray,
            background: Color::Reset,
            foreground: Color::Reset,
            heading: Color::Yellow,
            muted: Color::DarkGray,
            selection: Color::DarkGray,
            stripe: Color::Black,
            button: Color::Cyan,
            checkbox_on: Color::Green,
            checkbox_off: Color::Red,
            tooltip_border: Color::Yellow,
            highlight: Color::Magenta,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            title: Color::Rgb(229, 192, 123),
            border: Color::Rgb(92, 99, 112),
            border_type: BorderType::Rounded,
            status_bar: Color::Rgb(171, 178, 191),
            background: Color::Rgb(30, 33, 39),
            foreground: Color::Rgb(220, 223, 228),
            heading: Color::Rgb(229, 192, 123),
            muted: Color::Rgb(127, 132, 142),
            selection: Color::Rgb(62, 68, 81),
            stripe: Color::Rgb(38, 42, 49),
            button: Color::Rgb(97, 175, 239),
            checkbox_on: Color::Rgb(152, 195, 121),
            checkbox_off: Color::Rgb(224, 108, 117),
            tooltip_border: Color::Rgb(229, 192, 123),
            highlight: Color::Rgb(198, 120, 221),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            title: Color::Rgb(152, 104, 1),
            border: Color::Rgb(160, 161, 167),
            border_type: BorderType::Rounded,
            status_bar: Color::Rgb(80, 82, 88),
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            heading: Color::Rgb(152, 104, 1),
            muted: Color::Rgb(140, 142, 150),
            selection: Color::Rgb(218, 222, 232),
            stripe: Color::Rgb(240, 240, 242),
            button: Color::Rgb(64, 120, 242),
            checkbox_on: Color::Rgb(80, 161, 79),
            checkbox_off: Color::Rgb(228, 86, 73),
            tooltip_border: Color::Rgb(152, 104, 1),
            highlight: Color::Rgb(166, 38, 164),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
