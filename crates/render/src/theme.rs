use graph_config::ThemeConfig;
use ratatui::style::Color;

/// Compiled theme derived from [`ThemeConfig`].
///
/// Colors are pre-parsed from hex strings into terminal RGB. Compilation is
/// infallible — invalid color strings fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphTheme {
    pub foreground: Color,
    pub background: Color,
}

impl GraphTheme {
    /// X11 "green3", the classic CPU-meter bar color.
    pub const GREEN: Color = Color::Rgb(0, 205, 0);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);

    /// Build a [`GraphTheme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            foreground: parse_hex(&cfg.foreground).unwrap_or(Self::GREEN),
            background: parse_hex(&cfg.background).unwrap_or(Self::BLACK),
        }
    }
}

impl Default for GraphTheme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

/// Parse a CSS-style `#RRGGBB` hex color string.
pub fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    // The length check counts bytes; reject non-ASCII input up front so the
    // pair slices below can't land inside a multi-byte character.
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

    Some(Color::Rgb(
        byte(&hex[0..2])?,
        byte(&hex[2..4])?,
        byte(&hex[4..6])?,
    ))
}
