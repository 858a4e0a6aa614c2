use ratatui::style::Color;

use crate::state::ModeFilter;

/// Colour palette shared by every widget.
///
/// Slot names follow Catppuccin; `theme.conf` can override any of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Screen background.
    pub base: Color,
    /// Modal, toast and footer background.
    pub mantle: Color,
    /// Text on the active tab.
    pub crust: Color,
    /// Highlighted list row and gauge track.
    pub surface1: Color,
    /// Panel borders.
    pub surface2: Color,
    /// Placeholders, hints and scores.
    pub overlay1: Color,
    /// Empty-state text and ranks below the podium.
    pub overlay2: Color,
    /// Body text.
    pub text: Color,
    /// Footer text and unknown modes.
    pub subtext0: Color,
    /// Player counts and secondary values.
    pub subtext1: Color,
    /// Field labels, the search prompt and the SkyBlock badge.
    pub sapphire: Color,
    /// Titles, the help frame and the Creative badge.
    pub mauve: Color,
    /// Gauge fill, Survival badge and the toast frame.
    pub green: Color,
    /// Ratings, top-3 ranks and the MiniGames badge.
    pub yellow: Color,
    /// Alerts and the PvP badge.
    pub red: Color,
    /// Server names in the details pane and the active tab.
    pub lavender: Color,
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay2: Color::Rgb(0x93, 0x99, 0xb2),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            subtext1: Color::Rgb(0xba, 0xc2, 0xde),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Number of entries on the Top tab.
    pub leaderboard_size: usize,
    /// Mode filter applied at startup.
    pub default_mode: ModeFilter,
    /// JSON catalog file; empty means the built-in sample servers.
    pub catalog_path: String,
    /// Lifetime of toast notifications in seconds.
    pub toast_duration_secs: u64,
    /// Preferred locale (e.g. "ru-RU"); empty for auto-detection.
    pub locale: String,
    /// Whether the keybinds footer is rendered.
    pub show_keybinds_footer: bool,
    /// Width percentage of the details pane.
    pub details_pane_pct: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            leaderboard_size: crate::logic::query::DEFAULT_LEADERBOARD_SIZE,
            default_mode: ModeFilter::All,
            catalog_path: String::new(),
            toast_duration_secs: 2,
            locale: String::new(),
            show_keybinds_footer: true,
            details_pane_pct: 40,
        }
    }
}
