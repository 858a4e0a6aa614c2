/// Skeleton `settings.conf` written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "# craftlist settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments.\n\
#\n\
# Number of servers shown on the Top tab\n\
leaderboard_size = 10\n\
#\n\
# Mode filter at startup: all | survival | skyblock | pvp | minigames | creative\n\
default_mode = all\n\
#\n\
# JSON catalog file (array of servers or {\"servers\": [...]}); empty uses built-in samples\n\
catalog_path =\n\
#\n\
# How long notifications stay on screen (seconds)\n\
toast_duration_secs = 2\n\
#\n\
# UI language (e.g. en-US, ru-RU); empty follows the system locale\n\
locale =\n\
#\n\
# Show the keybinds footer\n\
show_keybinds_footer = true\n\
#\n\
# Width of the details pane in percent (20-70)\n\
details_pane_pct = 40\n";

/// Skeleton `theme.conf` listing every overridable color (Catppuccin Mocha).
pub const THEME_SKELETON_CONTENT: &str = "# craftlist theme configuration\n\
#\n\
# Format: key = value\n\
# Value formats supported:\n\
#   - #RRGGBB (hex)\n\
#   - R,G,B (decimal, 0-255 each)\n\
# Missing keys keep their default color.\n\
#\n\
base = #1e1e2e\n\
mantle = #181825\n\
crust = #11111b\n\
surface1 = #45475a\n\
surface2 = #585b70\n\
overlay1 = #7f849c\n\
overlay2 = #9399b2\n\
text = #cdd6f4\n\
subtext0 = #a6adc8\n\
subtext1 = #bac2de\n\
sapphire = #74c7ec\n\
mauve = #cba6f7\n\
green = #a6e3a1\n\
yellow = #f9e2af\n\
red = #f38ba8\n\
lavender = #b4befe\n";
