//! ANSI color codes for terminal output
//! Bright variants (90-97) so they stand out on both dark and light themes

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[91m";
pub const BLUE: &str = "\x1b[94m";
pub const GREY: &str = "\x1b[90m";
pub const CYAN: &str = "\x1b[96m";
pub const BLACK: &str = "\x1b[90m"; // Same as grey: true black is invisible on dark terminals
pub const GREEN: &str = "\x1b[92m";
pub const WHITE: &str = "\x1b[97m";
pub const YELLOW: &str = "\x1b[93m";
pub const MAGENTA: &str = "\x1b[95m";

/// Name of the reset entry appended after every colorized string
pub const DEFAULT: &str = "default";

/// Built-in palette in listing order
pub const BUILTIN_PALETTE: [(&str, &str); 10] = [
    (DEFAULT, RESET),
    ("red", RED),
    ("blue", BLUE),
    ("grey", GREY),
    ("cyan", CYAN),
    ("black", BLACK),
    ("green", GREEN),
    ("white", WHITE),
    ("yellow", YELLOW),
    ("magenta", MAGENTA),
];
