//! ANSI color helpers for terminal output.
//!
//! Supports 24-bit RGB escapes when the terminal advertises truecolor
//! (`COLORTERM=truecolor`), with plain ANSI theme colors as the fallback.
//! All escapes collapse to empty strings when stdout is not a terminal.

use std::env;
use std::io::IsTerminal;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

// Theme-respecting ANSI colors.
pub const ANSI_RED: &str = "\x1b[31m";
pub const ANSI_GREEN: &str = "\x1b[32m";
pub const ANSI_CYAN: &str = "\x1b[36m";
pub const ANSI_PURPLE: &str = "\x1b[35m";
pub const ANSI_WHITE: &str = "\x1b[37m";

pub const ANSI_BG_RED: &str = "\x1b[101m";
pub const ANSI_BG_YELLOW: &str = "\x1b[103m";
pub const ANSI_BG_BLUE: &str = "\x1b[104m";

/// Split a `0xRRGGBB` hex code into its channel values.
pub fn hex_to_rgb(hex: u32) -> (u8, u8, u8) {
    let r = ((hex >> 16) & 0xff) as u8;
    let g = ((hex >> 8) & 0xff) as u8;
    let b = (hex & 0xff) as u8;
    (r, g, b)
}

/// Escape sequence setting the text color to an RGB value.
pub fn foreground(hex: u32) -> String {
    let (r, g, b) = hex_to_rgb(hex);
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Escape sequence setting the background color to an RGB value.
pub fn background(hex: u32) -> String {
    let (r, g, b) = hex_to_rgb(hex);
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}

fn truecolor_supported() -> bool {
    env::var("COLORTERM").is_ok_and(|v| v == "truecolor")
}

fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Pick a truecolor escape when supported, otherwise the ANSI fallback.
/// Returns an empty string when stdout is not a terminal.
pub fn pick(rgb: String, ansi: &str) -> String {
    if !stdout_is_terminal() {
        return String::new();
    }
    if truecolor_supported() {
        rgb
    } else {
        ansi.to_string()
    }
}

/// `RESET` when stdout is a terminal, empty otherwise.
pub fn reset() -> &'static str {
    if stdout_is_terminal() {
        RESET
    } else {
        ""
    }
}

/// Badge styles for info/warn/error message prefixes.
pub fn info_badge() -> String {
    pick(format!("{}{}", background(0x7d9fe8), BOLD), ANSI_BG_BLUE)
}

pub fn warn_badge() -> String {
    pick(format!("{}{}", background(0xfded02), BOLD), ANSI_BG_YELLOW)
}

pub fn error_badge() -> String {
    pick(format!("{}{}", background(0xff6767), BOLD), ANSI_BG_RED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_rgb_splits_channels() {
        assert_eq!(hex_to_rgb(0xaabbcc), (0xaa, 0xbb, 0xcc));
        assert_eq!(hex_to_rgb(0x000000), (0, 0, 0));
        assert_eq!(hex_to_rgb(0xffffff), (0xff, 0xff, 0xff));
    }

    #[test]
    fn foreground_formats_sgr_sequence() {
        assert_eq!(foreground(0x27a5cf), "\x1b[38;2;39;165;207m");
    }

    #[test]
    fn background_formats_sgr_sequence() {
        assert_eq!(background(0xff6767), "\x1b[48;2;255;103;103m");
    }
}
