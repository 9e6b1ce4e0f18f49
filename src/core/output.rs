//! User-facing console output: status badges and the subprocess line sink.
//!
//! Build steps report through `info`/`warn`/`error`; subprocess output flows
//! through [`ConsoleSink`], which prefixes each line with the producing tool's
//! name in a per-tool color.

use crate::colors;
use crate::executor::{LineSink, StreamKind, TaggedLine};

/// Known toolchain programs and their output colors (truecolor, ANSI fallback).
const TOOL_COLORS: &[(&str, u32, &str)] = &[
    ("emcmake", 0x27a5cf, colors::ANSI_CYAN),
    ("emmake", 0x16b844, colors::ANSI_GREEN),
    ("npm", 0xc40d6f, colors::ANSI_RED),
];

const DEFAULT_TOOL_COLOR: (u32, &str) = (0x9738c7, colors::ANSI_PURPLE);
const STDERR_COLOR: (u32, &str) = (0xa0a0a0, colors::ANSI_WHITE);

pub fn info(message: &str) {
    badge_line(&colors::info_badge(), "   INFO   ", message);
}

pub fn warn(message: &str) {
    badge_line(&colors::warn_badge(), "   WARN   ", message);
}

pub fn error(message: &str) {
    badge_line(&colors::error_badge(), "   ERROR   ", message);
}

fn badge_line(style: &str, badge: &str, message: &str) {
    println!("{}{}{}\t{}", style, badge, colors::reset(), message);
}

/// Line sink that prints tagged subprocess output to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl LineSink for ConsoleSink {
    fn emit(&mut self, line: &TaggedLine) {
        let (rgb, ansi) = match line.kind {
            StreamKind::Stdout => stdout_color(&line.producer),
            StreamKind::Stderr => STDERR_COLOR,
        };
        let color = colors::pick(colors::foreground(rgb), ansi);

        // Short tool names get an extra tab so line content stays aligned.
        let tabs = if line.producer.len() <= 5 { "\t\t" } else { "\t" };
        println!(
            "{}({}){}{}{}",
            color,
            line.producer,
            tabs,
            colors::reset(),
            line.content
        );
    }
}

fn stdout_color(producer: &str) -> (u32, &'static str) {
    TOOL_COLORS
        .iter()
        .find(|(name, _, _)| *name == producer)
        .map(|(_, rgb, ansi)| (*rgb, *ansi))
        .unwrap_or(DEFAULT_TOOL_COLOR)
}
