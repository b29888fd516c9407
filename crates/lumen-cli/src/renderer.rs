//! Terminal rendering of markdown output.
//!
//! Rich mode styles markdown with termimad; plain mode prints the markdown
//! as is, which keeps output stable for scripts and tests.

use std::fmt::Display;

use termimad::{crossterm::style::Color, MadSkin};

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.quote_mark.set_fg(Color::Red);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Prints anything whose `Display` output is markdown.
    pub fn render(&self, content: impl Display) {
        let markdown = content.to_string();
        if !self.rich_enabled {
            print!("{markdown}");
            return;
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                // Keep the hashes visible so heading depth stays readable
                println!("\x1b[36m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
