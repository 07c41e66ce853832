//! Typed command parsing.

use lifepager_core::{Intent, Page};

pub const HELP: &str = "commands: [enter]/n next | g <page> go to | d <item> details | \
b back | y confirm reset | c cancel | w <cols> resize | h help | q quit";

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Resize(u16),
    Help,
    Quit,
}

/// Parses `line` in the context of the page currently shown.
///
/// A blank line acts like tapping the page's primary control.
pub fn parse_command(line: &str, page: Page<'_>) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let head = parts.next().unwrap_or("n");
    let arg = parts.next();

    let command = match (head, arg) {
        ("n" | "next", None) => Command::Intent(next_intent(page)),
        ("g" | "go", Some(index)) => Command::Intent(Intent::SwipeTo(index.parse().ok()?)),
        ("d" | "detail", Some(item)) => match page {
            Page::Timeline { index, .. } => Command::Intent(Intent::OpenDetail {
                timeline_index: index,
                item_index: item.parse().ok()?,
            }),
            _ => return None,
        },
        ("b" | "back", None) => Command::Intent(Intent::CloseDetail),
        ("y" | "reset", None) => Command::Intent(Intent::ConfirmReset),
        ("c" | "cancel", None) => Command::Intent(Intent::CancelReset),
        ("w" | "width", Some(columns)) => Command::Resize(columns.parse().ok()?),
        ("h" | "help", None) => Command::Help,
        ("q" | "quit", None) => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn next_intent(page: Page<'_>) -> Intent {
    match page {
        Page::Title { .. } => Intent::TapTitle,
        Page::Profile { .. } | Page::Timeline { .. } => Intent::TapChevron,
        Page::End { .. } => Intent::TapEnd,
    }
}
