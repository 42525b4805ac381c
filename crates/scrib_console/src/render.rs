//! Terminal rendering of a highlighted document.

use std::fmt::Write as _;

use scrib_highlight::{Block, Document, Span};
use scrib_theme::{ColorScheme, FontStyle, TextFormat};

const RESET: &str = "\x1b[0m";

/// Render every block with 24-bit ANSI colors, one line per block.
pub fn render_ansi(doc: &Document, scheme: &ColorScheme) -> String {
    let mut out = String::new();
    for block in doc.blocks() {
        paint_block(block, scheme, &mut out);
        out.push('\n');
    }
    out
}

fn paint_block(block: &Block, scheme: &ColorScheme, out: &mut String) {
    let text = block.text();
    let mut cursor = 0;
    for run in block.highlight().runs() {
        let plain = text.get(cursor..run.start);
        let styled = text.get(run.start..run.end());
        let (Some(plain), Some(styled)) = (plain, styled) else {
            continue;
        };
        out.push_str(plain);
        out.push_str(&escape(scheme.format(run.tag)));
        out.push_str(styled);
        out.push_str(RESET);
        cursor = run.end();
    }
    out.push_str(text.get(cursor..).unwrap_or_default());
}

/// SGR sequence selecting a format.
fn escape(format: TextFormat) -> String {
    let mut attrs = String::new();
    if format.font.contains(FontStyle::BOLD) {
        attrs.push_str("1;");
    }
    if format.font.contains(FontStyle::ITALIC) {
        attrs.push_str("3;");
    }
    let color = format.foreground;
    format!("\x1b[{attrs}38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Dump the final runs of every block, one block per line.
///
/// Blocks entered or left inside a triple-quoted string are marked with
/// `"""` on the matching side.
pub fn render_spans(doc: &Document) -> String {
    let mut out = String::new();
    for (index, block) in doc.blocks().iter().enumerate() {
        let entry = if block.entry().is_inside_string() { "\"\"\"" } else { "" };
        let exit = if block.exit().is_inside_string() { "\"\"\"" } else { "" };
        let runs: Vec<String> = block.highlight().runs().iter().map(describe).collect();
        let _ = writeln!(out, "{index}: {entry}[{}]{exit}", runs.join(", "));
    }
    out
}

fn describe(span: &Span) -> String {
    format!("{} {}..{}", span.tag, span.start, span.end())
}

#[cfg(test)]
mod tests;
