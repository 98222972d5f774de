//! Content normalization: approximate logical statement boundaries with
//! line breaks so that line-number attribution stays meaningful for dense,
//! whitespace-stripped input.
//!
//! Two strategies, chosen by content length. Within the threshold, a
//! structural reformatter walks the content tracking string literals and
//! brace depth, inserting breaks and indentation at statement boundaries.
//! Above it, a fast heuristic inserts a break after every `;` and `,`.
//! Both are content-safe: only whitespace is ever inserted or rewritten,
//! non-whitespace text is never dropped or reordered, and malformed input
//! never raises.

use std::borrow::Cow;

/// Content longer than this skips the structural reformatter.
pub const MAX_REFORMAT_LEN: usize = 1_000_000;

/// Normalize content for line-oriented matching.
///
/// The threshold counts characters, not bytes; the byte length bounds the
/// character count from above, so the O(n) count only runs on content
/// whose byte length already exceeds the threshold.
pub fn normalize(content: &str, max_reformat_len: usize) -> Cow<'_, str> {
    if content.len() > max_reformat_len && content.chars().count() > max_reformat_len {
        Cow::Owned(content.replace(';', ";\r\n").replace(',', ",\r\n"))
    } else {
        Cow::Owned(reformat(content))
    }
}

const INDENT: &str = "  ";

/// Structural reformatter for code-like content.
///
/// Breaks after `{`, `;` and `,`, and around `}`, with indentation tracking
/// the brace depth. Quoted regions (single, double, backtick, with
/// backslash escapes) pass through untouched. Best effort only: a `;`
/// inside a comment still breaks the line, which costs nothing but
/// an extra line number.
fn reformat(content: &str) -> String {
    let mut out = String::with_capacity(content.len() + content.len() / 8);
    let mut depth: usize = 0;
    let mut delim: Option<char> = None;
    let mut escaped = false;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if let Some(d) = delim {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == d || c == '\n' {
                // An unterminated literal ends at the line break.
                delim = None;
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => {
                delim = Some(c);
                out.push(c);
            }
            '{' => {
                out.push(c);
                depth += 1;
                break_line(&mut out, depth, chars.peek());
            }
            '}' => {
                depth = depth.saturating_sub(1);
                // A pure-indent tail gets rewritten one level out.
                let unindented = out.trim_end_matches(' ').len();
                if out[..unindented].ends_with('\n') {
                    out.truncate(unindented);
                    push_indent(&mut out, depth);
                } else if !out.is_empty() {
                    out.push('\n');
                    push_indent(&mut out, depth);
                }
                out.push(c);
                // `};` and `},` stay on one line; the break follows them.
                match chars.peek() {
                    Some(';') | Some(',') => {}
                    next => break_line(&mut out, depth, next),
                }
            }
            ';' | ',' => {
                out.push(c);
                break_line(&mut out, depth, chars.peek());
            }
            '\n' => {
                out.push('\n');
                if chars.peek().is_some() {
                    push_indent(&mut out, depth);
                }
            }
            _ => out.push(c),
        }
    }
    out
}

fn break_line(out: &mut String, depth: usize, next: Option<&char>) {
    // Avoid doubling up when the source already breaks here.
    if matches!(next, Some('\n') | Some('\r')) || next.is_none() {
        return;
    }
    out.push('\n');
    push_indent(out, depth);
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
