//! Rewrites GitHub/Obsidian style callouts into Pandoc fenced divs.
//!
//! ```text
//! > [!NOTE] **My Title**        ::: {.callout .callout-note}
//! > line one             =>     **My Title**
//! > line two
//!                               line one
//!                               line two
//!                               :::
//! ```
//!
//! The scan is a two-state machine. [`step`] computes one transition and the
//! driver in [`rewrite_admonitions`] decides whether to advance to the next
//! line. A callout is closed by the first line that is not a quote
//! continuation, and that same line is then classified again so it can open
//! the next callout.

use super::lines::split_lines;
use regex::Regex;
use std::sync::OnceLock;

/// Delimiter for Pandoc fenced divs.
pub const CONTAINER_FENCE: &str = ":::";

/// Class shared by every emitted callout container.
pub const CALLOUT_CLASS: &str = "callout";

fn start_pattern() -> &'static Regex {
    static START: OnceLock<Regex> = OnceLock::new();
    START.get_or_init(|| {
        Regex::new(r"^\s*>\s*\[!(\w+)\](\+|-)?\s*(?:\*\*([^\n]*)\*\*)?.*$")
            .expect("Invalid callout start regex")
    })
}

fn continuation_pattern() -> &'static Regex {
    static CONTINUATION: OnceLock<Regex> = OnceLock::new();
    CONTINUATION
        .get_or_init(|| Regex::new(r"^\s*>\s?(.*)$").expect("Invalid quote continuation regex"))
}

/// A callout being collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callout {
    /// Lowercased tag, e.g. `note`. Not checked against a known list.
    pub kind: String,
    pub title: String,
    pub body: Vec<String>,
}

impl Callout {
    /// Opens a callout if `line` is a start line like `> [!TIP]- **Title**`.
    ///
    /// The fold modifier and anything after the bold title are dropped.
    pub fn parse_start(line: &str) -> Option<Self> {
        let caps = start_pattern().captures(line)?;
        let kind = caps[1].to_lowercase();
        let title = caps
            .get(3)
            .map(|m| m.as_str())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| capitalize(&kind));
        log::debug!("Callout found: {kind}");

        Some(Self {
            kind,
            title,
            body: Vec::new(),
        })
    }

    /// Returns the content of a quote continuation line, after `>` and at
    /// most one whitespace character.
    pub fn continuation(line: &str) -> Option<&str> {
        continuation_pattern()
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Appends the fenced div for this callout to `out`.
    pub fn render_into(self, out: &mut Vec<String>) {
        out.push(format!(
            "{CONTAINER_FENCE} {{.{CALLOUT_CLASS} .{CALLOUT_CLASS}-{}}}",
            self.kind
        ));
        out.push(format!("**{}**", self.title));
        out.push(String::new());
        out.extend(self.body);
        out.push(CONTAINER_FENCE.to_string());
    }
}

fn is_start(line: &str) -> bool {
    start_pattern().is_match(line)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    Scanning,
    InCallout(Callout),
}

/// Outcome of feeding one line to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The line was absorbed. Continue with the next line in this state.
    Next(ScanState),
    /// The line is copied to the output as is. The state stays `Scanning`.
    PassThrough,
    /// The open callout ended. Emit it, return to `Scanning`, and feed the
    /// same line again.
    Finish(Callout),
}

/// Computes the transition for `line` in `state`.
pub fn step(state: ScanState, line: &str) -> Step {
    match state {
        ScanState::Scanning => match Callout::parse_start(line) {
            Some(callout) => Step::Next(ScanState::InCallout(callout)),
            None => Step::PassThrough,
        },
        ScanState::InCallout(mut callout) => {
            // A start line would also match as a continuation.
            if is_start(line) {
                return Step::Finish(callout);
            }
            match Callout::continuation(line) {
                Some(content) => {
                    callout.body.push(content.to_string());
                    Step::Next(ScanState::InCallout(callout))
                }
                None => Step::Finish(callout),
            }
        }
    }
}

/// Replaces every callout in `text` with a Pandoc fenced div.
///
/// Never fails. Lines outside callouts are copied unchanged and the result
/// is joined with `\n`.
pub fn rewrite_admonitions(text: &str) -> String {
    let mut out = Vec::new();
    let mut state = ScanState::Scanning;
    let mut lines = split_lines(text).into_iter().peekable();

    while let Some(&line) = lines.peek() {
        match step(state, line) {
            Step::Next(next) => {
                state = next;
                lines.next();
            }
            Step::PassThrough => {
                out.push(line.to_string());
                state = ScanState::Scanning;
                lines.next();
            }
            Step::Finish(callout) => {
                callout.render_into(&mut out);
                state = ScanState::Scanning;
            }
        }
    }

    if let ScanState::InCallout(callout) = state {
        callout.render_into(&mut out);
    }

    out.join("\n")
}
