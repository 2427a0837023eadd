//! Inline Markdown-lite Renderer
//!
//! Splits a task description into typed display segments:
//! - Bold: **text**
//! - Italic: _text_
//! - Underline: <u>text</u>
//! - Link: [label](href)
//! - Blockquote: line starting with "> "
//! - List item: line starting with "- "
//!
//! One flat pass over one combined pattern; matched spans are unwrapped,
//! everything between them stays plain text verbatim. Deliberately
//! non-recursive: a bold span's content is not re-scanned for italics.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static INLINE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// The combined alternation, tried leftmost-first at each position.
/// `(?m)` makes `^` match after every newline, which is what scopes the
/// blockquote and list markers to line starts.
fn inline_pattern() -> &'static Regex {
    INLINE_PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r"(?m)",
            r"\*\*(?P<bold>.+?)\*\*",
            r"|<u>(?P<underline>.+?)</u>",
            r"|_(?P<italic>.+?)_",
            r"|\[(?P<label>[^\[\]]*)\]\((?P<href>[^()]*)\)",
            r"|^> (?P<quote>.*)",
            r"|^- (?P<item>.*)",
        ))
        .expect("inline pattern is valid")
    })
}

/// One classified unit of renderer output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Plain { text: String },
    Bold { text: String },
    Italic { text: String },
    Underline { text: String },
    Link { label: String, href: String },
    Blockquote { text: String },
    ListItem { text: String },
}

impl Segment {
    /// The unwrapped display text (the label, for links)
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { text }
            | Segment::Bold { text }
            | Segment::Italic { text }
            | Segment::Underline { text }
            | Segment::Blockquote { text }
            | Segment::ListItem { text } => text,
            Segment::Link { label, .. } => label,
        }
    }

    /// The segment re-wrapped in its source delimiters.
    ///
    /// Concatenating `source()` over a render pass reconstructs the input
    /// exactly.
    pub fn source(&self) -> String {
        match self {
            Segment::Plain { text } => text.clone(),
            Segment::Bold { text } => format!("**{}**", text),
            Segment::Italic { text } => format!("_{}_", text),
            Segment::Underline { text } => format!("<u>{}</u>", text),
            Segment::Link { label, href } => format!("[{}]({})", label, href),
            Segment::Blockquote { text } => format!("> {}", text),
            Segment::ListItem { text } => format!("- {}", text),
        }
    }
}

/// Render a description string into display segments.
///
/// Pure and deterministic; never fails. Text that only resembles a
/// delimited form (an unterminated `**`, a bare `[label]`) stays plain.
pub fn render_inline(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in inline_pattern().captures_iter(input) {
        let matched = caps.get(0).expect("group 0 always present");
        if matched.start() > last {
            segments.push(Segment::Plain {
                text: input[last..matched.start()].to_string(),
            });
        }
        segments.push(classify(&caps));
        last = matched.end();
    }

    if last < input.len() || segments.is_empty() {
        segments.push(Segment::Plain {
            text: input[last..].to_string(),
        });
    }

    segments
}

fn classify(caps: &regex::Captures<'_>) -> Segment {
    if let Some(m) = caps.name("bold") {
        Segment::Bold {
            text: m.as_str().to_string(),
        }
    } else if let Some(m) = caps.name("underline") {
        Segment::Underline {
            text: m.as_str().to_string(),
        }
    } else if let Some(m) = caps.name("italic") {
        Segment::Italic {
            text: m.as_str().to_string(),
        }
    } else if let Some(label) = caps.name("label") {
        Segment::Link {
            label: label.as_str().to_string(),
            href: caps
                .name("href")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        }
    } else if let Some(m) = caps.name("quote") {
        Segment::Blockquote {
            text: m.as_str().to_string(),
        }
    } else if let Some(m) = caps.name("item") {
        Segment::ListItem {
            text: m.as_str().to_string(),
        }
    } else {
        // Unreachable: every alternation branch has a named group
        Segment::Plain {
            text: caps.get(0).map(|m| m.as_str()).unwrap_or("").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Segment {
        Segment::Plain {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_plain_only() {
        let segments = render_inline("Just a sentence.");
        assert_eq!(segments, vec![plain("Just a sentence.")]);
    }

    #[test]
    fn test_empty_input_is_one_plain_segment() {
        assert_eq!(render_inline(""), vec![plain("")]);
    }

    #[test]
    fn test_mixed_inline_forms() {
        let input = "Hello **world** and _friends_, see [here](http://x)";
        let segments = render_inline(input);
        assert_eq!(
            segments,
            vec![
                plain("Hello "),
                Segment::Bold {
                    text: "world".to_string()
                },
                plain(" and "),
                Segment::Italic {
                    text: "friends".to_string()
                },
                plain(", see "),
                Segment::Link {
                    label: "here".to_string(),
                    href: "http://x".to_string()
                },
            ]
        );

        let rebuilt: String = segments.iter().map(|s| s.source()).collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_underline() {
        let segments = render_inline("a <u>b</u> c");
        assert_eq!(
            segments,
            vec![
                plain("a "),
                Segment::Underline {
                    text: "b".to_string()
                },
                plain(" c"),
            ]
        );
    }

    #[test]
    fn test_blockquote_at_line_start() {
        let segments = render_inline("> quoted");
        assert_eq!(
            segments,
            vec![Segment::Blockquote {
                text: "quoted".to_string()
            }]
        );
    }

    #[test]
    fn test_list_items_mid_string() {
        let input = "Steps:\n- one\n- two";
        let segments = render_inline(input);
        assert_eq!(
            segments,
            vec![
                plain("Steps:\n"),
                Segment::ListItem {
                    text: "one".to_string()
                },
                plain("\n"),
                Segment::ListItem {
                    text: "two".to_string()
                },
            ]
        );

        let rebuilt: String = segments.iter().map(|s| s.source()).collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_dash_mid_line_stays_plain() {
        let segments = render_inline("a - b");
        assert_eq!(segments, vec![plain("a - b")]);
    }

    #[test]
    fn test_unterminated_bold_stays_plain() {
        let segments = render_inline("broken **bold");
        assert_eq!(segments, vec![plain("broken **bold")]);
    }

    #[test]
    fn test_no_nesting_single_layer() {
        // The bold span's content is emitted as-is, not re-scanned
        let segments = render_inline("**a _b_ c**");
        assert_eq!(
            segments,
            vec![Segment::Bold {
                text: "a _b_ c".to_string()
            }]
        );
    }

    #[test]
    fn test_deterministic() {
        let input = "mix **b** _i_ <u>u</u>\n> q\n- l";
        assert_eq!(render_inline(input), render_inline(input));
    }

    #[test]
    fn test_round_trip_rewrap() {
        let input = "intro **b** mid _i_ [l](h)\n> quote line\n- item one\ntail";
        let rebuilt: String = render_inline(input).iter().map(|s| s.source()).collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_link_text_accessor() {
        let segments = render_inline("[docs](https://example.com)");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text(), "docs");
    }
}
