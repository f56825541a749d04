//! Line-based parser for the Bruno dictionary-block grammar subset.
//!
//! Grammar accepted here, and nothing more:
//!
//! ```text
//! name {
//!   key: value
//! }
//! ```
//!
//! Block names are single tokens (`meta`, `get`, `params:path`, `vars`),
//! entries split on the first colon, and blocks are separated by blank
//! lines. Multi-line values, array blocks, and nested blocks are outside
//! the subset and reported as parse issues.

use std::fmt;

use crate::bru::block::Block;

/// A parse failure with the 1-based line it occurred on.
#[derive(Debug)]
pub(crate) struct ParseIssue {
    pub line: usize,
    pub message: String,
}

impl ParseIssue {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

enum State {
    TopLevel,
    InBlock(Block),
}

/// Parse a document body into its ordered sequence of dictionary blocks.
pub(crate) fn parse_blocks(text: &str) -> Result<Vec<Block>, ParseIssue> {
    let mut blocks = Vec::new();
    let mut state = State::TopLevel;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        state = match state {
            State::TopLevel => {
                if line.is_empty() {
                    State::TopLevel
                } else {
                    let Some(header) = line.strip_suffix('{') else {
                        return Err(ParseIssue::new(
                            line_no,
                            format!("expected block header, found '{line}'"),
                        ));
                    };
                    let name = header.trim();
                    if name.is_empty() || name.contains(char::is_whitespace) {
                        return Err(ParseIssue::new(line_no, format!("invalid block name '{name}'")));
                    }
                    State::InBlock(Block::new(name))
                }
            }
            State::InBlock(mut block) => {
                if line == "}" {
                    blocks.push(block);
                    State::TopLevel
                } else if line.is_empty() {
                    State::InBlock(block)
                } else {
                    let Some((key, value)) = line.split_once(':') else {
                        return Err(ParseIssue::new(
                            line_no,
                            format!("expected 'key: value', found '{line}'"),
                        ));
                    };
                    let key = key.trim();
                    if key.is_empty() {
                        return Err(ParseIssue::new(line_no, "entry key must not be empty"));
                    }
                    if !block.push(key, value.trim()) {
                        return Err(ParseIssue::new(
                            line_no,
                            format!("duplicate key '{key}' in block '{}'", block.name()),
                        ));
                    }
                    State::InBlock(block)
                }
            }
        };
    }

    if let State::InBlock(open) = state {
        return Err(ParseIssue::new(
            text.lines().count(),
            format!("unterminated block '{}'", open.name()),
        ));
    }

    Ok(blocks)
}
