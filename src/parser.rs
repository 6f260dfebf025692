//! DocBlock recognition — line-by-line state machine.
//!
//! Three states: outside any block, inside a block accumulating content, and
//! waiting for the declaration line that names the documented entity. The
//! machine owns exactly one [`DocBlock`] at a time; a fresh block marker
//! resets it wholesale.

use crate::model::{DocBlock, Param};

/// Two-character sigil that opens and closes a block. A line that both
/// starts and ends with it is a single-line block.
pub const MARKER: &str = "#/";

/// Keyword expected on the declaration line following a closed block.
const DECLARATION_KEYWORD: &str = "function";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    InsideBlock,
    AwaitDeclaration,
}

/// Which entry receives continuation-line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Accumulator {
    None,
    Param(usize),
    Property(usize),
}

/// A finished block together with its resolved declaration name. The name is
/// empty when the line after the block is not a recognized declaration.
#[derive(Debug)]
pub struct CompletedBlock {
    pub block: DocBlock,
    pub name: String,
}

/// Consumes normalized lines one at a time and yields a [`CompletedBlock`]
/// whenever a block's declaration line has been seen.
///
/// A block left open (or undeclared) at end of input is never yielded; the
/// caller simply stops feeding lines and the partial block is dropped.
#[derive(Debug)]
pub struct BlockMachine {
    state: State,
    block: DocBlock,
    accumulator: Accumulator,
}

impl BlockMachine {
    pub fn new() -> Self {
        BlockMachine {
            state: State::Outside,
            block: DocBlock::default(),
            accumulator: Accumulator::None,
        }
    }

    /// Feed one normalized line.
    pub fn feed(&mut self, line: &str) -> Option<CompletedBlock> {
        match self.state {
            State::Outside => {
                if line.starts_with(MARKER) {
                    self.open_block(line);
                }
                None
            }
            State::InsideBlock => {
                if line == MARKER {
                    self.state = State::AwaitDeclaration;
                } else {
                    let text = strip_line_prefix(line);
                    self.consume(&text);
                }
                None
            }
            State::AwaitDeclaration => {
                if line.is_empty() {
                    return None;
                }
                self.state = State::Outside;
                let done = CompletedBlock {
                    block: std::mem::take(&mut self.block),
                    name: declared_name(line),
                };
                // A marker here fails the keyword test above, but it still
                // opens the next block: a new marker always resets.
                if line.starts_with(MARKER) {
                    self.open_block(line);
                }
                Some(done)
            }
        }
    }

    /// A marker line seen outside a block: reset and enter the block, or for
    /// single-line blocks consume the stripped text and skip straight to the
    /// declaration wait.
    fn open_block(&mut self, line: &str) {
        self.block = DocBlock::default();
        self.accumulator = Accumulator::None;
        if line.len() > MARKER.len() * 2 && line.ends_with(MARKER) {
            let text = line[MARKER.len()..line.len() - MARKER.len()].trim().to_string();
            self.consume(&text);
            self.state = State::AwaitDeclaration;
        } else {
            self.state = State::InsideBlock;
        }
    }

    /// One content line, comment prefix already stripped.
    fn consume(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        if let Some(rest) = text.strip_prefix('@') {
            let (name, value) = match rest.split_once(' ') {
                Some((name, value)) => (name, value),
                None => (rest, ""),
            };
            if name == "param" {
                let idx = self.block.upsert_param(parse_param(value));
                self.accumulator = Accumulator::Param(idx);
            } else {
                let idx = self.block.upsert_property(name, value);
                self.accumulator = Accumulator::Property(idx);
            }
            return;
        }

        match self.accumulator {
            Accumulator::Param(idx) => concat_str(&mut self.block.params[idx].description, text),
            Accumulator::Property(idx) => concat_str(&mut self.block.properties[idx].1, text),
            Accumulator::None => {
                if self.block.summary.is_empty() {
                    self.block.summary = text.to_string();
                } else {
                    self.block.description.push(text.to_string());
                }
            }
        }
    }
}

impl Default for BlockMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip the per-line comment prefix inside a block: `# text` → `text`.
fn strip_line_prefix(line: &str) -> String {
    match line.strip_prefix('#') {
        Some(rest) => rest.trim_start().to_string(),
        None => line.to_string(),
    }
}

/// Split an `@param` value into its two input shapes.
///
/// `int $1 desc` → typed; `$1 desc` → positional reference with type `any`.
/// Missing tokens default to empty strings.
fn parse_param(value: &str) -> Param {
    let (first, rest) = match value.split_once(' ') {
        Some((first, rest)) => (first, rest),
        None => (value, ""),
    };

    if first.starts_with('$') {
        return Param {
            type_name: "any".to_string(),
            name: first.to_string(),
            description: rest.to_string(),
        };
    }

    let (name, description) = match rest.split_once(' ') {
        Some((name, description)) => (name, description),
        None => (rest, ""),
    };
    Param {
        type_name: first.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// Resolve the declared name from the line following a block:
/// `function name(...)` → `name`; anything else → empty.
fn declared_name(line: &str) -> String {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some(DECLARATION_KEYWORD) {
        return String::new();
    }
    tokens
        .next()
        .and_then(|t| t.split('(').next())
        .unwrap_or_default()
        .to_string()
}

/// Append continuation text to an accumulator, space-joined.
fn concat_str(dest: &mut String, text: &str) {
    if dest.is_empty() {
        *dest = text.to_string();
    } else {
        dest.push(' ');
        dest.push_str(text);
    }
}
