//! BibTeX parser for the citation-entry subset used by the bibliography.
//!
//! Handles concrete entries (`@article{key, field = {value}, ...}`) with
//! braced, quoted, or bare field values, nested braces inside values, and
//! `@comment` blocks. Text between entries is treated as commentary, as
//! BibTeX does. String macros and `#` concatenation are not supported.

use crate::bibliography::CitationEntry;
use crate::error::{BibError, BibResult};
use std::collections::HashSet;

pub(crate) fn parse_entries(src: &str) -> BibResult<Vec<CitationEntry>> {
    let mut parser = Parser::new(src);
    let entries = parser.run()?;

    let mut seen = HashSet::new();
    for entry in &entries {
        if !seen.insert(entry.key()) {
            return Err(BibError::DuplicateKey {
                key: entry.key().to_string(),
            });
        }
    }
    Ok(entries)
}

struct Parser<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            chars: src.chars().peekable(),
            line: 1,
        }
    }

    fn run(&mut self) -> BibResult<Vec<CitationEntry>> {
        let mut entries = Vec::new();
        while let Some(c) = self.bump() {
            if c == '@'
                && let Some(entry) = self.entry()?
            {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line += 1;
        }
        c
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn error(&self, message: impl Into<String>) -> BibError {
        BibError::Parse {
            line: self.line,
            message: message.into(),
        }
    }

    fn expect(&mut self, wanted: char) -> BibResult<()> {
        self.skip_ws();
        match self.bump() {
            Some(c) if c == wanted => Ok(()),
            Some(c) => Err(self.error(format!("expected '{wanted}', found '{c}'"))),
            None => Err(self.error(format!("expected '{wanted}', found end of input"))),
        }
    }

    fn identifier(&mut self, what: &str) -> BibResult<String> {
        self.skip_ws();
        let mut ident = String::new();
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            ident.push(self.bump().unwrap_or_default());
        }
        if ident.is_empty() {
            return Err(self.error(format!("missing {what}")));
        }
        Ok(ident)
    }

    /// Parse one entry; the leading `@` has already been consumed.
    /// Returns `None` for `@comment` blocks.
    fn entry(&mut self) -> BibResult<Option<CitationEntry>> {
        let entry_type = self.identifier("entry type")?.to_ascii_lowercase();
        self.expect('{')?;
        if entry_type == "comment" {
            self.skip_braced()?;
            return Ok(None);
        }

        let key = self.citation_key()?;
        let mut fields: Vec<(String, String)> = Vec::new();
        loop {
            self.skip_ws();
            match self.peek() {
                Some('}') => {
                    self.bump();
                    break;
                }
                Some(',') => {
                    self.bump();
                }
                Some(_) => {
                    let (name, value) = self.field()?;
                    // a repeated field name overwrites, matching dict semantics
                    if let Some(existing) = fields.iter_mut().find(|(n, _)| *n == name) {
                        existing.1 = value;
                    } else {
                        fields.push((name, value));
                    }
                }
                None => return Err(self.error(format!("unterminated entry '{key}'"))),
            }
        }
        Ok(Some(CitationEntry::new(key, entry_type, fields)))
    }

    fn citation_key(&mut self) -> BibResult<String> {
        self.skip_ws();
        let mut key = String::new();
        while self
            .peek()
            .is_some_and(|c| c != ',' && c != '}' && !c.is_whitespace())
        {
            key.push(self.bump().unwrap_or_default());
        }
        if key.is_empty() {
            return Err(self.error("missing citation key"));
        }
        Ok(key)
    }

    fn field(&mut self) -> BibResult<(String, String)> {
        let name = self.identifier("field name")?.to_ascii_lowercase();
        self.expect('=')?;
        self.skip_ws();
        let value = match self.peek() {
            Some('{') => self.braced_value()?,
            Some('"') => self.quoted_value()?,
            Some(_) => self.bare_value(),
            None => return Err(self.error(format!("missing value for field '{name}'"))),
        };
        Ok((name, value))
    }

    /// Skip a balanced `{...}` block whose opening brace is already consumed.
    fn skip_braced(&mut self) -> BibResult<()> {
        let mut depth = 1usize;
        while depth > 0 {
            match self.bump() {
                Some('{') => depth += 1,
                Some('}') => depth -= 1,
                Some(_) => {}
                None => return Err(self.error("unterminated block")),
            }
        }
        Ok(())
    }

    fn braced_value(&mut self) -> BibResult<String> {
        self.bump(); // opening brace
        let mut depth = 1usize;
        let mut value = String::new();
        loop {
            match self.bump() {
                Some('{') => {
                    depth += 1;
                    value.push('{');
                }
                Some('}') => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                    value.push('}');
                }
                Some(c) => value.push(c),
                None => return Err(self.error("unterminated braced value")),
            }
        }
        Ok(normalize(&value))
    }

    fn quoted_value(&mut self) -> BibResult<String> {
        self.bump(); // opening quote
        let mut value = String::new();
        loop {
            match self.bump() {
                Some('"') => break,
                Some(c) => value.push(c),
                None => return Err(self.error("unterminated quoted value")),
            }
        }
        Ok(normalize(&value))
    }

    fn bare_value(&mut self) -> String {
        let mut value = String::new();
        while self.peek().is_some_and(|c| c != ',' && c != '}') {
            value.push(self.bump().unwrap_or_default());
        }
        normalize(&value)
    }
}

/// Collapse whitespace runs (values may span lines in the source file).
fn normalize(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
