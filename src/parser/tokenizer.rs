//! Tokenizer for the bracketed notations
//!
//! Splits the input into `(`, `)`, opaque text runs and a final end marker.
//! Only the literal space character separates tokens. Classification of the
//! text runs (operator, variable, number) is left to the grammar.

use std::fmt;

use crate::error::{Context, Span};

/// A single token of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Open,
    Close,
    /// A maximal run of characters other than `(`, `)` and space
    Text(&'a str),
    /// Emitted once the input is exhausted, and on every call after that
    End,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Open => f.write_str("("),
            Token::Close => f.write_str(")"),
            Token::Text(text) => f.write_str(text),
            Token::End => f.write_str("end of input"),
        }
    }
}

/// Left-to-right token stream over a borrowed string
///
/// The tokenizer never fails. It remembers the most recently produced token
/// and where that token starts, so the parser can report the input consumed
/// before a failure.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
    current: Token<'a>,
    current_start: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned before the first token
    ///
    /// The current token is `End` until [`Tokenizer::next_token`] is called.
    pub fn new(source: &'a str) -> Self {
        Tokenizer {
            source,
            pos: 0,
            current: Token::End,
            current_start: 0,
        }
    }

    fn skip_spaces(&mut self) {
        let rest = &self.source.as_bytes()[self.pos..];
        self.pos += rest.iter().take_while(|&&b| b == b' ').count();
    }

    /// Advance to the next token and return it
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_spaces();
        self.current_start = self.pos;

        let bytes = self.source.as_bytes();
        self.current = match bytes.get(self.pos) {
            None => Token::End,
            Some(b'(') => {
                self.pos += 1;
                Token::Open
            }
            Some(b')') => {
                self.pos += 1;
                Token::Close
            }
            Some(_) => {
                // Delimiters are ASCII, so the run always ends on a char boundary
                let len = bytes[self.pos..]
                    .iter()
                    .take_while(|&&b| b != b'(' && b != b')' && b != b' ')
                    .count();
                let text = &self.source[self.pos..self.pos + len];
                self.pos += len;
                Token::Text(text)
            }
        };

        log::trace!("token {:?} at {}", self.current, self.current_start);
        self.current
    }

    /// The most recently produced token
    pub fn current(&self) -> Token<'a> {
        self.current
    }

    /// Input consumed before the current token
    pub fn prefix(&self) -> &'a str {
        &self.source[..self.current_start]
    }

    /// Input consumed so far, including the current token
    pub fn consumed(&self) -> &'a str {
        &self.source[..self.pos]
    }

    /// Byte range of the current token (empty for the end marker)
    pub fn span(&self) -> Span {
        Span::new(self.current_start, self.pos)
    }

    /// Failure context pointing at the current token
    pub(crate) fn context(&self) -> Context {
        Context::new(self.prefix(), self.span())
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    /// Yields tokens up to, but not including, the end marker
    fn next(&mut self) -> Option<Token<'a>> {
        match self.next_token() {
            Token::End => None,
            token => Some(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_brackets_and_runs() {
        let tokens: Vec<Token> = Tokenizer::new("(+ x  12.5)").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Open,
                Token::Text("+"),
                Token::Text("x"),
                Token::Text("12.5"),
                Token::Close
            ]
        );
    }

    #[test]
    fn test_brackets_need_no_spaces() {
        let tokens: Vec<Token> = Tokenizer::new("((x)y)").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Open,
                Token::Open,
                Token::Text("x"),
                Token::Close,
                Token::Text("y"),
                Token::Close
            ]
        );
    }

    #[test]
    fn test_end_marker_repeats() {
        let mut tokenizer = Tokenizer::new("  x ");
        assert_eq!(tokenizer.next_token(), Token::Text("x"));
        assert_eq!(tokenizer.next_token(), Token::End);
        assert_eq!(tokenizer.next_token(), Token::End);
        assert_eq!(tokenizer.current(), Token::End);
    }

    #[test]
    fn test_prefix_excludes_current_token() {
        let mut tokenizer = Tokenizer::new("(+ x y");
        tokenizer.next_token();
        tokenizer.next_token();
        assert_eq!(tokenizer.current(), Token::Text("+"));
        assert_eq!(tokenizer.prefix(), "(");
        assert_eq!(tokenizer.consumed(), "(+");
        assert_eq!(tokenizer.span(), Span::new(1, 2));
    }

    #[test]
    fn test_only_space_is_whitespace() {
        let tokens: Vec<Token> = Tokenizer::new("x\ty").collect();
        assert_eq!(tokens, vec![Token::Text("x\ty")]);
    }

    #[test]
    fn test_multibyte_text_is_kept_whole() {
        let tokens: Vec<Token> = Tokenizer::new("(αβ x)").collect();
        assert_eq!(tokens[1], Token::Text("αβ"));
    }
}
