pub mod ast;
pub mod error;
pub mod fmt;
pub mod token;

use ast::Node;
use error::{kind, Error, ErrorKind};
use super::tokenizer::{tokenize_complete, tokenize_words, Token, TokenKind};
use std::ops::Range;

/// A high-level parser for prefix-notation expressions. This is the type to use to parse a line of
/// tokens into an expression tree.
///
/// The parser never mutates the tokens it was given; it only advances a cursor through them.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Create a new parser over words that were already split apart. Each word is one token.
    pub fn from_words<S: AsRef<str>>(words: &'source [S]) -> Self {
        Self {
            tokens: tokenize_words(words),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Advances the cursor past any whitespace tokens.
    fn skip_whitespace(&mut self) {
        while self.current_token().map_or(false, Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.skip_whitespace();
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Returns the kind of the next non-whitespace token without consuming it.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn peek_kind(&mut self) -> Result<TokenKind, Error> {
        self.skip_whitespace();
        self.current_token()
            .map(|token| token.kind)
            .ok_or_else(|| self.error(kind::UnexpectedEof))
    }

    /// Returns the number of non-whitespace tokens that have not been consumed yet.
    pub fn remaining(&self) -> usize {
        self.tokens[self.cursor..]
            .iter()
            .filter(|token| !token.is_whitespace())
            .count()
    }

    /// Parses a value from the given stream of tokens. Any tokens after the value are left
    /// untouched and are **not** an error; see [`Parser::try_parse_full`] for the strict variant.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        match T::parse(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error pointing at the leftover tokens is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = self.try_parse::<T>()?;
        self.skip_whitespace();
        if self.cursor == self.tokens.len() {
            Ok(value)
        } else {
            let span = self.span().start..self.eof_span().end;
            Err(Error::new(vec![span], kind::ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser<'_>) -> Result<Self, Error>;
}

/// Parses an expression tree from a sequence of prefix-notation tokens.
///
/// Parsing stops as soon as one complete expression has been read. Tokens after it are ignored
/// rather than rejected, so `["x", "y"]` parses as the variable `x`. Use
/// [`Parser::try_parse_full`] to reject trailing tokens instead.
pub fn parse<S: AsRef<str>>(words: &[S]) -> Result<Node, Error> {
    Parser::from_words(words).try_parse()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn trailing_tokens_are_ignored() {
        let mut parser = Parser::new("+ x 0 y 3");
        let node = parser.try_parse::<Node>().unwrap();
        assert_eq!(node.to_prefix(), "+ x 0");
        assert_eq!(parser.remaining(), 2);
    }

    #[test]
    fn strict_parse_rejects_trailing_tokens() {
        let mut parser = Parser::new("+ x 0 y 3");
        let err = parser.try_parse_full::<Node>().unwrap_err();
        assert!(err.is::<kind::ExpectedEof>());
        assert_eq!(err.spans, vec![6..9]);
    }

    #[test]
    fn strict_parse_allows_trailing_whitespace() {
        let mut parser = Parser::new(" * 2 y \n");
        let node = parser.try_parse_full::<Node>().unwrap();
        assert_eq!(node.to_prefix(), "* 2 y");
    }

    #[test]
    fn source_and_words_agree() {
        for input in ["* x\u{a0}+ 2 ß", "-\x0b7\x0c9", "% a\u{3000}b"] {
            let words = input.split_whitespace().collect::<Vec<_>>();
            let from_words = parse(&words).unwrap();
            let from_source = Parser::new(input).try_parse_full::<Node>().unwrap();
            assert_eq!(from_source, from_words, "{input:?}");
        }
    }

    #[test]
    fn empty_input() {
        let err = parse::<&str>(&[]).unwrap_err();
        assert!(err.is::<kind::UnexpectedEof>());

        let err = Parser::new("   ").try_parse::<Node>().unwrap_err();
        assert!(err.is::<kind::UnexpectedEof>());
    }

    #[test]
    fn missing_operand() {
        let err = parse(&["+", "1"]).unwrap_err();
        assert!(err.is::<kind::UnexpectedEof>());
        assert_eq!(err.spans, vec![3..3]);
    }

    #[test]
    fn failed_parse_does_not_advance() {
        let mut parser = Parser::new("- 4");
        assert!(parser.try_parse::<Node>().is_err());
        assert_eq!(parser.remaining(), 2);
    }

    #[test]
    fn words_and_source_agree() {
        let source = "% - -7 x * y 3";
        let words = source.split_whitespace().collect::<Vec<_>>();
        let from_source = Parser::new(source).try_parse_full::<Node>().unwrap();
        let from_words = parse(&words).unwrap();
        assert_eq!(from_source, from_words);
        assert_eq!(from_words.to_prefix(), source);
    }

    #[test]
    fn owned_words() {
        let words = vec![String::from("*"), String::from("ab"), String::from("10")];
        let node = parse(&words).unwrap();
        assert_eq!(node.to_infix(), "(ab * 10)");
    }
}
