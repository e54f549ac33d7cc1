use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Tokens are words delimited by Unicode whitespace, the same characters [`str::split_whitespace`]
/// splits on. Names are made of Unicode alphabetic characters, as in [`char::is_alphabetic`].
/// Because the lexer always picks the longest match, a word
/// such as `x1` or `++` is lexed as a single [`TokenKind::Symbol`] instead of being split into
/// smaller tokens.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"\s+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("%")]
    Mod,

    #[regex(r"-?[0-9]+")]
    Int,

    #[regex(r"\p{Alphabetic}+")]
    Name,

    #[regex(r"\S+", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Classifies a single word that was already split from its surrounding text.
    ///
    /// The word is classified as a whole: if the lexer cannot produce exactly one non-whitespace
    /// token spanning the entire word, it is a [`TokenKind::Symbol`].
    pub fn classify(word: &str) -> TokenKind {
        let mut lexer = TokenKind::lexer(word);
        match lexer.next() {
            Some(Ok(kind)) if !kind.is_whitespace() && lexer.span() == (0..word.len()) => kind,
            _ => TokenKind::Symbol,
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
