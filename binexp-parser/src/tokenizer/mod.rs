pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, including
/// whitespace. This allows the parser to backtrack in case of an error.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    // the catch-all `Symbol` token means the lexer never fails on any input
    while let Some(Ok(kind)) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

/// Builds tokens from words that were already split apart, such as the output of
/// [`str::split_whitespace`].
///
/// Each word is classified with [`TokenKind::classify`]. Spans are computed as if the words were
/// joined with a single space.
pub fn tokenize_words<S: AsRef<str>>(words: &[S]) -> Box<[Token]> {
    let mut start = 0;
    words.iter()
        .map(|word| {
            let lexeme = word.as_ref();
            let span = start..start + lexeme.len();
            start = span.end + 1;
            Token {
                span,
                kind: TokenKind::classify(lexeme),
                lexeme,
            }
        })
        .collect()
}
