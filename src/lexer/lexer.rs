use lazy_static::lazy_static;
use regex::Regex;

use crate::{Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &str) -> Token;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new("^[ \t\n\r]+").unwrap();

    // Two-character operators must come before their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_]+").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals) },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not) },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash) },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
    ];
}

/// Scans a source string one token at a time.
///
/// The position only ever moves forward. Once the end of the input is
/// reached every further call to [`Lexer::next_token`] returns another
/// `EOF` token.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
        }
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.pos
    }

    // `n` must land on a char boundary; only matched text lengths are passed.
    pub(crate) fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub(crate) fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE.find(self.remainder()) {
            self.advance_n(matched.end());
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, String::new(), Span::new(self.pos, self.pos));
        }

        for pattern in PATTERNS.iter() {
            let matched = match pattern.regex.find(self.remainder()) {
                Some(matched) => matched.as_str().to_owned(),
                None => continue,
            };

            return (pattern.handler)(self, &matched);
        }

        illegal_handler(self)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to, but not including, the first `EOF`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::EOF) {
            None
        } else {
            Some(token)
        }
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Token {
    let start = lexer.offset();
    lexer.advance_n(matched.len());

    MK_TOKEN!(TokenKind::Number, String::from(matched), Span::new(start, lexer.offset()))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Token {
    let start = lexer.offset();
    lexer.advance_n(matched.len());

    MK_TOKEN!(
        TokenKind::lookup_ident(matched),
        String::from(matched),
        Span::new(start, lexer.offset())
    )
}

// Consumes exactly one character, whatever its width.
fn illegal_handler(lexer: &mut Lexer) -> Token {
    let start = lexer.offset();
    let ch = lexer.remainder().chars().next().unwrap_or('\0');
    lexer.advance_n(ch.len_utf8());

    MK_TOKEN!(TokenKind::Illegal, ch.to_string(), Span::new(start, lexer.offset()))
}

/// Lexes the whole source, returning every token including the final `EOF`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
