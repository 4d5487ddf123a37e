//! Lexical scanning of WKT text.

use std::fmt::Display;

use crate::error::{Result, WktError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of ASCII letters, such as a geometry keyword or dimension suffix.
    Word,
    /// A numeric literal. The text is validated when the reader converts it.
    Number,
    LeftParen,
    RightParen,
    Comma,
    /// The keyword `EMPTY`, in any case.
    Empty,
}

/// A lexical unit together with its source text and byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub position: usize,
}

impl<'a> Token<'a> {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Word => write!(f, "word {:?}", self.text),
            TokenKind::Number => write!(f, "number {}", self.text),
            TokenKind::Empty => write!(f, "EMPTY"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// A lazy, restartable iterator over the tokens of a WKT string.
///
/// Whitespace is skipped. The iterator yields `None` once the input is exhausted, and stops
/// after the first error.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    start: usize,
    cursor: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::new_at(input, 0)
    }

    /// Start scanning at byte offset `offset`. Token positions stay relative to the whole
    /// input.
    pub fn new_at(input: &'a str, offset: usize) -> Self {
        let offset = offset.min(input.len());
        Self {
            input,
            start: offset,
            cursor: offset,
        }
    }

    /// Rewind to the offset this tokenizer was created with.
    pub fn reset(&mut self) {
        self.cursor = self.start;
    }

    /// The byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.cursor..];
        let trimmed = rest.trim_start();
        self.cursor += rest.len() - trimmed.len();
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) {
        let bytes = self.input.as_bytes();
        while self.cursor < bytes.len() && pred(bytes[self.cursor]) {
            self.cursor += 1;
        }
    }

    fn scan_number(&mut self) {
        let bytes = self.input.as_bytes();
        if matches!(bytes[self.cursor], b'+' | b'-') {
            self.cursor += 1;
        }
        self.take_while(|b| b.is_ascii_digit() || b == b'.');
        if self.cursor < bytes.len() && matches!(bytes[self.cursor], b'e' | b'E') {
            self.cursor += 1;
            if self.cursor < bytes.len() && matches!(bytes[self.cursor], b'+' | b'-') {
                self.cursor += 1;
            }
            self.take_while(|b| b.is_ascii_digit());
        }
    }

    fn scan(&mut self) -> Option<Result<Token<'a>>> {
        self.skip_whitespace();
        let position = self.cursor;
        let c = self.input[position..].chars().next()?;

        let kind = match c {
            '(' => {
                self.cursor += 1;
                TokenKind::LeftParen
            }
            ')' => {
                self.cursor += 1;
                TokenKind::RightParen
            }
            ',' => {
                self.cursor += 1;
                TokenKind::Comma
            }
            '0'..='9' | '+' | '-' | '.' => {
                self.scan_number();
                TokenKind::Number
            }
            c if c.is_ascii_alphabetic() => {
                self.take_while(|b| b.is_ascii_alphabetic());
                if self.input[position..self.cursor].eq_ignore_ascii_case("EMPTY") {
                    TokenKind::Empty
                } else {
                    TokenKind::Word
                }
            }
            character => {
                self.cursor = self.input.len();
                return Some(Err(WktError::Lex {
                    character,
                    position,
                }));
            }
        };

        Some(Ok(Token {
            kind,
            text: &self.input[position..self.cursor],
            position,
        }))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan()
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

#[cfg(test)]
mod test {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Tokenizer::new(input)
            .map(|token| token.unwrap().kind)
            .collect()
    }

    #[test]
    fn point() {
        use TokenKind::*;
        assert_eq!(
            kinds("POINT (1.0 -2e3)"),
            vec![Word, LeftParen, Number, Number, RightParen]
        );
    }

    #[test]
    fn token_text_and_positions() {
        let tokens: Vec<_> = Tokenizer::new("  linestring z( 1 ,2)")
            .collect::<Result<_>>()
            .unwrap();
        let summary: Vec<_> = tokens.iter().map(|t| (t.text, t.position)).collect();
        assert_eq!(
            summary,
            vec![
                ("linestring", 2),
                ("z", 13),
                ("(", 14),
                ("1", 16),
                (",", 18),
                ("2", 19),
                (")", 20)
            ]
        );
    }

    #[test]
    fn empty_keyword_any_case() {
        assert_eq!(
            kinds("MULTIPOINT (EMPTY, empty)"),
            vec![
                TokenKind::Word,
                TokenKind::LeftParen,
                TokenKind::Empty,
                TokenKind::Comma,
                TokenKind::Empty,
                TokenKind::RightParen
            ]
        );
    }

    #[test]
    fn scientific_notation_is_one_token() {
        let tokens: Vec<_> = Tokenizer::new("1.5E-7 +.5 -3e+2")
            .map(|t| t.unwrap().text)
            .collect();
        assert_eq!(tokens, vec!["1.5E-7", "+.5", "-3e+2"]);
    }

    #[test]
    fn unrecognized_character() {
        let mut tokenizer = Tokenizer::new("POINT (1 1) ;");
        let err = tokenizer.find_map(|t| t.err()).unwrap();
        assert_eq!(
            err,
            WktError::Lex {
                character: ';',
                position: 12
            }
        );
        assert!(tokenizer.next().is_none());
    }

    #[test]
    fn restart_from_offset() {
        let mut tokenizer = Tokenizer::new_at("SRID=1;POINT EMPTY", 7);
        assert_eq!(tokenizer.next().unwrap().unwrap().position, 7);
        assert_eq!(tokenizer.next().unwrap().unwrap().kind, TokenKind::Empty);
        assert!(tokenizer.next().is_none());

        tokenizer.reset();
        assert_eq!(tokenizer.next().unwrap().unwrap().text, "POINT");
    }
}
