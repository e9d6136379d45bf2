use std::fmt;

use crate::frontend::errors::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // keywords and bare names
    Ident(String),
    // `backtick quoted` names
    Quoted(String),
    Number(u32),

    Lt,
    Gt,
    LParen,
    RParen,
    Comma,

    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(s) => write!(f, "'{s}'"),
            Token::Quoted(s) => write!(f, "`{s}`"),
            Token::Number(n) => write!(f, "{n}"),
            Token::Lt => write!(f, "'<'"),
            Token::Gt => write!(f, "'>'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Comma => write!(f, "','"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

pub struct Tokenizer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    len: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            len: input.len(),
        }
    }

    /// Returns the next token and its byte offset.
    pub fn next_token(&mut self) -> Result<(Token, usize), ParseError> {
        self.skip_whitespace();

        let Some((offset, c)) = self.chars.next() else {
            return Ok((Token::Eof, self.len));
        };

        let token = match c {
            '<' => Token::Lt,
            '>' => Token::Gt,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,

            '`' => Token::Quoted(self.quoted(offset)?),

            c if c.is_ascii_digit() => {
                let mut literal = c.to_string();
                while let Some(&(_, ch)) = self.chars.peek() {
                    if !ch.is_ascii_digit() {
                        break;
                    }
                    literal.push(ch);
                    self.chars.next();
                }
                let n = literal
                    .parse()
                    .map_err(|_| ParseError::InvalidNumber { literal, offset })?;
                Token::Number(n)
            }

            c if is_ident_start(c) => {
                let mut ident = c.to_string();
                while let Some(&(_, ch)) = self.chars.peek() {
                    if !is_ident_continue(ch) {
                        break;
                    }
                    ident.push(ch);
                    self.chars.next();
                }
                Token::Ident(ident)
            }

            ch => return Err(ParseError::UnexpectedChar { ch, offset }),
        };

        Ok((token, offset))
    }

    /// Collects every token up to and including `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<(Token, usize)>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let (token, offset) = self.next_token()?;
            let done = token == Token::Eof;
            tokens.push((token, offset));
            if done {
                return Ok(tokens);
            }
        }
    }

    // A doubled backtick inside the quotes stands for one backtick.
    fn quoted(&mut self, start: usize) -> Result<String, ParseError> {
        let mut s = String::new();
        while let Some((_, ch)) = self.chars.next() {
            if ch != '`' {
                s.push(ch);
                continue;
            }
            if matches!(self.chars.peek(), Some(&(_, '`'))) {
                self.chars.next();
                s.push('`');
            } else {
                return Ok(s);
            }
        }
        Err(ParseError::UnterminatedQuote { offset: start })
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.chars.peek(), Some(&(_, c)) if c.is_whitespace()) {
            self.chars.next();
        }
    }
}

/// True when `word` lexes as a single bare name, i.e. needs no backticks.
pub fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(is_ident_start) && chars.all(is_ident_continue)
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
