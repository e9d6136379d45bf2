//! Parses the textual forms produced by `Display` back into types and schemas.
//!
//! ```text
//! type   := BOOLEAN | INT | INTEGER | BIGINT | DOUBLE | STRING | VARCHAR
//!         | DECIMAL '(' n ',' n ')'
//!         | ARRAY '<' type '>'
//!         | MAP '<' type ',' type '>'
//!         | STRUCT '<' [ name type { ',' name type } ] '>'
//! schema := [ name type [KEY] { ',' name type [KEY] } ]
//! ```
//!
//! Keywords are case-insensitive. Names keep their case and may be quoted
//! with backticks.

use crate::debugger::Component;
use crate::frontend::errors::ParseError;
use crate::frontend::lexer::{Token, Tokenizer};
use crate::schema::{ColumnName, LogicalSchema};
use crate::schema_trace;
use crate::types::{SqlStruct, SqlType};

pub fn parse_type(input: &str) -> Result<SqlType, ParseError> {
    let mut parser = Parser::new(input)?;
    let ty = parser.parse_type()?;
    parser.expect_eof()?;
    schema_trace!(Component::Parser, "parsed type {}", ty);
    Ok(ty)
}

pub fn parse_schema(input: &str) -> Result<LogicalSchema, ParseError> {
    let mut parser = Parser::new(input)?;
    let schema = parser.parse_schema()?;
    schema_trace!(Component::Parser, "parsed schema {}", schema);
    Ok(schema)
}

/// Deepest type nesting accepted; bounds the parser's recursion.
pub const MAX_NESTING: usize = 256;

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn new(input: &str) -> Result<Self, ParseError> {
        let tokens = Tokenizer::new(input).tokenize()?;
        Ok(Self {
            tokens,
            pos: 0,
            depth: 0,
        })
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos].0
    }

    // The trailing `Eof` is never consumed, so `pos` stays in bounds.
    fn advance(&mut self) -> (Token, usize) {
        let current = self.tokens[self.pos].clone();
        if current.0 != Token::Eof {
            self.pos += 1;
        }
        current
    }

    fn unexpected(expected: &str, found: Token, offset: usize) -> ParseError {
        match found {
            Token::Eof => ParseError::UnexpectedEof {
                expected: expected.to_string(),
            },
            found => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: found.to_string(),
                offset,
            },
        }
    }

    fn expect(&mut self, token: Token) -> Result<usize, ParseError> {
        let (found, offset) = self.advance();
        if found == token {
            Ok(offset)
        } else {
            Err(Self::unexpected(&token.to_string(), found, offset))
        }
    }

    fn expect_eof(&mut self) -> Result<(), ParseError> {
        let (found, offset) = self.advance();
        match found {
            Token::Eof => Ok(()),
            found => Err(Self::unexpected("end of input", found, offset)),
        }
    }

    fn expect_name(&mut self) -> Result<(String, usize), ParseError> {
        match self.advance() {
            (Token::Ident(name), offset) | (Token::Quoted(name), offset) => Ok((name, offset)),
            (found, offset) => Err(Self::unexpected("a name", found, offset)),
        }
    }

    fn expect_number(&mut self) -> Result<u32, ParseError> {
        match self.advance() {
            (Token::Number(n), _) => Ok(n),
            (found, offset) => Err(Self::unexpected("a number", found, offset)),
        }
    }

    fn parse_type(&mut self) -> Result<SqlType, ParseError> {
        if self.depth == MAX_NESTING {
            return Err(ParseError::TooDeep {
                limit: MAX_NESTING,
                offset: self.tokens[self.pos].1,
            });
        }

        self.depth += 1;
        let ty = self.parse_type_at_depth();
        self.depth -= 1;
        ty
    }

    fn parse_type_at_depth(&mut self) -> Result<SqlType, ParseError> {
        let (name, offset) = match self.advance() {
            (Token::Ident(name), offset) => (name, offset),
            (found, offset) => return Err(Self::unexpected("a type", found, offset)),
        };

        match name.to_uppercase().as_str() {
            "BOOLEAN" => Ok(SqlType::Boolean),
            "INT" | "INTEGER" => Ok(SqlType::Integer),
            "BIGINT" => Ok(SqlType::Bigint),
            "DOUBLE" => Ok(SqlType::Double),
            "STRING" | "VARCHAR" => Ok(SqlType::String),
            "DECIMAL" => {
                self.expect(Token::LParen)?;
                let precision = self.expect_number()?;
                self.expect(Token::Comma)?;
                let scale = self.expect_number()?;
                self.expect(Token::RParen)?;
                SqlType::decimal(precision, scale)
                    .map_err(|source| ParseError::Invalid { source, offset })
            }
            "ARRAY" => {
                self.expect(Token::Lt)?;
                let item = self.parse_type()?;
                self.expect(Token::Gt)?;
                Ok(SqlType::array(item))
            }
            "MAP" => {
                self.expect(Token::Lt)?;
                let key = self.parse_type()?;
                self.expect(Token::Comma)?;
                let value = self.parse_type()?;
                self.expect(Token::Gt)?;
                Ok(SqlType::map(key, value))
            }
            "STRUCT" => self.parse_struct_body().map(SqlType::Struct),
            _ => Err(ParseError::UnknownType { name, offset }),
        }
    }

    fn parse_struct_body(&mut self) -> Result<SqlStruct, ParseError> {
        self.expect(Token::Lt)?;

        let mut builder = SqlStruct::builder();
        if *self.peek() == Token::Gt {
            self.advance();
            return Ok(builder.build());
        }

        loop {
            let (name, offset) = self.expect_name()?;
            let ty = self.parse_type()?;
            builder = builder
                .field(name, ty)
                .map_err(|source| ParseError::Invalid { source, offset })?;

            match self.advance() {
                (Token::Comma, _) => continue,
                (Token::Gt, _) => return Ok(builder.build()),
                (found, offset) => return Err(Self::unexpected("',' or '>'", found, offset)),
            }
        }
    }

    fn parse_schema(&mut self) -> Result<LogicalSchema, ParseError> {
        let mut builder = LogicalSchema::builder();
        if *self.peek() == Token::Eof {
            return Ok(builder.build());
        }

        loop {
            let (name, _) = self.expect_name()?;
            let ty = self.parse_type()?;

            let is_key = matches!(self.peek(), Token::Ident(word) if word.eq_ignore_ascii_case("KEY"));
            builder = if is_key {
                self.advance();
                builder.key_column(ColumnName::of(name), ty)
            } else {
                builder.value_column(ColumnName::of(name), ty)
            };

            match self.advance() {
                (Token::Comma, _) => continue,
                (Token::Eof, _) => return Ok(builder.build()),
                (found, offset) => {
                    return Err(Self::unexpected("',' or end of input", found, offset));
                }
            }
        }
    }
}
