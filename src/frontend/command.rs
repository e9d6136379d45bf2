//! Line commands understood by the `schemacli` shell.

use crate::config::FormatOptions;
use crate::debugger::Component;
use crate::error::Result;
use crate::frontend::errors::ParseError;
use crate::frontend::parser::{parse_schema, parse_type};
use crate::join::JoinParamsFactory;
use crate::schema_debug;

pub const HELP: &str = "\
commands:
  type <sql type>                   print the canonical form of a type
  schema <columns>                  print the canonical form of a column list
  join <left columns> ; <right columns>
                                    print the output schema of joining two sources
  help                              show this text
  quit | exit                       leave the shell

columns are written as `name TYPE [KEY], ...`, e.g. `ID BIGINT KEY, NAME STRING`";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Type(String),
    Schema(String),
    Join { left: String, right: String },
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((line, ""));

        let command = match word.to_lowercase().as_str() {
            "type" => Command::Type(rest.to_string()),
            "schema" => Command::Schema(rest.to_string()),
            "join" => {
                let (left, right) =
                    rest.split_once(';')
                        .ok_or_else(|| ParseError::UnexpectedEof {
                            expected: "';' between the join sources".to_string(),
                        })?;
                Command::Join {
                    left: left.trim().to_string(),
                    right: right.trim().to_string(),
                }
            }
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => {
                return Err(ParseError::UnknownCommand {
                    name: word.to_string(),
                }
                .into());
            }
        };

        schema_debug!(Component::Shell, "command {:?}", command);
        Ok(command)
    }

    pub fn run(&self, options: &FormatOptions) -> Result<Reply> {
        let text = match self {
            Command::Type(src) => parse_type(src)?.format(options),
            Command::Schema(src) => parse_schema(src)?.format(options),
            Command::Join { left, right } => {
                let left = parse_schema(left)?;
                let right = parse_schema(right)?;
                JoinParamsFactory::create(&left, &right)?
                    .schema()
                    .format(options)
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(text))
    }
}
