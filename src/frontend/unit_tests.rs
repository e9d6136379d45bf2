#[cfg(test)]
mod tests {
    use crate::config::FormatOptions;
    use crate::error::Error;
    use crate::frontend::lexer::{Token, Tokenizer};
    use crate::frontend::parser::MAX_NESTING;
    use crate::frontend::{Command, ParseError, Reply, parse_schema, parse_type};
    use crate::join::JoinError;
    use crate::schema::{ColumnName, LogicalSchema};
    use crate::types::{SchemaError, SqlStruct, SqlType};

    /* ============================================================
     * Tokenizer
     * ============================================================
     */

    #[test]
    fn tokenizes_nested_generics() {
        let tokens: Vec<Token> = Tokenizer::new("ARRAY<MAP<STRING, INT>>")
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|(t, _)| t)
            .collect();

        assert_eq!(
            tokens,
            vec![
                Token::Ident("ARRAY".into()),
                Token::Lt,
                Token::Ident("MAP".into()),
                Token::Lt,
                Token::Ident("STRING".into()),
                Token::Comma,
                Token::Ident("INT".into()),
                Token::Gt,
                Token::Gt,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn quoted_names_unescape_backticks() {
        let tokens = Tokenizer::new("`we``ird name`").tokenize().unwrap();
        assert_eq!(tokens[0], (Token::Quoted("we`ird name".into()), 0));
    }

    #[test]
    fn reports_bad_characters_with_offset() {
        let err = Tokenizer::new("MAP<STRING; INT>").tokenize().unwrap_err();
        assert_eq!(err, ParseError::UnexpectedChar { ch: ';', offset: 10 });

        let err = Tokenizer::new("STRUCT<`open INT>").tokenize().unwrap_err();
        assert_eq!(err, ParseError::UnterminatedQuote { offset: 7 });
    }

    /* ============================================================
     * Types
     * ============================================================
     */

    #[test]
    fn parses_primitives_and_aliases() {
        assert_eq!(parse_type("boolean").unwrap(), SqlType::Boolean);
        assert_eq!(parse_type("INT").unwrap(), SqlType::Integer);
        assert_eq!(parse_type("Integer").unwrap(), SqlType::Integer);
        assert_eq!(parse_type("BIGINT").unwrap(), SqlType::Bigint);
        assert_eq!(parse_type("DOUBLE").unwrap(), SqlType::Double);
        assert_eq!(parse_type("varchar").unwrap(), SqlType::String);
    }

    #[test]
    fn parses_empty_struct() {
        assert_eq!(
            parse_type("STRUCT< >").unwrap(),
            SqlType::Struct(SqlStruct::builder().build())
        );
        assert_eq!(parse_type("STRUCT<>").unwrap().to_string(), "STRUCT< >");
    }

    #[test]
    fn display_output_parses_back() {
        let inputs = [
            "STRUCT<a INTEGER, b STRING>",
            "STRUCT<BLUE STRING, GREEN INTEGER>",
            "MAP<STRING, ARRAY<DECIMAL(10, 2)>>",
            "STRUCT<inner STRUCT<x DOUBLE, y DOUBLE>, tags ARRAY<STRING>>",
            "ARRAY<STRUCT< >>",
        ];

        for input in inputs {
            let ty = parse_type(input).unwrap();
            assert_eq!(ty.to_string(), input);
            assert_eq!(parse_type(&ty.to_string()).unwrap(), ty);
        }
    }

    #[test]
    fn escaped_reserved_names_parse_back() {
        let ty = parse_type("STRUCT<KEY STRING, n INT>").unwrap();
        let rendered = ty.format(&FormatOptions::of(["KEY"]));

        assert_eq!(rendered, "STRUCT<`KEY` STRING, n INTEGER>");
        assert_eq!(parse_type(&rendered).unwrap(), ty);
    }

    #[test]
    fn awkward_field_names_round_trip() {
        for name in ["a b", "1st", "é", "x`y", "", "a,b", "STRUCT<x INT>"] {
            let ty = SqlType::Struct(
                SqlStruct::builder()
                    .field(name, SqlType::Integer)
                    .unwrap()
                    .build(),
            );

            let rendered = ty.to_string();
            assert_eq!(parse_type(&rendered).unwrap(), ty, "{rendered}");
        }

        let ty = SqlType::Struct(
            SqlStruct::builder()
                .field("a b", SqlType::Integer)
                .unwrap()
                .build(),
        );
        assert_eq!(ty.to_string(), "STRUCT<`a b` INTEGER>");
    }

    #[test]
    fn awkward_column_names_round_trip() {
        let schema = LogicalSchema::builder()
            .key_column(ColumnName::of("my key"), SqlType::String)
            .value_column(ColumnName::of(""), SqlType::Integer)
            .value_column(ColumnName::of("9lives"), SqlType::Double)
            .build();

        let rendered = schema.to_string();
        assert_eq!(rendered, "`my key` STRING KEY, `` INTEGER, `9lives` DOUBLE");
        assert_eq!(parse_schema(&rendered).unwrap(), schema);
    }

    fn nested_arrays(levels: usize) -> String {
        format!("{}INT{}", "ARRAY<".repeat(levels), ">".repeat(levels))
    }

    #[test]
    fn nesting_up_to_the_limit_parses() {
        // the innermost INT is one level too
        let ty = parse_type(&nested_arrays(MAX_NESTING - 1)).unwrap();
        assert_eq!(ty.to_string(), nested_arrays(MAX_NESTING - 1).replace("INT", "INTEGER"));
    }

    #[test]
    fn nesting_past_the_limit_is_an_error() {
        let err = parse_type(&nested_arrays(MAX_NESTING)).unwrap_err();
        assert_eq!(
            err,
            ParseError::TooDeep {
                limit: MAX_NESTING,
                offset: 6 * MAX_NESTING,
            }
        );

        let err = parse_type(&nested_arrays(200_000)).unwrap_err();
        assert!(matches!(err, ParseError::TooDeep { .. }));

        let deep_struct = format!("{}INT{}", "STRUCT<f ".repeat(100_000), ">".repeat(100_000));
        let err = run(&format!("type {deep_struct}")).unwrap_err();
        assert!(err.to_string().contains("nested more than 256 levels"));
    }

    #[test]
    fn duplicate_struct_fields_fail_to_parse() {
        let err = parse_type("STRUCT<A INT, A STRING>").unwrap_err();

        match err {
            ParseError::Invalid { source, offset } => {
                assert_eq!(offset, 14);
                assert!(matches!(source, SchemaError::DuplicateField { .. }));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn invalid_decimal_fails_to_parse() {
        let err = parse_type("DECIMAL(2, 5)").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Invalid {
                source: SchemaError::InvalidDecimal { .. },
                offset: 0
            }
        ));
    }

    #[test]
    fn reports_syntax_errors() {
        assert_eq!(
            parse_type("TIMESTAMP").unwrap_err(),
            ParseError::UnknownType {
                name: "TIMESTAMP".into(),
                offset: 0
            }
        );

        assert_eq!(
            parse_type("ARRAY<INT").unwrap_err(),
            ParseError::UnexpectedEof {
                expected: "'>'".into()
            }
        );

        assert_eq!(
            parse_type("INT INT").unwrap_err().to_string(),
            "at 4: expected end of input, found 'INT'"
        );
    }

    /* ============================================================
     * Schemas
     * ============================================================
     */

    #[test]
    fn parses_schema_columns() {
        let schema = parse_schema("LK STRING KEY, BLUE STRING, GREEN INT").unwrap();

        let expected = LogicalSchema::builder()
            .key_column(ColumnName::of("LK"), SqlType::String)
            .value_column(ColumnName::of("BLUE"), SqlType::String)
            .value_column(ColumnName::of("GREEN"), SqlType::Integer)
            .build();

        assert_eq!(schema, expected);
        assert_eq!(parse_schema(&schema.to_string()).unwrap(), schema);
    }

    #[test]
    fn parses_empty_schema() {
        assert_eq!(parse_schema("  ").unwrap(), LogicalSchema::builder().build());
    }

    #[test]
    fn schema_requires_separators() {
        let err = parse_schema("A INT B INT").unwrap_err();
        assert_eq!(err.to_string(), "at 6: expected ',' or end of input, found 'B'");
    }

    /* ============================================================
     * Commands
     * ============================================================
     */

    fn run(line: &str) -> Result<Reply, Error> {
        Command::parse(line)?.run(&FormatOptions::none())
    }

    #[test]
    fn type_command_prints_canonical_form() {
        assert_eq!(
            run("type struct<a int, b varchar>").unwrap(),
            Reply::Text("STRUCT<a INTEGER, b STRING>".into())
        );
    }

    #[test]
    fn join_command_prints_merged_schema() {
        assert_eq!(
            run("JOIN LK STRING KEY, BLUE STRING ; RK STRING KEY, RED BIGINT").unwrap(),
            Reply::Text("LK STRING KEY, BLUE STRING, RED BIGINT".into())
        );
    }

    #[test]
    fn join_command_surfaces_key_mismatch() {
        let err = run("join BOB INTEGER KEY ; RK STRING KEY").unwrap_err();

        assert_eq!(
            err,
            Error::Join(JoinError::KeyTypeMismatch {
                left: SqlType::Integer,
                right: SqlType::String,
            })
        );
        assert!(err.is_user_error());
        assert!(err.to_string().contains("Invalid join. Key types differ: INTEGER vs STRING"));
    }

    #[test]
    fn join_command_needs_two_sources() {
        let err = Command::parse("join A INT KEY").unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::UnexpectedEof { .. })));
    }

    #[test]
    fn misc_commands() {
        assert_eq!(Command::parse("  QUIT ").unwrap(), Command::Quit);
        assert_eq!(run("exit").unwrap(), Reply::Quit);
        assert!(matches!(run("help").unwrap(), Reply::Text(text) if text.contains("join")));
        assert_eq!(
            Command::parse("drop everything").unwrap_err().to_string(),
            "parse error: unknown command 'drop', try 'help'"
        );
    }
}
