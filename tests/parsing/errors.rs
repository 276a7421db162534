#[cfg(test)]
mod syntax {
    use commodore::parsing::{ParsingError, Position};
    use commodore::Reader;

    /// Helper function to check if parsing produces the expected error type
    fn expect_error(content: &str, expected: ParsingError) {
        let result = Reader::standard().parse_str(content);
        match result {
            Ok(_) => panic!(
                "Expected parsing to fail, but it succeeded for input: {}",
                content
            ),
            Err(error) => {
                if std::mem::discriminant(&error) != std::mem::discriminant(&expected) {
                    panic!(
                        "Expected error type like {:?} but got: {:?} for input '{}'",
                        expected, error, content
                    );
                }
            }
        }
    }

    fn zero() -> Position {
        Position::new(0, 0)
    }

    #[test]
    fn empty_file() {
        expect_error("", ParsingError::MissingRoot(zero()));
    }

    #[test]
    fn only_comments() {
        expect_error(
            r#"
# nothing to see

# here either
            "#
            .trim_ascii(),
            ParsingError::MissingRoot(zero()),
        );
    }

    #[test]
    fn two_top_level_commands() {
        expect_error(
            r#"
give
    <target>:player
take
            "#
            .trim_ascii(),
            ParsingError::MultipleRoots(zero()),
        );
    }

    #[test]
    fn indented_first_line() {
        expect_error("    give\n", ParsingError::Expected(zero(), ""));
    }

    #[test]
    fn literal_with_spaces() {
        expect_error(
            "give\n    all players\n",
            ParsingError::InvalidLiteral(zero(), "".to_string()),
        );
    }

    #[test]
    fn literal_with_angle_bracket() {
        expect_error(
            "give>\n",
            ParsingError::InvalidLiteral(zero(), "".to_string()),
        );
    }

    #[test]
    fn argument_name_starting_with_digit() {
        expect_error(
            "give\n    <1st>:player\n",
            ParsingError::InvalidArgumentName(zero(), "".to_string()),
        );
    }

    #[test]
    fn empty_argument_name() {
        expect_error(
            "give\n    <>:player\n",
            ParsingError::InvalidArgumentName(zero(), "".to_string()),
        );
    }

    #[test]
    fn argument_never_closed() {
        expect_error(
            "give\n    <target:player\n",
            ParsingError::UnterminatedArgument(zero()),
        );
    }

    #[test]
    fn argument_without_colon() {
        expect_error(
            "give\n    <target> player\n",
            ParsingError::MissingTypeSpecifier(zero(), "".to_string()),
        );
    }

    #[test]
    fn argument_without_type() {
        expect_error(
            "give\n    <target>:   # who\n",
            ParsingError::MissingTypeSpecifier(zero(), "".to_string()),
        );
    }

    #[test]
    fn tabs_after_spaces() {
        expect_error(
            "give\n    <target>:player\n\t\t<item>:item_stack\n",
            ParsingError::MixedIndentation(zero()),
        );
    }

    #[test]
    fn tabs_and_spaces_on_one_line() {
        expect_error(
            "give\n \t<target>:player\n",
            ParsingError::MixedIndentation(zero()),
        );
    }

    #[test]
    fn deeper_step_than_first() {
        expect_error(
            "give\n  <target>:player\n      <item>:item_stack\n",
            ParsingError::InconsistentIndentation(zero()),
        );
    }

    #[test]
    fn dedent_between_levels() {
        expect_error(
            "team\n    add\n        <team>:team\n      remove\n",
            ParsingError::InconsistentIndentation(zero()),
        );
    }

    #[test]
    fn unregistered_type() {
        expect_error(
            "warp\n    <destination>:waypoint\n",
            ParsingError::UnknownType(zero(), "".to_string(), "".to_string()),
        );
    }

    #[test]
    fn reversed_bounds() {
        expect_error(
            "give\n    <count>:integer 64 1\n",
            ParsingError::InvalidType(zero(), "".to_string(), "".to_string(), "".to_string()),
        );
    }

    #[test]
    fn unknown_string_mode() {
        expect_error(
            "say\n    <message>:string everything\n",
            ParsingError::InvalidType(zero(), "".to_string(), "".to_string(), "".to_string()),
        );
    }

    #[test]
    fn argument_as_root() {
        expect_error(
            "<target>:player\n    give\n",
            ParsingError::ArgumentRoot(zero(), "".to_string()),
        );
    }

    #[test]
    fn duplicate_literals() {
        expect_error(
            r#"
team
    add
    add
            "#
            .trim_ascii(),
            ParsingError::DuplicateSibling(zero(), "".to_string(), "".to_string()),
        );
    }

    #[test]
    fn literal_and_argument_sharing_name() {
        expect_error(
            r#"
kill
    target
    <target>:entities
            "#
            .trim_ascii(),
            ParsingError::DuplicateSibling(zero(), "".to_string(), "".to_string()),
        );
    }
}

#[cfg(test)]
mod positions {
    use commodore::parsing::{ParsingError, Position};
    use commodore::Reader;

    fn error(content: &str) -> ParsingError {
        Reader::standard()
            .parse_str(content)
            .unwrap_err()
    }

    #[test]
    fn second_root_is_reported() {
        assert_eq!(
            error("give\ntake\n").position(),
            Position::new(2, 1)
        );
    }

    #[test]
    fn duplicate_is_reported_at_second_declaration() {
        let result = error("team\n    add\n        <team>:team\n    add\n");
        assert_eq!(
            result,
            ParsingError::DuplicateSibling(
                Position::new(4, 5),
                "team".to_string(),
                "add".to_string()
            )
        );
    }

    #[test]
    fn indentation_errors_point_at_line_start() {
        assert_eq!(
            error("give\n    <target>:player\n  <item>:item_stack\n").position(),
            Position::new(3, 1)
        );
    }

    #[test]
    fn display_leads_with_position() {
        let message = error("give\n    <count>:integer 64 1\n").to_string();
        assert!(message.starts_with("2:13: "), "got {}", message);
    }
}
