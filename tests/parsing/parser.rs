#[cfg(test)]
mod verify {
    use commodore::language::*;
    use commodore::parsing::lexer::tokenize;
    use commodore::parsing::parser::{parse_tokens, DescriptorKind};
    use commodore::parsing::{ParsingError, Position};
    use commodore::registry::Registry;
    use commodore::Reader;

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    fn player() -> ArgumentType {
        ArgumentType::new("player")
            .with("single", Value::Boolean(true))
            .with("players_only", Value::Boolean(true))
    }

    #[test]
    fn give_example() {
        let tree = Reader::standard()
            .parse_str(trim(
                r#"
give
    <target>:player
        <item>:string
            "#,
            ))
            .unwrap();

        assert_eq!(
            tree,
            CommandTree::new(Literal::new(
                "give",
                vec![CommandNode::argument(
                    "target",
                    "player",
                    player(),
                    vec![CommandNode::argument(
                        "item",
                        "string",
                        ArgumentType::new("string")
                            .with("mode", Value::Text("single_word".to_string())),
                        vec![]
                    )]
                )]
            ))
        );

        let target = &tree
            .root()
            .children()[0];
        match target {
            CommandNode::Argument(argument) => {
                assert_eq!(argument.name(), "target");
                assert_eq!(
                    argument
                        .argument_type()
                        .identity(),
                    "player"
                );
                assert_eq!(
                    argument
                        .children()
                        .len(),
                    1
                );
            }
            CommandNode::Literal(_) => panic!("expected an argument"),
        }
        assert!(target.children()[0].is_leaf());
    }

    #[test]
    fn single_literal() {
        let tree = Reader::standard()
            .parse_str("help")
            .unwrap();
        assert_eq!(tree, CommandTree::new(Literal::new("help", vec![])));

        let tree = Reader::standard()
            .parse_str("# nothing else\n\nhelp\n\n")
            .unwrap();
        assert_eq!(tree, CommandTree::new(Literal::new("help", vec![])));
    }

    #[test]
    fn declaration_order_preserved() {
        let tree = Reader::standard()
            .parse_str(trim(
                r#"
gamemode
    survival
    creative
    adventure
    spectator
            "#,
            ))
            .unwrap();

        let names: Vec<&str> = tree
            .root()
            .children()
            .iter()
            .map(|node| node.name())
            .collect();
        assert_eq!(names, vec!["survival", "creative", "adventure", "spectator"]);
    }

    #[test]
    fn siblings_after_nested_blocks() {
        let tree = Reader::standard()
            .parse_str(trim(
                r#"
scoreboard
    objectives
        add
            <objective>:objective
                <criteria>:objective_criteria
        list
    players
        reset
            <targets>:score_holder
            "#,
            ))
            .unwrap();

        assert_eq!(
            tree.paths(),
            vec![
                "scoreboard",
                "scoreboard objectives",
                "scoreboard objectives add",
                "scoreboard objectives add <objective>",
                "scoreboard objectives add <objective> <criteria>",
                "scoreboard objectives list",
                "scoreboard players",
                "scoreboard players reset",
                "scoreboard players reset <targets>",
            ]
        );
    }

    #[test]
    fn configuration_reaches_type_parser() {
        let tree = Reader::standard()
            .parse_str("xp\n    <amount>:integer 0 100 # levels\n")
            .unwrap();

        match &tree
            .root()
            .children()[0]
        {
            CommandNode::Argument(argument) => {
                assert_eq!(argument.specifier(), "integer 0 100");
                assert_eq!(
                    argument
                        .argument_type()
                        .property("max"),
                    Some(&Value::Integer(100))
                );
            }
            CommandNode::Literal(_) => panic!("expected an argument"),
        }
    }

    #[test]
    fn descriptors_before_assembly() {
        let registry = Registry::builder()
            .register("word", |_| Ok(ArgumentType::new("word")))
            .build();

        let tokens = tokenize("say\n    <message>:word\n    <message>:word\n").unwrap();

        // the parser itself accepts duplicates; only assembly rejects them
        let root = parse_tokens(tokens, &registry).unwrap();
        assert_eq!(root.name, "say");
        assert_eq!(
            root.children
                .len(),
            2
        );
        assert_eq!(root.children[1].position, Position::new(3, 6));
        match &root.children[0].kind {
            DescriptorKind::Argument { specifier, .. } => assert_eq!(*specifier, "word"),
            DescriptorKind::Literal => panic!("expected an argument"),
        }
    }

    #[test]
    fn unknown_type_is_located() {
        let result = Reader::standard().parse_str("warp\n    <destination>:waypoint north\n");
        assert_eq!(
            result,
            Err(ParsingError::UnknownType(
                Position::new(2, 19),
                "destination".to_string(),
                "waypoint".to_string()
            ))
        );
    }

    #[test]
    fn registering_makes_unknown_type_known() {
        let content = "warp\n    <destination>:waypoint\n";

        let reader = Reader::builder()
            .with_argument_type_parser(commodore::registry::Brigadier)
            .build();
        assert!(matches!(
            reader.parse_str(content),
            Err(ParsingError::UnknownType(_, _, _))
        ));

        let reader = Reader::builder()
            .with_argument_type_parser(commodore::registry::Brigadier)
            .register("waypoint", |configuration| {
                Ok(ArgumentType::new("waypoint").with("tag", Value::Text(configuration.to_string())))
            })
            .build();

        let tree = reader
            .parse_str(content)
            .unwrap();
        assert_eq!(tree.count(), 2);
    }

    #[test]
    fn deterministic() {
        let content = std::fs::read_to_string("tests/samples/team.commodore").unwrap();

        let first = Reader::standard()
            .parse_str(&content)
            .unwrap();
        let second = Reader::standard()
            .parse_str(&content)
            .unwrap();

        assert_eq!(first, second);
    }
}
