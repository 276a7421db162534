#[cfg(test)]
mod reading {
    use std::fs::File;
    use std::path::Path;
    use std::thread;

    use commodore::language::{ArgumentType, CommandNode, ReadError, Value};
    use commodore::parsing::ParsingError;
    use commodore::registry::{Brigadier, Minecraft, Registry, TypeError};
    use commodore::Reader;

    fn first_argument_type(reader: &Reader, content: &str) -> ArgumentType {
        let tree = reader
            .parse_str(content)
            .unwrap();
        match &tree
            .root()
            .children()[0]
        {
            CommandNode::Argument(argument) => argument
                .argument_type()
                .clone(),
            CommandNode::Literal(literal) => panic!("expected an argument, got {:?}", literal),
        }
    }

    #[test]
    fn custom_type_extends_vocabulary() {
        let content = "warp\n    <destination>:waypoint north\n";

        let result = Reader::standard().parse_str(content);
        assert!(matches!(result, Err(ParsingError::UnknownType(..))));

        let reader = Reader::builder()
            .with_argument_type_parser(Brigadier)
            .with_argument_type_parser(Minecraft)
            .register("waypoint", |configuration| match configuration {
                "north" | "south" | "east" | "west" => Ok(ArgumentType::new("waypoint")
                    .with("heading", Value::Text(configuration.to_string()))),
                other => Err(TypeError::invalid(
                    "waypoint",
                    format!("no heading called '{}'", other),
                )),
            })
            .build();

        let argument_type = first_argument_type(&reader, content);
        assert_eq!(argument_type.identity(), "waypoint");
        assert_eq!(
            argument_type.property("heading"),
            Some(&Value::Text("north".to_string()))
        );

        let result = reader.parse_str("warp\n    <destination>:waypoint up\n");
        assert!(matches!(result, Err(ParsingError::InvalidType(..))));

        // the shared reader is untouched
        assert!(!Reader::standard()
            .registry()
            .contains("waypoint"));
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let reader = Reader::builder()
            .with_argument_type_parser(Brigadier)
            .register("integer", |_| Ok(ArgumentType::new("whole_number")))
            .build();

        let argument_type = first_argument_type(&reader, "xp\n    <amount>:integer\n");
        assert_eq!(argument_type.identity(), "whole_number");

        // the qualified alias still goes to the original
        let argument_type = first_argument_type(&reader, "xp\n    <amount>:brigadier:integer\n");
        assert_eq!(argument_type.identity(), "integer");
    }

    #[test]
    fn empty_reader_knows_no_types() {
        let reader = Reader::builder().build();

        assert!(reader
            .registry()
            .is_empty());
        assert!(reader
            .parse_str("help\n")
            .is_ok());
        assert!(matches!(
            reader.parse_str("say\n    <message>:string\n"),
            Err(ParsingError::UnknownType(..))
        ));
    }

    #[test]
    fn all_input_forms_agree() {
        let path = Path::new("tests/samples/give.commodore");
        let content = std::fs::read_to_string(path).unwrap();
        let reader = Reader::standard();

        let from_str = reader
            .parse_str(&content)
            .unwrap();
        let from_bytes = reader
            .parse_bytes(content.as_bytes())
            .unwrap();
        let from_path = reader
            .parse_path(path)
            .unwrap();
        let from_file = reader
            .parse_file(File::open(path).unwrap())
            .unwrap();
        let from_stream = reader
            .parse(content.as_bytes())
            .unwrap();

        assert_eq!(from_str, from_bytes);
        assert_eq!(from_str, from_path);
        assert_eq!(from_str, from_file);
        assert_eq!(from_str, from_stream);
    }

    #[test]
    fn format_failure_from_path() {
        let result = Reader::standard().parse_path("tests/broken/two-roots.commodore");
        match result {
            Err(ReadError::Format(ParsingError::MultipleRoots(position))) => {
                assert_eq!(position.line, 3)
            }
            other => panic!("expected a format error, got {:?}", other),
        }
    }

    #[test]
    fn concurrent_parsing() {
        let content = std::fs::read_to_string("tests/samples/team.commodore").unwrap();
        let expected = Reader::standard()
            .parse_str(&content)
            .unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let content = content.clone();
                thread::spawn(move || {
                    Reader::standard()
                        .parse_str(&content)
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn byte_order_mark_ignored() {
        let tree = Reader::standard()
            .parse_bytes(b"\xef\xbb\xbfgive\n    <target>:player\n")
            .unwrap();
        assert_eq!(
            tree.root()
                .name(),
            "give"
        );
        assert_eq!(tree.count(), 2);
    }

    #[test]
    fn reader_from_frozen_registry() {
        let registry = Registry::builder()
            .with_argument_type_parser(Brigadier)
            .build();
        let reader = Reader::from(registry.clone());

        assert_eq!(
            reader
                .registry()
                .names(),
            registry.names()
        );
        assert!(reader
            .parse_str("xp\n    <amount>:integer 0\n")
            .is_ok());
        assert!(matches!(
            reader.parse_str("kill\n    <targets>:entities\n"),
            Err(ParsingError::UnknownType(..))
        ));
    }
}
