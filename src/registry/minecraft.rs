//! Argument types of the game's own commands. Apart from the entity
//! selectors none of these take configuration.

use crate::language::{ArgumentType, Value};
use crate::registry::{words, ArgumentTypeParser, TypeError};

const PREFIX: &str = "minecraft:";

const SELECTORS: [&str; 4] = ["entity", "entities", "player", "players"];

const PLAIN: [&str; 30] = [
    "game_profile",
    "block_pos",
    "column_pos",
    "vec3",
    "vec2",
    "block_state",
    "block_predicate",
    "item_stack",
    "item_predicate",
    "color",
    "component",
    "message",
    "nbt",
    "nbt_path",
    "objective",
    "objective_criteria",
    "operation",
    "particle",
    "rotation",
    "scoreboard_slot",
    "score_holder",
    "swizzle",
    "team",
    "item_slot",
    "resource_location",
    "function",
    "entity_anchor",
    "dimension",
    "time",
    "uuid",
];

pub struct Minecraft;

impl ArgumentTypeParser for Minecraft {
    fn names(&self) -> Vec<String> {
        let names = SELECTORS
            .iter()
            .chain(PLAIN.iter());

        names
            .clone()
            .map(|name| name.to_string())
            .chain(names.map(|name| format!("{}{}", PREFIX, name)))
            .collect()
    }

    fn parse(&self, name: &str, configuration: &str) -> Result<ArgumentType, TypeError> {
        let base = name
            .strip_prefix(PREFIX)
            .unwrap_or(name);
        let words = words(configuration);

        match base {
            "entity" => entity(name, base, &words),
            "entities" | "player" | "players" => {
                if !words.is_empty() {
                    return Err(TypeError::invalid(name, "takes no configuration"));
                }
                let single = base == "player";
                let players = base != "entities";
                Ok(selector(base, single, players))
            }
            _ if PLAIN.contains(&base) => {
                if !words.is_empty() {
                    return Err(TypeError::invalid(name, "takes no configuration"));
                }
                Ok(ArgumentType::new(base))
            }
            _ => Err(TypeError::Unknown(name.to_string())),
        }
    }
}

fn selector(base: &str, single: bool, players: bool) -> ArgumentType {
    ArgumentType::new(base)
        .with("single", Value::Boolean(single))
        .with("players_only", Value::Boolean(players))
}

/// `entity [single|multiple] [players|entities]`, in either order.
fn entity(name: &str, base: &str, words: &[&str]) -> Result<ArgumentType, TypeError> {
    let mut single = None;
    let mut players = None;

    for word in words {
        let (slot, value) = match *word {
            "single" => (&mut single, true),
            "multiple" => (&mut single, false),
            "players" => (&mut players, true),
            "entities" => (&mut players, false),
            other => {
                return Err(TypeError::invalid(
                    name,
                    format!("unknown selector option '{}'", other),
                ))
            }
        };
        if slot.is_some() {
            return Err(TypeError::invalid(
                name,
                format!("conflicting selector option '{}'", word),
            ));
        }
        *slot = Some(value);
    }

    Ok(selector(
        base,
        single.unwrap_or(false),
        players.unwrap_or(false),
    ))
}
