//! Generic argument types: booleans, numbers with optional bounds, and
//! strings.

use std::str::FromStr;

use crate::language::{ArgumentType, Value};
use crate::registry::{words, ArgumentTypeParser, TypeError};

const PREFIX: &str = "brigadier:";

const NAMES: [&str; 12] = [
    "bool",
    "integer",
    "long",
    "float",
    "double",
    "string",
    "brigadier:bool",
    "brigadier:integer",
    "brigadier:long",
    "brigadier:float",
    "brigadier:double",
    "brigadier:string",
];

/// The primitive types every command vocabulary needs.
///
/// ```text
/// <enabled>:bool
/// <count>:integer 1 64
/// <chance>:double 0 1
/// <reason>:string greedy
/// ```
pub struct Brigadier;

impl ArgumentTypeParser for Brigadier {
    fn names(&self) -> Vec<String> {
        NAMES
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    fn parse(&self, name: &str, configuration: &str) -> Result<ArgumentType, TypeError> {
        let base = name
            .strip_prefix(PREFIX)
            .unwrap_or(name);
        let words = words(configuration);

        match base {
            "bool" => {
                if !words.is_empty() {
                    return Err(TypeError::invalid(name, "takes no configuration"));
                }
                Ok(ArgumentType::new(base))
            }
            "integer" => bounds::<i32, _>(name, base, &words, |v| Value::Integer(v as i64)),
            "long" => bounds::<i64, _>(name, base, &words, Value::Integer),
            "float" => bounds::<f32, _>(name, base, &words, |v| Value::Float(v as f64)),
            "double" => bounds::<f64, _>(name, base, &words, Value::Float),
            "string" => string(name, base, &words),
            _ => Err(TypeError::Unknown(name.to_string())),
        }
    }
}

/// Numeric types take an optional minimum followed by an optional maximum.
fn bounds<T, F>(name: &str, base: &str, words: &[&str], value: F) -> Result<ArgumentType, TypeError>
where
    T: FromStr + PartialOrd + Copy + std::fmt::Display,
    F: Fn(T) -> Value,
{
    if words.len() > 2 {
        return Err(TypeError::invalid(
            name,
            "expected at most a minimum and a maximum",
        ));
    }

    let mut parsed = Vec::with_capacity(2);
    for word in words {
        match word.parse::<T>() {
            // NaN is unordered, even against itself
            Ok(bound) if bound.partial_cmp(&bound).is_some() => parsed.push(bound),
            _ => {
                return Err(TypeError::invalid(
                    name,
                    format!("'{}' is not a valid bound", word),
                ))
            }
        }
    }

    let mut argument_type = ArgumentType::new(base);

    if let Some(min) = parsed.first() {
        argument_type = argument_type.with("min", value(*min));
    }
    if let Some(max) = parsed.get(1) {
        if parsed[0] > *max {
            return Err(TypeError::invalid(
                name,
                format!("minimum {} is greater than maximum {}", parsed[0], max),
            ));
        }
        argument_type = argument_type.with("max", value(*max));
    }

    Ok(argument_type)
}

fn string(name: &str, base: &str, words: &[&str]) -> Result<ArgumentType, TypeError> {
    let mode = match words {
        [] => "single_word",
        ["word" | "single_word"] => "single_word",
        ["phrase" | "quotable_phrase"] => "quotable_phrase",
        ["greedy" | "greedy_phrase"] => "greedy_phrase",
        [other] => {
            return Err(TypeError::invalid(
                name,
                format!("unknown string mode '{}'", other),
            ))
        }
        _ => return Err(TypeError::invalid(name, "expected a single string mode")),
    };

    Ok(ArgumentType::new(base).with("mode", Value::Text(mode.to_string())))
}
