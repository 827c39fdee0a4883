//! Forgiving input parsing for tackboard operations
//!
//! The parser accepts multiple input formats and normalizes them to canonical
//! Operations:
//!
//! 1. `{"op": "move card", ...}` (also `operation` / `action`)
//! 2. `{"verb": "move", "noun": "card", ...}`
//! 3. `{"move": "card", ...}`
//! 4. inferred from the keys present, e.g. `{"list_id": 3, "title": "x"}`

use crate::error::{Result, TackboardError};
use crate::schema::all_operations;
use crate::types::{Noun, Operation, Verb};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Keys that describe the operation rather than parameterize it
const META_KEYS: &[&str] = &["op", "operation", "action", "verb", "noun", "target", "actor", "note"];

/// Parse input JSON into one or more Operations
pub fn parse_input(input: Value) -> Result<Vec<Operation>> {
    match input {
        Value::Array(arr) => arr.into_iter().map(parse_operation).collect(),
        Value::Object(obj) => Ok(vec![parse_operation(Value::Object(obj))?]),
        _ => Err(TackboardError::parse("input must be an object or array")),
    }
}

/// Parse a single operation from JSON
pub fn parse_operation(input: Value) -> Result<Operation> {
    let Value::Object(mut obj) = input else {
        return Err(TackboardError::parse("operation must be an object"));
    };

    normalize_params(&mut obj);

    let actor = obj
        .get("actor")
        .and_then(Value::as_str)
        .map(str::to_string);

    let (verb, noun, params) = extract_operation(&obj)?;

    let mut operation = Operation::new(verb, noun, params);
    if let Some(actor) = actor {
        operation = operation.with_actor(actor);
    }

    tracing::debug!(op = %operation.op_string(), "parsed operation");
    Ok(operation)
}

/// Work out verb and noun, trying each input form in turn
fn extract_operation(obj: &Map<String, Value>) -> Result<(Verb, Noun, Map<String, Value>)> {
    // Strategy 1: Explicit "op" field with "verb noun" string
    let op_value = obj
        .get("op")
        .or_else(|| obj.get("operation"))
        .or_else(|| obj.get("action"));
    if let Some(op_str) = op_value.and_then(Value::as_str) {
        if let Some((verb, noun)) = parse_op_string(op_str) {
            return Ok((verb, noun, strip_keys(obj, &[])));
        }
        if op_str.split_whitespace().count() == 2 {
            return Err(TackboardError::parse(format!("unknown operation '{}'", op_str)));
        }
    }

    // Strategy 2: Separate verb/noun fields
    let verb_value = obj.get("verb").or_else(|| obj.get("action"));
    let noun_value = obj.get("noun").or_else(|| obj.get("target"));
    if let (Some(verb_str), Some(noun_str)) = (
        verb_value.and_then(Value::as_str),
        noun_value.and_then(Value::as_str),
    ) {
        return match (Verb::from_alias(verb_str), Noun::parse(noun_str)) {
            (Some(verb), Some(noun)) => Ok((verb, noun, strip_keys(obj, &[]))),
            _ => Err(TackboardError::InvalidOperation {
                verb: verb_str.to_string(),
                noun: noun_str.to_string(),
            }),
        };
    }

    // Strategy 3: Shorthand keys like { "move": "card", ... }
    for (key, value) in obj {
        let (Some(verb), Some(noun_str)) = (Verb::from_alias(key), value.as_str()) else {
            continue;
        };
        if let Some(noun) = Noun::parse(noun_str) {
            return Ok((verb, noun, strip_keys(obj, &[key.as_str()])));
        }
    }

    // Strategy 4: Infer from data
    if let Some((verb, noun)) = infer_operation(obj) {
        return Ok((verb, noun, strip_keys(obj, &[])));
    }

    Err(TackboardError::parse("cannot determine operation from input"))
}

/// Parse an op string like "move card" into (Verb, Noun)
fn parse_op_string(s: &str) -> Option<(Verb, Noun)> {
    let mut parts = s.split_whitespace();
    let (verb, noun) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    Some((Verb::from_alias(verb)?, Noun::parse(noun)?))
}

/// Infer the operation from the parameter keys present
fn infer_operation(obj: &Map<String, Value>) -> Option<(Verb, Noun)> {
    let has = |key: &str| obj.contains_key(key);

    if has("date") && has("minutes") && !has("id") {
        return Some((Verb::Log, Noun::Session));
    }

    // The container key picks the item type
    let scoped = [
        ("list_id", Noun::Card, Noun::Cards),
        ("todolist_id", Noun::Todo, Noun::Todos),
        ("week_id", Noun::Session, Noun::Sessions),
        ("board_id", Noun::List, Noun::Lists),
    ];
    for (parent, item, items) in scoped {
        if !has(parent) {
            continue;
        }
        let others = obj
            .keys()
            .filter(|k| !META_KEYS.contains(&k.as_str()))
            .filter(|k| !matches!(k.as_str(), "id" | "position"))
            .filter(|k| k.as_str() != parent)
            .count();

        return match (has("id"), others) {
            (true, 0) => Some((Verb::Move, item)),
            (false, 0) if !has("position") => Some((Verb::List, items)),
            (false, _) if has("title") => Some((Verb::Add, item)),
            _ => None,
        };
    }

    if has("id") {
        let has_updates = ["title", "description", "due"].iter().any(|k| has(k));
        return Some(if has_updates {
            (Verb::Update, Noun::Card)
        } else {
            (Verb::Get, Noun::Card)
        });
    }

    if has("title") {
        return Some((Verb::Add, Noun::Board));
    }

    if obj.keys().all(|k| META_KEYS.contains(&k.as_str())) {
        return Some((Verb::List, Noun::Boards));
    }

    None
}

/// Copy the object without metadata keys and any extra `skip` keys
fn strip_keys(obj: &Map<String, Value>, skip: &[&str]) -> Map<String, Value> {
    obj.iter()
        .filter(|(k, _)| !META_KEYS.contains(&k.as_str()) && !skip.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Normalize parameter keys (snake_case, aliases) and numeric strings
fn normalize_params(params: &mut Map<String, Value>) {
    // Convert camelCase to snake_case
    let keys_to_convert: Vec<String> = params.keys().cloned().collect();
    for key in keys_to_convert {
        let snake = to_snake_case(&key);
        if snake != key {
            if let Some(value) = params.remove(&key) {
                if !params.contains_key(&snake) {
                    params.insert(snake, value);
                }
            }
        }
    }

    // Field aliases declared on the operation structs
    for (alias, field) in field_aliases() {
        if let Some(value) = params.remove(*alias) {
            if !params.contains_key(*field) {
                params.insert(field.to_string(), value);
            }
        }
    }

    // Counts given as strings
    for key in ["position", "minutes", "limit"] {
        let parsed = params
            .get(key)
            .and_then(Value::as_str)
            .and_then(|s| s.trim().parse::<i64>().ok());
        if let Some(n) = parsed {
            params.insert(key.to_string(), Value::Number(Number::from(n)));
        }
    }
}

/// `alias → field` pairs collected from every operation's parameters
fn field_aliases() -> &'static BTreeMap<&'static str, &'static str> {
    static ALIASES: OnceLock<BTreeMap<&'static str, &'static str>> = OnceLock::new();
    ALIASES.get_or_init(|| {
        all_operations()
            .iter()
            .flat_map(|op| op.parameters())
            .flat_map(|param| param.aliases.iter().map(move |alias| (*alias, param.name)))
            .collect()
    })
}

/// Simple camelCase to snake_case conversion
fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse_one(input: Value) -> Operation {
        parse_operation(input).unwrap()
    }

    #[test]
    fn test_parse_explicit_op() {
        let op = parse_one(json!({ "op": "add card", "list_id": 1, "title": "Test" }));
        assert_eq!(op.verb, Verb::Add);
        assert_eq!(op.noun, Noun::Card);
        assert_eq!(op.params.get("title").unwrap(), "Test");
        assert!(op.params.get("op").is_none());
    }

    #[test]
    fn test_all_forms_agree() {
        let forms = [
            json!({ "op": "move card", "id": 4, "list_id": 2, "position": 0 }),
            json!({ "verb": "move", "noun": "card", "id": 4, "list_id": 2, "position": 0 }),
            json!({ "move": "card", "id": 4, "list_id": 2, "position": 0 }),
            json!({ "id": 4, "list_id": 2, "position": 0 }),
        ];

        let parsed: Vec<_> = forms.into_iter().map(parse_one).collect();
        for op in &parsed {
            assert_eq!(op, &parsed[0]);
        }
        assert_eq!(parsed[0].op_string(), "move card");
        assert_eq!(parsed[0].params.len(), 3);
    }

    #[test]
    fn test_parse_verb_aliases() {
        let op = parse_one(json!({ "op": "mv todo", "id": 1, "todolist_id": 1 }));
        assert_eq!(op.verb, Verb::Move);

        let op = parse_one(json!({ "op": "rm card", "id": "3" }));
        assert_eq!(op.verb, Verb::Delete);

        let op = parse_one(json!({ "op": "create todo_list", "title": "x" }));
        assert_eq!((op.verb, op.noun), (Verb::Add, Noun::TodoList));

        let op = parse_one(json!({ "op": "done todo", "id": 1 }));
        assert_eq!(op.verb, Verb::Complete);
    }

    #[test]
    fn test_unknown_op_string() {
        let err = parse_operation(json!({ "op": "paint card" })).unwrap_err();
        assert!(err.to_string().contains("paint card"));

        let err = parse_operation(json!({ "verb": "add", "noun": "widget" })).unwrap_err();
        assert!(matches!(err, TackboardError::InvalidOperation { .. }));
    }

    #[test]
    fn test_infer_operations() {
        let cases = [
            (json!({ "list_id": 3, "title": "x" }), "add card"),
            (json!({ "listId": 3 }), "list cards"),
            (json!({ "board_id": 1, "title": "Todo" }), "add list"),
            (json!({ "id": 2, "board_id": 1, "pos": 0 }), "move list"),
            (json!({ "todoListId": 1, "title": "milk" }), "add todo"),
            (json!({ "week_id": 1 }), "list sessions"),
            (json!({ "date": "2024-03-05", "minutes": 30, "piece": "Bach" }), "log session"),
            (json!({ "id": 5 }), "get card"),
            (json!({ "id": 5, "title": "renamed" }), "update card"),
            (json!({ "title": "Roadmap" }), "add board"),
            (json!({}), "list boards"),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_one(input).op_string(), expected);
        }
    }

    #[test]
    fn test_uninferable_input() {
        let err = parse_operation(json!({ "colour": "red" })).unwrap_err();
        assert!(matches!(err, TackboardError::Parse { .. }));
        assert!(parse_input(json!("add card")).is_err());
    }

    #[test]
    fn test_batch_operations() {
        let ops = parse_input(json!([
            { "op": "add board", "title": "One" },
            { "op": "add board", "title": "Two" }
        ]))
        .unwrap();
        assert_eq!(ops.len(), 2);
    }

    #[test]
    fn test_normalize_aliases() {
        let op = parse_one(json!({
            "op": "add card",
            "listId": 2,
            "name": "x",
            "desc": "long",
            "note": "ignored"
        }));
        assert_eq!(op.params.get("list_id").unwrap(), 2);
        assert_eq!(op.params.get("title").unwrap(), "x");
        assert_eq!(op.params.get("description").unwrap(), "long");
        assert!(op.params.get("note").is_none());
    }

    #[test]
    fn test_declared_aliases_drive_inference() {
        let op = parse_one(json!({ "day": "2024-03-04", "mins": "25", "piece": "Scales" }));
        assert_eq!((op.verb, op.noun), (Verb::Log, Noun::Session));
        assert_eq!(op.params.get("minutes").unwrap(), 25);
        assert_eq!(op.params.get("date").unwrap(), "2024-03-04");

        let op = parse_one(json!({ "todoListId": 3, "name": "milk" }));
        assert_eq!((op.verb, op.noun), (Verb::Add, Noun::Todo));
        assert_eq!(op.params.get("todolist_id").unwrap(), 3);
    }

    #[test]
    fn test_negative_position_string() {
        let op = parse_one(json!({ "op": "move todo", "id": 1, "todolist_id": 1, "index": "-2" }));
        assert_eq!(op.params.get("position").unwrap(), -2);
    }

    #[test]
    fn test_numeric_strings() {
        let op = parse_one(json!({ "op": "move card", "id": "4", "list_id": 2, "position": "1" }));
        assert_eq!(op.params.get("position").unwrap(), 1);
        // IDs stay as given; the typed ID accepts both forms
        assert_eq!(op.params.get("id").unwrap(), "4");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("todoListId"), "todo_list_id");
        assert_eq!(to_snake_case("listId"), "list_id");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
    }

    #[test]
    fn test_parse_with_actor() {
        let op = parse_one(json!({ "op": "add board", "title": "Test", "actor": "alice" }));
        assert_eq!(op.actor.as_deref(), Some("alice"));
        assert!(op.params.get("actor").is_none());

        let op = parse_one(json!({ "op": "add board", "title": "Test" }));
        assert_eq!(op.actor, None);
    }
}
