//! CLI command implementations
//!
//! Each command builds its result as a JSON value; `run` prints it. Keeping
//! the two apart lets tests drive commands without capturing stdout.

use serde_json::{json, Value};

use crate::config::KeyspaceConfig;
use crate::engine::{name_of_code, StorageEngineRegistry};
use crate::key::{from_prefix_relative, subtract_all, to_prefix_relative, Key, KeyRange};
use crate::observability::{log_event_with_fields, Event};
use crate::selector::KeySelector;
use crate::split::{DeterministicRandom, KeySplitter};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Parse arguments, run the command, print the result
pub fn run() -> CliResult<()> {
    run_cli(Cli::parse_args())
}

/// Run an already-parsed command line
pub fn run_cli(cli: Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => KeyspaceConfig::load(path)?,
        None => KeyspaceConfig::default(),
    };
    let data = run_command(&config, cli.command)?;
    write_response(data)
}

/// Run a command against `config` and return its JSON result
pub fn run_command(config: &KeyspaceConfig, cmd: Command) -> CliResult<Value> {
    match cmd {
        Command::Separator { begin, end } => separator(config, &begin, end.as_deref()),
        Command::RandomKey {
            begin,
            end,
            seed,
            count,
        } => random_key(config, &begin, end.as_deref(), seed, count),
        Command::Subtract { begin, end, minus } => subtract(&begin, end.as_deref(), &minus),
        Command::Project { begin, end, prefix } => project(&begin, end.as_deref(), &prefix),
        Command::Unproject { begin, end, prefix } => unproject(&begin, end.as_deref(), &prefix),
        Command::Selector {
            key,
            or_equal,
            offset,
            unlimited,
        } => selector(config, &key, or_equal, offset, unlimited),
        Command::Engines => engines(config),
        Command::Engine { name } => engine(&name),
        Command::EngineCode { code } => Ok(json!({
            "code": code,
            "name": name_of_code(code),
        })),
    }
}

fn parse_key(printable: &str) -> CliResult<Key> {
    Ok(Key::from_printable(printable)?)
}

fn parse_range(begin: &str, end: Option<&str>) -> CliResult<KeyRange> {
    let begin = parse_key(begin)?;
    let end = match end {
        Some(end) => parse_key(end)?,
        None => Key::max(),
    };
    Ok(KeyRange::try_new(begin, end)?)
}

fn range_json(range: &KeyRange) -> Value {
    json!({
        "begin": range.begin().printable(),
        "end": range.end().printable(),
    })
}

/// Shortest separator inside the range
pub fn separator(config: &KeyspaceConfig, begin: &str, end: Option<&str>) -> CliResult<Value> {
    let range = parse_range(begin, end)?;
    if range.is_empty() {
        return Err(CliError::invalid_input(format!(
            "separator needs a non-empty range, got {}",
            range
        )));
    }

    let key = KeySplitter::new(config).separator_between(&range);
    log_event_with_fields(
        Event::SeparatorChosen,
        &[("range", &range.to_string()), ("separator", &key.printable())],
    );

    Ok(json!({
        "range": range_json(&range),
        "separator": key.printable(),
    }))
}

/// Random keys strictly inside the range
pub fn random_key(
    config: &KeyspaceConfig,
    begin: &str,
    end: Option<&str>,
    seed: Option<u64>,
    count: usize,
) -> CliResult<Value> {
    let range = parse_range(begin, end)?;
    let mut rng = match seed.or(config.random_seed) {
        Some(seed) => DeterministicRandom::new(seed),
        None => DeterministicRandom::from_entropy(),
    };

    let splitter = KeySplitter::new(config);
    let keys: Vec<String> = (0..count)
        .map(|_| splitter.random_key_between(&range, &mut rng).printable())
        .collect();

    let seed = rng.seed().to_string();
    log_event_with_fields(
        Event::RandomKeyChosen,
        &[("count", &keys.len().to_string()), ("range", &range.to_string()), ("seed", &seed)],
    );

    Ok(json!({
        "range": range_json(&range),
        "seed": rng.seed(),
        "keys": keys,
    }))
}

/// Remaining pieces after excising every `--minus` pair
pub fn subtract(begin: &str, end: Option<&str>, minus: &[String]) -> CliResult<Value> {
    let range = parse_range(begin, end)?;
    let excised = minus
        .chunks(2)
        .map(|pair| match pair {
            [b, e] => parse_range(b, Some(e.as_str())),
            _ => Err(CliError::invalid_input("--minus takes a BEGIN and an END")),
        })
        .collect::<CliResult<Vec<_>>>()?;

    let remaining: Vec<Value> = subtract_all(&range, &excised).iter().map(range_json).collect();
    Ok(json!({
        "range": range_json(&range),
        "remaining": remaining,
    }))
}

/// Range rewritten into the prefix namespace
pub fn project(begin: &str, end: Option<&str>, prefix: &str) -> CliResult<Value> {
    let range = parse_range(begin, end)?;
    let prefix = parse_key(prefix)?;
    let projected = to_prefix_relative(&range, Some(&prefix));
    Ok(json!({
        "range": range_json(&range),
        "prefix": prefix.printable(),
        "projected": range_json(&projected),
    }))
}

/// Prefix-relative range rewritten into the global key space
pub fn unproject(begin: &str, end: Option<&str>, prefix: &str) -> CliResult<Value> {
    let range = parse_range(begin, end)?;
    let prefix = parse_key(prefix)?;
    let global = from_prefix_relative(&range, Some(&prefix));
    Ok(json!({
        "range": range_json(&range),
        "prefix": prefix.printable(),
        "global": range_json(&global),
    }))
}

/// Selector with its normalised key and description
pub fn selector(
    config: &KeyspaceConfig,
    key: &str,
    or_equal: bool,
    offset: i32,
    unlimited: bool,
) -> CliResult<Value> {
    let key = parse_key(key)?;
    let selector = if unlimited {
        KeySelector::unlimited(key.clone(), or_equal, offset)
    } else {
        KeySelector::new(key.clone(), or_equal, offset, config)
    };

    let truncated = selector.key() != &key;
    if truncated {
        log_event_with_fields(
            Event::SelectorKeyTruncated,
            &[
                ("input_len", &key.len().unwrap_or(0).to_string()),
                ("stored_len", &selector.key().len().unwrap_or(0).to_string()),
            ],
        );
    }

    Ok(json!({
        "key": selector.key().printable(),
        "or_equal": selector.or_equal(),
        "offset": selector.offset(),
        "truncated": truncated,
        "description": selector.describe(),
    }))
}

/// Name table, plus the configured default engine
pub fn engines(config: &KeyspaceConfig) -> CliResult<Value> {
    let entries: Vec<Value> = StorageEngineRegistry::global()
        .entries()
        .map(|entry| {
            json!({
                "code": entry.kind.code(),
                "name": entry.canonical,
                "aliases": entry.aliases,
            })
        })
        .collect();

    Ok(json!({
        "default": config.storage_engine,
        "engines": entries,
    }))
}

/// Canonical name and code for a name or alias
pub fn engine(name: &str) -> CliResult<Value> {
    let kind = StorageEngineRegistry::global().kind_of(name)?;
    Ok(json!({
        "input": name,
        "name": kind.name(),
        "code": kind.code(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliErrorCode;

    #[test]
    fn test_separator_command() {
        let value = separator(&KeyspaceConfig::default(), "apple", Some("banana")).unwrap();
        assert_eq!(value["separator"], "b");
    }

    #[test]
    fn test_separator_rejects_empty_range() {
        let err = separator(&KeyspaceConfig::default(), "a", Some("a")).unwrap_err();
        assert_eq!(err.code(), CliErrorCode::InvalidInput);
    }

    #[test]
    fn test_inverted_range_is_input_error() {
        let err = separator(&KeyspaceConfig::default(), "z", Some("a")).unwrap_err();
        assert_eq!(err.code(), CliErrorCode::InvalidInput);
        assert!(err.message().contains("KEYSPACE_INVALID_RANGE"));
    }

    #[test]
    fn test_random_key_command_is_seeded() {
        let config = KeyspaceConfig::default();
        let a = random_key(&config, "a", Some("b"), Some(5), 4).unwrap();
        let b = random_key(&config, "a", Some("b"), Some(5), 4).unwrap();
        assert_eq!(a, b);
        assert_eq!(a["seed"], 5);
        assert_eq!(a["keys"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_random_key_uses_configured_seed() {
        let config = KeyspaceConfig {
            random_seed: Some(9),
            ..KeyspaceConfig::default()
        };
        let value = random_key(&config, "a", Some("b"), None, 1).unwrap();
        assert_eq!(value["seed"], 9);
    }

    #[test]
    fn test_subtract_command() {
        let minus = vec!["c".to_string(), "f".to_string()];
        let value = subtract("b", Some("y"), &minus).unwrap();
        assert_eq!(
            value["remaining"],
            json!([{"begin": "b", "end": "c"}, {"begin": "f", "end": "y"}])
        );
    }

    #[test]
    fn test_project_round_trip() {
        let value = project("t1/a", Some("t1/b"), "t1/").unwrap();
        assert_eq!(value["projected"], json!({"begin": "a", "end": "b"}));

        let value = unproject("a", None, "t1/").unwrap();
        assert_eq!(value["global"], json!({"begin": "t1/a", "end": "t10"}));
    }

    #[test]
    fn test_selector_command_truncates() {
        let config = KeyspaceConfig {
            key_size_limit: 2,
            split_key_size_limit: 1,
            ..KeyspaceConfig::default()
        };
        let value = selector(&config, "abcdef", false, 1, false).unwrap();
        assert_eq!(value["key"], "abc");
        assert_eq!(value["truncated"], true);
        assert_eq!(value["description"], "0+firstGreaterOrEqual(abc)");

        let value = selector(&config, "abcdef", false, 1, true).unwrap();
        assert_eq!(value["key"], "abcdef");
        assert_eq!(value["truncated"], false);
    }

    #[test]
    fn test_engine_commands() {
        let value = engine("ssd").unwrap();
        assert_eq!(value["name"], "ssd-2");
        assert_eq!(value["code"], 2);

        let err = engine("ssd-9").unwrap_err();
        assert_eq!(err.code(), CliErrorCode::UnknownEngine);

        let value = engines(&KeyspaceConfig::default()).unwrap();
        assert_eq!(value["default"], "ssd-2");
        assert_eq!(value["engines"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_engine_code_command() {
        let config = KeyspaceConfig::default();
        let value = run_command(&config, Command::EngineCode { code: 200 }).unwrap();
        assert_eq!(value["name"], "unknown");
    }
}
