//! Command parsing: tokenizer and verb dispatch.

use crate::error::{EngramError, Result};

/// A parsed shell command.
///
/// One variant per verb, matched exhaustively by the session, so an
/// unhandled verb is a compile error rather than a silent fall-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Define one or more primitive concepts.
    New(Vec<String>),
    /// Bind a key to a value and store the result.
    Bind {
        /// Name to store the bound vector under.
        result: String,
        /// Key concept name.
        key: String,
        /// Value concept name.
        value: String,
    },
    /// Superpose parts into a composite and store it.
    Add {
        /// Name to store the composite under.
        result: String,
        /// Part concept names, at least one.
        parts: Vec<String>,
    },
    /// Unbind an object by a key and report the best match.
    Query {
        /// Composite object name.
        object: String,
        /// Key concept name.
        key: String,
    },
    /// List all stored concept names.
    List,
    /// Print the command reference.
    Help,
    /// End the session.
    Exit,
}

/// Splits a command line into whitespace-separated tokens, honoring
/// single and double quotes so names may contain spaces.
///
/// # Errors
///
/// Returns [`EngramError::Usage`] on an unterminated quote.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                } else {
                    current.push(ch);
                }
            }
            None => match ch {
                '\'' | '"' => {
                    quote = Some(ch);
                    in_token = true;
                }
                c if c.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                c => {
                    current.push(c);
                    in_token = true;
                }
            },
        }
    }

    if quote.is_some() {
        return Err(EngramError::Usage("unterminated quote".to_string()));
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

/// Parses one input line into a [`Command`].
///
/// Verbs are case-insensitive; argument names are kept verbatim.
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// [`EngramError::Usage`] for an unknown verb or a wrong argument count.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let tokens = tokenize(line)?;
    let Some((verb, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match verb.to_lowercase().as_str() {
        "new" => {
            if args.is_empty() {
                return Err(EngramError::Usage(
                    "new <name> [<name> ...]".to_string(),
                ));
            }
            Command::New(args.to_vec())
        }
        "bind" => match args {
            [result, key, value] => Command::Bind {
                result: result.clone(),
                key: key.clone(),
                value: value.clone(),
            },
            _ => {
                return Err(EngramError::Usage(
                    "bind <result> <key> <value>".to_string(),
                ))
            }
        },
        "add" => match args {
            [result, parts @ ..] if !parts.is_empty() => Command::Add {
                result: result.clone(),
                parts: parts.to_vec(),
            },
            _ => {
                return Err(EngramError::Usage(
                    "add <result> <part> [<part> ...]".to_string(),
                ))
            }
        },
        "query" => match args {
            [object, key] => Command::Query {
                object: object.clone(),
                key: key.clone(),
            },
            _ => {
                return Err(EngramError::Usage(
                    "query <object> <key>".to_string(),
                ))
            }
        },
        // Dispatched on the verb alone; trailing arguments are ignored
        // rather than rejected.
        "list" => Command::List,
        "help" => Command::Help,
        "exit" | "quit" => Command::Exit,
        unknown => {
            return Err(EngramError::Usage(format!(
                "unknown command '{}'; type 'help' for the command list",
                unknown
            )))
        }
    };

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_plain() {
        let tokens = tokenize("bind RedColor Color Red").unwrap();
        assert_eq!(tokens, vec!["bind", "RedColor", "Color", "Red"]);
    }

    #[test]
    fn test_tokenize_quotes() {
        let tokens = tokenize(r#"new "Granny Smith" 'Red Delicious'"#).unwrap();
        assert_eq!(tokens, vec!["new", "Granny Smith", "Red Delicious"]);
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        assert!(matches!(
            tokenize("new \"Granny Smith"),
            Err(EngramError::Usage(_))
        ));
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        let tokens = tokenize("  new   Red\tRound ").unwrap();
        assert_eq!(tokens, vec!["new", "Red", "Round"]);
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_verb_case_insensitive() {
        assert_eq!(parse("LIST").unwrap(), Some(Command::List));
        assert_eq!(
            parse("NEW Red").unwrap(),
            Some(Command::New(vec!["Red".to_string()]))
        );
    }

    #[test]
    fn test_parse_names_keep_case() {
        let cmd = parse("new Red").unwrap().unwrap();
        assert_eq!(cmd, Command::New(vec!["Red".to_string()]));
    }

    #[test]
    fn test_parse_bind_arity() {
        assert!(parse("bind a b").is_err());
        assert!(parse("bind a b c d").is_err());
        assert_eq!(
            parse("bind RedColor Color Red").unwrap(),
            Some(Command::Bind {
                result: "RedColor".to_string(),
                key: "Color".to_string(),
                value: "Red".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_add_arity() {
        assert!(parse("add Apple").is_err());
        assert_eq!(
            parse("add Apple RedColor RoundShape").unwrap(),
            Some(Command::Add {
                result: "Apple".to_string(),
                parts: vec!["RedColor".to_string(), "RoundShape".to_string()],
            })
        );
    }

    #[test]
    fn test_parse_query_arity() {
        assert!(parse("query Apple").is_err());
        assert!(parse("query Apple Color extra").is_err());
        assert_eq!(
            parse("query Apple Color").unwrap(),
            Some(Command::Query {
                object: "Apple".to_string(),
                key: "Color".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_exit_aliases() {
        assert_eq!(parse("exit").unwrap(), Some(Command::Exit));
        assert_eq!(parse("quit").unwrap(), Some(Command::Exit));
        assert_eq!(parse("QUIT").unwrap(), Some(Command::Exit));
    }

    #[test]
    fn test_parse_unknown_verb() {
        assert!(matches!(
            parse("frobnicate x"),
            Err(EngramError::Usage(_))
        ));
    }
}
