//! Interactive session: command dispatch and user-facing messaging.

use std::io::{self, BufRead, Write};

use log::warn;

use crate::config::Config;
use crate::error::Result;
use crate::memory::{DefineOutcome, KnowledgeBase};
use crate::shell::{parse, Command};

/// An interactive session over a knowledge base.
///
/// The session owns the store; nothing here is process-global, so
/// multiple sessions (or tests) run in full isolation. Each command is
/// applied in its entirety or not at all, and no command failure ever
/// ends the session.
pub struct Session {
    kb: KnowledgeBase,
    score_threshold: f64,
}

impl Session {
    /// Creates a session with a fresh, empty knowledge base.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            kb: KnowledgeBase::with_config(&config.engine)?,
            score_threshold: config.query.score_threshold,
        })
    }

    /// Read-only access to the underlying store.
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Executes one command against the store, returning the lines to
    /// show the user.
    ///
    /// Lookup and usage failures come back as errors for the caller to
    /// report; duplicate definitions are warnings in the output, not
    /// errors. [`Command::Exit`] produces no output; ending the loop is
    /// the caller's job.
    pub fn execute(&mut self, command: Command) -> Result<Vec<String>> {
        let mut lines = Vec::new();

        match command {
            Command::New(names) => {
                for name in &names {
                    match self.kb.define(name)? {
                        DefineOutcome::Created => {
                            lines.push(format!("created concept '{}'", name));
                        }
                        DefineOutcome::AlreadyExists => {
                            warn!("concept '{}' already exists, skipping", name);
                            lines.push(format!(
                                "warning: '{}' already exists, skipping",
                                name
                            ));
                        }
                    }
                }
            }

            Command::Bind { result, key, value } => {
                self.kb.combine(&result, &key, &value)?;
                lines.push(format!(
                    "bound '{}' * '{}' -> '{}'",
                    key, value, result
                ));
            }

            Command::Add { result, parts } => {
                let part_refs: Vec<&str> = parts.iter().map(String::as_str).collect();
                self.kb.superpose(&result, &part_refs)?;
                lines.push(format!(
                    "combined {} -> '{}'",
                    parts.join(" + "),
                    result
                ));
            }

            Command::Query { object, key } => {
                let outcome = self.kb.query(&object, &key)?;

                lines.push(format!("unbinding '{}' with key '{}'", object, key));
                lines.push("top matches:".to_string());
                for candidate in &outcome.ranked {
                    // Display filter only; the best match below is chosen
                    // over the full candidate set.
                    if candidate.score > self.score_threshold {
                        lines.push(format!(
                            "  {}: {:.4}",
                            candidate.name, candidate.score
                        ));
                    }
                }

                match outcome.best() {
                    Some(best) => lines.push(format!(
                        "result: the {} of {} is {}",
                        key,
                        object,
                        best.name.to_uppercase()
                    )),
                    None => lines.push(
                        "no other concepts stored; nothing to match against".to_string(),
                    ),
                }
            }

            Command::List => {
                if self.kb.is_empty() {
                    lines.push("no concepts defined".to_string());
                } else {
                    lines.push(format!(
                        "concepts ({}): {}",
                        self.kb.len(),
                        self.kb.names().join(", ")
                    ));
                }
            }

            Command::Help => {
                for line in help_lines() {
                    lines.push(line.to_string());
                }
            }

            Command::Exit => {}
        }

        Ok(lines)
    }

    /// Runs the interactive loop over stdin until `exit`/`quit` or EOF.
    ///
    /// Command errors are printed and the loop continues; only I/O
    /// failure on stdin itself ends the session abnormally.
    pub fn run(&mut self) -> Result<()> {
        println!("engram interactive shell (dimension {})", self.kb.dimension());
        for line in help_lines() {
            println!("{}", line);
        }

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut buffer = String::new();

        loop {
            print!("engram> ");
            io::stdout().flush()?;

            buffer.clear();
            if input.read_line(&mut buffer)? == 0 {
                // EOF
                println!();
                break;
            }

            match parse(&buffer) {
                Ok(None) => continue,
                Ok(Some(Command::Exit)) => break,
                Ok(Some(command)) => match self.execute(command) {
                    Ok(lines) => {
                        for line in lines {
                            println!("{}", line);
                        }
                    }
                    Err(e) => println!("Error: {}", e),
                },
                Err(e) => println!("Error: {}", e),
            }
        }

        Ok(())
    }
}

/// The command reference printed by the banner and the `help` verb.
fn help_lines() -> [&'static str; 7] {
    [
        "commands:",
        "  new <name> [<name> ...]        define primitive concepts",
        "  bind <result> <key> <value>    bind key * value",
        "  add <result> <part> [...]      superpose parts into a composite",
        "  query <object> <key>           unbind and report the best match",
        "  list                           show all concept names",
        "  exit | quit                    end the session",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, EngineConfig, QueryConfig};
    use crate::error::EngramError;

    fn test_session(dim: usize) -> Session {
        Session::new(&Config {
            engine: EngineConfig {
                dimension: dim,
                seed: Some(42),
            },
            query: QueryConfig::default(),
        })
        .unwrap()
    }

    fn run_line(session: &mut Session, line: &str) -> Result<Vec<String>> {
        let command = parse(line)?.expect("blank line in test");
        session.execute(command)
    }

    #[test]
    fn test_new_reports_creation_and_duplicates() {
        let mut session = test_session(256);

        let lines = run_line(&mut session, "new Red Round").unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("created"));

        let lines = run_line(&mut session, "new Red").unwrap();
        assert!(lines[0].contains("already exists"));
        assert_eq!(session.knowledge_base().len(), 2);
    }

    #[test]
    fn test_bind_missing_concept_reported() {
        let mut session = test_session(256);
        run_line(&mut session, "new Color").unwrap();

        let err = run_line(&mut session, "bind Fact Color Red").unwrap_err();
        assert!(matches!(err, EngramError::UnknownConcept(name) if name == "Red"));
        assert!(!session.knowledge_base().contains("Fact"));
    }

    #[test]
    fn test_full_scenario_through_commands() {
        let mut session = test_session(2048);

        run_line(&mut session, "new Color Shape Taste Red Round Sweet").unwrap();
        run_line(&mut session, "bind ColorRed Color Red").unwrap();
        run_line(&mut session, "bind ShapeRound Shape Round").unwrap();
        run_line(&mut session, "bind TasteSweet Taste Sweet").unwrap();
        run_line(&mut session, "add Apple ColorRed ShapeRound TasteSweet").unwrap();

        let lines = run_line(&mut session, "query Apple Color").unwrap();
        let result = lines.last().unwrap();
        assert!(result.contains("RED"), "unexpected result line: {}", result);
    }

    #[test]
    fn test_list_output() {
        let mut session = test_session(256);
        let lines = run_line(&mut session, "list").unwrap();
        assert_eq!(lines, vec!["no concepts defined".to_string()]);

        run_line(&mut session, "new Red Round").unwrap();
        let lines = run_line(&mut session, "list").unwrap();
        assert_eq!(lines, vec!["concepts (2): Red, Round".to_string()]);
    }

    #[test]
    fn test_query_with_no_candidates() {
        let mut session = test_session(512);
        run_line(&mut session, "new A B").unwrap();

        let lines = run_line(&mut session, "query A B").unwrap();
        assert!(lines.last().unwrap().contains("nothing to match"));
    }
}
