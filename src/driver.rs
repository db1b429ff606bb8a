pub mod config;
pub mod token;

use std::io::{BufRead, Write};

use derive_new::new;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::driver::config::{DriverConfig, OutputFormat};
use crate::driver::token::{tokens, Token};
use crate::error::{DriverError, TrieError};
use crate::wordlist::wordlist::Wordlist;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Match,
    NoMatch,
    QuitSignal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct Verdict {
    pub word: String,
    pub outcome: Outcome,
}

#[derive(Debug, Serialize, new)]
struct Rejection<'a> {
    word: &'a str,
    rejected: String,
}

/// Everything a finished run produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub words_inserted: usize,
    pub rejected: usize,
    pub verdicts: Vec<Verdict>,
}

impl Session {
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.verdicts.iter().map(|v| v.outcome).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Build,
    Query,
    Done,
}

/// Reads the dictionary, then answers queries, from a line-oriented input.
pub struct Driver<R, W> {
    config: DriverConfig,
    wordlist: Wordlist,
    input: R,
    output: W,
    phase: Phase,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    pub fn new(config: DriverConfig, input: R, output: W) -> Result<Self, DriverError> {
        if config.sentinel.is_empty() || config.sentinel.contains(char::is_whitespace) {
            return Err(DriverError::Config(format!("sentinel {:?} must be a non-empty token", config.sentinel)));
        }
        if config.max_word_length == 0 {
            return Err(DriverError::Config("max word length must be at least 1".to_string()));
        }
        Ok(Driver {
            wordlist: Wordlist::new(config.max_word_length),
            config,
            input,
            output,
            phase: Phase::Build,
        })
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    pub fn run(&mut self) -> Result<Session, DriverError> {
        let mut session = Session::default();
        let mut buf = Vec::new();

        while self.phase != Phase::Done {
            self.prompt()?;
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                self.end_of_input()?;
                break;
            }

            // undecodable bytes become U+FFFD, which the store rejects per token
            let line = String::from_utf8_lossy(&buf);
            for token in tokens(&line, &self.config.sentinel) {
                self.handle(token, &mut session)?;
                if self.phase == Phase::Done {
                    break;
                }
            }
        }
        self.output.flush()?;
        Ok(session)
    }

    fn handle(&mut self, token: Token, session: &mut Session) -> Result<(), DriverError> {
        match (self.phase, token) {
            (Phase::Build, Token::Word(word)) => match self.wordlist.add(word) {
                Ok(insertion) => {
                    debug!(word, nodes_created = insertion.nodes_created, "added dictionary word");
                    session.words_inserted += 1;
                }
                Err(TrieError::AllocationFailure(e)) => return Err(TrieError::AllocationFailure(e).into()),
                Err(e) => self.reject(word, e, session)?,
            },
            (Phase::Build, Token::Quit(_)) => {
                info!(words = session.words_inserted, nodes = self.wordlist.node_count(), "dictionary built");
                self.phase = Phase::Query;
            }
            (Phase::Query, Token::Word(word)) => match self.wordlist.contains(word) {
                Ok(found) => {
                    let outcome = if found { Outcome::Match } else { Outcome::NoMatch };
                    self.report(Verdict::new(word.to_string(), outcome), session)?;
                }
                Err(e) => self.reject(word, e, session)?,
            },
            (Phase::Query, Token::Quit(sentinel)) => {
                self.report(Verdict::new(sentinel.to_string(), Outcome::QuitSignal), session)?;
                info!(queries = session.verdicts.len() - 1, "dictionary search complete");
                self.phase = Phase::Done;
            }
            (Phase::Done, _) => {}
        }
        Ok(())
    }

    fn end_of_input(&mut self) -> Result<(), DriverError> {
        if self.phase == Phase::Build {
            warn!("input ended before the dictionary was closed; no queries answered");
        } else {
            info!("input ended during the query phase");
        }
        self.phase = Phase::Done;
        if self.config.format == OutputFormat::Text {
            writeln!(self.output, "\nDictionary Search Complete !")?;
        }
        Ok(())
    }

    fn prompt(&mut self) -> Result<(), DriverError> {
        if !self.config.prompts || self.config.format != OutputFormat::Text {
            return Ok(());
        }
        match self.phase {
            Phase::Build => writeln!(self.output, "\nEnter Dictionary Word (or '{}' to exit)", self.config.sentinel)?,
            Phase::Query => write!(self.output, "\nEnter the Word To Search (or '{}' to Quit): ", self.config.sentinel)?,
            Phase::Done => {}
        }
        self.output.flush()?;
        Ok(())
    }

    fn report(&mut self, verdict: Verdict, session: &mut Session) -> Result<(), DriverError> {
        debug!(word = %verdict.word, outcome = ?verdict.outcome, "verdict");
        match self.config.format {
            OutputFormat::Text => {
                let text = match verdict.outcome {
                    Outcome::Match => "Match Found !",
                    Outcome::NoMatch => "No Match !",
                    Outcome::QuitSignal => "Dictionary Search Complete !",
                };
                writeln!(self.output, "\n{}", text)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.output, &verdict)?;
                writeln!(self.output)?;
            }
        }
        session.verdicts.push(verdict);
        Ok(())
    }

    fn reject(&mut self, word: &str, error: TrieError, session: &mut Session) -> Result<(), DriverError> {
        warn!(word, %error, "rejected token");
        session.rejected += 1;
        match self.config.format {
            OutputFormat::Text => writeln!(self.output, "\nRejected: {}", error)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.output, &Rejection::new(word, error.to_string()))?;
                writeln!(self.output)?;
            }
        }
        Ok(())
    }
}
