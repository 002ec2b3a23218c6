use std::io::{BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::{config::Settings, session, session::Session};

#[derive(Debug, Parser)]
#[command(multicall = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show subsets for the given sums
    Query {
        /// Sums to look up
        #[arg(required = true)]
        sums: Vec<u64>,
    },
    /// Show subsets for every sum in the table
    All,
    /// Display the weight collection
    Weights,
    /// List reachable sums
    Reachable,
    Exit,
    Quit,
}

pub fn start(session: Session, settings: Settings) -> Result<()> {
    let stdin = std::io::stdin();
    let mut repl = Repl {
        session,
        settings,
        out: std::io::stdout(),
    };
    let mut input = stdin.lock();
    loop {
        let Some(line) = repl.readline(&mut input)? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match repl.respond(line) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                if err.downcast_ref::<clap::Error>().is_some() {
                    writeln!(repl.out, "  {err}")?;
                } else {
                    writeln!(repl.out, "  error: {err:#}")?;
                }
                repl.out.flush()?;
            }
        }
    }

    Ok(())
}

struct Repl<W> {
    session: Session,
    settings: Settings,
    out: W,
}

impl<W: Write> Repl<W> {
    fn respond(&mut self, line: &str) -> Result<bool> {
        let args = line.split_whitespace();
        let cli = Cli::try_parse_from(args)?;
        debug!(command = ?cli.command, "repl command");

        match cli.command {
            Command::Query { sums } => {
                let reports = self.session.reports(sums)?;
                session::render(&mut self.out, &reports, &self.settings)?;
            }
            Command::All => {
                let reports = self.session.all()?;
                session::render(&mut self.out, &reports, &self.settings)?;
            }
            Command::Weights => {
                let w = self.session.weights();
                writeln!(self.out, "  Weights: {}, Total: {}", w, w.total())?;
                self.out.flush()?;
            }
            Command::Reachable => {
                let sums = self.session.table().reachable_sums().collect::<Vec<_>>();
                writeln!(self.out, "  Reachable: {:?}", sums)?;
                self.out.flush()?;
            }
            Command::Exit | Command::Quit => {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// `None` on end of input.
    fn readline<R: BufRead>(&mut self, input: &mut R) -> Result<Option<String>> {
        write!(self.out, "subset-sums> ")?;
        self.out.flush()?;
        let mut buffer = String::new();
        if input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use subset_sums::subset::Weights;

    fn repl(values: &[u64]) -> Repl<Vec<u8>> {
        let settings = Settings::default();
        let weights = Weights::new(values.to_vec()).unwrap();
        Repl {
            session: Session::new(weights, None, &settings).unwrap(),
            settings,
            out: Vec::new(),
        }
    }

    fn output(repl: &mut Repl<Vec<u8>>) -> String {
        String::from_utf8(std::mem::take(&mut repl.out)).unwrap()
    }

    #[test]
    fn test_query() {
        let mut r = repl(&[3, 4]);
        assert!(!r.respond("query 7 5 0").unwrap());
        assert_eq!(output(&mut r), "7: [4 3]\n5: -\n0: []\n");
    }

    #[test]
    fn test_weights_and_reachable() {
        let mut r = repl(&[2, 2]);
        r.respond("weights").unwrap();
        assert_eq!(output(&mut r), "  Weights: [2 2], Total: 4\n");
        r.respond("reachable").unwrap();
        assert_eq!(output(&mut r), "  Reachable: [0, 2, 4]\n");
    }

    #[test]
    fn test_errors_and_exit() {
        let mut r = repl(&[3, 4]);
        assert!(r.respond("query 8").is_err());
        assert!(r.respond("query").is_err());
        assert!(r.respond("bogus").is_err());
        assert!(r.respond("quit").unwrap());
        assert!(r.respond("exit").unwrap());
    }

    #[test]
    fn test_readline_end_of_input() {
        let mut r = repl(&[1]);
        let mut input = "all\n".as_bytes();
        assert_eq!(r.readline(&mut input).unwrap().as_deref(), Some("all\n"));
        assert_eq!(r.readline(&mut input).unwrap(), None);
        assert_eq!(output(&mut r), "subset-sums> subset-sums> ");
    }
}
