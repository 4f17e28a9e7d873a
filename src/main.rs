use anyhow::{anyhow, bail, Context, Result};
use log::debug;

use user_fixture::{add, config::DEFAULT_LOG_FILTER, Stringer, User};

const USAGE: &str = "usage: user-fixture add <a> <b> | user <name> <age> [--json]";

/// A parsed command line.
#[derive(Debug)]
enum Command {
    Add { a: i64, b: i64 },
    User { user: User, json: bool },
}

impl Command {
    fn parse(args: &[String]) -> Result<Self> {
        let Some((command, rest)) = args.split_first() else {
            bail!("Missing command\n{USAGE}");
        };

        match command.as_str() {
            "add" => {
                let [a, b] = rest else {
                    bail!("add expects two integers\n{USAGE}");
                };
                Ok(Command::Add {
                    a: parse_int(a)?,
                    b: parse_int(b)?,
                })
            }
            "user" => {
                let (json, rest) = match rest {
                    [head @ .., flag] if flag == "--json" => (true, head),
                    _ => (false, rest),
                };
                let [name, age] = rest else {
                    bail!("user expects a name and an age\n{USAGE}");
                };
                Ok(Command::User {
                    user: User::new(name.as_str(), parse_int(age)?),
                    json,
                })
            }
            other => Err(anyhow!("Unknown command: {}\n{USAGE}", other)),
        }
    }

    fn execute(&self) -> Result<String> {
        match self {
            Command::Add { a, b } => Ok(add(*a, *b).to_string()),
            Command::User { user, json: true } => {
                serde_json::to_string(user).context("Failed to serialize user")
            }
            Command::User { user, json: false } => Ok(user.represent()),
        }
    }
}

fn parse_int(value: &str) -> Result<i64> {
    value
        .parse()
        .with_context(|| format!("Invalid integer: {value}"))
}

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;
    debug!("Running {:?}", command);

    println!("{}", command.execute()?);

    Ok(())
}
