//! Shell loop: interactive line editor or script mode reading stdin.

use std::{
    borrow::Cow,
    io::{self, BufRead},
};

use dialoguer::theme::ColorfulTheme;
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Context as ReadlineContext, Editor, Helper,
};
use shell_words::split;

use crate::cli::{commands, output};
use crate::config::{app_data_dir, ConfigManager};
use crate::errors::{BankError, Result};
use crate::storage::JsonStore;

const COMMANDS: &[&str] = &[
    "create", "modify", "inquire", "deposit", "withdraw", "list", "delete", "help", "exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

/// Per-session state shared by the command handlers.
pub struct ShellContext {
    pub mode: CliMode,
    store: JsonStore,
    theme: ColorfulTheme,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self> {
        let base = app_data_dir();
        let config = ConfigManager::with_base_dir(base.clone())?.load()?;
        output::set_preferences(output::OutputPreferences {
            quiet_mode: config.quiet_mode,
        });
        let store = JsonStore::open(config.table_path(&base))?;
        tracing::info!(table = %store.path().display(), "account table opened");
        Ok(Self {
            mode,
            store,
            theme: ColorfulTheme::default(),
        })
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    pub fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }
}

/// Entry point for the binary. `BANK_CORE_CLI_SCRIPT` selects script mode.
pub fn run_cli() -> Result<()> {
    let mode = if std::env::var_os("BANK_CORE_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<()> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()
        .map_err(|err| BankError::Storage(err.to_string()))?;
    editor.set_helper(Some(CommandHelper::new(COMMANDS)));

    output::info("Banking record shell. Type `help` for commands.");

    loop {
        match editor.readline("bank> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                match handle_line(context, trimmed) {
                    LoopControl::Continue => {}
                    LoopControl::Exit => break,
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(BankError::Storage(err.to_string())),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match handle_line(context, &line) {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }
    Ok(())
}

/// Tokenizes one line and dispatches it. Operation failures are reported
/// and the loop continues; only `exit` ends the session.
fn handle_line(context: &mut ShellContext, line: &str) -> LoopControl {
    let tokens = match split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(format!("Cannot parse line: {err}"));
            return LoopControl::Continue;
        }
    };
    if tokens.is_empty() {
        return LoopControl::Continue;
    }

    let command = tokens[0].to_lowercase();
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

    let outcome = match command.as_str() {
        "create" => commands::create(context, &args),
        "modify" => commands::modify(context, &args),
        "inquire" | "balance" => commands::inquire(context, &args),
        "deposit" => commands::deposit(context, &args),
        "withdraw" => commands::withdraw(context, &args),
        "list" => commands::list(context),
        "delete" => commands::delete(context, &args),
        "help" => {
            commands::help();
            Ok(())
        }
        "exit" | "quit" => return LoopControl::Exit,
        unknown => {
            output::warning(format!("Unknown command `{unknown}`. Type `help`."));
            Ok(())
        }
    };

    if let Err(err) = outcome {
        output::error(err);
    }
    LoopControl::Continue
}

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: &[&'static str]) -> Self {
        let mut commands: Vec<String> = names.iter().map(|name| name.to_string()).collect();
        commands.sort();
        Self { commands }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        if prefix.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let needle = prefix.to_ascii_lowercase();
        let candidates = self
            .commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        let _ = ctx;
        Ok(ValidationResult::Valid(None))
    }
}
