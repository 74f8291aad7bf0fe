//! Command implementations for the simplifier CLI.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use log::warn;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SimplifierConfig;
use crate::error::{Result, SimplifierError};
use crate::simplifier::TextSimplifier;
use crate::source::{SourceKind, source_exists};

/// Execute a CLI command.
pub fn execute_command(args: SimplifierArgs) -> Result<()> {
    let config = resolve_config(&args)?;

    match &args.command {
        Command::Swap(swap_args) => {
            swap_text(swap_args, config, &args, &mut io::stdout().lock())
        }
        Command::Interactive => {
            let simplifier = TextSimplifier::with_config(config);
            let stdin = io::stdin();
            let stdout = io::stdout();
            InteractiveSession::new(&simplifier, stdin.lock(), stdout.lock(), &args).run()
        }
        Command::Inspect(inspect_args) => {
            inspect(inspect_args, config, &args, &mut io::stdout().lock())
        }
    }
}

/// Combine the optional config file with the source path flags.
fn resolve_config(args: &SimplifierArgs) -> Result<SimplifierConfig> {
    let config = SimplifierConfig::load_or_default(args.config.as_deref())?
        .with_overrides(args.dictionary.clone(), args.word_list.clone());
    config.validate()?;
    Ok(config)
}

/// Simplify text passed on the command line.
fn swap_text<W: Write>(
    swap_args: &SwapArgs,
    config: SimplifierConfig,
    cli_args: &SimplifierArgs,
    out: &mut W,
) -> Result<()> {
    let simplifier = TextSimplifier::new();
    simplifier.configure(config)?;

    let tokens = simplifier.simplify(&swap_args.joined_text())?;
    write_swap_result(out, &SwapResult::new(tokens), cli_args)
}

/// Show what a pair of source files builds.
fn inspect<W: Write>(
    inspect_args: &InspectArgs,
    config: SimplifierConfig,
    cli_args: &SimplifierArgs,
    out: &mut W,
) -> Result<()> {
    let simplifier = TextSimplifier::new();
    simplifier.configure(config.clone())?;
    let thesaurus = simplifier.thesaurus().ok_or(SimplifierError::NotConfigured)?;

    let result = InspectResult::new(
        config.dictionary_file.display().to_string(),
        config.word_list_file.display().to_string(),
        &thesaurus,
        inspect_args.entries,
    );
    write_inspect_result(out, &result, cli_args)
}

/// Console loop: choose source files, then simplify one line at a time.
///
/// Input `q` quits and `c` returns to source file selection. End of input
/// behaves like `q`.
pub struct InteractiveSession<'a, R, W> {
    simplifier: &'a TextSimplifier,
    input: R,
    output: W,
    args: &'a SimplifierArgs,
}

impl<'a, R: BufRead, W: Write> InteractiveSession<'a, R, W> {
    pub fn new(simplifier: &'a TextSimplifier, input: R, output: W, args: &'a SimplifierArgs) -> Self {
        InteractiveSession {
            simplifier,
            input,
            output,
            args,
        }
    }

    pub fn run(mut self) -> Result<()> {
        self.banner()?;

        if !self.configure()? {
            return self.goodbye();
        }

        loop {
            self.info("> Enter text below to simplify.")?;
            self.info("> Enter \"q\" at any time to quit.")?;
            self.info("> Enter \"c\" at any time to configure Text Simplifier.\n")?;

            let Some(line) = self.read_line()? else {
                return self.goodbye();
            };

            match line.as_str() {
                "q" => return self.goodbye(),
                "c" => {
                    if !self.configure()? {
                        return self.goodbye();
                    }
                }
                text => {
                    let tokens = self.simplifier.simplify(text)?;
                    writeln!(self.output)?;
                    write_swap_result(&mut self.output, &SwapResult::new(tokens), self.args)?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    /// Select both source files and build. Returns `false` if input ran out.
    fn configure(&mut self) -> Result<bool> {
        loop {
            let current = self.simplifier.config();

            let Some(dictionary_file) =
                self.choose_source(SourceKind::Dictionary, &current.dictionary_file)?
            else {
                return Ok(false);
            };
            let Some(word_list_file) =
                self.choose_source(SourceKind::WordList, &current.word_list_file)?
            else {
                return Ok(false);
            };

            let config = SimplifierConfig {
                dictionary_file,
                word_list_file,
            };

            match self.simplifier.configure(config) {
                Ok(rebuilt) => {
                    if rebuilt {
                        self.info("> Initialised new Thesaurus.")?;
                    } else {
                        self.info("> Source files unchanged, keeping current Thesaurus.")?;
                    }
                    self.success("> Done!\n")?;
                    return Ok(true);
                }
                Err(e) => {
                    warn!("Configuration failed: {e}");
                    self.error(&format!("> !ERROR: {e}"))?;
                    self.info("> Please select valid source files to continue.\n")?;
                }
            }
        }
    }

    /// Prompt until an existing file is chosen. `None` means input ran out.
    fn choose_source(&mut self, kind: SourceKind, current: &Path) -> Result<Option<PathBuf>> {
        loop {
            self.info(&format!(
                "> Enter the path to a new {kind} file below, or enter \"a\" to accept current {kind} file."
            ))?;
            self.info(&format!("> Current {kind} file: {}\n", current.display()))?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            if line == "a" {
                if source_exists(current) {
                    self.success(&format!(
                        "> Current {kind} file accepted: {}\n",
                        current.display()
                    ))?;
                    return Ok(Some(current.to_path_buf()));
                }
                self.error(&format!(
                    "> !ERROR: Current {kind} file not found at: {}",
                    current.display()
                ))?;
            } else if source_exists(&line) {
                self.success(&format!("> {kind} file updated: {line}\n"))?;
                return Ok(Some(PathBuf::from(line)));
            } else {
                self.error(&format!("> !ERROR: No file found at: {line}"))?;
            }
            self.info(&format!(
                "> Please enter the path to a valid {kind} file to continue.\n"
            ))?;
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }

    fn banner(&mut self) -> Result<()> {
        if self.args.verbosity() == 0 {
            return Ok(());
        }
        let rule = "*".repeat(51);
        self.info(&rule)?;
        self.info(&format!("*{:^49}*", "Text Simplifier"))?;
        self.info(&format!("{rule}\n"))
    }

    fn goodbye(&mut self) -> Result<()> {
        self.info("> Now exiting Text Simplifier.")?;
        self.info("> Goodbye!\n")
    }

    fn info(&mut self, message: &str) -> Result<()> {
        if self.args.verbosity() > 0 {
            writeln!(self.output, "{}", message.cyan())?;
        }
        Ok(())
    }

    fn success(&mut self, message: &str) -> Result<()> {
        if self.args.verbosity() > 0 {
            writeln!(self.output, "{}", message.green())?;
        }
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message.red())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    fn args() -> SimplifierArgs {
        colored::control::set_override(false);
        SimplifierArgs::try_parse_from(["simplifier", "--no-color", "interactive"]).unwrap()
    }

    fn sources(dir: &Path) -> (PathBuf, PathBuf) {
        let dictionary = dir.join("dictionary.txt");
        let word_list = dir.join("word_list.txt");
        fs::write(&dictionary, "animal\nhouse\n").unwrap();
        fs::write(&word_list, "beast,animal,creature\ncabin,house\n").unwrap();
        (dictionary, word_list)
    }

    fn run_session(simplifier: &TextSimplifier, script: &str) -> String {
        let args = args();
        let mut output = Vec::new();
        InteractiveSession::new(simplifier, Cursor::new(script.to_string()), &mut output, &args)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_accepts_current_files_and_simplifies() {
        let dir = TempDir::new().unwrap();
        let (dictionary_file, word_list_file) = sources(dir.path());
        let simplifier = TextSimplifier::with_config(SimplifierConfig {
            dictionary_file,
            word_list_file,
        });

        let output = run_session(&simplifier, "a\na\nThe beast lives in a cabin\nq\n");

        assert!(output.contains("Current Dictionary file accepted"));
        assert!(output.contains("Current Word List file accepted"));
        assert!(output.contains("the animal lives in a house"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_session_reprompts_for_missing_file() {
        let dir = TempDir::new().unwrap();
        let (dictionary_file, word_list_file) = sources(dir.path());
        let missing = dir.path().join("missing.txt");
        let simplifier = TextSimplifier::with_config(SimplifierConfig {
            dictionary_file: missing.clone(),
            word_list_file: missing.clone(),
        });

        let script = format!(
            "a\n{}\n{}\n{}\nbeast\nq\n",
            missing.display(),
            dictionary_file.display(),
            word_list_file.display()
        );
        let output = run_session(&simplifier, &script);

        assert!(output.contains(&format!(
            "Current Dictionary file not found at: {}",
            missing.display()
        )));
        assert!(output.contains(&format!("No file found at: {}", missing.display())));
        assert!(output.contains("Word List file updated"));
        assert!(output.contains("animal"));
        assert_eq!(simplifier.config().dictionary_file, dictionary_file);
    }

    #[test]
    fn test_session_reconfigure_with_c() {
        let dir = TempDir::new().unwrap();
        let (dictionary_file, word_list_file) = sources(dir.path());
        let other = dir.path().join("other_words.txt");
        fs::write(&other, "hut,house\n").unwrap();

        let simplifier = TextSimplifier::with_config(SimplifierConfig {
            dictionary_file,
            word_list_file,
        });
        let script = format!("a\na\nc\na\n{}\nhut cabin\nq\n", other.display());
        let output = run_session(&simplifier, &script);

        assert!(output.contains("house cabin"));
    }

    #[test]
    fn test_session_ends_on_eof() {
        let simplifier = TextSimplifier::new();
        let output = run_session(&simplifier, "");

        assert!(output.contains("Goodbye!"));
        assert!(!simplifier.is_configured());
    }

    #[test]
    fn test_session_reports_rebuild_after_in_memory_build() {
        let dir = TempDir::new().unwrap();
        let (dictionary_file, word_list_file) = sources(dir.path());
        let simplifier = TextSimplifier::with_config(SimplifierConfig {
            dictionary_file,
            word_list_file,
        });
        simplifier.configure_from_sources("animal", "critter,animal");

        let output = run_session(&simplifier, "a\na\nc\na\na\nq\n");

        let first = output.find("Initialised new Thesaurus").unwrap();
        let kept = output.find("Source files unchanged").unwrap();
        assert!(first < kept);
        assert_eq!(output.matches("Initialised new Thesaurus").count(), 1);
    }

    fn command_args(dir: &Path, command: &[&str]) -> SimplifierArgs {
        colored::control::set_override(false);
        let (dictionary_file, word_list_file) = sources(dir);
        let dictionary = dictionary_file.display().to_string();
        let word_list = word_list_file.display().to_string();

        let mut argv = vec![
            "simplifier",
            "--no-color",
            "-d",
            dictionary.as_str(),
            "-w",
            word_list.as_str(),
        ];
        argv.extend_from_slice(command);
        SimplifierArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_swap_command() {
        let dir = TempDir::new().unwrap();
        let args = command_args(dir.path(), &["-q", "swap", "The", "Beast", "lives", "in", "a", "cabin"]);
        let Command::Swap(swap_args) = &args.command else {
            panic!("Expected swap command");
        };

        let mut out = Vec::new();
        swap_text(swap_args, resolve_config(&args).unwrap(), &args, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.trim_end(), "the animal lives in a house");
    }

    #[test]
    fn test_swap_command_json() {
        let dir = TempDir::new().unwrap();
        let args = command_args(dir.path(), &["-f", "json", "swap", "creature"]);
        let Command::Swap(swap_args) = &args.command else {
            panic!("Expected swap command");
        };

        let mut out = Vec::new();
        swap_text(swap_args, resolve_config(&args).unwrap(), &args, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["text"], "animal");
        assert_eq!(value["matched"], 1);
    }

    #[test]
    fn test_inspect_command() {
        let dir = TempDir::new().unwrap();
        let args = command_args(dir.path(), &["inspect", "--entries"]);
        let Command::Inspect(inspect_args) = &args.command else {
            panic!("Expected inspect command");
        };

        let mut out = Vec::new();
        inspect(inspect_args, resolve_config(&args).unwrap(), &args, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Dictionary words: 2"));
        assert!(text.contains("Mapped words:     5"));
        assert!(text.contains("cabin -> house"));
        assert!(text.contains("creature -> animal"));
    }

    #[test]
    fn test_swap_command_missing_source() {
        let dir = TempDir::new().unwrap();
        let mut args = command_args(dir.path(), &["swap", "beast"]);
        args.word_list = Some(dir.path().join("missing.txt"));
        let Command::Swap(swap_args) = &args.command else {
            panic!("Expected swap command");
        };

        let mut out = Vec::new();
        let error = swap_text(swap_args, resolve_config(&args).unwrap(), &args, &mut out).unwrap_err();
        assert!(error.is_not_found());
        assert!(out.is_empty());
    }
}
