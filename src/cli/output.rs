//! Output formatting for CLI commands.

use std::io::Write;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SimplifierArgs};
use crate::error::Result;
use crate::thesaurus::Thesaurus;
use crate::thesaurus::swap::{SwappedToken, matched_count, render_plain};

/// Result structure for text simplification.
#[derive(Debug, Serialize, Deserialize)]
pub struct SwapResult {
    pub text: String,
    pub matched: usize,
    pub tokens: Vec<SwappedToken>,
}

impl SwapResult {
    pub fn new(tokens: Vec<SwappedToken>) -> Self {
        SwapResult {
            text: render_plain(&tokens),
            matched: matched_count(&tokens),
            tokens,
        }
    }
}

/// One `word -> canonical` pair.
#[derive(Debug, Serialize, Deserialize)]
pub struct MappingEntry {
    pub word: String,
    pub canonical: String,
}

/// Thesaurus summary.
#[derive(Debug, Serialize, Deserialize)]
pub struct InspectResult {
    pub dictionary_file: String,
    pub word_list_file: String,
    pub dictionary_words: usize,
    pub mapped_words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<MappingEntry>>,
}

impl InspectResult {
    pub fn new(
        dictionary_file: String,
        word_list_file: String,
        thesaurus: &Thesaurus,
        with_entries: bool,
    ) -> Self {
        let entries = with_entries.then(|| {
            thesaurus
                .word_map()
                .iter()
                .map(|(word, canonical)| MappingEntry {
                    word: word.to_string(),
                    canonical: canonical.to_string(),
                })
                .collect()
        });

        InspectResult {
            dictionary_file,
            word_list_file,
            dictionary_words: thesaurus.dictionary().len(),
            mapped_words: thesaurus.word_map().len(),
            entries,
        }
    }
}

/// Render tokens with matched words in green and unmatched words in red.
pub fn render_colored(tokens: &[SwappedToken]) -> String {
    tokens
        .iter()
        .map(|token| {
            if token.matched {
                token.text.green().to_string()
            } else {
                token.text.red().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write a simplification result in the selected format.
pub fn write_swap_result<W: Write>(
    out: &mut W,
    result: &SwapResult,
    args: &SimplifierArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                writeln!(out, "{}", "Simplified Text: Green".green())?;
                writeln!(out, "{}", "Unsimplified Text: Red".red())?;
                writeln!(out)?;
            }
            writeln!(out, "{}", render_colored(&result.tokens))?;
            if args.verbosity() > 1 {
                writeln!(out)?;
                writeln!(
                    out,
                    "{} of {} words simplified",
                    result.matched,
                    result.tokens.len()
                )?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, result, args),
    }
}

/// Write a thesaurus summary in the selected format.
pub fn write_inspect_result<W: Write>(
    out: &mut W,
    result: &InspectResult,
    args: &SimplifierArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            writeln!(out, "Thesaurus:")?;
            writeln!(out, "══════════")?;
            writeln!(out, "Dictionary file:  {}", result.dictionary_file)?;
            writeln!(out, "Word list file:   {}", result.word_list_file)?;
            writeln!(out, "Dictionary words: {}", result.dictionary_words)?;
            writeln!(out, "Mapped words:     {}", result.mapped_words)?;

            if let Some(entries) = &result.entries {
                writeln!(out)?;
                for entry in entries {
                    writeln!(out, "{} -> {}", entry.word, entry.canonical)?;
                }
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, result, args),
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, result: &T, args: &SimplifierArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn args(extra: &[&str]) -> SimplifierArgs {
        let mut argv = vec!["simplifier", "--no-color"];
        argv.extend_from_slice(extra);
        argv.push("interactive");
        SimplifierArgs::try_parse_from(argv).unwrap()
    }

    fn swap_result() -> SwapResult {
        let thesaurus = Thesaurus::from_sources("animal\nhouse", "beast,animal\ncabin,house");
        SwapResult::new(thesaurus.swap_text("The beast in a cabin"))
    }

    #[test]
    fn test_swap_result_summary() {
        let result = swap_result();

        assert_eq!(result.text, "the animal in a house");
        assert_eq!(result.matched, 2);
        assert_eq!(result.tokens.len(), 5);
    }

    #[test]
    fn test_json_swap_output() {
        let mut out = Vec::new();
        write_swap_result(&mut out, &swap_result(), &args(&["-f", "json"])).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["text"], "the animal in a house");
        assert_eq!(value["matched"], 2);
        assert_eq!(value["tokens"][1]["text"], "animal");
        assert_eq!(value["tokens"][1]["matched"], true);
    }

    #[test]
    fn test_human_swap_output_contains_words() {
        let mut out = Vec::new();
        write_swap_result(&mut out, &swap_result(), &args(&["-q"])).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("animal"));
        assert!(text.contains("house"));
        assert!(!text.contains("Simplified Text"));
    }

    #[test]
    fn test_inspect_output_entries() {
        let thesaurus = Thesaurus::from_sources("animal", "beast,animal");
        let result = InspectResult::new("d.txt".into(), "w.txt".into(), &thesaurus, true);

        let mut out = Vec::new();
        write_inspect_result(&mut out, &result, &args(&[])).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Dictionary words: 1"));
        assert!(text.contains("Mapped words:     2"));
        assert!(text.contains("beast -> animal"));
    }

    #[test]
    fn test_inspect_json_omits_entries_when_not_requested() {
        let thesaurus = Thesaurus::from_sources("animal", "beast,animal");
        let result = InspectResult::new("d.txt".into(), "w.txt".into(), &thesaurus, false);

        let mut out = Vec::new();
        write_inspect_result(&mut out, &result, &args(&["-f", "json"])).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["mapped_words"], 2);
        assert!(value.get("entries").is_none());
    }
}
