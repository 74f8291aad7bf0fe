//! Text simplifier service.
//!
//! [`TextSimplifier`] owns the currently active [`Thesaurus`] and the source
//! paths it was built from. Reconfiguration builds a complete new thesaurus
//! first and only then publishes it, so a reader holding the previous
//! `Arc<Thesaurus>` keeps a consistent view and a failed rebuild leaves the
//! active thesaurus untouched.
//!
//! # Examples
//!
//! ```
//! use simplifier::simplifier::TextSimplifier;
//! use simplifier::thesaurus::swap::render_plain;
//!
//! let simplifier = TextSimplifier::new();
//! simplifier.configure_from_sources("animal\nhouse", "beast,animal\ncabin,house");
//!
//! let tokens = simplifier.simplify("A beast in a cabin").unwrap();
//! assert_eq!(render_plain(&tokens), "a animal in a house");
//! ```

use std::sync::Arc;

use log::{debug, info};
use parking_lot::RwLock;

use crate::config::SimplifierConfig;
use crate::error::{Result, SimplifierError};
use crate::source::{SourceKind, read_source};
use crate::thesaurus::Thesaurus;
use crate::thesaurus::swap::SwappedToken;

#[derive(Debug, Default)]
struct State {
    config: SimplifierConfig,
    thesaurus: Option<Arc<Thesaurus>>,
    // Whether `thesaurus` was read from the files named in `config`.
    from_files: bool,
}

/// Swaps synonyms in text for canonical words using a replaceable thesaurus.
#[derive(Debug, Default)]
pub struct TextSimplifier {
    state: RwLock<State>,
}

impl TextSimplifier {
    /// Create an unconfigured simplifier pointing at the default source paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unconfigured simplifier pointing at the given source paths.
    pub fn with_config(config: SimplifierConfig) -> Self {
        TextSimplifier {
            state: RwLock::new(State {
                config,
                thesaurus: None,
                from_files: false,
            }),
        }
    }

    /// Source paths of the active thesaurus, or the pending paths if none is built yet.
    pub fn config(&self) -> SimplifierConfig {
        self.state.read().config.clone()
    }

    pub fn is_configured(&self) -> bool {
        self.state.read().thesaurus.is_some()
    }

    /// The active thesaurus, if one has been built.
    pub fn thesaurus(&self) -> Option<Arc<Thesaurus>> {
        self.state.read().thesaurus.clone()
    }

    /// Build from the given source files and publish the result.
    ///
    /// Nothing is rebuilt when the paths match the active ones and a thesaurus
    /// already exists. Returns whether a new thesaurus was published. On error
    /// the previous state is kept.
    pub fn configure(&self, config: SimplifierConfig) -> Result<bool> {
        {
            let state = self.state.read();
            if state.thesaurus.is_some() && state.from_files && state.config == config {
                debug!("Configuration unchanged, keeping current thesaurus");
                return Ok(false);
            }
        }

        let thesaurus = load_thesaurus(&config)?;
        self.publish(Some(config), true, thesaurus);
        Ok(true)
    }

    /// Rebuild from the current source paths, whether or not they changed.
    ///
    /// The paths read are published together with the result, so the active
    /// paths always name the files the active thesaurus came from.
    pub fn reload(&self) -> Result<()> {
        let config = self.config();
        let thesaurus = load_thesaurus(&config)?;
        self.publish(Some(config), true, thesaurus);
        Ok(())
    }

    /// Build from in-memory source text and publish the result.
    ///
    /// The configured paths are left as they are, and the next [`configure`]
    /// call reads the files even if the paths match.
    ///
    /// [`configure`]: TextSimplifier::configure
    pub fn configure_from_sources(&self, dictionary_text: &str, word_list_text: &str) {
        let thesaurus = Thesaurus::from_sources(dictionary_text, word_list_text);
        self.publish(None, false, thesaurus);
    }

    /// Swap every space-separated word of `text`.
    pub fn simplify(&self, text: &str) -> Result<Vec<SwappedToken>> {
        let thesaurus = self.thesaurus().ok_or(SimplifierError::NotConfigured)?;
        Ok(thesaurus.swap_text(text))
    }

    fn publish(&self, config: Option<SimplifierConfig>, from_files: bool, thesaurus: Thesaurus) {
        info!(
            "Built thesaurus: {} dictionary words, {} mapped words",
            thesaurus.dictionary().len(),
            thesaurus.word_map().len()
        );

        let mut state = self.state.write();
        if let Some(config) = config {
            state.config = config;
        }
        state.thesaurus = Some(Arc::new(thesaurus));
        state.from_files = from_files;
    }
}

fn load_thesaurus(config: &SimplifierConfig) -> Result<Thesaurus> {
    let dictionary_text = read_source(&config.dictionary_file, SourceKind::Dictionary)?;
    let word_list_text = read_source(&config.word_list_file, SourceKind::WordList)?;
    Ok(Thesaurus::from_sources(&dictionary_text, &word_list_text))
}
