//! Repeated-noun highlighting pipeline.
//!
//! # Responsibility
//! - Count noun repetitions, color repeated nouns, render and sanitize.
//! - Own the color assignments for one session.
//!
//! # Invariants
//! - Markup leaving this module has always been through [`sanitize`].
//! - Only nouns repeated in the current text are wrapped; older
//!   assignments are kept for reuse but not rendered.

pub mod bionic;
pub mod color;
pub mod matcher;
pub mod render;
pub mod repeated;
pub mod sanitize;

use crate::config::{ConfigError, HighlightConfig};
use crate::model::color::HslColor;
use crate::nlp::{extract_nouns_with, LexiconTagger, PartOfSpeechTagger};
use color::ColorAssignments;
use log::debug;
use render::render_markup;
use repeated::find_repeated_nouns;
use sanitize::sanitize;
use std::collections::BTreeMap;
use std::time::Instant;

/// Display-ready result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    markup: String,
    repeated: Vec<String>,
    colors: BTreeMap<String, HslColor>,
}

impl Highlight {
    /// Sanitized markup.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Repeated nouns, sorted.
    pub fn repeated(&self) -> &[String] {
        &self.repeated
    }

    /// Colors of the repeated nouns in this run.
    ///
    /// Every repeated noun is colored, but a noun whose occurrences all sit
    /// inside a longer repeated noun ("ice" in "ice cream") has no span of
    /// its own in [`Highlight::markup`].
    pub fn colors(&self) -> &BTreeMap<String, HslColor> {
        &self.colors
    }

    pub fn into_markup(self) -> String {
        self.markup
    }
}

/// Runs extraction, counting, coloring, rendering and sanitizing.
pub struct Highlighter {
    config: HighlightConfig,
    colors: ColorAssignments,
    tagger: Box<dyn PartOfSpeechTagger>,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::build(HighlightConfig::default(), Box::new(LexiconTagger))
    }
}

impl Highlighter {
    /// # Errors
    /// - `ConfigError::OutOfRange` when `config` fails validation.
    pub fn new(config: HighlightConfig) -> Result<Self, ConfigError> {
        Self::with_tagger(config, Box::new(LexiconTagger))
    }

    /// Uses a caller-provided tagger instead of [`LexiconTagger`].
    pub fn with_tagger(
        config: HighlightConfig,
        tagger: Box<dyn PartOfSpeechTagger>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, tagger))
    }

    fn build(config: HighlightConfig, tagger: Box<dyn PartOfSpeechTagger>) -> Self {
        Self {
            colors: ColorAssignments::new(&config),
            config,
            tagger,
        }
    }

    pub fn highlight(&mut self, text: &str, bionic_reading: bool) -> Highlight {
        let started_at = Instant::now();

        let nouns = extract_nouns_with(self.tagger.as_ref(), text);
        let repeated = find_repeated_nouns(text, &nouns, self.config.min_occurrences);
        let colors = self.colors.assign_all(&repeated);
        let markup = sanitize(&render_markup(text, &colors, bionic_reading, &self.config));

        debug!(
            "event=highlight module=highlight status=ok chars={} nouns={} repeated={} assigned={} bionic={} duration_us={}",
            text.chars().count(),
            nouns.len(),
            repeated.len(),
            self.colors.len(),
            bionic_reading,
            started_at.elapsed().as_micros()
        );

        Highlight {
            markup,
            repeated,
            colors,
        }
    }

    pub fn colors(&self) -> &ColorAssignments {
        &self.colors
    }

    pub fn reset_colors(&mut self) {
        self.colors.reset();
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }
}
