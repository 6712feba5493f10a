//! Keyword-based classification of research-article titles.
//!
//! The core of aortascreen: an ordered, immutable [`PatternSet`] of
//! word-boundary-anchored phrase patterns, and a [`TitleClassifier`] that
//! tests a title against them with first-match-wins short-circuiting.
//! Matching is case-insensitive and whitespace-normalized, so spreadsheet
//! titles with stray spacing or capitalization still hit.

mod lexicon;

use regex::Regex;
use tracing::debug;

use aortascreen_shared::{AortascreenError, Category, Result};

pub use lexicon::BUILTIN_PHRASES;

// ---------------------------------------------------------------------------
// PatternSet
// ---------------------------------------------------------------------------

/// One compiled phrase pattern, keeping the source phrase for display.
#[derive(Debug, Clone)]
struct PatternEntry {
    phrase: String,
    regex: Regex,
}

/// An ordered, immutable set of compiled phrase patterns.
///
/// Each phrase compiles to `\b<phrase>\b` with apostrophes made optional, so
/// `"takayasu's arteritis"` matches both `Takayasu's Arteritis` and
/// `Takayasus Arteritis`, while `"aortic"` never matches inside `aorticize`.
#[derive(Debug, Clone)]
pub struct PatternSet {
    entries: Vec<PatternEntry>,
}

impl PatternSet {
    /// The full built-in aortic-disease lexicon, in its published order.
    pub fn builtin() -> Self {
        Self::from_phrases(lexicon::BUILTIN_PHRASES)
            .expect("built-in lexicon compiles")
    }

    /// The built-in lexicon followed by user-supplied extra phrases.
    pub fn with_extras(extra: &[String]) -> Result<Self> {
        let phrases = lexicon::BUILTIN_PHRASES
            .iter()
            .map(|p| p.to_string())
            .chain(extra.iter().cloned());
        Self::from_phrases(phrases)
    }

    /// Build a pattern set from any ordered phrase list.
    ///
    /// This is the injection seam: tests use small synthetic sets here
    /// instead of the full medical vocabulary. An empty list is valid and
    /// matches nothing.
    pub fn from_phrases<I, S>(phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        for phrase in phrases {
            let phrase = phrase.as_ref();
            entries.push(PatternEntry {
                phrase: phrase.to_string(),
                regex: compile_phrase(phrase)?,
            });
        }

        debug!(patterns = entries.len(), "compiled pattern set");
        Ok(Self { entries })
    }

    /// Source phrases in evaluation order.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.phrase.as_str())
    }

    /// Number of patterns in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compile a literal phrase into a word-boundary-anchored regex.
fn compile_phrase(phrase: &str) -> Result<Regex> {
    let normalized = normalize(phrase);
    if normalized.is_empty() {
        return Err(AortascreenError::config(format!(
            "empty pattern phrase: '{phrase}'"
        )));
    }

    // Phrases are literals: escape everything, then make apostrophes optional
    // so possessive forms match with or without the apostrophe.
    let escaped = regex::escape(&normalized).replace('\'', "'?");

    Regex::new(&format!(r"\b{escaped}\b")).map_err(|e| {
        AortascreenError::config(format!("pattern '{phrase}' failed to compile: {e}"))
    })
}

/// Normalize text for matching: collapse whitespace runs to single spaces,
/// map typographic apostrophes to ASCII, and lowercase.
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('\u{2019}', "'")
        .to_lowercase()
}

// ---------------------------------------------------------------------------
// TitleClassifier
// ---------------------------------------------------------------------------

/// Classifies a title by testing it against a [`PatternSet`] in order.
#[derive(Debug, Clone)]
pub struct TitleClassifier {
    patterns: PatternSet,
}

impl TitleClassifier {
    /// Build a classifier over the given pattern set.
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    /// Classify a cell value. Absent, empty, and whitespace-only cells are
    /// not text and classify as [`Category::Other`] without error.
    pub fn classify_cell(&self, value: Option<&str>) -> Category {
        match value {
            Some(text) if !text.trim().is_empty() => self.classify(text),
            _ => Category::Other,
        }
    }

    /// Classify a title: the first pattern that matches anywhere in the
    /// normalized text wins and returns [`Category::AorticDisease`];
    /// exhausting the set returns [`Category::Other`].
    ///
    /// Pure and deterministic. All patterns map to the same category, so
    /// set order affects evaluation cost only, never the result.
    pub fn classify(&self, title: &str) -> Category {
        let candidate = normalize(title);

        for entry in &self.patterns.entries {
            if entry.regex.is_match(&candidate) {
                return Category::AorticDisease;
            }
        }

        Category::Other
    }

    /// The pattern set this classifier evaluates.
    pub fn pattern_set(&self) -> &PatternSet {
        &self.patterns
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> TitleClassifier {
        TitleClassifier::new(PatternSet::builtin())
    }

    fn synthetic(phrases: &[&str]) -> TitleClassifier {
        TitleClassifier::new(PatternSet::from_phrases(phrases).expect("compile synthetic set"))
    }

    // --- Construction ---

    #[test]
    fn builtin_lexicon_compiles_in_order() {
        let set = PatternSet::builtin();
        assert_eq!(set.len(), BUILTIN_PHRASES.len());
        let phrases: Vec<&str> = set.phrases().collect();
        assert_eq!(phrases.as_slice(), BUILTIN_PHRASES);
    }

    #[test]
    fn extras_are_appended_after_builtins() {
        let set = PatternSet::with_extras(&["aortic coarctation".to_string()])
            .expect("compile with extras");
        assert_eq!(set.len(), BUILTIN_PHRASES.len() + 1);
        assert_eq!(set.phrases().last(), Some("aortic coarctation"));
    }

    #[test]
    fn blank_phrase_is_a_config_error() {
        let err = PatternSet::from_phrases(["   "]).unwrap_err();
        assert!(err.to_string().contains("empty pattern phrase"));
    }

    #[test]
    fn empty_set_is_valid_and_matches_nothing() {
        let classifier = synthetic(&[]);
        assert!(classifier.pattern_set().is_empty());
        assert_eq!(classifier.classify("aortic dissection"), Category::Other);
    }

    // --- Non-text handling ---

    #[test]
    fn absent_and_blank_cells_classify_as_other() {
        let classifier = builtin();
        assert_eq!(classifier.classify_cell(None), Category::Other);
        assert_eq!(classifier.classify_cell(Some("")), Category::Other);
        assert_eq!(classifier.classify_cell(Some("   \t ")), Category::Other);
    }

    #[test]
    fn text_cells_defer_to_classify() {
        let classifier = builtin();
        assert_eq!(
            classifier.classify_cell(Some("Acute aortic syndrome in pregnancy")),
            Category::AorticDisease
        );
    }

    // --- Matching semantics ---

    #[test]
    fn case_is_irrelevant() {
        let classifier = builtin();
        let title = "Outcomes After Thoracic Aortic Aneurysm Repair";
        let expected = classifier.classify(title);
        assert_eq!(expected, Category::AorticDisease);
        assert_eq!(classifier.classify(&title.to_uppercase()), expected);
        assert_eq!(classifier.classify(&title.to_lowercase()), expected);
    }

    #[test]
    fn word_boundaries_block_partial_word_matches() {
        let classifier = synthetic(&["aortic"]);
        assert_eq!(classifier.classify("aorticize the workflow"), Category::Other);
        assert_eq!(classifier.classify("an aortic emergency"), Category::AorticDisease);
    }

    #[test]
    fn phrase_inside_larger_words_does_not_match() {
        let classifier = builtin();
        // "penetrating ulcer" must not fire inside "nonpenetrating ulceration"
        assert_eq!(
            classifier.classify("Nonpenetrating ulceration of the gastric mucosa"),
            Category::Other
        );
        assert_eq!(
            classifier.classify("Penetrating ulcer of the descending aorta"),
            Category::AorticDisease
        );
    }

    #[test]
    fn internal_whitespace_runs_are_normalized() {
        let classifier = builtin();
        assert_eq!(
            classifier.classify("Acute  aortic   syndrome"),
            Category::AorticDisease
        );
        assert_eq!(
            classifier.classify("aortic\tdissection\nin the elderly"),
            Category::AorticDisease
        );
    }

    #[test]
    fn apostrophes_are_optional() {
        let classifier = builtin();
        assert_eq!(
            classifier.classify("Takayasu's Arteritis: A Case Series"),
            Category::AorticDisease
        );
        assert_eq!(
            classifier.classify("Takayasus arteritis in children"),
            Category::AorticDisease
        );
        // Typographic apostrophe, as exported by Google Sheets
        assert_eq!(
            classifier.classify("Takayasu\u{2019}s arteritis in children"),
            Category::AorticDisease
        );
    }

    #[test]
    fn result_is_independent_of_pattern_order() {
        let reversed: Vec<&str> = BUILTIN_PHRASES.iter().rev().copied().collect();
        let forward = builtin();
        let backward = synthetic(&reversed);

        for title in [
            "TEVAR for Blunt Aortic Injury",
            "A Randomized Trial of Beta-Blockers in Heart Failure",
            "Ruptured abdominal aortic aneurysm repair",
            "Spinal cord ischemia after open aortic repair",
        ] {
            assert_eq!(forward.classify(title), backward.classify(title), "{title}");
        }
    }

    #[test]
    fn classification_is_deterministic() {
        let classifier = builtin();
        let title = "Hybrid aortic repair with debranching";
        let first = classifier.classify(title);
        for _ in 0..3 {
            assert_eq!(classifier.classify(title), first);
        }
    }

    // --- Literal scenarios ---

    #[test]
    fn tevar_title_matches_full_phrase() {
        assert_eq!(
            builtin().classify("Outcomes of Thoracic Endovascular Aortic Repair in Elderly Patients"),
            Category::AorticDisease
        );
    }

    #[test]
    fn unrelated_cardiology_title_is_other() {
        assert_eq!(
            builtin().classify("A Randomized Trial of Beta-Blockers in Heart Failure"),
            Category::Other
        );
    }

    #[test]
    fn acronym_alone_matches() {
        assert_eq!(
            builtin().classify("TEVAR for Blunt Aortic Injury"),
            Category::AorticDisease
        );
    }

    #[test]
    fn broad_lexicon_entries_fire_without_aortic_context() {
        // Deliberate inclusions from the source lexicon
        assert_eq!(
            builtin().classify("Vascular stenting in peripheral disease"),
            Category::AorticDisease
        );
        assert_eq!(
            builtin().classify("Spinal cord ischemia biomarkers"),
            Category::AorticDisease
        );
    }
}
