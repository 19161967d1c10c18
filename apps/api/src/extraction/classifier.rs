//! Line classifier: a single-pass accumulator driven by an ordered rule table.
//!
//! Each non-blank trimmed line is tested against the rules top to bottom; the
//! first rule whose predicate matches applies its action and the rest are
//! skipped. Lines matching no rule are dropped. The priority order lives in
//! the rule slice itself, so it can be inspected and tested directly.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

static YEAR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").expect("year regex"));

/// `, XX` (state code) or `, Word` (city-like token).
static LOCATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r",\s*[A-Z]{2}|,\s*[A-Z][a-z]+").expect("location regex")
});

/// Predicate shared by the education and experience tables.
pub fn has_year(line: &str) -> bool {
    YEAR_REGEX.is_match(line)
}

/// Predicate shared by the education and experience tables.
pub fn looks_like_location(line: &str) -> bool {
    LOCATION_REGEX.is_match(line)
}

/// An entry type that can be built line by line.
pub trait SectionEntry: Default {
    /// True once the entry carries its identifying fields and is worth emitting.
    fn is_anchored(&self) -> bool;
}

/// One `(predicate, action)` row of a classifier table.
pub struct LineRule<E> {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub apply: fn(&mut Accumulator<E>, &str),
}

/// The in-progress entry plus everything flushed so far.
#[derive(Debug)]
pub struct Accumulator<E> {
    current: E,
    entries: Vec<E>,
}

impl<E: SectionEntry> Default for Accumulator<E> {
    fn default() -> Self {
        Self {
            current: E::default(),
            entries: Vec::new(),
        }
    }
}

impl<E: SectionEntry> Accumulator<E> {
    pub fn current(&self) -> &E {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut E {
        &mut self.current
    }

    /// Starts a fresh entry. When `flush` is set the old one is committed,
    /// otherwise it is discarded.
    pub fn restart(&mut self, flush: bool) {
        let previous = std::mem::take(&mut self.current);
        if flush {
            self.entries.push(previous);
        }
    }

    /// Final flush: the trailing entry is kept only if anchored.
    pub fn finish(mut self) -> Vec<E> {
        if self.current.is_anchored() {
            self.entries.push(self.current);
        }
        self.entries
    }
}

/// Runs `rules` over every non-blank trimmed line of `segment`.
pub fn classify_lines<E: SectionEntry>(segment: &str, rules: &[LineRule<E>]) -> Vec<E> {
    let mut acc = Accumulator::default();
    for line in segment.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(rule) = rules.iter().find(|rule| (rule.matches)(line)) {
            trace!(rule = rule.name, line, "line classified");
            (rule.apply)(&mut acc, line);
        }
    }
    acc.finish()
}

/// Name of the first rule that would claim `line`, if any.
#[cfg(test)]
pub fn matching_rule<'r, E>(line: &str, rules: &'r [LineRule<E>]) -> Option<&'r str> {
    rules
        .iter()
        .find(|rule| (rule.matches)(line))
        .map(|rule| rule.name)
}
