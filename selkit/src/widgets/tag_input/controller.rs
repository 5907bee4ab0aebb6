//! Multi-select tag rules.
//!
//! [`TagInputController`] owns the query, the open flag and the chosen tags,
//! and enforces the cap and uniqueness of `chosen`. Mutating methods return
//! whether `chosen` changed so the caller knows when to report a new value.

use crate::error::SelectError;

use super::filter::substring_filter;

/// Interaction state of a multi-select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagState {
    pub query: String,
    pub open: bool,
    /// Chosen tags in insertion order, without duplicates.
    pub chosen: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TagInputController {
    state: TagState,
    options: Vec<String>,
    max: usize,
}

impl TagInputController {
    /// Create a controller over `options`, starting from `chosen`.
    ///
    /// Duplicates in `chosen` are dropped and it is cut down to `max`.
    pub fn new(options: Vec<String>, chosen: Vec<String>, max: usize) -> Self {
        let mut controller = Self {
            state: TagState::default(),
            options,
            max,
        };
        controller.set_chosen(chosen);
        controller
    }

    pub fn state(&self) -> &TagState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn chosen(&self) -> &[String] {
        &self.state.chosen
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn is_full(&self) -> bool {
        self.state.chosen.len() >= self.max
    }

    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
    }

    /// Lower the cap. Tags beyond it are dropped from the end.
    pub fn set_max(&mut self, max: usize) -> bool {
        self.max = max;
        let before = self.state.chosen.len();
        self.state.chosen.truncate(max);
        self.state.chosen.len() != before
    }

    /// Replace the chosen tags wholesale (host-driven, no notification).
    pub fn set_chosen(&mut self, chosen: Vec<String>) {
        self.state.chosen.clear();
        for tag in chosen {
            if self.state.chosen.len() >= self.max {
                break;
            }
            if !self.state.chosen.contains(&tag) {
                self.state.chosen.push(tag);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Query
    // -------------------------------------------------------------------------

    /// Replace the query. The panel is open exactly when the query is non-empty.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.state.query = text.into();
        self.state.open = !self.state.query.is_empty();
    }

    /// Close the panel, keeping the query.
    pub fn close(&mut self) {
        self.state.open = false;
    }

    /// Options matching the query that are not already chosen, in source order.
    pub fn filtered_candidates(&self) -> Vec<String> {
        substring_filter(&self.state.query, &self.options)
            .into_iter()
            .filter_map(|index| self.options.get(index))
            .filter(|option| !self.state.chosen.contains(option))
            .cloned()
            .collect()
    }

    // -------------------------------------------------------------------------
    // Chosen tags
    // -------------------------------------------------------------------------

    /// Append `option`, or explain why it was refused.
    pub fn try_add(&mut self, option: &str) -> Result<(), SelectError> {
        if self.is_full() {
            return Err(SelectError::CapReached { max: self.max });
        }
        if self.state.chosen.iter().any(|tag| tag == option) {
            return Err(SelectError::AlreadyChosen(option.to_string()));
        }
        self.state.chosen.push(option.to_string());
        self.state.query.clear();
        self.state.open = false;
        Ok(())
    }

    /// Append `option`. Silently refused at the cap or when already chosen.
    pub fn add(&mut self, option: &str) -> bool {
        self.try_add(option).is_ok()
    }

    /// Remove the first occurrence of `option`.
    pub fn remove(&mut self, option: &str) -> bool {
        match self.state.chosen.iter().position(|tag| tag == option) {
            Some(index) => {
                self.state.chosen.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the most recently added tag.
    pub fn remove_last(&mut self) -> bool {
        self.state.chosen.pop().is_some()
    }

    /// Turn the typed query into a tag.
    ///
    /// A query equal to a known option (ignoring case) uses that option's
    /// spelling; anything else gets its first character upper-cased. The
    /// query is cleared even when nothing is added. An all-blank query is
    /// left alone.
    pub fn commit_free_text(&mut self) -> bool {
        let text = self.state.query.trim();
        if text.is_empty() {
            return false;
        }
        let tag = self.canonical(text);
        let added = self.add(&tag);
        self.state.query.clear();
        self.state.open = false;
        added
    }

    fn canonical(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        if let Some(option) = self
            .options
            .iter()
            .find(|option| option.to_lowercase() == lowered)
        {
            return option.clone();
        }
        capitalize(text)
    }
}

/// Upper-case the first character, leaving the rest as typed.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
