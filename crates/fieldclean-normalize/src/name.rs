//! Name repair and validation.
//!
//! Upstream exports sometimes break a name across whitespace ("Mat eus").
//! Repair is lossy: it cannot tell a broken word from a legitimate
//! multi-word name, which is why the rule is a swappable [`NameRepairMode`].

use fieldclean_model::{FieldKind, NameOptions, NameRepairMode, Verdict};

use crate::handler::FieldNormalizer;
use crate::messages;

/// Apply a repair strategy to a name.
pub fn repair_name(mode: NameRepairMode, value: &str) -> String {
    match mode {
        NameRepairMode::RemoveAllWhitespace => {
            value.chars().filter(|ch| !ch.is_whitespace()).collect()
        }
        NameRepairMode::JoinLowercaseFragments => join_lowercase_fragments(value),
    }
}

/// Drop a lone space between two lowercase letters; collapse other runs.
fn join_lowercase_fragments(value: &str) -> String {
    let chars: Vec<char> = value.trim().chars().collect();
    let mut repaired = String::with_capacity(chars.len());
    let mut idx = 0;
    while idx < chars.len() {
        let ch = chars[idx];
        if !ch.is_whitespace() {
            repaired.push(ch);
            idx += 1;
            continue;
        }
        let run_start = idx;
        while idx < chars.len() && chars[idx].is_whitespace() {
            idx += 1;
        }
        let single = idx - run_start == 1;
        let before = chars[run_start - 1];
        let after = chars[idx];
        if !(single && before.is_lowercase() && after.is_lowercase()) {
            repaired.push(' ');
        }
    }
    repaired
}

#[derive(Debug, Clone)]
pub struct NameHandler {
    mode: NameRepairMode,
    min_length: usize,
}

impl Default for NameHandler {
    fn default() -> Self {
        Self::new(NameRepairMode::default(), &NameOptions::default())
    }
}

impl NameHandler {
    pub fn new(mode: NameRepairMode, options: &NameOptions) -> Self {
        Self {
            mode,
            min_length: options.min_length,
        }
    }

    pub fn mode(&self) -> NameRepairMode {
        self.mode
    }
}

impl FieldNormalizer for NameHandler {
    fn kind(&self) -> FieldKind {
        FieldKind::Name
    }

    fn description(&self) -> &'static str {
        match self.mode {
            NameRepairMode::RemoveAllWhitespace => "Name: internal whitespace removed",
            NameRepairMode::JoinLowercaseFragments => "Name: lowercase fragments joined",
        }
    }

    fn normalize(&self, value: Option<&str>) -> Option<String> {
        value.map(|name| repair_name(self.mode, name))
    }

    fn validate(&self, value: Option<&str>) -> Verdict {
        match value {
            Some(name) if name.chars().count() >= self.min_length => Verdict::valid(),
            Some(name) => Verdict::invalid(messages::name_too_short(name)),
            None => Verdict::invalid(messages::name_too_short("")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_all_whitespace_joins_every_fragment() {
        let mode = NameRepairMode::RemoveAllWhitespace;
        assert_eq!(repair_name(mode, "Mat eus"), "Mateus");
        assert_eq!(repair_name(mode, "Ana  Maria\tSilva"), "AnaMariaSilva");
    }

    #[test]
    fn join_lowercase_fragments_keeps_word_boundaries() {
        let mode = NameRepairMode::JoinLowercaseFragments;
        assert_eq!(repair_name(mode, "Mat eus"), "Mateus");
        assert_eq!(repair_name(mode, "Ana Maria"), "Ana Maria");
        assert_eq!(repair_name(mode, "Ana   maria"), "Ana maria");
        assert_eq!(repair_name(mode, "  Jo ao  "), "Joao");
        assert_eq!(repair_name(mode, ""), "");
    }

    #[test]
    fn too_short_reason_includes_value() {
        let handler = NameHandler::default();
        let verdict = handler.validate(Some("Jo"));
        assert!(!verdict.valid);
        assert_eq!(verdict.reason_text(), "Nome muito curto (Jo)");
        assert!(handler.validate(Some("Ana")).valid);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let handler = NameHandler::default();
        assert!(!handler.validate(Some("Zé")).valid);
        assert!(handler.validate(Some("Zoé")).valid);
    }

    #[test]
    fn configurable_minimum() {
        let handler = NameHandler::new(
            NameRepairMode::RemoveAllWhitespace,
            &NameOptions { min_length: 5 },
        );
        assert!(!handler.validate(Some("Ana")).valid);
        assert!(handler.validate(Some("Mateus")).valid);
    }
}
