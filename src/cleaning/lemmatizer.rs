//! Noun lemmatization.
//!
//! WordNet-style morphological reduction: an exception list is checked first,
//! then detachment rules are applied until a form present in the lemma index is found.
//! When several forms are valid, the shortest one is kept.
use std::collections::{HashMap, HashSet};

/// Noun detachment rules, `(suffix, replacement)`.
const NOUN_RULES: [(&str, &str); 9] = [
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

#[derive(Debug, Clone, Default)]
pub struct Lemmatizer {
    lemmas: HashSet<String>,
    exceptions: HashMap<String, Vec<String>>,
}

impl Lemmatizer {
    /// `lemmas` is the noun index, `exceptions` maps irregular forms to their base forms.
    pub fn new(lemmas: HashSet<String>, exceptions: HashMap<String, Vec<String>>) -> Self {
        Self { lemmas, exceptions }
    }

    /// Returns the lemma of `word`, or `word` itself if none is found.
    pub fn lemmatize(&self, word: &str) -> String {
        self.morphy(word)
            .into_iter()
            .min_by_key(|form| form.chars().count())
            .unwrap_or_else(|| word.to_string())
    }

    /// Every valid base form of `form`, in discovery order.
    fn morphy(&self, form: &str) -> Vec<String> {
        if let Some(bases) = self.exceptions.get(form) {
            let forms = std::iter::once(form.to_string()).chain(bases.iter().cloned());
            return self.known(forms);
        }

        let mut forms = apply_rules(&[form.to_string()]);
        let found = self.known(std::iter::once(form.to_string()).chain(forms.iter().cloned()));
        if !found.is_empty() {
            return found;
        }

        // every rule but men->man shortens the form, and man can't match again
        while !forms.is_empty() {
            forms = apply_rules(&forms);
            let found = self.known(forms.iter().cloned());
            if !found.is_empty() {
                return found;
            }
        }
        Vec::new()
    }

    /// Keep forms present in the index, dropping duplicates.
    fn known(&self, forms: impl Iterator<Item = String>) -> Vec<String> {
        let mut seen = HashSet::new();
        forms
            .filter(|form| self.lemmas.contains(form))
            .filter(|form| seen.insert(form.clone()))
            .collect()
    }
}

fn apply_rules(forms: &[String]) -> Vec<String> {
    forms
        .iter()
        .flat_map(|form| {
            NOUN_RULES.iter().filter_map(move |(suffix, replacement)| {
                form.strip_suffix(suffix)
                    .map(|stem| format!("{}{}", stem, replacement))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmatizer() -> Lemmatizer {
        let lemmas = [
            "model", "class", "box", "leaf", "church", "woman", "study", "topic", "bu", "bus",
            "goose", "analysis", "data", "datum",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let exceptions = [("geese", "goose"), ("data", "datum")]
            .iter()
            .map(|(k, v)| (k.to_string(), vec![v.to_string()]))
            .collect();
        Lemmatizer::new(lemmas, exceptions)
    }

    #[test]
    fn regular_plurals() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("models"), "model");
        assert_eq!(l.lemmatize("classes"), "class");
        assert_eq!(l.lemmatize("boxes"), "box");
        assert_eq!(l.lemmatize("leaves"), "leaf");
        assert_eq!(l.lemmatize("churches"), "church");
        assert_eq!(l.lemmatize("women"), "woman");
        assert_eq!(l.lemmatize("studies"), "study");
    }

    #[test]
    fn exceptions_first() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("geese"), "goose");
        // both forms are indexed, the shortest wins
        assert_eq!(l.lemmatize("data"), "data");
    }

    #[test]
    fn shortest_candidate() {
        // "bus" is indexed, but so is "bu"
        assert_eq!(lemmatizer().lemmatize("bus"), "bu");
    }

    #[test]
    fn already_lemma() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("topic"), "topic");
        assert_eq!(l.lemmatize("analysis"), "analysis");
    }

    #[test]
    fn unknown_word() {
        assert_eq!(lemmatizer().lemmatize("qwertys"), "qwertys");
        assert_eq!(Lemmatizer::default().lemmatize("models"), "models");
    }
}
