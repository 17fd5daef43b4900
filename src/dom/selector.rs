//! Minimal CSS selector support.
//!
//! Covers what drag options use in practice: type, `#id`, `.class` and `*`
//! selectors, compounds of those, the descendant combinator and selector
//! lists. Anything else is rejected with `DragError::InvalidSelector`.

use crate::error::{DragError, DragResult};

/// Element facts a selector is matched against
pub trait SelectorSubject {
    fn tag(&self) -> &str;
    fn id(&self) -> Option<&str>;
    fn has_class(&self, class: &str) -> bool;
}

/// One simple-selector sequence, e.g. `div.card#main`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn matches(&self, subject: &dyn SelectorSubject) -> bool {
        if let Some(tag) = &self.tag {
            if !subject.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if subject.id() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| subject.has_class(class))
    }
}

/// Compounds joined by descendant combinators, leftmost first
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    compounds: Vec<Compound>,
}

/// A parsed, comma-separated selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Complex>,
}

impl Selector {
    pub fn parse(source: &str) -> DragResult<Self> {
        let mut alternatives = Vec::new();
        for part in source.split(',') {
            let part = part.trim();
            if part.is_empty() {
                return Err(DragError::invalid_selector(source, "empty selector"));
            }
            let compounds = part
                .split_whitespace()
                .map(|token| parse_compound(source, token))
                .collect::<DragResult<Vec<_>>>()?;
            alternatives.push(Complex { compounds });
        }
        Ok(Self { alternatives })
    }

    /// Match `subject` given an iterator over its ancestors, nearest first.
    pub fn matches<'a, I>(&self, subject: &dyn SelectorSubject, ancestors: I) -> bool
    where
        I: Iterator<Item = &'a dyn SelectorSubject> + Clone,
    {
        self.alternatives
            .iter()
            .any(|complex| complex.matches(subject, ancestors.clone()))
    }
}

impl Complex {
    fn matches<'a, I>(&self, subject: &dyn SelectorSubject, mut ancestors: I) -> bool
    where
        I: Iterator<Item = &'a dyn SelectorSubject>,
    {
        let Some((last, rest)) = self.compounds.split_last() else {
            return false;
        };
        if !last.matches(subject) {
            return false;
        }
        // Descendant-only chains match greedily: take the nearest ancestor
        // satisfying each compound, right to left.
        rest.iter()
            .rev()
            .all(|compound| ancestors.any(|ancestor| compound.matches(ancestor)))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn parse_compound(source: &str, token: &str) -> DragResult<Compound> {
    let mut compound = Compound::default();
    let mut chars = token.char_indices().peekable();

    if token.starts_with('*') {
        chars.next();
    } else if token.starts_with(is_ident_char) {
        let end = token.find(|c: char| !is_ident_char(c)).unwrap_or(token.len());
        compound.tag = Some(token[..end].to_string());
        while chars.peek().is_some_and(|(i, _)| *i < end) {
            chars.next();
        }
    }

    while let Some((start, marker)) = chars.next() {
        let name_start = start + marker.len_utf8();
        let name_end = token[name_start..]
            .find(|c: char| !is_ident_char(c))
            .map_or(token.len(), |offset| name_start + offset);
        let name = &token[name_start..name_end];
        if name.is_empty() {
            return Err(DragError::invalid_selector(
                source,
                format!("expected a name after {marker:?}"),
            ));
        }
        match marker {
            '#' => compound.id = Some(name.to_string()),
            '.' => compound.classes.push(name.to_string()),
            other => {
                return Err(DragError::invalid_selector(
                    source,
                    format!("unsupported syntax {other:?}"),
                ));
            }
        }
        while chars.peek().is_some_and(|(i, _)| *i < name_end) {
            chars.next();
        }
    }

    Ok(compound)
}
