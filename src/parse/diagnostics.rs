use std::fmt;

use serde::Serialize;

/// Which aggregate the cursor is filling when an element is encountered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Feed,
    Item,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Feed => f.write_str("feed"),
            Level::Item => f.write_str("item"),
        }
    }
}

/// Something the parser recovered from instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// An element no handler claimed. Its subtree was skipped.
    UnknownElement {
        namespace: String,
        local_name: String,
        level: Level,
        /// Qualified attribute names and their values.
        attributes: Vec<(String, String)>,
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    /// A recognized element whose text could not be interpreted.
    InvalidValue {
        namespace: String,
        local_name: String,
        level: Level,
        raw: String,
    },
}

impl Diagnostic {
    pub fn local_name(&self) -> &str {
        match self {
            Diagnostic::UnknownElement { local_name, .. }
            | Diagnostic::InvalidValue { local_name, .. } => local_name,
        }
    }

    pub fn namespace(&self) -> &str {
        match self {
            Diagnostic::UnknownElement { namespace, .. }
            | Diagnostic::InvalidValue { namespace, .. } => namespace,
        }
    }
}

/// Per-parse record of recovered problems.
///
/// Counts are always maintained. Individual entries are kept only when
/// collection is enabled in [`ParserConfig`](crate::config::ParserConfig).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    unknown_elements: usize,
    invalid_values: usize,
    entries: Vec<Diagnostic>,
    #[serde(skip)]
    collect: bool,
}

impl Diagnostics {
    pub fn new(collect: bool) -> Self {
        Self {
            collect,
            ..Self::default()
        }
    }

    pub(crate) fn record(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::UnknownElement { .. } => self.unknown_elements += 1,
            Diagnostic::InvalidValue { .. } => self.invalid_values += 1,
        }
        if self.collect {
            self.entries.push(diagnostic);
        }
    }

    pub fn unknown_elements(&self) -> usize {
        self.unknown_elements
    }

    pub fn invalid_values(&self) -> usize {
        self.invalid_values
    }

    /// Nothing was skipped or rejected.
    pub fn is_clean(&self) -> bool {
        self.unknown_elements == 0 && self.invalid_values == 0
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
