//! The shared cursor every handler reads from.
//!
//! A [`ParseContext`] owns the namespace-aware XML reader for one document
//! and tracks element depth. Handlers receive the start tag of the element
//! they were dispatched for and must consume it exactly: on return the
//! cursor sits just past the element's end tag. The helpers here
//! ([`read_text`](ParseContext::read_text), [`skip`](ParseContext::skip),
//! [`skip_unknown`](ParseContext::skip_unknown) and the
//! [`next_child`](ParseContext::next_child) loop) all uphold that.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use super::diagnostics::{Diagnostic, Diagnostics, Level};
use crate::config::ParserConfig;
use crate::error::{FeedError, Result};
use crate::namespace::NamespaceRegistry;

/// `xml:` attributes such as `xml:lang` live here.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

// ============================================================================
// Start tags
// ============================================================================

/// An attribute with its resolved namespace. Unprefixed attributes have an
/// empty namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub namespace: String,
    pub local_name: String,
    pub qualified_name: String,
    pub value: String,
}

/// An owned, namespace-resolved element start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    namespace: String,
    local_name: String,
    qualified_name: String,
    attributes: Vec<Attribute>,
    depth: usize,
}

impl StartTag {
    /// Namespace URI as written in the document, or empty when unqualified.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Name including any prefix, as written in the document.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Number of open elements including this one. The root is at depth 1.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Looks up an attribute by local name, preferring an unprefixed one.
    pub fn attr(&self, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.namespace.is_empty() && a.local_name == local_name)
            .or_else(|| self.attributes.iter().find(|a| a.local_name == local_name))
            .map(|a| a.value.as_str())
    }

    /// Trimmed attribute value, absent when missing or blank.
    pub fn attr_trimmed(&self, local_name: &str) -> Option<&str> {
        self.attr(local_name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Looks up an attribute in a specific namespace.
    pub fn attr_ns(&self, namespace: &str, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.namespace == namespace && a.local_name == local_name)
            .map(|a| a.value.as_str())
    }

    /// The `xml:lang` attribute, if present.
    pub fn xml_lang(&self) -> Option<&str> {
        self.attr_ns(XML_NAMESPACE, "lang").or_else(|| {
            self.attributes
                .iter()
                .find(|a| a.qualified_name == "xml:lang")
                .map(|a| a.value.as_str())
        })
    }
}

// ============================================================================
// Cursor
// ============================================================================

enum Token {
    Start(StartTag),
    End,
    Text(String),
    Eof,
}

/// Parse state for a single document: reader, depth, current level and the
/// diagnostics collected so far.
pub struct ParseContext<'a> {
    reader: NsReader<&'a [u8]>,
    registry: &'a NamespaceRegistry,
    config: &'a ParserConfig,
    diagnostics: Diagnostics,
    depth: usize,
    level: Level,
    /// A self-closing element was reported as a start; its end is owed.
    pending_end: bool,
}

impl<'a> ParseContext<'a> {
    pub fn new(input: &'a [u8], registry: &'a NamespaceRegistry, config: &'a ParserConfig) -> Self {
        Self {
            reader: NsReader::from_reader(input),
            registry,
            config,
            diagnostics: Diagnostics::new(config.collect_diagnostics),
            depth: 0,
            level: Level::Feed,
            pending_end: false,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn config(&self) -> &ParserConfig {
        self.config
    }

    pub(crate) fn registry(&self) -> &'a NamespaceRegistry {
        self.registry
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub(crate) fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// Runs `f` with the cursor switched to `level`, restoring it afterwards.
    pub fn with_level<T>(
        &mut self,
        level: Level,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let previous = std::mem::replace(&mut self.level, level);
        let result = f(self);
        self.level = previous;
        result
    }

    /// Reads up to the first element of the document.
    pub(crate) fn root(&mut self) -> Result<Option<StartTag>> {
        loop {
            match self.next_token()? {
                Token::Start(tag) => return Ok(Some(tag)),
                Token::Eof => return Ok(None),
                Token::Text(_) | Token::End => {}
            }
        }
    }

    /// Advances to the next child element of `parent`, skipping text.
    ///
    /// Returns `None` once `parent`'s end tag has been consumed.
    pub fn next_child(&mut self, parent: &StartTag) -> Result<Option<StartTag>> {
        loop {
            match self.next_token()? {
                Token::Start(tag) => return Ok(Some(tag)),
                Token::End => {
                    debug_assert_eq!(
                        self.depth + 1,
                        parent.depth,
                        "end tag seen at the wrong depth while walking <{}>",
                        parent.qualified_name
                    );
                    return Ok(None);
                }
                Token::Text(_) => {}
                Token::Eof => return Err(unexpected_eof(parent)),
            }
        }
    }

    /// Consumes `tag` and returns its trimmed text content, including the
    /// text of any nested markup.
    pub fn read_text(&mut self, tag: &StartTag) -> Result<String> {
        let text = self.consume(tag, true)?;
        Ok(text.trim().to_string())
    }

    /// Consumes `tag` without recording anything. Used for elements a
    /// handler knows and deliberately ignores.
    pub fn skip(&mut self, tag: &StartTag) -> Result<()> {
        self.consume(tag, false).map(drop)
    }

    /// Consumes `tag` and records it as an unknown element.
    pub fn skip_unknown(&mut self, tag: &StartTag) -> Result<()> {
        let capture = self.config.collect_diagnostics && self.config.capture_unknown_text;
        let text = self.consume(tag, capture)?;
        tracing::debug!(
            namespace = %tag.namespace,
            element = %tag.local_name,
            level = %self.level,
            "Skipping unknown element"
        );
        let text = text.trim();
        self.diagnostics.record(Diagnostic::UnknownElement {
            namespace: tag.namespace.clone(),
            local_name: tag.local_name.clone(),
            level: self.level,
            attributes: tag
                .attributes
                .iter()
                .map(|a| (a.qualified_name.clone(), a.value.clone()))
                .collect(),
            text: (capture && !text.is_empty()).then(|| text.to_string()),
        });
        Ok(())
    }

    /// Consumes `tag` and interprets its text with `parse`.
    ///
    /// Non-blank text that `parse` rejects is recorded as an invalid value.
    pub fn read_value<T>(
        &mut self,
        tag: &StartTag,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        let raw = self.read_text(tag)?;
        let parsed = parse(&raw);
        if parsed.is_none() && !raw.is_empty() {
            self.invalid_value(tag, tag.local_name.clone(), raw);
        }
        Ok(parsed)
    }

    /// Interprets attribute `name` of `tag` with `parse`, recording
    /// non-blank values that `parse` rejects. Does not move the cursor.
    pub fn attr_value<T>(
        &mut self,
        tag: &StartTag,
        name: &str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Option<T> {
        let raw = tag.attr(name)?;
        let parsed = parse(raw);
        if parsed.is_none() && !raw.trim().is_empty() {
            let raw = raw.to_string();
            self.invalid_value(tag, format!("{}@{name}", tag.local_name), raw);
        }
        parsed
    }

    fn invalid_value(&mut self, tag: &StartTag, local_name: String, raw: String) {
        tracing::debug!(
            namespace = %tag.namespace,
            element = %local_name,
            raw = %raw,
            "Ignoring unparseable value"
        );
        self.diagnostics.record(Diagnostic::InvalidValue {
            namespace: tag.namespace.clone(),
            local_name,
            level: self.level,
            raw,
        });
    }

    /// Reads through the end of `tag`, optionally collecting text.
    fn consume(&mut self, tag: &StartTag, keep_text: bool) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.next_token()? {
                Token::Text(chunk) if keep_text => text.push_str(&chunk),
                Token::End if self.depth < tag.depth => return Ok(text),
                Token::Eof => return Err(unexpected_eof(tag)),
                Token::Start(_) | Token::End | Token::Text(_) => {}
            }
        }
    }

    fn next_token(&mut self) -> Result<Token> {
        if self.pending_end {
            self.pending_end = false;
            self.depth = self.depth.saturating_sub(1);
            return Ok(Token::End);
        }
        loop {
            let (resolved, event) = self.reader.read_resolved_event()?;
            let namespace = namespace_uri(self.registry, resolved);
            match event {
                Event::Start(start) => {
                    self.depth += 1;
                    return Ok(Token::Start(self.start_tag(namespace, &start)));
                }
                Event::Empty(start) => {
                    self.depth += 1;
                    self.pending_end = true;
                    return Ok(Token::Start(self.start_tag(namespace, &start)));
                }
                Event::End(_) => {
                    self.depth = self.depth.saturating_sub(1);
                    return Ok(Token::End);
                }
                Event::Text(text) => {
                    let decoded = match text.unescape() {
                        Ok(decoded) => decoded.into_owned(),
                        Err(err) => {
                            tracing::debug!(error = %err, "Keeping text with unknown entity verbatim");
                            String::from_utf8_lossy(&text).into_owned()
                        }
                    };
                    return Ok(Token::Text(decoded));
                }
                Event::CData(data) => {
                    return Ok(Token::Text(String::from_utf8_lossy(&data).into_owned()));
                }
                Event::Eof => return Ok(Token::Eof),
                Event::Decl(_) | Event::PI(_) | Event::Comment(_) | Event::DocType(_) => {}
            }
        }
    }

    fn start_tag(&self, namespace: String, start: &BytesStart<'_>) -> StartTag {
        let local_name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let qualified_name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = match attr {
                Ok(attr) => attr,
                Err(err) => {
                    tracing::debug!(element = %qualified_name, error = %err, "Skipping malformed attribute");
                    continue;
                }
            };
            let key = attr.key.as_ref();
            if key == b"xmlns" || key.starts_with(b"xmlns:") {
                continue;
            }
            let (resolved, local) = self.reader.resolve_attribute(attr.key);
            let attr_namespace = namespace_uri(self.registry, resolved);
            let value = match attr.decode_and_unescape_value(self.reader.decoder()) {
                Ok(value) => value.into_owned(),
                Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
            };
            attributes.push(Attribute {
                namespace: attr_namespace,
                local_name: String::from_utf8_lossy(local.as_ref()).into_owned(),
                qualified_name: String::from_utf8_lossy(key).into_owned(),
                value,
            });
        }

        StartTag {
            namespace,
            local_name,
            qualified_name,
            attributes,
            depth: self.depth,
        }
    }
}

/// Converts a resolution result into an owned URI.
///
/// Feeds regularly use `itunes:` and friends without declaring them.
/// An undeclared prefix that matches a registered handler's
/// conventional prefix resolves to that handler's namespace; any other
/// undeclared prefix gets a URI no handler claims.
fn namespace_uri(registry: &NamespaceRegistry, resolved: ResolveResult<'_>) -> String {
    match resolved {
        ResolveResult::Bound(Namespace(uri)) => String::from_utf8_lossy(uri).into_owned(),
        ResolveResult::Unbound => String::new(),
        ResolveResult::Unknown(prefix) => {
            let prefix = String::from_utf8_lossy(&prefix).into_owned();
            match registry.resolve_prefix(&prefix) {
                Some(handler) => handler.namespace().to_string(),
                None => format!("urn:x-undeclared-prefix:{prefix}"),
            }
        }
    }
}

fn unexpected_eof(tag: &StartTag) -> FeedError {
    FeedError::UnexpectedEof {
        element: tag.qualified_name.clone(),
    }
}

// ============================================================================
// Tests
// ============================================================================
