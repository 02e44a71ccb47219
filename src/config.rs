//! Declaration markers and document recognition.
//!
//! The markers are literal strings matched against raw document text. They
//! are configuration constants rather than runtime input; [`OutlineConfig`]
//! gathers them in one value so hosts can adjust the recognized extensions
//! or drop the L1 handler category for older dialects.

use std::path::Path;

use smol_str::SmolStr;
use thiserror::Error;

/// Tag line plus declaration keyword preceding a storage variable.
pub const STORAGE_VAR_MARKER: &str = "@storage_var\nfunc ";
/// Tag line plus declaration keyword preceding an event.
pub const EVENT_MARKER: &str = "@event\nfunc ";
pub const EXTERNAL_MARKER: &str = "@external";
pub const VIEW_MARKER: &str = "@view";
pub const L1_HANDLER_MARKER: &str = "@l1_handler";
/// Keyword that introduces the function inside a tagged block.
pub const FUNCTION_KEYWORD: &str = "func ";

/// Call suffixes appended to a declared name to find its usage sites.
pub const READ_CALL: &str = ".read(";
pub const WRITE_CALL: &str = ".write(";
pub const EMIT_CALL: &str = ".emit(";

pub const CAIRO_EXTENSION: &str = "cairo";

/// Errors raised when a custom configuration cannot drive extraction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A declaration marker or call suffix is the empty string.
    #[error("{0} marker must not be empty")]
    EmptyMarker(&'static str),

    /// The function keyword is the empty string.
    #[error("function keyword must not be empty")]
    EmptyKeyword,

    /// No file extension would ever be recognized.
    #[error("at least one recognized file extension is required")]
    NoExtensions,
}

/// Markers and call templates that drive extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineConfig {
    pub storage_marker: SmolStr,
    pub event_marker: SmolStr,
    pub external_marker: SmolStr,
    pub view_marker: SmolStr,
    /// `None` disables the L1 handler category.
    pub l1_handler_marker: Option<SmolStr>,
    pub function_keyword: SmolStr,
    pub read_call: SmolStr,
    pub write_call: SmolStr,
    pub emit_call: SmolStr,
    /// File extensions (without the dot) of documents worth indexing.
    pub extensions: Vec<SmolStr>,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            storage_marker: SmolStr::new_static(STORAGE_VAR_MARKER),
            event_marker: SmolStr::new_static(EVENT_MARKER),
            external_marker: SmolStr::new_static(EXTERNAL_MARKER),
            view_marker: SmolStr::new_static(VIEW_MARKER),
            l1_handler_marker: Some(SmolStr::new_static(L1_HANDLER_MARKER)),
            function_keyword: SmolStr::new_static(FUNCTION_KEYWORD),
            read_call: SmolStr::new_static(READ_CALL),
            write_call: SmolStr::new_static(WRITE_CALL),
            emit_call: SmolStr::new_static(EMIT_CALL),
            extensions: vec![SmolStr::new_static(CAIRO_EXTENSION)],
        }
    }
}

impl OutlineConfig {
    /// Also recognize documents with `extension`.
    pub fn with_extension(mut self, extension: impl Into<SmolStr>) -> Self {
        let extension = extension.into();
        if !self.extensions.contains(&extension) {
            self.extensions.push(extension);
        }
        self
    }

    /// Stop extracting `@l1_handler` functions.
    pub fn without_l1_handler(mut self) -> Self {
        self.l1_handler_marker = None;
        self
    }

    /// Reject configurations that would make extraction meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let markers = [
            ("storage", &self.storage_marker),
            ("event", &self.event_marker),
            ("external", &self.external_marker),
            ("view", &self.view_marker),
            ("read", &self.read_call),
            ("write", &self.write_call),
            ("emit", &self.emit_call),
        ];
        for (what, marker) in markers {
            if marker.is_empty() {
                return Err(ConfigError::EmptyMarker(what));
            }
        }
        if self.l1_handler_marker.as_ref().is_some_and(|m| m.is_empty()) {
            return Err(ConfigError::EmptyMarker("l1_handler"));
        }
        if self.function_keyword.is_empty() {
            return Err(ConfigError::EmptyKeyword);
        }
        if self.extensions.is_empty() {
            return Err(ConfigError::NoExtensions);
        }
        Ok(())
    }

    /// Whether a document at `path` should be indexed.
    ///
    /// Compares the extension case-sensitively, so `Token.CAIRO` is ignored.
    pub fn recognizes_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|known| known == ext))
    }
}
