// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The error taxonomy shared by every fallible operation in the crate.
//!
//! Every failure path in the graphics layer resolves to a [`RayError`] with a
//! fixed [`ErrorKind`]. The kind is chosen at the point of failure and is
//! never reclassified upstream, so callers can branch on it to decide their
//! retry/continue/abort policy.

use std::error::Error;
use std::fmt;

/// The closed set of failure categories.
///
/// Callers are expected to branch on the kind:
/// [`Validation`](ErrorKind::Validation) and [`State`](ErrorKind::State)
/// indicate a bug in the calling code, [`Draw`](ErrorKind::Draw) is usually
/// safe to log and skip, and [`Ffi`](ErrorKind::Ffi) during steady-state
/// operation means the native runtime is in an unexpected condition.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// The window or a native subsystem failed to start.
    Init,
    /// The native call itself reported failure.
    Ffi,
    /// An argument failed a pre-flight check; the native layer was never
    /// reached.
    Validation,
    /// An operation was attempted while the window/draw state machine forbids
    /// it.
    State,
    /// A draw operation failed for a reason specific to that draw call.
    Draw,
    /// An invalid input-device query.
    Input,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Init => "init error",
            ErrorKind::Ffi => "ffi error",
            ErrorKind::Validation => "validation error",
            ErrorKind::State => "state error",
            ErrorKind::Draw => "draw error",
            ErrorKind::Input => "input error",
        };
        write!(f, "{name}")
    }
}

/// The error value carried by every `Err` in this crate.
///
/// Invariants: `kind` is always one of the fixed taxonomy and `message` is
/// never empty (the constructors take a non-empty message by contract; an
/// empty one is replaced by a placeholder rather than violating the
/// invariant).
#[derive(Debug)]
pub struct RayError {
    kind: ErrorKind,
    message: String,
    context: Option<String>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl RayError {
    /// Creates an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = "unspecified failure".to_string();
        }
        Self {
            kind,
            message,
            context: None,
            source: None,
        }
    }

    /// Window or native subsystem failed to start.
    pub fn init(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Init, message)
    }

    /// The native call reported failure.
    pub fn ffi(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Ffi, message)
    }

    /// An argument failed a pre-flight check.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// The state machine forbids this operation right now.
    pub fn state(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::State, message)
    }

    /// A draw call failed.
    pub fn draw(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Draw, message)
    }

    /// An invalid input-device query.
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Input, message)
    }

    /// Attaches a human-readable context string (e.g. the operation name).
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Attaches the lower-level error that caused this one.
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The failure category this error was classified as.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The human-readable message. Never empty.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The optional context string attached at the failure site.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl fmt::Display for RayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(context) => write!(f, "{}: {} (in {})", self.kind, self.message, context),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl Error for RayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_context() {
        let err = RayError::validation("radius must be non-negative, got -1");
        assert_eq!(
            format!("{err}"),
            "validation error: radius must be non-negative, got -1"
        );
    }

    #[test]
    fn display_with_context() {
        let err = RayError::state("frame not started").with_context("draw_circle");
        assert_eq!(
            format!("{err}"),
            "state error: frame not started (in draw_circle)"
        );
    }

    #[test]
    fn source_is_chained() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let err = RayError::ffi("texture load failed").with_source(io);
        let source = err.source().expect("source should be attached");
        assert_eq!(format!("{source}"), "missing.png");
    }

    #[test]
    fn kind_is_preserved() {
        assert_eq!(RayError::init("boom").kind(), ErrorKind::Init);
        assert_eq!(RayError::draw("boom").kind(), ErrorKind::Draw);
        assert_eq!(RayError::input("boom").kind(), ErrorKind::Input);
    }

    #[test]
    fn empty_message_is_replaced() {
        let err = RayError::ffi("");
        assert!(!err.message().is_empty());
    }
}
