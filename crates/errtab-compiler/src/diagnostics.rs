//! Builder-pattern printer for compiler errors.
//!
//! Located errors render as a source snippet with the offending field
//! underlined; duplicates also show where the key was first defined.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::source::Location;
use crate::{Error, InputError};

pub struct DiagnosticsPrinter<'e> {
    error: &'e Error,
    colored: bool,
}

impl<'e> DiagnosticsPrinter<'e> {
    pub fn new(error: &'e Error) -> Self {
        Self {
            error,
            colored: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Error::Input { location, kind } = self.error else {
            return writeln!(w, "error: {}", self.error);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let title = kind.to_string();
        let label = label(kind);
        let primary = snippet(location).annotation(
            AnnotationKind::Primary
                .span(adjust_range(location))
                .label(label),
        );

        let mut report: Vec<Group> = vec![Level::ERROR.primary_title(&title).element(primary)];

        if let InputError::DuplicateKey { first, .. } = kind {
            report.push(
                Level::NOTE.secondary_title("first defined here").element(
                    snippet(first).annotation(AnnotationKind::Context.span(adjust_range(first))),
                ),
            );
        }

        writeln!(w, "{}", renderer.render(&report))
    }
}

impl Error {
    pub fn printer(&self) -> DiagnosticsPrinter<'_> {
        DiagnosticsPrinter::new(self)
    }

    pub fn render(&self) -> String {
        self.printer().render()
    }

    pub fn render_colored(&self, colored: bool) -> String {
        self.printer().colored(colored).render()
    }
}

fn snippet(location: &Location) -> Snippet<'_, annotate_snippets::Annotation<'_>> {
    Snippet::source(&*location.text)
        .line_start(location.line)
        .path(&*location.file)
}

fn label(kind: &InputError) -> &'static str {
    match kind {
        InputError::WrongFieldCount(_) => "expected LIBRARY,REASON_CODE,MESSAGE",
        InputError::InvalidReasonCode { .. } => "not a non-negative integer",
        InputError::NulInMessage => "message must not contain NUL",
        InputError::UnknownLibrary(_) => "not in the library registry",
        InputError::Encode(errtab_core::EncodeError::ReasonCodeTooLarge(_)) => {
            "must be below 2048"
        }
        InputError::Encode(errtab_core::EncodeError::LibraryIdTooLarge(_)) => {
            "library id must be below 64"
        }
        InputError::Encode(errtab_core::EncodeError::OffsetOverflow(_)) => {
            "string data exceeds 32767 bytes before this message"
        }
        InputError::DuplicateKey { .. } => "library and reason code already defined",
    }
}

/// Empty spans still get one caret.
fn adjust_range(location: &Location) -> std::ops::Range<usize> {
    let limit = location.text.len();
    let start = location.span.start.min(limit);
    let end = location.span.end.min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
