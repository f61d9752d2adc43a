use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid bootstrap configuration")]
#[diagnostic(
    code(env_bootstrap::config::parse),
    help("Fix the highlighted entry, or remove it to fall back to the default.")
)]
pub struct ManifestDiagnostic {
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("{message}")]
    pub span: SourceSpan,
}

impl ManifestDiagnostic {
    pub fn new(path: &Path, content: &str, message: &str, span: Option<Range<usize>>) -> Self {
        let span = match span {
            Some(range) => SourceSpan::new(range.start.into(), range.len()),
            None => SourceSpan::new(SourceOffset::from(0), 0),
        };

        Self {
            message: message.trim().to_string(),
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span,
        }
    }
}

pub fn report_manifest_error(path: &Path, content: &str, message: &str, span: Option<Range<usize>>) {
    let diagnostic = ManifestDiagnostic::new(path, content, message, span);
    eprintln!("{:?}", miette::Report::new(diagnostic));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_is_carried_from_parse_error() {
        let content = "[environment]\ndir = 42\n";
        let diagnostic = ManifestDiagnostic::new(
            Path::new("bootstrap.toml"),
            content,
            "invalid type: integer `42`, expected a string\n",
            Some(20..22),
        );
        assert_eq!(diagnostic.span.offset(), 20);
        assert_eq!(diagnostic.span.len(), 2);
        assert_eq!(
            diagnostic.message,
            "invalid type: integer `42`, expected a string"
        );
    }

    #[test]
    fn missing_span_points_at_start() {
        let diagnostic = ManifestDiagnostic::new(Path::new("bootstrap.toml"), "", "bad", None);
        assert_eq!(diagnostic.span.offset(), 0);
        assert!(diagnostic.span.is_empty());
    }
}
