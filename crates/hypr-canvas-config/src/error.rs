use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Failed to parse KDL")]
    #[diagnostic(code(hypr_canvas::config::parse_error))]
    ParseError {
        #[source_code]
        src: String,
        #[label("here")]
        span: miette::SourceSpan,
        #[source]
        source: kdl::KdlError,
    },

    #[error("Invalid `{node}` setting: {message}")]
    #[diagnostic(code(hypr_canvas::config::invalid))]
    Invalid { node: String, message: String },

    #[error("Missing required field: {field}")]
    #[diagnostic(code(hypr_canvas::config::missing_field))]
    MissingField { field: String },

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
}
