use alias_val::ValError;
use miette::Diagnostic;
use thiserror::Error;

/// Alias for Result type with demo runner errors
pub type DemoResult<T> = std::result::Result<T, DemoError>;

#[derive(Error, Diagnostic, Debug)]
pub enum DemoError {
    /// Name on the command line that matches no registered demo
    #[error("unknown demo '{name}'")]
    #[diagnostic(
        code(alias_E0201),
        help("Run `alias --list` to see the available demos")
    )]
    UnknownDemo { name: String },

    /// A demo hit a value fault. `partial` holds the lines it printed first.
    #[error("demo '{demo}' faulted")]
    #[diagnostic(code(alias_E0301))]
    Fault {
        demo: &'static str,
        partial: Vec<String>,
        #[source]
        #[diagnostic_source]
        source: ValError,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
