use serde::Deserialize;
use tracing::Subscriber;
use tracing_subscriber::{registry::LookupSpan, Layer};

/// Basic tracing configuration
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Style {
    /// Pretty print
    Pretty,
    /// JSON
    Json,
    /// Compact
    Compact,
    /// Default style
    #[serde(other)]
    #[default]
    Full,
}

/// A `tracing_subscriber::fmt` layer writing to stderr in the given style.
///
/// Stdout is left to command output.
pub(crate) fn output_layer<S>(style: Style) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    match style {
        Style::Pretty => layer.pretty().boxed(),
        Style::Json => layer.json().boxed(),
        Style::Compact => layer.compact().boxed(),
        Style::Full => layer.boxed(),
    }
}
