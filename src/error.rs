//! Custom error types for structdiff.

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid JSON at line {line}, column {column}: {source}")]
    Json {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML at line {line}, column {column}: {source}")]
    Yaml {
        line: usize,
        column: usize,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Input is neither valid JSON nor valid YAML")]
    UnknownFormat,

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    pub fn json(source: serde_json::Error) -> Self {
        Self::Json {
            line: source.line(),
            column: source.column(),
            source,
        }
    }

    pub fn yaml(source: serde_yaml::Error) -> Self {
        let (line, column) = source
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((0, 0));
        Self::Yaml {
            line,
            column,
            source,
        }
    }

    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Line/column of the syntax error, when the parser reported one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::Json { line, column, .. } | Self::Yaml { line, column, .. } => {
                Some((*line, *column))
            }
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Unknown output format: {format}")]
    UnknownFormat { format: String },

    #[error("Failed to serialize to JSON: {source}")]
    JsonSerializationError {
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum StructdiffError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
