pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read document {path}: {source}")]
    ReadDocument {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse document {path} as XML: {source}")]
    ParseDocument {
        path: String,
        #[source]
        source: roxmltree::Error,
    },

    #[error("failed to list directory {path}: {source}")]
    ListDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report {path}: {source}")]
    WriteReport {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config file {path}: {source}")]
    ReadConfig {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {message}")]
    InvalidConfig { path: String, message: String },

    #[error("failed to serialize JSON report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no `*_{c}.svg` / `*_{g}.svg` pairs found")]
    NoPairs { c: String, g: String },
}
