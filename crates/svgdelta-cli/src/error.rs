#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Delta(#[from] svgdelta::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
