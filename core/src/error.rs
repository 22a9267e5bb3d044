use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Client table is empty")]
    EmptyClientTable,

    #[error("Invalid client record '{client_id}': {reason}")]
    InvalidRecord { client_id: String, reason: String },

    #[error("No shortfall weeks in the '{series}' gap series")]
    NoShortfallWeeks { series: &'static str },

    #[error("Chart rendering error: {0}")]
    Chart(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
