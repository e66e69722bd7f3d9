use thiserror::Error;

/// Outbound email delivery failures.
#[derive(Error, Debug)]
pub enum MailError {
    /// The request to the mail provider could not be sent or its response not read.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The mail provider answered with a non-success status.
    #[error("Mail provider rejected message with status {status}: {body}")]
    Rejected {
        /// HTTP status returned by the provider
        status: u16,
        /// Response body returned by the provider
        body: String,
    },
}
