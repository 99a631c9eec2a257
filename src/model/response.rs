/// What came back from a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered with a status below 400.
    Success { status: u16, body: String },
    /// The server answered with a 4xx or 5xx status.
    HttpError {
        status: u16,
        reason: String,
        body: String,
    },
    /// No answer at all: refused, unresolvable, reset or timed out.
    ConnectionError { reason: String },
}
