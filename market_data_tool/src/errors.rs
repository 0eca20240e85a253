use snafu::{Backtrace, Snafu};

use crate::{providers::ProviderError, tool::dates::MalformedDateError};

/// The unified error type for a tool invocation.
///
/// Nothing here is retried or swallowed: a failure either propagates
/// verbatim ([`ToolError::Fetch`]) or carries added context
/// ([`ToolError::CredentialOrSubscription`]).
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ToolError {
    /// An input date expression could not be parsed.
    #[snafu(display("Invalid date parameter: {source}"))]
    Date {
        source: MalformedDateError,
        backtrace: Backtrace,
    },

    /// A fetch failure matching a credentials/subscription signature,
    /// re-raised with remediation steps appended to the original message.
    #[snafu(display("{message}"))]
    CredentialOrSubscription { message: String },

    /// Any other provider failure, propagated verbatim.
    #[snafu(display("{source}"))]
    Fetch {
        #[snafu(backtrace)]
        source: ProviderError,
    },
}
