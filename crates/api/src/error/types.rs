//! Error type definitions for KEM binding operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for KEM binding operations
///
/// Local validation failures (`UnknownAlgorithm`, `InvalidLength`,
/// `HandleReleased`, `DoubleRelease`) are raised before any call reaches
/// the native provider, so they are always distinguishable from
/// native-computation failures (`ProviderInit`, `ProviderOperation`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Algorithm identifier is not present in the registry
    UnknownAlgorithm {
        context: &'static str,
        #[cfg(feature = "std")]
        identifier: String,
    },

    /// The native provider constructor returned a failure
    ProviderInit {
        algorithm: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// The native provider reported a failure during an operation
    ProviderOperation {
        algorithm: &'static str,
        operation: &'static str,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Operation attempted on a handle that has already been released
    HandleReleased {
        operation: &'static str,
    },

    /// Release attempted on a handle that has already been released
    DoubleRelease {
        algorithm: &'static str,
    },
}

/// Result type for KEM binding operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add a message to an existing error (when std is available)
    ///
    /// Only the variants that carry a free-form message are affected;
    /// the structured variants pass through unchanged.
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::UnknownAlgorithm { context, .. } => Self::UnknownAlgorithm {
                context,
                identifier: message,
            },
            Self::ProviderInit { algorithm, .. } => Self::ProviderInit {
                algorithm,
                message,
            },
            other => other,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::UnknownAlgorithm { context, identifier } => {
                write!(f, "{}: unknown algorithm \"{}\"", context, identifier)
            }
            #[cfg(not(feature = "std"))]
            Self::UnknownAlgorithm { context } => {
                write!(f, "{}: unknown algorithm", context)
            }
            #[cfg(feature = "std")]
            Self::ProviderInit { algorithm, message } => {
                write!(f, "provider initialization failed for {}: {}", algorithm, message)
            }
            #[cfg(not(feature = "std"))]
            Self::ProviderInit { algorithm } => {
                write!(f, "provider initialization failed for {}", algorithm)
            }
            Self::ProviderOperation { algorithm, operation } => {
                write!(f, "{}: {} failed in native provider", algorithm, operation)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::HandleReleased { operation } => {
                write!(f, "{}: handle has already been released", operation)
            }
            Self::DoubleRelease { algorithm } => {
                write!(f, "{}: handle released twice", algorithm)
            }
        }
    }
}
