//! Errors raised at the process boundary
//!
//! Service failures arrive as [`ApplicationError`]; stdin, stdout and the
//! working directory are handled here directly and fail with [`InfraError::Io`].

use thiserror::Error;

use crate::application::ApplicationError;

#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// `context` names the attempted action, e.g. "read sitemap from stdin"
    #[error("cannot {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn given_io_failure_when_displayed_then_names_action_and_keeps_source() {
        let err = InfraError::io(
            "read sitemap from stdin",
            io::Error::new(io::ErrorKind::InvalidData, "invalid UTF-8"),
        );

        assert_eq!(err.to_string(), "cannot read sitemap from stdin");
        assert!(err.source().is_some());
    }

    #[test]
    fn given_application_error_when_wrapped_then_display_is_unchanged() {
        let app = ApplicationError::Render {
            message: "boom".into(),
        };
        let expected = app.to_string();

        let err = InfraError::from(app);

        assert_eq!(err.to_string(), expected);
    }
}
