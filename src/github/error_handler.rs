//! GitHub API error detection and classification
//!
//! Maps octocrab errors onto the failures phonit reports to the user.
//! Authentication failures are classified by HTTP status; repository
//! creation failures keep GitHub's message intact.

use crate::error::PhonitError;

/// HTTP status GitHub returns for bad credentials
const STATUS_UNAUTHORIZED: u16 = 401;

/// HTTP status GitHub returns when an authorization with the same note exists
const STATUS_UNPROCESSABLE: u16 = 422;

/// HTTP status of a GitHub error response, if the error carries one
pub fn status_code(err: &octocrab::Error) -> Option<u16> {
    match err {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
        _ => None,
    }
}

/// Message GitHub attached to the error, or the error's debug output
pub fn error_message(err: &octocrab::Error) -> String {
    match err {
        octocrab::Error::GitHub { source, .. } => source.message.clone(),
        // Display is terse for transport errors; Debug keeps the cause
        other => format!("{:?}", other),
    }
}

/// Classifies an octocrab error into a generic GitHub API error
pub fn classify_github_error(err: octocrab::Error) -> PhonitError {
    PhonitError::GitHubApi(error_message(&err))
}

/// Classifies a failed authorization exchange
pub fn classify_authorization_error(err: octocrab::Error) -> PhonitError {
    authorization_error(status_code(&err), error_message(&err))
}

/// Classifies a failed repository creation
pub fn classify_repository_error(err: octocrab::Error) -> PhonitError {
    PhonitError::RepositoryCreation(error_message(&err))
}

fn authorization_error(status: Option<u16>, message: String) -> PhonitError {
    match status {
        Some(STATUS_UNAUTHORIZED) => PhonitError::InvalidCredentials(message),
        Some(STATUS_UNPROCESSABLE) => PhonitError::TokenAlreadyExists(message),
        _ => PhonitError::AuthenticationFailed(message),
    }
}
