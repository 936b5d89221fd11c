use thiserror::Error;

const MAX_URI_LENGTH: usize = 256;
const MIN_URI_LENGTH: usize = 3;

#[derive(Error, Debug, PartialEq)]
pub enum UriError {
    #[error("Default uri too long")]
    DefaultUriTooLong {},
    #[error("Default uri too short")]
    DefaultUriTooShort {},
    #[error("Base uri too long")]
    BaseUriTooLong {},
}

pub fn check_default_uri(default_uri: &str) -> Result<(), UriError> {
    if default_uri.chars().count() > MAX_URI_LENGTH {
        return Err(UriError::DefaultUriTooLong {});
    }
    if default_uri.chars().count() < MIN_URI_LENGTH {
        return Err(UriError::DefaultUriTooShort {});
    }
    Ok(())
}

// An empty base uri is allowed, it is the state before reveal
pub fn check_base_uri(base_uri: &str) -> Result<(), UriError> {
    if base_uri.chars().count() > MAX_URI_LENGTH {
        return Err(UriError::BaseUriTooLong {});
    }
    Ok(())
}

/// Every token points at the default uri until the collection is revealed.
pub fn token_uri(default_uri: &str, base_uri: &str, revealed: bool, token_id: u32) -> String {
    if revealed {
        format!("{}{}", base_uri, token_id)
    } else {
        default_uri.to_string()
    }
}
