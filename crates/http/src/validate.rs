//! Payload validation over declarative per-field constraint sets.
//!
//! Constraints live on the payload types as `validator` derive attributes;
//! this single function evaluates them and flattens every violation into one
//! comma-joined message, surfaced as a 400 via [`AppError::Validation`].

use validator::Validate;

use crate::error::AppError;

/// Validate a request payload, collecting all violated field constraints.
pub fn validate<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|errors| {
        let mut parts: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| {
                    let problem = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    format!("{}: {}", field, problem)
                })
            })
            .collect();

        // field_errors is a map; sort for a stable message.
        parts.sort();
        AppError::validation(parts.join(", "))
    })
}
