use thiserror::Error;

/// Convenient result alias for the air travel library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an airport code could not be resolved against the store.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        code: String,
        suggestions: Vec<String>,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|code| format!("'{}'", code))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
