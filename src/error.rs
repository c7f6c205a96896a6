// Setup-time error conditions

use crate::state::DEFAULT_ID;

/// Errors raised synchronously while wiring a paginated list or its
/// controls.
///
/// These are programmer-error conditions and abort setup rather than allow
/// silent mispagination. Runtime data never raises: empty collections,
/// out-of-range pages and zero page sizes all clamp.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("paginated list: the 'items_per_page' stage must be set")]
    MissingItemsPerPage,

    #[error("paginated list: could not parse repeat expression '{expr}'")]
    BadRepeatExpression { expr: String },

    #[error("pagination controls cannot be used without a corresponding paginated list")]
    ControlsWithoutList,

    #[error("pagination controls (id: {id}) cannot be used without a corresponding paginated list")]
    ControlsWithoutListId { id: String },

    #[error("the items_per_page id argument (id: {id}) does not match a registered pagination id")]
    UnmatchedInstanceId { id: String },
}

impl SetupError {
    /// Controls shown against an unregistered instance; the message names
    /// the id when it is not the default one.
    pub(crate) fn controls_without_list(id: &str) -> Self {
        if id == DEFAULT_ID {
            SetupError::ControlsWithoutList
        } else {
            SetupError::ControlsWithoutListId { id: id.to_owned() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_error_names_non_default_id() {
        assert_eq!(
            SetupError::controls_without_list(DEFAULT_ID).to_string(),
            "pagination controls cannot be used without a corresponding paginated list"
        );
        assert_eq!(
            SetupError::controls_without_list("books").to_string(),
            "pagination controls (id: books) cannot be used without a corresponding paginated list"
        );
    }
}
