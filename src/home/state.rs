//! Home screen state: private model and published projection.

use crate::mvi::UiState;

/// Published state of the Home screen.
///
/// Two shapes, selected purely by whether the data list is empty. Both
/// carry the fields every rendering of the screen needs.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeUiState {
    /// The screen has data to show.
    HasResult {
        is_loading: bool,
        error_message: String,
        search_input: String,
        data_list: Vec<String>,
    },
    /// The screen has no data yet.
    NoResult {
        is_loading: bool,
        error_message: String,
        search_input: String,
    },
}

impl UiState for HomeUiState {}

impl HomeUiState {
    pub fn is_loading(&self) -> bool {
        match self {
            Self::HasResult { is_loading, .. } | Self::NoResult { is_loading, .. } => *is_loading,
        }
    }

    pub fn error_message(&self) -> &str {
        match self {
            Self::HasResult { error_message, .. } | Self::NoResult { error_message, .. } => {
                error_message
            }
        }
    }

    pub fn search_input(&self) -> &str {
        match self {
            Self::HasResult { search_input, .. } | Self::NoResult { search_input, .. } => {
                search_input
            }
        }
    }
}

/// Private model owned by the Home view-model's host.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeModel {
    pub is_loading: bool,
    pub error_message: String,
    pub search_input: String,
    pub data_list: Vec<String>,
}

impl HomeModel {
    /// Pure projection to the published state.
    pub fn to_ui_state(&self) -> HomeUiState {
        if self.data_list.is_empty() {
            HomeUiState::NoResult {
                is_loading: self.is_loading,
                error_message: self.error_message.clone(),
                search_input: self.search_input.clone(),
            }
        } else {
            HomeUiState::HasResult {
                is_loading: self.is_loading,
                error_message: self.error_message.clone(),
                search_input: self.search_input.clone(),
                data_list: self.data_list.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_data_list_projects_to_no_result() {
        let model = HomeModel::default();
        assert!(matches!(model.to_ui_state(), HomeUiState::NoResult { .. }));
    }

    #[test]
    fn non_empty_data_list_projects_to_has_result() {
        let model = HomeModel {
            data_list: vec!["item".to_string()],
            ..HomeModel::default()
        };
        match model.to_ui_state() {
            HomeUiState::HasResult { data_list, .. } => {
                assert_eq!(data_list, vec!["item".to_string()]);
            }
            HomeUiState::NoResult { .. } => panic!("expected HasResult"),
        }
    }

    #[test]
    fn projection_preserves_shared_fields() {
        let model = HomeModel {
            is_loading: true,
            error_message: "boom".to_string(),
            search_input: "query".to_string(),
            data_list: Vec::new(),
        };
        let state = model.to_ui_state();
        assert!(state.is_loading());
        assert_eq!(state.error_message(), "boom");
        assert_eq!(state.search_input(), "query");
    }
}
