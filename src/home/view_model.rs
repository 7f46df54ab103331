//! Home view-model: login, search, and widget-page navigation intents.

use uuid::Uuid;

use crate::home::action::HomeAction;
use crate::home::event::HomeEvent;
use crate::home::state::{HomeModel, HomeUiState};
use crate::viewmodel::{Effects, ViewModel};

/// Toast shown when the credential check rejects a login attempt.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Pluggable synchronous credential check.
///
/// A placeholder seam: real validation (hashing, remote auth) lives
/// behind this trait in a consuming application.
pub trait CredentialCheck: Send + Sync {
    fn check(&self, username: &str, password: &str) -> bool;
}

impl<F> CredentialCheck for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn check(&self, username: &str, password: &str) -> bool {
        self(username, password)
    }
}

pub struct HomeViewModel {
    credentials: Box<dyn CredentialCheck>,
}

impl HomeViewModel {
    pub fn new<C>(credentials: C) -> Self
    where
        C: CredentialCheck + 'static,
    {
        Self {
            credentials: Box::new(credentials),
        }
    }

    fn refresh(&self, _model: &mut HomeModel) {
        // Placeholder refresh policy: the data list and loading flag are
        // left untouched until a data source is wired in.
        tracing::debug!("refresh requested");
    }

    fn login(&self, username: &str, password: &str, effects: &Effects<HomeEvent, HomeAction>) {
        if !self.credentials.check(username, password) {
            tracing::debug!("login rejected by credential check");
            effects.send_action(HomeAction::Toast(INVALID_CREDENTIALS_MESSAGE.to_string()));
            return;
        }

        // Opaque id standing in for whatever the real auth flow returns.
        let user_id = Uuid::new_v4().to_string();
        tracing::debug!("login succeeded");
        effects.send_action(HomeAction::NavigateLogin { user_id });
    }
}

impl Default for HomeViewModel {
    /// Placeholder policy: any non-empty credential pair is accepted.
    fn default() -> Self {
        Self::new(|username: &str, password: &str| !username.is_empty() && !password.is_empty())
    }
}

impl ViewModel for HomeViewModel {
    type Model = HomeModel;
    type State = HomeUiState;
    type Event = HomeEvent;
    type Action = HomeAction;

    fn init_model(&self) -> HomeModel {
        HomeModel::default()
    }

    fn project(model: &HomeModel) -> HomeUiState {
        model.to_ui_state()
    }

    fn on_event(
        &mut self,
        model: &mut HomeModel,
        event: HomeEvent,
        effects: &Effects<HomeEvent, HomeAction>,
    ) {
        match event {
            HomeEvent::Refresh => self.refresh(model),
            HomeEvent::SearchChanged(input) => model.search_input = input,
            HomeEvent::Login { username, password } => {
                self.login(&username, &password, effects);
            }
            HomeEvent::GotoWidgetPage => effects.send_action(HomeAction::GotoWidgetPage),
        }
    }
}
