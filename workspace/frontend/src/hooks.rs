use homeprice_common::session::AuthStatus;
use std::rc::Rc;
use yew::prelude::*;

use crate::api_client::firestore::FirestoreStore;
use crate::api_client::ApiClient;
use crate::settings::AppSettings;

/// Backend clients built from the startup settings.
#[derive(Clone, PartialEq)]
pub struct Services {
    pub settings: Rc<AppSettings>,
    pub api: ApiClient,
    pub store: FirestoreStore,
}

impl Services {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            api: ApiClient::new(&settings),
            store: FirestoreStore::new(&settings),
            settings: Rc::new(settings),
        }
    }
}

/// What the page knows about the signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Checking,
    Known(AuthStatus),
}

impl SessionState {
    pub fn is_checking(&self) -> bool {
        matches!(self, Self::Checking)
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::Known(status) if status.logged_in)
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Known(status) => status.email(),
            Self::Checking => None,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub state: SessionState,
    /// Asks the identity provider again
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_services() -> Services {
    use_context::<Services>().expect("Services context is provided by App")
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext is provided by SessionProvider")
}
