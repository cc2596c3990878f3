use crate::session::BrowserSession;
use shared::session::SessionStore;
use shared::state::{DashboardAction, DashboardState, DashboardStore, Transition};
use yewdux::{Context, Dispatch, Store};

/// Session-wide state the router guards read.
#[derive(Default, Clone, PartialEq)]
pub struct AppState {
    pub token: Option<String>,
}

impl Store for AppState {
    /// Starts from the token left in `localStorage` by an earlier visit.
    fn new(_cx: &Context) -> Self {
        Self {
            token: BrowserSession.get(),
        }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Dashboard lists, tasks and selection.
#[derive(Default, Clone, PartialEq, Store)]
pub struct DashboardSlice(pub DashboardState);

/// Lets the shared dashboard controller drive the yewdux store.
#[derive(Clone)]
pub struct DashboardDispatch(Dispatch<DashboardSlice>);

impl From<Dispatch<DashboardSlice>> for DashboardDispatch {
    fn from(dispatch: Dispatch<DashboardSlice>) -> Self {
        Self(dispatch)
    }
}

impl DashboardStore for DashboardDispatch {
    fn snapshot(&self) -> DashboardState {
        self.0.get().0.clone()
    }

    fn apply(&self, action: DashboardAction) -> Transition {
        let mut next = self.snapshot();
        let transition = next.apply(action);
        if transition != Transition::Discarded {
            self.0.set(DashboardSlice(next));
        }
        transition
    }
}
