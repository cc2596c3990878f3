use super::required_title;
use crate::api::TodoApi;
use crate::config::FeatureFlags;
use crate::edit::{EditCommit, decide};
use crate::errors::{ClientError, ClientResult, ValidationError};
use crate::models::{ListId, NewList, NewTask, Task, TaskId, TodoList, todo::parse_due_date_input};
use crate::session::SessionStore;
use crate::state::{DashboardAction, DashboardStore, Ticket, Transition};
use tracing::{debug, warn};

/// Drives the dashboard: lists on the left, tasks of the selected list on
/// the right.
///
/// Nothing is inserted optimistically. Every mutation is followed by a
/// refetch of the collection it touched, and only the response to the most
/// recent fetch of a collection is rendered.
#[derive(Debug, Clone)]
pub struct DashboardController<A, S> {
    api: A,
    store: S,
    features: FeatureFlags,
}

impl<A: TodoApi, S: DashboardStore> DashboardController<A, S> {
    /// Controller over `api` that renders into `store`.
    #[must_use]
    pub fn new(api: A, store: S, features: FeatureFlags) -> Self {
        Self {
            api,
            store,
            features,
        }
    }

    /// The backend this controller talks to.
    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Where dashboard state is kept.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn issue(&self, action: DashboardAction) -> Option<Ticket> {
        match self.store.apply(action) {
            Transition::Issued(ticket) => Some(ticket),
            _ => None,
        }
    }

    /// Initial load of the dashboard.
    ///
    /// # Errors
    /// Propagates the failure of the list fetch.
    pub async fn load(&self) -> ClientResult<()> {
        self.refresh_lists().await
    }

    /// Fetch and render every list.
    ///
    /// # Errors
    /// Propagates the failure of the list fetch.
    pub async fn refresh_lists(&self) -> ClientResult<()> {
        let Some(ticket) = self.issue(DashboardAction::ListsRequested) else {
            return Ok(());
        };
        let lists = self.api.lists().await?;
        self.store
            .apply(DashboardAction::ListsLoaded { ticket, lists });
        Ok(())
    }

    /// Refetch the tasks of the selected list, if there is one.
    ///
    /// # Errors
    /// Propagates the failure of the task fetch.
    pub async fn refresh_tasks(&self) -> ClientResult<()> {
        let Some(list_id) = self.store.snapshot().selected_id() else {
            return Ok(());
        };
        let Some(ticket) = self.issue(DashboardAction::TasksRequested) else {
            return Ok(());
        };
        self.fetch_tasks(ticket, list_id).await
    }

    async fn fetch_tasks(&self, ticket: Ticket, list_id: ListId) -> ClientResult<()> {
        let tasks = self.api.tasks(list_id).await?;
        if self.store.apply(DashboardAction::TasksLoaded {
            ticket,
            list_id,
            tasks,
        }) == Transition::Discarded
        {
            debug!(%list_id, "task response superseded by a newer fetch");
        }
        Ok(())
    }

    /// Select `list` and show its tasks.
    ///
    /// # Errors
    /// Propagates the failure of the task fetch; the selection stays.
    pub async fn select_list(&self, list: TodoList) -> ClientResult<()> {
        let list_id = list.id;
        let Some(ticket) = self.issue(DashboardAction::ListSelected(list)) else {
            return Ok(());
        };
        self.fetch_tasks(ticket, list_id).await
    }

    /// Create a list titled `title` and refetch the lists.
    ///
    /// # Errors
    /// [`ValidationError::EmptyTitle`] without sending anything for a blank
    /// title, otherwise the failure of the create or refetch request.
    pub async fn create_list(&self, title: &str) -> ClientResult<TodoList> {
        let title = required_title(title)?;
        let created = self.api.create_list(&NewList::titled(title)).await?;
        self.refresh_lists().await?;
        Ok(created)
    }

    /// Delete a list, clearing the task panel first if it was selected.
    ///
    /// # Errors
    /// Propagates the failure of the delete or refetch request.
    pub async fn delete_list(&self, id: ListId) -> ClientResult<()> {
        self.api.delete_list(id).await?;
        if self.store.snapshot().is_selected(id) {
            self.store.apply(DashboardAction::SelectionCleared);
        }
        self.refresh_lists().await
    }

    /// Rename a list in place.
    ///
    /// Returns the saved record, or `None` when the edit was empty, unchanged,
    /// or inline editing is disabled; no request is sent in those cases.
    ///
    /// # Errors
    /// [`ClientError::EditReverted`] when the update fails; the displayed
    /// title stays at its pre-edit value.
    pub async fn rename_list(&self, id: ListId, edited: &str) -> ClientResult<Option<TodoList>> {
        if !self.features.inline_edit {
            return Ok(None);
        }
        let Some(record) = self.store.snapshot().find_list(id).cloned() else {
            return Ok(None);
        };
        let EditCommit::Save(title) = decide(&record.title, edited) else {
            return Ok(None);
        };
        let updated = self
            .api
            .update_list(&record.with_title(title))
            .await
            .map_err(reverted)?;
        self.store.apply(DashboardAction::ListReplaced(updated.clone()));
        Ok(Some(updated))
    }

    /// Create a pending task in the selected list and refetch its tasks.
    ///
    /// `due_date` is the raw value of the date picker; it is ignored when
    /// due dates are disabled.
    ///
    /// # Errors
    /// A [`ValidationError`] without sending anything for a blank title or a
    /// missing selection, otherwise the failure of the create or refetch
    /// request.
    pub async fn create_task(&self, title: &str, due_date: &str) -> ClientResult<Task> {
        let title = required_title(title)?;
        let list_id = self
            .store
            .snapshot()
            .selected_id()
            .ok_or(ValidationError::NoListSelected)?;
        let due_date = if self.features.due_dates {
            parse_due_date_input(due_date)
        } else {
            None
        };
        let created = self
            .api
            .create_task(list_id, &NewTask::pending(title, due_date))
            .await?;
        self.refresh_tasks().await?;
        Ok(created)
    }

    /// Delete a task and refetch the selected list's tasks.
    ///
    /// # Errors
    /// Propagates the failure of the delete or refetch request.
    pub async fn delete_task(&self, id: TaskId) -> ClientResult<()> {
        self.api.delete_task(id).await?;
        self.refresh_tasks().await
    }

    /// Rename a task in place; see [`Self::rename_list`].
    ///
    /// # Errors
    /// [`ClientError::EditReverted`] when the update fails.
    pub async fn rename_task(&self, id: TaskId, edited: &str) -> ClientResult<Option<Task>> {
        if !self.features.inline_edit {
            return Ok(None);
        }
        let Some(record) = self.store.snapshot().find_task(id).cloned() else {
            return Ok(None);
        };
        let EditCommit::Save(title) = decide(&record.title, edited) else {
            return Ok(None);
        };
        let updated = self
            .api
            .update_task(&record.with_title(title))
            .await
            .map_err(reverted)?;
        self.store.apply(DashboardAction::TaskReplaced(updated.clone()));
        Ok(Some(updated))
    }

    /// Forget the token and every piece of dashboard state.
    pub fn logout(&self, session: &impl SessionStore) {
        session.clear();
        self.store.apply(DashboardAction::Reset);
    }
}

fn reverted(error: ClientError) -> ClientError {
    warn!(%error, "inline edit reverted");
    ClientError::EditReverted(Box::new(error))
}
