//! Dashboard state and its reducer.
//!
//! Collections are only ever replaced wholesale by a confirmed server read.
//! Each fetch is tagged with a [`Ticket`] when it starts; a response whose
//! ticket is no longer current is discarded, so the last request wins no
//! matter in which order responses arrive.

use crate::models::{ListId, Task, TaskId, TodoList};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Header shown above the task panel when no list is selected.
pub const NO_SELECTION_HEADER: &str = "Select a list to see tasks";

/// Generation number of a collection fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticket(u64);

impl Ticket {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    lists: Vec<TodoList>,
    tasks: Vec<Task>,
    selected: Option<TodoList>,
    lists_ticket: Ticket,
    tasks_ticket: Ticket,
}

/// Inputs to [`DashboardState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    /// A list fetch is starting.
    ListsRequested,
    /// A list fetch finished.
    ListsLoaded { ticket: Ticket, lists: Vec<TodoList> },
    /// The user picked a list; its tasks are about to be fetched.
    ListSelected(TodoList),
    /// A task refetch for the selected list is starting.
    TasksRequested,
    /// A task fetch finished.
    TasksLoaded {
        ticket: Ticket,
        list_id: ListId,
        tasks: Vec<Task>,
    },
    /// The server confirmed an updated list record.
    ListReplaced(TodoList),
    /// The server confirmed an updated task record.
    TaskReplaced(Task),
    /// The selected list went away.
    SelectionCleared,
    /// Back to the initial state, as after logout.
    Reset,
}

/// What an action did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The state changed.
    Applied,
    /// A fetch may start; its response must carry this ticket.
    Issued(Ticket),
    /// The action was stale or meaningless and the state is unchanged.
    Discarded,
}

impl DashboardState {
    /// Lists in the order the backend returned them.
    #[must_use]
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The list whose tasks are shown.
    #[must_use]
    pub fn selected(&self) -> Option<&TodoList> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<ListId> {
        self.selected.as_ref().map(|list| list.id)
    }

    #[must_use]
    pub fn is_selected(&self, id: ListId) -> bool {
        self.selected_id() == Some(id)
    }

    /// Text above the task panel.
    #[must_use]
    pub fn tasks_header(&self) -> String {
        self.selected.as_ref().map_or_else(
            || NO_SELECTION_HEADER.to_string(),
            |list| format!("Tasks in \"{}\"", list.title),
        )
    }

    /// The task form is only offered once a list is selected.
    #[must_use]
    pub fn task_form_visible(&self) -> bool {
        self.selected.is_some()
    }

    /// Rendered list with `id`, if any.
    #[must_use]
    pub fn find_list(&self, id: ListId) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.id == id)
    }

    #[must_use]
    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Reducer for every dashboard change.
    pub fn apply(&mut self, action: DashboardAction) -> Transition {
        match action {
            DashboardAction::ListsRequested => {
                self.lists_ticket = self.lists_ticket.next();
                Transition::Issued(self.lists_ticket)
            }
            DashboardAction::ListsLoaded { ticket, lists } => {
                if ticket != self.lists_ticket {
                    debug!(?ticket, current = ?self.lists_ticket, "discarding stale list response");
                    return Transition::Discarded;
                }
                if let Some(selected) = self.selected.as_mut()
                    && let Some(fresh) = lists.iter().find(|list| list.id == selected.id)
                {
                    *selected = fresh.clone();
                }
                self.lists = lists;
                Transition::Applied
            }
            DashboardAction::ListSelected(list) => {
                debug!(list_id = %list.id, "list selected");
                self.selected = Some(list);
                self.tasks.clear();
                self.tasks_ticket = self.tasks_ticket.next();
                Transition::Issued(self.tasks_ticket)
            }
            DashboardAction::TasksRequested => {
                if self.selected.is_none() {
                    return Transition::Discarded;
                }
                self.tasks_ticket = self.tasks_ticket.next();
                Transition::Issued(self.tasks_ticket)
            }
            DashboardAction::TasksLoaded {
                ticket,
                list_id,
                tasks,
            } => {
                if ticket != self.tasks_ticket || self.selected_id() != Some(list_id) {
                    debug!(?ticket, current = ?self.tasks_ticket, %list_id, "discarding stale task response");
                    return Transition::Discarded;
                }
                self.tasks = tasks;
                Transition::Applied
            }
            DashboardAction::ListReplaced(list) => {
                let Some(slot) = self.lists.iter_mut().find(|item| item.id == list.id) else {
                    return Transition::Discarded;
                };
                *slot = list.clone();
                if let Some(selected) = self.selected.as_mut()
                    && selected.id == list.id
                {
                    *selected = list;
                }
                Transition::Applied
            }
            DashboardAction::TaskReplaced(task) => {
                match self.tasks.iter_mut().find(|item| item.id == task.id) {
                    Some(slot) => {
                        *slot = task;
                        Transition::Applied
                    }
                    None => Transition::Discarded,
                }
            }
            DashboardAction::SelectionCleared => {
                self.selected = None;
                self.tasks.clear();
                self.tasks_ticket = self.tasks_ticket.next();
                Transition::Applied
            }
            DashboardAction::Reset => {
                // Tickets keep counting so responses from before the reset stay stale.
                *self = Self {
                    lists_ticket: self.lists_ticket.next(),
                    tasks_ticket: self.tasks_ticket.next(),
                    ..Self::default()
                };
                Transition::Applied
            }
        }
    }
}

/// Shared, mutable home of a [`DashboardState`].
///
/// The browser keeps the state in a yewdux store; tests keep it in a
/// `RefCell`. Controllers read a fresh snapshot after every await, never a
/// value captured before it.
pub trait DashboardStore {
    /// Current state.
    fn snapshot(&self) -> DashboardState;
    /// Run the reducer against the current state.
    fn apply(&self, action: DashboardAction) -> Transition;
}

impl DashboardStore for RefCell<DashboardState> {
    fn snapshot(&self) -> DashboardState {
        self.borrow().clone()
    }

    fn apply(&self, action: DashboardAction) -> Transition {
        self.borrow_mut().apply(action)
    }
}

impl<S: DashboardStore + ?Sized> DashboardStore for Rc<S> {
    fn snapshot(&self) -> DashboardState {
        (**self).snapshot()
    }

    fn apply(&self, action: DashboardAction) -> Transition {
        (**self).apply(action)
    }
}

impl<S: DashboardStore + ?Sized> DashboardStore for &S {
    fn snapshot(&self) -> DashboardState {
        (**self).snapshot()
    }

    fn apply(&self, action: DashboardAction) -> Transition {
        (**self).apply(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{list, task};

    fn issued(transition: Transition) -> Ticket {
        match transition {
            Transition::Issued(ticket) => ticket,
            other => panic!("expected a ticket, got {other:?}"),
        }
    }

    fn with_lists(lists: Vec<TodoList>) -> DashboardState {
        let mut state = DashboardState::default();
        let ticket = issued(state.apply(DashboardAction::ListsRequested));
        assert_eq!(
            state.apply(DashboardAction::ListsLoaded { ticket, lists }),
            Transition::Applied
        );
        state
    }

    #[test]
    fn initial_state_has_no_selection() {
        let state = DashboardState::default();
        assert_eq!(state.tasks_header(), NO_SELECTION_HEADER);
        assert!(!state.task_form_visible());
        assert!(state.lists().is_empty());
    }

    #[test]
    fn lists_loaded_replaces_collection() {
        let mut state = with_lists(vec![list(1, "Home"), list(2, "Work")]);
        let ticket = issued(state.apply(DashboardAction::ListsRequested));
        state.apply(DashboardAction::ListsLoaded {
            ticket,
            lists: vec![list(3, "Errands")],
        });
        assert_eq!(state.lists(), &[list(3, "Errands")]);
    }

    #[test]
    fn last_selected_list_wins_over_late_response() {
        let mut state = with_lists(vec![list(1, "A"), list(2, "B")]);

        let ticket_a = issued(state.apply(DashboardAction::ListSelected(list(1, "A"))));
        let ticket_b = issued(state.apply(DashboardAction::ListSelected(list(2, "B"))));

        assert_eq!(
            state.apply(DashboardAction::TasksLoaded {
                ticket: ticket_b,
                list_id: ListId(2),
                tasks: vec![task(20, "b-task", 2)],
            }),
            Transition::Applied
        );
        assert_eq!(
            state.apply(DashboardAction::TasksLoaded {
                ticket: ticket_a,
                list_id: ListId(1),
                tasks: vec![task(10, "a-task", 1)],
            }),
            Transition::Discarded
        );

        assert_eq!(state.tasks(), &[task(20, "b-task", 2)]);
        assert_eq!(state.tasks_header(), "Tasks in \"B\"");
    }

    #[test]
    fn stale_list_response_is_discarded() {
        let mut state = DashboardState::default();
        let first = issued(state.apply(DashboardAction::ListsRequested));
        let second = issued(state.apply(DashboardAction::ListsRequested));

        state.apply(DashboardAction::ListsLoaded {
            ticket: second,
            lists: vec![list(1, "new")],
        });
        assert_eq!(
            state.apply(DashboardAction::ListsLoaded {
                ticket: first,
                lists: vec![list(1, "old")],
            }),
            Transition::Discarded
        );
        assert_eq!(state.lists(), &[list(1, "new")]);
    }

    #[test]
    fn selecting_clears_previous_tasks() {
        let mut state = with_lists(vec![list(1, "A"), list(2, "B")]);
        let ticket = issued(state.apply(DashboardAction::ListSelected(list(1, "A"))));
        state.apply(DashboardAction::TasksLoaded {
            ticket,
            list_id: ListId(1),
            tasks: vec![task(10, "a-task", 1)],
        });

        state.apply(DashboardAction::ListSelected(list(2, "B")));
        assert!(state.tasks().is_empty());
        assert!(state.is_selected(ListId(2)));
        assert!(!state.is_selected(ListId(1)));
    }

    #[test]
    fn clearing_selection_resets_task_panel_and_invalidates_fetches() {
        let mut state = with_lists(vec![list(1, "A")]);
        let ticket = issued(state.apply(DashboardAction::ListSelected(list(1, "A"))));

        state.apply(DashboardAction::SelectionCleared);
        assert_eq!(
            state.apply(DashboardAction::TasksLoaded {
                ticket,
                list_id: ListId(1),
                tasks: vec![task(10, "late", 1)],
            }),
            Transition::Discarded
        );
        assert_eq!(state.tasks_header(), NO_SELECTION_HEADER);
        assert!(!state.task_form_visible());
        assert!(state.tasks().is_empty());
    }

    #[test]
    fn tasks_requested_without_selection_is_discarded() {
        let mut state = DashboardState::default();
        assert_eq!(
            state.apply(DashboardAction::TasksRequested),
            Transition::Discarded
        );
    }

    #[test]
    fn list_replaced_updates_row_and_header() {
        let mut state = with_lists(vec![list(1, "A"), list(2, "B")]);
        state.apply(DashboardAction::ListSelected(list(1, "A")));

        state.apply(DashboardAction::ListReplaced(list(1, "Alpha")));
        assert_eq!(state.find_list(ListId(1)).unwrap().title, "Alpha");
        assert_eq!(state.tasks_header(), "Tasks in \"Alpha\"");
    }

    #[test]
    fn refetch_refreshes_selected_record() {
        let mut state = with_lists(vec![list(1, "A")]);
        state.apply(DashboardAction::ListSelected(list(1, "A")));

        let ticket = issued(state.apply(DashboardAction::ListsRequested));
        state.apply(DashboardAction::ListsLoaded {
            ticket,
            lists: vec![list(1, "Renamed elsewhere")],
        });
        assert_eq!(state.selected().unwrap().title, "Renamed elsewhere");
    }

    #[test]
    fn selection_survives_refetch_without_the_list() {
        let mut state = with_lists(vec![list(1, "A")]);
        state.apply(DashboardAction::ListSelected(list(1, "A")));

        let ticket = issued(state.apply(DashboardAction::ListsRequested));
        state.apply(DashboardAction::ListsLoaded {
            ticket,
            lists: Vec::new(),
        });
        assert!(state.is_selected(ListId(1)));
    }

    #[test]
    fn task_replaced_only_touches_known_tasks() {
        let mut state = with_lists(vec![list(1, "A")]);
        let ticket = issued(state.apply(DashboardAction::ListSelected(list(1, "A"))));
        state.apply(DashboardAction::TasksLoaded {
            ticket,
            list_id: ListId(1),
            tasks: vec![task(10, "old", 1)],
        });

        assert_eq!(
            state.apply(DashboardAction::TaskReplaced(task(10, "new", 1))),
            Transition::Applied
        );
        assert_eq!(
            state.apply(DashboardAction::TaskReplaced(task(99, "ghost", 1))),
            Transition::Discarded
        );
        assert_eq!(state.find_task(TaskId(10)).unwrap().title, "new");
    }

    #[test]
    fn reset_invalidates_in_flight_fetches() {
        let mut state = DashboardState::default();
        let ticket = issued(state.apply(DashboardAction::ListsRequested));
        state.apply(DashboardAction::Reset);
        assert_eq!(
            state.apply(DashboardAction::ListsLoaded {
                ticket,
                lists: vec![list(1, "A")],
            }),
            Transition::Discarded
        );
        assert!(state.lists().is_empty());
    }

    #[test]
    fn refcell_store_applies_actions() {
        let store = RefCell::new(DashboardState::default());
        let ticket = issued(DashboardStore::apply(&store, DashboardAction::ListsRequested));
        DashboardStore::apply(
            &store,
            DashboardAction::ListsLoaded {
                ticket,
                lists: vec![list(5, "Garden")],
            },
        );
        assert_eq!(store.snapshot().lists(), &[list(5, "Garden")]);
    }
}
