pub(crate) mod editable_title;
pub(crate) mod entry_form;
pub(crate) mod list_panel;
pub(crate) mod loading;
pub(crate) mod task_panel;

pub use editable_title::{EditableTitle, TitleCommit};
pub use entry_form::EntryForm;
pub use list_panel::ListPanel;
pub use task_panel::TaskPanel;
