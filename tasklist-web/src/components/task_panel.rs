use crate::components::{EditableTitle, TitleCommit};
use chrono::NaiveDateTime;
use shared::models::{Task, TaskId};
use wasm_bindgen::JsValue;
use yew::{Callback, Children, Html, MouseEvent, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct TaskPanelProps {
    pub header: String,
    pub tasks: Vec<Task>,
    #[prop_or(false)]
    pub inline_edit: bool,
    #[prop_or(false)]
    pub show_due_dates: bool,
    pub on_delete: Callback<TaskId>,
    pub on_rename: Callback<(TaskId, TitleCommit)>,
    /// The new task form; rendered under the header.
    #[prop_or_default]
    pub children: Children,
}

/// Due date in the browser's locale, falling back to ISO format.
pub fn format_due_date(due: NaiveDateTime) -> String {
    if cfg!(target_arch = "wasm32") {
        let iso = due.format("%Y-%m-%dT%H:%M:%S").to_string();
        let date = js_sys::Date::new(&JsValue::from_str(&iso));
        String::from(date.to_locale_date_string("default", &JsValue::UNDEFINED))
    } else {
        due.format("%Y-%m-%d").to_string()
    }
}

#[function_component(TaskPanel)]
pub fn task_panel(props: &TaskPanelProps) -> Html {
    html! {
        <section class="flex flex-col gap-2">
            <h2 id="tasksHeader" class="text-xl font-semibold">{ props.header.clone() }</h2>
            { props.children.clone() }
            <ul id="tasksContainer" class="divide-y divide-base-300">
                { for props.tasks.iter().map(|task| {
                    let id = task.id;
                    let on_delete = {
                        let on_delete = props.on_delete.clone();
                        Callback::from(move |event: MouseEvent| {
                            event.stop_propagation();
                            on_delete.emit(id);
                        })
                    };
                    let on_commit = {
                        let on_rename = props.on_rename.clone();
                        Callback::from(move |commit: TitleCommit| on_rename.emit((id, commit)))
                    };
                    let due = task
                        .due_date
                        .filter(|_| props.show_due_dates)
                        .map(|due| html! {
                            <span class="due-date text-sm text-base-content/70">
                                { format!(" (Due: {})", format_due_date(due)) }
                            </span>
                        });
                    html! {
                        <li key={id.0} class="task-item flex justify-between items-center p-2" data-id={id.to_string()}>
                            <div>
                                <EditableTitle
                                    title={task.title.clone()}
                                    editable={props.inline_edit}
                                    {on_commit}
                                />
                                { for due }
                            </div>
                            <button class="btn btn-ghost btn-xs delete-btn" onclick={on_delete}>
                                {"✖"}
                            </button>
                        </li>
                    }
                })}
            </ul>
        </section>
    }
}
