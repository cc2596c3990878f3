use crate::components::{EditableTitle, TitleCommit};
use shared::models::{ListId, TodoList};
use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ListPanelProps {
    pub lists: Vec<TodoList>,
    #[prop_or(None)]
    pub selected: Option<ListId>,
    #[prop_or(false)]
    pub inline_edit: bool,
    pub on_select: Callback<TodoList>,
    pub on_delete: Callback<ListId>,
    pub on_rename: Callback<(ListId, TitleCommit)>,
}

#[function_component(ListPanel)]
pub fn list_panel(props: &ListPanelProps) -> Html {
    html! {
        <ul id="listsContainer" class="menu bg-base-200 rounded-box w-full">
            { for props.lists.iter().map(|list| {
                let is_selected = props.selected == Some(list.id);
                let id = list.id;
                let onclick = {
                    let on_select = props.on_select.clone();
                    let list = list.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(list.clone()))
                };
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
                html! {
                    <li
                        key={id.0}
                        class={classes!("list-item", is_selected.then_some("selected"))}
                        data-id={id.to_string()}
                        {onclick}
                    >
                        <div class="flex justify-between items-center">
                            <EditableTitle
                                title={list.title.clone()}
                                editable={props.inline_edit}
                                {on_commit}
                            />
                            <button class="btn btn-ghost btn-xs delete-btn" onclick={on_delete}>
                                {"✖"}
                            </button>
                        </div>
                    </li>
                }
            })}
        </ul>
    }
}
