use crate::api::TodoClient;
use crate::components::{EntryForm, ListPanel, TaskPanel, TitleCommit};
use crate::config::FrontendConfig;
use crate::models::app_state::{DashboardDispatch, DashboardSlice};
use crate::notify;
use i18nrs::yew::use_translation;
use shared::controllers::DashboardController;
use shared::models::{ListId, TaskId, TodoList};
use std::future::Future;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::Dispatch;
use yewdux::prelude::use_store;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

type Controller = DashboardController<TodoClient, DashboardDispatch>;

/// Run `action` against a fresh controller in the background.
///
/// Every controller method reads the store again after each await, so the
/// dispatch captured here never hands out stale state.
fn run<F, Fut>(dispatch: &Dispatch<DashboardSlice>, action: F)
where
    F: FnOnce(Controller) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let controller = DashboardController::new(
        TodoClient::shared(),
        DashboardDispatch::from(dispatch.clone()),
        FrontendConfig::new().features(),
    );
    spawn_local(action(controller));
}

/// `DashboardPage` page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (i18n, ..) = use_translation();
    let (slice, dispatch) = use_store::<DashboardSlice>();
    let features = FrontendConfig::new().features();
    let list_title = use_state(String::new);
    let task_title = use_state(String::new);
    let task_due = use_state(String::new);

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |()| {
            log("Loading lists");
            run(&dispatch, move |controller| async move {
                notify::report_err(&controller.load().await);
            });
            || ()
        });
    }

    let on_create_list = {
        let dispatch = dispatch.clone();
        let list_title = list_title.clone();
        Callback::from(move |()| {
            let title = (*list_title).clone();
            let list_title = list_title.clone();
            run(&dispatch, move |controller| async move {
                match controller.create_list(&title).await {
                    Ok(_) => list_title.set(String::new()),
                    Err(error) => notify::report(&error),
                }
            });
        })
    };

    let on_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |list: TodoList| {
            run(&dispatch, move |controller| async move {
                notify::report_err(&controller.select_list(list).await);
            });
        })
    };

    let on_delete_list = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: ListId| {
            run(&dispatch, move |controller| async move {
                notify::report_err(&controller.delete_list(id).await);
            });
        })
    };

    let on_rename_list = {
        let dispatch = dispatch.clone();
        Callback::from(move |(id, commit): (ListId, TitleCommit)| {
            run(&dispatch, move |controller| async move {
                let saved = controller.rename_list(id, &commit.title).await;
                if !matches!(saved, Ok(Some(_))) {
                    commit.revert.emit(());
                }
                notify::report_err(&saved);
            });
        })
    };

    let on_create_task = {
        let dispatch = dispatch.clone();
        let task_title = task_title.clone();
        let task_due = task_due.clone();
        Callback::from(move |()| {
            let title = (*task_title).clone();
            let due = (*task_due).clone();
            let task_title = task_title.clone();
            let task_due = task_due.clone();
            run(&dispatch, move |controller| async move {
                match controller.create_task(&title, &due).await {
                    Ok(_) => {
                        task_title.set(String::new());
                        task_due.set(String::new());
                    }
                    Err(error) => notify::report(&error),
                }
            });
        })
    };

    let on_delete_task = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: TaskId| {
            run(&dispatch, move |controller| async move {
                notify::report_err(&controller.delete_task(id).await);
            });
        })
    };

    let on_rename_task = Callback::from(move |(id, commit): (TaskId, TitleCommit)| {
        run(&dispatch, move |controller| async move {
            let saved = controller.rename_task(id, &commit.title).await;
            if !matches!(saved, Ok(Some(_))) {
                commit.revert.emit(());
            }
            notify::report_err(&saved);
        });
    });

    let set = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |value: String| handle.set(value))
    };

    let state = &slice.0;
    let task_form = state.task_form_visible().then(|| {
        html! {
            <EntryForm
                id="taskForm"
                placeholder={i18n.t("dashboard.new_task")}
                submit_label={i18n.t("dashboard.add_task")}
                title={(*task_title).clone()}
                on_title={set(&task_title)}
                due_date={features.due_dates.then(|| AttrValue::from((*task_due).clone()))}
                on_due_date={set(&task_due)}
                on_submit={on_create_task}
            />
        }
    });

    html! {
        <div class="grid gap-6 md:grid-cols-3">
            <section class="flex flex-col gap-2">
                <h2 class="text-xl font-semibold">{ i18n.t("dashboard.lists") }</h2>
                <EntryForm
                    id="listForm"
                    placeholder={i18n.t("dashboard.new_list")}
                    submit_label={i18n.t("dashboard.add_list")}
                    title={(*list_title).clone()}
                    on_title={set(&list_title)}
                    on_submit={on_create_list}
                />
                <ListPanel
                    lists={state.lists().to_vec()}
                    selected={state.selected_id()}
                    inline_edit={features.inline_edit}
                    {on_select}
                    on_delete={on_delete_list}
                    on_rename={on_rename_list}
                />
            </section>
            <div class="md:col-span-2">
                <TaskPanel
                    header={state.tasks_header()}
                    tasks={state.tasks().to_vec()}
                    inline_edit={features.inline_edit}
                    show_due_dates={features.due_dates}
                    on_delete={on_delete_task}
                    on_rename={on_rename_task}
                >
                    { for task_form }
                </TaskPanel>
            </div>
        </div>
    }
}
