use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EntryFormProps {
    pub id: AttrValue,
    pub placeholder: AttrValue,
    pub submit_label: AttrValue,
    pub title: AttrValue,
    pub on_title: Callback<String>,
    /// Renders a date picker next to the title when set.
    #[prop_or(None)]
    pub due_date: Option<AttrValue>,
    #[prop_or_default]
    pub on_due_date: Callback<String>,
    pub on_submit: Callback<()>,
}

fn input_value(event: &InputEvent) -> Option<String> {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
}

/// Single-line "new item" form used for lists and tasks.
#[function_component(EntryForm)]
pub fn entry_form(props: &EntryFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };
    let on_title = {
        let on_title = props.on_title.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                on_title.emit(value);
            }
        })
    };

    let due_date = props.due_date.as_ref().map(|value| {
        let on_due_date = props.on_due_date.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                on_due_date.emit(value);
            }
        });
        html! {
            <input class="input input-bordered" type="date" value={value.clone()} {oninput} />
        }
    });

    html! {
        <form id={props.id.clone()} class="flex gap-2 my-2" {onsubmit}>
            <input
                class="input input-bordered flex-grow"
                type="text"
                placeholder={props.placeholder.clone()}
                value={props.title.clone()}
                oninput={on_title}
            />
            { for due_date }
            <button class="btn btn-primary" type="submit">{ props.submit_label.clone() }</button>
        </form>
    }
}
