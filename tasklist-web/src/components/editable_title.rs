use shared::edit::{EditCommit, InlineEdit};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// A committed title edit.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleCommit {
    /// Trimmed, changed, non-empty title to persist.
    pub title: String,
    /// Emit when the save did not go through; the old title is shown again.
    pub revert: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct EditableTitleProps {
    pub title: AttrValue,
    /// Double-click does nothing when false.
    #[prop_or(true)]
    pub editable: bool,
    /// Receives every edit that should be saved.
    pub on_commit: Callback<TitleCommit>,
}

/// A title that turns into a text input on double-click.
///
/// Enter or blur commits, Escape restores the original text. The edit
/// state lives in a `use_mut_ref` so a blur that follows Enter sees the
/// session already closed and does not commit twice. A committed title
/// stays in place until `title` changes or the parent reverts it.
#[function_component(EditableTitle)]
pub fn editable_title(props: &EditableTitleProps) -> Html {
    let edit = use_mut_ref(InlineEdit::default);
    let rerender = use_force_update();
    let input_ref = use_node_ref();
    let active = edit.borrow().is_active();

    {
        let input_ref = input_ref.clone();
        use_effect_with(active, move |active| {
            if *active && let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.focus().unwrap_or_default();
                input.select();
            }
            || {}
        });
    }

    let commit = {
        let edit = edit.clone();
        let rerender = rerender.clone();
        let on_commit = props.on_commit.clone();
        Callback::from(move |()| {
            let decision = edit.borrow_mut().commit();
            rerender.force_update();
            if let Some(EditCommit::Save(title)) = decision {
                let revert = {
                    let edit = edit.clone();
                    let rerender = rerender.clone();
                    Callback::from(move |()| {
                        edit.borrow_mut().save_failed();
                        rerender.force_update();
                    })
                };
                on_commit.emit(TitleCommit { title, revert });
            }
        })
    };

    if !active {
        let ondblclick = {
            let edit = edit.clone();
            let title = props.title.clone();
            let editable = props.editable;
            Callback::from(move |event: MouseEvent| {
                if !editable {
                    return;
                }
                event.stop_propagation();
                *edit.borrow_mut() = InlineEdit::begin(title.to_string());
                rerender.force_update();
            })
        };
        let shown = edit.borrow_mut().shown(&props.title);
        return html! {
            <span class="title" {ondblclick}>{ shown }</span>
        };
    }

    let oninput = {
        let edit = edit.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                edit.borrow_mut().input(input.value());
            }
        })
    };

    let onkeydown = {
        let edit = edit.clone();
        let commit = commit.clone();
        Callback::from(move |event: KeyboardEvent| match event.key().as_str() {
            "Enter" => {
                event.prevent_default();
                commit.emit(());
            }
            "Escape" => {
                edit.borrow_mut().cancel();
                rerender.force_update();
            }
            _ => {}
        })
    };

    let onblur = Callback::from(move |_: FocusEvent| commit.emit(()));
    let draft = edit.borrow().draft().to_string();

    html! {
        <input
            ref={input_ref}
            class="input input-bordered input-sm edit-input"
            type="text"
            value={draft}
            onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}
            {oninput}
            {onkeydown}
            {onblur}
        />
    }
}
