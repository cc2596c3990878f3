use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center h-full animate-fadeIn">
            <div class="bg-base-200 p-6 rounded-lg shadow-md flex flex-col items-center">
                <span class="text-xl font-medium">{"Tasklist"}</span>
                <span class="loading loading-dots loading-md mt-3"></span>
            </div>
        </div>
    }
}
