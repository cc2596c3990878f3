use i18nrs::yew::use_translation;
use yew::{Callback, Children, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub on_logout: Callback<()>,
}

/// Chrome around signed-in pages: a navbar with the logout button.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();

    let onclick = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <div class="min-h-screen bg-base-100 flex flex-col">
            <nav class="navbar justify-between bg-base-300">
                <span class="text-lg font-bold px-4">{ i18n.t("app.title") }</span>
                <button id="logoutButton" class="btn btn-ghost" {onclick}>
                    { i18n.t("header.logout") }
                </button>
            </nav>
            <main class={classes!("flex-grow", "p-4")}>
                { props.children.clone() }
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    const INDEX_HTML: &str = include_str!("../../index.html");

    #[test]
    fn theme_comes_from_the_host_page() {
        assert!(INDEX_HTML.contains(r#"<html lang="en" data-theme="light">"#));
    }
}
