use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TableToolbarProps {
    pub search_query: String,
    pub status_filter: Option<String>,
    /// Empty hides the status dropdown
    pub status_options: &'static [&'static str],
    pub on_search: Callback<String>,
    pub on_status: Callback<String>,
    pub on_reload: Callback<()>,
    pub loading: bool,
    /// Extra buttons, e.g. "Add product"
    #[prop_or_default]
    pub children: Html,
}

#[function_component(TableToolbar)]
pub fn table_toolbar(props: &TableToolbarProps) -> Html {
    let on_search_input = props.on_search.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    let on_status_change = props.on_status.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value()
    });

    let on_reload = props.on_reload.reform(|_: MouseEvent| ());
    let selected = props.status_filter.as_deref().unwrap_or_default();

    html! {
        <div class="table-toolbar">
            <input
                type="search"
                class="table-search"
                placeholder="Search..."
                value={props.search_query.clone()}
                oninput={on_search_input}
            />
            if !props.status_options.is_empty() {
                <select class="status-filter" onchange={on_status_change}>
                    <option value="" selected={selected.is_empty()}>{"All statuses"}</option>
                    {for props.status_options.iter().map(|option| html! {
                        <option
                            value={*option}
                            selected={option.eq_ignore_ascii_case(selected)}
                        >
                            {*option}
                        </option>
                    })}
                </select>
            }
            <button class="reload" onclick={on_reload} disabled={props.loading}>
                {if props.loading { "Loading..." } else { "Reload" }}
            </button>
            {props.children.clone()}
        </div>
    }
}
