use admin_domain::FetchError;
use yew::prelude::*;

/// One table column: a heading and how to render a row's cell
pub struct Column<T> {
    pub header: &'static str,
    pub cell: fn(&T) -> Html,
}

impl<T> Column<T> {
    pub fn new(header: &'static str, cell: fn(&T) -> Html) -> Self {
        Self { header, cell }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header,
            cell: self.cell,
        }
    }
}

// Columns are fixed per screen, so the heading identifies them
impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header
    }
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps<T: PartialEq + 'static> {
    pub rows: Vec<T>,
    pub columns: Vec<Column<T>>,
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<FetchError>,
    #[prop_or_default]
    pub on_retry: Callback<()>,
    #[prop_or_default]
    pub on_edit: Option<Callback<T>>,
}

#[function_component]
pub fn DataTable<T>(props: &DataTableProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    let error_panel = props.error.as_ref().map(|error| {
        if error.is_unauthorized() {
            html! {
                <div class="table-error">
                    <p>{"Your session has expired."}</p>
                    <a href="/login">{"Sign in again"}</a>
                </div>
            }
        } else {
            let on_retry = props.on_retry.reform(|_: MouseEvent| ());
            html! {
                <div class="table-error">
                    <p>{error.to_string()}</p>
                    <button onclick={on_retry} disabled={props.loading}>{"Retry"}</button>
                </div>
            }
        }
    });

    let body = if props.loading && props.rows.is_empty() {
        html! { <div class="loading">{"Loading..."}</div> }
    } else if props.rows.is_empty() {
        if error_panel.is_some() {
            html! {}
        } else {
            html! { <div class="empty-state">{"No records found"}</div> }
        }
    } else {
        html! {
            <div class={classes!("table-container", props.loading.then_some("refreshing"))}>
                <table class="data-table">
                    <thead>
                        <tr>
                            {for props.columns.iter().map(|column| html! { <th>{column.header}</th> })}
                            if props.on_edit.is_some() {
                                <th class="actions">{"Actions"}</th>
                            }
                        </tr>
                    </thead>
                    <tbody>
                        {for props.rows.iter().map(|row| {
                            let edit = props.on_edit.as_ref().map(|on_edit| {
                                let row = row.clone();
                                let on_click = on_edit.reform(move |_: MouseEvent| row.clone());
                                html! {
                                    <td class="actions">
                                        <button class="edit" onclick={on_click}>{"Edit"}</button>
                                    </td>
                                }
                            });

                            html! {
                                <tr>
                                    {for props.columns.iter().map(|column| html! { <td>{(column.cell)(row)}</td> })}
                                    {edit.unwrap_or_default()}
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <section class="data-table-section">
            {error_panel.unwrap_or_default()}
            {body}
        </section>
    }
}
