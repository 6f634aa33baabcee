use admin_domain::AdminResource;
use yew::prelude::*;

use crate::components::data_table::{Column, DataTable};
use crate::components::pagination::Pagination;
use crate::components::table_toolbar::TableToolbar;
use crate::hooks::use_table_data::use_table_data;
use crate::services::api::{ApiClient, ResourceSource};

#[derive(Properties, PartialEq)]
pub struct ResourceListProps<R: AdminResource> {
    pub client: ApiClient,
    pub columns: Vec<Column<R>>,
    pub page_size: usize,
    #[prop_or_default]
    pub on_edit: Option<Callback<R>>,
    /// Bumped by the parent to force a reload, e.g. after a save
    #[prop_or_default]
    pub revision: u32,
    #[prop_or_default]
    pub children: Html,
}

/// List screen for one admin resource: toolbar, table and pager
#[function_component]
pub fn ResourceList<R>(props: &ResourceListProps<R>) -> Html
where
    R: AdminResource,
{
    let source = ResourceSource::<R>::new(props.client.clone());
    let table = use_table_data(source, R::table_config().with_page_size(props.page_size));

    {
        let reload = table.reload.clone();
        use_effect_with(props.revision, move |revision| {
            if *revision > 0 {
                reload.emit(());
            }
        });
    }

    let snapshot = &table.snapshot;

    html! {
        <div class="resource-list">
            <h1>{R::TITLE}</h1>
            <TableToolbar
                search_query={snapshot.search_query.clone()}
                status_filter={snapshot.status_filter.clone()}
                status_options={R::status_options()}
                on_search={table.set_search_query.clone()}
                on_status={table.set_status_filter.clone()}
                on_reload={table.reload.clone()}
                loading={snapshot.is_loading}
            >
                {props.children.clone()}
            </TableToolbar>
            <DataTable<R>
                rows={snapshot.paginated_data.clone()}
                columns={props.columns.clone()}
                loading={snapshot.is_loading}
                error={snapshot.error.clone()}
                on_retry={table.reload.clone()}
                on_edit={props.on_edit.clone()}
            />
            <Pagination
                current_page={snapshot.current_page}
                total_pages={snapshot.total_pages}
                filtered_len={snapshot.filtered_len}
                total_len={snapshot.total_len}
                on_page_change={table.set_current_page.clone()}
            />
        </div>
    }
}
