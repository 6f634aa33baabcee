use admin_domain::table::{FetchOutcome, FetchTicket, TableSnapshot};
use admin_domain::{RecordSource, TableConfig, TableController, TableRecord};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Rendered table state plus the callbacks that change it
#[derive(Clone, PartialEq)]
pub struct UseTableDataHandle<T> {
    pub snapshot: TableSnapshot<T>,
    pub set_current_page: Callback<usize>,
    pub set_search_query: Callback<String>,
    pub set_status_filter: Callback<String>,
    pub reload: Callback<()>,
}

/// Drive a [`TableController`] from a component.
///
/// Fetches on mount and again whenever `source` changes. The first render
/// already reports loading. `config` is only read on the first render.
#[hook]
pub fn use_table_data<T, S>(source: S, config: TableConfig) -> UseTableDataHandle<T>
where
    T: TableRecord + Clone + PartialEq + 'static,
    S: RecordSource<T> + Clone + PartialEq + 'static,
{
    // Ticket of the fetch the controller starts out loading, until mount issues it
    let initial_ticket = use_mut_ref(|| None::<FetchTicket>);
    let controller = {
        let initial_ticket = initial_ticket.clone();
        use_mut_ref(move || {
            let (controller, ticket) = TableController::<T>::loading(config);
            *initial_ticket.borrow_mut() = Some(ticket);
            controller
        })
    };
    let mounted = use_mut_ref(|| true);
    let update = use_force_update();

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            *mounted.borrow_mut() = true;
            move || *mounted.borrow_mut() = false
        });
    }

    {
        let controller = controller.clone();
        let mounted = mounted.clone();
        let update = update.clone();
        use_effect_with(source.clone(), move |source| {
            let ticket = initial_ticket.borrow_mut().take();
            spawn_fetch(controller, mounted, update, ticket, source.clone());
            || ()
        });
    }

    let reload = {
        let controller = controller.clone();
        let mounted = mounted.clone();
        let update = update.clone();
        use_callback(source, move |_: (), source| {
            spawn_fetch(controller.clone(), mounted.clone(), update.clone(), None, source.clone());
        })
    };

    let set_current_page = {
        let controller = controller.clone();
        let update = update.clone();
        use_callback((), move |page: usize, _| {
            controller.borrow_mut().set_current_page(page);
            update.force_update();
        })
    };

    let set_search_query = {
        let controller = controller.clone();
        let update = update.clone();
        use_callback((), move |query: String, _| {
            controller.borrow_mut().set_search_query(query);
            update.force_update();
        })
    };

    let set_status_filter = {
        let controller = controller.clone();
        let update = update.clone();
        use_callback((), move |status: String, _| {
            controller.borrow_mut().set_status_filter(status);
            update.force_update();
        })
    };

    let snapshot = controller.borrow().snapshot();

    UseTableDataHandle {
        snapshot,
        set_current_page,
        set_search_query,
        set_status_filter,
        reload,
    }
}

// The controller borrow is released before the await and re-taken after it
fn spawn_fetch<T, S>(
    controller: Rc<RefCell<TableController<T>>>,
    mounted: Rc<RefCell<bool>>,
    update: UseForceUpdateHandle,
    ticket: Option<FetchTicket>,
    source: S,
) where
    T: TableRecord + 'static,
    S: RecordSource<T> + 'static,
{
    let ticket = match ticket {
        Some(ticket) => ticket,
        None => {
            let ticket = controller.borrow_mut().begin_fetch();
            update.force_update();
            ticket
        }
    };

    spawn_local(async move {
        let result = source.fetch().await;

        if !*mounted.borrow() {
            Logger::debug_with_component("use_table_data", "Dropping response for unmounted table");
            return;
        }

        let outcome = controller.borrow_mut().complete_fetch(ticket, result);
        match outcome {
            FetchOutcome::Stale => {}
            FetchOutcome::Failed => {
                if let Some(err) = controller.borrow().error() {
                    Logger::error_with_component("use_table_data", &err.to_string());
                }
                update.force_update();
            }
            FetchOutcome::Loaded { .. } => update.force_update(),
        }
    });
}
