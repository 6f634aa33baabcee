use admin_domain::FormMode;
use shared::{Product, ProductUpsert};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::pages::columns;
use crate::pages::resource_list::ResourceList;
use crate::components::product_wizard_modal::ProductWizardModal;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ProductsPageProps {
    pub client: ApiClient,
    pub page_size: usize,
}

#[function_component(ProductsPage)]
pub fn products_page(props: &ProductsPageProps) -> Html {
    let form_mode = use_state(|| None::<FormMode<Product>>);
    let saving = use_state(|| false);
    let save_error = use_state(|| None::<String>);
    let revision = use_state(|| 0u32);

    let on_add = {
        let form_mode = form_mode.clone();
        Callback::from(move |_: MouseEvent| form_mode.set(Some(FormMode::Add)))
    };

    let on_edit = {
        let form_mode = form_mode.clone();
        Callback::from(move |product: Product| form_mode.set(Some(FormMode::Edit(product))))
    };

    let on_close = {
        let form_mode = form_mode.clone();
        let save_error = save_error.clone();
        Callback::from(move |_: ()| {
            form_mode.set(None);
            save_error.set(None);
        })
    };

    let on_submit = {
        let client = props.client.clone();
        let form_mode = form_mode.clone();
        let saving = saving.clone();
        let save_error = save_error.clone();
        let revision = revision.clone();

        Callback::from(move |request: ProductUpsert| {
            let client = client.clone();
            let form_mode = form_mode.clone();
            let saving = saving.clone();
            let save_error = save_error.clone();
            let revision = revision.clone();

            saving.set(true);
            save_error.set(None);
            spawn_local(async move {
                match client.save_product(&request).await {
                    Ok(()) => {
                        Logger::info_with_component("products", "Product saved");
                        form_mode.set(None);
                        revision.set(*revision + 1);
                    }
                    Err(e) => {
                        Logger::error_with_component("products", &format!("Failed to save product: {}", e));
                        save_error.set(Some(e.to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    html! {
        <>
            <ResourceList<Product>
                client={props.client.clone()}
                columns={columns::products()}
                page_size={props.page_size}
                on_edit={on_edit}
                revision={*revision}
            >
                <button class="primary add" onclick={on_add}>{"Add product"}</button>
            </ResourceList<Product>>

            if let Some(mode) = (*form_mode).clone() {
                <ProductWizardModal
                    {mode}
                    saving={*saving}
                    save_error={(*save_error).clone()}
                    {on_submit}
                    {on_close}
                />
            }
        </>
    }
}
