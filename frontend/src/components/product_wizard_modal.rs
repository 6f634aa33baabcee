use admin_domain::product_wizard::{ProductDraft, ProductStep};
use admin_domain::wizard::{FieldError, WizardError, WizardForm};
use admin_domain::FormMode;
use shared::{Product, ProductUpsert, RecordStatus};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProductWizardModalProps {
    pub mode: FormMode<Product>,
    pub saving: bool,
    #[prop_or_default]
    pub save_error: Option<String>,
    pub on_submit: Callback<ProductUpsert>,
    pub on_close: Callback<()>,
}

fn field_error(errors: &[FieldError], field: &str) -> Html {
    errors
        .iter()
        .filter(|error| error.field == field)
        .map(|error| html! { <p class="field-error">{&error.message}</p> })
        .collect()
}

fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

fn parse_image_urls(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[function_component(ProductWizardModal)]
pub fn product_wizard_modal(props: &ProductWizardModalProps) -> Html {
    let wizard = use_state({
        let mode = props.mode.clone();
        move || ProductDraft::wizard(&mode)
    });
    let errors = use_state(Vec::<FieldError>::new);

    // Start over whenever a different product is opened
    use_effect_with(props.mode.clone(), {
        let wizard = wizard.clone();
        let errors = errors.clone();
        move |mode| {
            wizard.set(ProductDraft::wizard(mode));
            errors.set(Vec::new());
        }
    });

    let edit = |apply: fn(&mut ProductDraft, String)| {
        let wizard = wizard.clone();
        move |value: String| {
            let mut next = (*wizard).clone();
            apply(next.form_mut(), value);
            wizard.set(next);
        }
    };

    let on_input = |apply: fn(&mut ProductDraft, String)| {
        let edit = edit(apply);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };

    let on_textarea = |apply: fn(&mut ProductDraft, String)| {
        let edit = edit(apply);
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            edit(area.value());
        })
    };

    let on_status = {
        let edit = edit(|draft, value| {
            draft.status = if value == RecordStatus::Inactive.as_str() {
                RecordStatus::Inactive
            } else {
                RecordStatus::Active
            };
        });
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            edit(select.value());
        })
    };

    let on_next = {
        let wizard = wizard.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            match next.next() {
                Ok(_) => {
                    errors.set(Vec::new());
                    wizard.set(next);
                }
                Err(WizardError::InvalidStep { errors: invalid, .. }) => errors.set(invalid),
                Err(other) => errors.set(vec![FieldError::new("wizard", other.to_string())]),
            }
        })
    };

    let on_back = {
        let wizard = wizard.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            next.back();
            errors.set(Vec::new());
            wizard.set(next);
        })
    };

    let on_step = |step: ProductStep| {
        let wizard = wizard.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            if next.go_to(step).is_ok() {
                errors.set(Vec::new());
                wizard.set(next);
            }
        })
    };

    let on_save = {
        let wizard = wizard.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| match wizard.form().to_upsert() {
            Ok(request) => {
                errors.set(Vec::new());
                on_submit.emit(request);
            }
            Err(WizardError::InvalidStep { step, errors: invalid }) => {
                let mut next = (*wizard).clone();
                if next.go_to(step).is_ok() {
                    wizard.set(next);
                }
                errors.set(invalid);
            }
            Err(other) => errors.set(vec![FieldError::new("wizard", other.to_string())]),
        })
    };

    let on_close = props.on_close.reform(|_: MouseEvent| ());

    let draft = wizard.form();
    let current = wizard.current_step();
    let (position, count) = wizard.progress();

    let step_body = match current {
        ProductStep::General => html! {
            <div class="wizard-step">
                <label>{"Name"}
                    <input
                        type="text"
                        value={draft.name.clone()}
                        oninput={on_input(|draft, value| draft.name = value)}
                    />
                </label>
                {field_error(&errors, "name")}
                <label>{"SKU"}
                    <input
                        type="text"
                        value={draft.sku.clone()}
                        oninput={on_input(|draft, value| draft.sku = value)}
                    />
                </label>
                {field_error(&errors, "sku")}
                <label>{"Description"}
                    <textarea
                        value={draft.description.clone()}
                        oninput={on_textarea(|draft, value| draft.description = value)}
                    />
                </label>
                <label>{"Category ID"}
                    <input
                        type="number"
                        value={draft.category_id.map(|id| id.to_string()).unwrap_or_default()}
                        oninput={on_input(|draft, value| draft.category_id = parse_id(&value))}
                    />
                </label>
                {field_error(&errors, "category_id")}
                <label>{"Brand ID (optional)"}
                    <input
                        type="number"
                        value={draft.brand_id.map(|id| id.to_string()).unwrap_or_default()}
                        oninput={on_input(|draft, value| draft.brand_id = parse_id(&value))}
                    />
                </label>
                <label>{"Status"}
                    <select onchange={on_status}>
                        {for [RecordStatus::Active, RecordStatus::Inactive].into_iter().map(|status| html! {
                            <option value={status.as_str()} selected={draft.status == status}>
                                {status.as_str()}
                            </option>
                        })}
                    </select>
                </label>
            </div>
        },
        ProductStep::Pricing => html! {
            <div class="wizard-step">
                <label>{"Price"}
                    <input
                        type="text"
                        placeholder="0.00"
                        value={draft.price.clone()}
                        oninput={on_input(|draft, value| draft.price = value)}
                    />
                </label>
                {field_error(&errors, "price")}
                <label>{"Stock"}
                    <input
                        type="text"
                        value={draft.stock.clone()}
                        oninput={on_input(|draft, value| draft.stock = value)}
                    />
                </label>
                {field_error(&errors, "stock")}
            </div>
        },
        ProductStep::Media => html! {
            <div class="wizard-step">
                <label>{"Image URLs (one per line)"}
                    <textarea
                        value={draft.image_urls.join("\n")}
                        oninput={on_textarea(|draft, value| draft.image_urls = parse_image_urls(&value))}
                    />
                </label>
                {field_error(&errors, "image_urls")}
                <div class="image-previews">
                    {for draft.image_urls.iter().map(|url| html! { <img src={url.clone()} alt="" /> })}
                </div>
            </div>
        },
        ProductStep::Review => html! {
            <dl class="wizard-review">
                <dt>{"Name"}</dt><dd>{&draft.name}</dd>
                <dt>{"SKU"}</dt><dd>{&draft.sku}</dd>
                <dt>{"Category"}</dt><dd>{draft.category_id.map(|id| format!("#{}", id)).unwrap_or_default()}</dd>
                <dt>{"Brand"}</dt><dd>{draft.brand_id.map(|id| format!("#{}", id)).unwrap_or_else(|| "None".to_string())}</dd>
                <dt>{"Price"}</dt><dd>{&draft.price}</dd>
                <dt>{"Stock"}</dt><dd>{&draft.stock}</dd>
                <dt>{"Images"}</dt><dd>{draft.image_urls.len()}</dd>
                <dt>{"Status"}</dt><dd>{draft.status.as_str()}</dd>
            </dl>
        },
    };

    html! {
        <div class="modal-overlay">
            <div class="product-wizard-modal">
                <header class="modal-header">
                    <h2>{props.mode.title("Product")}</h2>
                    <span class="wizard-progress">{format!("Step {} of {}", position, count)}</span>
                    <button class="close" onclick={on_close.clone()}>{"×"}</button>
                </header>

                <ol class="wizard-steps">
                    {for ProductDraft::steps().iter().map(|&step| html! {
                        <li class={classes!((step == current).then_some("current"))}>
                            <button disabled={!wizard.is_reached(step)} onclick={on_step(step)}>
                                {step.label()}
                            </button>
                        </li>
                    })}
                </ol>

                {step_body}
                {field_error(&errors, "wizard")}

                if let Some(message) = &props.save_error {
                    <p class="save-error">{message}</p>
                }

                <footer class="modal-actions">
                    <button onclick={on_close}>{"Cancel"}</button>
                    if !wizard.is_first_step() {
                        <button onclick={on_back}>{"Back"}</button>
                    }
                    if wizard.is_last_step() {
                        <button class="primary" onclick={on_save} disabled={props.saving}>
                            {if props.saving { "Saving..." } else { props.mode.submit_label() }}
                        </button>
                    } else {
                        <button class="primary" onclick={on_next}>{"Next"}</button>
                    }
                </footer>
            </div>
        </div>
    }
}
