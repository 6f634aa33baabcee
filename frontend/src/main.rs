mod components;
mod hooks;
mod pages;
mod services;

use admin_domain::session::{check_access, RouteAccess, SessionStore};
use chrono::Utc;
use yew::prelude::*;

use components::sidebar::Sidebar;
use pages::Screen;
use services::api::ApiClient;
use services::config::load_admin_config;
use services::logging::Logger;
use services::session_storage::LocalStorageSessionStore;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_admin_config());
    let screen = use_state(|| Screen::Products);
    let update = use_force_update();

    let store = LocalStorageSessionStore::new(config.session_storage_key.clone());

    let session = match check_access(&store, Utc::now()) {
        RouteAccess::Granted(session) => session,
        RouteAccess::RedirectToLogin => {
            return html! {
                <main class="login-required">
                    <h1>{"Sign in required"}</h1>
                    <p>{"Your session is missing or has expired."}</p>
                    <a href="/login">{"Go to sign in"}</a>
                </main>
            };
        }
    };

    let client = ApiClient::from_config(&config).with_session(&session);

    let on_select = {
        let screen = screen.clone();
        Callback::from(move |next: Screen| screen.set(next))
    };

    let on_sign_out = Callback::from(move |_: ()| {
        store.clear();
        Logger::info_with_component("app", "Signed out");
        update.force_update();
    });

    html! {
        <div class="admin-layout">
            <Sidebar current={*screen} {on_select} {on_sign_out} />
            <main class="admin-content">
                {screen.render(&client, config.page_size)}
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
