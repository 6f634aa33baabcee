use yew::prelude::*;

use crate::pages::Screen;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current: Screen,
    pub on_select: Callback<Screen>,
    pub on_sign_out: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let on_sign_out = props.on_sign_out.reform(|_: MouseEvent| ());

    html! {
        <aside class="sidebar">
            <div class="brand">{"Mecarvi Prints Admin"}</div>
            <nav>
                <ul>
                    {for Screen::ALL.iter().map(|&screen| {
                        let onclick = props.on_select.reform(move |_: MouseEvent| screen);
                        html! {
                            <li class={classes!((screen == props.current).then_some("active"))}>
                                <button {onclick}>{screen.title()}</button>
                            </li>
                        }
                    })}
                </ul>
            </nav>
            <button class="sign-out" onclick={on_sign_out}>{"Sign out"}</button>
        </aside>
    }
}
