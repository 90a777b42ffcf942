use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

mod components {
    pub mod case_studies;
    pub mod contact_modal;
    pub mod team_tabs;
}
mod config;
mod pages {
    pub mod home;
}
mod stack {
    pub mod controller;
    pub mod geometry;
    pub mod navigate;
    pub mod viewport;
    pub mod visibility;
}
mod stores {
    pub mod modal;
}

use components::contact_modal::ContactModal;
use pages::home::Home;
use stores::modal::{use_modal, ModalHandle};

#[derive(Clone, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
fn nav() -> Html {
    let is_scrolled = use_state(|| false);
    let menu_open = use_state(|| false);
    let (_, modal) = use_modal();

    // Solid background once the page scrolls past the hero.
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let on_scroll = Closure::wrap(Box::new(move || {
                    if let Some(window) = web_sys::window() {
                        if let Ok(offset) = window.scroll_y() {
                            is_scrolled.set(offset > 480.0);
                        }
                    }
                }) as Box<dyn FnMut()>);
                if let Some(window) = web_sys::window() {
                    let _ = window
                        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let open_modal = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| {
            menu_open.set(false);
            modal.open();
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-inner">
                <a class="nav-brand" href="/">{"agentdesk"}</a>
                <button type="button" class="nav-burger" onclick={toggle_menu}>{"☰"}</button>
                <div class={classes!("nav-links", (*menu_open).then(|| "open"))}>
                    <a href="#team-section">{"Team"}</a>
                    <a href="#case-studies">{"Case studies"}</a>
                    <button type="button" class="nav-cta" onclick={open_modal}>{"Get started"}</button>
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    color: #fff;
                    transition: background 0.25s ease;
                }
                .top-nav.scrolled {
                    background: rgba(6, 10, 20, 0.92);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }
                .nav-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-brand {
                    font-weight: 700;
                    font-size: 1.2rem;
                    color: #fff;
                    text-decoration: none;
                }
                .nav-burger {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.4rem;
                    cursor: pointer;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-links a {
                    color: #cbd5e1;
                    text-decoration: none;
                    font-size: 0.95rem;
                }
                .nav-links a:hover {
                    color: #fff;
                }
                .nav-cta {
                    padding: 0.5rem 1.2rem;
                    border: none;
                    border-radius: 9999px;
                    background: #34d399;
                    color: #04291c;
                    font-weight: 600;
                    cursor: pointer;
                }
                @media (max-width: 767.98px) {
                    .nav-burger {
                        display: block;
                    }
                    .nav-links {
                        display: none;
                    }
                    .nav-links.open {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        display: flex;
                        flex-direction: column;
                        padding: 1rem;
                        background: rgba(6, 10, 20, 0.97);
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page wandered off. Head back to the desk."}</p>
            <Link<Route> to={Route::Home}>{"Go home"}</Link<Route>>

            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    color: #fff;
                    background: #060a14;
                }
                .not-found h1 {
                    font-size: 4rem;
                }
                .not-found a {
                    color: #34d399;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let modal = use_state(ModalHandle::new);

    html! {
        <ContextProvider<ModalHandle> context={(*modal).clone()}>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <ContactModal />
        </ContextProvider<ModalHandle>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
