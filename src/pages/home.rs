use yew::prelude::*;

use crate::components::case_studies::CaseStudies;
use crate::components::team_tabs::TeamSection;
use crate::stores::modal::use_modal;

#[function_component(Home)]
pub fn home() -> Html {
    let (_, modal) = use_modal();

    // Land at the top when navigating back to the page.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let open_modal = Callback::from(move |_| modal.open());

    html! {
        <div class="home">
            <section class="hero">
                <div class="hero-inner">
                    <h1>{"A coordinated team of AI agents behind your brand"}</h1>
                    <p>
                        {"agentdesk puts WhatsApp, phone, storefront and voice agents on one desk, \
                          each one specialised and all of them in sync."}
                    </p>
                    <div class="hero-actions">
                        <button type="button" class="hero-primary" onclick={open_modal}>
                            {"Get started"}
                        </button>
                        <a class="hero-secondary" href="#case-studies">{"See the agents"}</a>
                    </div>
                </div>
            </section>

            <TeamSection />
            <CaseStudies />

            <footer class="site-footer">
                <p>{"© 2026 agentdesk. All rights reserved."}</p>
            </footer>

            <style>
                {r#"
                .hero {
                    min-height: 70vh;
                    display: flex;
                    align-items: center;
                    background: radial-gradient(circle at 30% 20%, #10203c 0%, #060a14 60%);
                    color: #fff;
                }
                .hero-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 8rem 1rem 4rem;
                    text-align: center;
                }
                .hero h1 {
                    font-size: 3rem;
                    font-weight: 700;
                    line-height: 1.1;
                    letter-spacing: -0.02em;
                }
                .hero p {
                    margin-top: 1.5rem;
                    font-size: 1.1rem;
                    color: #cbd5e1;
                    line-height: 1.6;
                }
                .hero-actions {
                    margin-top: 2.5rem;
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                }
                .hero-primary {
                    padding: 0.8rem 1.8rem;
                    border: none;
                    border-radius: 9999px;
                    background: #34d399;
                    color: #04291c;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .hero-secondary {
                    padding: 0.8rem 1.8rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    color: #fff;
                    text-decoration: none;
                }
                .site-footer {
                    background: #04070f;
                    color: #64748b;
                    text-align: center;
                    padding: 2.5rem 1rem;
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </div>
    }
}
