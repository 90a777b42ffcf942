use log::info;
use web_sys::{Event, HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::stores::modal::use_modal;

/// Site-wide contact dialog. Rendered once near the root; whether it shows
/// is driven entirely by the shared modal flag.
#[function_component(ContactModal)]
pub fn contact_modal() -> Html {
    let (is_open, modal) = use_modal();
    let email = use_state(String::new);
    let submitted = use_state(|| false);

    if !is_open {
        return html! {};
    }

    let close = {
        let modal = modal.clone();
        let email = email.clone();
        let submitted = submitted.clone();
        Callback::from(move |_: MouseEvent| {
            modal.close();
            email.set(String::new());
            submitted.set(false);
        })
    };

    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    let on_email = {
        let email = email.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            email.set(input.value());
        })
    };

    let submit = {
        let submitted = submitted.clone();
        Callback::from(move |_: MouseEvent| {
            info!("intro call requested");
            submitted.set(true);
        })
    };

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class="modal-content" onclick={keep_open}>
                if *submitted {
                    <h3>{"Request received"}</h3>
                    <p>{"Thanks! We'll reach out shortly to set up your intro call."}</p>
                    <div class="modal-buttons">
                        <button class="modal-confirm" onclick={close}>{"Done"}</button>
                    </div>
                } else {
                    <h3>{"Book an intro call"}</h3>
                    <p>{"Tell us where to reach you and we'll walk you through the agent team."}</p>
                    <input
                        type="email"
                        placeholder="you@company.com"
                        value={(*email).clone()}
                        onchange={on_email}
                    />
                    <div class="modal-buttons">
                        <button class="modal-cancel" onclick={close}>{"Cancel"}</button>
                        <button class="modal-confirm" onclick={submit} disabled={email.is_empty()}>
                            {"Request call"}
                        </button>
                    </div>
                }
            </div>

            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(3, 6, 12, 0.7);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 1000;
                }
                .modal-content {
                    width: min(92vw, 26rem);
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: #0c1322;
                    color: #fff;
                }
                .modal-content h3 {
                    font-size: 1.4rem;
                    font-weight: 700;
                }
                .modal-content p {
                    margin-top: 0.5rem;
                    color: #cbd5e1;
                    line-height: 1.5;
                }
                .modal-content input {
                    width: 100%;
                    margin-top: 1.25rem;
                    padding: 0.7rem 0.9rem;
                    border-radius: 0.6rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.05);
                    color: #fff;
                }
                .modal-buttons {
                    margin-top: 1.5rem;
                    display: flex;
                    justify-content: flex-end;
                    gap: 0.75rem;
                }
                .modal-buttons button {
                    padding: 0.6rem 1.2rem;
                    border-radius: 9999px;
                    border: none;
                    font-weight: 600;
                    cursor: pointer;
                }
                .modal-cancel {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    color: #fff;
                }
                .modal-confirm {
                    background: #34d399;
                    color: #04291c;
                }
                .modal-confirm:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                "#}
            </style>
        </div>
    }
}
