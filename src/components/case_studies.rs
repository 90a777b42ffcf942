use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config::StackConfig;
use crate::stack::controller::{FrameResult, Mode, RestUpdate, StackController};
use crate::stack::navigate::{self, ScrollPlan};
use crate::stack::viewport::{DomViewport, ViewportOps};

const CARD_TRANSITION: &str = "transform 0.12s ease-out";

const CHANNEL_ICONS: [&str; 3] = [
    "/assets/img/iconss.png",
    "/assets/img/icon2.png",
    "/assets/img/icon3.png",
];

/// Element ids the effect measures and scrolls to, in panel order.
pub const PANEL_DOM_IDS: &[&str] = &[
    "tabScroll1",
    "tabScroll2",
    "tabScroll3",
    "tabScroll4",
    "tabScroll5",
    "tabScroll6",
];

struct WorkflowStep {
    icon: &'static str,
    text: &'static str,
}

struct CaseStudy {
    dom_id: &'static str,
    tab_label: &'static str,
    badge: &'static str,
    headline_a: &'static str,
    lead_a: &'static str,
    headline_b: &'static str,
    lead_b: &'static str,
    workflow: [WorkflowStep; 4],
}

const CASES: [CaseStudy; 6] = [
    CaseStudy {
        dom_id: "tabScroll1",
        tab_label: "WhatsApp AI Agent",
        badge: "WhatsApp AI Agent",
        headline_a: "Turn Conversations into Revenue on the World's Most Active Messaging App",
        lead_a: "Your WhatsApp AI Agent replies in real time, detects high-intent behavior, and \
                 nurtures customers through every stage of the funnel — without you typing a word.",
        headline_b: "Fast Answers. Smarter Follow-Ups. Full Coverage.",
        lead_b: "From product inquiries to payment reminders, this agent handles it all instantly \
                 using your knowledge base, ticket history, and real-time business logic.",
        workflow: [
            WorkflowStep {
                icon: "/assets/img/iconss.png",
                text: "Follows up automatically when Shopify agent detects cart abandonment",
            },
            WorkflowStep {
                icon: "/assets/img/icon2.png",
                text: "Escalates chats to Phone Agent when urgency is high",
            },
            WorkflowStep {
                icon: "/assets/img/icon3.png",
                text: "Updates CRM after conversations using Standalone Agent logic",
            },
            WorkflowStep {
                icon: "/assets/img/icon2.png",
                text: "Triggers Voice Agent callbacks for verification or follow-up sales",
            },
        ],
    },
    CaseStudy {
        dom_id: "tabScroll2",
        tab_label: "Phone AI Agent",
        badge: "Phone AI Agent",
        headline_a: "Every Call Answered, Routed, and Resolved — No Waiting, No Voicemail",
        lead_a: "With human-sounding voice AI, your phone agent picks up 24/7, handles routine \
                 inquiries, books appointments, and transfers complex issues to the right human.",
        headline_b: "No Missed Opportunities, No Repetition — Just Resolution at Scale",
        lead_b: "Built to mirror your tone and powered by real data, it brings down hold times \
                 and clears up your team's schedule without sacrificing service quality.",
        workflow: [
            WorkflowStep {
                icon: "/assets/img/iconss.png",
                text: "Connects with WhatsApp Agent to follow up on missed or dropped call",
            },
            WorkflowStep {
                icon: "/assets/img/icon2.png",
                text: "Books meetings directly into your Google Calendar via Assistant App",
            },
            WorkflowStep {
                icon: "/assets/img/icon3.png",
                text: "Sends post-call summaries to Standalone Agent for future insights",
            },
            WorkflowStep {
                icon: "/assets/img/icon2.png",
                text: "Flags high-volume issues to Chatbot Agent for proactive site messaging",
            },
        ],
    },
    CaseStudy {
        dom_id: "tabScroll3",
        tab_label: "Shopify AI Agent",
        badge: "Shopify AI Agent",
        headline_a: "From Cart to Confirmation — This Agent Owns the Post-Sale Journey",
        lead_a: "Whether it's order status, refund requests, or shipping delays, your Shopify AI \
                 Agent handles them instantly by syncing with your store data in real time.",
        headline_b: "More Orders Completed, Fewer Tickets Created",
        lead_b: "By resolving customer issues before they ever hit your support team, it not only \
                 saves hours — it boosts satisfaction and retention where it matters most.",
        workflow: [
            WorkflowStep {
                icon: "/assets/img/iconss.png",
                text: "Flags abandoned checkouts for WhatsApp Agent to follow up",
            },
            WorkflowStep {
                icon: "/assets/img/icon2.png",
                text: "Syncs with Voice Agent to resolve high-friction returns",
            },
            WorkflowStep {
                icon: "/assets/img/icon3.png",
                text: "Surfaces product feedback to Assistant App for on-the-go reviews",
            },
            WorkflowStep {
                icon: "/assets/img/icon2.png",
                text: "Notifies Chatbot Agent to update product FAQs automatically",
            },
        ],
    },
    CaseStudy {
        dom_id: "tabScroll4",
        tab_label: "AI Assistant App",
        badge: "AI Assistant App",
        headline_a: "The Smartest Teammate in Your Pocket — Always Ready, Always Synced",
        lead_a: "Whether you're in the field, remote, or in-store, your Assistant App gives you \
                 instant access to internal data, documents, and workflows — using voice or text.",
        headline_b: "Work Faster, Smarter, and from Anywhere Without Logging Into Anything",
        lead_b: "This mobile-first agent transforms how you interact with your backend: need a \
                 document, insight, or task managed? Just ask — it's already done.",
        workflow: [
            WorkflowStep {
                icon: "/assets/img/iconss.png",
                text: "Pulls live customer context from Chatbot Agent when updates are needed",
            },
            WorkflowStep {
                icon: "/assets/img/icon2.png",
                text: "Logs answers from Voice Agent for internal knowledge access",
            },
            WorkflowStep {
                icon: "/assets/img/icon3.png",
                text: "Adds calendar events triggered by Phone Agent bookings",
            },
            WorkflowStep {
                icon: "/assets/img/icon2.png",
                text: "Syncs insights from Standalone Agent to update playbooks on the go",
            },
        ],
    },
    CaseStudy {
        dom_id: "tabScroll5",
        tab_label: "Voice + Chatbot",
        badge: "Voice + Chatbot Agents",
        headline_a: "Your Always-On Brand Voice, No Matter How People Reach You",
        lead_a: "Whether it's a voice command or a typed question, this hybrid agent delivers \
                 answers that feel human, contextual, and instantly accurate across all channels.",
        headline_b: "Reduce Human Load, Raise Response Quality — 24/7, Multilingual, Multiplatform",
        lead_b: "Trained on real conversations and support history, these agents not only talk — \
                 they listen, learn, and adapt to every interaction in real time.",
        workflow: [
            WorkflowStep {
                icon: "/assets/img/iconss.png",
                text: "Detects trending questions and signals Assistant App to update support scripts",
            },
            WorkflowStep {
                icon: "/assets/img/icon2.png",
                text: "Collaborates with Phone Agent to handle language-specific inquiries",
            },
            WorkflowStep {
                icon: "/assets/img/icon3.png",
                text: "Pushes recurring feedback to Shopify Agent for product improvement",
            },
            WorkflowStep {
                icon: "/assets/img/icon2.png",
                text: "Syncs resolved tickets with WhatsApp Agent for follow-up or upsell offers",
            },
        ],
    },
    CaseStudy {
        dom_id: "tabScroll6",
        tab_label: "Standalone Agent",
        badge: "Standalone AI Agent",
        headline_a: "Deploy One Link and Deliver Full-Service AI — No Platform Needed",
        lead_a: "Whether you're running lean or building fast, this browser-based agent handles \
                 customer queries, sales, and workflows independently — just plug and launch.",
        headline_b: "Perfect for Onboarding, Support, Sales, or Internal Use — It Adapts to Your Flow",
        lead_b: "It learns from each interaction, pulls data from integrated tools, and evolves \
                 to support every part of your business with zero dev effort.",
        workflow: [
            WorkflowStep {
                icon: "/assets/img/iconss.png",
                text: "Shares real-time feedback to Chatbot Agent for web knowledge accuracy",
            },
            WorkflowStep {
                icon: "/assets/img/icon2.png",
                text: "Informs Phone Agent of user preferences before callbacks",
            },
            WorkflowStep {
                icon: "/assets/img/icon3.png",
                text: "Pushes lead data to WhatsApp Agent for nurturing",
            },
            WorkflowStep {
                icon: "/assets/img/icon2.png",
                text: "Feeds insights into Assistant App for mobile access and action",
            },
        ],
    },
];

fn apply_rest(viewport: &DomViewport, update: &RestUpdate) {
    if update.mode == Mode::Stacked {
        viewport.apply_transition(update.transforms.len(), CARD_TRANSITION);
    }
    viewport.apply_transforms(&update.transforms);
    viewport.apply_padding(update.padding_bottom);
}

#[derive(Properties, PartialEq)]
pub struct CaseStudiesProps {
    /// Effect tuning. The defaults match the production profile.
    #[prop_or_default]
    pub config: StackConfig,
}

#[function_component(CaseStudies)]
pub fn case_studies(props: &CaseStudiesProps) -> Html {
    let active = use_state(|| 0usize);
    let stacked = use_state(|| false);
    let container_ref = use_node_ref();
    let scroller_ref = use_node_ref();

    let controller = {
        let config = props.config.clone();
        use_mut_ref(move || StackController::new(config, CASES.len()))
    };
    let viewport = {
        let container_ref = container_ref.clone();
        let scroller_ref = scroller_ref.clone();
        use_mut_ref(move || DomViewport::new(container_ref, scroller_ref, PANEL_DOM_IDS))
    };

    // Mount: one settle after the layout has had time to take shape, then
    // scroll, resize and frame plumbing until unmount.
    {
        let controller = controller.clone();
        let viewport = viewport.clone();
        let active = active.clone();
        let stacked = stacked.clone();
        let scroller_ref = scroller_ref.clone();
        let config = props.config.clone();
        use_effect_with_deps(
            move |_| {
                let settle_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let debounce_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let raf_handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

                let run_settle = {
                    let controller = controller.clone();
                    let viewport = viewport.clone();
                    let active = active.clone();
                    let stacked = stacked.clone();
                    move || {
                        let viewport = viewport.borrow();
                        let mut controller = controller.borrow_mut();
                        if let Some(update) = controller.settle(&*viewport) {
                            info!("card stack settled in {:?} mode", update.mode);
                            apply_rest(&viewport, &update);
                            stacked.set(update.mode == Mode::Stacked);
                        }
                        if let Some(index) = controller.sync_by_visibility(&*viewport) {
                            active.set(index);
                        }
                    }
                };

                let frame: Rc<Closure<dyn FnMut()>> = {
                    let controller = controller.clone();
                    let viewport = viewport.clone();
                    let active = active.clone();
                    let raf_handle = raf_handle.clone();
                    Rc::new(Closure::wrap(Box::new(move || {
                        raf_handle.set(None);
                        let viewport = viewport.borrow();
                        match controller.borrow_mut().run_frame(&*viewport) {
                            FrameResult::Stacked { transforms, active: switched } => {
                                viewport.apply_transforms(&transforms);
                                if let Some(index) = switched {
                                    active.set(index);
                                }
                            }
                            FrameResult::Synced { active: switched } => {
                                if let Some(index) = switched {
                                    active.set(index);
                                }
                            }
                            FrameResult::Halted | FrameResult::Skipped => {}
                        }
                    }) as Box<dyn FnMut()>))
                };

                let on_scroll = {
                    let controller = controller.clone();
                    let frame = frame.clone();
                    let raf_handle = raf_handle.clone();
                    Closure::wrap(Box::new(move || {
                        if !controller.borrow_mut().request_frame() {
                            return;
                        }
                        let scheduled = web_sys::window().and_then(|window| {
                            window
                                .request_animation_frame(frame.as_ref().as_ref().unchecked_ref())
                                .ok()
                        });
                        match scheduled {
                            Some(handle) => raf_handle.set(Some(handle)),
                            None => controller.borrow_mut().cancel_frame(),
                        }
                    }) as Box<dyn FnMut()>)
                };

                let on_resize = {
                    let controller = controller.clone();
                    let run_settle = run_settle.clone();
                    let settle_timer = settle_timer.clone();
                    let debounce_timer = debounce_timer.clone();
                    let debounce_ms = config.resize_debounce_ms;
                    let settle_ms = config.resize_settle_ms;
                    Closure::wrap(Box::new(move || {
                        let controller = controller.clone();
                        let run_settle = run_settle.clone();
                        let settle_timer = settle_timer.clone();
                        *debounce_timer.borrow_mut() = Some(Timeout::new(debounce_ms, move || {
                            controller.borrow_mut().begin_measure();
                            *settle_timer.borrow_mut() =
                                Some(Timeout::new(settle_ms, run_settle));
                        }));
                    }) as Box<dyn FnMut()>)
                };

                controller.borrow_mut().begin_measure();
                *settle_timer.borrow_mut() =
                    Some(Timeout::new(config.mount_settle_ms, run_settle.clone()));

                if let Some(window) = web_sys::window() {
                    let _ = window
                        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                    let _ = window
                        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
                }
                let scroller = scroller_ref.cast::<web_sys::Element>();
                if let Some(scroller) = &scroller {
                    let _ = scroller
                        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            on_resize.as_ref().unchecked_ref(),
                        );
                        if let Some(handle) = raf_handle.take() {
                            let _ = window.cancel_animation_frame(handle);
                        }
                    }
                    if let Some(scroller) = scroller {
                        let _ = scroller.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                    settle_timer.borrow_mut().take();
                    debounce_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    // Idle upkeep keeps scales honest between scroll bursts. Disabled
    // outside stacked mode by a zero period.
    {
        let controller = controller.clone();
        let viewport = viewport.clone();
        let millis = if *stacked { props.config.maintain_interval_ms } else { 0 };
        use_interval(
            move || {
                let viewport = viewport.borrow();
                if let Some(transforms) = controller.borrow().maintain(&*viewport) {
                    viewport.apply_transforms(&transforms);
                }
            },
            millis,
        );
    }

    let on_tab = {
        let controller = controller.clone();
        let viewport = viewport.clone();
        let active = active.clone();
        let nav_margin = props.config.nav_scroll_margin;
        Callback::from(move |index: usize| {
            if controller.borrow_mut().select(index) {
                active.set(index);
            }
            let viewport = viewport.borrow();
            let plan = navigate::plan_scroll(
                viewport.panel_rect(index),
                viewport.scroller(),
                viewport.window_scroll_y(),
                nav_margin,
            );
            match plan {
                Some(ScrollPlan::Scroller { top }) => viewport.scroll_scroller_to(top),
                Some(ScrollPlan::Window { top }) => viewport.scroll_window_to(top),
                None => {}
            }
        })
    };

    html! {
        <section id="case-studies" class="case-studies">
            <div class="case-inner">
                <div class="case-heading">
                    <span class="case-badge">{"Case Studies"}</span>
                    <h2>{"Every Agent, Built to Perform"}</h2>
                </div>

                <div class="case-tabs">
                    { for CASES.iter().enumerate().map(|(index, case)| {
                        let on_tab = on_tab.clone();
                        html! {
                            <button
                                type="button"
                                class={classes!("case-tab", (*active == index).then(|| "active"))}
                                onclick={Callback::from(move |_| on_tab.emit(index))}
                            >
                                { case.tab_label }
                            </button>
                        }
                    }) }
                </div>

                <div class="case-scroller" ref={scroller_ref}>
                    <ul
                        class={classes!("stack-cards", (*stacked).then(|| "stacked"))}
                        ref={container_ref}
                    >
                        { for CASES.iter().map(render_case) }
                    </ul>
                </div>
            </div>

            <style>
                {r#"
                .case-studies {
                    background: #060a14;
                    color: #fff;
                    padding-bottom: 5rem;
                }
                .case-inner {
                    width: 100%;
                    padding: 0 1rem;
                }
                .case-heading {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    margin-bottom: 2.5rem;
                }
                .case-badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    font-size: 0.85rem;
                    border-radius: 9999px;
                    border: 1px solid #60a5fa;
                    color: #a5b4fc;
                }
                .case-heading h2 {
                    margin-top: 1rem;
                    font-size: 2.7rem;
                    font-weight: 600;
                    letter-spacing: -0.02em;
                }
                .case-tabs {
                    max-width: 72rem;
                    margin: 0 auto 2rem;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .case-tab {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    background: transparent;
                    color: rgba(255, 255, 255, 0.8);
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .case-tab:hover {
                    border-color: #fff;
                }
                .case-tab.active {
                    background: #fff;
                    border-color: #fff;
                    color: #000;
                }
                .case-scroller {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .stack-cards {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    position: relative;
                }
                .stack-card {
                    background: #0c1322;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 1rem;
                    padding: 1.5rem 2rem;
                    transform-origin: center top;
                }
                .case-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    padding: 1rem 0;
                    min-height: 400px;
                }
                .case-chip {
                    align-self: flex-start;
                    margin-bottom: 1rem;
                    padding: 0.4rem 0.9rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.25);
                    background: transparent;
                    color: #fff;
                    font-size: 0.85rem;
                }
                .case-chip .dot {
                    color: #34d399;
                    font-weight: 700;
                }
                .case-copy {
                    display: flex;
                    flex-direction: column;
                }
                .case-copy h3 {
                    font-size: 1.35rem;
                    font-weight: 600;
                    margin: 0.75rem 0 0.25rem;
                }
                .case-copy p {
                    color: rgba(255, 255, 255, 0.8);
                    line-height: 1.55;
                }
                .case-icons {
                    display: flex;
                    gap: 0.5rem;
                    padding-top: 1rem;
                }
                .case-icon {
                    display: inline-flex;
                    padding: 0.4rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.07);
                }
                .case-workflow h4 {
                    margin-bottom: 1rem;
                    font-weight: 600;
                    font-size: 1.05rem;
                }
                .workflow-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                    padding: 0.75rem 1rem;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.04);
                }
                .workflow-row p {
                    margin: 0;
                    color: rgba(255, 255, 255, 0.85);
                }
                @media (min-width: 768px) {
                    .case-grid {
                        grid-template-columns: 1fr 1fr;
                        gap: 2.5rem;
                    }
                }
                @media (min-width: 1024px) {
                    .case-inner {
                        padding: 0 4rem;
                    }
                    .stack-card {
                        position: sticky;
                        top: 90px;
                    }
                }
                "#}
            </style>
        </section>
    }
}

fn render_case(case: &CaseStudy) -> Html {
    html! {
        <li id={case.dom_id} class="stack-card">
            <div class="case-grid">
                <div class="case-copy">
                    <button type="button" class="case-chip">
                        <span class="dot">{"."}</span>{" "}{ case.badge }
                    </button>
                    <h3>{ case.headline_a }</h3>
                    <p>{ case.lead_a }</p>
                    <h3>{ case.headline_b }</h3>
                    <p>{ case.lead_b }</p>
                    <div class="case-icons">
                        { for CHANNEL_ICONS.iter().map(|icon| html! {
                            <span class="case-icon">
                                <img src={*icon} alt="channel icon" width="30" height="30" />
                            </span>
                        }) }
                    </div>
                </div>
                <div class="case-workflow">
                    <h4>{"Agentic Workflow"}</h4>
                    { for case.workflow.iter().map(|step| html! {
                        <div class="workflow-row">
                            <img src={step.icon} alt="workflow icon" width="30" height="30" />
                            <p>{ step.text }</p>
                        </div>
                    }) }
                </div>
            </div>
        </li>
    }
}
