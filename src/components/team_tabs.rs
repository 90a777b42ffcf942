use log::info;
use yew::prelude::*;

use crate::stores::modal::use_modal;

/// Role categories shown in the team section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleTab {
    Creative,
    Marketing,
    Development,
    Growth,
}

/// Content shown for one role tab.
#[derive(Debug, PartialEq)]
pub struct RoleProfile {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tags: &'static [&'static str],
    pub cta: &'static str,
}

impl RoleTab {
    pub const ALL: [RoleTab; 4] = [
        RoleTab::Creative,
        RoleTab::Marketing,
        RoleTab::Development,
        RoleTab::Growth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RoleTab::Creative => "Creative & Design",
            RoleTab::Marketing => "Marketing & Growth",
            RoleTab::Development => "Development",
            RoleTab::Growth => "Key Growth",
        }
    }

    pub fn profile(self) -> &'static RoleProfile {
        match self {
            RoleTab::Creative => &CREATIVE,
            RoleTab::Marketing => &MARKETING,
            RoleTab::Development => &DEVELOPMENT,
            RoleTab::Growth => &GROWTH,
        }
    }
}

const CREATIVE: RoleProfile = RoleProfile {
    title: "Brand Designer",
    subtitle: "Builds The Foundation of Your Brand.",
    tags: &[
        "Logo Design",
        "Brand Guidelines",
        "Color Palette",
        "Typography System",
        "Social Templates",
        "Rebrand Plan",
        "Business Cards",
        "Email Signature",
        "Icon Set",
        "Mockups",
        "Packaging",
        "Stationery",
        "Uniform Branding",
    ],
    cta: "Hire Brand Designer",
};

const MARKETING: RoleProfile = RoleProfile {
    title: "Marketing Strategist",
    subtitle: "Turns Attention Into Profitable Growth.",
    tags: &[
        "Campaign Strategy",
        "Funnel Mapping",
        "Email Flows",
        "Ad Creative Briefs",
        "Landing Pages",
        "A/B Testing",
        "Offer Positioning",
        "Launch Calendars",
        "Audience Research",
    ],
    cta: "Hire Marketing Strategist",
};

const DEVELOPMENT: RoleProfile = RoleProfile {
    title: "Product Developer",
    subtitle: "Builds Fast, Stable, Conversion-Focused Experiences.",
    tags: &[
        "Web Apps",
        "Landing Pages",
        "Integrations",
        "Automation Flows",
        "Performance Tuning",
        "Analytics Setup",
        "Tracking Events",
        "Technical SEO",
    ],
    cta: "Hire Product Developer",
};

const GROWTH: RoleProfile = RoleProfile {
    title: "Key Growth Manager",
    subtitle: "Aligns Strategy, Execution, And Ongoing Optimization.",
    tags: &[
        "Growth Roadmap",
        "KPI Tracking",
        "Experiment Backlog",
        "Reporting",
        "Channel Strategy",
        "Team Coordination",
        "Quarterly Planning",
        "Retention Initiatives",
    ],
    cta: "Hire Growth Manager",
};

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    let active_tab = use_state(|| RoleTab::Creative);
    let (_, modal) = use_modal();

    let profile = active_tab.profile();

    let on_hire = {
        let modal = modal.clone();
        let title = profile.title;
        Callback::from(move |_| {
            info!("Hire requested for {}", title);
            modal.open();
        })
    };

    html! {
        <section id="team-section" class="team-section">
            <div class="team-inner">
                <div class="team-heading">
                    <h2>
                        {"Meet Your "}<span class="ai-text">{"AI-Empowered"}</span>{" Team Behind Your Growth"}
                    </h2>
                    <p>
                        {"When you bring on your Smart Marketing AI Team, you're not hiring freelancers — \
                          you're unlocking a complete digital department. Each role blends human expertise \
                          with AI precision to move your marketing faster, smarter, and farther than ever. \
                          Every deliverable builds lasting value for your business."}
                    </p>
                </div>

                <div class="role-tabs">
                    { for RoleTab::ALL.iter().map(|tab| {
                        let tab = *tab;
                        let active_tab = active_tab.clone();
                        html! {
                            <button
                                type="button"
                                class={classes!("role-tab", (*active_tab == tab).then(|| "active"))}
                                onclick={Callback::from(move |_| active_tab.set(tab))}
                            >
                                { tab.label() }
                            </button>
                        }
                    }) }
                </div>

                <div class="role-card">
                    <div class="role-copy">
                        <h3>{ profile.title }</h3>
                        <p class="role-subtitle">{ profile.subtitle }</p>
                        <div class="role-tags">
                            { for profile.tags.iter().map(|tag| html! {
                                <span class="role-chip">{ *tag }</span>
                            }) }
                        </div>
                        <button type="button" class="role-cta" onclick={on_hire}>
                            { profile.cta }
                            <span class="role-cta-arrow">{"↗"}</span>
                        </button>
                    </div>
                    <div class="role-portrait">
                        <img src="/assets/img/team-avatar.png" alt="AI team member avatar" width="300" height="300" />
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .team-section {
                    background: #060a14;
                    color: #fff;
                }
                .team-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                }
                .team-heading {
                    max-width: 48rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .team-heading h2 {
                    font-size: 2.5rem;
                    font-weight: 700;
                    line-height: 1.15;
                }
                .team-heading .ai-text {
                    color: #34d399;
                }
                .team-heading p {
                    margin-top: 1.25rem;
                    color: #cbd5e1;
                    line-height: 1.6;
                }
                .role-tabs {
                    margin-top: 2.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .role-tab {
                    padding: 0.5rem 1.1rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.35);
                    background: transparent;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.9rem;
                    cursor: pointer;
                    transition: border-color 0.2s ease, background 0.2s ease;
                }
                .role-tab:hover {
                    border-color: #fff;
                }
                .role-tab.active {
                    background: #fff;
                    border-color: #fff;
                    color: #000;
                }
                .role-card {
                    margin-top: 2.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                }
                .role-copy h3 {
                    font-size: 1.9rem;
                    font-weight: 700;
                }
                .role-subtitle {
                    margin-top: 0.25rem;
                    font-weight: 600;
                    color: #34d399;
                }
                .role-tags {
                    margin-top: 1.25rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .role-chip {
                    padding: 0.35rem 0.8rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.05);
                    font-size: 0.8rem;
                    color: #e2e8f0;
                }
                .role-cta {
                    margin-top: 1.75rem;
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.7rem 1.4rem;
                    border: none;
                    border-radius: 9999px;
                    background: #34d399;
                    color: #04291c;
                    font-weight: 600;
                    cursor: pointer;
                }
                .role-cta-arrow {
                    font-size: 1.1rem;
                }
                .role-portrait {
                    display: flex;
                    justify-content: center;
                }
                @media (min-width: 768px) {
                    .role-card {
                        flex-direction: row;
                        align-items: stretch;
                    }
                    .role-copy {
                        flex: 1;
                    }
                    .role-portrait {
                        flex: 1;
                        justify-content: flex-end;
                    }
                }
                "#}
            </style>
        </section>
    }
}
