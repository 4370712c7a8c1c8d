//! Mock finance dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached after the simulated sign-in. Figures come from
//! `state::dashboard` constants; signing out clears auth state and the
//! route guard sends the visitor back to the auth page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::site_header::SiteHeader;
use crate::state::auth::AuthState;
use crate::state::dashboard::{RECENT_ACTIVITY, SUMMARY, format_signed_amount, format_whole_dollars};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <div class="dashboard-page">
            <SiteHeader>
                <button
                    type="button"
                    class="btn btn--ghost"
                    on:click=move |_| {
                        log::info!("sign out");
                        auth.update(AuthState::sign_out);
                    }
                >
                    "Sign Out"
                </button>
            </SiteHeader>

            <main class="dashboard">
                <h2>"Welcome to your Dashboard"</h2>
                <p class="dashboard__subtitle">"Here's an overview of your financial insights"</p>

                <div class="dashboard__cards">
                    {SUMMARY
                        .iter()
                        .map(|card| {
                            view! {
                                <div class=card.kind.class()>
                                    <p class="summary-card__label">{card.label}</p>
                                    <p class="summary-card__amount">{format_whole_dollars(card.amount_cents)}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <section class="activity">
                    <h3>"Recent Activity"</h3>
                    <ul class="activity__list">
                        {RECENT_ACTIVITY
                            .iter()
                            .map(|item| {
                                let amount_class = if item.is_income() {
                                    "activity__amount activity__amount--income"
                                } else {
                                    "activity__amount activity__amount--expense"
                                };
                                view! {
                                    <li class="activity__item">
                                        <div>
                                            <p class="activity__title">{item.title}</p>
                                            <p class="activity__when">{item.when}</p>
                                        </div>
                                        <span class=amount_class>{format_signed_amount(item.amount_cents)}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </main>
        </div>
    }
}
