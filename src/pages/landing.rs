//! Marketing landing page.

use leptos::prelude::*;

use crate::components::site_header::SiteHeader;

struct Feature {
    title: &'static str,
    blurb: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        title: "Smart Insights",
        blurb: "AI-powered analysis of your spending patterns to identify opportunities for savings and optimization.",
    },
    Feature {
        title: "Budget Tracking",
        blurb: "Set and monitor budgets across categories with real-time alerts when you approach limits.",
    },
    Feature {
        title: "Investment Tracking",
        blurb: "Monitor your portfolio performance and get personalized investment recommendations.",
    },
    Feature {
        title: "Savings Goals",
        blurb: "Set financial goals and track progress with automated savings recommendations.",
    },
    Feature {
        title: "Income Analysis",
        blurb: "Understand your income streams and optimize your earning potential with detailed analytics.",
    },
    Feature {
        title: "Smart Reports",
        blurb: "Generate comprehensive financial reports with actionable insights and trends analysis.",
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <SiteHeader>
                <a href="#features" class="site-header__link">"Features"</a>
                <a href="#pricing" class="site-header__link">"Pricing"</a>
                <a href="#about" class="site-header__link">"About"</a>
                <a href="/auth" class="btn btn--ghost">"Sign In"</a>
                <a href="/auth" class="btn btn--primary">"Get Started"</a>
            </SiteHeader>

            <section class="hero">
                <h1 class="hero__title">
                    "Smart Personal Finance"
                    <span class="hero__accent">"Insights"</span>
                </h1>
                <p class="hero__lead">
                    "Transform your financial data into actionable insights. Track spending, "
                    "optimize budgets, and achieve your financial goals with AI-powered intelligence."
                </p>
                <div class="hero__actions">
                    <a href="/auth" class="btn btn--primary btn--large">"Start Free Trial"</a>
                    <a href="/dashboard" class="btn btn--secondary btn--large">"View Demo"</a>
                </div>
            </section>

            <section id="features" class="features">
                <h2>"Features that Power Your Finance"</h2>
                <p class="features__lead">"Everything you need to take control of your financial future"</p>
                <div class="features__grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="feature-card">
                                    <h3>{feature.title}</h3>
                                    <p>{feature.blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="pricing" class="cta">
                <h2>"Ready to Transform Your Finances?"</h2>
                <p>"Join thousands of users who have already improved their financial health with Budgey.ai"</p>
                <a href="/auth" class="btn btn--inverse btn--large">"Start Your Free Trial"</a>
            </section>

            <footer id="about" class="site-footer">
                <div class="site-footer__brand">
                    <h3>"Budgey.ai"</h3>
                    <p>"Smart personal finance insights powered by AI."</p>
                </div>
                <p class="site-footer__legal">"© 2025 Budgey.ai. All rights reserved."</p>
            </footer>
        </div>
    }
}
