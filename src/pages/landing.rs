//! Marketing landing page: hero, calculator, feature grid, footer.

use leptos::prelude::*;

use crate::components::calculator::CalculatorSection;
use crate::components::header::Header;

const FEATURES: [(&str, &str); 3] = [
    (
        "Fast transfers",
        "Most transfers arrive within one business day.",
    ),
    (
        "Transparent pricing",
        "One small fee, shown up front. No hidden margins.",
    ),
    (
        "Bank-level security",
        "Your money and data are protected end to end.",
    ),
];

/// Public landing page.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <Header/>
            <main class="landing-page__main">
                <section class="hero">
                    <h1>"Send money home, without the markup"</h1>
                    <p>"Fair exchange rates and low fees on every transfer."</p>
                </section>
                <CalculatorSection/>
                <section class="features">
                    {FEATURES
                        .iter()
                        .map(|(title, blurb)| {
                            view! {
                                <div class="features__card">
                                    <h3>{*title}</h3>
                                    <p>{*blurb}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </section>
            </main>
            <footer class="site-footer">
                <span>"\u{00a9} 2026 Remity"</span>
                <nav>
                    <a href="/login">"Log in"</a>
                    <a href="/register">"Sign up"</a>
                </nav>
            </footer>
        </div>
    }
}
