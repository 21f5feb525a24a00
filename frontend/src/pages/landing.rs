use yew::prelude::*;

use crate::components::{
    about::About, cta::Cta, footer::Footer, hero::Hero, navbar::Navbar, services::Services,
    testimonials::Testimonials,
};
use crate::content::TESTIMONIALS;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Navbar />
            <Hero />
            <Services />
            <About />
            <Testimonials items={TESTIMONIALS} />
            <Cta />
            <Footer />
            <style>
                {r#"
                :root {
                    --text-primary: #1a1a2e;
                    --accent-primary: #ff6b35;
                    --accent-hover: #f7931e;
                    --dark-blue: #16213e;
                    --gradient-primary: linear-gradient(135deg, #ff6b35 0%, #f7931e 100%);
                    --gradient-hero: linear-gradient(135deg, #fdfbfb 0%, #ebedee 100%);
                    --shadow-card: 0 10px 30px rgba(26, 26, 46, 0.08);
                    --shadow-card-hover: 0 20px 40px rgba(26, 26, 46, 0.15);
                    --shadow-glow: 0 10px 30px rgba(255, 107, 53, 0.35);
                }
                * {
                    box-sizing: border-box;
                }
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: var(--text-primary);
                    background: white;
                }
                .landing-page {
                    overflow-x: hidden;
                }
                .section-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    position: relative;
                    z-index: 10;
                }
                .section-backdrop {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, rgba(255, 107, 53, 0.05), transparent, rgba(22, 33, 62, 0.05));
                    pointer-events: none;
                }
                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                    padding: 0 1rem;
                }
                .section-title {
                    font-size: clamp(1.875rem, 5vw, 3.75rem);
                    font-weight: 700;
                    color: var(--text-primary);
                    margin: 1rem 0 1.5rem;
                }
                .section-lead {
                    font-size: 1.25rem;
                    color: rgba(26, 26, 46, 0.8);
                    max-width: 48rem;
                    margin: 0 auto;
                    line-height: 1.6;
                }
                .badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: var(--accent-primary);
                    background: rgba(255, 107, 53, 0.1);
                }
                .text-gradient {
                    background: var(--gradient-primary);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .btn-primary, .btn-secondary {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.25rem 2.5rem;
                    border-radius: 1rem;
                    font-weight: 700;
                    font-size: 1.125rem;
                    text-decoration: none;
                    transition: transform 0.2s ease, box-shadow 0.3s ease;
                }
                .btn-primary {
                    color: white;
                    background: var(--gradient-primary);
                    box-shadow: var(--shadow-glow);
                }
                .btn-secondary {
                    color: var(--accent-primary);
                    background: white;
                    border: 2px solid var(--accent-primary);
                }
                .btn-primary:hover, .btn-secondary:hover {
                    transform: scale(1.05);
                }
                .btn-primary:active, .btn-secondary:active {
                    transform: scale(0.95);
                }
                @keyframes motion-enter {
                    from {
                        opacity: var(--from-opacity);
                        transform: translate(var(--from-x), var(--from-y)) scale(var(--from-scale));
                    }
                    to {
                        opacity: 1;
                        transform: translate(0, 0) scale(1);
                    }
                }
                @keyframes float {
                    0%, 100% { transform: translateY(-10px); }
                    50% { transform: translateY(10px); }
                }
                @keyframes pulse {
                    0%, 100% { transform: scale(1); }
                    50% { transform: scale(1.05); }
                }
                @media (prefers-reduced-motion: reduce) {
                    *, *::before, *::after {
                        animation-duration: 0.01ms !important;
                        animation-iteration-count: 1 !important;
                        transition-duration: 0.01ms !important;
                    }
                }
                "#}
            </style>
        </div>
    }
}
