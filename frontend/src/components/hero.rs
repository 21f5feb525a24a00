use yew::prelude::*;

use crate::config;
use crate::content::HERO_STATS;
use crate::hooks::use_in_view;
use crate::motion::{Motion, RevealPhase, Stagger};

const CONTAINER: Stagger = Stagger::new(300, 200);
const TEXT: Motion = Motion::slide_x(-50.0, 800);
const BUTTONS: Motion = Motion::fade_up(20.0, 600);

#[function_component(Hero)]
pub fn hero() -> Html {
    let section = use_node_ref();
    let phase = RevealPhase::from_in_view(use_in_view(section.clone(), config::HERO_IN_VIEW));
    let text = |i: usize| CONTAINER.apply(TEXT, i).style(phase);

    html! {
        <section ref={section} id="top" class="hero">
            <div class="section-backdrop"></div>

            <div class="floating-icon float-1">{"🏋️"}</div>
            <div class="floating-icon float-2">{"❤️"}</div>
            <div class="floating-icon float-3">{"⭐"}</div>

            <div class="hero-content">
                <div style={text(0)}>
                    <span class="badge">{"🏆 #1 Fitness Center in the City"}</span>
                </div>

                <h1 class="hero-title" style={text(1)}>
                    {"Transform Your "}<span class="text-gradient">{"Body."}</span>
                    <br />
                    <span class="text-gradient">{"Start Today."}</span>
                </h1>

                <p class="hero-subtitle" style={text(2)}>
                    {"Join thousands of satisfied clients who achieved their fitness goals with our personalized training programs and state-of-the-art facilities."}
                </p>

                <div
                    class={classes!("hero-cta-group", (phase == RevealPhase::Visible).then(|| "pulse"))}
                    style={CONTAINER.apply(BUTTONS, 3).style(phase)}
                >
                    <a href="/book-trial" class="btn-primary">
                        {"Book a Free Trial"}<span class="btn-arrow">{"→"}</span>
                    </a>
                    <a href="/learn-more" class="btn-secondary">{"Learn More"}</a>
                </div>

                <div class="hero-stats" style={text(4)}>
                    { HERO_STATS.iter().map(|stat| html! {
                        <div class="hero-stat" key={stat.label}>
                            <div class="hero-stat-value text-gradient">{stat.value}</div>
                            <div class="hero-stat-label">{stat.label}</div>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>

            <div class="hero-fade"></div>

            <div class="scroll-indicator">
                <div class="scroll-mouse">
                    <div class="scroll-wheel"></div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    padding-top: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: var(--gradient-hero);
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                }
                .hero-title {
                    font-size: clamp(2.25rem, 7vw, 6rem);
                    font-weight: 700;
                    line-height: 1.1;
                    color: var(--text-primary);
                    margin: 1.5rem 0 2rem;
                }
                .hero-subtitle {
                    font-size: clamp(1.125rem, 2.5vw, 1.5rem);
                    color: rgba(26, 26, 46, 0.8);
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                    line-height: 1.6;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    align-items: center;
                }
                .hero-cta-group.pulse {
                    animation: pulse 1.5s ease-in-out 2s infinite;
                }
                .btn-arrow {
                    margin-left: 0.75rem;
                }
                .hero-stats {
                    display: flex;
                    justify-content: center;
                    gap: 3rem;
                    margin-top: 4rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(26, 26, 46, 0.1);
                }
                .hero-stat {
                    text-align: center;
                }
                .hero-stat-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                }
                .hero-stat-label {
                    color: rgba(26, 26, 46, 0.7);
                }
                .floating-icon {
                    position: absolute;
                    font-size: 3.5rem;
                    opacity: 0.1;
                    animation: float 3s ease-in-out infinite;
                }
                .float-1 { top: 5rem; left: 2.5rem; }
                .float-2 { top: 10rem; right: 5rem; animation-delay: 1s; font-size: 2.5rem; }
                .float-3 { bottom: 10rem; left: 5rem; animation-delay: 2s; font-size: 3rem; }
                .hero-fade {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    height: 8rem;
                    background: linear-gradient(to top, rgba(22, 33, 62, 0.1), transparent);
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    animation: bob 2s ease-in-out infinite;
                }
                .scroll-mouse {
                    width: 1.5rem;
                    height: 2.5rem;
                    border: 2px solid rgba(26, 26, 46, 0.3);
                    border-radius: 9999px;
                    display: flex;
                    justify-content: center;
                }
                .scroll-wheel {
                    width: 0.25rem;
                    height: 0.75rem;
                    margin-top: 0.5rem;
                    border-radius: 9999px;
                    background: rgba(26, 26, 46, 0.5);
                }
                @keyframes bob {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 10px); }
                }
                @media (max-width: 639px) {
                    .floating-icon {
                        display: none;
                    }
                    .hero-cta-group, .hero-stats {
                        flex-direction: column;
                    }
                    .hero-cta-group a {
                        width: 100%;
                    }
                }
                "#}
            </style>
        </section>
    }
}
