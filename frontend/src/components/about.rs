use yew::prelude::*;

use crate::config;
use crate::content::{ABOUT_IMAGE, ABOUT_PARAGRAPHS, ABOUT_STATS};
use crate::hooks::use_in_view;
use crate::motion::{Motion, RevealPhase, Stagger};

const COLUMNS: Stagger = Stagger::new(200, 300);
const IMAGE: Motion = Motion::slide_x(-100.0, 800);
const TEXT: Motion = Motion::slide_x(100.0, 800);
const BADGE_CARD: Motion = Motion::fade_up(20.0, 600).delayed(1000);
const STATS: Stagger = Stagger::new(1200, 100);
const STAT: Motion = Motion::fade_up(20.0, 600);

#[function_component(About)]
pub fn about() -> Html {
    let section = use_node_ref();
    let phase = RevealPhase::from_in_view(use_in_view(section.clone(), config::ABOUT_IN_VIEW));

    html! {
        <section ref={section} id="about" class="about-section">
            <div class="section-backdrop"></div>
            <div class="section-container about-grid">
                <div class="about-image-column" style={COLUMNS.apply(IMAGE, 0).style(phase)}>
                    <div class="about-image-frame">
                        <img
                            src={ABOUT_IMAGE}
                            alt="Modern gym facility with state-of-the-art equipment"
                            width="600"
                            height="400"
                        />
                    </div>
                    <div class="about-floating-card" style={BADGE_CARD.style(phase)}>
                        <div class="about-floating-icon">{"✔"}</div>
                        <div>
                            <div class="about-floating-value">{"Certified"}</div>
                            <div class="about-floating-label">{"Expert Trainers"}</div>
                        </div>
                    </div>
                </div>

                <div class="about-text-column" style={COLUMNS.apply(TEXT, 1).style(phase)}>
                    <span class="badge">{"🏆 About Our Excellence"}</span>
                    <h2 class="section-title">
                        {"Your Journey to "}<span class="text-gradient">{"Excellence"}</span>
                    </h2>
                    <div class="about-copy">
                        { ABOUT_PARAGRAPHS.iter().map(|paragraph| html! {
                            <p>{*paragraph}</p>
                        }).collect::<Html>() }
                    </div>

                    <div class="about-stats">
                        { ABOUT_STATS.iter().enumerate().map(|(i, stat)| html! {
                            <div class="about-stat" key={stat.label} style={STATS.apply(STAT, i).style(phase)}>
                                <div class="about-stat-icon">{stat.icon}</div>
                                <div class="about-stat-value">{stat.value}</div>
                                <div class="about-stat-label">{stat.label}</div>
                            </div>
                        }).collect::<Html>() }
                    </div>

                    <div class="about-actions">
                        <a href="/about" class="btn-primary">
                            {"Learn More"}<span class="btn-arrow">{"→"}</span>
                        </a>
                        <a href="/tour" class="btn-secondary">{"Take a Virtual Tour"}</a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .about-section {
                    position: relative;
                    padding: 6rem 0;
                    overflow: hidden;
                    background: white;
                }
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .about-image-column {
                    position: relative;
                }
                .about-image-frame {
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: var(--shadow-card-hover);
                }
                .about-image-frame img {
                    display: block;
                    width: 100%;
                    height: auto;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .about-image-frame:hover img {
                    transform: scale(1.05);
                }
                .about-floating-card {
                    position: absolute;
                    bottom: -1.5rem;
                    right: -1.5rem;
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    padding: 1.25rem 1.5rem;
                    border-radius: 1rem;
                    background: white;
                    box-shadow: var(--shadow-card);
                }
                .about-floating-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: white;
                    background: var(--gradient-primary);
                }
                .about-floating-value {
                    font-weight: 700;
                    color: var(--text-primary);
                }
                .about-floating-label {
                    font-size: 0.875rem;
                    color: rgba(26, 26, 46, 0.7);
                }
                .about-copy p {
                    color: rgba(26, 26, 46, 0.8);
                    line-height: 1.7;
                    margin-bottom: 1.25rem;
                }
                .about-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin: 2.5rem 0;
                }
                .about-stat {
                    text-align: center;
                    padding: 1.25rem;
                    border-radius: 1rem;
                    background: rgba(255, 107, 53, 0.05);
                }
                .about-stat-icon {
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                }
                .about-stat-value {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--accent-primary);
                }
                .about-stat-label {
                    font-size: 0.875rem;
                    color: rgba(26, 26, 46, 0.7);
                }
                .about-actions {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                @media (max-width: 1023px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                    .about-floating-card {
                        right: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
