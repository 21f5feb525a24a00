use yew::prelude::*;

use crate::config;
use crate::content::{Service, SERVICES};
use crate::hooks::use_in_view;
use crate::motion::{Motion, RevealPhase, Stagger};

const HEADER: Motion = Motion::fade_up(20.0, 600);
const GRID: Stagger = Stagger::new(300, 200);
const CARD: Motion = Motion::fade_up(50.0, 600);
const FOOTNOTE: Motion = Motion::fade_up(20.0, 600).delayed(800);

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
    style: AttrValue,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    html! {
        <div class="service-card-wrapper" style={props.style.clone()}>
            <div class={classes!("service-card", service.accent)}>
                <div class="service-card-overlay"></div>
                <div class="service-icon">{service.icon}</div>
                <h3>{service.title}</h3>
                <p>{service.description}</p>
                <div class="service-price-row">
                    <span class="service-price text-gradient">{service.price}</span>
                    <button class="service-arrow" aria-label={format!("More about {}", service.title)}>
                        {"→"}
                    </button>
                </div>
                <button class="service-cta">{"Get Started"}</button>
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let grid = use_node_ref();
    let phase = RevealPhase::from_in_view(use_in_view(grid.clone(), config::SERVICES_IN_VIEW));

    html! {
        <section id="services" class="services-section">
            <div class="section-backdrop"></div>
            <div class="section-container">
                <div class="section-header" style={HEADER.style(phase)}>
                    <span class="badge">{"💪 Our Premium Services"}</span>
                    <h2 class="section-title">
                        {"Choose Your "}<span class="text-gradient">{"Perfect Plan"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Customized fitness solutions designed to help you achieve your goals faster and more effectively"}
                    </p>
                </div>

                <div ref={grid} class="services-grid">
                    { SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <ServiceCard
                            key={service.id}
                            service={*service}
                            style={GRID.apply(CARD, i).style(phase)}
                        />
                    }).collect::<Html>() }
                </div>

                <div class="services-footnote" style={FOOTNOTE.style(phase)}>
                    <p>{"Not sure which plan is right for you?"}</p>
                    <a href="/consultation" class="btn-secondary">
                        {"Get Free Consultation"}<span class="btn-arrow">{"→"}</span>
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .services-section {
                    position: relative;
                    padding: 6rem 0;
                    overflow: hidden;
                    background: var(--gradient-hero);
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    padding: 0 1rem;
                }
                .service-card-wrapper {
                    position: relative;
                }
                .service-card {
                    position: relative;
                    overflow: hidden;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: white;
                    border: 1px solid rgba(26, 26, 46, 0.05);
                    box-shadow: var(--shadow-card);
                    transition: transform 0.3s ease-out, box-shadow 0.5s ease;
                }
                .service-card:hover {
                    transform: translateY(-15px) scale(1.05);
                    box-shadow: var(--shadow-card-hover);
                    border-color: rgba(255, 107, 53, 0.3);
                }
                .service-card-overlay {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    background: var(--gradient-primary);
                    transition: opacity 0.5s ease;
                    pointer-events: none;
                }
                .service-card:hover .service-card-overlay {
                    opacity: 0.05;
                }
                .service-icon {
                    width: 5rem;
                    height: 5rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.875rem;
                    margin-bottom: 2rem;
                    background: rgba(255, 107, 53, 0.15);
                    transition: transform 0.3s ease;
                }
                .accent-blue .service-icon {
                    background: rgba(22, 33, 62, 0.15);
                }
                .accent-hover .service-icon {
                    background: rgba(247, 147, 30, 0.15);
                }
                .service-card:hover .service-icon {
                    transform: scale(1.1);
                }
                .service-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--text-primary);
                    margin-bottom: 1rem;
                }
                .service-card p {
                    color: rgba(26, 26, 46, 0.8);
                    margin-bottom: 2rem;
                    line-height: 1.6;
                }
                .service-price-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1.5rem;
                }
                .service-price {
                    font-size: 1.875rem;
                    font-weight: 700;
                }
                .service-arrow {
                    padding: 0.75rem 0.9rem;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    color: var(--accent-primary);
                    background: rgba(255, 107, 53, 0.1);
                    transition: all 0.3s ease;
                }
                .service-arrow:hover {
                    color: white;
                    background: var(--accent-primary);
                    transform: scale(1.1);
                }
                .service-cta {
                    width: 100%;
                    padding: 1rem 0;
                    border: none;
                    border-radius: 1rem;
                    cursor: pointer;
                    font-weight: 700;
                    color: white;
                    background: var(--gradient-primary);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .service-cta:hover {
                    transform: scale(1.02);
                    box-shadow: var(--shadow-glow);
                }
                .services-footnote {
                    text-align: center;
                    margin-top: 4rem;
                }
                .services-footnote p {
                    color: rgba(26, 26, 46, 0.7);
                    margin-bottom: 1.5rem;
                }
                @media (max-width: 1023px) {
                    .services-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 639px) {
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
