use yew::prelude::*;

use crate::config;
use crate::content::{CONTACT_ITEMS, PHONE_URL, WHATSAPP_URL};
use crate::hooks::use_in_view;
use crate::motion::{Easing, Motion, RevealPhase};

const PANEL: Motion = Motion::pop(0.95, 600);
const BADGE: Motion = Motion::fade_up(20.0, 600).delayed(200);
const BUTTONS: Motion = Motion::fade_up(20.0, 500).delayed(300).eased(Easing::BackOut);
const CONTACTS: Motion = Motion::fade_up(20.0, 600).delayed(600);
const PROOF: Motion = Motion::fade(600).delayed(800).eased(Easing::EaseInOut);

#[function_component(Cta)]
pub fn cta() -> Html {
    let panel = use_node_ref();
    let phase = RevealPhase::from_in_view(use_in_view(panel.clone(), config::CTA_IN_VIEW));

    html! {
        <section id="contact" class="cta-section">
            <div class="cta-backdrop"></div>
            <div class="floating-icon cta-float-1">{"💪"}</div>
            <div class="floating-icon cta-float-2">{"🏃‍♂️"}</div>

            <div ref={panel} class="cta-panel" style={PANEL.style(phase)}>
                <div style={BADGE.style(phase)}>
                    <span class="badge badge-light">{"🚀 Ready to Transform Your Life?"}</span>
                </div>

                <h2 class="cta-title">
                    {"Start Your Fitness Journey"}
                    <br />
                    {"Today"}
                </h2>
                <p class="cta-lead">
                    {"Get personalized guidance from our fitness experts. We're just a message away from helping you achieve your goals!"}
                </p>

                <div class="cta-buttons" style={BUTTONS.style(phase)}>
                    <a href={WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="cta-button whatsapp">
                        {"💬 Message Us on WhatsApp"}
                    </a>
                    <a href={PHONE_URL} class="cta-button phone">
                        {"📞 Call Us Now"}
                    </a>
                </div>

                <div class="cta-contacts" style={CONTACTS.style(phase)}>
                    { CONTACT_ITEMS.iter().take(2).map(|item| html! {
                        <div class="cta-contact" key={item.text}>
                            <span class="cta-contact-icon">{item.icon}</span>
                            <span>{item.text}</span>
                        </div>
                    }).collect::<Html>() }
                    <div class="cta-contact">
                        <span class="cta-contact-icon">{"⏰"}</span>
                        <span>{"Open 7 days a week"}</span>
                    </div>
                </div>

                <p class="cta-proof" style={PROOF.style(phase)}>
                    {"⭐ Join 10,000+ satisfied members who transformed their lives with us"}
                </p>
            </div>

            <style>
                {r#"
                .cta-section {
                    position: relative;
                    padding: 6rem 1.5rem;
                    overflow: hidden;
                    background: var(--gradient-primary);
                    color: white;
                }
                .cta-backdrop {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, rgba(22, 33, 62, 0.2), transparent);
                }
                .cta-float-1 { top: 2.5rem; left: 2.5rem; opacity: 0.2; }
                .cta-float-2 { bottom: 2.5rem; right: 2.5rem; opacity: 0.2; animation-delay: 1s; }
                .cta-panel {
                    position: relative;
                    z-index: 10;
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .badge-light {
                    color: white;
                    background: rgba(255, 255, 255, 0.2);
                }
                .cta-title {
                    font-size: clamp(2rem, 5vw, 3.75rem);
                    font-weight: 700;
                    line-height: 1.15;
                    margin: 1.5rem 0;
                }
                .cta-lead {
                    font-size: 1.25rem;
                    opacity: 0.9;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                    line-height: 1.6;
                }
                .cta-buttons {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1.25rem 2.5rem;
                    border-radius: 1rem;
                    font-weight: 700;
                    font-size: 1.125rem;
                    text-decoration: none;
                    transition: transform 0.2s ease-in-out, background 0.2s ease-in-out;
                }
                .cta-button.whatsapp {
                    color: var(--accent-primary);
                    background: white;
                }
                .cta-button.phone {
                    color: white;
                    border: 2px solid white;
                }
                .cta-button:hover {
                    transform: scale(1.05);
                }
                .cta-button.phone:hover {
                    background: var(--accent-hover);
                }
                .cta-button:active {
                    transform: scale(0.98);
                }
                .cta-contacts {
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                    flex-wrap: wrap;
                    margin-top: 3rem;
                }
                .cta-contact {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .cta-contact-icon {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 255, 255, 0.2);
                }
                .cta-proof {
                    margin-top: 2.5rem;
                    opacity: 0.8;
                }
                "#}
            </style>
        </section>
    }
}
