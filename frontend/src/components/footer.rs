use chrono::{Datelike, Local};
use log::info;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::content::{BUSINESS_HOURS, CONTACT_ITEMS, FOOTER_SOCIALS, QUICK_LINKS};
use crate::hooks::{scroll_to_top, use_in_view};
use crate::motion::{Motion, RevealPhase, Stagger};

const COLUMNS: Stagger = Stagger::new(200, 100);
const ITEM: Motion = Motion::fade_up(20.0, 500);
const TOP_BUTTON: Motion = Motion::fade_up(20.0, 500).delayed(1000);

/// Cheap shape check before thanking someone for subscribing; nothing is sent.
fn is_plausible_email(input: &str) -> bool {
    let input = input.trim();
    match input.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Newsletter {
    Idle,
    Invalid,
    Subscribed,
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_ref = use_node_ref();
    let phase = RevealPhase::from_in_view(use_in_view(footer_ref.clone(), config::FOOTER_IN_VIEW));
    let email = use_state(String::new);
    let newsletter = use_state(|| Newsletter::Idle);
    let year = Local::now().year();

    let item = |i: usize| COLUMNS.apply(ITEM, i).style(phase);

    let on_email_input = {
        let email = email.clone();
        let newsletter = newsletter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            newsletter.set(Newsletter::Idle);
        })
    };

    let on_subscribe = {
        let email = email.clone();
        let newsletter = newsletter.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if is_plausible_email(&email) {
                info!("newsletter signup captured locally");
                newsletter.set(Newsletter::Subscribed);
                email.set(String::new());
            } else {
                newsletter.set(Newsletter::Invalid);
            }
        })
    };

    let on_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer ref={footer_ref} class="site-footer">
            <div class="footer-backdrop"></div>
            <div class="section-container footer-content">
                <div class="footer-grid">
                    <div style={item(0)}>
                        <div class="footer-brand">
                            <div class="footer-logo">{"💪"}</div>
                            <h3>{"Fit"}<span class="text-gradient">{"Life"}</span></h3>
                        </div>
                        <p class="footer-copy">
                            {"Transform your life with our state-of-the-art facilities and expert trainers. Join thousands of satisfied members who achieved their fitness goals."}
                        </p>
                        <h4>{"Contact Us"}</h4>
                        <ul class="footer-list">
                            { CONTACT_ITEMS.iter().map(|contact| html! {
                                <li class="footer-contact" key={contact.text}>
                                    <span class="footer-contact-icon">{contact.icon}</span>
                                    <span>{contact.text}</span>
                                </li>
                            }).collect::<Html>() }
                        </ul>
                    </div>

                    <div style={item(1)}>
                        <h3>{"Quick Links"}</h3>
                        <ul class="footer-list">
                            { QUICK_LINKS.iter().map(|link| html! {
                                <li key={link.name}>
                                    <a href={link.href} class="footer-link">
                                        <span class="footer-link-dot"></span>
                                        <span>{link.name}</span>
                                    </a>
                                </li>
                            }).collect::<Html>() }
                        </ul>

                        <div class="newsletter">
                            <h4>{"Stay Updated"}</h4>
                            {
                                if *newsletter == Newsletter::Subscribed {
                                    html! { <p class="newsletter-note">{"Thanks for subscribing!"}</p> }
                                } else {
                                    html! {
                                        <div class="newsletter-form">
                                            <input
                                                type="email"
                                                placeholder="Enter your email"
                                                value={(*email).clone()}
                                                oninput={on_email_input}
                                            />
                                            <button onclick={on_subscribe}>{"Subscribe"}</button>
                                        </div>
                                    }
                                }
                            }
                            {
                                if *newsletter == Newsletter::Invalid {
                                    html! { <p class="newsletter-note error">{"Please enter a valid email address."}</p> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </div>

                    <div style={item(2)}>
                        <h3>{"Connect With Us"}</h3>
                        <p class="footer-copy">
                            {"Follow us on social media for fitness tips, workout videos, and community updates."}
                        </p>
                        <div class="footer-socials">
                            { FOOTER_SOCIALS.iter().map(|social| html! {
                                <a
                                    key={social.label}
                                    href={social.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="footer-social"
                                    aria-label={social.label}
                                >
                                    {social.icon}
                                </a>
                            }).collect::<Html>() }
                        </div>

                        <h4>{"Business Hours"}</h4>
                        <div class="business-hours">
                            { BUSINESS_HOURS.iter().map(|(days, hours)| html! {
                                <div class="business-hours-row" key={*days}>
                                    <span>{*days}</span>
                                    <span>{*hours}</span>
                                </div>
                            }).collect::<Html>() }
                        </div>
                    </div>
                </div>

                <div class="footer-bottom" style={item(3)}>
                    <p>{format!("© {} FitLife. All rights reserved.", year)}</p>
                    <div class="footer-legal">
                        <a href="/privacy">{"Privacy Policy"}</a>
                        <a href="/terms">{"Terms of Service"}</a>
                    </div>
                </div>
            </div>

            <button
                class="scroll-top"
                onclick={on_top}
                aria-label="Back to top"
                style={TOP_BUTTON.enter_style()}
            >
                {"↑"}
            </button>

            <style>
                {r#"
                .site-footer {
                    position: relative;
                    overflow: hidden;
                    color: white;
                    background: var(--dark-blue);
                }
                .footer-backdrop {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, rgba(255, 107, 53, 0.05), transparent, rgba(247, 147, 30, 0.05));
                }
                .footer-content {
                    position: relative;
                    z-index: 10;
                    padding-top: 4rem;
                    padding-bottom: 2rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                    margin-bottom: 3rem;
                }
                .footer-grid h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 2rem;
                }
                .footer-grid h4 {
                    font-size: 1.125rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .footer-brand h3 {
                    margin: 0;
                }
                .footer-logo {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    background: var(--gradient-primary);
                }
                .footer-copy {
                    color: rgba(255, 255, 255, 0.8);
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }
                .footer-list {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .footer-contact {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    color: rgba(255, 255, 255, 0.9);
                }
                .footer-contact-icon {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 107, 53, 0.2);
                    transition: transform 0.3s ease, background 0.3s ease;
                }
                .footer-contact:hover .footer-contact-icon {
                    transform: scale(1.1);
                    background: var(--accent-primary);
                }
                .footer-link {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .footer-link:hover {
                    color: var(--accent-primary);
                }
                .footer-link-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    opacity: 0;
                    background: var(--accent-primary);
                    transition: opacity 0.3s ease;
                }
                .footer-link:hover .footer-link-dot {
                    opacity: 1;
                }
                .newsletter {
                    margin-top: 2rem;
                }
                .newsletter-form {
                    display: flex;
                    gap: 0.5rem;
                }
                .newsletter-form input {
                    flex: 1;
                    padding: 0.75rem 1rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: white;
                    background: rgba(255, 255, 255, 0.1);
                }
                .newsletter-form button {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0.75rem;
                    cursor: pointer;
                    font-weight: 700;
                    color: white;
                    background: var(--gradient-primary);
                    transition: transform 0.2s ease;
                }
                .newsletter-form button:hover {
                    transform: scale(1.05);
                }
                .newsletter-note {
                    margin-top: 0.5rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .newsletter-note.error {
                    color: #fca5a5;
                }
                .footer-socials {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .footer-social {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-decoration: none;
                    background: rgba(255, 255, 255, 0.1);
                    transition: transform 0.3s ease, background 0.3s ease;
                }
                .footer-social:hover {
                    transform: scale(1.1);
                    background: var(--accent-primary);
                }
                .business-hours {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .business-hours-row {
                    display: flex;
                    justify-content: space-between;
                }
                .footer-bottom {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    color: rgba(255, 255, 255, 0.7);
                }
                .footer-legal {
                    display: flex;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                }
                .footer-legal a {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                }
                .footer-legal a:hover {
                    color: var(--accent-primary);
                }
                .scroll-top {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 40;
                    width: 3.5rem;
                    height: 3.5rem;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    font-size: 1.25rem;
                    color: white;
                    background: var(--gradient-primary);
                    box-shadow: var(--shadow-glow);
                }
                .scroll-top:hover {
                    transform: scale(1.1);
                }
                @media (max-width: 767px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                    .footer-bottom {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::is_plausible_email;

    #[test]
    fn email_shape() {
        assert!(is_plausible_email("info@fitlife.com"));
        assert!(is_plausible_email("  someone@mail.example.org "));
        assert!(!is_plausible_email(""));
        assert!(!is_plausible_email("no-at-sign.com"));
        assert!(!is_plausible_email("@fitlife.com"));
        assert!(!is_plausible_email("a@b@c.com"));
        assert!(!is_plausible_email("someone@localhost"));
        assert!(!is_plausible_email("someone@.com"));
    }
}
