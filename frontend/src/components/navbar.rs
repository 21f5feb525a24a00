use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::{NAV_LINKS, NAV_SOCIALS};
use crate::hooks::{use_in_view, use_scrolled};
use crate::motion::{Motion, RevealPhase, Stagger};
use crate::Route;

const BAR: Motion = Motion::fade_up(-20.0, 500);
const LINK: Motion = Motion::fade_up(-10.0, 300);
const LINK_STAGGER: Stagger = Stagger::new(0, 100);
const MOBILE_LINK: Motion = Motion::slide_x(-20.0, 300);

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled(config::NAVBAR_SCROLL_THRESHOLD_PX);
    let nav_ref = use_node_ref();
    let phase = RevealPhase::from_in_view(use_in_view(nav_ref.clone(), config::NAVBAR_IN_VIEW));

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation still happens, only the menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let link_style = |i: usize| LINK_STAGGER.apply(LINK, i).style(phase);

    html! {
        <nav
            ref={nav_ref}
            class={classes!("top-nav", is_scrolled.then(|| "scrolled"), (*menu_open).then(|| "mobile-menu-open"))}
            style={BAR.style(phase)}
        >
            <div class="nav-content">
                <div style={link_style(0)}>
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <span class="logo-fit">{"Fit"}</span>
                        <span class="text-gradient">{"Life"}</span>
                        <span class="logo-emoji">{"💪"}</span>
                    </Link<Route>>
                </div>

                <div class="nav-desktop">
                    <ul class="nav-links">
                        { NAV_LINKS.iter().enumerate().map(|(i, link)| html! {
                            <li key={link.name} style={link_style(i + 1)}>
                                <a href={link.href} class="nav-link">
                                    {link.name}
                                    <span class="nav-link-underline"></span>
                                </a>
                            </li>
                        }).collect::<Html>() }
                    </ul>
                    <div class="nav-socials" style={link_style(NAV_LINKS.len() + 1)}>
                        { NAV_SOCIALS.iter().map(|social| html! {
                            <a
                                key={social.label}
                                href={social.href}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="nav-social"
                                aria-label={social.label}
                            >
                                {social.icon}
                            </a>
                        }).collect::<Html>() }
                    </div>
                </div>

                <button
                    class="burger-menu"
                    style={link_style(NAV_LINKS.len() + 1)}
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                >
                    {
                        if *menu_open {
                            html! { <span class="burger-close">{"✕"}</span> }
                        } else {
                            html! {
                                <>
                                    <span></span>
                                    <span></span>
                                    <span></span>
                                </>
                            }
                        }
                    }
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            <ul>
                                { NAV_LINKS.iter().enumerate().map(|(i, link)| html! {
                                    <li
                                        key={link.name}
                                        style={LINK_STAGGER.apply(MOBILE_LINK, i).enter_style()}
                                    >
                                        <a href={link.href} class="mobile-link" onclick={close_menu.clone()}>
                                            {link.name}
                                        </a>
                                    </li>
                                }).collect::<Html>() }
                            </ul>
                            <div class="mobile-socials">
                                { NAV_SOCIALS.iter().map(|social| html! {
                                    <a
                                        key={social.label}
                                        href={social.href}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="nav-social"
                                        aria-label={social.label}
                                    >
                                        {social.icon}
                                    </a>
                                }).collect::<Html>() }
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem 0;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(4px);
                    transition: padding 0.5s ease, background 0.5s ease, box-shadow 0.5s ease;
                }
                .top-nav.scrolled {
                    padding: 0.75rem 0;
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-decoration: none;
                    color: var(--text-primary);
                }
                .logo-emoji {
                    font-size: 1.5rem;
                    margin-left: 0.25rem;
                }
                .nav-desktop {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-link {
                    position: relative;
                    font-weight: 500;
                    color: var(--text-primary);
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: var(--accent-primary);
                }
                .nav-link-underline {
                    position: absolute;
                    left: 0;
                    bottom: -4px;
                    width: 0;
                    height: 2px;
                    background: var(--gradient-primary);
                    transition: width 0.3s ease;
                }
                .nav-link:hover .nav-link-underline {
                    width: 100%;
                }
                .nav-socials, .mobile-socials {
                    display: flex;
                    gap: 1rem;
                }
                .nav-social {
                    font-size: 1.125rem;
                    padding: 0.5rem;
                    border-radius: 9999px;
                    text-decoration: none;
                    transition: transform 0.3s ease, background 0.3s ease;
                }
                .nav-social:hover {
                    transform: scale(1.1);
                    background: rgba(255, 107, 53, 0.1);
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                    border-radius: 0.5rem;
                }
                .burger-menu span:not(.burger-close) {
                    width: 24px;
                    height: 2px;
                    background: var(--text-primary);
                }
                .mobile-menu {
                    overflow: hidden;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    animation: mobile-menu-open 0.3s ease forwards;
                }
                .mobile-menu ul {
                    list-style: none;
                    margin: 0;
                    padding: 1rem 1.5rem;
                }
                .mobile-link {
                    display: block;
                    padding: 0.75rem 0;
                    font-weight: 500;
                    color: var(--text-primary);
                    text-decoration: none;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .mobile-link:hover {
                    color: var(--accent-primary);
                }
                .mobile-socials {
                    padding-top: 1.5rem;
                    gap: 1.5rem;
                }
                @keyframes mobile-menu-open {
                    from { opacity: 0; max-height: 0; }
                    to { opacity: 1; max-height: 500px; }
                }
                @media (max-width: 767px) {
                    .nav-desktop {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
