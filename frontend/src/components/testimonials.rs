use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::carousel::autoplay::{Autoplay, IntervalTicker};
use crate::carousel::rotator::{Direction, Rotator, RotatorAction};
use crate::config;
use crate::content::Testimonial;
use crate::hooks::{use_in_view, use_viewport_width};
use crate::motion::{Motion, Presence, PresenceAction, RevealPhase, Stagger};

const HEADER: Stagger = Stagger::new(300, 200);
const HEADER_ITEM: Motion = Motion::fade_up(20.0, 600);
const CARD: Motion = Motion::fade_up(20.0, 600);

/// What the carousel has on screen. Direction is left out: a move that keeps
/// the same cards must not replay their exit.
#[derive(Clone, Debug, PartialEq)]
struct Slide {
    window: Vec<usize>,
    current: usize,
}

impl Slide {
    fn of(rotator: &Rotator) -> Self {
        Self {
            window: rotator.visible_window(),
            current: rotator.current(),
        }
    }
}

/// Leaving cards slide toward the side of the move that replaces them.
fn card_motion(direction: Direction) -> Motion {
    CARD.exiting_x(direction.exit_offset_px())
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub items: &'static [Testimonial],
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    match Rotator::new(props.items.len()) {
        Ok(rotator) => html! { <Carousel items={props.items} initial={rotator} /> },
        Err(err) => {
            warn!("not rendering testimonials: {}", err);
            html! {}
        }
    }
}

#[derive(Properties, PartialEq)]
struct CarouselProps {
    items: &'static [Testimonial],
    initial: Rotator,
}

#[function_component(Carousel)]
fn carousel(props: &CarouselProps) -> Html {
    let rotator = {
        let initial = props.initial.clone();
        use_reducer(move || initial)
    };
    let presence = {
        let first = Slide::of(&rotator);
        use_reducer(move || Presence::new(first))
    };
    let autoplay = use_mut_ref(|| Autoplay::new(IntervalTicker, config::ROTATION_INTERVAL_MS));

    let section = use_node_ref();
    let in_view = use_in_view(section.clone(), config::TESTIMONIALS_IN_VIEW);
    let header_ref = use_node_ref();
    let header_seen = use_in_view(header_ref.clone(), config::TESTIMONIALS_HEADER_IN_VIEW);
    let viewport_width = use_viewport_width();

    {
        let rotator = rotator.clone();
        use_effect_with_deps(
            move |in_view| {
                rotator.dispatch(RotatorAction::SetInView(*in_view));
                || ()
            },
            in_view,
        );
    }

    {
        let rotator = rotator.clone();
        use_effect_with_deps(
            move |width| {
                rotator.dispatch(RotatorAction::Resize(*width));
                || ()
            },
            viewport_width,
        );
    }

    // Re-arm the auto-advance timer from zero whenever visibility or hover
    // changes; the destructor covers unmount.
    {
        let autoplay = autoplay.clone();
        let ticks = rotator.clone();
        use_effect_with_deps(
            move |(in_view, paused)| {
                let active = *in_view && !*paused;
                autoplay
                    .borrow_mut()
                    .sync(active, move || ticks.dispatch(RotatorAction::Tick));
                move || autoplay.borrow_mut().stop()
            },
            (rotator.in_view(), rotator.is_paused()),
        );
    }

    // Play the outgoing cards' exit before swapping in the new window.
    {
        let presence = presence.clone();
        use_effect_with_deps(
            move |slide: &Slide| {
                presence.dispatch(PresenceAction::Show(slide.clone()));
                let done = presence.clone();
                let timeout = Timeout::new(config::CARD_EXIT_MS, move || {
                    done.dispatch(PresenceAction::ExitFinished);
                });
                move || drop(timeout)
            },
            Slide::of(&rotator),
        );
    }

    let on_prev = {
        let rotator = rotator.clone();
        Callback::from(move |_: MouseEvent| rotator.dispatch(RotatorAction::Prev))
    };
    let on_next = {
        let rotator = rotator.clone();
        Callback::from(move |_: MouseEvent| rotator.dispatch(RotatorAction::Next))
    };
    let on_enter = {
        let rotator = rotator.clone();
        Callback::from(move |_: MouseEvent| rotator.dispatch(RotatorAction::SetPaused(true)))
    };
    let on_leave = {
        let rotator = rotator.clone();
        Callback::from(move |_: MouseEvent| rotator.dispatch(RotatorAction::SetPaused(false)))
    };

    let header_phase = RevealPhase::from_in_view(header_seen);
    let header = |i: usize| HEADER.apply(HEADER_ITEM, i).style(header_phase);

    let slide = presence.shown();
    let motion = card_motion(rotator.direction());
    let cards = slide
        .window
        .iter()
        .enumerate()
        .filter_map(|(slot, &index)| props.items.get(index).map(|t| (slot, t)))
        .map(|(slot, testimonial)| {
            let style = match presence.phase() {
                RevealPhase::Exiting => motion.style(RevealPhase::Exiting),
                _ => motion.enter_style(),
            };
            html! {
                <div
                    key={format!("{}-{}-{}", testimonial.id, slide.current, slot)}
                    class="testimonial-slot"
                    style={style}
                >
                    <TestimonialCard testimonial={*testimonial} />
                </div>
            }
        })
        .collect::<Html>();

    let dots = (0..rotator.len())
        .map(|index| {
            let onclick = {
                let rotator = rotator.clone();
                Callback::from(move |_: MouseEvent| {
                    info!("testimonial dot {} selected", index);
                    rotator.dispatch(RotatorAction::GoTo(index));
                })
            };
            html! {
                <button
                    key={index}
                    class={classes!("carousel-dot", (rotator.current() == index).then(|| "active"))}
                    aria-label={format!("Go to testimonial {}", index + 1)}
                    {onclick}
                />
            }
        })
        .collect::<Html>();

    html! {
        <section ref={section} id="reviews" class="testimonials-section">
            <div class="section-backdrop"></div>
            <div class="section-container">
                <div ref={header_ref} class="section-header">
                    <span class="badge" style={header(0)}>{"⭐ What Our Members Say"}</span>
                    <h2 class="section-title" style={header(1)}>
                        {"Real Stories, "}<span class="text-gradient">{"Real Results"}</span>
                    </h2>
                    <p class="section-lead" style={header(2)}>
                        {"Don't just take our word for it - hear from our amazing community of fitness enthusiasts"}
                    </p>
                </div>

                <div class="carousel" onmouseenter={on_enter} onmouseleave={on_leave}>
                    <div class="carousel-viewport">
                        <div class="carousel-track">
                            {cards}
                        </div>
                    </div>

                    <button class="carousel-arrow prev" onclick={on_prev} aria-label="Previous testimonial">
                        {"‹"}
                    </button>
                    <button class="carousel-arrow next" onclick={on_next} aria-label="Next testimonial">
                        {"›"}
                    </button>
                </div>

                <div class="carousel-dots">
                    {dots}
                </div>
            </div>

            <style>
                {r#"
                .testimonials-section {
                    position: relative;
                    padding: 6rem 0;
                    overflow: hidden;
                    background: var(--gradient-hero);
                }
                .carousel {
                    position: relative;
                }
                .carousel-viewport {
                    overflow: hidden;
                    padding: 0 1rem;
                }
                .carousel-track {
                    display: flex;
                    margin: 0 -1rem;
                }
                .testimonial-slot {
                    flex: 1 1 0;
                    min-width: 0;
                    padding: 0 1rem;
                    margin-bottom: 2rem;
                }
                .testimonial-card {
                    position: relative;
                    overflow: hidden;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: white;
                    box-shadow: var(--shadow-card);
                    transition: box-shadow 0.5s ease;
                }
                .testimonial-card:hover {
                    box-shadow: var(--shadow-card-hover);
                }
                .quote-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                    font-size: 2rem;
                    color: white;
                    background: var(--gradient-primary);
                    transition: transform 0.3s ease;
                }
                .testimonial-card:hover .quote-icon {
                    transform: scale(1.1);
                }
                .stars {
                    display: flex;
                    gap: 0.25rem;
                    margin-bottom: 1.5rem;
                    font-size: 1.125rem;
                }
                .star {
                    color: #d1d5db;
                }
                .star.filled {
                    color: #facc15;
                }
                .testimonial-quote {
                    flex-grow: 1;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: rgba(26, 26, 46, 0.9);
                    margin-bottom: 2rem;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    margin-top: auto;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(26, 26, 46, 0.1);
                }
                .author-photo {
                    width: 3.5rem;
                    height: 3.5rem;
                    padding: 2px;
                    margin-right: 1rem;
                    border-radius: 9999px;
                    background: var(--gradient-primary);
                }
                .author-photo img {
                    width: 100%;
                    height: 100%;
                    border-radius: 9999px;
                    border: 2px solid white;
                    object-fit: cover;
                }
                .author-name {
                    font-weight: 700;
                    font-size: 1.125rem;
                    color: var(--text-primary);
                    margin: 0;
                }
                .author-role {
                    font-size: 0.875rem;
                    color: rgba(26, 26, 46, 0.7);
                    margin: 0;
                }
                .carousel-arrow {
                    position: absolute;
                    top: 50%;
                    z-index: 10;
                    width: 3.5rem;
                    height: 3.5rem;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    font-size: 1.75rem;
                    background: white;
                    box-shadow: var(--shadow-card);
                    transform: translateY(-50%);
                    transition: all 0.3s ease;
                }
                .carousel-arrow.prev {
                    left: 0;
                    margin-left: -1.5rem;
                }
                .carousel-arrow.next {
                    right: 0;
                    margin-right: -1.5rem;
                }
                .carousel-arrow:hover {
                    color: white;
                    background: var(--accent-primary);
                    transform: translateY(-50%) scale(1.1);
                }
                .carousel-arrow:active {
                    transform: translateY(-50%) scale(0.95);
                }
                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    margin-top: 3rem;
                }
                .carousel-dot {
                    width: 1rem;
                    height: 1rem;
                    margin: 0 0.5rem;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    background: rgba(26, 26, 46, 0.2);
                    transition: all 0.3s ease;
                }
                .carousel-dot:hover {
                    background: rgba(26, 26, 46, 0.4);
                    transform: scale(1.2);
                }
                .carousel-dot.active {
                    background: var(--gradient-primary);
                    transform: scale(1.25);
                }
                @media (max-width: 767px) {
                    .carousel-arrow.prev {
                        margin-left: -0.5rem;
                    }
                    .carousel-arrow.next {
                        margin-right: -0.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = &props.testimonial;
    html! {
        <div class="testimonial-card">
            <div class="quote-icon">{"“"}</div>
            <div class="stars" aria-label={format!("{} out of {} stars", t.rating, Testimonial::MAX_RATING)}>
                { t.stars().iter().map(|&filled| html! {
                    <span class={classes!("star", filled.then(|| "filled"))}>{"★"}</span>
                }).collect::<Html>() }
            </div>
            <p class="testimonial-quote">{format!("“{}”", t.quote)}</p>
            <div class="testimonial-author">
                <div class="author-photo">
                    <img src={t.photo} alt={t.name} />
                </div>
                <div>
                    <h4 class="author-name">{t.name}</h4>
                    <p class="author-role">{t.role}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::rotator::Step;
    use crate::content::TESTIMONIALS;

    fn rotator() -> Rotator {
        let mut r = Rotator::new(TESTIMONIALS.len()).unwrap();
        r.set_viewport_width(1280.0);
        r
    }

    fn exit_x(rotator: &Rotator) -> f64 {
        card_motion(rotator.direction()).pose(RevealPhase::Exiting).x
    }

    #[test]
    fn first_next_slides_cards_out_forward() {
        let mut r = rotator();
        let mut presence = Presence::new(Slide::of(&r));

        r.advance(Step::Forward);
        assert!(presence.show(Slide::of(&r)));
        assert_eq!(presence.phase(), RevealPhase::Exiting);
        assert_eq!(exit_x(&r), 100.0);
    }

    #[test]
    fn exit_follows_the_latest_move() {
        let mut r = rotator();
        let mut presence = Presence::new(Slide::of(&r));

        r.advance(Step::Backward);
        presence.show(Slide::of(&r));
        assert_eq!(exit_x(&r), -100.0);
        presence.finish_exit();

        r.advance(Step::Forward);
        assert!(presence.show(Slide::of(&r)));
        assert_eq!(exit_x(&r), 100.0);
    }

    #[test]
    fn active_dot_does_not_replay_the_cards() {
        let mut r = rotator();
        r.advance(Step::Forward);
        let mut presence = Presence::new(Slide::of(&r));

        r.go_to(1);
        assert_eq!(r.direction(), Direction::Backward);
        assert!(!presence.show(Slide::of(&r)));
        assert_eq!(presence.phase(), RevealPhase::Visible);
    }
}
