//! Home page main slide and the product strip beneath it.
//!
//! TRADE-OFFS
//! ==========
//! Autoplay rebuilds its `Interval` on every restart instead of pausing it,
//! because `gloo-timers` intervals cannot be reset in place. The carousel
//! state decides whether a restart is needed; this component only owns the
//! timer handle.

use leptos::prelude::*;
use widgets::carousel::{Carousel, Slider};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub body: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductTile {
    pub name: &'static str,
    pub company: &'static str,
}

#[cfg(feature = "csr")]
type AutoplayHandle = std::rc::Rc<std::cell::RefCell<Option<gloo_timers::callback::Interval>>>;

#[cfg(feature = "csr")]
fn restart_autoplay(handle: &AutoplayHandle, carousel: RwSignal<Carousel>) {
    let interval = gloo_timers::callback::Interval::new(widgets::consts::CAROUSEL_INTERVAL_MS, move || {
        carousel.update(|c| {
            c.tick();
        });
    });
    // Dropping the previous handle cancels it.
    *handle.borrow_mut() = Some(interval);
}

#[component]
pub fn MainCarousel(slides: &'static [Slide]) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(slides.len()));

    #[cfg(feature = "csr")]
    let autoplay: AutoplayHandle = std::rc::Rc::default();
    #[cfg(feature = "csr")]
    restart_autoplay(&autoplay, carousel);

    let on_dot = {
        #[cfg(feature = "csr")]
        let autoplay = autoplay.clone();
        move |index: usize| {
            let restart = carousel.try_update(|c| c.select(index)).unwrap_or(false);
            #[cfg(feature = "csr")]
            {
                if restart {
                    restart_autoplay(&autoplay, carousel);
                }
            }
            #[cfg(not(feature = "csr"))]
            let _ = restart;
        }
    };

    let on_toggle = move |_| {
        let playing = carousel.try_update(Carousel::toggle_play).unwrap_or(false);
        #[cfg(feature = "csr")]
        {
            if playing {
                restart_autoplay(&autoplay, carousel);
            } else {
                autoplay.borrow_mut().take();
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = playing;
    };

    view! {
        <section class="main-slide">
            {slides
                .iter()
                .enumerate()
                .map(|(index, slide)| {
                    view! {
                        <div class="slide" class:active=move || carousel.with(|c| c.is_active(index))>
                            <h2>{slide.title}</h2>
                            <p>{slide.body}</p>
                            <a class="slide-link" href=slide.href>"자세히 보기"</a>
                        </div>
                    }
                })
                .collect_view()}
            <div class="slide-controls">
                {(0..slides.len())
                    .map(|index| {
                        let on_dot = on_dot.clone();
                        view! {
                            <button
                                class="dot"
                                class:active=move || carousel.with(|c| c.is_active(index))
                                on:click=move |_| on_dot(index)
                            ></button>
                        }
                    })
                    .collect_view()}
                <button class="slide-pause" on:click=on_toggle>
                    {move || carousel.with(Carousel::play_label)}
                </button>
            </div>
        </section>
    }
}

#[component]
pub fn ProductSlider(tiles: &'static [ProductTile]) -> impl IntoView {
    let slider = RwSignal::new(Slider::default());

    view! {
        <section class="product-slider">
            <button class="slider-prev" on:click=move |_| slider.update(Slider::prev)>"‹"</button>
            <div class="slider-window">
                <div
                    class="slider-track"
                    style:transform=move || format!("translateX({}px)", slider.with(Slider::offset_px))
                >
                    {tiles
                        .iter()
                        .map(|tile| {
                            view! {
                                <div class="product-card">
                                    <span class="product-name">{tile.name}</span>
                                    <span class="info-value">{tile.company}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <button class="slider-next" on:click=move |_| slider.update(Slider::next)>"›"</button>
        </section>
    }
}
