use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use crate::browser::ElementViewport;
use crate::error::BrowserError;
use crate::motion::MotionPreference;

pub const CARD_STAGGER_MS: u32 = 80;
pub const HERO_DELAY_MS: u32 = 100;
pub const SECTION_DELAY_MS: u32 = 200;

pub fn card_delay_ms(index: usize) -> u32 {
    (index as u32).saturating_mul(CARD_STAGGER_MS)
}

/// Reports the first time an element scrolls into view.
pub trait ViewportWatch {
    /// Stops watching when dropped.
    type Watcher;

    fn on_first_entry(&self, on_enter: Box<dyn FnOnce()>) -> Result<Self::Watcher, BrowserError>;
}

/// Runs `on_visible` once the watched element first enters the viewport.
/// Under reduced motion nothing is watched and `Ok(None)` comes back.
pub fn arm_reveal<W: ViewportWatch>(
    watch: &W,
    motion: MotionPreference,
    on_visible: Box<dyn FnOnce()>,
) -> Result<Option<W::Watcher>, BrowserError> {
    if motion.is_reduced() {
        return Ok(None);
    }
    watch.on_first_entry(on_visible).map(Some)
}

/// Flips to `true` `delay_ms` after `node` first becomes visible. The
/// observer and any pending timer are released if the component unmounts
/// first.
#[hook]
pub fn use_reveal(node: NodeRef, delay_ms: u32, motion: MotionPreference) -> bool {
    let revealed = use_state(|| motion.is_reduced());
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, delay_ms, motion)| {
                let delay_ms = *delay_ms;
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
                let watcher = match node.cast::<Element>() {
                    Some(element) => {
                        let show = revealed.clone();
                        let timer = pending.clone();
                        arm_reveal(
                            &ElementViewport::new(element),
                            *motion,
                            Box::new(move || {
                                *timer.borrow_mut() =
                                    Some(Timeout::new(delay_ms, move || show.set(true)));
                            }),
                        )
                        .unwrap_or_else(|err| {
                            log::warn!("Revealing without viewport tracking: {}", err);
                            revealed.set(true);
                            None
                        })
                    }
                    None => {
                        revealed.set(true);
                        None
                    }
                };
                move || {
                    drop(watcher);
                    pending.borrow_mut().take();
                }
            },
            (node, delay_ms, motion),
        );
    }
    *revealed
}

pub fn reveal_class(revealed: bool) -> Classes {
    classes!("reveal", revealed.then_some("revealed"))
}
