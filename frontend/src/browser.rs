//! Thin wrappers over `web_sys`. Nothing else in the crate talks to the DOM
//! directly, which keeps the rest of the modules testable on the host.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, PointerEvent, Storage,
    Window,
};
use yew::NodeRef;

use crate::error::BrowserError;
use crate::parallax::{ContainerRect, PointerSample, PointerSurface};
use crate::reveal::ViewportWatch;
use crate::theme::{ThemeStorage, STORAGE_KEY};

const POINTER_MOVE: &str = "pointermove";

pub fn window() -> Result<Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::NoWindow)
}

pub fn document() -> Result<Document, BrowserError> {
    window()?.document().ok_or(BrowserError::NoDocument)
}

pub fn media_matches(query: &str) -> Result<bool, BrowserError> {
    Ok(window()?
        .match_media(query)?
        .map(|list| list.matches())
        .unwrap_or(false))
}

/// Opens `url` in a new tab that cannot reach back into this page.
pub fn open_in_new_context(url: &str) -> Result<(), BrowserError> {
    window()?.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")?;
    Ok(())
}

pub fn scroll_to_top() -> Result<(), BrowserError> {
    window()?.scroll_to_with_x_and_y(0.0, 0.0);
    Ok(())
}

pub fn set_root_class(class: &str, enabled: bool) -> Result<(), BrowserError> {
    let root = document()?
        .document_element()
        .ok_or(BrowserError::MissingElement("html"))?;
    root.class_list().toggle_with_force(class, enabled)?;
    Ok(())
}

pub fn text_of_element(id: &str) -> Result<Option<String>, BrowserError> {
    Ok(document()?
        .get_element_by_id(id)
        .and_then(|element| element.text_content()))
}

/// Replaces the inline style of a mounted node. Unmounted nodes are skipped.
pub fn set_style(node: &NodeRef, css: &str) {
    if let Some(element) = node.cast::<Element>() {
        if let Err(err) = element.set_attribute("style", css) {
            log::warn!("Failed to set style: {}", BrowserError::from(err));
        }
    }
}

pub struct LocalThemeStorage;

impl LocalThemeStorage {
    fn storage() -> Result<Storage, BrowserError> {
        window()?
            .local_storage()?
            .ok_or(BrowserError::StorageUnavailable)
    }
}

impl ThemeStorage for LocalThemeStorage {
    fn load(&self) -> Option<String> {
        Self::storage().ok()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn save(&self, raw: &str) -> Result<(), BrowserError> {
        Self::storage()?.set_item(STORAGE_KEY, raw)?;
        Ok(())
    }
}

/// A mounted element whose pointer moves drive the parallax.
pub struct ElementSurface {
    element: Element,
}

impl ElementSurface {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

/// Registered `pointermove` listener. Removed from the element on drop.
pub struct PointerListener {
    target: Element,
    callback: Closure<dyn FnMut(PointerEvent)>,
}

impl Drop for PointerListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(POINTER_MOVE, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to detach pointer listener: {}", BrowserError::from(err));
        }
    }
}

impl PointerSurface for ElementSurface {
    type Listener = PointerListener;

    fn listen(
        &self,
        mut on_move: Box<dyn FnMut(PointerSample)>,
    ) -> Result<PointerListener, BrowserError> {
        let element = self.element.clone();
        let callback = Closure::wrap(Box::new(move |event: PointerEvent| {
            let rect = element.get_bounding_client_rect();
            on_move(PointerSample {
                client_x: event.client_x() as f64,
                client_y: event.client_y() as f64,
                rect: ContainerRect {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                },
            });
        }) as Box<dyn FnMut(PointerEvent)>);

        self.element
            .add_event_listener_with_callback(POINTER_MOVE, callback.as_ref().unchecked_ref())?;

        Ok(PointerListener {
            target: self.element.clone(),
            callback,
        })
    }
}

/// A mounted element watched for its first scroll into view.
pub struct ElementViewport {
    element: Element,
}

impl ElementViewport {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

/// Live `IntersectionObserver`. Disconnected on drop.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl ViewportWatch for ElementViewport {
    type Watcher = ViewportObserver;

    fn on_first_entry(
        &self,
        on_enter: Box<dyn FnOnce()>,
    ) -> Result<ViewportObserver, BrowserError> {
        let mut on_enter = Some(on_enter);
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let entered = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                if entered {
                    observer.disconnect();
                    if let Some(on_enter) = on_enter.take() {
                        on_enter();
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(&self.element);

        Ok(ViewportObserver {
            observer,
            _callback: callback,
        })
    }
}
