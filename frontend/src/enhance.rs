//! Wires the page behaviour onto the rendered markup: the notify button's
//! click feedback and the feature card fade-in, on real browser timers.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::button::NotifyButton;
use crate::cards::CardState;
use crate::config::{self, Timings};
use crate::page::Page;
use crate::schedule::{Scheduled, Task};

type ClickClosure = Closure<dyn FnMut(MouseEvent)>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnhanceError {
    #[error("window is not available")]
    WindowUnavailable,

    #[error("document is not available")]
    DocumentUnavailable,

    #[error("no element matches {0}")]
    MissingElement(String),

    #[error("{0} is not an HTML element")]
    NotHtmlElement(String),

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl EnhanceError {
    fn dom(err: wasm_bindgen::JsValue) -> Self {
        EnhanceError::Dom(format!("{:?}", err))
    }
}

/// Where the script finds its elements in the markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selectors {
    pub button_id: &'static str,
    pub card_selector: &'static str,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            button_id: config::NOTIFY_BUTTON_ID,
            card_selector: config::FEATURE_CARD_SELECTOR,
        }
    }
}

/// Page state plus the elements it is rendered onto.
struct Shared {
    page: RefCell<Page>,
    button: Option<HtmlElement>,
    cards: Vec<HtmlElement>,
}

impl Shared {
    fn fire(&self, task: Task) {
        debug!("Timer fired: {:?}", task);
        self.page.borrow_mut().run(task);
        self.render(task);
    }

    fn render(&self, task: Task) {
        let page = self.page.borrow();
        match task {
            Task::RestoreButton => {
                if let Some(button) = &self.button {
                    apply_button(button, page.button());
                }
            }
            Task::RevealCard(index) => {
                if let (Some(card), Some(state)) = (self.cards.get(index), page.cards().state(index)) {
                    apply_card(card, state);
                }
            }
        }
    }
}

fn start_timer(shared: &Rc<Shared>, scheduled: Scheduled) -> Timeout {
    let shared = shared.clone();
    let Scheduled { delay_ms, task } = scheduled;
    Timeout::new(delay_ms, move || shared.fire(task))
}

/// Live wiring for one page. Dropping it detaches the click listener and
/// cancels every timer that has not fired yet.
pub struct Enhancement {
    shared: Rc<Shared>,
    card_timers: Vec<Timeout>,
    restore_timer: Rc<RefCell<Option<Timeout>>>,
    on_click: Option<ClickClosure>,
}

impl Enhancement {
    pub fn card_count(&self) -> usize {
        self.shared.cards.len()
    }

    /// False when the notify button was missing and only the cards run.
    pub fn button_wired(&self) -> bool {
        self.on_click.is_some()
    }
}

impl Drop for Enhancement {
    fn drop(&mut self) {
        if let (Some(button), Some(on_click)) = (&self.shared.button, &self.on_click) {
            if let Err(err) =
                button.remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            {
                warn!("Failed to detach notify button listener: {:?}", err);
            }
        }
        self.restore_timer.borrow_mut().take();
        let pending = self.card_timers.drain(..).count();
        debug!("Enhancement torn down, dropped {} card timers", pending);
    }
}

/// Runs [`enhance`] against the current window's document.
pub fn enhance_document(timings: Timings) -> Result<Enhancement, EnhanceError> {
    let window = web_sys::window().ok_or(EnhanceError::WindowUnavailable)?;
    let document = window.document().ok_or(EnhanceError::DocumentUnavailable)?;
    enhance(&document, Selectors::default(), timings)
}

/// Hides the feature cards and starts their entrance timers, then hooks up
/// the notify button. A missing button is logged and leaves the cards running.
pub fn enhance(
    document: &Document,
    selectors: Selectors,
    timings: Timings,
) -> Result<Enhancement, EnhanceError> {
    let cards = query_cards(document, selectors.card_selector)?;
    let button = match find_button(document, selectors.button_id) {
        Ok(button) => Some(button),
        Err(err) => {
            error!("Notify button unavailable, click feedback disabled: {}", err);
            None
        }
    };

    let (page, reveals) = Page::initialize(cards.len(), timings);
    for card in &cards {
        apply_card(card, CardState::Hidden);
    }

    let shared = Rc::new(Shared {
        page: RefCell::new(page),
        button,
        cards,
    });
    let card_timers = reveals
        .into_iter()
        .map(|scheduled| start_timer(&shared, scheduled))
        .collect();

    let restore_timer = Rc::new(RefCell::new(None));
    let on_click = match &shared.button {
        Some(button) => {
            let on_click = click_handler(&shared, &restore_timer);
            button
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                .map_err(EnhanceError::dom)?;
            Some(on_click)
        }
        None => None,
    };

    info!(
        "Landing page enhanced: {} feature cards, notify button {}",
        shared.cards.len(),
        if on_click.is_some() { "wired" } else { "missing" }
    );

    Ok(Enhancement {
        shared,
        card_timers,
        restore_timer,
        on_click,
    })
}

fn click_handler(shared: &Rc<Shared>, restore_timer: &Rc<RefCell<Option<Timeout>>>) -> ClickClosure {
    let shared = shared.clone();
    let restore_timer = restore_timer.clone();

    Closure::wrap(Box::new(move |event: MouseEvent| {
        event.prevent_default();

        let button = match &shared.button {
            Some(button) => button,
            None => return,
        };

        let current_label = button.inner_text();
        let scheduled = shared.page.borrow_mut().click(&current_label);
        if let Some(scheduled) = scheduled {
            apply_button(button, shared.page.borrow().button());
            info!("Notify button confirmed");
            restore_timer.borrow_mut().replace(start_timer(&shared, scheduled));
        }
    }) as Box<dyn FnMut(MouseEvent)>)
}

fn find_button(document: &Document, id: &str) -> Result<HtmlElement, EnhanceError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| EnhanceError::MissingElement(format!("#{}", id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| EnhanceError::NotHtmlElement(format!("#{}", id)))
}

fn query_cards(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, EnhanceError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(EnhanceError::dom)?;

    let mut cards = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let node = match nodes.item(index) {
            Some(node) => node,
            None => continue,
        };
        match node.dyn_into::<HtmlElement>() {
            Ok(card) => cards.push(card),
            Err(_) => warn!("Skipping non-HTML match {} for {}", index, selector),
        }
    }
    Ok(cards)
}

/// Sets an inline style property; an empty value drops the override.
fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let style = element.style();
    let result = if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    };
    if let Err(err) = result {
        warn!("Failed to set {} to {:?}: {:?}", property, value, err);
    }
}

fn apply_button(element: &HtmlElement, button: &NotifyButton) {
    if let Some(label) = button.label() {
        element.set_inner_text(label);
    }
    set_style(element, "background", button.background().unwrap_or(""));
    set_style(element, "box-shadow", button.shadow().unwrap_or(""));
    set_style(element, "pointer-events", button.pointer_events());
}

fn apply_card(element: &HtmlElement, state: CardState) {
    let style = state.style();
    set_style(element, "transition", style.transition);
    set_style(element, "opacity", style.opacity);
    set_style(element, "transform", &style.transform);
}
