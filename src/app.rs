// Wires the simulation and widgets into the page: animation-frame loop,
// window listeners, and the per-widget DOM updates. Every closure handed to the
// browser lives for the rest of the page, so none of them is ever dropped.

use crate::contact::{self, ButtonLook, SubmitButton};
use crate::dom_helpers;
use crate::error::WebError;
use crate::field::ParticleField;
use crate::nav::{self, Menu};
use crate::renderer::CanvasRenderer;
use crate::reveal::{self, ObserverOptions, Reveal};
use crate::skills::{self, SkillsTrigger};
use crate::tilt::{Parallax, Tilt};
use crate::typing::{TypeStep, Typewriter};
use crate::Timer;
use rand::rngs::ThreadRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlCanvasElement, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, ScrollBehavior,
    ScrollToOptions, Window,
};

struct Background {
    canvas: HtmlCanvasElement,
    field: ParticleField<ThreadRng>,
    renderer: CanvasRenderer,
}

impl Background {
    fn fit_to(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.field.resize(width, height);
    }
}

// Missing page elements mean the widget is not on this page
fn skip_if_absent(result: Result<(), WebError>, widget: &str) -> Result<(), WebError> {
    match result {
        Err(e) if e.is_absent() => {
            log::warn!("{} not started: {}", widget, e);
            Ok(())
        }
        other => other,
    }
}

fn viewport_pixels(window: &Window) -> Result<(u32, u32), WebError> {
    let (width, height) = dom_helpers::viewport_size(window)?;
    Ok((width.max(0.0) as u32, height.max(0.0) as u32))
}

fn request_animation_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<(), WebError> {
    window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}

// `handler` is a closure already handed over to JS with `into_js_value`
fn listen(target: &EventTarget, event: &str, handler: JsValue) -> Result<(), WebError> {
    target.add_event_listener_with_callback(event, handler.unchecked_ref())?;
    Ok(())
}

/// A running particle background. The animation keeps going whether or not
/// the handle is kept.
pub struct BackgroundHandle {
    background: Rc<RefCell<Background>>,
}

impl BackgroundHandle {
    pub fn particle_count(&self) -> usize {
        self.background.borrow().field.particles().len()
    }

    /// Current surface size in pixels, as last fitted to the viewport.
    pub fn size(&self) -> (u32, u32) {
        let background = self.background.borrow();
        (background.field.width(), background.field.height())
    }
}

pub fn start_background(canvas_id: &str) -> Result<(), WebError> {
    attach_background(canvas_id).map(|_| ())
}

/// Like `start_background`, but hands back the running background.
/// `Ok(None)` when the page has no usable canvas with that id.
pub fn attach_background(canvas_id: &str) -> Result<Option<BackgroundHandle>, WebError> {
    match bind_background(canvas_id) {
        Ok(handle) => Ok(Some(handle)),
        Err(e) if e.is_absent() => {
            log::warn!("particle background not started: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn bind_background(canvas_id: &str) -> Result<BackgroundHandle, WebError> {
    let _timer = Timer::new("start_background");
    let window = dom_helpers::window()?;
    let document = dom_helpers::document(&window)?;
    let canvas = dom_helpers::canvas_by_id(&document, canvas_id)?;
    let context = dom_helpers::context_2d(&canvas)?;

    let (width, height) = viewport_pixels(&window)?;
    canvas.set_width(width);
    canvas.set_height(height);
    let background = Rc::new(RefCell::new(Background {
        canvas,
        field: ParticleField::new(width, height, rand::thread_rng()),
        renderer: CanvasRenderer::new(context),
    }));
    log::info!(
        "particle background bound to #{} ({}x{}, {} particles)",
        canvas_id,
        width,
        height,
        background.borrow().field.particles().len()
    );

    {
        let background = background.clone();
        let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
            background
                .borrow_mut()
                .field
                .set_cursor(event.client_x() as f64, event.client_y() as f64);
        }) as Box<dyn FnMut(MouseEvent)>);
        listen(&window, "mousemove", on_move.into_js_value())?;
    }

    {
        let background = background.clone();
        let resize_window = window.clone();
        let on_resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
            match viewport_pixels(&resize_window) {
                Ok((width, height)) => background.borrow_mut().fit_to(width, height),
                Err(e) => log::error!("resize failed: {}", e),
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        listen(&window, "resize", on_resize.into_js_value())?;
    }

    run_frames(window, background.clone())?;
    Ok(BackgroundHandle { background })
}

// Re-arms requestAnimationFrame after every tick; the field itself never
// schedules anything
fn run_frames(window: Window, background: Rc<RefCell<Background>>) -> Result<(), WebError> {
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();
    let frame_window = window.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            #[cfg(feature = "timing")]
            let _timer = Timer::new("ParticleField::tick");
            let mut background = background.borrow_mut();
            let Background { field, renderer, .. } = &mut *background;
            field.tick(renderer);
        }
        if let Some(callback) = next_frame.borrow().as_ref() {
            if let Err(e) = request_animation_frame(&frame_window, callback) {
                log::error!("animation loop stopped: {}", e);
            }
        }
    }) as Box<dyn FnMut()>));

    let first = frame.borrow();
    if let Some(callback) = first.as_ref() {
        request_animation_frame(&window, callback)?;
    }
    Ok(())
}

pub fn start_typing(selector: &str, phrases: Vec<String>) -> Result<(), WebError> {
    skip_if_absent(bind_typing(selector, phrases), "typewriter")
}

fn bind_typing(selector: &str, phrases: Vec<String>) -> Result<(), WebError> {
    let window = dom_helpers::window()?;
    let document = dom_helpers::document(&window)?;
    let element = dom_helpers::query_one(&document, selector)?;
    let mut typewriter = Typewriter::new(phrases);

    let step: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next_step = step.clone();
    let step_window = window.clone();

    *step.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let TypeStep { text, delay_ms } = typewriter.step();
        element.set_text_content(Some(&text));
        if let Some(callback) = next_step.borrow().as_ref() {
            let scheduled = step_window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms as i32,
            );
            if let Err(e) = scheduled {
                log::error!("typewriter stopped: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>));

    let first = step.borrow();
    if let Some(callback) = first.as_ref() {
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            0,
        )?;
    }
    Ok(())
}

pub fn start_card_tilt(selector: &str) -> Result<(), WebError> {
    skip_if_absent(bind_card_tilt(selector), "card tilt")
}

fn bind_card_tilt(selector: &str) -> Result<(), WebError> {
    let window = dom_helpers::window()?;
    let document = dom_helpers::document(&window)?;
    let cards = dom_helpers::query_all(&document, selector)?;
    log::debug!("tilt enabled on {} cards", cards.len());

    for card in cards {
        let target = card.clone();
        let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let tilt = Tilt::for_pointer(
                rect.width(),
                rect.height(),
                event.client_x() as f64 - rect.left(),
                event.client_y() as f64 - rect.top(),
            );
            apply_transform(&target, &tilt.to_string());
        }) as Box<dyn FnMut(MouseEvent)>);
        listen(&card, "mousemove", on_move.into_js_value())?;

        let target = card.clone();
        let on_leave = Closure::wrap(Box::new(move |_: MouseEvent| {
            apply_transform(&target, &Tilt::RESTING.to_string());
        }) as Box<dyn FnMut(MouseEvent)>);
        listen(&card, "mouseleave", on_leave.into_js_value())?;
    }
    Ok(())
}

pub fn start_floating(selector: &str) -> Result<(), WebError> {
    skip_if_absent(bind_floating(selector), "floating elements")
}

fn bind_floating(selector: &str) -> Result<(), WebError> {
    let window = dom_helpers::window()?;
    let document = dom_helpers::document(&window)?;
    let elements = dom_helpers::query_all(&document, selector)?;

    for element in elements {
        // At most one style write per animation frame
        let ticking = Rc::new(Cell::new(false));
        let frame_window = window.clone();
        let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
            if ticking.get() {
                return;
            }
            let (client_x, client_y) = (event.client_x() as f64, event.client_y() as f64);
            let target = element.clone();
            let done = ticking.clone();
            let viewport_window = frame_window.clone();
            let update = Closure::once_into_js(move || {
                match dom_helpers::viewport_size(&viewport_window) {
                    Ok((width, height)) => {
                        let offset = Parallax::for_pointer(client_x, client_y, width, height);
                        apply_transform(&target, &offset.to_string());
                    }
                    Err(e) => log::warn!("parallax skipped: {}", e),
                }
                done.set(false);
            });
            match frame_window.request_animation_frame(update.unchecked_ref()) {
                Ok(_) => ticking.set(true),
                Err(e) => log::warn!("parallax frame not scheduled: {:?}", e),
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        listen(&document, "mousemove", on_move.into_js_value())?;
    }
    Ok(())
}

fn apply_transform(element: &HtmlElement, transform: &str) {
    apply_style(element, "transform", transform);
}

fn apply_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = dom_helpers::set_style(element, property, value) {
        log::warn!("{} not applied: {}", property, e);
    }
}

fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::warn!("class {} not updated: {:?}", class, e);
    }
}

fn set_timeout(window: &Window, callback: JsValue, delay_ms: u32) -> Result<(), WebError> {
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms as i32,
    )?;
    Ok(())
}

// Builds an observer that hands each reported entry to `on_entry`
fn intersection_observer<F>(
    options: ObserverOptions,
    mut on_entry: F,
) -> Result<IntersectionObserver, WebError>
where
    F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
{
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                on_entry(&entry, &observer);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
    let observer =
        IntersectionObserver::new_with_options(callback.into_js_value().unchecked_ref(), &init)?;
    Ok(observer)
}

pub fn start_navigation() -> Result<(), WebError> {
    skip_if_absent(bind_navigation(), "navigation")
}

fn bind_navigation() -> Result<(), WebError> {
    let window = dom_helpers::window()?;
    let document = dom_helpers::document(&window)?;
    let navbar = dom_helpers::query_one(&document, nav::NAVBAR_SELECTOR)?;
    let hamburger = dom_helpers::query_one(&document, nav::HAMBURGER_SELECTOR)?;
    let menu = dom_helpers::query_one(&document, nav::MENU_SELECTOR)?;
    let state = Rc::new(Cell::new(Menu::default()));

    {
        let state = state.clone();
        let (menu, button) = (menu.clone(), hamburger.clone());
        let on_click = Closure::wrap(Box::new(move |_: Event| {
            let mut current = state.get();
            let open = current.toggle();
            state.set(current);
            show_menu(&menu, &button, open);
        }) as Box<dyn FnMut(Event)>);
        listen(&hamburger, "click", on_click.into_js_value())?;
    }

    let links = dom_helpers::query_any(&document, nav::LINK_SELECTOR)?;
    log::debug!("navigation bound with {} links", links.len());
    for link in links {
        let state = state.clone();
        let (menu, button) = (menu.clone(), hamburger.clone());
        let (scroll_window, scroll_document) = (window.clone(), document.clone());
        let target = link.clone();
        let on_click = Closure::wrap(Box::new(move |event: Event| {
            let mut current = state.get();
            current.close();
            state.set(current);
            show_menu(&menu, &button, false);

            let href = target.get_attribute("href").unwrap_or_default();
            if let Some(anchor) = nav::section_anchor(&href) {
                event.prevent_default();
                scroll_to_section(&scroll_window, &scroll_document, anchor);
            }
        }) as Box<dyn FnMut(Event)>);
        listen(&link, "click", on_click.into_js_value())?;
    }

    let scroll_window = window.clone();
    let on_scroll = Closure::wrap(Box::new(move |_: Event| match scroll_window.scroll_y() {
        Ok(scroll_y) => apply_style(&navbar, "background", nav::navbar_background(scroll_y)),
        Err(e) => log::warn!("scroll position unavailable: {:?}", e),
    }) as Box<dyn FnMut(Event)>);
    listen(&window, "scroll", on_scroll.into_js_value())
}

fn show_menu(menu: &HtmlElement, hamburger: &HtmlElement, open: bool) {
    set_class(menu, nav::ACTIVE_CLASS, open);
    set_class(hamburger, nav::ACTIVE_CLASS, open);
}

fn scroll_to_section(window: &Window, document: &Document, anchor: &str) {
    // Anchors that are not valid selectors throw; treat them like no match
    let section = document
        .query_selector(anchor)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    match section {
        Some(section) => {
            let options = ScrollToOptions::new();
            options.set_top(nav::scroll_target(section.offset_top() as f64));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        None => log::debug!("no section matches {}", anchor),
    }
}

pub fn start_scroll_reveal() -> Result<(), WebError> {
    skip_if_absent(bind_scroll_reveal(), "scroll reveal")
}

fn bind_scroll_reveal() -> Result<(), WebError> {
    let window = dom_helpers::window()?;
    let document = dom_helpers::document(&window)?;

    for title in dom_helpers::query_any(&document, reveal::TITLE_SELECTOR)? {
        set_class(&title, Reveal::FadeIn.class(), true);
    }
    for (index, card) in dom_helpers::query_any(&document, reveal::CARD_SELECTOR)?
        .iter()
        .enumerate()
    {
        set_class(card, Reveal::alternating(index).class(), true);
    }
    for item in dom_helpers::query_any(&document, reveal::ITEM_SELECTOR)? {
        set_class(&item, Reveal::FadeIn.class(), true);
    }

    let targets = dom_helpers::query_all(&document, &Reveal::observed_selector())?;
    let observer = intersection_observer(ObserverOptions::REVEAL, |entry, _| {
        if entry.is_intersecting() {
            set_class(&entry.target(), reveal::VISIBLE_CLASS, true);
        }
    })?;
    for target in &targets {
        observer.observe(target);
    }
    log::debug!("revealing {} elements on scroll", targets.len());
    Ok(())
}

pub fn start_skills() -> Result<(), WebError> {
    skip_if_absent(bind_skills(), "skills animation")
}

fn bind_skills() -> Result<(), WebError> {
    let window = dom_helpers::window()?;
    let document = dom_helpers::document(&window)?;
    let section = dom_helpers::query_one(&document, skills::SECTION_SELECTOR)?;
    let bars = dom_helpers::query_any(&document, skills::BAR_SELECTOR)?;

    let mut trigger = SkillsTrigger::default();
    let observer = intersection_observer(ObserverOptions::SKILLS, move |entry, _| {
        if !trigger.on_visibility(entry.is_intersecting()) {
            return;
        }
        let widths = bars
            .iter()
            .map(|bar| bar.get_attribute(skills::WIDTH_ATTRIBUTE));
        for fill in skills::fill_schedule(widths) {
            let bar = bars[fill.index].clone();
            let width = fill.width;
            let grow = Closure::once_into_js(move || apply_style(&bar, "width", &width));
            if let Err(e) = set_timeout(&window, grow, fill.delay_ms) {
                log::warn!("skill bar {} not filled: {}", fill.index, e);
            }
        }
    })?;
    observer.observe(&section);
    Ok(())
}

pub fn start_contact_form(form_id: &str) -> Result<(), WebError> {
    skip_if_absent(bind_contact_form(form_id), "contact form")
}

fn bind_contact_form(form_id: &str) -> Result<(), WebError> {
    let window = dom_helpers::window()?;
    let document = dom_helpers::document(&window)?;
    let form = dom_helpers::form_by_id(&document, form_id)?;
    let button = dom_helpers::query_within(&form, contact::SUBMIT_SELECTOR)?;
    let state = Rc::new(RefCell::new(SubmitButton::new(
        button.text_content().unwrap_or_default(),
    )));

    let target = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        target.reset();

        let (look, token) = state.borrow_mut().submit();
        show_button(&button, &look);

        let (state, button) = (state.clone(), button.clone());
        let restore = Closure::once_into_js(move || {
            if let Some(look) = state.borrow_mut().settle(token) {
                show_button(&button, &look);
            }
        });
        if let Err(e) = set_timeout(&window, restore, contact::CONFIRM_MS) {
            log::warn!("submit button will not reset: {}", e);
        }
    }) as Box<dyn FnMut(Event)>);
    listen(&form, "submit", on_submit.into_js_value())
}

fn show_button(button: &HtmlElement, look: &ButtonLook) {
    button.set_text_content(Some(&look.label));
    apply_style(button, "background", look.background);
}

pub fn start_lazy_images() -> Result<(), WebError> {
    skip_if_absent(bind_lazy_images(), "lazy images")
}

fn bind_lazy_images() -> Result<(), WebError> {
    let window = dom_helpers::window()?;
    let document = dom_helpers::document(&window)?;
    let images = dom_helpers::query_all(&document, reveal::LAZY_IMAGE_SELECTOR)?;

    let observer = intersection_observer(ObserverOptions::LAZY, |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let image = entry.target();
        if let Some(source) = image.get_attribute("data-src") {
            if let Err(e) = image.set_attribute("src", &source) {
                log::warn!("image not loaded: {:?}", e);
            }
        }
        set_class(&image, reveal::LAZY_CLASS, false);
        observer.unobserve(&image);
    })?;
    for image in &images {
        observer.observe(image);
    }
    log::debug!("lazy loading {} images", images.len());
    Ok(())
}
