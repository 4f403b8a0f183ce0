//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use diamond_field::renderer::CanvasRenderer;
use diamond_field::ParticleField;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, Document, Event, HtmlCanvasElement, HtmlElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn viewport(window: &Window) -> (u32, u32) {
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    let height = window.inner_height().unwrap().as_f64().unwrap() as u32;
    (width, height)
}

// Appends `<tag class=..>` to `parent`
fn add(parent: &web_sys::Node, tag: &str, class: &str) -> HtmlElement {
    let element = document()
        .create_element(tag)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    element.set_class_name(class);
    parent.append_child(&element).unwrap();
    element
}

fn make_canvas(id: &str, width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas.set_width(width);
    canvas.set_height(height);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn context_of(canvas: &HtmlCanvasElement) -> CanvasRenderingContext2d {
    canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<CanvasRenderingContext2d>()
        .unwrap()
}

#[wasm_bindgen_test]
fn ticks_onto_a_real_canvas() {
    let canvas = make_canvas("tick-canvas", 600, 400);
    let mut renderer = CanvasRenderer::new(context_of(&canvas));
    let mut field = ParticleField::new(600, 400, rand::thread_rng());
    assert_eq!(field.particles().len(), 16);

    field.set_cursor(300.0, 200.0);
    for _ in 0..10 {
        field.tick(&mut renderer);
    }
    assert_eq!(renderer.context.global_alpha(), 1.0);
    for p in field.particles() {
        assert!(p.opacity() >= 0.2 && p.opacity() <= 1.0);
    }
}

#[wasm_bindgen_test]
fn missing_canvas_is_a_no_op() {
    diamond_field::initialize();
    assert!(diamond_field::start_background("no-such-canvas").is_ok());
}

#[wasm_bindgen_test]
fn background_sizes_canvas_to_viewport() {
    let canvas = make_canvas("diamondCanvas", 1, 1);
    diamond_field::start_background("diamondCanvas").unwrap();

    let window = web_sys::window().unwrap();
    assert_eq!((canvas.width(), canvas.height()), viewport(&window));
}

#[wasm_bindgen_test]
fn background_follows_window_resize() {
    let canvas = make_canvas("resizeCanvas", 1, 1);
    let handle = diamond_field::attach_background("resizeCanvas")
        .unwrap()
        .unwrap();

    canvas.set_width(1);
    canvas.set_height(1);
    let window = web_sys::window().unwrap();
    window
        .dispatch_event(&Event::new("resize").unwrap())
        .unwrap();

    let (width, height) = viewport(&window);
    assert_eq!((canvas.width(), canvas.height()), (width, height));
    assert_eq!(handle.size(), (width, height));
    assert_eq!(
        handle.particle_count(),
        (width as usize * height as usize) / 15_000
    );
}

#[wasm_bindgen_test]
fn non_canvas_element_is_a_no_op() {
    let body = document().body().unwrap();
    let div = add(&body, "div", "");
    div.set_id("divNotCanvas");
    assert!(diamond_field::start_background("divNotCanvas").is_ok());
    assert!(diamond_field::attach_background("divNotCanvas")
        .unwrap()
        .is_none());
}

#[wasm_bindgen_test]
fn typing_without_target_is_a_no_op() {
    let phrases = js_sys::Array::of1(&"Hello".into());
    assert!(diamond_field::start_typing(".missing-typing-text", phrases).is_ok());
}

#[wasm_bindgen_test]
fn tilt_and_floating_without_targets_are_no_ops() {
    assert!(diamond_field::start_card_tilt(".missing-card").is_ok());
    assert!(diamond_field::start_floating(".missing-floating").is_ok());
}

#[wasm_bindgen_test]
fn hamburger_toggles_and_links_close_the_menu() {
    let body = document().body().unwrap();
    let navbar = add(&body, "nav", "navbar");
    let hamburger = add(&navbar, "div", "hamburger");
    let menu = add(&navbar, "ul", "nav-menu");
    let link = add(&menu, "a", "nav-link");
    link.set_attribute("href", "#nav-test-section").unwrap();
    add(&body, "section", "").set_id("nav-test-section");

    diamond_field::start_navigation().unwrap();

    hamburger.click();
    assert!(menu.class_list().contains("active"));
    assert!(hamburger.class_list().contains("active"));

    link.click();
    assert!(!menu.class_list().contains("active"));
    assert!(!hamburger.class_list().contains("active"));

    hamburger.click();
    hamburger.click();
    assert!(!menu.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn cards_get_alternating_entrance_classes() {
    let body = document().body().unwrap();
    let first = add(&body, "div", "project-card");
    let second = add(&body, "div", "project-card");
    let stat = add(&body, "div", "stat-item");

    diamond_field::start_scroll_reveal().unwrap();

    assert!(first.class_list().contains("slide-in-left"));
    assert!(second.class_list().contains("slide-in-right"));
    assert!(stat.class_list().contains("fade-in"));
}

#[wasm_bindgen_test]
fn contact_submit_flashes_confirmation() {
    let body = document().body().unwrap();
    let form = add(&body, "form", "");
    form.set_id("contactFormTest");
    let button = add(&form, "button", "");
    button.set_attribute("type", "submit").unwrap();
    button.set_text_content(Some("Send Message"));

    diamond_field::start_contact_form("contactFormTest").unwrap();
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();

    assert_eq!(button.text_content().unwrap(), "Message Sent!");
}

#[wasm_bindgen_test]
fn widgets_without_markup_are_no_ops() {
    assert!(diamond_field::start_skills().is_ok());
    assert!(diamond_field::start_lazy_images().is_ok());
    assert!(diamond_field::start_contact_form("no-such-form").is_ok());
}
