use wasm_bindgen_test::*;
use web_sys::{EventTarget, KeyboardEvent};
use yew::prelude::*;

use tft_workshop_web::components::username_modal::UsernameModal;
use tft_workshop_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn dispatch_key(el: &web_sys::Element, key: &str, code: &str) {
    let event = KeyboardEvent::new_with_keyboard_event_init_dict(
        "keydown",
        web_sys::KeyboardEventInit::new()
            .key(key)
            .code(code)
            .bubbles(true)
            .cancelable(true),
    )
    .expect("build keydown");
    let target: EventTarget = el.clone().into();
    let _ = target.dispatch_event(&event);
}

#[function_component(OpenModalHost)]
fn open_modal_host() -> Html {
    let open = use_state(|| true);
    let on_close = {
        let open = open.clone();
        Callback::from(move |()| open.set(false))
    };
    html! {
        <UsernameModal open={*open} on_save={Callback::noop()} on_close={on_close} />
    }
}

#[wasm_bindgen_test]
fn input_receives_focus_when_opened() {
    yew::Renderer::<OpenModalHost>::with_root(ensure_app_root()).render();
    let doc = dom::document();
    let active = doc.active_element().expect("an element holds focus");
    assert_eq!(active.id(), "username-input");
}

#[wasm_bindgen_test]
fn escape_unmounts_the_prompt() {
    yew::Renderer::<OpenModalHost>::with_root(ensure_app_root()).render();
    let doc = dom::document();
    let dialog = doc
        .query_selector("[data-testid='username-modal']")
        .expect("query dialog")
        .expect("dialog open");
    dispatch_key(&dialog, "Escape", "Escape");
    assert!(
        doc.query_selector("[data-testid='username-modal']")
            .expect("query dialog")
            .is_none()
    );
}
