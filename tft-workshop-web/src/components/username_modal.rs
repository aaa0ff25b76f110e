//! Identity prompt. Hidden until a widget needs a name; a non-empty
//! trimmed submission persists the identity and hands it back through
//! `on_save` before closing. Blank submissions are no-ops.

use crate::storage::use_store;
use tft_workshop_core::identity;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    /// Continuation invoked with the normalized name after it is persisted.
    pub on_save: Callback<String>,
    pub on_close: Callback<()>,
}

#[function_component(UsernameModal)]
pub fn username_modal(p: &Props) -> Html {
    let store = use_store();
    let name = use_state(String::new);
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        use_effect_with(p.open, move |open| {
            #[cfg(target_arch = "wasm32")]
            if *open && let Some(el) = input_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (open, &input_ref);
            }
            || {}
        });
    }

    if !p.open {
        return Html::default();
    }

    let submit = {
        let name = name.clone();
        let store = store.clone();
        let on_save = p.on_save.clone();
        let on_close = p.on_close.clone();
        Callback::from(move |()| {
            let Some(normalized) = identity::normalize(&name) else {
                return;
            };
            identity::save(&store, &normalized);
            on_save.emit(normalized);
            name.set(String::new());
            on_close.emit(());
        })
    };

    let on_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                name.set(input.value());
            }
        })
    };

    let on_keydown = {
        let submit = submit.clone();
        let on_close = p.on_close.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Enter" => {
                e.prevent_default();
                submit.emit(());
            }
            "Escape" => {
                e.prevent_default();
                on_close.emit(());
            }
            _ => {}
        })
    };

    let on_submit_click = {
        let submit = submit.clone();
        Callback::from(move |_| submit.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50 p-4" role="presentation">
            <div
                class="bg-white rounded-lg p-6 max-w-sm w-full"
                role="dialog"
                aria-modal="true"
                aria-labelledby="username-modal-title"
                onkeydown={on_keydown}
                data-testid="username-modal"
            >
                <h3 id="username-modal-title" class="text-xl font-bold mb-4">{ "Choose Your Username" }</h3>
                <input
                    id="username-input"
                    type="text"
                    value={(*name).clone()}
                    oninput={on_input}
                    placeholder="Enter username..."
                    class="w-full px-4 py-2 border border-gray-300 rounded-lg mb-4 focus:outline-none focus:ring-2 focus:ring-blue-500"
                    ref={input_ref}
                />
                <button
                    class="w-full bg-blue-600 text-white py-2 rounded-lg hover:bg-blue-700 transition"
                    onclick={on_submit_click}
                    data-testid="username-save"
                >
                    { "Save Username" }
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn modal_is_empty_when_hidden() {
        let props = Props {
            open: false,
            on_save: Callback::noop(),
            on_close: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<UsernameModal>::with_props(props).render());
        assert!(!html.contains("username-modal"));
    }

    #[test]
    fn modal_renders_prompt_when_open() {
        let props = Props {
            open: true,
            on_save: Callback::noop(),
            on_close: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<UsernameModal>::with_props(props).render());
        assert!(html.contains("Choose Your Username"));
        assert!(html.contains("username-input"));
        assert!(html.contains("Save Username"));
    }
}
