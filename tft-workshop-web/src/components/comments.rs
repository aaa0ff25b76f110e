//! Per-page comment board. Posting needs an identity and a non-blank body;
//! with no identity the prompt opens and the draft is kept, not replayed.

use crate::components::username_modal::UsernameModal;
use crate::storage::use_store;
use tft_workshop_core::discussion::{self, Thread};
use tft_workshop_core::identity;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub page_id: AttrValue,
}

/// Outcome of a submit attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum PostOutcome {
    /// No identity is set; the prompt must open. The draft is kept.
    PromptForIdentity,
    /// Blank body; nothing changes.
    Rejected,
    /// The post was prepended and persisted; re-render with this thread.
    Posted(Thread),
}

pub fn submit(
    store: &tft_workshop_core::store::StoreHandle,
    key: &str,
    thread: &Thread,
    username: Option<&str>,
    body: &str,
    id: u64,
    timestamp: &str,
) -> PostOutcome {
    let Some(user) = username else {
        return PostOutcome::PromptForIdentity;
    };
    let mut next = thread.clone();
    if next.post(id, user, body, timestamp) {
        store.write(key, &next);
        PostOutcome::Posted(next)
    } else {
        PostOutcome::Rejected
    }
}

#[function_component(CommentSection)]
pub fn comment_section(p: &Props) -> Html {
    let store = use_store();
    let key = discussion::storage_key(p.page_id.as_str());

    let username = {
        let store = store.clone();
        use_state(move || identity::load(&store))
    };
    let thread = {
        let store = store.clone();
        let key = key.clone();
        use_state(move || store.read(&key, Thread::new()))
    };
    let draft = use_state(String::new);
    let show_modal = use_state(|| false);

    let post = {
        let username = username.clone();
        let thread = thread.clone();
        let draft = draft.clone();
        let show_modal = show_modal.clone();
        let store = store.clone();
        let key = key.clone();
        Callback::from(move |()| {
            match submit(
                &store,
                &key,
                &thread,
                username.as_deref(),
                &draft,
                crate::dom::post_id(),
                &crate::dom::post_timestamp(),
            ) {
                PostOutcome::PromptForIdentity => show_modal.set(true),
                PostOutcome::Rejected => {}
                PostOutcome::Posted(next) => {
                    thread.set(next);
                    draft.set(String::new());
                }
            }
        })
    };

    let on_identity_saved = {
        let username = username.clone();
        Callback::from(move |name: String| username.set(Some(name)))
    };
    let on_modal_close = {
        let show_modal = show_modal.clone();
        Callback::from(move |()| show_modal.set(false))
    };

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
            {
                draft.set(area.value());
            }
        })
    };

    let on_keydown = {
        let post = post.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && e.ctrl_key() {
                e.prevent_default();
                post.emit(());
            }
        })
    };

    let on_post_click = {
        let post = post.clone();
        Callback::from(move |_| post.emit(()))
    };

    let body = if thread.is_empty() {
        html! {
            <p class="text-gray-500 text-center py-8" data-testid="comments-empty">
                { "No comments yet. Be the first to comment!" }
            </p>
        }
    } else {
        thread
            .posts()
            .iter()
            .map(|post| {
                html! {
                    <div class="border-b border-gray-200 pb-4 last:border-0" key={post.id.to_string()}>
                        <div class="flex items-center gap-2 mb-2">
                            <span class="font-semibold">{ post.username.clone() }</span>
                            <span class="text-sm text-gray-500">{ post.timestamp.clone() }</span>
                        </div>
                        <p class="text-gray-700">{ post.text.clone() }</p>
                    </div>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="bg-white rounded-lg shadow-md p-6" data-testid={format!("comments-{}", p.page_id)}>
            <UsernameModal
                open={*show_modal}
                on_save={on_identity_saved}
                on_close={on_modal_close}
            />
            <h3 class="text-xl font-bold mb-4">{ "Comments" }</h3>
            <div class="mb-6">
                <textarea
                    value={(*draft).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    placeholder="Share your thoughts..."
                    class="w-full px-4 py-3 border border-gray-300 rounded-lg mb-2 focus:outline-none focus:ring-2 focus:ring-blue-500 resize-none"
                    rows="3"
                />
                <button
                    class="bg-blue-600 text-white px-6 py-2 rounded-lg hover:bg-blue-700 transition"
                    onclick={on_post_click}
                    data-testid="comment-post"
                >
                    { "Post Comment" }
                </button>
            </div>
            <div class="space-y-4">
                { body }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use tft_workshop_core::store::{MemoryStore, StoreHandle};
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        store: StoreHandle,
        page_id: AttrValue,
    }

    #[function_component(CommentsHarness)]
    fn comments_harness(p: &HarnessProps) -> Html {
        html! {
            <ContextProvider<StoreHandle> context={p.store.clone()}>
                <CommentSection page_id={p.page_id.clone()} />
            </ContextProvider<StoreHandle>>
        }
    }

    fn render(store: StoreHandle) -> String {
        block_on(
            LocalServerRenderer::<CommentsHarness>::with_props(HarnessProps {
                store,
                page_id: AttrValue::from("basics"),
            })
            .render(),
        )
    }

    #[test]
    fn empty_thread_shows_invitation() {
        let html = render(StoreHandle::new(MemoryStore::new()));
        assert!(html.contains("No comments yet. Be the first to comment!"));
    }

    #[test]
    fn seeded_thread_renders_newest_first() {
        let mem = MemoryStore::new();
        mem.seed(
            "comments_basics",
            r#"[{"id":2,"username":"Bob","text":"later","timestamp":"t2"},
                {"id":1,"username":"Alice","text":"earlier","timestamp":"t1"}]"#,
        );
        let html = render(StoreHandle::new(mem));
        let bob = html.find("later").expect("newest post rendered");
        let alice = html.find("earlier").expect("oldest post rendered");
        assert!(bob < alice, "newest post should render first");
        assert!(!html.contains("comments-empty"));
    }

    #[test]
    fn corrupt_thread_falls_back_to_empty_state() {
        let mem = MemoryStore::new();
        mem.seed("comments_basics", "{definitely-not-a-list");
        let html = render(StoreHandle::new(mem));
        assert!(html.contains("comments-empty"));
    }
}
