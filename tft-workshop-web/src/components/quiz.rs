//! Embedded multiple-choice poll. Option 0 is the canonical answer; the
//! selected option is styled correct/incorrect relative to it. One vote per
//! identity, re-voting overwrites, tallies are recomputed each render.

use crate::components::username_modal::UsernameModal;
use crate::storage::use_store;
use tft_workshop_core::identity;
use tft_workshop_core::poll::{self, PollRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub quiz_id: AttrValue,
    pub question: AttrValue,
    pub options: Vec<AttrValue>,
}

/// Outcome of clicking an option.
#[derive(Debug, PartialEq, Eq)]
pub enum PickOutcome {
    /// No identity is set; the prompt must open and nothing is written.
    PromptForIdentity,
    /// The vote was recorded and persisted; re-render with this record.
    Recorded(PollRecord),
}

pub fn pick(
    store: &tft_workshop_core::store::StoreHandle,
    key: &str,
    record: &PollRecord,
    username: Option<&str>,
    index: usize,
) -> PickOutcome {
    let Some(user) = username else {
        return PickOutcome::PromptForIdentity;
    };
    let mut next = record.clone();
    next.record(user, index);
    store.write(key, &next);
    PickOutcome::Recorded(next)
}

#[function_component(Quiz)]
pub fn quiz(p: &Props) -> Html {
    let store = use_store();
    let key = poll::storage_key(p.quiz_id.as_str());

    let username = {
        let store = store.clone();
        use_state(move || identity::load(&store))
    };
    let record = {
        let store = store.clone();
        let key = key.clone();
        use_state(move || store.read(&key, PollRecord::new()))
    };
    let show_modal = use_state(|| false);

    let selected = username.as_ref().and_then(|user| record.selection(user));
    let total = record.total_respondents();

    let on_pick = {
        let username = username.clone();
        let record = record.clone();
        let show_modal = show_modal.clone();
        let store = store.clone();
        let key = key.clone();
        Callback::from(move |index: usize| {
            match pick(&store, &key, &record, username.as_deref(), index) {
                PickOutcome::PromptForIdentity => show_modal.set(true),
                PickOutcome::Recorded(next) => record.set(next),
            }
        })
    };

    // After the prompt captures a name, re-read the record so any earlier
    // vote by that identity shows up. The pending click is not replayed.
    let on_identity_saved = {
        let username = username.clone();
        let record = record.clone();
        let store = store.clone();
        Callback::from(move |name: String| {
            record.set(store.read(&key, PollRecord::new()));
            username.set(Some(name));
        })
    };
    let on_modal_close = {
        let show_modal = show_modal.clone();
        Callback::from(move |()| show_modal.set(false))
    };

    let options = p.options.iter().enumerate().map(|(index, option)| {
        let percentage = record.percentage(index);
        let is_selected = selected == Some(index);
        let is_correct = index == 0;
        let voters = record.voters_for(index);

        let onclick = {
            let on_pick = on_pick.clone();
            Callback::from(move |_| on_pick.emit(index))
        };

        let border = if is_selected {
            if is_correct {
                "border-green-500 bg-green-50"
            } else {
                "border-red-500 bg-red-50"
            }
        } else {
            "border-gray-200 hover:border-blue-400 hover:bg-blue-50"
        };
        let fill = if is_correct { "bg-green-100" } else { "bg-gray-100" };
        let marker = if is_selected {
            if is_correct {
                html! { <span class="text-green-600" aria-label="correct">{ "\u{2713}" }</span> }
            } else {
                html! { <span class="text-red-600" aria-label="incorrect">{ "\u{2717}" }</span> }
            }
        } else {
            Html::default()
        };

        html! {
            <div>
                <button
                    {onclick}
                    class={format!("w-full text-left px-4 py-3 rounded-lg border-2 transition relative overflow-hidden {border}")}
                    data-option={index.to_string()}
                >
                    <div
                        class={format!("absolute left-0 top-0 h-full transition-all {fill}")}
                        style={format!("width: {percentage}%; opacity: 0.5;")}
                    />
                    <div class="relative flex items-center justify-between">
                        <span class="flex items-center gap-2">
                            { marker }
                            { option.clone() }
                        </span>
                        <span class="font-semibold">{ format!("{percentage}%") }</span>
                    </div>
                </button>
                if !voters.is_empty() {
                    <div class="text-xs text-gray-600 mt-1 ml-4" data-testid={format!("voters-{index}")}>
                        { voters.join(", ") }
                    </div>
                }
            </div>
        }
    });

    html! {
        <div class="bg-white rounded-lg shadow-md p-6 mb-6" data-testid={format!("quiz-{}", p.quiz_id)}>
            <UsernameModal
                open={*show_modal}
                on_save={on_identity_saved}
                on_close={on_modal_close}
            />
            <h3 class="text-lg font-semibold mb-4">{ p.question.clone() }</h3>
            <div class="space-y-3">
                { for options }
            </div>
            if total > 0 {
                <p class="text-sm text-gray-600 mt-4">
                    { format!("{total} vote{} total", if total == 1 { "" } else { "s" }) }
                </p>
            }
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
        quiz: Props,
    }

    #[function_component(QuizHarness)]
    fn quiz_harness(p: &HarnessProps) -> Html {
        html! {
            <ContextProvider<StoreHandle> context={p.store.clone()}>
                <Quiz
                    quiz_id={p.quiz.quiz_id.clone()}
                    question={p.quiz.question.clone()}
                    options={p.quiz.options.clone()}
                />
            </ContextProvider<StoreHandle>>
        }
    }

    fn quiz_props() -> Props {
        Props {
            quiz_id: AttrValue::from("basics_1"),
            question: AttrValue::from("What happens when you activate a trait synergy?"),
            options: vec![
                AttrValue::from("A"),
                AttrValue::from("B"),
                AttrValue::from("C"),
                AttrValue::from("D"),
            ],
        }
    }

    fn render(store: StoreHandle) -> String {
        block_on(
            LocalServerRenderer::<QuizHarness>::with_props(HarnessProps {
                store,
                quiz: quiz_props(),
            })
            .render(),
        )
    }

    #[test]
    fn empty_quiz_shows_zero_percent_and_no_total() {
        let html = render(StoreHandle::new(MemoryStore::new()));
        assert!(html.contains("0%"));
        assert!(!html.contains("total"));
    }

    #[test]
    fn seeded_votes_yield_percentages_and_voter_names() {
        let mem = MemoryStore::new();
        mem.seed("quiz_basics_1", r#"{"Alice":1,"Bob":0}"#);
        let html = render(StoreHandle::new(mem));
        assert!(html.contains("50%"), "expected split tally: {html}");
        assert!(html.contains("Alice"));
        assert!(html.contains("Bob"));
        assert!(html.contains("2 votes total"));
    }

    #[test]
    fn stored_identity_reconstructs_selection_marker() {
        let mem = MemoryStore::new();
        mem.seed("username", r#""Alice""#);
        mem.seed("quiz_basics_1", r#"{"Alice":1}"#);
        let html = render(StoreHandle::new(mem));
        // Alice picked option 1, which is not option 0, so the incorrect
        // marker renders.
        assert!(html.contains('\u{2717}'), "expected incorrect marker: {html}");
        assert!(html.contains("border-red-500"));
    }

    #[test]
    fn corrupt_record_renders_empty_state() {
        let mem = MemoryStore::new();
        mem.seed("quiz_basics_1", "not-json");
        let html = render(StoreHandle::new(mem));
        assert!(html.contains("0%"));
        assert!(!html.contains("votes total"));
    }
}
