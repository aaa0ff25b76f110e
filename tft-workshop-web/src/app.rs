use crate::components::nav::NavBar;
use crate::pages::{
    basics::BasicsPage, comps::TeamCompsPage, economy::EconomyPage, home::HomePage,
    positioning::PositioningPage,
};
use crate::storage::default_store;
use tft_workshop_core::content::PageId;
use tft_workshop_core::store::StoreHandle;
use yew::prelude::*;

/// Navigation shell: holds the currently selected page as transient state
/// and provides the persistence handle to every widget underneath.
#[function_component(App)]
pub fn app() -> Html {
    let store = use_memo((), |_| default_store());
    let page = use_state(|| PageId::Home);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: PageId| page.set(next))
    };

    html! {
        <ContextProvider<StoreHandle> context={(*store).clone()}>
            <div class="min-h-screen bg-gray-100" data-testid="app-shell">
                <NavBar current={*page} on_navigate={on_navigate} />
                <main id="main" class="container mx-auto px-4 py-8">
                    { render_page(*page) }
                </main>
            </div>
        </ContextProvider<StoreHandle>>
    }
}

fn render_page(page: PageId) -> Html {
    match page {
        PageId::Home => html! { <HomePage /> },
        PageId::Basics => html! { <BasicsPage /> },
        PageId::Economy => html! { <EconomyPage /> },
        PageId::Positioning => html! { <PositioningPage /> },
        PageId::TeamComps => html! { <TeamCompsPage /> },
    }
}
