use tft_workshop_core::content::PageId;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current: PageId,
    pub on_navigate: Callback<PageId>,
}

#[function_component(NavBar)]
pub fn nav_bar(p: &Props) -> Html {
    let buttons = PageId::ALL.iter().map(|&page| {
        let onclick = {
            let cb = p.on_navigate.clone();
            Callback::from(move |_| cb.emit(page))
        };
        let active = page == p.current;
        let class = if active {
            "flex items-center gap-2 px-4 py-2 rounded-lg transition bg-white text-blue-600"
        } else {
            "flex items-center gap-2 px-4 py-2 rounded-lg transition hover:bg-white hover:bg-opacity-20"
        };
        html! {
            <button
                {class}
                {onclick}
                aria-current={if active { Some("page") } else { None }}
                data-testid={format!("nav-{}", page.slug())}
            >
                { page.label() }
            </button>
        }
    });

    html! {
        <nav role="navigation" class="bg-gradient-to-r from-blue-600 to-purple-600 text-white shadow-lg">
            <div class="container mx-auto px-4">
                <div class="flex flex-wrap items-center justify-between py-4">
                    <h1 class="text-2xl font-bold">{ "TFT Workshop" }</h1>
                    <div class="flex flex-wrap gap-2 mt-2 sm:mt-0">
                        { for buttons }
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn nav_renders_all_pages_and_marks_current() {
        let props = Props {
            current: PageId::Economy,
            on_navigate: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<NavBar>::with_props(props).render());
        for page in PageId::ALL {
            assert!(
                html.contains(&format!("nav-{}", page.slug())),
                "missing nav button for {}: {html}",
                page.slug()
            );
        }
        assert!(html.contains("aria-current=\"page\""));
        assert!(html.contains("TFT Workshop"));
    }
}
