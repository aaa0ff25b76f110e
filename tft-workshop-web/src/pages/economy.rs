use crate::components::comments::CommentSection;
use crate::components::quiz::Quiz;
use yew::prelude::*;

#[function_component(EconomyPage)]
pub fn economy_page() -> Html {
    html! {
        <div class="space-y-8" data-testid="page-economy">
            <div class="bg-white rounded-lg shadow-md p-8">
                <h2 class="text-3xl font-bold mb-4">{ "Economy Management" }</h2>
                <p class="text-gray-700 mb-4">
                    { "Gold is the lifeblood of TFT. Managing your economy effectively separates good \
                       players from great ones. Understanding interest, win/loss streaking, and when \
                       to spend is key to success." }
                </p>

                <h3 class="text-xl font-semibold mb-2">{ "Interest Mechanics" }</h3>
                <p class="text-gray-700 mb-4">
                    { "You earn 1 gold in interest for every 10 gold you have, up to a maximum of 5 \
                       interest at 50 gold. Staying above interest thresholds (10, 20, 30, 40, 50 gold) \
                       compounds your wealth over time." }
                </p>

                <h3 class="text-xl font-semibold mb-2">{ "Win and Loss Streaking" }</h3>
                <p class="text-gray-700 mb-4">
                    { "Consecutive wins or losses grant bonus gold. A win streak can accelerate your \
                       economy, while a controlled loss streak in the early game can set you up for a \
                       strong mid-game power spike." }
                </p>

                <h3 class="text-xl font-semibold mb-2">{ "When to Roll" }</h3>
                <p class="text-gray-700">
                    { "Don't randomly spend gold on rerolls. Roll down when you need to find key units \
                       to stabilize your board or when you're strong enough to push for a win streak. \
                       Preserving economy is often better than forcing upgrades." }
                </p>
            </div>

            <Quiz
                quiz_id="economy_1"
                question="What is the maximum interest you can earn per round?"
                options={vec![
                    AttrValue::from("5 gold"),
                    AttrValue::from("3 gold"),
                    AttrValue::from("10 gold"),
                    AttrValue::from("7 gold"),
                ]}
            />

            <Quiz
                quiz_id="economy_2"
                question="When should you prioritize rolling for units?"
                options={vec![
                    AttrValue::from("When you need to stabilize your board"),
                    AttrValue::from("Every single round"),
                    AttrValue::from("Only at level 9"),
                    AttrValue::from("Never, always save gold"),
                ]}
            />

            <CommentSection page_id="economy" />
        </div>
    }
}
