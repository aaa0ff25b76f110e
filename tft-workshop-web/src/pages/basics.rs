use crate::components::comments::CommentSection;
use crate::components::quiz::Quiz;
use yew::prelude::*;

#[function_component(BasicsPage)]
pub fn basics_page() -> Html {
    html! {
        <div class="space-y-8" data-testid="page-basics">
            <div class="bg-white rounded-lg shadow-md p-8">
                <h2 class="text-3xl font-bold mb-4">{ "TFT Basics" }</h2>
                <p class="text-gray-700 mb-4">
                    { "Teamfight Tactics is an auto-battler game where you build a team of champions, \
                       equip them with items, and watch them fight. Understanding the core mechanics \
                       is essential for success." }
                </p>

                <h3 class="text-xl font-semibold mb-2">{ "Traits and Synergies" }</h3>
                <p class="text-gray-700 mb-4">
                    { "Traits activate when you have multiple champions of the same origin or class. \
                       These synergies provide powerful bonuses that can turn the tide of battle. \
                       Always aim to build cohesive teams with strong trait activation." }
                </p>

                <h3 class="text-xl font-semibold mb-2">{ "Items and Components" }</h3>
                <p class="text-gray-700 mb-4">
                    { "Items are crafted from components dropped during PvE rounds. Combining two \
                       components creates a completed item. Prioritize key items for your carry units \
                       and don't let components sit unused on your bench." }
                </p>

                <h3 class="text-xl font-semibold mb-2">{ "Leveling Strategy" }</h3>
                <p class="text-gray-700">
                    { "Knowing when to level up is crucial. Early levels increase your odds of finding \
                       higher-cost units. Common level benchmarks are level 5 at stage 2-5, level 6 at \
                       stage 3-2, and level 8 by stage 4-5." }
                </p>
            </div>

            <Quiz
                quiz_id="basics_1"
                question="What happens when you activate a trait synergy?"
                options={vec![
                    AttrValue::from("Your champions gain powerful bonuses"),
                    AttrValue::from("You get extra gold"),
                    AttrValue::from("Your units cost less"),
                    AttrValue::from("Nothing happens"),
                ]}
            />

            <Quiz
                quiz_id="basics_2"
                question="How many components are needed to make a completed item?"
                options={vec![
                    AttrValue::from("Two components"),
                    AttrValue::from("One component"),
                    AttrValue::from("Three components"),
                    AttrValue::from("Four components"),
                ]}
            />

            <CommentSection page_id="basics" />
        </div>
    }
}
