use crate::components::comments::CommentSection;
use crate::components::quiz::Quiz;
use yew::prelude::*;

#[function_component(PositioningPage)]
pub fn positioning_page() -> Html {
    html! {
        <div class="space-y-8" data-testid="page-positioning">
            <div class="bg-white rounded-lg shadow-md p-8">
                <h2 class="text-3xl font-bold mb-4">{ "Positioning Strategies" }</h2>
                <p class="text-gray-700 mb-4">
                    { "Positioning can be the difference between victory and defeat. Proper unit \
                       placement helps you counter opponents, protect your carries, and maximize your \
                       team's effectiveness." }
                </p>

                <h3 class="text-xl font-semibold mb-2">{ "Frontline vs Backline" }</h3>
                <p class="text-gray-700 mb-4">
                    { "Tanks and bruisers belong in the front to absorb damage, while ranged carries \
                       and mages should be protected in the back. Creating proper spacing prevents AoE \
                       abilities from hitting your entire team." }
                </p>

                <h3 class="text-xl font-semibold mb-2">{ "Corner Positioning" }</h3>
                <p class="text-gray-700 mb-4">
                    { "Placing your carry in a corner can protect them from assassins and enemy \
                       backline divers. However, be aware that clever opponents may position to \
                       counter corner placements." }
                </p>

                <h3 class="text-xl font-semibold mb-2">{ "Scouting Opponents" }</h3>
                <p class="text-gray-700">
                    { "Always scout your opponents before each round. Adjust your positioning to \
                       counter their strongest threats, especially assassins, crowd control, and \
                       high-damage dealers. Adapting your setup is crucial in the late game." }
                </p>
            </div>

            <Quiz
                quiz_id="positioning_1"
                question="Where should your main carry typically be positioned?"
                options={vec![
                    AttrValue::from("In the backline, protected by tanks"),
                    AttrValue::from("In the front row"),
                    AttrValue::from("In the middle of the board"),
                    AttrValue::from("Positioning doesn't matter"),
                ]}
            />

            <Quiz
                quiz_id="positioning_2"
                question="Why is scouting opponents important?"
                options={vec![
                    AttrValue::from("To adjust positioning and counter their threats"),
                    AttrValue::from("It's not important"),
                    AttrValue::from("Only to see their items"),
                    AttrValue::from("To copy their composition"),
                ]}
            />

            <CommentSection page_id="positioning" />
        </div>
    }
}
