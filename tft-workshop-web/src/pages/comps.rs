use crate::components::comments::CommentSection;
use crate::components::quiz::Quiz;
use tft_workshop_core::content::{TeamComp, Tier, meta_comps};
use yew::prelude::*;

const fn tier_color(tier: Tier) -> &'static str {
    match tier {
        Tier::S => "bg-red-500",
        Tier::A => "bg-orange-500",
        Tier::B => "bg-yellow-500",
    }
}

fn comp_card(comp: &TeamComp) -> Html {
    html! {
        <div class="bg-white rounded-lg shadow-md p-6" key={comp.name}>
            <div class="flex items-start justify-between mb-4">
                <div class="flex-1">
                    <div class="flex items-center gap-3 mb-2">
                        <span class={format!("{} text-white font-bold px-3 py-1 rounded text-sm", tier_color(comp.tier))}>
                            { format!("{} Tier", comp.tier.label()) }
                        </span>
                        <h3 class="text-2xl font-bold">{ comp.name }</h3>
                    </div>
                    <p class="text-gray-600 mb-4">{ comp.description }</p>
                    <div class="inline-block bg-blue-100 text-blue-800 px-3 py-1 rounded-full text-sm font-semibold">
                        { comp.style }
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mt-4 pt-4 border-t border-gray-200">
                <div class="text-center">
                    <div class="text-2xl font-bold text-blue-600">{ format!("{}%", comp.play_rate) }</div>
                    <div class="text-sm text-gray-600">{ "Play Rate" }</div>
                </div>
                <div class="text-center">
                    <div class="text-2xl font-bold text-green-600">{ comp.avg_place }</div>
                    <div class="text-sm text-gray-600">{ "Avg Place" }</div>
                </div>
                <div class="text-center">
                    <div class="text-2xl font-bold text-purple-600">{ format!("{}%", comp.top_four) }</div>
                    <div class="text-sm text-gray-600">{ "Top 4" }</div>
                </div>
                <div class="text-center">
                    <div class="text-2xl font-bold text-orange-600">{ format!("{}%", comp.win_rate) }</div>
                    <div class="text-sm text-gray-600">{ "Win Rate" }</div>
                </div>
            </div>
        </div>
    }
}

#[function_component(TeamCompsPage)]
pub fn team_comps_page() -> Html {
    html! {
        <div class="space-y-8" data-testid="page-comps">
            <div class="bg-white rounded-lg shadow-md p-8">
                <h2 class="text-3xl font-bold mb-4">{ "Meta Team Compositions" }</h2>
                <p class="text-gray-700 mb-4">
                    { "Based on data from " }
                    <a href="https://tactics.tools/team-compositions" target="_blank" rel="noopener noreferrer" class="text-blue-600 hover:underline">
                        { "tactics.tools" }
                    </a>
                    { ", here are the top performing team compositions in the current meta. These \
                       stats are from Diamond+ ranked games in patch 15.8." }
                </p>
                <div class="flex gap-4 text-sm text-gray-600 flex-wrap">
                    <div><strong>{ "Play Rate:" }</strong>{ " How often the comp is played" }</div>
                    <div><strong>{ "Avg Place:" }</strong>{ " Average placement (lower is better)" }</div>
                    <div><strong>{ "Top 4%:" }</strong>{ " Percentage finishing in top 4" }</div>
                    <div><strong>{ "Win%:" }</strong>{ " First place rate" }</div>
                </div>
            </div>

            { for meta_comps().iter().map(comp_card) }

            <div class="bg-blue-50 border-l-4 border-blue-600 p-6 rounded">
                <h4 class="font-bold mb-2 text-blue-900">{ "Pro Tip" }</h4>
                <p class="text-blue-800">
                    { "While following meta comps is helpful, remember to adapt based on your \
                       augments, items, and lobby strength. Flexibility wins games!" }
                </p>
            </div>

            <Quiz
                quiz_id="comps_1"
                question="What is the best performing composition based on average placement?"
                options={vec![
                    AttrValue::from("Prodigy Malzahar & Rammus"),
                    AttrValue::from("Soul Fighter Samira & Sett"),
                    AttrValue::from("Battle Academia Garen & Yuumi"),
                    AttrValue::from("Mighty Mech Akali & Ryze"),
                ]}
            />

            <Quiz
                quiz_id="comps_2"
                question="Which playstyle involves staying at a specific level to find core units?"
                options={vec![
                    AttrValue::from("Reroll compositions"),
                    AttrValue::from("Fast level 8"),
                    AttrValue::from("Flex play"),
                    AttrValue::from("Win streaking"),
                ]}
            />

            <CommentSection page_id="comps" />
        </div>
    }
}
