use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="space-y-8" data-testid="page-home">
            <div class="bg-gradient-to-r from-blue-500 to-purple-500 text-white rounded-lg shadow-lg p-8 text-center">
                <h2 class="text-4xl font-bold mb-4">{ "Welcome to TFT Workshop" }</h2>
                <p class="text-xl">{ "Master Teamfight Tactics with interactive lessons and quizzes" }</p>
            </div>

            <div class="grid md:grid-cols-3 gap-6">
                <div class="bg-white rounded-lg shadow-md p-6">
                    <h3 class="text-xl font-bold mb-2">{ "Learn the Basics" }</h3>
                    <p class="text-gray-600">{ "Understand the fundamentals of TFT, from traits to itemization." }</p>
                </div>
                <div class="bg-white rounded-lg shadow-md p-6">
                    <h3 class="text-xl font-bold mb-2">{ "Master Economy" }</h3>
                    <p class="text-gray-600">{ "Learn gold management strategies to dominate the mid and late game." }</p>
                </div>
                <div class="bg-white rounded-lg shadow-md p-6">
                    <h3 class="text-xl font-bold mb-2">{ "Perfect Positioning" }</h3>
                    <p class="text-gray-600">{ "Discover positioning tactics to counter opponents and maximize wins." }</p>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow-md p-8">
                <h3 class="text-2xl font-bold mb-4">{ "About TFT Workshop" }</h3>
                <p class="text-gray-700 mb-4">
                    { "TFT Workshop is your comprehensive guide to improving at Teamfight Tactics. \
                       Whether you're a beginner learning the basics or an experienced player refining \
                       your strategy, our interactive lessons and quizzes will help you climb the ranks." }
                </p>
                <p class="text-gray-700">
                    { "Each lesson includes detailed explanations, practical examples, and quizzes to \
                       test your knowledge. Join our community by participating in quizzes and leaving \
                       comments!" }
                </p>
            </div>
        </div>
    }
}
