use leptos::{html, prelude::*};

use super::{reveal::use_reveal, section::SectionHeading};
use crate::{
    content::{Accent, FOCUS_TAGS, STATS},
    reveal::{reveal_class, Motion},
};

#[component]
pub fn About() -> impl IntoView {
    let about_ref = NodeRef::<html::Div>::new();
    let stat_ref = NodeRef::<html::Div>::new();
    let about_seen = use_reveal(about_ref);
    let stats_seen = use_reveal(stat_ref);

    view! {
        <section id="about" class="py-20 bg-white dark:bg-gray-800">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading title="About Me" />

                <div class="flex flex-col md:flex-row items-center space-y-12 md:space-y-0 md:space-x-12">
                    <div
                        node_ref=about_ref
                        class=move || {
                            reveal_class(
                                "w-full md:w-1/2 transition-all duration-1000 ease-out",
                                Motion::Rise,
                                about_seen.get(),
                            )
                        }
                    >
                        <p class="text-lg mb-6 text-gray-700 dark:text-gray-300">
                            "I'm a passionate UI/UX Designer with over 5 years of experience creating visually appealing and user-centered digital experiences. My expertise lies in transforming complex challenges into intuitive, accessible designs that delight users."
                        </p>
                        <p class="text-lg mb-6 text-gray-700 dark:text-gray-300">
                            "With a background in customer service, I bring a unique perspective to design that focuses on understanding user needs, empathy, and clear communication. I believe great design happens at the intersection of aesthetics, functionality, and business objectives."
                        </p>
                        <p class="text-lg text-gray-700 dark:text-gray-300">
                            "When I'm not designing, you can find me exploring new creative tools, attending design workshops, or volunteering with local design communities to mentor aspiring designers."
                        </p>

                        <div class="mt-8 flex flex-wrap gap-3">
                            {FOCUS_TAGS
                                .iter()
                                .map(|(label, colors)| {
                                    view! {
                                        <span class=format!(
                                            "px-4 py-2 rounded-full font-medium {colors}",
                                        )>{*label}</span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div
                        node_ref=stat_ref
                        class=move || {
                            reveal_class(
                                "w-full md:w-1/2 grid grid-cols-2 gap-6 transition-all duration-1000 ease-out delay-300",
                                Motion::Rise,
                                stats_seen.get(),
                            )
                        }
                    >
                        {STATS
                            .iter()
                            .map(|stat| {
                                let value_class = match stat.accent {
                                    Accent::Purple => {
                                        "text-4xl font-bold text-purple-600 dark:text-purple-400 mb-2"
                                    }
                                    Accent::Teal => {
                                        "text-4xl font-bold text-teal-600 dark:text-teal-400 mb-2"
                                    }
                                };
                                view! {
                                    <div class="bg-gray-50 dark:bg-gray-700 p-6 rounded-xl shadow-md hover:shadow-lg transition-all">
                                        <div class=value_class>{stat.value}</div>
                                        <div class="text-lg text-gray-700 dark:text-gray-300">
                                            {stat.label}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
