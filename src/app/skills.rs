use leptos::{html, prelude::*};

use super::{reveal::use_reveal, section::SectionHeading};
use crate::{
    content::{SKILLS, SOFT_SKILLS},
    reveal::{reveal_class, skill_bar_style, Motion},
};

#[component]
pub fn Skills() -> impl IntoView {
    let skills_ref = NodeRef::<html::Div>::new();
    let soft_skills_ref = NodeRef::<html::Div>::new();
    let skills_seen = use_reveal(skills_ref);
    let soft_skills_seen = use_reveal(soft_skills_ref);

    view! {
        <section id="skills" class="py-20 bg-gray-50 dark:bg-gray-900">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading
                    title="My Skills"
                    subtitle="I've developed a diverse set of skills to create comprehensive design solutions."
                />

                <div class="flex flex-col md:flex-row gap-12">
                    <div
                        node_ref=skills_ref
                        class=move || {
                            reveal_class(
                                "w-full md:w-2/3 transition-opacity duration-1000",
                                Motion::Fade,
                                skills_seen.get(),
                            )
                        }
                    >
                        <h3 class="text-2xl font-bold mb-6 text-gray-800 dark:text-gray-200">
                            "Technical Skills"
                        </h3>
                        <div class="space-y-6">
                            {SKILLS
                                .iter()
                                .enumerate()
                                .map(|(index, skill)| {
                                    let level = skill.level;
                                    view! {
                                        <div class="space-y-2">
                                            <div class="flex justify-between">
                                                <span class="font-medium text-gray-800 dark:text-gray-200">
                                                    {skill.name}
                                                </span>
                                                <span class="text-gray-600 dark:text-gray-400">
                                                    {format!("{level}%")}
                                                </span>
                                            </div>
                                            <div class="h-3 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden">
                                                <div
                                                    class=format!(
                                                        "skill-bar h-full bg-gradient-to-r {} transition-all duration-1000 ease-out",
                                                        skill.color,
                                                    )
                                                    style=move || skill_bar_style(
                                                        level,
                                                        index,
                                                        skills_seen.get(),
                                                    )
                                                ></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div
                        node_ref=soft_skills_ref
                        class=move || {
                            reveal_class(
                                "w-full md:w-1/3 transition-opacity duration-1000 delay-500",
                                Motion::Fade,
                                soft_skills_seen.get(),
                            )
                        }
                    >
                        <h3 class="text-2xl font-bold mb-6 text-gray-800 dark:text-gray-200">
                            "Soft Skills"
                        </h3>
                        <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-1 gap-4">
                            {SOFT_SKILLS
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <div class="bg-white dark:bg-gray-800 p-4 rounded-lg shadow-md hover:shadow-lg transition-all flex items-center space-x-4">
                                            <div class="text-2xl">{skill.icon}</div>
                                            <span class="font-medium text-gray-800 dark:text-gray-200">
                                                {skill.name}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="mt-8 bg-gradient-to-r from-purple-600 to-teal-500 p-6 rounded-lg text-white">
                            <h4 class="text-xl font-bold mb-2">"Design Philosophy"</h4>
                            <p>
                                "I believe good design solves problems, great design anticipates them. My approach combines aesthetics with functionality, always putting the user at the center of the process."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
