use leptos::{html, prelude::*};

use super::{reveal::use_reveal, section::SectionHeading};
use crate::{
    content::{ProjectFilter, PROJECTS},
    reveal::{reveal_class, stagger_style, Motion, PROJECT_STEP_MS},
};

const CARD_REVEAL: &str = "duration-500 ease-out";
const ACTIVE_FILTER: &str = "px-6 py-2 rounded-full transition-all bg-purple-600 text-white";
const IDLE_FILTER: &str = "px-6 py-2 rounded-full transition-all bg-gray-200 dark:bg-gray-700 text-gray-800 dark:text-gray-200 hover:bg-gray-300 dark:hover:bg-gray-600";

#[component]
pub fn Portfolio() -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::default());
    let shown = Memo::new(move |_| filter.get().apply(PROJECTS));
    let grid_ref = NodeRef::<html::Div>::new();
    let grid_seen = use_reveal(grid_ref);

    view! {
        <section id="portfolio" class="py-20 bg-white dark:bg-gray-800">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading
                    title="My Portfolio"
                    subtitle="Explore some of my recent design projects showcasing my skills and passion for creating beautiful, user-friendly interfaces."
                />

                <div class="flex justify-center mb-12 flex-wrap gap-4">
                    {ProjectFilter::options()
                        .map(|option| {
                            view! {
                                <button
                                    on:click=move |_| {
                                        log::debug!("portfolio filter: {}", option.label());
                                        set_filter(option);
                                    }
                                    class=move || {
                                        if filter.get() == option { ACTIVE_FILTER } else { IDLE_FILTER }
                                    }
                                    aria-pressed=move || (filter.get() == option).to_string()
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div
                    node_ref=grid_ref
                    class=move || {
                        reveal_class(
                            "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 transition-opacity duration-1000",
                            Motion::Fade,
                            grid_seen.get(),
                        )
                    }
                >
                    {move || {
                        shown
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, project)| {
                                view! {
                                    // the stagger delay stays on this wrapper so the card's
                                    // own hover and theme transitions start immediately
                                    <div
                                        class=move || {
                                            reveal_class(
                                                &format!("{CARD_REVEAL} {}", Motion::Rise.transition()),
                                                Motion::Rise,
                                                grid_seen.get(),
                                            )
                                        }
                                        style=stagger_style(index, PROJECT_STEP_MS)
                                    >
                                        <div class="project-item h-full bg-gray-50 dark:bg-gray-700 rounded-lg overflow-hidden shadow-md hover:shadow-xl transition-all duration-500">
                                            <div class="relative overflow-hidden group h-64">
                                                <img
                                                    src=project.image
                                                    alt=project.title
                                                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                                                />
                                                <div class="absolute inset-0 bg-gradient-to-t from-black/80 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-end p-6">
                                                    <div>
                                                        <span class="text-xs text-purple-300 font-semibold uppercase tracking-wider">
                                                            {project.category.label()}
                                                        </span>
                                                        <h3 class="text-xl text-white font-bold mt-1">
                                                            {project.title}
                                                        </h3>
                                                    </div>
                                                </div>
                                            </div>
                                            <div class="p-6">
                                                <h3 class="text-xl font-bold text-gray-800 dark:text-gray-200 mb-2">
                                                    {project.title}
                                                </h3>
                                                <p class="text-gray-600 dark:text-gray-400 mb-4">
                                                    {project.description}
                                                </p>
                                                <div class="flex justify-between items-center">
                                                    <span class="text-sm font-medium px-3 py-1 rounded-full bg-purple-100 dark:bg-purple-900/30 text-purple-700 dark:text-purple-400">
                                                        {project.category.label()}
                                                    </span>
                                                    <button class="text-teal-600 dark:text-teal-400 hover:text-teal-700 dark:hover:text-teal-300 font-medium transition-colors">
                                                        "View Details"
                                                    </button>
                                                </div>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="text-center mt-12">
                    <button class="px-8 py-3 rounded-full bg-transparent border-2 border-purple-600 text-purple-600 dark:text-purple-400 font-medium hover:bg-purple-600 hover:text-white transition-all">
                        "View All Projects"
                    </button>
                </div>
            </div>
        </section>
    }
}
