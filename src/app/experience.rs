use leptos::{html, prelude::*};

use super::{reveal::use_reveal, section::SectionHeading};
use crate::{
    content::{TimelineItem, CERTIFICATIONS, EDUCATION, EXPERIENCE},
    reveal::{reveal_class, stagger_style, Motion, TIMELINE_STEP_MS},
};

const ITEM_BASE: &str = "relative mb-12 pl-8 transition-[opacity,transform] duration-1000";

/// Colour scheme of one timeline column. The experience column leads with
/// purple, the education column with teal.
#[derive(Clone, Copy)]
struct Palette {
    line: &'static str,
    dot: &'static str,
    badge: &'static str,
    company: &'static str,
}

const EXPERIENCE_PALETTE: Palette = Palette {
    line: "bg-gradient-to-b from-purple-600 via-teal-500 to-purple-600",
    dot: "border-purple-600 dark:border-purple-500",
    badge: "bg-gradient-to-r from-purple-600 to-teal-500",
    company: "text-purple-600 dark:text-teal-400",
};

const EDUCATION_PALETTE: Palette = Palette {
    line: "bg-gradient-to-b from-teal-500 via-purple-600 to-teal-500",
    dot: "border-teal-500 dark:border-teal-400",
    badge: "bg-gradient-to-r from-teal-500 to-purple-600",
    company: "text-teal-600 dark:text-purple-400",
};

#[component]
pub fn Experience() -> impl IntoView {
    let experience_ref = NodeRef::<html::Div>::new();
    let education_ref = NodeRef::<html::Div>::new();
    let experience_seen = use_reveal(experience_ref);
    let education_seen = use_reveal(education_ref);

    view! {
        <section id="experience" class="py-20 bg-gray-50 dark:bg-gray-900">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading
                    title="Experience & Education"
                    subtitle="My professional journey and educational background that shaped my design expertise."
                />

                <div class="flex flex-col md:flex-row gap-12">
                    <div class="w-full md:w-1/2">
                        <h3 class="text-2xl font-bold mb-8 text-center text-gray-800 dark:text-gray-200">
                            "Professional Experience"
                        </h3>
                        <div
                            node_ref=experience_ref
                            class=move || {
                                reveal_class(
                                    "relative pl-8 transition-opacity duration-1000",
                                    Motion::Fade,
                                    experience_seen.get(),
                                )
                            }
                        >
                            <div class=format!(
                                "absolute left-0 top-0 bottom-0 w-0.5 {}",
                                EXPERIENCE_PALETTE.line,
                            )></div>
                            <Timeline
                                items=EXPERIENCE
                                palette=EXPERIENCE_PALETTE
                                revealed=experience_seen
                            />
                        </div>
                    </div>

                    <div class="w-full md:w-1/2">
                        <h3 class="text-2xl font-bold mb-8 text-center text-gray-800 dark:text-gray-200">
                            "Education & Certifications"
                        </h3>
                        <div
                            node_ref=education_ref
                            class=move || {
                                reveal_class(
                                    "relative pl-8 transition-opacity duration-1000",
                                    Motion::Fade,
                                    education_seen.get(),
                                )
                            }
                        >
                            <div class=format!(
                                "absolute left-0 top-0 bottom-0 w-0.5 {}",
                                EDUCATION_PALETTE.line,
                            )></div>
                            <Timeline
                                items=EDUCATION
                                palette=EDUCATION_PALETTE
                                revealed=education_seen
                            />
                            // certifications close out the education column
                            <div
                                class=move || reveal_class(ITEM_BASE, Motion::Slide, education_seen.get())
                                style=stagger_style(EDUCATION.len(), TIMELINE_STEP_MS)
                            >
                                <Dot palette=EDUCATION_PALETTE />
                                <div class="bg-white dark:bg-gray-800 p-6 rounded-lg shadow-md hover:shadow-lg transition-all">
                                    <h4 class="text-xl font-bold text-gray-800 dark:text-gray-200 mb-4">
                                        "Additional Certifications"
                                    </h4>
                                    <ul class="space-y-3 text-gray-600 dark:text-gray-400">
                                        {CERTIFICATIONS
                                            .iter()
                                            .enumerate()
                                            .map(|(i, cert)| {
                                                let bullet = if i % 2 == 0 {
                                                    "w-2 h-2 bg-purple-600 dark:bg-purple-400 rounded-full mr-3"
                                                } else {
                                                    "w-2 h-2 bg-teal-500 dark:bg-teal-400 rounded-full mr-3"
                                                };
                                                view! {
                                                    <li class="flex items-center">
                                                        <span class=bullet></span>
                                                        {*cert}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Timeline(
    items: &'static [TimelineItem],
    palette: Palette,
    revealed: Signal<bool>,
) -> impl IntoView {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            view! {
                <div
                    class=move || reveal_class(ITEM_BASE, Motion::Slide, revealed.get())
                    style=stagger_style(index, TIMELINE_STEP_MS)
                >
                    <Dot palette />
                    <div class="bg-white dark:bg-gray-800 p-6 rounded-lg shadow-md hover:shadow-lg transition-all">
                        <span class=format!(
                            "inline-block px-3 py-1 text-sm text-white {} rounded-full mb-4",
                            palette.badge,
                        )>{item.year}</span>
                        <h4 class="text-xl font-bold text-gray-800 dark:text-gray-200 mb-1">
                            {item.title}
                        </h4>
                        <p class=format!("{} font-medium mb-4", palette.company)>{item.company}</p>
                        <p class="text-gray-600 dark:text-gray-400">{item.description}</p>
                    </div>
                </div>
            }
        })
        .collect_view()
}

#[component]
fn Dot(palette: Palette) -> impl IntoView {
    view! {
        <div class=format!(
            "absolute left-0 top-0 w-4 h-4 rounded-full bg-white dark:bg-gray-800 border-2 {} -translate-x-1/2",
            palette.dot,
        )></div>
    }
}
