use leptos::{html, prelude::*};

use super::reveal::use_reveal;
use crate::{
    content::{OWNER, PORTRAIT_URL, ROLE, TAGLINE},
    reveal::{reveal_class, Motion},
    theme::{HeroBackdrop, Theme},
};

#[component]
pub fn Hero(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let profile_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(profile_ref);
    let backdrop = move || HeroBackdrop::from(theme.get());

    view! {
        <section class="min-h-screen flex items-center justify-center relative overflow-hidden pt-20 pb-16">
            <div class="absolute inset-0 z-0">
                <div class=move || {
                    format!("absolute inset-0 opacity-10 {}", backdrop().gradient)
                }></div>
                <div class=move || {
                    format!(
                        "absolute top-20 right-20 w-72 h-72 {} rounded-full filter blur-3xl opacity-20",
                        backdrop().top_glow,
                    )
                }></div>
                <div class=move || {
                    format!(
                        "absolute bottom-20 left-20 w-96 h-96 {} rounded-full filter blur-3xl opacity-20",
                        backdrop().bottom_glow,
                    )
                }></div>
            </div>

            <div class="container mx-auto px-4 md:px-6 z-10">
                <div class="flex flex-col md:flex-row items-center justify-between space-y-12 md:space-y-0 md:space-x-12">
                    <div class="w-full md:w-1/2 space-y-6 text-center md:text-left">
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold leading-tight">
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-purple-600 to-teal-500">
                                {OWNER}
                            </span>
                        </h1>
                        <div class="h-1 w-20 md:w-32 bg-gradient-to-r from-purple-600 to-teal-500 mx-auto md:mx-0"></div>
                        <h2 class="text-2xl md:text-3xl lg:text-4xl font-medium text-gray-700 dark:text-gray-300">
                            {ROLE}
                        </h2>
                        <p class="text-lg text-gray-600 dark:text-gray-400 max-w-xl">{TAGLINE}</p>
                        <div class="flex flex-col sm:flex-row space-y-4 sm:space-y-0 sm:space-x-4 pt-4 justify-center md:justify-start">
                            <a
                                href="#portfolio"
                                class="px-8 py-3 rounded-full bg-purple-600 text-white font-medium hover:bg-purple-700 transition-all shadow-lg hover:shadow-xl transform hover:-translate-y-1"
                            >
                                "View My Work"
                            </a>
                            <a
                                href="#contact"
                                class="px-8 py-3 rounded-full bg-transparent border-2 border-teal-500 text-teal-600 dark:text-teal-400 font-medium hover:bg-teal-500 hover:text-white dark:hover:text-white transition-all"
                            >
                                "Get In Touch"
                            </a>
                        </div>
                    </div>

                    <div
                        node_ref=profile_ref
                        class=move || {
                            reveal_class(
                                "w-full md:w-1/2 flex justify-center transition-all duration-1000 ease-out",
                                Motion::Rise,
                                revealed.get(),
                            )
                        }
                    >
                        <div class="relative w-64 h-64 md:w-80 md:h-80">
                            <div class="absolute inset-0 rounded-full bg-gradient-to-br from-purple-600 to-teal-500 animate-pulse"></div>
                            <img
                                src=PORTRAIT_URL
                                alt=OWNER
                                class="relative w-full h-full object-cover rounded-full p-1"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
