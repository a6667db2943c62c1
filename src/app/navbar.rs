use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::{
    content::{BRAND, BRAND_SUFFIX},
    nav::{navbar_class, MenuState, NAV_LINKS},
    theme::Theme,
};

#[component]
pub fn Navbar(
    theme: ReadSignal<Theme>,
    on_toggle_theme: Callback<()>,
    #[prop(into)] scrolled: Signal<bool>,
) -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());

    view! {
        <nav class=move || navbar_class(scrolled.get())>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex justify-between items-center">
                <a href="#" class="text-xl md:text-2xl font-bold text-black dark:text-white">
                    {BRAND}
                    <span class="text-teal-600 dark:text-teal-400">{BRAND_SUFFIX}</span>
                </a>

                <div class="hidden md:flex items-center space-x-8">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="hover:text-purple-600 dark:hover:text-purple-400 transition"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle theme on_toggle=on_toggle_theme />
                </div>

                <div class="md:hidden flex items-center space-x-4">
                    <ThemeToggle theme on_toggle=on_toggle_theme />
                    <button
                        on:click=move |_| set_menu.update(|m| *m = m.toggle())
                        class="p-2 text-gray-800 dark:text-gray-200"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                    >
                        {move || {
                            let icon = if menu.get().is_open() { IconKind::X } else { IconKind::Menu };
                            view! { <Icon icon size=24 /> }
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || menu.get().is_open()>
                <div class="md:hidden absolute top-full left-0 w-full bg-white dark:bg-gray-800 shadow-lg py-4 transition-all">
                    <div class="max-w-7xl mx-auto px-4 sm:px-6 flex flex-col space-y-4">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        class="py-2 hover:text-purple-600 dark:hover:text-purple-400 transition"
                                        on:click=move |_| set_menu(MenuState::Closed)
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn ThemeToggle(theme: ReadSignal<Theme>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_toggle.run(())
            class="p-2 rounded-full bg-gray-200 dark:bg-gray-700 hover:bg-gray-300 dark:hover:bg-gray-600 transition"
            aria-label="Toggle dark mode"
        >
            {move || {
                let icon = if theme.get().is_dark() { IconKind::Sun } else { IconKind::Moon };
                view! { <Icon icon size=18 /> }
            }}
        </button>
    }
}
