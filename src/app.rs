mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod icons;
mod navbar;
mod portfolio;
mod reveal;
mod section;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_window_scroll;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::{
    content::{OWNER, TAGLINE},
    nav::is_scrolled,
    theme::Theme,
};
use about::About;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use icons::{Icon, IconKind};
use navbar::Navbar;
use portfolio::Portfolio;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (theme, set_theme) = signal(Theme::default());
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Signal::derive(move || is_scrolled(scroll_y.get()));

    #[cfg(feature = "hydrate")]
    let (stored_theme, set_stored_theme, _) =
        use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");

    // the server always renders the light theme; restore the saved one once hydrated
    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| set_theme(stored_theme.get_untracked()),
        true,
    );

    let toggle_theme = Callback::new(move |()| {
        let next = theme.get_untracked().toggle();
        log::debug!("theme: {next:?}");
        set_theme(next);
        #[cfg(feature = "hydrate")]
        set_stored_theme.set(next);
    });

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Meta name="description" content=TAGLINE />

        <Router>
            <div class=move || theme.get().root_class()>
                <div class="min-h-screen w-full overflow-x-hidden bg-white text-black dark:bg-black dark:text-white transition-colors duration-300">
                    <Navbar theme on_toggle_theme=toggle_theme scrolled />
                    <main class="w-full">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=move || view! { <LandingPage theme /> } />
                        </Routes>
                    </main>
                    <Footer />
                    <ScrollToTop visible=scrolled />
                </div>
            </div>
        </Router>
    }
}

/// Every section of the site, top to bottom.
#[component]
fn LandingPage(theme: ReadSignal<Theme>) -> impl IntoView {
    view! {
        <Title text="UI/UX Designer" />
        <Hero theme />
        <About />
        <Skills />
        <Portfolio />
        <Experience />
        <Contact />
    }
}

#[component]
fn ScrollToTop(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <button
                on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
                class="fixed bottom-6 right-6 p-3 rounded-full bg-purple-600 dark:bg-purple-500 text-white shadow-lg hover:bg-purple-700 dark:hover:bg-purple-600 transition-all duration-300 z-40"
                aria-label="Scroll to top"
            >
                <Icon icon=IconKind::ArrowUp />
            </button>
        </Show>
    }
}
