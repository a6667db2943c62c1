use leptos::prelude::*;

/// Centered section title with the brand gradient rule underneath.
#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-3xl md:text-4xl font-bold mb-4">{title}</h2>
            <div class="h-1 w-20 bg-gradient-to-r from-purple-600 to-teal-500 mx-auto"></div>
            {subtitle
                .map(|s| {
                    view! {
                        <p class="text-gray-700 dark:text-gray-300 mt-4 max-w-2xl mx-auto">{s}</p>
                    }
                })}
        </div>
    }
}
