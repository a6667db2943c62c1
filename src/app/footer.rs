use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::{
    content::{copyright, BRAND, BRAND_SUFFIX, SERVICES},
    nav::FOOTER_LINKS,
};

const LINK_CLASS: &str = "text-gray-400 hover:text-teal-400 transition-colors";

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="bg-gray-900 text-gray-300">
            <div class="container mx-auto px-4 md:px-6 py-12">
                <div class="flex flex-col md:flex-row justify-between items-center space-y-6 md:space-y-0">
                    <div>
                        <a href="#" class="text-2xl font-bold text-purple-500 dark:text-teal-400">
                            {BRAND}
                            <span class="text-teal-500 dark:text-purple-400">{BRAND_SUFFIX}</span>
                        </a>
                        <p class="mt-2 text-sm">
                            "Creating beautiful digital experiences that delight users."
                        </p>
                    </div>

                    <div class="flex flex-col md:flex-row gap-6 md:gap-12">
                        <div>
                            <h3 class="text-lg font-bold mb-4 text-white">"Navigation"</h3>
                            <ul class="space-y-2">
                                {FOOTER_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <li>
                                                <a href=link.href class=LINK_CLASS>
                                                    {link.label}
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>

                        <div>
                            <h3 class="text-lg font-bold mb-4 text-white">"Services"</h3>
                            <ul class="space-y-2">
                                {SERVICES
                                    .iter()
                                    .map(|service| {
                                        view! {
                                            <li>
                                                <a href="#" class=LINK_CLASS>
                                                    {*service}
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                </div>

                <div class="mt-12 pt-8 border-t border-gray-800 flex flex-col md:flex-row justify-between items-center space-y-4 md:space-y-0">
                    <p class="text-sm">{copyright(year)}</p>
                    <div class="text-sm">
                        <a href="#" class=format!("{LINK_CLASS} mr-6")>
                            "Privacy Policy"
                        </a>
                        <a href="#" class=LINK_CLASS>
                            "Terms of Service"
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
