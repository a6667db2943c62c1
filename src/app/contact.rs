use leptos::{html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::{
    icons::{Icon, IconKind},
    reveal::use_reveal,
    section::SectionHeading,
};
use crate::{
    contact::{reset, submit, ContactForm, ContactStatus, CONFIRMATION_MS},
    content::{
        Accent, Social, CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, CONTACT_PHONE_HREF,
    },
    reveal::{reveal_class, Motion},
};

const FIELD_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-900 dark:text-gray-100 focus:outline-none focus:ring-2 focus:ring-purple-500 dark:focus:ring-teal-400";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2";

#[component]
pub fn Contact() -> impl IntoView {
    let form_ref = NodeRef::<html::Div>::new();
    let info_ref = NodeRef::<html::Div>::new();
    let form_seen = use_reveal(form_ref);
    let info_seen = use_reveal(info_ref);

    view! {
        <section id="contact" class="py-20 bg-white dark:bg-gray-800">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading
                    title="Get In Touch"
                    subtitle="Let's work together to bring your ideas to life. Feel free to reach out for collaborations or just a friendly chat!"
                />

                <div class="flex flex-col md:flex-row gap-12">
                    <div
                        node_ref=form_ref
                        class=move || {
                            reveal_class(
                                "w-full md:w-3/5 transition-all duration-1000 ease-out",
                                Motion::Rise,
                                form_seen.get(),
                            )
                        }
                    >
                        <MessageForm />
                    </div>

                    <div
                        node_ref=info_ref
                        class=move || {
                            reveal_class(
                                "w-full md:w-2/5 transition-all duration-1000 ease-out delay-300",
                                Motion::Rise,
                                info_seen.get(),
                            )
                        }
                    >
                        <ContactInfo />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// The form never leaves the browser: a valid submission shows the
/// confirmation, then the fields are cleared once the timer fires.
#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let (status, set_status) = signal(ContactStatus::default());

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            let mut next = ContactStatus::Editing;
            form.update(|f| next = reset(f));
            set_status(next);
        },
        CONFIRMATION_MS as f64,
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let next = form.with_untracked(submit);
        match next {
            ContactStatus::Submitted => {
                log::debug!("contact form accepted");
                start(());
            }
            ContactStatus::Invalid(e) => log::debug!("contact form rejected: {e}"),
            ContactStatus::Editing => {}
        }
        set_status(next);
    };

    view! {
        <Show
            when=move || status.get().is_submitted()
            fallback=move || {
                view! {
                    <form on:submit=on_submit.clone() class="space-y-6">
                        <div>
                            <label for="name" class=LABEL_CLASS>
                                "Full Name"
                            </label>
                            <input
                                type="text"
                                id="name"
                                required=true
                                class=FIELD_CLASS
                                placeholder="Your name"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </div>

                        <div>
                            <label for="email" class=LABEL_CLASS>
                                "Email Address"
                            </label>
                            <input
                                type="email"
                                id="email"
                                required=true
                                class=FIELD_CLASS
                                placeholder="your.email@example.com"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </div>

                        <div>
                            <label for="message" class=LABEL_CLASS>
                                "Message"
                            </label>
                            <textarea
                                id="message"
                                required=true
                                rows=6
                                class=format!("{FIELD_CLASS} resize-none")
                                placeholder="Your message..."
                                prop:value=move || form.with(|f| f.message.clone())
                                on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                            ></textarea>
                        </div>

                        {move || {
                            status
                                .get()
                                .error()
                                .map(|e| {
                                    view! {
                                        <p role="alert" class="text-sm text-red-600 dark:text-red-400">
                                            {e.to_string()}
                                        </p>
                                    }
                                })
                        }}

                        <button
                            type="submit"
                            class="w-full py-3 px-6 rounded-lg bg-gradient-to-r from-purple-600 to-teal-500 text-white font-medium shadow-lg hover:shadow-xl transition-all transform hover:-translate-y-1"
                        >
                            "Send Message"
                        </button>
                    </form>
                }
            }
        >
            <div class="bg-green-100 dark:bg-green-900/30 border border-green-400 dark:border-green-700 text-green-700 dark:text-green-400 p-6 rounded-lg">
                <h3 class="text-xl font-bold mb-2">"Message Sent!"</h3>
                <p>"Thank you for your message. I'll get back to you as soon as possible."</p>
            </div>
        </Show>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="bg-gray-50 dark:bg-gray-700 p-8 rounded-lg shadow-md">
            <h3 class="text-2xl font-bold mb-6 text-gray-800 dark:text-gray-200">
                "Contact Information"
            </h3>

            <div class="space-y-6">
                <InfoRow icon=IconKind::Mail accent=Accent::Purple title="Email">
                    <a
                        href=format!("mailto:{CONTACT_EMAIL}")
                        class="text-gray-600 dark:text-gray-400 hover:text-purple-600 dark:hover:text-teal-400 transition-colors"
                    >
                        {CONTACT_EMAIL}
                    </a>
                </InfoRow>
                <InfoRow icon=IconKind::Phone accent=Accent::Teal title="Phone">
                    <a
                        href=CONTACT_PHONE_HREF
                        class="text-gray-600 dark:text-gray-400 hover:text-purple-600 dark:hover:text-teal-400 transition-colors"
                    >
                        {CONTACT_PHONE}
                    </a>
                </InfoRow>
                <InfoRow icon=IconKind::MapPin accent=Accent::Purple title="Location">
                    <p class="text-gray-600 dark:text-gray-400">{CONTACT_LOCATION}</p>
                </InfoRow>
            </div>

            <div class="mt-8">
                <h4 class="text-lg font-medium text-gray-800 dark:text-gray-200 mb-4">
                    "Connect With Me"
                </h4>
                <div class="flex space-x-4">
                    {Social::ALL
                        .into_iter()
                        .map(|social| {
                            let hover = match social.accent() {
                                Accent::Purple => "hover:bg-purple-600 dark:hover:bg-purple-600",
                                Accent::Teal => "hover:bg-teal-500 dark:hover:bg-teal-500",
                            };
                            view! {
                                <a
                                    href="#"
                                    class=format!(
                                        "bg-gray-200 dark:bg-gray-600 p-3 rounded-full text-gray-700 dark:text-gray-300 hover:text-white transition-colors {hover}",
                                    )
                                    aria-label=social.label()
                                >
                                    <Icon icon=social.into() />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="mt-8 p-6 bg-gradient-to-r from-purple-600 to-teal-500 rounded-lg text-white">
                <h4 class="text-lg font-semibold mb-2">"Availability"</h4>
                <p>
                    "Currently available for freelance projects, contract work, and full-time opportunities. Let's create something amazing together!"
                </p>
            </div>
        </div>
    }
}

#[component]
fn InfoRow(icon: IconKind, accent: Accent, title: &'static str, children: Children) -> impl IntoView {
    let badge = match accent {
        Accent::Purple => {
            "bg-purple-100 dark:bg-purple-900/30 p-3 rounded-full text-purple-600 dark:text-purple-400"
        }
        Accent::Teal => {
            "bg-teal-100 dark:bg-teal-900/30 p-3 rounded-full text-teal-600 dark:text-teal-400"
        }
    };
    view! {
        <div class="flex items-start space-x-4">
            <div class=badge>
                <Icon icon />
            </div>
            <div>
                <h4 class="text-lg font-medium text-gray-800 dark:text-gray-200">{title}</h4>
                {children()}
            </div>
        </div>
    }
}
