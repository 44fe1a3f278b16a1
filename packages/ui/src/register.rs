//! Sign-up form and the list of recent registrations.
//!
//! The form keeps a [`RegistrationForm`] in a signal and hands it to
//! [`store::Registry::submit`] on submit; the outcome becomes the
//! [`FormStatus`] banner. Everything is saved in the visitor's browser only.

use dioxus::prelude::*;
use store::{Anonymity, FormStatus, Interest, RegistrationForm};

use crate::components::{Card, Pill, SectionTitle, Tag};
use crate::icons::{FaCircleCheck, FaEnvelope, FaLocationDot, FaLock, FaPhone, FaShieldHalved, FaUsers};
use crate::registry::use_registry;
use crate::Icon;

const REGISTER_CSS: Asset = asset!("/assets/styling/register.css");

#[component]
pub fn RegisterSection() -> Element {
    rsx! {
        document::Stylesheet { href: REGISTER_CSS }
        section {
            id: "register",
            div {
                class: "register-layout",
                div {
                    SectionTitle {
                        eyebrow: "Join the network",
                        title: "Register to stay connected",
                        subtitle: "Choose how public you want to be. Your info is saved in your browser only.",
                    }
                    Card {
                        h3 { "Safety note" }
                        p {
                            "If you are in a high-risk situation, consider using a new email and selecting anonymous mode. Do not share addresses, legal case details, or anything that could put you at risk."
                        }
                        div {
                            class: "hero-pills",
                            Pill { label: "Anonymous mode available", Icon { icon: FaLock, width: 14, height: 14 } }
                            Pill { label: "Safety-first language", Icon { icon: FaShieldHalved, width: 14, height: 14 } }
                        }
                    }
                    Card {
                        h3 { "What you get" }
                        ul {
                            class: "checklist",
                            li { Icon { icon: FaCircleCheck, width: 14, height: 14 } " Event invites and RSVP details" }
                            li { Icon { icon: FaCircleCheck, width: 14, height: 14 } " Resource updates and toolkits" }
                            li { Icon { icon: FaCircleCheck, width: 14, height: 14 } " Volunteer and mutual-aid opportunities" }
                        }
                    }
                }
                RegistrationFormCard {}
            }
            RecentRegistrations {}
        }
    }
}

#[component]
fn RegistrationFormCard() -> Element {
    let mut registry = use_registry();
    let mut form = use_signal(RegistrationForm::new);
    let mut status = use_signal(FormStatus::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = {
            let mut draft = form.write();
            registry.write().submit(&mut draft)
        };
        if let Err(e) = &result {
            tracing::debug!("Registration rejected: {e}");
        }
        status.set(FormStatus::from_result(&result));
    };

    let current = form();

    rsx! {
        Card {
            class: "register-card",
            form {
                onsubmit: handle_submit,
                class: "register-form",

                div {
                    class: "field-row",
                    TextField {
                        label: "Full name",
                        placeholder: "Your name",
                        value: current.full_name.clone(),
                        oninput: move |v: String| form.write().full_name = v,
                        Icon { icon: FaUsers, width: 14, height: 14 }
                    }
                    TextField {
                        label: "Email",
                        placeholder: "you@example.com",
                        value: current.email.clone(),
                        oninput: move |v: String| form.write().email = v,
                        Icon { icon: FaEnvelope, width: 14, height: 14 }
                    }
                }
                div {
                    class: "field-row",
                    TextField {
                        label: "Phone (optional)",
                        placeholder: "+91…",
                        value: current.phone.clone(),
                        oninput: move |v: String| form.write().phone = v,
                        Icon { icon: FaPhone, width: 14, height: 14 }
                    }
                    TextField {
                        label: "City (optional)",
                        placeholder: "Your city",
                        value: current.city.clone(),
                        oninput: move |v: String| form.write().city = v,
                        Icon { icon: FaLocationDot, width: 14, height: 14 }
                    }
                }

                div {
                    class: "field",
                    span { class: "field-label", "Interests" }
                    div {
                        class: "chip-row",
                        for interest in Interest::variants().iter().copied() {
                            button {
                                key: "{interest}",
                                r#type: "button",
                                class: if current.has_interest(interest) { "chip active" } else { "chip" },
                                onclick: move |_| form.write().toggle_interest(interest),
                                "{interest}"
                            }
                        }
                    }
                }

                div {
                    class: "field",
                    span { class: "field-label", "Visibility" }
                    div {
                        class: "visibility-grid",
                        for choice in Anonymity::variants().iter().copied() {
                            button {
                                key: "{choice}",
                                r#type: "button",
                                class: if current.anonymity == choice { "visibility active" } else { "visibility" },
                                onclick: move |_| form.write().anonymity = choice,
                                strong { "{choice}" }
                                span { {choice.description()} }
                            }
                        }
                    }
                }

                label {
                    class: "field",
                    span { class: "field-label", "Message (optional)" }
                    textarea {
                        placeholder: "Tell us what kind of support you’re looking for…",
                        value: current.message.clone(),
                        oninput: move |evt: FormEvent| form.write().message = evt.value(),
                    }
                }

                label {
                    class: "consent",
                    input {
                        r#type: "checkbox",
                        checked: current.consent,
                        onchange: move |evt: FormEvent| form.write().consent = evt.checked(),
                    }
                    div {
                        strong { "I consent to being contacted." }
                        span { " Registrations stay in this browser until you reset them." }
                    }
                }

                match status() {
                    FormStatus::Error(msg) => rsx! {
                        div { class: "status error", role: "alert", "{msg}" }
                    },
                    FormStatus::Success(msg) => rsx! {
                        div {
                            class: "status success",
                            Icon { icon: FaCircleCheck, width: 14, height: 14 }
                            " {msg}"
                        }
                    },
                    FormStatus::Idle => rsx! {},
                }

                button {
                    class: "button primary",
                    r#type: "submit",
                    "Register"
                }
            }
        }
    }
}

/// Labelled text input with a leading icon passed as `children`.
#[component]
fn TextField(
    label: String,
    placeholder: String,
    value: String,
    oninput: EventHandler<String>,
    children: Element,
) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            div {
                class: "input-with-icon",
                {children}
                input {
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            }
        }
    }
}

#[component]
fn RecentRegistrations() -> Element {
    let mut registry = use_registry();
    let reg = registry.read();
    let recent = reg.recent(reg.recent_limit()).to_vec();
    drop(reg);

    rsx! {
        div {
            class: "recent-header",
            div {
                h3 { "Recent registrations" }
                p { "Stored in your browser only. Clear by clicking “Reset”." }
            }
            button {
                class: "button subtle",
                onclick: move |_| registry.write().reset(),
                "Reset"
            }
        }
        div {
            class: "grid three",
            for r in recent {
                Card {
                    key: "{r.id}",
                    div {
                        class: "recent-name",
                        strong { {r.display_name()} }
                        span { class: "badge", "{r.anonymity}" }
                    }
                    small { class: "recent-date", {r.created_label()} }
                    if let Some(city) = r.city_line() {
                        p { class: "recent-city", "{city}" }
                    }
                    div {
                        class: "tag-row",
                        for interest in r.interests.iter() {
                            Tag { key: "{interest}", label: "{interest}" }
                        }
                    }
                }
            }
        }
    }
}
