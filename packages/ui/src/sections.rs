//! Static content sections: mission, work, events, contact and footer.

use dioxus::prelude::*;
use store::content::{CAMPAIGNS, EVENTS};

use crate::components::{Card, SectionTitle, Tag};
use crate::icons::{
    FaCalendarDays, FaCircleCheck, FaEnvelope, FaHeart, FaLocationDot, FaPhone, FaShieldHalved,
    FaUsers,
};
use crate::registry::use_site_config;
use crate::Icon;

const SECTIONS_CSS: Asset = asset!("/assets/styling/sections.css");

#[component]
pub fn Mission() -> Element {
    let pillars = [
        ("Safety & dignity", "We prioritize safety, confidentiality, and real-world support — especially where stigma is high."),
        ("Community power", "Peer groups, resource navigation, and ally engagement — so no one has to face things alone."),
        ("Visibility", "Stories, workshops, and campaigns that shift culture and normalize lesbian lives."),
    ];

    rsx! {
        document::Stylesheet { href: SECTIONS_CSS }
        section {
            id: "mission",
            SectionTitle {
                eyebrow: "Our mission",
                title: "Equal rights, lived safely",
                subtitle: "We’re a community-led network supporting lesbians through legal navigation, mutual aid, education, and policy advocacy.",
            }
            div {
                class: "grid three",
                for (title, body) in pillars {
                    Card {
                        key: "{title}",
                        h3 { "{title}" }
                        p { "{body}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Work() -> Element {
    let pipeline = [
        ("Confidential intake", "We protect identities and risk levels."),
        ("Care coordination", "Warm handoffs to verified resources."),
        ("Advocacy loop", "Support stories inform policy work."),
    ];

    rsx! {
        section {
            id: "work",
            SectionTitle {
                eyebrow: "What we do",
                title: "Programs that protect and empower",
                subtitle: "From the ground up: support, advocacy, education, and mutual aid.",
            }
            div {
                class: "grid two",
                for campaign in CAMPAIGNS {
                    Card {
                        key: "{campaign.title}",
                        h3 { "{campaign.title}" }
                        p { "{campaign.description}" }
                        div {
                            class: "tag-row",
                            Tag { label: "Volunteer" }
                            Tag { label: "Donate" }
                            Tag { label: "Share resources" }
                        }
                    }
                }
            }
            div {
                class: "grid two",
                Card {
                    h3 {
                        Icon { icon: FaShieldHalved, width: 16, height: 16 }
                        " How support works"
                    }
                    p { "We invest in safe programs, trusted partnerships, and confidential assistance." }
                    ol {
                        for (title, body) in pipeline {
                            li {
                                key: "{title}",
                                strong { "{title}" }
                                " {body}"
                            }
                        }
                    }
                }
                Card {
                    h3 {
                        Icon { icon: FaHeart, width: 16, height: 16 }
                        " Get involved"
                    }
                    ul {
                        class: "checklist",
                        li { Icon { icon: FaCircleCheck, width: 14, height: 14 } " Join a support circle" }
                        li { Icon { icon: FaCircleCheck, width: 14, height: 14 } " Volunteer your skills" }
                        li { Icon { icon: FaCircleCheck, width: 14, height: 14 } " Amplify campaigns safely" }
                    }
                    a { class: "button primary", href: "#register", "Register now" }
                }
            }
        }
    }
}

#[component]
pub fn Events() -> Element {
    rsx! {
        section {
            id: "events",
            SectionTitle {
                eyebrow: "Upcoming",
                title: "Events & gatherings",
                subtitle: "Online options are captioned whenever possible. In-person locations may be shared after RSVP for safety.",
            }
            div {
                class: "grid three",
                for event in EVENTS {
                    Card {
                        key: "{event.title}",
                        h3 { "{event.title}" }
                        div {
                            class: "event-meta",
                            span {
                                Icon { icon: FaCalendarDays, width: 14, height: 14 }
                                " {event.date} · {event.time}"
                            }
                            span {
                                Icon { icon: FaLocationDot, width: 14, height: 14 }
                                " {event.place}"
                            }
                        }
                        p { "{event.note}" }
                        a { class: "button ghost", href: "#register", "RSVP via registration" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        section {
            id: "contact",
            SectionTitle {
                eyebrow: "Contact",
                title: "Reach the team",
                subtitle: "Replace these details with your organization’s real contact methods.",
            }
            div {
                class: "grid three",
                Card {
                    Icon { icon: FaEnvelope, width: 16, height: 16 }
                    h3 { "Email" }
                    p { "hello@lumirights.org" }
                }
                Card {
                    Icon { icon: FaPhone, width: 16, height: 16 }
                    h3 { "Helpline" }
                    p { "+00 000 000 0000" }
                }
                Card {
                    Icon { icon: FaUsers, width: 16, height: 16 }
                    h3 { "Community" }
                    p { "Support circles meet weekly, online and in person." }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let config = use_site_config();

    rsx! {
        footer {
            class: "footer",
            div {
                strong { "{config.brand.name}" }
                span { " · {config.brand.tagline}" }
            }
            div {
                class: "footer-links",
                a { href: "#register", "Register" }
                a { href: "#news", "News" }
                a { href: "#contact", "Contact" }
            }
        }
    }
}
