//! Static page content: programs and upcoming events.

/// A program area shown in the "Our work" section.
#[derive(Clone, Debug, PartialEq)]
pub struct Campaign {
    pub title: &'static str,
    pub description: &'static str,
}

/// An upcoming event listing.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub place: &'static str,
    pub note: &'static str,
}

pub const CAMPAIGNS: &[Campaign] = &[
    Campaign {
        title: "Legal & Policy Advocacy",
        description: "We work with lawyers and allies to push anti-discrimination protections and challenge harmful policies.",
    },
    Campaign {
        title: "Community Support",
        description: "Peer circles, resource navigation, safety planning, and referrals to trusted local services.",
    },
    Campaign {
        title: "Education & Visibility",
        description: "Workshops, stories, and media toolkits that humanize lesbian lives and reduce stigma.",
    },
    Campaign {
        title: "Mutual Aid",
        description: "Rapid support for urgent needs, prioritizing confidentiality and community care.",
    },
];

pub const EVENTS: &[Event] = &[
    Event {
        title: "Know Your Rights: Workplace",
        date: "Jan 08, 2026",
        time: "6:30 PM",
        place: "Online",
        note: "Free, captioned session with Q&A",
    },
    Event {
        title: "Community Meetup + Support Circle",
        date: "Jan 18, 2026",
        time: "4:00 PM",
        place: "City Center",
        note: "Location shared after RSVP",
    },
    Event {
        title: "Storytelling for Change",
        date: "Feb 02, 2026",
        time: "7:00 PM",
        place: "Online",
        note: "Learn safe ways to share your story",
    },
];
