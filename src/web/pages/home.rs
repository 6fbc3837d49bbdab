use askama::Template;
use axum::{extract::State, response::IntoResponse};

use crate::{api::state::AppState, web::templates::HtmlTemplate};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub site_name: String,
    pub tagline: String,
}

pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    HtmlTemplate(HomeTemplate {
        site_name: state.settings.site.name.clone(),
        tagline: state.settings.site.tagline.clone(),
    })
}

pub struct EventInfo {
    pub name: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    /// Short facts rendered as chips (audience, cadence, format).
    pub details: &'static [&'static str],
}

pub struct FlagshipEvent {
    pub name: &'static str,
    pub kind: &'static str,
    pub organizer: &'static str,
    pub description: &'static str,
    pub prize_pool: &'static str,
    pub website: &'static str,
    pub status: &'static str,
    pub categories: &'static [&'static str],
}

pub static FLAGSHIP_EVENT: FlagshipEvent = FlagshipEvent {
    name: "Pearl CTF",
    kind: "Jeopardy Style CTF",
    organizer: "CyberLabs, IIT (ISM) Dhanbad",
    description: "Pearl CTF is our flagship global cybersecurity competition, featuring challenges from various categories including Web exploitation, Pwn, Forensics, Reverse Engineering, Cryptography, and more.",
    prize_pool: "$1000",
    website: "https://pearlctf.in/",
    status: "Annual Global Event",
    categories: &[
        "Web Exploitation",
        "Pwn",
        "Forensics",
        "Reverse Engineering",
        "Cryptography",
        "Misc",
    ],
};

pub static REGULAR_EVENTS: &[EventInfo] = &[
    EventInfo {
        name: "COTD",
        kind: "Daily Challenge",
        description: "Challenge of the Day - A daily cybersecurity challenge event specifically designed for first-year students to build their skills progressively.",
        color: "purple",
        details: &["First Year Students", "Daily"],
    },
    EventInfo {
        name: "Unixit",
        kind: "Wargame",
        description: "An interactive wargaming platform designed to introduce first-year students to practical cybersecurity scenarios and hands-on learning.",
        color: "rose",
        details: &["First Year Students", "Interactive Learning"],
    },
    EventInfo {
        name: "Ascension Arcade",
        kind: "Wargame",
        description: "An advanced wargaming platform featuring progressive challenges that test and enhance cybersecurity skills across multiple difficulty levels.",
        color: "amber",
        details: &["All Students", "Progressive Challenges"],
    },
    EventInfo {
        name: "WOC",
        kind: "Hackathon & Recruitment",
        description: "Winter of Code - A month-long intensive hackathon and recruitment contest designed specifically for first-year students to showcase their skills and join our community.",
        color: "blue",
        details: &["First Year Students", "1 Month"],
    },
];

#[derive(Template)]
#[template(path = "events.html")]
pub struct EventsTemplate {
    pub flagship: &'static FlagshipEvent,
    pub events: &'static [EventInfo],
}

pub async fn events_page() -> impl IntoResponse {
    HtmlTemplate(EventsTemplate {
        flagship: &FLAGSHIP_EVENT,
        events: REGULAR_EVENTS,
    })
}

#[derive(Template)]
#[template(path = "join_us.html")]
pub struct JoinUsTemplate;

pub async fn join_us_page() -> impl IntoResponse {
    HtmlTemplate(JoinUsTemplate)
}
