use axum::{response::IntoResponse, Json};
use crate::api::dtos::responses::{HomeResponse, PageLink};

/// The navigable pages of the app. The router derives one route per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Register,
    Agenda,
    SpeakersSponsors,
    CheckIn,
    Feedback,
    Analytics,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Register,
        Page::Agenda,
        Page::SpeakersSponsors,
        Page::CheckIn,
        Page::Feedback,
        Page::Analytics,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Register => "register",
            Page::Agenda => "agenda",
            Page::SpeakersSponsors => "speakers-sponsors",
            Page::CheckIn => "check-in",
            Page::Feedback => "feedback",
            Page::Analytics => "analytics",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Register => "Register",
            Page::Agenda => "Agenda",
            Page::SpeakersSponsors => "Speakers & Sponsors",
            Page::CheckIn => "Check-in",
            Page::Feedback => "Feedback",
            Page::Analytics => "Analytics",
        }
    }

    pub fn path(&self) -> String {
        format!("/api/v1/{}", self.slug())
    }

    pub fn link(&self) -> PageLink {
        PageLink { page: self.slug(), title: self.title(), path: self.path() }
    }
}

pub fn navigation() -> Vec<PageLink> {
    Page::ALL.iter().map(Page::link).collect()
}

pub async fn list_pages() -> impl IntoResponse {
    Json(navigation())
}

pub async fn home() -> impl IntoResponse {
    Json(HomeResponse {
        headline: "EventSync: Your Event Hub",
        tagline: "Plan, Attend, Succeed!",
        pages: navigation(),
    })
}
