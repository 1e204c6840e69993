//! Page view models
//!
//! One askama template struct per page. Every value a template touches is
//! precomputed here (formatted prices and dates, selected flags, placeholder
//! labels) so the templates contain no logic beyond loops and conditionals.

use askama::Template;

use crate::controllers::dashboard::DashboardData;
use crate::controllers::registration::{RegistrationForm, ValidationErrors};
use crate::models::Interest;
use crate::utils::helpers::{
    format_event_date_long, format_event_date_short, format_price_badge, format_price_full,
    truncate_text,
};

const MONTH_LABELS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Newest selectable birth year; the selector spans 100 years back
const MAX_BIRTH_YEAR: i32 = 2006;

/// Cap for tag badge labels in the compact event list
const TAG_BADGE_MAX_CHARS: usize = 18;

/// Cap for event descriptions shown outside the modal
const CARD_DESCRIPTION_MAX_CHARS: usize = 120;

/// Welcome screen with links to registration and login
#[derive(Template)]
#[template(path = "welcome.html")]
pub struct WelcomePage;

/// A `<select>` option with its preselected flag
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// An interest checkbox with its checked flag
pub struct InterestOption {
    pub id: String,
    pub name: String,
    pub checked: bool,
}

/// Registration form page; re-rendered with preserved input and inline
/// errors whenever validation or submission fails
#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage {
    pub notice: Option<String>,
    pub name: String,
    pub name_error: Option<String>,
    pub gender_options: Vec<SelectOption>,
    pub gender_error: Option<String>,
    pub day_options: Vec<SelectOption>,
    pub month_options: Vec<SelectOption>,
    pub year_options: Vec<SelectOption>,
    pub date_error: Option<String>,
    pub city: String,
    pub city_error: Option<String>,
    pub occupation: String,
    pub occupation_error: Option<String>,
    pub budget: String,
    pub budget_error: Option<String>,
    pub interest_options: Vec<InterestOption>,
    pub interests_error: Option<String>,
}

impl RegisterPage {
    pub fn new(
        catalog: &[Interest],
        form: &RegistrationForm,
        errors: ValidationErrors,
        notice: Option<String>,
    ) -> Self {
        let gender_options = ["male", "female", "other"]
            .iter()
            .map(|value| SelectOption {
                value: (*value).to_string(),
                label: capitalize(value),
                selected: form.gender == *value,
            })
            .collect();

        let day_options = (1..=31)
            .map(|day| SelectOption {
                value: day.to_string(),
                label: day.to_string(),
                selected: form.day == day.to_string(),
            })
            .collect();

        let month_options = MONTH_LABELS
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let value = (index + 1).to_string();
                SelectOption {
                    selected: form.month == value,
                    value,
                    label: (*label).to_string(),
                }
            })
            .collect();

        let year_options = (0..100)
            .map(|offset| {
                let year = MAX_BIRTH_YEAR - offset;
                SelectOption {
                    value: year.to_string(),
                    label: year.to_string(),
                    selected: form.year == year.to_string(),
                }
            })
            .collect();

        let interest_options = catalog
            .iter()
            .map(|interest| InterestOption {
                checked: form.interests.contains(&interest.id),
                id: interest.id.clone(),
                name: interest.name.clone(),
            })
            .collect();

        Self {
            notice,
            name: form.name.clone(),
            name_error: errors.name,
            gender_options,
            gender_error: errors.gender,
            day_options,
            month_options,
            year_options,
            date_error: errors.date_of_birth,
            city: form.city.clone(),
            city_error: errors.city,
            occupation: form.occupation.clone(),
            occupation_error: errors.occupation,
            budget: form.budget.clone(),
            budget_error: errors.budget,
            interest_options,
            interests_error: errors.interests,
        }
    }
}

/// Login form page
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub user_id: String,
    pub error: Option<String>,
}

/// Roster card for a subgroup member
pub struct MemberCard {
    pub name: String,
    pub age: u32,
    pub occupation: String,
}

/// Compact event list entry
pub struct EventCard {
    pub id: String,
    pub name: String,
    pub location: String,
    pub date_short: String,
    pub price_badge: String,
    pub tags: Vec<String>,
    pub summary: String,
}

/// Full event detail shown in the modal
pub struct EventModal {
    pub name: String,
    pub location: String,
    pub date_long: String,
    pub price_full: String,
    pub tags: Vec<String>,
    pub description: String,
}

/// Ready dashboard with profile, roster, event list, and optional modal
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub user_id: String,
    pub registered_notice: bool,
    pub name: String,
    pub age: u32,
    pub city: String,
    pub occupation: String,
    pub group_name: String,
    pub subgroup_name: String,
    pub interest_badges: Vec<String>,
    pub members: Vec<MemberCard>,
    pub events: Vec<EventCard>,
    pub modal: Option<EventModal>,
}

impl DashboardPage {
    pub fn new(user_id: &str, data: &DashboardData, registered_notice: bool) -> Self {
        let profile = &data.profile;

        let members = profile
            .subgroup_members
            .iter()
            .map(|member| MemberCard {
                name: member.name.clone(),
                age: member.age,
                occupation: member.occupation.clone(),
            })
            .collect();

        let events = data
            .events
            .iter()
            .map(|event| EventCard {
                id: event.id.clone(),
                name: event.name.clone(),
                location: event.location.clone(),
                date_short: format_event_date_short(event.date),
                price_badge: format_price_badge(event.ticket_price),
                tags: event
                    .tags
                    .iter()
                    .map(|tag| truncate_text(tag, TAG_BADGE_MAX_CHARS))
                    .collect(),
                summary: truncate_text(&event.description, CARD_DESCRIPTION_MAX_CHARS),
            })
            .collect();

        let modal = data.selected().map(|event| EventModal {
            name: event.name.clone(),
            location: event.location.clone(),
            date_long: format_event_date_long(event.date),
            price_full: format_price_full(event.ticket_price),
            tags: event.tags.clone(),
            description: event.description.clone(),
        });

        Self {
            user_id: user_id.to_string(),
            registered_notice,
            name: profile.name.clone(),
            age: profile.age,
            city: profile.city.clone(),
            occupation: profile.occupation.clone(),
            group_name: label_or_placeholder(profile.group.name.as_deref()),
            subgroup_name: label_or_placeholder(profile.subgroup.name.as_deref()),
            interest_badges: profile.interests.iter().map(|i| i.name.clone()).collect(),
            members,
            events,
            modal,
        }
    }
}

/// Not-found screen: the route's user id does not exist
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct UserNotFoundPage;

/// Fallback screen for backend transport failures, kept distinct from
/// not-found so an outage does not masquerade as a bad id
#[derive(Template)]
#[template(path = "unavailable.html")]
pub struct UnavailablePage;

fn label_or_placeholder(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => "Not assigned yet".to_string(),
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
