//! Shared test payloads matching the backend's wire shapes

use serde_json::{json, Value};

pub const TEST_USER_ID: &str = "M1234";

/// Interest catalog as served by `GET /api/interests` (numeric ids)
pub fn interest_catalog() -> Value {
    json!([
        {"id": 1, "name": "Sports"},
        {"id": 2, "name": "Music"},
        {"id": 3, "name": "Movies"},
        {"id": 4, "name": "Technology"},
        {"id": 5, "name": "Travel"}
    ])
}

/// Full profile as served by `GET /api/user-detail/{id}/`
pub fn user_profile(user_id: &str) -> Value {
    json!({
        "id": "42",
        "user_id": user_id,
        "name": "Jane Doe",
        "age": 28,
        "city": "New York",
        "occupation": "Software Engineer",
        "interests": [
            {"id": "2", "name": "Music"},
            {"id": "4", "name": "Technology"},
            {"id": "5", "name": "Travel"}
        ],
        "group": {"name": "Tech Enthusiasts"},
        "subgroup": {"name": "Frontend Developers"},
        "subgroupMembers": [
            {"id": "1001", "name": "John Smith", "age": 32, "occupation": "UX Designer"},
            {"id": "1002", "name": "Alice Johnson", "age": 26, "occupation": "Frontend Developer"}
        ]
    })
}

/// Event list as served by `GET /api/events/user/{id}`
pub fn recommended_events() -> Value {
    json!([
        {
            "id": "event_1",
            "name": "Sunday Park Meetup",
            "location": "Central Park",
            "ticketPrice": 0,
            "date": "2024-07-01",
            "tags": ["outdoors", "social"],
            "description": "A relaxed afternoon in the park."
        },
        {
            "id": "event_2",
            "name": "Tech Conference 2024",
            "location": "Moscone Center, San Francisco",
            "ticketPrice": 45.0,
            "date": "2024-06-14",
            "tags": ["tech", "networking"],
            "description": "Keynotes, workshops, and networking."
        }
    ])
}

/// A urlencoded registration form body with two interests selected
pub fn registration_form_body() -> String {
    [
        "name=Jane+Doe",
        "gender=female",
        "day=14",
        "month=6",
        "year=1996",
        "city=New+York",
        "occupation=Engineer",
        "budget=250",
        "interests=2",
        "interests=4",
    ]
    .join("&")
}
