//! Registration page controller
//!
//! Collects the raw form fields, validates them locally, and transforms
//! valid input into the backend's create-user payload. Validation failures
//! are reported per field so the form can show each message inline while
//! preserving everything the user typed.

use crate::models::{CreateUserRequest, Gender};
use crate::utils::helpers::assemble_date;

/// Raw registration form input, exactly as submitted. The interest
/// selection arrives as repeated `interests` keys.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub gender: String,
    pub day: String,
    pub month: String,
    pub year: String,
    pub city: String,
    pub occupation: String,
    pub budget: String,
    pub interests: Vec<String>,
}

impl RegistrationForm {
    /// Build from decoded `application/x-www-form-urlencoded` pairs.
    /// Unknown keys are ignored; repeated `interests` keys accumulate.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (std::borrow::Cow<'a, str>, std::borrow::Cow<'a, str>)>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let value = value.into_owned();
            match key.as_ref() {
                "name" => form.name = value,
                "gender" => form.gender = value,
                "day" => form.day = value,
                "month" => form.month = value,
                "year" => form.year = value,
                "city" => form.city = value,
                "occupation" => form.occupation = value,
                "budget" => form.budget = value,
                "interests" => form.interests.push(value),
                _ => {}
            }
        }
        form
    }

    /// Validate all fields and produce the submission payload.
    ///
    /// The date of birth is assembled from the three selectors; impossible
    /// combinations such as February 30 are rejected rather than normalized.
    pub fn validate(&self) -> Result<CreateUserRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.name.trim();
        if name.chars().count() < 2 {
            errors.name = Some("Name must be at least 2 characters".to_string());
        }

        let gender = Gender::from_form_value(self.gender.trim());
        if gender.is_none() {
            errors.gender = Some("Please select a gender".to_string());
        }

        let dob = match (
            self.year.trim().parse::<i32>(),
            self.month.trim().parse::<u32>(),
            self.day.trim().parse::<u32>(),
        ) {
            (Ok(year), Ok(month), Ok(day)) => assemble_date(year, month, day),
            _ => None,
        };
        if dob.is_none() {
            errors.date_of_birth = Some("Please select a valid date of birth".to_string());
        }

        if self.interests.is_empty() {
            errors.interests = Some("Select at least one interest".to_string());
        }

        let city = self.city.trim();
        if city.chars().count() < 2 {
            errors.city = Some("City must be at least 2 characters".to_string());
        }

        let occupation = self.occupation.trim();
        if occupation.chars().count() < 2 {
            errors.occupation = Some("Occupation must be at least 2 characters".to_string());
        }

        let budget = self.budget.trim().parse::<f64>().ok();
        match budget {
            Some(value) if value >= 0.0 => {}
            _ => errors.budget = Some("Budget must be a positive number".to_string()),
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreateUserRequest {
            name: name.to_string(),
            gender: gender.expect("validated above"),
            dob: dob.expect("validated above"),
            city: city.to_string(),
            occupation: occupation.to_string(),
            budget: budget.expect("validated above"),
            interest_ids: self.interests.clone(),
        })
    }
}

/// Per-field validation messages, surfaced inline next to each field
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub interests: Option<String>,
    pub city: Option<String>,
    pub occupation: Option<String>,
    pub budget: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.gender.is_none()
            && self.date_of_birth.is_none()
            && self.interests.is_none()
            && self.city.is_none()
            && self.occupation.is_none()
            && self.budget.is_none()
    }
}
