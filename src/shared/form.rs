//! Form binding layer.
//!
//! A `FormState` registers a fixed set of fields, keeps the raw string each
//! controlled input reports, and checks the rules declared per field. Typed
//! values are read back through the accessors once validation has passed.

use std::collections::BTreeMap;

use crate::domain::models::SessionType;

/// Validation rule attached to a field. The first failing rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required(&'static str),
    WholeNumber(&'static str),
    Min { value: i64, message: &'static str },
    Max { value: i64, message: &'static str },
    SessionType(&'static str),
}

impl Rule {
    /// Returns the message when `value` breaks the rule
    pub fn check(&self, value: &str) -> Option<&'static str> {
        let value = value.trim();
        match *self {
            Rule::Required(message) => value.is_empty().then_some(message),
            // Presence is Required's job
            _ if value.is_empty() => None,
            Rule::WholeNumber(message) => (!is_whole_number(value)).then_some(message),
            // Whole numbers that overflow i64 are below any minimum or above any maximum
            Rule::Min { value: min, message } => match value.parse::<i64>() {
                Ok(number) => (number < min).then_some(message),
                Err(_) => value.starts_with('-').then_some(message),
            },
            Rule::Max { value: max, message } => match value.parse::<i64>() {
                Ok(number) => (number > max).then_some(message),
                Err(_) => (!value.starts_with('-')).then_some(message),
            },
            Rule::SessionType(message) => value.parse::<SessionType>().is_err().then_some(message),
        }
    }
}

/// Optional sign followed by ASCII digits only
fn is_whole_number(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Largest duration the service accepts, in minutes
pub const MAX_DURATION_MINUTES: u32 = u32::MAX;

/// Every input the two pages render
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Observations,
    Duration,
    SessionType,
    TherapistName,
    PatientName,
    DateTime,
    Summary,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Observations => "Quick Observations",
            Field::Duration => "Duration (minutes)",
            Field::SessionType => "Type",
            Field::TherapistName => "Therapist Name",
            Field::PatientName => "Patient Name",
            Field::DateTime => "Date & Time",
            Field::Summary => "Summary",
        }
    }

    /// Stable name used for logs and DOM ids
    pub fn name(&self) -> &'static str {
        match self {
            Field::Observations => "observations",
            Field::Duration => "duration",
            Field::SessionType => "type",
            Field::TherapistName => "therapist_name",
            Field::PatientName => "patient_name",
            Field::DateTime => "date_time",
            Field::Summary => "summary",
        }
    }

    pub fn rules(&self) -> &'static [Rule] {
        match self {
            Field::Observations => &[Rule::Required("Observations are required")],
            Field::Duration => &[
                Rule::Required("Duration is required"),
                Rule::WholeNumber("Duration must be a whole number"),
                Rule::Min { value: 1, message: "Duration must be at least 1 minute" },
                Rule::Max {
                    value: MAX_DURATION_MINUTES as i64,
                    message: "Duration is too large",
                },
            ],
            Field::SessionType => &[
                Rule::Required("Type is required"),
                Rule::SessionType("Select a valid session type"),
            ],
            Field::TherapistName => &[Rule::Required("Therapist name is required")],
            Field::PatientName => &[Rule::Required("Patient name is required")],
            Field::DateTime => &[Rule::Required("Date and time are required")],
            Field::Summary => &[Rule::Required("Summary is required")],
        }
    }

    pub fn validate(&self, value: &str) -> Option<&'static str> {
        self.rules().iter().find_map(|rule| rule.check(value))
    }
}

/// Fields of the creation form, in display order
pub const CREATE_FIELDS: [Field; 6] = [
    Field::Observations,
    Field::Duration,
    Field::SessionType,
    Field::TherapistName,
    Field::PatientName,
    Field::DateTime,
];

/// Fields of the edit form, in display order
pub const EDIT_FIELDS: [Field; 5] = [
    Field::PatientName,
    Field::SessionType,
    Field::DateTime,
    Field::Duration,
    Field::Summary,
];

pub type FieldErrors = BTreeMap<Field, &'static str>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    fields: Vec<Field>,
    values: BTreeMap<Field, String>,
    errors: FieldErrors,
    submitted: bool,
}

impl FormState {
    /// Register `fields`, all starting empty
    pub fn new(fields: &[Field]) -> Self {
        Self {
            fields: fields.to_vec(),
            values: fields.iter().map(|field| (*field, String::new())).collect(),
            errors: FieldErrors::new(),
            submitted: false,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_registered(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    /// Raw value of a field; empty for unregistered fields
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Store what the input reported. After a failed submit the field is
    /// re-checked right away so its message follows the user's edits.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if !self.is_registered(field) {
            tracing::warn!(field = field.name(), "Ignoring value for unregistered field");
            return;
        }
        let value = value.into();
        if self.submitted {
            match field.validate(&value) {
                Some(message) => self.errors.insert(field, message),
                None => self.errors.remove(&field),
            };
        }
        self.values.insert(field, value);
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Check every registered field, remembering the outcome
    pub fn validate(&mut self) -> Result<(), FieldErrors> {
        self.submitted = true;
        self.errors = self
            .fields
            .iter()
            .filter_map(|field| field.validate(self.value(*field)).map(|message| (*field, message)))
            .collect();

        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors.clone())
        }
    }

    /// Field value trimmed of surrounding whitespace
    pub fn text(&self, field: Field) -> String {
        self.value(field).trim().to_string()
    }

    pub fn duration(&self) -> Option<u32> {
        self.value(Field::Duration).trim().parse().ok().filter(|minutes| *minutes >= 1)
    }

    pub fn session_type(&self) -> Option<SessionType> {
        self.value(Field::SessionType).trim().parse().ok()
    }

    /// Back to empty values with no errors
    pub fn reset(&mut self) {
        *self = Self::new(&self.fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_create_form() -> FormState {
        let mut form = FormState::new(&CREATE_FIELDS);
        form.set(Field::Observations, "- restless\n- slept 4h");
        form.set(Field::Duration, "50");
        form.set(Field::SessionType, "therapy_session");
        form.set(Field::TherapistName, "Dr. Rivera");
        form.set(Field::PatientName, "J. Doe");
        form.set(Field::DateTime, "2024-09-12T14:30");
        form
    }

    #[test]
    fn test_complete_form_passes() {
        let mut form = complete_create_form();
        assert_eq!(form.validate(), Ok(()));
        assert_eq!(form.duration(), Some(50));
        assert_eq!(form.session_type(), Some(SessionType::TherapySession));
    }

    #[test]
    fn test_each_missing_required_field_is_reported() {
        let expected = [
            (Field::Observations, "Observations are required"),
            (Field::Duration, "Duration is required"),
            (Field::SessionType, "Type is required"),
            (Field::TherapistName, "Therapist name is required"),
            (Field::PatientName, "Patient name is required"),
            (Field::DateTime, "Date and time are required"),
        ];
        for (field, message) in expected {
            let mut form = complete_create_form();
            form.set(field, "");
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.len(), 1, "only {:?} should fail", field);
            assert_eq!(form.error(field), Some(message));
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut form = complete_create_form();
        form.set(Field::PatientName, "   ");
        assert!(form.validate().is_err());
        assert_eq!(form.error(Field::PatientName), Some("Patient name is required"));
    }

    #[test]
    fn test_duration_rules() {
        assert_eq!(Field::Duration.validate("0"), Some("Duration must be at least 1 minute"));
        assert_eq!(Field::Duration.validate("-5"), Some("Duration must be at least 1 minute"));
        assert_eq!(Field::Duration.validate("1.5"), Some("Duration must be a whole number"));
        assert_eq!(Field::Duration.validate("abc"), Some("Duration must be a whole number"));
        assert_eq!(Field::Duration.validate("1"), None);
        assert_eq!(Field::Duration.validate("90"), None);
        assert_eq!(Field::Duration.validate("4294967295"), None);
    }

    #[test]
    fn test_duration_beyond_wire_range_is_rejected() {
        assert_eq!(Field::Duration.validate("4294967296"), Some("Duration is too large"));
        assert_eq!(Field::Duration.validate("5000000000"), Some("Duration is too large"));
        assert_eq!(
            Field::Duration.validate("99999999999999999999999"),
            Some("Duration is too large")
        );
        assert_eq!(
            Field::Duration.validate("-99999999999999999999999"),
            Some("Duration must be at least 1 minute")
        );

        // Whatever validates must also be readable as minutes
        let mut form = FormState::new(&CREATE_FIELDS);
        form.set(Field::Duration, "4294967295");
        assert_eq!(form.duration(), Some(u32::MAX));
        form.set(Field::Duration, "5000000000");
        assert_eq!(form.duration(), None);
        let _ = form.validate();
        assert_eq!(form.error(Field::Duration), Some("Duration is too large"));
    }

    #[test]
    fn test_session_type_rule() {
        assert_eq!(Field::SessionType.validate(""), Some("Type is required"));
        assert_eq!(Field::SessionType.validate("group"), Some("Select a valid session type"));
        assert_eq!(Field::SessionType.validate("initial_consultation"), None);
    }

    #[test]
    fn test_errors_follow_edits_after_failed_submit() {
        let mut form = FormState::new(&CREATE_FIELDS);
        form.set(Field::Duration, "0");
        // Not submitted yet: no messages
        assert_eq!(form.error(Field::Duration), None);

        assert!(form.validate().is_err());
        assert_eq!(form.error(Field::Duration), Some("Duration must be at least 1 minute"));

        form.set(Field::Duration, "30");
        assert_eq!(form.error(Field::Duration), None);
        form.set(Field::Duration, "");
        assert_eq!(form.error(Field::Duration), Some("Duration is required"));
    }

    #[test]
    fn test_unregistered_field_is_ignored() {
        let mut form = FormState::new(&EDIT_FIELDS);
        form.set(Field::Observations, "ignored");
        assert_eq!(form.value(Field::Observations), "");
        assert!(!form.is_registered(Field::TherapistName));
    }

    #[test]
    fn test_reset_keeps_registration() {
        let mut form = complete_create_form();
        form.set(Field::Observations, "");
        let _ = form.validate();
        form.reset();
        assert_eq!(form, FormState::new(&CREATE_FIELDS));
        assert_eq!(form.fields().len(), 6);
    }
}
