//! QuestionnaireForm - editable form state behind the questionnaire screen.
//!
//! Holds raw text exactly as typed; shaping into a [`DecisionRequest`]
//! happens only at submit time through [`QuestionnaireForm::to_request`].

use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;
use crate::domain::user::UserProfile;

use super::{DecisionCategory, DecisionRequest, DecisionTimeline};

/// Ages the input surface accepts. Submission itself does not re-check this.
pub const AGE_RANGE: RangeInclusive<i64> = 13..=120;

/// Separator used when appending a goal suggestion to existing text.
pub const GOAL_SEPARATOR: &str = ", ";

/// Addressable fields of the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Age,
    Situation,
    DecisionDescription,
    Option1,
    Option2,
    Option3,
    Goals,
    Timeline,
    Category,
}

impl FormField {
    /// Fields in the order the questionnaire asks for them.
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Age,
            FormField::Category,
            FormField::Situation,
            FormField::DecisionDescription,
            FormField::Option1,
            FormField::Option2,
            FormField::Option3,
            FormField::Goals,
            FormField::Timeline,
        ]
    }

    /// Wire/field name, also used in validation errors.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Age => "age",
            FormField::Situation => "situation",
            FormField::DecisionDescription => "decision_description",
            FormField::Option1 => "option1",
            FormField::Option2 => "option2",
            FormField::Option3 => "option3",
            FormField::Goals => "goals",
            FormField::Timeline => "timeline",
            FormField::Category => "category",
        }
    }

    /// Prompt label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Age => "Your Age",
            FormField::Situation => "Current Situation",
            FormField::DecisionDescription => "What Decision Are You Facing?",
            FormField::Option1 => "Option 1",
            FormField::Option2 => "Option 2",
            FormField::Option3 => "Option 3 (optional)",
            FormField::Goals => "Your Life Goals & Values",
            FormField::Timeline => "Decision Timeline",
            FormField::Category => "Decision Category",
        }
    }

    /// Whether the field must be non-blank before submitting.
    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Option3)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw questionnaire state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionnaireForm {
    pub age: String,
    pub situation: String,
    pub decision_description: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub goals: String,
    pub timeline: DecisionTimeline,
    pub category: DecisionCategory,
    edited: HashSet<FormField>,
}

impl QuestionnaireForm {
    /// Empty form with the default timeline and category.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field from user input.
    ///
    /// Text fields take the value verbatim. `Timeline` and `Category` only
    /// accept their wire values; on error the form is left unchanged.
    pub fn set(&mut self, field: FormField, value: &str) -> Result<(), ValidationError> {
        match self.text_mut(field) {
            Some(text) => *text = value.to_string(),
            None if field == FormField::Timeline => {
                self.timeline = DecisionTimeline::from_str(value)?
            }
            None => self.category = DecisionCategory::from_str(value)?,
        }
        self.edited.insert(field);
        Ok(())
    }

    /// Current text of a field (timeline and category as wire values).
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Age => &self.age,
            FormField::Situation => &self.situation,
            FormField::DecisionDescription => &self.decision_description,
            FormField::Option1 => &self.option1,
            FormField::Option2 => &self.option2,
            FormField::Option3 => &self.option3,
            FormField::Goals => &self.goals,
            FormField::Timeline => self.timeline.as_str(),
            FormField::Category => self.category.as_str(),
        }
    }

    /// Backing text of a free-text field; `None` for timeline and category.
    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Age => Some(&mut self.age),
            FormField::Situation => Some(&mut self.situation),
            FormField::DecisionDescription => Some(&mut self.decision_description),
            FormField::Option1 => Some(&mut self.option1),
            FormField::Option2 => Some(&mut self.option2),
            FormField::Option3 => Some(&mut self.option3),
            FormField::Goals => Some(&mut self.goals),
            FormField::Timeline | FormField::Category => None,
        }
    }

    /// True once the user has set the field in this form's lifetime.
    pub fn is_edited(&self, field: FormField) -> bool {
        self.edited.contains(&field)
    }

    /// Seeds `age` and `goals` from a stored profile.
    ///
    /// Profile values are defaults only: a field the user already edited
    /// keeps its value.
    pub fn merge_profile(&mut self, profile: &UserProfile) {
        if let Some(age) = profile.age.as_deref() {
            if !self.is_edited(FormField::Age) {
                self.age = age.to_string();
            }
        }
        if let Some(goals) = profile.goals.as_deref() {
            if !self.is_edited(FormField::Goals) {
                self.goals = goals.to_string();
            }
        }
    }

    /// Appends a canned goal phrase.
    ///
    /// Uses [`GOAL_SEPARATOR`] when goals already has text, otherwise the
    /// phrase becomes the whole value. Never replaces or deduplicates.
    pub fn append_goal(&mut self, suggestion: &str) {
        if self.goals.is_empty() {
            self.goals = suggestion.to_string();
        } else {
            self.goals.push_str(GOAL_SEPARATOR);
            self.goals.push_str(suggestion);
        }
        self.edited.insert(FormField::Goals);
    }

    /// Assembles the options list: option1 and option2 always, option3 only
    /// when it has non-whitespace content.
    pub fn options(&self) -> Vec<String> {
        let mut options = vec![self.option1.clone(), self.option2.clone()];
        if !self.option3.trim().is_empty() {
            options.push(self.option3.clone());
        }
        options
    }

    /// Checks required fields and that age is an integer.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in FormField::all() {
            if field.is_required() && self.get(*field).trim().is_empty() {
                return Err(ValidationError::empty_field(field.name()));
            }
        }
        self.parse_age().map(|_| ())
    }

    fn parse_age(&self) -> Result<i64, ValidationError> {
        self.age.trim().parse::<i64>().map_err(|_| {
            ValidationError::invalid_format("age", format!("'{}' is not a whole number", self.age))
        })
    }

    /// Builds the request payload from the current values.
    ///
    /// Age is parsed but not range-checked; see [`AGE_RANGE`].
    pub fn to_request(&self) -> Result<DecisionRequest, ValidationError> {
        self.validate()?;
        Ok(DecisionRequest {
            age: self.parse_age()?,
            situation: self.situation.clone(),
            decision_description: self.decision_description.clone(),
            options: self.options(),
            goals: self.goals.clone(),
            timeline: self.timeline,
            category: self.category,
        })
    }
}

/// Input-surface check for the age field.
pub fn age_in_range(age: i64) -> bool {
    AGE_RANGE.contains(&age)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> QuestionnaireForm {
        let mut form = QuestionnaireForm::new();
        form.set(FormField::Age, "25").unwrap();
        form.set(FormField::Situation, "Stable job").unwrap();
        form.set(FormField::DecisionDescription, "Quit?").unwrap();
        form.set(FormField::Option1, "Stay").unwrap();
        form.set(FormField::Option2, "Leave").unwrap();
        form.set(FormField::Goals, "Growth").unwrap();
        form.set(FormField::Category, "career").unwrap();
        form
    }

    #[test]
    fn new_form_uses_defaults() {
        let form = QuestionnaireForm::new();
        assert_eq!(form.timeline, DecisionTimeline::OneToThreeMonths);
        assert_eq!(form.category, DecisionCategory::Lifestyle);
        assert!(form.age.is_empty());
        assert!(form.goals.is_empty());
    }

    #[test]
    fn options_skip_blank_option3() {
        let mut form = filled();
        form.set(FormField::Option3, "   ").unwrap();
        assert_eq!(form.options(), vec!["Stay", "Leave"]);
    }

    #[test]
    fn options_include_option3_in_entered_order() {
        let mut form = filled();
        form.set(FormField::Option3, "Part-time").unwrap();
        assert_eq!(form.options(), vec!["Stay", "Leave", "Part-time"]);
    }

    #[test]
    fn to_request_builds_payload() {
        let request = filled().to_request().unwrap();
        assert_eq!(request.age, 25);
        assert_eq!(request.category, DecisionCategory::Career);
        assert_eq!(request.timeline, DecisionTimeline::OneToThreeMonths);
        assert_eq!(request.options.len(), 2);
    }

    #[test]
    fn to_request_forwards_out_of_range_age() {
        let mut form = filled();
        form.set(FormField::Age, "7").unwrap();
        assert_eq!(form.to_request().unwrap().age, 7);
        assert!(!age_in_range(7));
    }

    #[test]
    fn to_request_rejects_missing_required_field() {
        let mut form = filled();
        form.set(FormField::Situation, "  ").unwrap();
        assert_eq!(
            form.to_request().unwrap_err(),
            ValidationError::empty_field("situation")
        );
    }

    #[test]
    fn to_request_rejects_non_numeric_age() {
        let mut form = filled();
        form.set(FormField::Age, "twenty").unwrap();
        assert_eq!(form.to_request().unwrap_err().field(), "age");
    }

    #[test]
    fn set_rejects_unknown_enumeration_value() {
        let mut form = filled();
        assert!(form.set(FormField::Timeline, "someday").is_err());
        assert_eq!(form.timeline, DecisionTimeline::OneToThreeMonths);
        assert!(!form.is_edited(FormField::Timeline));
    }

    #[test]
    fn set_then_get_round_trips_every_field() {
        let mut form = QuestionnaireForm::new();
        for field in FormField::all() {
            let value = match field {
                FormField::Timeline => "6-12 months",
                FormField::Category => "health",
                _ => "some text",
            };
            form.set(*field, value).unwrap();
            assert_eq!(form.get(*field), value);
            assert!(form.is_edited(*field));
        }
        assert_eq!(form.timeline, DecisionTimeline::SixToTwelveMonths);
    }

    #[test]
    fn append_goal_sets_when_empty_and_appends_otherwise() {
        let mut form = QuestionnaireForm::new();
        form.append_goal("Career growth");
        assert_eq!(form.goals, "Career growth");

        form.append_goal("Career growth");
        assert_eq!(form.goals, "Career growth, Career growth");
    }

    #[test]
    fn merge_profile_fills_untouched_fields() {
        let mut form = QuestionnaireForm::new();
        form.merge_profile(&UserProfile::new("31", "Stability"));
        assert_eq!(form.age, "31");
        assert_eq!(form.goals, "Stability");
    }

    #[test]
    fn merge_profile_never_overrides_user_edits() {
        let mut form = QuestionnaireForm::new();
        form.set(FormField::Age, "40").unwrap();
        form.merge_profile(&UserProfile::new("31", "Stability"));
        assert_eq!(form.age, "40");
        assert_eq!(form.goals, "Stability");
    }

    #[test]
    fn merge_profile_ignores_absent_values() {
        let mut form = QuestionnaireForm::new();
        form.merge_profile(&UserProfile::default());
        assert!(form.age.is_empty());
        assert!(form.goals.is_empty());
    }
}
