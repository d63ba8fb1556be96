//! Form field validation
//!
//! A [`RuleSet`] is an ordered list of [`Rule`] variants. Rules are always
//! evaluated Required → `MinLength` → `MaxLength` → Pattern → Custom, and the
//! first failing rule wins.
//!
//! [`FieldState`] implements the defer-until-interaction policy: nothing is
//! reported before the first blur; after that every change re-validates. An
//! external (server side) error always takes precedence.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

/// Message produced by the `Required` rule
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Custom predicate: `Some(message)` on failure
pub type Predicate = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// A single validation rule
#[derive(Clone)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Pattern { regex: Regex, message: String },
    Custom(Predicate),
}

impl Rule {
    /// Evaluation rank (lower runs first)
    fn rank(&self) -> u8 {
        match self {
            Self::Required => 0,
            Self::MinLength(_) => 1,
            Self::MaxLength(_) => 2,
            Self::Pattern { .. } => 3,
            Self::Custom(_) => 4,
        }
    }

    fn check(&self, value: &str) -> Option<String> {
        match self {
            Self::Required => value.trim().is_empty().then(|| REQUIRED_MESSAGE.to_string()),
            Self::MinLength(min) => {
                (value.chars().count() < *min).then(|| format!("Must be at least {min} characters"))
            }
            Self::MaxLength(max) => {
                (value.chars().count() > *max).then(|| format!("Must be at most {max} characters"))
            }
            Self::Pattern { regex, message } => (!regex.is_match(value)).then(|| message.clone()),
            Self::Custom(predicate) => predicate(value),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "Required"),
            Self::MinLength(n) => write!(f, "MinLength({n})"),
            Self::MaxLength(n) => write!(f, "MaxLength({n})"),
            Self::Pattern { regex, .. } => write!(f, "Pattern({})", regex.as_str()),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Ordered rule list for one field
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self.rules.sort_by_key(Rule::rank);
        self
    }

    #[must_use]
    pub fn required(self) -> Self {
        self.rule(Rule::Required)
    }

    #[must_use]
    pub fn min_length(self, min: usize) -> Self {
        self.rule(Rule::MinLength(min))
    }

    #[must_use]
    pub fn max_length(self, max: usize) -> Self {
        self.rule(Rule::MaxLength(max))
    }

    /// Add a pattern rule; an invalid expression is logged and skipped
    #[must_use]
    pub fn pattern(self, pattern: &str, message: impl Into<String>) -> Self {
        match Regex::new(pattern) {
            Ok(regex) => self.rule(Rule::Pattern {
                regex,
                message: message.into(),
            }),
            Err(e) => {
                log::error!("Invalid validation pattern {pattern:?}: {e}");
                self
            }
        }
    }

    #[must_use]
    pub fn custom<F>(self, predicate: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.rule(Rule::Custom(Arc::new(predicate)))
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Required))
    }

    /// First failing rule's message
    ///
    /// An empty value on an optional field passes without running the
    /// remaining rules.
    pub fn validate(&self, value: &str) -> Option<String> {
        if value.trim().is_empty() && !self.is_required() {
            return None;
        }
        self.rules.iter().find_map(|rule| rule.check(value))
    }
}

// ========== 常用规则集 ==========

/// Email address
pub fn email() -> RuleSet {
    RuleSet::new()
        .required()
        .pattern(
            r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
            "Please enter a valid email address",
        )
}

/// Login password
pub fn password() -> RuleSet {
    RuleSet::new().required().min_length(8)
}

/// Phone number (digits, spaces, `+`, `-`, parentheses)
pub fn phone() -> RuleSet {
    RuleSet::new().pattern(
        r"^\+?[0-9 ()\-]{7,20}$",
        "Please enter a valid phone number",
    )
}

/// Person name
pub fn name() -> RuleSet {
    RuleSet::new().required().max_length(50)
}

pub fn ticket_subject() -> RuleSet {
    RuleSet::new().required().min_length(5).max_length(100)
}

pub fn ticket_body() -> RuleSet {
    RuleSet::new()
        .required()
        .min_length(20)
        .max_length(2000)
        .custom(|value| {
            value
                .split_whitespace()
                .nth(2)
                .is_none()
                .then(|| "Please describe the issue in a few words".to_string())
        })
}

/// One validated input
#[derive(Debug, Clone)]
pub struct FieldState {
    pub label: &'static str,
    pub value: String,
    pub touched: bool,
    rules: RuleSet,
    error: Option<String>,
    external_error: Option<String>,
    /// Mask the value when rendering
    pub secret: bool,
}

impl FieldState {
    pub fn new(label: &'static str, rules: RuleSet) -> Self {
        Self {
            label,
            value: String::new(),
            touched: false,
            rules,
            error: None,
            external_error: None,
            secret: false,
        }
    }

    #[must_use]
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules.is_required()
    }

    /// Replace the value (keystroke); re-validates once touched
    pub fn change(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.external_error = None;
        if self.touched {
            self.validate();
        }
    }

    pub fn push(&mut self, ch: char) {
        let mut value = std::mem::take(&mut self.value);
        value.push(ch);
        self.change(value);
    }

    pub fn pop(&mut self) {
        let mut value = std::mem::take(&mut self.value);
        value.pop();
        self.change(value);
    }

    /// Focus left the field
    pub fn blur(&mut self) {
        self.touched = true;
        self.validate();
    }

    /// Run the rules now, returning whether the value is valid
    pub fn validate(&mut self) -> bool {
        self.error = self.rules.validate(&self.value);
        self.error.is_none()
    }

    /// Error from outside (e.g. rejected submission)
    pub fn set_external_error(&mut self, error: Option<String>) {
        self.external_error = error;
    }

    /// Error to display: external first, internal only after touch
    pub fn visible_error(&self) -> Option<&str> {
        self.external_error
            .as_deref()
            .or_else(|| self.error.as_deref().filter(|_| self.touched))
    }

    /// Show the success indicator
    pub fn is_success(&self) -> bool {
        self.touched && !self.value.trim().is_empty() && self.visible_error().is_none()
    }

    /// Value as entered, or `None` when blank
    pub fn optional_value(&self) -> Option<String> {
        let trimmed = self.value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// A group of fields with one focused at a time
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<(&'static str, FieldState)>,
    pub focus: usize,
    /// Form level error (e.g. "Invalid email or password")
    pub error: Option<String>,
    pub submitting: bool,
}

impl FormState {
    pub fn new(fields: Vec<(&'static str, FieldState)>) -> Self {
        Self {
            fields,
            focus: 0,
            error: None,
            submitting: false,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, key: &str) -> Option<&FieldState> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, f)| f)
    }

    pub fn field_mut(&mut self, key: &str) -> Option<&mut FieldState> {
        self.fields
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, f)| f)
    }

    /// Trimmed value of a field, empty when unknown
    pub fn value(&self, key: &str) -> String {
        self.field(key)
            .map(|f| f.value.trim().to_string())
            .unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldState)> {
        self.fields.iter().map(|(k, f)| (*k, f))
    }

    pub fn focused_mut(&mut self) -> Option<&mut FieldState> {
        self.fields.get_mut(self.focus).map(|(_, f)| f)
    }

    /// Blur the focused field and move to the next
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        if let Some(field) = self.focused_mut() {
            field.blur();
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Blur the focused field and move to the previous
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        if let Some(field) = self.focused_mut() {
            field.blur();
        }
        self.focus = if self.focus == 0 {
            self.fields.len() - 1
        } else {
            self.focus - 1
        };
    }

    pub fn input(&mut self, ch: char) {
        self.error = None;
        if let Some(field) = self.focused_mut() {
            field.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_mut() {
            field.pop();
        }
    }

    /// Touch and validate every field; `true` when all pass
    pub fn submit(&mut self) -> bool {
        self.error = None;
        self.fields.iter_mut().fold(true, |ok, (_, field)| {
            field.touched = true;
            field.validate() && field.visible_error().is_none() && ok
        })
    }

    /// Attach server side errors to matching fields; unknown keys are ignored
    pub fn apply_server_errors(&mut self, errors: &BTreeMap<String, String>) {
        for (key, field) in &mut self.fields {
            field.set_external_error(errors.get(*key).cloned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_only_after_touch() {
        let mut field = FieldState::new("Email", RuleSet::new().required());

        field.change("   ");
        assert_eq!(field.visible_error(), None);

        field.blur();
        assert_eq!(field.visible_error(), Some(REQUIRED_MESSAGE));
        assert!(field.visible_error().unwrap_or_default().contains("required"));

        field.change("x");
        assert_eq!(field.visible_error(), None);
        field.change("");
        assert_eq!(field.visible_error(), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn rules_run_in_fixed_order_and_short_circuit() {
        // Added in reverse order on purpose
        let rules = RuleSet::new()
            .custom(|_| Some("custom".to_string()))
            .pattern("^[a-z]+$", "lowercase only")
            .max_length(4)
            .min_length(2)
            .required();

        assert_eq!(rules.validate(""), Some(REQUIRED_MESSAGE.to_string()));
        assert_eq!(rules.validate("a"), Some("Must be at least 2 characters".to_string()));
        assert_eq!(rules.validate("abcde"), Some("Must be at most 4 characters".to_string()));
        assert_eq!(rules.validate("AB"), Some("lowercase only".to_string()));
        assert_eq!(rules.validate("ab"), Some("custom".to_string()));
    }

    #[test]
    fn optional_empty_value_passes() {
        let rules = phone();
        assert_eq!(rules.validate(""), None);
        assert!(rules.validate("abc").is_some());
        assert_eq!(rules.validate("+1 (555) 010-0100"), None);
    }

    #[test]
    fn lengths_count_characters() {
        let rules = RuleSet::new().max_length(3);
        assert_eq!(rules.validate("日本語"), None);
    }

    #[test]
    fn external_error_takes_precedence() {
        let mut field = FieldState::new("Email", email()).with_value("bad");
        field.blur();
        assert_eq!(field.visible_error(), Some("Please enter a valid email address"));

        field.set_external_error(Some("Email already in use".to_string()));
        assert_eq!(field.visible_error(), Some("Email already in use"));

        // Typing clears the server error
        field.change("john@example.com");
        assert_eq!(field.visible_error(), None);
        assert!(field.is_success());
    }

    #[test]
    fn external_error_shows_before_touch() {
        let mut field = FieldState::new("Email", email());
        field.set_external_error(Some("Rejected".to_string()));
        assert!(!field.touched);
        assert_eq!(field.visible_error(), Some("Rejected"));
    }

    #[test]
    fn email_rules() {
        let rules = email();
        assert_eq!(rules.validate("john.doe@example.com"), None);
        assert!(rules.validate("john.doe@").is_some());
    }

    #[test]
    fn ticket_body_requires_words() {
        let rules = ticket_body();
        assert!(rules.validate("aaaaaaaaaaaaaaaaaaaaaaaa").is_some());
        assert_eq!(
            rules.validate("My site is down since this morning"),
            None
        );
    }

    #[test]
    fn form_submit_touches_everything() {
        let mut form = FormState::new(vec![
            ("email", FieldState::new("Email", email())),
            ("password", FieldState::new("Password", password()).secret()),
        ]);
        assert!(!form.submit());
        assert!(form.fields().all(|(_, f)| f.touched));
        assert_eq!(
            form.field("password").and_then(FieldState::visible_error),
            Some(REQUIRED_MESSAGE)
        );

        for ch in "john.doe@example.com".chars() {
            form.input(ch);
        }
        form.focus_next();
        for ch in "password123".chars() {
            form.input(ch);
        }
        assert!(form.submit());
        assert_eq!(form.value("email"), "john.doe@example.com");
    }

    #[test]
    fn focus_cycles_and_blurs() {
        let mut form = FormState::new(vec![
            ("a", FieldState::new("A", RuleSet::new().required())),
            ("b", FieldState::new("B", RuleSet::new())),
        ]);
        form.focus_prev();
        assert_eq!(form.focus, 1);
        assert!(form.field("a").is_some_and(|f| f.touched));
        form.focus_next();
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn server_errors_map_to_fields() {
        let mut form = FormState::new(vec![("email", FieldState::new("Email", email()))]);
        let mut errors = BTreeMap::new();
        errors.insert("email".to_string(), "Taken".to_string());
        errors.insert("unknown".to_string(), "ignored".to_string());
        form.apply_server_errors(&errors);
        assert_eq!(form.field("email").and_then(FieldState::visible_error), Some("Taken"));
    }
}
