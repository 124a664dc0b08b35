//! Form state container shared by every create/edit dialog

use std::collections::{BTreeMap, HashSet};

/// Validation messages keyed by field
pub type FieldErrors = BTreeMap<&'static str, String>;

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// One of a fixed set of options, cycled with left/right
    Choice(&'static [&'static str]),
}

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self { key, label, kind: FieldKind::Text }
    }

    pub const fn choice(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self { key, label, kind: FieldKind::Choice(options) }
    }
}

/// Values edited by a form, plus their validation rules.
pub trait FormModel: Clone + PartialEq {
    /// Fields in display order
    fn fields() -> &'static [FieldSpec];

    fn get(&self, key: &str) -> String;

    fn set(&mut self, key: &str, value: &str);

    /// Check every field, returning one message per invalid field
    fn validate(&self) -> FieldErrors;
}

/// Current values, touched flags, errors and focus of one form.
#[derive(Debug, Clone)]
pub struct FormState<M: FormModel> {
    values: M,
    initial: M,
    touched: HashSet<&'static str>,
    errors: FieldErrors,
    focus: usize,
}

impl<M: FormModel> FormState<M> {
    pub fn new(values: M) -> Self {
        Self {
            initial: values.clone(),
            values,
            touched: HashSet::new(),
            errors: FieldErrors::new(),
            focus: 0,
        }
    }

    #[cfg(test)]
    pub fn values(&self) -> &M {
        &self.values
    }

    pub fn value(&self, key: &str) -> String {
        self.values.get(key)
    }

    /// Update a field. Errors are refreshed only if the field was already
    /// touched, so typing into a fresh field does not flash messages.
    pub fn change(&mut self, key: &str, value: &str) {
        self.values.set(key, value);
        if self.touched.contains(key) {
            self.errors = self.values.validate();
        }
    }

    /// Mark a field as visited and re-run validation
    pub fn blur(&mut self, key: &str) {
        if let Some(spec) = M::fields().iter().find(|f| f.key == key) {
            self.touched.insert(spec.key);
        }
        self.errors = self.values.validate();
    }

    /// Touch every field and validate; returns the values when valid
    pub fn submit(&mut self) -> Result<M, FieldErrors> {
        for spec in M::fields() {
            self.touched.insert(spec.key);
        }
        self.errors = self.values.validate();
        if self.errors.is_empty() {
            Ok(self.values.clone())
        } else {
            tracing::debug!("Form rejected with {} error(s)", self.errors.len());
            Err(self.errors.clone())
        }
    }

    pub fn is_touched(&self, key: &str) -> bool {
        self.touched.contains(key)
    }

    /// Error for a field, shown only once the field has been touched
    pub fn visible_error(&self, key: &str) -> Option<&str> {
        if self.is_touched(key) {
            self.errors.get(key).map(|s| s.as_str())
        } else {
            None
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    /// Restore initial values and forget touched state
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.touched.clear();
        self.errors.clear();
        self.focus = 0;
    }

    pub fn focused(&self) -> &'static FieldSpec {
        &M::fields()[self.focus]
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    /// Move focus forward, blurring the field being left
    pub fn focus_next(&mut self) {
        let len = M::fields().len();
        if len == 0 {
            return;
        }
        self.blur(M::fields()[self.focus].key);
        self.focus = (self.focus + 1) % len;
    }

    pub fn focus_prev(&mut self) {
        let len = M::fields().len();
        if len == 0 {
            return;
        }
        self.blur(M::fields()[self.focus].key);
        self.focus = if self.focus == 0 { len - 1 } else { self.focus - 1 };
    }

    /// Jump to a field by key without blurring; unknown keys are ignored
    pub fn focus_field(&mut self, key: &str) {
        if let Some(idx) = M::fields().iter().position(|f| f.key == key) {
            self.focus = idx;
        }
    }

    /// Step the focused choice field to its next/previous option
    pub fn cycle_choice(&mut self, forward: bool) {
        let spec = self.focused();
        let FieldKind::Choice(options) = spec.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = self.values.get(spec.key);
        let idx = options.iter().position(|o| *o == current).unwrap_or(0);
        let next = if forward {
            (idx + 1) % options.len()
        } else if idx == 0 {
            options.len() - 1
        } else {
            idx - 1
        };
        self.change(spec.key, options[next]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Login {
        user: String,
        role: String,
    }

    const ROLES: &[&str] = &["admin", "staff"];
    const FIELDS: &[FieldSpec] = &[
        FieldSpec::text("user", "User"),
        FieldSpec::choice("role", "Role", ROLES),
    ];

    impl FormModel for Login {
        fn fields() -> &'static [FieldSpec] {
            FIELDS
        }

        fn get(&self, key: &str) -> String {
            match key {
                "user" => self.user.clone(),
                "role" => self.role.clone(),
                _ => String::new(),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            match key {
                "user" => self.user = value.to_string(),
                "role" => self.role = value.to_string(),
                _ => {}
            }
        }

        fn validate(&self) -> FieldErrors {
            let mut errors = FieldErrors::new();
            if self.user.trim().is_empty() {
                errors.insert("user", "User is required".to_string());
            }
            errors
        }
    }

    fn form() -> FormState<Login> {
        FormState::new(Login { user: String::new(), role: "admin".to_string() })
    }

    #[test]
    fn errors_hidden_until_field_is_touched() {
        let mut form = form();
        form.change("user", "");
        assert_eq!(form.visible_error("user"), None);

        form.blur("user");
        assert_eq!(form.visible_error("user"), Some("User is required"));

        form.change("user", "amy");
        assert_eq!(form.visible_error("user"), None);
    }

    #[test]
    fn submit_touches_every_field() {
        let mut form = form();
        let errors = form.submit().unwrap_err();
        assert!(errors.contains_key("user"));
        assert!(form.is_touched("role"));

        form.change("user", "amy");
        let values = form.submit().unwrap();
        assert_eq!(values.user, "amy");
    }

    #[test]
    fn dirty_and_reset() {
        let mut form = form();
        assert!(!form.is_dirty());
        form.change("user", "bob");
        form.blur("user");
        assert!(form.is_dirty());

        form.reset();
        assert!(!form.is_dirty());
        assert!(!form.is_touched("user"));
        assert_eq!(form.value("user"), "");
    }

    #[test]
    fn focus_wraps_and_blurs_previous_field() {
        let mut form = form();
        assert_eq!(form.focused().key, "user");
        form.focus_next();
        assert_eq!(form.focused().key, "role");
        assert!(form.is_touched("user"));
        form.focus_next();
        assert_eq!(form.focus_index(), 0);
        form.focus_prev();
        assert_eq!(form.focused().key, "role");
    }

    #[test]
    fn cycle_choice_moves_through_options() {
        let mut form = form();
        form.cycle_choice(true);
        // focused field is text, nothing happens
        assert_eq!(form.value("role"), "admin");

        form.focus_next();
        form.cycle_choice(true);
        assert_eq!(form.value("role"), "staff");
        form.cycle_choice(true);
        assert_eq!(form.value("role"), "admin");
        form.cycle_choice(false);
        assert_eq!(form.value("role"), "staff");
    }
}
