//! Sign-in / sign-up credential form

use super::field::InputField;
use super::Form;
use crate::auth::Credentials;

/// Focusable slots of the credential form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthFocus {
    #[default]
    Email,
    Password,
    Submit,
    Toggle,
}

impl AuthFocus {
    const ORDER: [AuthFocus; 4] = [Self::Email, Self::Password, Self::Submit, Self::Toggle];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct AuthForm {
    pub email: InputField,
    pub password: InputField,
    pub focus: AuthFocus,
}

impl AuthForm {
    pub fn new() -> Self {
        Self {
            email: InputField::text("Email"),
            password: InputField::masked("Password"),
            focus: AuthFocus::Email,
        }
    }

    /// Start with a remembered email address
    pub fn with_email(email: String) -> Self {
        Self {
            email: InputField::text_with_value("Email", email),
            ..Self::new()
        }
    }

    /// The focused text field, if focus is on one
    pub fn active_input_mut(&mut self) -> Option<&mut InputField> {
        match self.focus {
            AuthFocus::Email => Some(&mut self.email),
            AuthFocus::Password => Some(&mut self.password),
            AuthFocus::Submit | AuthFocus::Toggle => None,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.as_text(), self.password.as_text())
    }
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for AuthForm {
    fn field_count(&self) -> usize {
        AuthFocus::ORDER.len()
    }
    fn active_field(&self) -> usize {
        self.focus.index()
    }
    fn set_active_field(&mut self, index: usize) {
        self.focus = AuthFocus::ORDER[index.min(AuthFocus::ORDER.len() - 1)];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_forward() {
        let mut form = AuthForm::new();
        let mut seen = vec![form.focus];
        for _ in 0..4 {
            form.next_field();
            seen.push(form.focus);
        }
        assert_eq!(
            seen,
            vec![
                AuthFocus::Email,
                AuthFocus::Password,
                AuthFocus::Submit,
                AuthFocus::Toggle,
                AuthFocus::Email,
            ]
        );
    }

    #[test]
    fn test_focus_cycles_backward() {
        let mut form = AuthForm::new();
        form.prev_field();
        assert_eq!(form.focus, AuthFocus::Toggle);
    }

    #[test]
    fn test_active_input_only_on_text_slots() {
        let mut form = AuthForm::new();
        form.active_input_mut().unwrap().push_char('a');
        form.focus = AuthFocus::Password;
        form.active_input_mut().unwrap().push_char('b');
        form.focus = AuthFocus::Submit;
        assert!(form.active_input_mut().is_none());

        let credentials = form.credentials();
        assert_eq!(credentials.email, "a");
        assert_eq!(credentials.password, "b");
    }

    #[test]
    fn test_password_is_masked() {
        assert!(AuthForm::new().password.is_masked);
        assert!(!AuthForm::new().email.is_masked);
    }
}
