//! Form input layer
//!
//! Text inputs and the focus cycling shared by the sign-in form and the
//! builder screen.

mod auth_form;
mod field;

pub use auth_form::{AuthFocus, AuthForm};
pub use field::InputField;

/// Focus cycling over a fixed number of slots
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}
