//! HTML template rendering handlers for the registration page.

mod form;

pub use form::{
    RegistrationFormInput, RegistrationTemplate, form_handler, submit_form_handler,
};
