//! Staff Form - employee add/edit form
//!
//! A headless form view over the employee REST API:
//! - `form`: field values, validation and the state reducer
//! - `view`: the controller that loads, submits and clears the form
//! - `route`: routes and the navigation seam
//!
//! The `staff-form` binary hosts the view in a terminal.

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod logger;
pub mod route;
pub mod view;

pub use config::AppConfig;
pub use error::FormError;
pub use form::{Field, FieldErrors, FormAction, FormFields, FormMode, FormPhase, FormState};
pub use route::{HistoryNavigator, Navigator, Route};
pub use view::EmployeeFormView;
