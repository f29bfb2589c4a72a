//! Form state and reducer
//!
//! `FormState` is an immutable value. Every user or network event is
//! expressed as a [`FormAction`] and produces a new state through
//! [`FormState::reduce`].

use shared::{Employee, EmployeePayload, EmployeeStatus};

use super::validate::{FieldErrors, validate};
use super::Field;
use crate::route::Route;

/// Create vs. edit, chosen from the route
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    /// No identifier in the route; id input editable, submit creates
    #[default]
    Create,
    /// Identifier supplied by the route; id input disabled, submit replaces
    Edit { employee_id: String },
}

impl FormMode {
    /// Mode for a form route, `None` for routes that do not host the form
    pub fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::Create => Some(Self::Create),
            Route::Edit { employee_id } => Some(Self::Edit {
                employee_id: employee_id.clone(),
            }),
            Route::List => None,
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, Self::Create)
    }

    /// Route identifier in edit mode
    pub fn employee_id(&self) -> Option<&str> {
        match self {
            Self::Create => None,
            Self::Edit { employee_id } => Some(employee_id),
        }
    }
}

/// Lifecycle of the view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Loading,
    Submitting,
    Submitted,
}

/// Raw input values, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Status => &self.status,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Id => &mut self.id,
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Status => &mut self.status,
        }
    }
}

impl From<&Employee> for FormFields {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            name: employee.name.clone(),
            email: employee.email.clone(),
            status: employee.status.as_str().to_string(),
        }
    }
}

/// Events that change the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// User typed into or selected a value for a field
    SetField(Field, String),
    /// Fetch for edit started
    Loading,
    /// Fetch for edit succeeded
    Loaded(Employee),
    /// Fetch for edit failed; fields stay as they were
    LoadFailed,
    /// Result of a validation pass
    Validated(FieldErrors),
    /// Create/update request sent
    Submitting,
    /// Create/update request succeeded
    Submitted,
    /// Create/update request failed; fields stay populated
    SubmitFailed,
    /// Cancel: reset fields and errors
    Clear,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    mode: FormMode,
    phase: FormPhase,
    fields: FormFields,
    errors: FieldErrors,
}

impl FormState {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// The id input is read-only while editing an existing record
    pub fn is_disabled(&self, field: Field) -> bool {
        field == Field::Id && !self.mode.is_create()
    }

    pub fn title(&self) -> &'static str {
        if self.mode.is_create() {
            "Add Employee"
        } else {
            "Edit Employee"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.mode.is_create() { "Add" } else { "Update" }
    }

    /// Validate without changing state
    pub fn validate(&self) -> FieldErrors {
        validate(&self.fields, &self.mode)
    }

    /// Build the request body, or the errors that block it
    pub fn payload(&self) -> Result<EmployeePayload, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let status = self.fields.status.parse::<EmployeeStatus>().map_err(|_| {
            let mut errors = FieldErrors::new();
            errors.insert(Field::Status, super::validate::STATUS_UNKNOWN);
            errors
        })?;
        // The record keeps its route identifier while being edited
        let id = match &self.mode {
            FormMode::Edit { employee_id } => employee_id.clone(),
            FormMode::Create => self.fields.id.clone(),
        };
        Ok(EmployeePayload {
            id,
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            status,
        })
    }

    /// Apply one action, producing the next state
    pub fn reduce(self, action: FormAction) -> Self {
        match action {
            FormAction::SetField(field, value) => {
                if self.is_disabled(field) {
                    return self;
                }
                let mut fields = self.fields;
                *fields.slot(field) = value;
                Self { fields, ..self }
            }
            FormAction::Loading => Self {
                phase: FormPhase::Loading,
                ..self
            },
            FormAction::Loaded(employee) => Self {
                phase: FormPhase::Editing,
                fields: FormFields::from(&employee),
                ..self
            },
            FormAction::LoadFailed | FormAction::SubmitFailed => Self {
                phase: FormPhase::Editing,
                ..self
            },
            FormAction::Validated(errors) => Self { errors, ..self },
            FormAction::Submitting => Self {
                phase: FormPhase::Submitting,
                ..self
            },
            FormAction::Submitted => Self {
                phase: FormPhase::Submitted,
                ..self
            },
            FormAction::Clear => Self {
                phase: FormPhase::Editing,
                fields: FormFields::default(),
                errors: FieldErrors::default(),
                ..self
            },
        }
    }
}
