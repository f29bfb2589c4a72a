//! Employee form view
//!
//! Owns the form state and its two collaborators. The host decides when
//! to call [`EmployeeFormView::load`]; nothing is fetched implicitly.

use shared::Employee;
use staff_client::{ClientResult, EmployeeApi};

use crate::error::FormError;
use crate::form::{Field, FieldErrors, FormAction, FormFields, FormMode, FormState};
use crate::route::{Navigator, Route};

pub struct EmployeeFormView<A, N> {
    api: A,
    navigator: N,
    state: FormState,
}

impl<A: EmployeeApi, N: Navigator> EmployeeFormView<A, N> {
    pub fn new(api: A, navigator: N, mode: FormMode) -> Self {
        Self {
            api,
            navigator,
            state: FormState::new(mode),
        }
    }

    /// View for a form route; `None` when the route does not host the form
    pub fn for_route(api: A, navigator: N, route: &Route) -> Option<Self> {
        FormMode::from_route(route).map(|mode| Self::new(api, navigator, mode))
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn fields(&self) -> &FormFields {
        self.state.fields()
    }

    pub fn errors(&self) -> &FieldErrors {
        self.state.errors()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn is_field_disabled(&self, field: Field) -> bool {
        self.state.is_disabled(field)
    }

    pub fn title(&self) -> &'static str {
        self.state.title()
    }

    pub fn submit_label(&self) -> &'static str {
        self.state.submit_label()
    }

    pub fn dispatch(&mut self, action: FormAction) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(FormAction::SetField(field, value.into()));
    }

    /// Fetch the record named by the route and populate the form.
    ///
    /// Returns `Ok(None)` in create mode. On failure the fields are left
    /// untouched and the error is handed back to the host.
    pub async fn load(&mut self) -> ClientResult<Option<Employee>> {
        let Some(employee_id) = self.state.mode().employee_id().map(str::to_owned) else {
            return Ok(None);
        };

        self.dispatch(FormAction::Loading);
        match self.api.get_employee(&employee_id).await {
            Ok(employee) => {
                tracing::debug!(employee_id = %employee_id, "Loaded employee for edit");
                self.dispatch(FormAction::Loaded(employee.clone()));
                Ok(Some(employee))
            }
            Err(e) => {
                tracing::error!(employee_id = %employee_id, error = %e, "Error fetching employee");
                self.dispatch(FormAction::LoadFailed);
                Err(e)
            }
        }
    }

    /// Validate and send the form.
    ///
    /// Edit mode replaces the record under the route identifier, create mode
    /// posts a new one. On success navigates to the listing and returns the
    /// route it navigated to.
    pub async fn submit(&mut self) -> Result<Route, FormError> {
        let errors = self.state.validate();
        self.dispatch(FormAction::Validated(errors.clone()));
        if !errors.is_empty() {
            tracing::warn!(errors = %errors, "Submit blocked by validation");
            return Err(FormError::Invalid(errors));
        }
        let payload = self.state.payload().map_err(FormError::Invalid)?;

        self.dispatch(FormAction::Submitting);
        let result = match self.state.mode() {
            FormMode::Edit { employee_id } => {
                self.api.update_employee(employee_id, &payload).await
            }
            FormMode::Create => self.api.create_employee(&payload).await,
        };

        match result {
            Ok(()) => {
                self.dispatch(FormAction::Submitted);
                self.navigator.navigate(Route::List);
                Ok(Route::List)
            }
            Err(e) => {
                tracing::error!(employee_id = %payload.id, error = %e, "Error submitting form");
                self.dispatch(FormAction::SubmitFailed);
                Err(e.into())
            }
        }
    }

    /// Cancel: reset fields and errors without touching the network
    pub fn clear(&mut self) {
        self.dispatch(FormAction::Clear);
    }
}
