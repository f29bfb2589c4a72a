//! Routes and navigation
//!
//! | path                 | route                      |
//! |----------------------|----------------------------|
//! | `/`                  | `Route::List`              |
//! | `/add`               | `Route::Create`            |
//! | `/edit/{employeeId}` | `Route::Edit { .. }`       |

use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Employee listing
    List,
    /// New employee form
    Create,
    /// Edit form for an existing employee
    Edit { employee_id: String },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::Create => "/add".to_string(),
            Self::Edit { employee_id } => format!("/edit/{}", employee_id),
        }
    }

    /// Parse a path; `None` for anything outside the route table
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Self::List),
            "/add" => Some(Self::Create),
            _ => {
                let employee_id = trimmed.strip_prefix("/edit/")?;
                if employee_id.is_empty() || employee_id.contains('/') {
                    return None;
                }
                Some(Self::Edit {
                    employee_id: employee_id.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Routing collaborator used by the form after a successful submit
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Navigator that records every route it is sent to
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<Route>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Route> {
        self.history.lock().ok()?.last().cloned()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history
            .lock()
            .map(|history| history.clone())
            .unwrap_or_default()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(path = %route, "Navigating");
        if let Ok(mut history) = self.history.lock() {
            history.push(route);
        }
    }
}
