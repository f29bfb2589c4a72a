// Plain-text rendering of the form for terminal hosts

use std::fmt;

use shared::EmployeeStatus;

use super::{Field, FormState};

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title())?;
        for field in Field::ALL {
            let value = self.value(field);
            let shown = if value.is_empty() {
                format!("<{}>", field.placeholder())
            } else {
                value.to_string()
            };
            let marker = if self.is_disabled(field) { " (locked)" } else { "" };
            writeln!(f, "{:<14}: {}{}", field.label(), shown, marker)?;
            if field == Field::Status {
                let options: Vec<&str> = EmployeeStatus::ALL.iter().map(|s| s.label()).collect();
                writeln!(f, "{:<14}  [{}]", "", options.join(" | "))?;
            }
            if let Some(message) = self.error(field) {
                writeln!(f, "{:<14}  ! {}", "", message)?;
            }
        }
        write!(f, "[{}] [Cancel]", self.submit_label())
    }
}
