//! Terminal host for the employee form

use std::io::Write;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use staff_client::EmployeeApi;

use crate::config::AppConfig;
use crate::error::FormError;
use crate::form::{Field, FormMode};
use crate::route::{HistoryNavigator, Navigator};
use crate::view::EmployeeFormView;

#[derive(Debug, Parser)]
#[command(name = "staff-form", version, about = "Add or edit employee records")]
pub struct Cli {
    #[command(flatten)]
    pub config: AppConfig,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create a new employee
    Add(AddArgs),
    /// Load an employee, apply changes and save it
    Edit(EditArgs),
    /// Load an employee and print the form
    Show {
        /// Identifier of the employee
        employee_id: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub id: Option<String>,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Debug, Clone, Args)]
pub struct EditArgs {
    /// Identifier of the employee to edit
    pub employee_id: String,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// active | inactive
    #[arg(long)]
    pub status: Option<String>,
}

impl FieldArgs {
    fn apply<A: EmployeeApi, N: Navigator>(&self, view: &mut EmployeeFormView<A, N>) {
        let values = [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Status, &self.status),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                view.set_field(field, value.clone());
            }
        }
    }
}

/// Parse-and-run entry point used by the binary
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let api = cli
        .config
        .client_config()
        .build_employee_client()
        .context("failed to build HTTP client")?;
    let mut stdout = std::io::stdout();
    execute(cli.command, api, &mut stdout).await
}

/// Run one command against `api`, writing the rendered form to `out`
pub async fn execute<A: EmployeeApi>(
    command: Command,
    api: A,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Command::Add(args) => {
            let mut view = EmployeeFormView::new(api, HistoryNavigator::new(), FormMode::Create);
            if let Some(id) = &args.id {
                view.set_field(Field::Id, id.clone());
            }
            args.fields.apply(&mut view);
            submit(&mut view, out).await
        }
        Command::Edit(args) => {
            let mut view = edit_view(api, &args.employee_id).await?;
            args.fields.apply(&mut view);
            submit(&mut view, out).await
        }
        Command::Show { employee_id } => {
            let view = edit_view(api, &employee_id).await?;
            writeln!(out, "{}", view.state())?;
            Ok(())
        }
    }
}

async fn edit_view<A: EmployeeApi>(
    api: A,
    employee_id: &str,
) -> anyhow::Result<EmployeeFormView<A, HistoryNavigator>> {
    let mode = FormMode::Edit {
        employee_id: employee_id.to_string(),
    };
    let mut view = EmployeeFormView::new(api, HistoryNavigator::new(), mode);
    view.load()
        .await
        .with_context(|| format!("failed to load employee {}", employee_id))?;
    Ok(view)
}

async fn submit<A: EmployeeApi>(
    view: &mut EmployeeFormView<A, HistoryNavigator>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match view.submit().await {
        Ok(route) => {
            writeln!(out, "Saved employee {}. Returning to {}", view.fields().id, route)?;
            Ok(())
        }
        Err(FormError::Invalid(errors)) => {
            writeln!(out, "{}", view.state())?;
            bail!("{} field(s) failed validation", errors.len())
        }
        Err(FormError::Client(e)) => Err(e).context("failed to save employee"),
    }
}
