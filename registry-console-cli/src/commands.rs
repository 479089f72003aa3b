//! Command execution against a [`Console`]

use crate::cli::{CallArgs, Command, PackageCommand, UserCommand};
use crate::infrastructure::{CliError, Result};
use crate::presentation::{render, OutputFormat};
use crate::schema;
use registry_console_core::{
    ActionOutcome, Call, Console, OwnerRef, PackageActions, UserForm, UserPatch, VersionActions,
};
use serde_json::{json, Value};

/// Run one command; the returned text goes to stdout
///
/// Every command except `schema` runs behind the session gate.
pub async fn execute(
    console: &Console,
    command: Command,
    format: OutputFormat,
) -> Result<Option<String>> {
    if let Command::Schema { out } = &command {
        let written = schema::export(out)?;
        return Ok(Some(format!(
            "Wrote {} schemas to {}",
            written.len(),
            out.display()
        )));
    }

    let session = console.session().ensure().await?;
    tracing::debug!(login = %session.login, "Session ready");

    match command {
        Command::Login => format.render(&session, render::session).map(Some),
        Command::Packages(command) => packages(console, command, format).await,
        Command::Users(command) => users(console, command, format).await,
        Command::Call(args) => raw_call(console, args).await,
        Command::Schema { .. } => Ok(None),
    }
}

async fn packages(
    console: &Console,
    command: PackageCommand,
    format: OutputFormat,
) -> Result<Option<String>> {
    let tree = console.tree();

    match command {
        PackageCommand::List => {
            let packages = tree.load_packages().await?;
            format.render(&packages, render::packages).map(Some)
        }
        PackageCommand::Show { name } => {
            tree.load_packages().await?;
            if tree.package(&name).is_none() {
                return Err(CliError::NotFound(format!("package {name}")));
            }
            tree.expand(&name).await?;
            let package = tree
                .package(&name)
                .ok_or_else(|| CliError::NotFound(format!("package {name}")))?;
            format.render(&package, render::package).map(Some)
        }
        PackageCommand::Version { name, version } => {
            let detail = tree.version_actions(&name, &version).fetch_detail().await?;
            format.render(&detail, render::version_detail).map(Some)
        }
        PackageCommand::Hide { name, version } => {
            let outcome = tree.version_actions(&name, &version).hide().await?;
            outcome_text(outcome, format)
        }
        PackageCommand::Remove {
            name,
            version: Some(version),
        } => {
            let outcome = tree.version_actions(&name, &version).remove().await?;
            outcome_text(outcome, format)
        }
        PackageCommand::Remove {
            name,
            version: None,
        } => {
            let outcome = tree.package_actions(&name).remove().await?;
            outcome_text(outcome, format)
        }
        PackageCommand::Chown { name, owner } => {
            let id = console
                .users()
                .resolve_owner(&OwnerRef::parse(&owner))
                .await?;
            tree.package_actions(&name).change_owner(id).await?;
            Ok(Some(format!("Package \"{name}\" now owned by {owner} (#{id}).")))
        }
    }
}

async fn users(
    console: &Console,
    command: UserCommand,
    format: OutputFormat,
) -> Result<Option<String>> {
    let admin = console.users();

    match command {
        UserCommand::List => {
            let users = admin.load_users().await?;
            format.render(&users, render::users).map(Some)
        }
        UserCommand::Show { id } => {
            let detail = admin.user_detail(id).await?;
            format.render(&detail, render::user_detail).map(Some)
        }
        UserCommand::Create {
            login,
            email,
            password,
            admin: is_admin,
        } => {
            let (password_first, password_second) = match password {
                Some(password) => (password.clone(), password),
                None => {
                    let dialogs = console.gateway().dialogs();
                    let first = dialogs.prompt("Password", "").await.unwrap_or_default();
                    let second = dialogs
                        .prompt("Repeat password", "")
                        .await
                        .unwrap_or_default();
                    (first, second)
                }
            };
            let form = UserForm {
                login,
                email,
                password_first,
                password_second,
                is_admin,
            };
            let user = admin.create(&form).await?;
            format.render(&user, render::user).map(Some)
        }
        UserCommand::Modify {
            id,
            login,
            email,
            password,
            admin: is_admin,
        } => {
            let patch = UserPatch {
                login,
                email,
                is_admin,
                password,
            };
            if patch.is_empty() {
                return Err(CliError::InvalidArguments(
                    "nothing to modify, pass at least one field".to_string(),
                ));
            }
            admin.modify(id, patch).await?;
            Ok(None)
        }
        UserCommand::Remove { id } => {
            // The confirmation names the user, so the list has to be known
            admin.load_users().await?;
            let outcome = admin.remove(id).await?;
            outcome_text(outcome, format)
        }
    }
}

async fn raw_call(console: &Console, args: CallArgs) -> Result<Option<String>> {
    let mut call = Call::parse(&args.method, args.endpoint)?;
    if let Some(body) = args.body.as_deref() {
        call = call.with_body(serde_json::from_str(body)?);
    }
    if args.quiet {
        call = call.quiet();
    }
    if args.background {
        call = call.background();
    }

    match console.gateway().call(call).await? {
        Value::Null => Ok(None),
        value => Ok(Some(serde_json::to_string_pretty(&value)?)),
    }
}

/// Completed actions already notified the operator; cancellations are reported here
fn outcome_text(outcome: ActionOutcome, format: OutputFormat) -> Result<Option<String>> {
    match (format, outcome) {
        (OutputFormat::Json, outcome) => {
            let value = json!({ "completed": outcome.is_completed() });
            Ok(Some(serde_json::to_string_pretty(&value)?))
        }
        (OutputFormat::Text, ActionOutcome::Completed) => Ok(None),
        (OutputFormat::Text, ActionOutcome::Cancelled) => Ok(Some("Cancelled.".to_string())),
    }
}
