use super::logging;
use super::render::{render_messages, render_students};
use super::setup::{Cli, Commands};
use chrono::NaiveDate;
use clap::Parser;
use rollcall::api::StudentApi;
use rollcall::config::{load_env_file, ConnectionConfig};
use rollcall::error::Result;
use rollcall::model::{NewStudent, StudentId};
use rollcall::store::pg::PgStore;
use rollcall::store::StudentStore;
use std::io::IsTerminal;
use tracing::debug;

struct AppContext<S: StudentStore> {
    api: StudentApi<S>,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Resolve everything before the first connection attempt
    load_env_file(cli.env_file.as_deref())?;
    let mut ctx = init_context()?;

    debug!(command = ?cli.command, "dispatching");
    let mut out = String::new();
    let result = dispatch(&mut ctx, cli.command, &mut out);
    // A status line already produced is shown even if the re-list failed
    print!("{}", out);
    result
}

fn init_context() -> Result<AppContext<PgStore>> {
    let config = ConnectionConfig::from_env()?;
    debug!(?config, "resolved connection config");
    Ok(AppContext {
        api: StudentApi::new(PgStore::new(config)),
        use_color: std::io::stdout().is_terminal(),
    })
}

/// Run one command, appending everything it prints to `out`.
fn dispatch<S: StudentStore>(
    ctx: &mut AppContext<S>,
    command: Commands,
    out: &mut String,
) -> Result<()> {
    match command {
        Commands::GetAll => handle_get_all(ctx, out),
        Commands::Add {
            first,
            last,
            email,
            date,
        } => handle_add(ctx, out, first, last, email, date),
        Commands::UpdateEmail { id, email } => handle_update_email(ctx, out, id, &email),
        Commands::Delete { id } => handle_delete(ctx, out, id),
    }
}

fn handle_get_all<S: StudentStore>(ctx: &mut AppContext<S>, out: &mut String) -> Result<()> {
    let result = ctx.api.list_students()?;
    out.push_str(&render_students(&result.students));
    Ok(())
}

fn handle_add<S: StudentStore>(
    ctx: &mut AppContext<S>,
    out: &mut String,
    first: String,
    last: String,
    email: String,
    date: Option<NaiveDate>,
) -> Result<()> {
    let student = NewStudent::new(first, last, email, date)?;
    let result = ctx.api.add_student(student)?;
    out.push_str(&render_messages(&result.messages, ctx.use_color));
    handle_get_all(ctx, out)
}

fn handle_update_email<S: StudentStore>(
    ctx: &mut AppContext<S>,
    out: &mut String,
    id: StudentId,
    email: &str,
) -> Result<()> {
    let result = ctx.api.update_email(id, email)?;
    out.push_str(&render_messages(&result.messages, ctx.use_color));
    handle_get_all(ctx, out)
}

fn handle_delete<S: StudentStore>(
    ctx: &mut AppContext<S>,
    out: &mut String,
    id: StudentId,
) -> Result<()> {
    let result = ctx.api.delete_student(id)?;
    out.push_str(&render_messages(&result.messages, ctx.use_color));
    handle_get_all(ctx, out)
}
