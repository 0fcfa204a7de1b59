use super::Connection;
use crate::{
    libs::{
        data_storage::DataStorage,
        formatter::format_meal,
        messages::Message,
        schedule::{next_meal, ScheduleDraft, UNKNOWN_AMOUNT, UNKNOWN_TIME},
        time::MealTime,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    #[command(subcommand)]
    command: Option<ScheduleCommand>,
}

#[derive(Debug, Subcommand)]
enum ScheduleCommand {
    #[command(about = "List the daily feeding schedule")]
    List(ListArgs),
    #[command(about = "Add a daily feeding")]
    Add(AddArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Cat id; defaults to the current cat
    #[arg(short, long)]
    cat: Option<String>,
}

#[derive(Debug, Args)]
struct AddArgs {
    #[arg(short, long)]
    cat: Option<String>,
    /// Feeding time as HH:MM
    #[arg(short, long)]
    time: Option<String>,
    /// Portion in grams
    #[arg(short, long)]
    amount: Option<u32>,
}

#[derive(Debug, Clone, Copy)]
enum DraftAction {
    Earlier,
    Later,
    Less,
    More,
    Save,
    Cancel,
}

const DRAFT_ACTIONS: [(&str, DraftAction); 6] = [
    ("Earlier (-30 min)", DraftAction::Earlier),
    ("Later (+30 min)", DraftAction::Later),
    ("Less (-10 g)", DraftAction::Less),
    ("More (+10 g)", DraftAction::More),
    ("Save", DraftAction::Save),
    ("Cancel", DraftAction::Cancel),
];

pub async fn cmd(schedule_args: ScheduleArgs, storage: &DataStorage) -> Result<()> {
    let conn = Connection::open(storage)?;

    match schedule_args.command.unwrap_or(ScheduleCommand::List(ListArgs { cat: None })) {
        ScheduleCommand::List(args) => list(&conn, args).await,
        ScheduleCommand::Add(args) => add(&conn, args).await,
    }
}

async fn list(conn: &Connection, args: ListArgs) -> Result<()> {
    let cat = conn.resolve_cat(args.cat.as_deref()).await?;
    let entries = conn.api.schedules(&cat.id).await?;

    let Some(meal) = next_meal(&entries) else {
        msg_info!(Message::NoSchedules(cat.name));
        msg_info!(Message::NextMeal(format!("{} - {}", UNKNOWN_TIME, UNKNOWN_AMOUNT)));
        return Ok(());
    };

    msg_print!(Message::SchedulesHeader(cat.name), true);
    View::schedules(&entries)?;
    msg_info!(Message::NextMeal(format_meal(&meal)));
    Ok(())
}

async fn add(conn: &Connection, args: AddArgs) -> Result<()> {
    let cat = conn.resolve_cat(args.cat.as_deref()).await?;

    let draft = if args.time.is_none() && args.amount.is_none() {
        match edit_draft(ScheduleDraft::default())? {
            Some(draft) => draft,
            None => {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
        }
    } else {
        draft_from_flags(args.time.as_deref(), args.amount)?
    };

    conn.api.add_schedule(&cat.id, &draft).await?;
    msg_success!(Message::ScheduleSaved(cat.name));
    Ok(())
}

fn draft_from_flags(time: Option<&str>, amount: Option<u32>) -> Result<ScheduleDraft> {
    let defaults = ScheduleDraft::default();
    let time = match time.map(str::parse::<MealTime>) {
        Some(Ok(time)) => time,
        Some(Err(e)) => msg_bail_anyhow!(Message::InvalidScheduleInput(e.to_string())),
        None => defaults.time,
    };

    match ScheduleDraft::new(time, amount.unwrap_or(defaults.portion)) {
        Ok(draft) => Ok(draft),
        Err(e) => msg_bail_anyhow!(Message::InvalidScheduleInput(e.to_string())),
    }
}

/// Interactive editor; `None` when the user cancels.
fn edit_draft(mut draft: ScheduleDraft) -> Result<Option<ScheduleDraft>> {
    let labels: Vec<&str> = DRAFT_ACTIONS.iter().map(|(label, _)| *label).collect();

    loop {
        msg_print!(Message::DraftPreview {
            time: draft.time.to_string(),
            portion: draft.portion,
        });
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptScheduleAction.to_string())
            .items(&labels)
            .default(4)
            .interact()?;

        match DRAFT_ACTIONS[selection].1 {
            DraftAction::Earlier => draft.earlier(),
            DraftAction::Later => draft.later(),
            DraftAction::Less => draft.less(),
            DraftAction::More => draft.more(),
            DraftAction::Save => return Ok(Some(draft)),
            DraftAction::Cancel => return Ok(None),
        }
    }
}
