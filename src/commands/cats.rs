use super::Connection;
use crate::{
    libs::{
        cat::{self, Cat, CatPatch, NewCat, BREEDS, OTHER_BREED},
        data_storage::DataStorage,
        messages::Message,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CatsArgs {
    #[command(subcommand)]
    command: Option<CatsCommand>,
}

#[derive(Debug, Subcommand)]
enum CatsCommand {
    #[command(about = "List your cats")]
    List,
    #[command(about = "Add a cat")]
    Add(AddArgs),
    #[command(about = "Edit a cat profile")]
    Edit(EditArgs),
    #[command(about = "Delete a cat")]
    Delete(DeleteArgs),
    #[command(about = "Upload a profile picture")]
    Image(ImageArgs),
    #[command(about = "Make a cat the current one")]
    Switch(SwitchArgs),
}

#[derive(Debug, Args)]
struct AddArgs {
    #[arg(short, long)]
    name: Option<String>,
    #[arg(short, long)]
    breed: Option<String>,
    /// Weight in kilograms
    #[arg(short, long)]
    weight: Option<String>,
    /// Profile picture to upload after the cat is created
    #[arg(short, long)]
    image: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct EditArgs {
    id: String,
    #[arg(short, long)]
    name: Option<String>,
    #[arg(short, long)]
    breed: Option<String>,
    #[arg(short, long)]
    weight: Option<String>,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

#[derive(Debug, Args)]
struct ImageArgs {
    id: String,
    path: PathBuf,
}

#[derive(Debug, Args)]
struct SwitchArgs {
    id: String,
}

pub async fn cmd(cats_args: CatsArgs, storage: &DataStorage) -> Result<()> {
    let mut conn = Connection::open(storage)?;

    match cats_args.command.unwrap_or(CatsCommand::List) {
        CatsCommand::List => list(&conn).await,
        CatsCommand::Add(args) => add(&mut conn, args).await,
        CatsCommand::Edit(args) => edit(&mut conn, args).await,
        CatsCommand::Delete(args) => delete(&mut conn, args).await,
        CatsCommand::Image(args) => {
            let cat = find(&conn, &args.id).await?;
            conn.api.upload_cat_image(&cat.id, &args.path).await?;
            msg_success!(Message::CatImageUploaded(cat.name));
            Ok(())
        }
        CatsCommand::Switch(args) => {
            let cat = find(&conn, &args.id).await?;
            conn.session.select_cat(&cat.id, &cat.name);
            conn.save_session()?;
            msg_success!(Message::CatSwitched(cat.name));
            Ok(())
        }
    }
}

async fn list(conn: &Connection) -> Result<()> {
    let cats = conn.api.cats().await?;
    if cats.is_empty() {
        msg_info!(Message::NoCats);
        return Ok(());
    }

    msg_print!(Message::CatsHeader, true);
    View::cats(&cats, conn.session.current_cat_id.as_deref())
}

async fn add(conn: &mut Connection, args: AddArgs) -> Result<()> {
    let name = match args.name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCatName.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    let breed = match args.breed {
        Some(breed) => breed,
        None => prompt_breed()?,
    };
    let weight = match args.weight {
        Some(weight) => weight,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWeight.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let new_cat = match NewCat::validate(&name, &breed, &weight) {
        Ok(new_cat) => new_cat,
        Err(e) => msg_bail_anyhow!(Message::CatValidationFailed(e.to_string())),
    };
    let cat = conn.api.create_cat(&new_cat).await?;
    msg_success!(Message::CatAdded(cat.name.clone()));

    // The cat exists at this point; a failed upload must not undo that.
    if let Some(path) = args.image {
        upload_after_create(conn, &cat, &path).await;
    }

    if conn.session.current_cat_id.is_none() {
        conn.session.select_cat(&cat.id, &cat.name);
        conn.save_session()?;
    }
    Ok(())
}

async fn upload_after_create(conn: &Connection, cat: &Cat, path: &Path) {
    match conn.api.upload_cat_image(&cat.id, path).await {
        Ok(_) => msg_success!(Message::CatImageUploaded(cat.name.clone())),
        Err(e) => msg_warning!(Message::CatImageUploadFailed(e.to_string())),
    }
}

fn prompt_breed() -> Result<String> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptBreed.to_string())
        .items(&BREEDS)
        .default(0)
        .interact()?;

    if BREEDS[selection] == OTHER_BREED {
        return Ok(Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptOtherBreed.to_string())
            .allow_empty(true)
            .interact_text()?);
    }
    Ok(BREEDS[selection].to_string())
}

async fn edit(conn: &mut Connection, args: EditArgs) -> Result<()> {
    let patch = CatPatch {
        name: args.name.map(|name| name.trim().to_string()).filter(|name| !name.is_empty()),
        breed: args.breed.map(|breed| breed.trim().to_string()).filter(|breed| !breed.is_empty()),
        weight: match args.weight {
            Some(weight) => match cat::parse_weight(&weight) {
                Ok(weight) => Some(weight),
                Err(e) => msg_bail_anyhow!(Message::CatValidationFailed(e.to_string())),
            },
            None => None,
        },
    };
    if patch.is_empty() {
        msg_bail_anyhow!(Message::NothingToUpdate);
    }

    let mut cat = find(conn, &args.id).await?;
    cat.apply(patch);
    conn.api.update_cat(&cat).await?;

    if conn.session.current_cat_id.as_deref() == Some(cat.id.as_str()) {
        conn.session.select_cat(&cat.id, &cat.name);
        conn.save_session()?;
    }
    msg_success!(Message::CatUpdated(cat.name));
    Ok(())
}

async fn delete(conn: &mut Connection, args: DeleteArgs) -> Result<()> {
    let cat = find(conn, &args.id).await?;

    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteCat(cat.name.clone()).to_string())
            .default(false)
            .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    conn.api.delete_cat(&cat.id).await?;
    if conn.session.current_cat_id.as_deref() == Some(cat.id.as_str()) {
        conn.session.clear_cat();
        conn.save_session()?;
    }
    msg_success!(Message::CatDeleted(cat.name));
    Ok(())
}

async fn find(conn: &Connection, id: &str) -> Result<Cat> {
    match conn.resolve_cat(Some(id)).await {
        Ok(cat) => Ok(cat),
        Err(e) if matches!(e.downcast_ref::<cat::CatError>(), Some(cat::CatError::NotFound(_))) => {
            msg_bail_anyhow!(Message::CatNotFound(id.to_string()))
        }
        Err(e) => Err(e),
    }
}
