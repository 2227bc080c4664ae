use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::client::ApiClient;
use crate::form::UserForm;
use crate::table::UserTable;

#[derive(Clone, Parser)]
pub struct CreateParams {
    #[clap(short, long)]
    pub first_name: String,

    #[clap(short, long)]
    pub last_name: String,

    #[clap(short, long)]
    pub email: String,
}

#[derive(Clone, Parser)]
pub struct UpdateParams {
    /// Identifier of the user to update
    pub id: String,

    #[clap(short, long)]
    pub first_name: String,

    #[clap(short, long)]
    pub last_name: String,

    #[clap(short, long)]
    pub email: String,
}

pub async fn create(client: &ApiClient, params: CreateParams) -> Result<()> {
    let form = UserForm {
        user_first_name: params.first_name,
        user_last_name: params.last_name,
        user_email: params.email,
        ..Default::default()
    };
    let body = form.save_params();

    let mut table = UserTable::new();
    let ticket = table.begin();

    let user = client
        .create_user(&body)
        .await
        .context("Failed to create user")?;
    info!(id = user.id, "created user");

    let id = user.id;
    table.apply(ticket, vec![user]);
    print!("{table}");
    println!("✓ Created user {id}");

    Ok(())
}

pub async fn get(client: &ApiClient, id: &str) -> Result<()> {
    let form = UserForm {
        id: id.to_string(),
        ..Default::default()
    };

    let mut table = UserTable::new();
    let ticket = table.begin();

    let user = client
        .user(&form.id)
        .await
        .context("Failed to retrieve user")?;
    info!(id = user.id, "retrieved user");

    table.apply(ticket, vec![user]);
    print!("{table}");

    Ok(())
}

pub async fn list(client: &ApiClient) -> Result<()> {
    let mut table = UserTable::new();
    let ticket = table.begin();

    let users = client.users().await.context("Failed to retrieve users")?;
    info!(count = users.len(), "retrieved all users");

    table.apply(ticket, users);
    print!("{table}");

    Ok(())
}

pub async fn update(client: &ApiClient, params: UpdateParams) -> Result<()> {
    let form = UserForm {
        id: params.id,
        user_first_name: params.first_name,
        user_last_name: params.last_name,
        user_email: params.email,
    };
    let body = form.save_params();

    let mut table = UserTable::new();
    let ticket = table.begin();

    let user = client
        .update_user(&form.id, &body)
        .await
        .context("Failed to update user")?;
    info!(id = user.id, "updated user");

    let id = user.id;
    table.apply(ticket, vec![user]);
    print!("{table}");
    println!("✓ Updated user {id}");

    Ok(())
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<()> {
    let form = UserForm {
        id: id.to_string(),
        ..Default::default()
    };

    // No record comes back from a delete, so the table is left alone.
    let deleted = client
        .delete_user(&form.id)
        .await
        .context("Failed to delete user")?;
    info!(id = %form.id, deleted, "deleted user");

    if deleted {
        println!("✓ Removed user {}", form.id);
    } else {
        println!("Backend reported user {} was not removed", form.id);
    }

    Ok(())
}
