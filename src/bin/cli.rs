use mensajeria::{User, Message, JsonStore, backend::read_records};

use std::path::PathBuf;
use anyhow::Context;
use colored::Colorize;
use clap::{Args, Parser, Subcommand};

/// Read-only view of the user and message documents.
///
/// Nothing is ever written, so it is safe to run next to a live server.
#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// Directory holding usuarios.json and mensajes.json
    #[clap(short, long, env = "DATA_DIR", default_value = ".", value_parser)]
    data_dir: PathBuf,

    /// Action to perform
    #[clap(subcommand)]
    action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// List all users
    Users,
    /// List messages, optionally only those of one user
    Messages(ListMessages)
}

#[derive(Args, Debug)]
struct ListMessages {
    /// Only show messages of this user id
    #[clap(short, long, value_parser)]
    user: Option<i64>
}

fn print_user(user: &User) {
    let status = if user.status == "activado" {
        user.status.green()
    } else {
        user.status.bright_red()
    };
    println!("{} {} [{}]", format!("#{}", user.id).bold(), user, status);
}

fn print_messages(messages: &[Message], users: &[User], only: Option<i64>) {
    for message in messages.iter().filter(|m| only.map_or(true, |id| m.usuario_id == id)) {
        let author = users.iter()
            .find(|user| user.id == message.usuario_id)
            .map_or_else(|| format!("usuario {}", message.usuario_id).dimmed().to_string(),
                |user| user.nombre.clone());
        println!("{} {} {}: {}",
            format!("#{}", message.id).bold(),
            message.fecha.format("%Y-%m-%d %H:%M"),
            author,
            message.contenido);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let store = JsonStore::new(&args.data_dir);

    match args.action {
        Subcommands::Users => {
            let users: Vec<User> = read_records(&store).context("failed to read users")?;
            for user in &users {
                print_user(user);
            }
        },
        Subcommands::Messages(list) => {
            let users: Vec<User> = read_records(&store).context("failed to read users")?;
            let messages: Vec<Message> = read_records(&store).context("failed to read messages")?;
            print_messages(&messages, &users, list.user);
        }
    }
    return Ok(());
}
