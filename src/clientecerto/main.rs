use chrono::Utc;
use clap::Parser;
use clientecerto::api::{ClienteApi, ConfigAction};
use clientecerto::commands::{CmdMessage, MessageLevel};
use clientecerto::config::ClienteConfig;
use clientecerto::error::Result;
use clientecerto::model::Client;
use clientecerto::store::fs::FileStore;
use clientecerto::{cpf, currency};
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ClienteApi<FileStore>,
    config: ClienteConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { name, value, cpf }) => handle_add(&mut ctx, name, value, cpf),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Remove { ids }) => handle_remove(&mut ctx, ids),
        Some(Commands::Purge { yes }) => handle_purge(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("com", "clientecerto", "cliente-certo")
                .expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = ClienteConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone());
    let api = ClienteApi::new(store, data_dir);

    Ok(AppContext { api, config })
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    value: String,
    cpf: Option<String>,
) -> Result<()> {
    let result = ctx.api.register_client(&name, &value, cpf.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_clients()?;
    print_clients(&result.listed_clients, &ctx.config);
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, ids: Vec<u64>) -> Result<()> {
    let result = ctx.api.remove_clients(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_purge(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let result = ctx.api.purge_clients(yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("currency-symbol"), None) => ConfigAction::ShowAll,
        (Some("currency-symbol"), Some(v)) => ConfigAction::SetCurrencySymbol(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("currency-symbol = {}", config.currency_symbol);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const VALUE_WIDTH: usize = 14;
const CPF_WIDTH: usize = 16;
const NOT_PROVIDED: &str = "not provided";

fn print_clients(clients: &[Client], config: &ClienteConfig) {
    for client in clients {
        let id_str = format!("{}  ", client.id);

        let value_str = format!(
            "{} {}",
            config.currency_symbol,
            currency::format_amount(client.value)
        );

        let cpf_str = match &client.tax_id {
            Some(digits) => cpf::format_input(digits),
            None => NOT_PROVIDED.to_string(),
        };

        let time_ago = format_time_ago(client.registered_at());

        let fixed_width = id_str.width() + VALUE_WIDTH + CPF_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let name_display = truncate_to_width(&client.name, available);
        let padding = available.saturating_sub(name_display.width());

        let cpf_colored = if client.tax_id.is_some() {
            format!("{:<CPF_WIDTH$}", cpf_str).normal()
        } else {
            format!("{:<CPF_WIDTH$}", cpf_str).dimmed()
        };

        println!(
            "{}{}{}{:>VALUE_WIDTH$}  {}{}",
            id_str.dimmed(),
            name_display,
            " ".repeat(padding),
            value_str,
            cpf_colored,
            time_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
