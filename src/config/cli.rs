use crate::config::toml_config::DeskConfig;
use crate::config::TransportConfig;
use crate::utils::error::{DeskError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "motel-desk")]
#[command(about = "Front-desk console for the property management backend")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Backend origin, e.g. http://localhost:8000
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Extra default header as NAME=VALUE (repeatable)
    #[arg(long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    #[command(subcommand)]
    Reservations(ReservationCommand),
    #[command(subcommand)]
    Rooms(RoomCommand),
    #[command(subcommand)]
    Dashboard(DashboardCommand),
    #[command(subcommand)]
    Calendar(CalendarCommand),
    #[command(subcommand)]
    Revenue(RevenueCommand),
    #[command(subcommand)]
    Customers(CustomerCommand),
    /// Check a reservation in
    CheckIn { reservation_id: String },
    /// Check a reservation out
    CheckOut { reservation_id: String },
    /// Arrivals and departures in the coming days
    Upcoming {
        #[arg(long)]
        days: Option<u32>,
    },
    #[command(subcommand)]
    Cleaning(CleaningCommand),
    /// Download the reservation report
    Export {
        #[arg(value_enum)]
        format: ExportFormat,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    #[command(subcommand)]
    Admins(AdminCommand),
    #[command(subcommand)]
    Notes(NoteCommand),
}

#[derive(Debug, Clone, Subcommand)]
pub enum ReservationCommand {
    List,
    Get { id: String },
    Availability {
        room_id: String,
        check_in: String,
        check_out: String,
    },
    Status { id: String, status: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum RoomCommand {
    List,
    Get { id: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum DashboardCommand {
    Summary,
    Stats,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CalendarCommand {
    Month { year: i32, month: u32 },
    Week { year: i32, week: u32 },
}

#[derive(Debug, Clone, Subcommand)]
pub enum RevenueCommand {
    Daily { start: String, end: String },
    Monthly { year: i32 },
    Platform { start: String, end: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CustomerCommand {
    List,
    Get { id: String },
    Reservations { id: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CleaningCommand {
    List,
    Complete { room_id: String },
    Tasks,
}

#[derive(Debug, Clone, Subcommand)]
pub enum AdminCommand {
    List,
    Get { id: String },
    Delete { id: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum NoteCommand {
    List {
        #[arg(long)]
        room_id: Option<String>,
        /// Filter by progress; pass an empty string for notes not started
        #[arg(long)]
        progress: Option<String>,
    },
    Urgent,
    AfterCheckout,
    Alerts,
    Complete { note_id: String },
    Progress {
        note_id: String,
        progress: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Excel,
    Csv,
}

impl ExportFormat {
    pub fn default_filename(&self) -> &'static str {
        match self {
            Self::Excel => "reservations.xlsx",
            Self::Csv => "reservations.csv",
        }
    }
}

fn parse_header(raw: &str) -> std::result::Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    if name.trim().is_empty() {
        return Err("header name cannot be empty".to_string());
    }
    Ok((name.trim().to_string(), value.to_string()))
}

impl CliConfig {
    pub fn load_file(&self) -> Result<Option<DeskConfig>> {
        self.config
            .as_ref()
            .map(DeskConfig::from_file)
            .transpose()
    }

    /// 檔案設定為基礎，命令列參數覆蓋
    pub fn transport_config(&self, file: Option<&DeskConfig>) -> Result<TransportConfig> {
        let mut config = match file {
            Some(file) => file.transport_config()?.clone(),
            None => match &self.base_url {
                Some(base_url) => TransportConfig::new(base_url.clone()),
                None => {
                    return Err(DeskError::MissingConfigError {
                        field: "--base-url or --config".to_string(),
                    })
                }
            },
        };

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_seconds = timeout;
        }
        for (name, value) in &self.headers {
            config.headers.insert(name.clone(), value.clone());
        }

        Ok(config)
    }
}
