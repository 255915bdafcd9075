use clap::Parser;
use motel_desk::config::cli::{
    AdminCommand, CalendarCommand, CleaningCommand, Command, CustomerCommand, DashboardCommand,
    ExportFormat, NoteCommand, ReservationCommand, RevenueCommand, RoomCommand,
};
use motel_desk::utils::{logger, validation::Validate};
use motel_desk::{CliConfig, DeskError, PropertyApi, Transport};
use serde::Serialize;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let file = match cli.load_file() {
        Ok(file) => file,
        Err(e) => {
            eprintln!("❌ Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let log_json = cli.json_logs || file.as_ref().map(|f| f.log_json()).unwrap_or(false);
    let log_level = file.as_ref().and_then(|f| f.log_level());
    if log_json {
        logger::init_json_logger(cli.verbose, log_level);
    } else {
        logger::init_cli_logger(cli.verbose, log_level);
    }

    let transport_config = match cli
        .transport_config(file.as_ref())
        .and_then(|config| config.validate().map(|_| config))
    {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    tracing::debug!("Transport config: {:?}", transport_config.api_root());

    let api = match PropertyApi::connect(transport_config) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&api, cli.command).await {
        tracing::error!("❌ Command failed: {} (kind: {:?})", e, e.kind());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.kind().exit_code());
    }
}

fn print_json<V: Serialize>(value: &V) -> Result<(), DeskError> {
    let rendered = serde_json::to_string_pretty(value).map_err(|source| DeskError::Encode {
        path: "stdout".to_string(),
        source,
    })?;
    println!("{}", rendered);
    Ok(())
}

/// Server-suggested names are reduced to their last component.
fn report_target(suggested: Option<&str>, format: ExportFormat) -> PathBuf {
    suggested
        .and_then(|name| std::path::Path::new(name).file_name())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format.default_filename()))
}

async fn run<T: Transport>(api: &PropertyApi<T>, command: Command) -> Result<(), DeskError> {
    match command {
        Command::Reservations(cmd) => match cmd {
            ReservationCommand::List => print_json(&api.get_reservations().await?),
            ReservationCommand::Get { id } => print_json(&api.get_reservation(&id).await?),
            ReservationCommand::Availability {
                room_id,
                check_in,
                check_out,
            } => print_json(
                &api.check_room_availability(&room_id, &check_in, &check_out)
                    .await?,
            ),
            ReservationCommand::Status { id, status } => {
                print_json(&api.update_reservation_status(&id, &status).await?)
            }
        },
        Command::Rooms(cmd) => match cmd {
            RoomCommand::List => print_json(&api.get_rooms().await?),
            RoomCommand::Get { id } => print_json(&api.get_room(&id).await?),
        },
        Command::Dashboard(cmd) => match cmd {
            DashboardCommand::Summary => print_json(&api.get_check_in_out_summary().await?),
            DashboardCommand::Stats => print_json(&api.get_dashboard_stats().await?),
        },
        Command::Calendar(cmd) => match cmd {
            CalendarCommand::Month { year, month } => {
                print_json(&api.get_month_reservations(year, month).await?)
            }
            CalendarCommand::Week { year, week } => {
                print_json(&api.get_week_reservations(year, week).await?)
            }
        },
        Command::Revenue(cmd) => match cmd {
            RevenueCommand::Daily { start, end } => {
                print_json(&api.get_daily_revenue(&start, &end).await?)
            }
            RevenueCommand::Monthly { year } => print_json(&api.get_monthly_revenue(year).await?),
            RevenueCommand::Platform { start, end } => {
                print_json(&api.get_platform_revenue(&start, &end).await?)
            }
        },
        Command::Customers(cmd) => match cmd {
            CustomerCommand::List => print_json(&api.get_customers().await?),
            CustomerCommand::Get { id } => print_json(&api.get_customer(&id).await?),
            CustomerCommand::Reservations { id } => {
                print_json(&api.get_customer_reservations(&id).await?)
            }
        },
        Command::CheckIn { reservation_id } => print_json(&api.check_in(&reservation_id).await?),
        Command::CheckOut { reservation_id } => print_json(&api.check_out(&reservation_id).await?),
        Command::Upcoming { days } => {
            print_json(&api.get_upcoming_checkins_checkouts(days).await?)
        }
        Command::Cleaning(cmd) => match cmd {
            CleaningCommand::List => print_json(&api.get_cleaning_rooms().await?),
            CleaningCommand::Complete { room_id } => {
                print_json(&api.complete_cleaning(&room_id).await?)
            }
            CleaningCommand::Tasks => print_json(&api.get_cleaning_tasks().await?),
        },
        Command::Export {
            format,
            start,
            end,
            output,
        } => {
            let download = match format {
                ExportFormat::Excel => {
                    api.export_reservations_excel(start.as_deref(), end.as_deref())
                        .await?
                }
                ExportFormat::Csv => {
                    api.export_reservations_csv(start.as_deref(), end.as_deref())
                        .await?
                }
            };
            let target = output.unwrap_or_else(|| report_target(download.filename.as_deref(), format));
            std::fs::write(&target, &download.bytes)?;
            tracing::info!("📁 Report saved to: {}", target.display());
            println!("📁 Report saved to: {} ({} bytes)", target.display(), download.bytes.len());
            Ok(())
        }
        Command::Admins(cmd) => match cmd {
            AdminCommand::List => print_json(&api.get_admins().await?),
            AdminCommand::Get { id } => print_json(&api.get_admin(&id).await?),
            AdminCommand::Delete { id } => print_json(&api.delete_admin(&id).await?),
        },
        Command::Notes(cmd) => match cmd {
            NoteCommand::List { room_id, progress } => print_json(
                &api.get_room_notes(room_id.as_deref(), progress.as_deref())
                    .await?,
            ),
            NoteCommand::Urgent => print_json(&api.get_urgent_notes().await?),
            NoteCommand::AfterCheckout => print_json(&api.get_after_checkout_notes().await?),
            NoteCommand::Alerts => print_json(&api.get_all_alerts().await?),
            NoteCommand::Complete { note_id } => {
                print_json(&api.complete_room_note(&note_id).await?)
            }
            NoteCommand::Progress { note_id, progress } => print_json(
                &api.update_note_progress(&note_id, progress.as_deref())
                    .await?,
            ),
        },
    }
}
