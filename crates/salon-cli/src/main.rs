//! `salon` CLI — browse an Alteg.io account and find bookable appointment slots.
//!
//! ## Usage
//!
//! ```sh
//! # The session comes from the environment (or a .env file)
//! export ALTEGIO_PARTNER_TOKEN=pt_...
//! export ALTEGIO_USER_TOKEN=ut_...
//!
//! # Exchange a login for a user token
//! salon auth --login you@example.com --password secret
//!
//! # Browse the account
//! salon companies
//! salon services --company 123
//! salon service --company 123 --service 456
//! salon clients --company 123
//! salon book-dates --company 123
//!
//! # Inspect one staff member's raw day grid
//! salon timetable --company 123 --staff 33 --date 2026-09-01
//!
//! # Find bookable windows over the next three days
//! salon slots --company 123 --service 456
//!
//! # Same, as JSON for scripting
//! salon slots --company 123 --service 456 --from 2026-09-01 --days 7 --json
//! ```

use altegio_client::models::{AuthCredentials, NewClient};
use altegio_client::{find_available_slots, AltegioClient, AltegioConfig};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use slot_engine::{AvailabilityReport, ServiceRequirement};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "salon",
    version,
    about = "Alteg.io booking CRM browser and appointment slot finder"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exchange login credentials for a user token
    Auth {
        #[arg(long)]
        login: String,
        #[arg(long)]
        password: String,
    },
    /// List the companies visible to the session
    Companies {
        /// Print the raw payload as JSON
        #[arg(long)]
        json: bool,
    },
    /// List a company's services
    Services {
        #[arg(long)]
        company: u64,
        #[arg(long)]
        json: bool,
    },
    /// Show one service with its duration and staff roster
    Service {
        #[arg(long)]
        company: u64,
        #[arg(long)]
        service: u64,
        #[arg(long)]
        json: bool,
    },
    /// Search a company's client base
    Clients {
        #[arg(long)]
        company: u64,
        #[arg(long)]
        json: bool,
    },
    /// Create a client record
    AddClient {
        #[arg(long)]
        company: u64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        surname: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Show the days a company accepts online bookings for, as raw JSON
    BookDates {
        #[arg(long)]
        company: u64,
    },
    /// Show one staff member's per-tick timetable for a day
    Timetable {
        #[arg(long)]
        company: u64,
        #[arg(long)]
        staff: u64,
        /// Day to fetch, as YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
    },
    /// Find bookable windows for a service across its staff roster
    Slots {
        #[arg(long)]
        company: u64,
        #[arg(long)]
        service: u64,
        /// First day to search, as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// How many consecutive days to search
        #[arg(long, default_value_t = slot_engine::DEFAULT_DAY_WINDOW)]
        days: u32,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // .env is optional; a missing file is not an error.
    dotenvy::dotenv().ok();
    // Logs go to stderr so stdout stays machine-readable under `--json`.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = AltegioConfig::from_env()
        .context("Session is not configured (ALTEGIO_PARTNER_TOKEN is required)")?;
    let client = AltegioClient::new(config)?;

    match cli.command {
        Commands::Auth { login, password } => {
            let data = client
                .authenticate(&AuthCredentials::new(login, password))
                .await
                .context("Authentication failed")?;
            println!("{}", data.user_token);
        }
        Commands::Companies { json } => {
            let companies = client.companies().await.context("Failed to list companies")?;
            if json {
                print_json(&companies)?;
            } else {
                for company in &companies {
                    match &company.address {
                        Some(address) => {
                            println!("{:>8}  {}  ({})", company.id, company.title, address)
                        }
                        None => println!("{:>8}  {}", company.id, company.title),
                    }
                }
            }
        }
        Commands::Services { company, json } => {
            let services = client
                .services(company)
                .await
                .context("Failed to list services")?;
            if json {
                print_json(&services)?;
            } else {
                for service in &services {
                    let duration = match service.seance_length {
                        Some(seconds) if seconds > 0 => format!("{} min", seconds / 60),
                        _ => "-".to_string(),
                    };
                    println!("{:>8}  {:>8}  {}", service.id, duration, service.title);
                }
            }
        }
        Commands::Service {
            company,
            service,
            json,
        } => {
            let detail = client
                .service(company, service)
                .await
                .context("Failed to fetch service")?;
            if json {
                print_json(&detail)?;
            } else {
                println!("{} (id {})", detail.title, detail.id);
                let requirement =
                    ServiceRequirement::from_seance_length(detail.id, detail.seance_length);
                if detail.seance_length == 0 {
                    println!(
                        "duration: not configured, slot searches assume {} min",
                        requirement.duration_minutes
                    );
                } else {
                    println!("duration: {} min", requirement.duration_minutes);
                }
                if detail.staff.is_empty() {
                    println!("no staff assigned");
                } else {
                    println!("staff:");
                    for member in &detail.staff {
                        println!("  {:>6}  {}", member.id, member.name);
                    }
                }
            }
        }
        Commands::Clients { company, json } => {
            let records = client
                .clients(company)
                .await
                .context("Failed to search clients")?;
            if json {
                print_json(&records)?;
            } else {
                for record in &records {
                    println!(
                        "{:>8}  {}  {}",
                        record.id,
                        record.name,
                        record.phone.as_deref().unwrap_or("-")
                    );
                }
            }
        }
        Commands::AddClient {
            company,
            name,
            phone,
            surname,
            email,
            comment,
        } => {
            let mut body = NewClient::new(name, phone);
            body.surname = surname;
            body.email = email;
            body.comment = comment;
            let created = client
                .add_client(company, &body)
                .await
                .context("Failed to create client")?;
            println!("created client {} (id {})", created.name, created.id);
        }
        Commands::BookDates { company } => {
            let dates = client
                .book_dates(company)
                .await
                .context("Failed to fetch booking dates")?;
            print_json(&dates)?;
        }
        Commands::Timetable {
            company,
            staff,
            date,
        } => {
            let ticks = client
                .timetable(company, staff, date)
                .await
                .context("Failed to fetch timetable")?;
            if ticks.is_empty() {
                println!("no timetable for {date}");
            }
            for tick in &ticks {
                let state = if tick.is_free { "free" } else { "busy" };
                println!("{}  {}", tick.time.format("%H:%M"), state);
            }
        }
        Commands::Slots {
            company,
            service,
            from,
            days,
            json,
        } => {
            let from = from.unwrap_or_else(|| Local::now().date_naive());
            let report = find_available_slots(&client, company, service, from, days)
                .await
                .context("Slot search failed")?;
            if json {
                print_json(&report)?;
            } else {
                print_report(&report);
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Per-staff text rendering of a slot search. Fetch failures are already on
/// stderr via the warn log, so the body sticks to availability.
fn print_report(report: &AvailabilityReport) {
    for staff in &report.staff {
        println!("{} (id {})", staff.staff_name, staff.staff_id);
        if staff.days.is_empty() {
            println!("  no availability in the searched window");
            continue;
        }
        for day in &staff.days {
            let windows: Vec<String> = day.windows.iter().map(ToString::to_string).collect();
            println!("  {}  {}", day.date, windows.join(", "));
        }
    }
}
