use arpa_ptr_application::use_cases::ResolvePtrUseCase;
use arpa_ptr_domain::{ip_to_arpa, CliOverrides, Config};
use arpa_ptr_infrastructure::dns::MessageAnswerSink;
use arpa_ptr_infrastructure::host_table::{HostTableLoader, SharedHostTable};
use clap::{Parser, Subcommand};
use hickory_proto::op::{Message, MessageType, OpCode};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info};

mod bootstrap;

#[derive(Parser)]
#[command(name = "arpa-ptr")]
#[command(version)]
#[command(about = "Answer reverse-lookup (PTR) names from a local host table")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Zone appended to hostnames (defaults to "local.")
    #[arg(short = 'z', long)]
    zone: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve in-addr.arpa / ip6.arpa names against the host table
    Resolve {
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,
    },

    /// Print the reverse-lookup name of each address
    Reverse {
        #[arg(required = true, value_name = "IP")]
        ips: Vec<IpAddr>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        zone: cli.zone.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    match cli.command {
        Command::Resolve { names } => resolve(&config, &names),
        Command::Reverse { ips } => {
            for ip in ips {
                println!("{}.", ip_to_arpa(&ip));
            }
        }
    }

    Ok(())
}

fn resolve(config: &Config, names: &[String]) {
    let hosts = Arc::new(SharedHostTable::new(HostTableLoader::from_records(
        &config.dns.hosts,
    )));
    let zone = config.dns.effective_zone();
    info!(zone = %zone, hosts = hosts.len(), "Resolving PTR names");

    let use_case = ResolvePtrUseCase::new(hosts, zone.as_str());

    for name in names {
        let mut message = Message::new(0, MessageType::Response, OpCode::Query);
        let mut sink = MessageAnswerSink::new(&mut message);
        let count = use_case.execute(name, &mut sink);
        debug!(query = %name, answers = count, skipped = sink.skipped(), "Lookup done");

        if message.answers().is_empty() {
            println!("; no PTR records for {}", name);
            continue;
        }

        for record in message.answers() {
            println!("{}", record);
        }
    }
}
