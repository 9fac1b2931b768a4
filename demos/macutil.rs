use std::process::ExitCode;

use clap::{Parser, Subcommand};
use spoofmac_util::{normalize_mac_address, MacAddress, MacGenerator, MacResult, Notation};

#[derive(Parser)]
#[command(author, version, about = "Normalize or generate MAC addresses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print each address in canonical XX:XX:XX:XX:XX:XX form
    Normalize {
        #[arg(required = true)]
        macs: Vec<String>,
    },
    /// Generate random addresses
    Random {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Do not set the locally administered bit
        #[arg(long)]
        universal: bool,

        /// Vendor prefix, in any notation whose first three octets are used
        #[arg(long)]
        prefix: Option<String>,
    },
}

fn generator(prefix: Option<&str>, universal: bool) -> MacResult<MacGenerator> {
    let mut builder = MacGenerator::builder().local_admin(!universal);
    if let Some(prefix) = prefix {
        // Pad a bare three-octet prefix out to a full address before parsing.
        let mac: MacAddress = format!("{prefix}:00:00:00").parse()?;
        builder = builder.vendor_prefix(mac.oui());
    }
    builder.build()
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { macs } => {
            let mut failed = false;
            for mac in &macs {
                match normalize_mac_address(mac) {
                    Some(canonical) => {
                        let notation = Notation::detect(mac).map(|n| n.to_string());
                        println!("{mac} -> {canonical} ({})", notation.unwrap_or_default());
                    }
                    None => {
                        log::error!("{mac:?} is not a valid MAC address");
                        failed = true;
                    }
                }
            }
            if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Commands::Random { count, universal, prefix } => {
            let generator = match generator(prefix.as_deref(), universal) {
                Ok(generator) => generator,
                Err(e) => {
                    log::error!("{e}");
                    return ExitCode::FAILURE;
                }
            };
            for _ in 0..count {
                println!("{}", generator.generate());
            }
            ExitCode::SUCCESS
        }
    }
}
