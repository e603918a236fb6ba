use std::collections::HashSet;
use std::time::Duration;

use anyhow::Context;
use btleplug::api::{
    Central as _, CentralEvent, CharPropFlags, Manager as _, Peripheral as _, ScanFilter,
};
use btleplug::platform::{Adapter, Manager, Peripheral};
use clap::{Parser, Subcommand};
use futures::StreamExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use togrill::client::{ClientError, GrillClient};
use togrill::service;

#[derive(Parser)]
#[command(name = "togrill")]
#[command(about = "Scan for and talk to ToGrill BLE grill thermometers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan for devices advertising the ToGrill service
    Scan {
        /// Stop after this many seconds instead of scanning until interrupted
        #[arg(short, long)]
        timeout: Option<u64>,
    },
    /// Connect to a device and stream decoded notifications
    Connect {
        /// Device address (or platform peripheral id) as printed by `scan`
        address: String,

        /// Print decoded packets as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Initialize tracing to stderr so stdout stays clean for device output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "togrill=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn default_adapter() -> anyhow::Result<Adapter> {
    let manager = Manager::new().await?;
    manager
        .adapters()
        .await?
        .into_iter()
        .next()
        .context("no bluetooth adapter found")
}

async fn scan(timeout: Option<u64>) -> anyhow::Result<()> {
    let adapter = default_adapter().await?;
    let mut events = adapter.events().await?;
    adapter
        .start_scan(ScanFilter {
            services: vec![service::MAIN_SERVICE],
        })
        .await?;
    println!("Scanning for devices");

    let listing = async {
        let mut seen = HashSet::new();
        while let Some(event) = events.next().await {
            let id = match event {
                CentralEvent::DeviceDiscovered(id)
                | CentralEvent::DeviceUpdated(id)
                | CentralEvent::ManufacturerDataAdvertisement { id, .. } => id,
                _ => continue,
            };
            if !seen.insert(id.clone()) {
                continue;
            }

            let peripheral = adapter.peripheral(&id).await?;
            let Some(properties) = peripheral.properties().await? else {
                continue;
            };
            if !properties.services.contains(&service::MAIN_SERVICE) {
                continue;
            }

            println!(
                "Device: {} ({})",
                peripheral.address(),
                properties.local_name.as_deref().unwrap_or("unknown")
            );
            if let Some(rssi) = properties.rssi {
                println!(" - RSSI: {rssi}");
            }
            for (company, data) in &properties.manufacturer_data {
                println!(" - Manufacturer {company:#06x}: {}", hex::encode(data));
            }
            println!();
        }
        Ok::<_, anyhow::Error>(())
    };

    if let Some(seconds) = timeout {
        match tokio::time::timeout(Duration::from_secs(seconds), listing).await {
            Ok(result) => result?,
            Err(_elapsed) => {}
        }
    } else {
        listing.await?;
    }

    adapter.stop_scan().await?;
    Ok(())
}

/// Scan until the requested peripheral shows up, with a connect-style timeout.
async fn discover_peripheral(adapter: &Adapter, address: &str) -> anyhow::Result<Peripheral> {
    adapter
        .start_scan(ScanFilter {
            services: vec![service::MAIN_SERVICE],
        })
        .await?;

    let deadline = tokio::time::Instant::now() + Duration::from_secs(20);
    let peripheral = loop {
        match GrillClient::find(adapter, address).await {
            Ok(peripheral) => break peripheral,
            Err(ClientError::DeviceNotFound(_)) if tokio::time::Instant::now() < deadline => {
                tokio::time::sleep(Duration::from_millis(500)).await;
            }
            Err(error) => return Err(error.into()),
        }
    };

    adapter.stop_scan().await?;
    Ok(peripheral)
}

async fn dump_services(peripheral: &Peripheral) -> anyhow::Result<()> {
    for gatt_service in peripheral.services() {
        println!("Service: {}", gatt_service.uuid);
        for characteristic in &gatt_service.characteristics {
            println!(
                " - Characteristic: {} {:?}",
                characteristic.uuid, characteristic.properties
            );
            if characteristic.properties.contains(CharPropFlags::READ) {
                match peripheral.read(characteristic).await {
                    Ok(value) => println!(" -   Data: {}", hex::encode(value)),
                    Err(error) => tracing::debug!(%error, "read failed"),
                }
            }
        }
    }
    Ok(())
}

async fn connect(address: &str, json: bool) -> anyhow::Result<()> {
    let adapter = default_adapter().await?;
    tracing::info!("Connecting to: {address}");

    let peripheral = discover_peripheral(&adapter, address).await?;
    let client = GrillClient::connect(peripheral).await?;

    dump_services(client.peripheral()).await?;

    let packets = client.packets().await?;
    client.request_state().await?;

    futures::pin_mut!(packets);
    while let Some(packet) = packets.next().await {
        if json {
            println!("{}", serde_json::to_string(&packet)?);
        } else {
            println!("Notify: {packet:?}");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { timeout } => scan(timeout).await,
        Commands::Connect { address, json } => connect(&address, json).await,
    }
}
