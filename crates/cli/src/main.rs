//! Clusterdash CLI
//!
//! Terminal front end for the clustering dashboard. Runs one clustering pass
//! on startup, then reads commands: `run <k>` re-clusters, `play` narrates
//! the current analysis through the speakers, `quit` exits. The surface
//! renders the chart and centroid table as text; the sequencing, state, and
//! failure handling all live in `clusterdash_core`.

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use clap::Parser;
use clusterdash_core::api::ApiClient;
use clusterdash_core::dashboard::Dashboard;
use clusterdash_core::narration::ControlState;
use clusterdash_core::render::{AxisPair, CentroidTable, ScatterChart};
use clusterdash_core::surface::DashboardSurface;
use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "clusterdash", about = "Interactive client for the clustering dashboard")]
struct Args {
    /// Base URL of the clustering service
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    server: String,

    /// Cluster count for the startup run
    #[arg(long, default_value_t = 4)]
    k: u32,

    /// Feature plotted on the X axis (default: the service's first feature)
    #[arg(long, requires = "y_feature")]
    x_feature: Option<String>,

    /// Feature plotted on the Y axis (default: the service's second feature)
    #[arg(long, requires = "x_feature")]
    y_feature: Option<String>,

    /// Skip audio output; narration requests still run end to end
    #[arg(long)]
    mute: bool,
}

/// Renders the dashboard into the terminal and plays narration via rodio.
struct TerminalSurface {
    mute: bool,
    narration_control: Option<ControlState>,
}

impl TerminalSurface {
    fn new(mute: bool) -> Self {
        Self {
            mute,
            narration_control: None,
        }
    }
}

#[async_trait]
impl DashboardSurface for TerminalSurface {
    fn set_status(&mut self, text: &str) {
        println!("\n{text}");
    }

    fn set_narration_control(&mut self, control: ControlState) {
        // Terminal commands have no disabled affordance; the core's state
        // machine already rejects out-of-turn plays. Shown for visibility.
        if self.narration_control.as_ref() != Some(&control) {
            println!(
                "[narration] {} ({})",
                control.label,
                if control.enabled { "ready" } else { "unavailable" }
            );
        }
        self.narration_control = Some(control);
    }

    fn notify(&mut self, message: &str) {
        println!("!! {message}");
    }

    fn mount_chart(&mut self, chart: ScatterChart) {
        println!("\n{}", chart.title);
        println!("  x: {}  y: {}", chart.x_title, chart.y_title);
        for series in &chart.series {
            println!(
                "  {} [{}]: {} points",
                series.label,
                series.border_color,
                series.points.len()
            );
        }
    }

    fn mount_table(&mut self, table: CentroidTable) {
        if table.rows.is_empty() {
            println!("\n(no centroids)");
            return;
        }
        println!("\nCluster | {}", table.headers.join(" | "));
        for row in &table.rows {
            println!("  **{}** | {}", row.cluster, row.values.join(" | "));
        }
    }

    async fn play_audio(&mut self, audio: Bytes) -> Result<()> {
        if self.mute {
            println!("[narration] {} bytes of audio received (muted)", audio.len());
            return Ok(());
        }
        // rodio's output handle is not Send; the whole session lives on one
        // blocking thread and the await resolves when playback ends.
        tokio::task::spawn_blocking(move || -> Result<()> {
            let (_stream, handle) = rodio::OutputStream::try_default()?;
            let sink = rodio::Sink::try_new(&handle)?;
            sink.append(rodio::Decoder::new(std::io::Cursor::new(audio))?);
            sink.sleep_until_end();
            Ok(())
        })
        .await??;
        Ok(())
    }
}

fn print_help() {
    println!("commands:");
    println!("  run <k>   re-run clustering with k clusters");
    println!("  play      narrate the current analysis");
    println!("  help      show this help");
    println!("  quit      exit");
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let axes = match (args.x_feature, args.y_feature) {
        (Some(x), Some(y)) => Some(AxisPair { x, y }),
        _ => None,
    };

    let mut dashboard = Dashboard::new(
        ApiClient::new(&args.server),
        TerminalSurface::new(args.mute),
        axes,
    );

    // Bootstrap run, as the page does on load.
    dashboard.run_clustering(args.k).await;

    print_help();
    prompt();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (None, _) => {}
            (Some("quit"), _) | (Some("exit"), _) => break,
            (Some("help"), _) => print_help(),
            (Some("play"), _) => dashboard.play_narration().await,
            (Some("run"), Some(k)) => match k.parse::<u32>() {
                Ok(k) => dashboard.run_clustering(k).await,
                Err(_) => println!("k must be a positive integer"),
            },
            (Some("run"), None) => println!("usage: run <k>"),
            (Some(other), _) => println!("unknown command: {other} (try `help`)"),
        }
        prompt();
    }

    Ok(())
}
