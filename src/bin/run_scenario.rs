//! Headless runner: submits a request file to the simulator and prints what the
//! dashboard would show.

use agrivolt_dash::{
    HttpSimulatorApi, LanguageCatalog, SERVER, SimulationRequest, SimulatorApi, interpret,
    models::{ChartData, ScaleKind},
};
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run one simulation without the GUI")]
struct Args {
    /// JSON file holding a `POST /simulate` body
    request: PathBuf,

    #[arg(long, default_value = SERVER.default_base_url)]
    server: String,

    /// Fetch this language for labels; English defaults otherwise
    #[arg(long)]
    lang: Option<String>,
}

#[derive(Tabled)]
struct MetricRow {
    metric: String,
    value: String,
}

#[derive(Tabled)]
struct PointRow {
    series: String,
    x: String,
    y: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let text = std::fs::read_to_string(&args.request)
        .with_context(|| format!("reading {}", args.request.display()))?;
    let request: SimulationRequest = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", args.request.display()))?;

    let api = HttpSimulatorApi::new(&args.server);
    let mut catalog = LanguageCatalog::default();
    if let Some(code) = &args.lang {
        let fetched = api.fetch_language(code).await;
        if let Err(e) = catalog.load(code, fetched) {
            log::warn!("Continuing with default labels: {}", e);
        }
    }

    log::info!("🚀 POST {}{} ({} mode)", api.base_url(), SERVER.simulate_path, request.mode);
    let result = api
        .simulate(&request)
        .await
        .map_err(|e| anyhow!(e.user_message(&catalog)))?;
    let plan = interpret(&result, &request, &catalog).map_err(|e| anyhow!(e))?;

    println!("\n{}\n", plan.results_title);
    let metrics: Vec<MetricRow> = plan
        .metrics
        .iter()
        .map(|m| MetricRow {
            metric: if m.secondary {
                format!("  {}", m.label)
            } else {
                m.label.clone()
            },
            value: m.value.clone(),
        })
        .collect();
    println!("{}", Table::new(metrics).with(Style::rounded()));

    for comment in &plan.comments {
        println!("\n[{}] {}\n{}", comment.tag, comment.title, comment.body);
    }

    for chart in &plan.charts {
        let title = plan
            .chart_titles
            .iter()
            .find(|(id, _)| *id == chart.id)
            .map(|(_, t)| t.as_str())
            .unwrap_or_else(|| chart.id.default_title());
        println!("\n{} ({})", title, chart.id.canvas_id());
        let rows = point_rows(&chart.data, chart.options.x_scale());
        if rows.is_empty() {
            println!("  (no data)");
        } else {
            println!("{}", Table::new(rows).with(Style::psql()));
        }
    }
    Ok(())
}

fn point_rows(data: &ChartData, scale: ScaleKind) -> Vec<PointRow> {
    data.datasets
        .iter()
        .flat_map(|dataset| {
            data.coordinates(dataset, scale)
                .into_iter()
                .map(move |[x, y]| PointRow {
                    series: dataset.label.clone(),
                    x: match scale {
                        ScaleKind::Category => data
                            .labels
                            .get(x as usize)
                            .map(ToString::to_string)
                            .unwrap_or_else(|| format!("{x}")),
                        ScaleKind::Linear => format!("{x}"),
                    },
                    y: format!("{y:.2}"),
                })
        })
        .collect()
}
