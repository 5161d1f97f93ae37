use clap::Parser;
use cnnviz_core::glyph::top_predictions;
use cnnviz_core::partition::partition_layers;
use cnnviz_core::pipeline::DEFAULT_ENDPOINT;
use cnnviz_core::view::TOP_PREDICTIONS;
use cnnviz_core::ApiResponse;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cnnviz-classify", about = "Classify a WAV file with the CNN audio inference endpoint")]
struct Cli {
    /// WAV file to upload
    file: PathBuf,

    /// Inference endpoint URL
    #[arg(long, env = "CNNVIZ_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Number of predictions to list
    #[arg(long, default_value_t = TOP_PREDICTIONS)]
    top: usize,

    /// Also list feature-map layers, grouped by block
    #[arg(long)]
    layers: bool,

    /// Print the raw response JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn print_predictions(resp: &ApiResponse, top: usize) {
    for row in top_predictions(&resp.predictions, top) {
        println!("{}. {} {:<24} {:>7}", row.rank, row.glyph, row.label, row.percent());
    }
}

fn print_layers(resp: &ApiResponse) {
    let partition = partition_layers(&resp.visualization);
    let shape = |name: &str| {
        resp.visualization
            .get(name)
            .map(|l| l.shape_label())
            .unwrap_or_default()
    };
    if !resp.input_spectrogram.is_empty() {
        println!("input spectrogram  {}", resp.input_spectrogram.shape_label());
    }
    for name in &partition.top_level {
        println!("{name:<18} {}", shape(name));
    }
    for group in &partition.grouped {
        println!("{}/", group.prefix);
        for name in &group.layers {
            println!("  {name:<16} {}", shape(name));
        }
    }
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    eprintln!("Analysing {}...", cli.file.display());
    let resp = infer_lib::classify_file(&client, &cli.endpoint, &cli.file)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    if cli.json {
        match serde_json::to_string_pretty(&resp) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print_predictions(&resp, cli.top);
    if cli.layers {
        println!();
        print_layers(&resp);
    }
}
