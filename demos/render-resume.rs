//! Renders a résumé JSON file to PDF.
//!
//! ```text
//! RUST_LOG=cv_pdf=debug cargo run --example render-resume -- demos/jane-doe.json [layout.json]
//! ```

use cv_pdf::{render_with, LayoutConfig, ResumeRecord, StandardMetrics};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cv_pdf=info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "demos/jane-doe.json".to_string());

    let json = std::fs::read_to_string(&path).expect("can read resume");
    let record = ResumeRecord::from_json(&json).expect("valid resume");
    let config = match args.next() {
        Some(config) => {
            let config = std::fs::read_to_string(config).expect("can read layout config");
            LayoutConfig::from_json(&config).expect("valid layout config")
        }
        None => LayoutConfig::default(),
    };

    let document = render_with(&record, &config, &StandardMetrics);
    let file_name = record.suggested_file_name();
    let mut out = std::fs::File::create(&file_name).expect("can create output file");
    document.write(&mut out).expect("can write PDF");

    tracing::info!(pages = document.page_count(), file = %file_name, "wrote resume");
}
