/*!
 * Command-line interface for mdtree
 */

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use mdtree::config::{Args, Config};
use mdtree::renderer::TreeRenderer;
use mdtree::report::{ReportFormat, Reporter, RunReport};
use mdtree::writer::MarkdownWriter;

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "mdtree", &mut io::stdout());
        return Ok(());
    }

    init_logger(args.verbose);

    // Create and validate configuration
    let config = Config::from_args(args);
    config.validate()?;
    log::debug!("Configuration: {:?}", config);

    let progress = ProgressBar::new_spinner();
    match ProgressStyle::default_spinner()
        .template("{spinner:.green} {prefix:.bold.cyan} {pos} entries {wide_msg:.dim.white}")
    {
        Ok(style) => progress.set_style(style),
        Err(e) => log::warn!("Invalid progress template: {}", e),
    }
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_prefix("🌳 Rendering");
    progress.set_message(format!("📂 {}", config.target_dir.display()));

    let renderer = TreeRenderer::new(config.clone(), Arc::new(progress.clone()));
    let writer = MarkdownWriter::new(config.clone());

    let start_time = Instant::now();
    let output = renderer.render()?;
    let (output_path, document) = match writer.write(&output) {
        Ok(written) => written,
        Err(e) => {
            progress.finish_and_clear();
            log::error!("{}", e);
            return Err(e.into());
        }
    };
    let duration = start_time.elapsed();

    progress.finish_and_clear();

    if config.print {
        println!("{}", document);
    }

    let report = RunReport {
        output_file: output_path.display().to_string(),
        output_size: document.len() as u64,
        duration,
        stats: output.stats,
        errors: output.error_messages(),
    };
    Reporter::new(ReportFormat::ConsoleTable).print_report(&report);

    Ok(())
}

/// Configure env_logger from the number of `-v` flags
fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
