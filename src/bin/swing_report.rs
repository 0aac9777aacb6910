use std::env;
use std::path::Path;
use swing_coach::config::report::{load_config, OutputFormat};
use swing_coach::io::{load_pose_sequence, write_json_file, write_text_file};
use swing_coach::prompt::PromptBuilder;
use swing_coach::{AnalysisReport, SwingAnalyzer, SwingError};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(stringify)?;

    let sequence = load_pose_sequence(&config.input).map_err(stringify)?;
    let analyzer = SwingAnalyzer::new(config.params.clone());
    let report = analyzer.analyze_with_diagnostics(&sequence);

    let format = config.output.format;
    if format.includes_text() {
        print_text_summary(&report);
    }

    if format.includes_json() {
        if let Some(path) = &config.output.json_out {
            write_json_file(path, &report).map_err(stringify)?;
            println!("JSON report written to {}", path.display());
        } else {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            if format == OutputFormat::Both {
                println!("\nJSON report:\n{json}");
            } else {
                println!("{json}");
            }
        }
    }

    if let Some(path) = &config.output.prompt_out {
        let prompt = PromptBuilder::new(config.prompt.clone()).build(&report.metrics);
        write_text_file(path, &prompt).map_err(stringify)?;
        if format.includes_text() {
            println!("Coaching prompt written to {}", path.display());
        } else {
            eprintln!("Coaching prompt written to {}", path.display());
        }
    }

    Ok(())
}

fn print_text_summary(report: &AnalysisReport) {
    let trace = &report.trace;
    println!("Swing segmentation");
    println!(
        "  frames: {} (with pose: {})",
        trace.input.frames, trace.input.frames_with_pose
    );
    println!("  address:   {}", format_frame(report.segments.address));
    println!("  backswing: {}", format_frame(report.segments.backswing));
    println!("  impact:    {}", format_frame(report.segments.impact));
    if trace.segmentation.impact.fell_back {
        println!("  note: impact fell back to the address frame");
    }
    if !trace.segmentation.ordered() {
        println!("  note: phases are unresolved or out of swing order");
    }

    println!("\nMetrics");
    for line in report.metrics.summary_lines() {
        println!("  {line}");
    }

    let stage_ms = |label: &str| trace.timings.stage_ms(label).unwrap_or(0.0);
    println!(
        "\nTimings (ms): segmentation={:.3} metrics={:.3} total={:.3}",
        stage_ms("segmentation"),
        stage_ms("metrics"),
        trace.timings.total_ms
    );
}

fn format_frame(frame: Option<usize>) -> String {
    frame
        .map(|f| f.to_string())
        .unwrap_or_else(|| "not found".to_string())
}

fn stringify(err: SwingError) -> String {
    err.to_string()
}

fn usage() -> String {
    "Usage: swing_report <config.json>".to_string()
}
