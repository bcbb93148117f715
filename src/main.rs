use dotenvy::dotenv;
use trendscope::config::AppConfig;
use trendscope::display::{render_levels, technical_matrix, MarketSentiment, TrendReport};
use trendscope::logging;
use trendscope::services::{IndicatorProvider, MockIndicatorProvider};
use trendscope::signals::TrendClassifier;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = AppConfig::from_env()?;
    let classifier = TrendClassifier::new(config.classifier);
    let provider = MockIndicatorProvider::new();

    for symbol in provider.symbols() {
        let asset = provider.get_asset(&symbol)?;
        let analysis = classifier.classify_asset(&asset)?;
        let matrix = technical_matrix(&asset.indicators, &analysis);
        print_report(&TrendReport::new(asset, analysis), &matrix);
        println!();
    }

    let sentiment = MarketSentiment::from_index(provider.fear_greed_index());
    match sentiment.fear_greed_index {
        Some(index) => println!("Fear & Greed: {} ({})", index, sentiment.label),
        None => println!("Fear & Greed: {}", sentiment.label),
    }

    Ok(())
}

fn print_report(report: &TrendReport, matrix: &[trendscope::display::MatrixRow]) {
    println!("{} ({})", report.symbol, report.name);
    println!(
        "  \x1b[{}m{}\x1b[0m  score {}/10",
        report.tone.ansi_code(),
        report.label,
        report.analysis.score
    );
    println!("  Strategy: {}", report.action);
    if let Some(advice) = &report.advice {
        println!("  [{}] {}", advice.badge, advice.headline);
        println!("  {}", advice.note);
    }
    println!("  Signals:");
    for row in matrix {
        println!(
            "    {} {:<20} {:<28} {}",
            if row.passed { "+" } else { "-" },
            row.indicator,
            row.value,
            row.criterion
        );
    }
    println!(
        "  Close {}  Change {:+.2}%",
        report.indicators.close, report.indicators.change_percent
    );
    println!("  Resistance: {}", render_levels(&report.levels.resistance));
    println!("  Support:    {}", render_levels(&report.levels.support));
}
