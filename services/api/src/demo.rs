use clap::Args;
use qap_compare::error::AppError;
use qap_compare::workflows::comparison::{
    samples, ComparisonReport, ComparisonRequest, ComparisonService, ProjectScorecard,
    StaticAmenityCatalog,
};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct CompareArgs {
    /// Index into the California sample set (0-4)
    #[arg(long, default_value_t = 0)]
    pub(crate) california_sample: usize,
    /// Index into the Ohio sample set (0-9)
    #[arg(long, default_value_t = 0)]
    pub(crate) ohio_sample: usize,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Emit the raw report JSON after the summary
    #[arg(long)]
    pub(crate) json: bool,
}

async fn run_sample_comparison(
    california_sample: usize,
    ohio_sample: usize,
) -> Result<ComparisonReport, AppError> {
    let request = ComparisonRequest {
        california: samples::california_sample(california_sample)?,
        ohio: samples::ohio_sample(ohio_sample)?,
    };

    let service = ComparisonService::new(Arc::new(StaticAmenityCatalog));
    let report = service.compare(request).await?;
    Ok(report)
}

pub(crate) async fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let report = run_sample_comparison(args.california_sample, args.ohio_sample).await?;
    let rendered = serde_json::to_string_pretty(&report)
        .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
    println!("{rendered}");
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let report = run_sample_comparison(0, 0).await?;

    println!("QAP side-by-side comparison");
    println!("===========================");
    render_scorecard("California", &report.projects.california.address, &report.california);
    println!();
    render_scorecard("Ohio", &report.projects.ohio.address, &report.ohio);
    println!();

    let leader = if report.california.composite >= report.ohio.composite {
        "California"
    } else {
        "Ohio"
    };
    println!(
        "Leader: {leader} ({:.2}% vs {:.2}%)",
        report.california.composite.max(report.ohio.composite),
        report.california.composite.min(report.ohio.composite),
    );

    if args.json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("\n{rendered}");
    }

    Ok(())
}

fn render_scorecard(state: &str, address: &str, card: &ProjectScorecard) {
    println!("{state} project — {address}, {}", card.city);
    println!("  rubric total:   {:>6.2}%", card.rubric_total);
    for (category, entry) in card.rubric.entries() {
        println!(
            "    {category:<22} {:>5.1} / {:<4.1} ({:.1}%)",
            entry.score, entry.max_score, entry.percentage
        );
    }
    println!("  location total: {:>6.2}%", card.location_total);
    for (category, entry) in card.location.entries() {
        println!(
            "    {category:<22} {:>5.1} / {:<4.1} ({:.1}%)",
            entry.score, entry.max_score, entry.percentage
        );
    }
    println!("  composite:      {:>6.2}%", card.composite);
}
