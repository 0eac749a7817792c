//! Non-interactive subcommands.

use anyhow::{bail, Context};

use regret_engine::adapters::terminal::{
    render_health, render_history, render_overview, render_profile, render_results,
};
use regret_engine::application::{AppContext, PatternOverviewController, ViewRouter};
use regret_engine::domain::analysis::ResultPresenter;
use regret_engine::domain::decision::FormField;

use crate::AnalyzeArgs;

pub async fn analyze(context: AppContext, args: AnalyzeArgs) -> anyhow::Result<()> {
    if !(2..=3).contains(&args.options.len()) {
        bail!("expected two or three --option values, got {}", args.options.len());
    }

    let mut router = ViewRouter::new(context);
    router.start().await;
    let controller = router
        .questionnaire_mut()
        .context("questionnaire did not open")?;

    let option_fields = [FormField::Option1, FormField::Option2, FormField::Option3];
    let fields = [
        (FormField::Age, args.age.as_str()),
        (FormField::Situation, args.situation.as_str()),
        (FormField::DecisionDescription, args.decision.as_str()),
        (FormField::Goals, args.goals.as_str()),
        (FormField::Timeline, args.timeline.as_str()),
        (FormField::Category, args.category.as_str()),
    ]
    .into_iter()
    .chain(
        option_fields
            .into_iter()
            .zip(args.options.iter().map(String::as_str)),
    );
    for (field, value) in fields {
        controller
            .set_field(field, value)
            .with_context(|| format!("invalid --{}", field.name()))?;
    }

    let completion = controller.submit().await?;
    let result = completion.result.clone();
    router.complete(completion).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let presenter = match router.presenter() {
            Some(presenter) => presenter.clone(),
            None => ResultPresenter::new(result),
        };
        print!("{}", render_results(&presenter.view()));
    }
    Ok(())
}

pub async fn patterns(context: AppContext) -> anyhow::Result<()> {
    let mut overview = PatternOverviewController::mount(context.stats.clone());
    print!("{}", render_overview(overview.load().await));
    Ok(())
}

pub async fn history(context: AppContext, limit: usize) -> anyhow::Result<()> {
    let history = context.history().load().await;
    print!("{}", render_history(&history, limit));
    Ok(())
}

pub async fn profile(context: AppContext) -> anyhow::Result<()> {
    let profile = context.profiles().load().await;
    print!("{}", render_profile(profile.as_ref()));
    Ok(())
}

pub async fn health(context: AppContext, base_url: &str) -> anyhow::Result<()> {
    let status = context
        .analysis
        .health()
        .await
        .with_context(|| format!("analysis service at {base_url} is unreachable"))?;
    print!("{}", render_health(base_url, &status));
    Ok(())
}
