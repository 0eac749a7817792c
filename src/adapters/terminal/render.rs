//! Plain-text rendering of the workflow's screens.
//!
//! Every function returns a `String`; the caller decides where it goes.

use std::fmt::Write;

use crate::application::QuestionnaireController;
use crate::domain::analysis::{AnalysisView, OptionCard, ResultView, Stories, SEVERITY_SEGMENTS};
use crate::domain::decision::{FormField, GOAL_SUGGESTIONS};
use crate::domain::patterns::{ChartPoint, PatternOverview, PatternOverviewView};
use crate::domain::user::{DecisionHistory, UserProfile};
use crate::ports::HealthStatus;

pub const APP_TITLE: &str = "Regret Prevention Engine";
pub const NO_RESULTS_MESSAGE: &str = "No analysis results available";
pub const STORIES_HEADING: &str = "Real Stories from People Who Made This Choice";

const CHART_WIDTH: usize = 30;

// `write!` into a String cannot fail.
macro_rules! outln {
    ($out:expr) => {{
        let _ = writeln!($out);
    }};
    ($out:expr, $($arg:tt)*) => {{
        let _ = writeln!($out, $($arg)*);
    }};
}

pub fn render_home(overview: &PatternOverview) -> String {
    let mut out = String::new();
    outln!(out, "{APP_TITLE}");
    outln!(out, "Use data-driven insights to make decisions you won't regret");
    outln!(out);
    outln!(out, "How It Works");
    outln!(out, "  1. Share Your Situation - tell us about your decision and the options you're considering");
    outln!(out, "  2. AI Analysis - we match your situation to thousands of real regret stories");
    outln!(out, "  3. Get Predictions - regret probability for each option with detailed reasoning");
    outln!(out);
    out.push_str(&render_overview(overview));
    out
}

pub fn render_overview(overview: &PatternOverview) -> String {
    let view = match overview {
        PatternOverview::Populated(view) => view,
        other => return format!("{}\n", other.message().unwrap_or_default()),
    };
    render_overview_view(view)
}

fn render_overview_view(view: &PatternOverviewView) -> String {
    let mut out = String::new();
    outln!(out, "Our Pattern Database");
    if let Some(total) = view.total_patterns {
        outln!(out, "Analysis based on {total} real regret stories");
    }
    if let Some(extracted_at) = &view.extracted_at {
        outln!(out, "Last updated: {extracted_at}");
    }

    for (title, series) in [
        ("Regrets by Category", &view.categories),
        ("Regret Severity Distribution", &view.severity),
        ("Age When Decision Was Made", &view.ages),
    ] {
        if let Some(points) = series {
            outln!(out);
            outln!(out, "{title}");
            out.push_str(&render_chart(points));
        }
    }

    if !view.breakdown.is_empty() {
        outln!(out);
        for item in &view.breakdown {
            outln!(out, "  {:<14} {}", item.category, item.count);
        }
    }
    out
}

fn render_chart(points: &[ChartPoint]) -> String {
    let max = points.iter().map(|p| p.value).max().unwrap_or(0).max(1);
    let width = points.iter().map(|p| p.label.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for point in points {
        let filled = (point.value as usize * CHART_WIDTH).div_ceil(max as usize);
        outln!(
            out,
            "  {:<width$} |{} {}",
            point.label,
            "#".repeat(filled),
            point.value,
        );
    }
    out
}

/// Form with current values, goal suggestions and the last error.
pub fn render_questionnaire(controller: &QuestionnaireController) -> String {
    let form = controller.form();
    let mut out = String::new();
    outln!(out, "Tell us about your decision");
    for field in FormField::all() {
        let marker = if field.is_required() { "*" } else { " " };
        outln!(out, " {marker} {:<32} {}", field.label(), form.get(*field));
    }
    outln!(out);
    outln!(out, "Goal suggestions:");
    for (i, goal) in GOAL_SUGGESTIONS.iter().enumerate() {
        outln!(out, "  [{}] {}", i + 1, goal);
    }
    if controller.is_loading() {
        outln!(out);
        outln!(out, "Analyzing your decision...");
    }
    if let Some(error) = controller.error() {
        outln!(out);
        outln!(out, "Error: {error}");
    }
    out
}

pub fn render_results(view: &ResultView) -> String {
    match view {
        ResultView::NoData => format!("{NO_RESULTS_MESSAGE}\n\n[Start Over]\n"),
        ResultView::Ready(view) => render_analysis(view),
    }
}

fn render_analysis(view: &AnalysisView) -> String {
    let mut out = String::new();
    outln!(out, "Your Regret Analysis");
    outln!(
        out,
        "Based on {} similar situations from our database",
        view.patterns_label
    );

    if let Some(note) = &view.server_note {
        outln!(out);
        outln!(out, "Note: {note}");
    }

    if let Some(recommendation) = &view.recommendation {
        outln!(out);
        outln!(out, "Our Recommendation");
        if let Some(option) = &recommendation.suggested_option {
            outln!(out, "  {option}");
        }
        if let Some(reasoning) = &recommendation.reasoning {
            outln!(out, "  {reasoning}");
        }
        if let Some(confidence) = recommendation.confidence {
            outln!(out, "  Confidence: {confidence}");
        }
    }

    if let Some(factors) = &view.hidden_factors {
        outln!(out);
        outln!(out, "Hidden High-Stakes Factors");
        outln!(out, "Our analysis detected important factors you might be overlooking:");
        bullets(&mut out, factors);
    }

    if !view.options.is_empty() {
        outln!(out);
        outln!(out, "Detailed Analysis by Option");
        for card in &view.options {
            out.push_str(&render_card(card));
        }
    }

    if let Some(insights) = &view.overall_insights {
        outln!(out);
        outln!(out, "Overall Insights");
        bullets(&mut out, insights);
    }

    outln!(out);
    outln!(out, "[Analyze Another Decision]");
    out
}

fn render_card(card: &OptionCard) -> String {
    let mut out = String::new();
    outln!(out);
    outln!(out, "{}. {}", card.index + 1, card.label);

    match &card.probability {
        Some(p) => outln!(out, "  Regret Probability: {}% ({})", p.value, p.band.color()),
        None => outln!(out, "  Regret Probability: unknown"),
    }
    match &card.severity {
        Some(s) => {
            let bar: String = s
                .bar
                .segments()
                .iter()
                .map(|segment| if segment.is_some() { '#' } else { '.' })
                .collect();
            outln!(
                out,
                "  Severity: {}/{} [{}] ({})",
                s.value,
                SEVERITY_SEGMENTS,
                bar,
                s.bar.band.color()
            );
        }
        None => outln!(out, "  Severity: unknown"),
    }
    if let Some(timeline) = &card.timeline {
        outln!(out, "  Timeline: {timeline}");
    }
    outln!(out, "  Similar Cases: {}", card.similar_situations_label);

    for (title, items) in [
        ("Pros", &card.pros),
        ("Cons", &card.cons),
        ("Key Insights", &card.key_insights),
    ] {
        if let Some(items) = items {
            outln!(out, "  {title}:");
            bullets(&mut out, items);
        }
    }

    match &card.stories {
        Some(Stories::Collapsed { count }) => {
            outln!(out, "  [+] {STORIES_HEADING} ({count})");
        }
        Some(Stories::Expanded { quotes }) => {
            outln!(out, "  [-] {STORIES_HEADING}");
            for quote in quotes {
                outln!(out, "      \"{quote}\"");
            }
        }
        None => {}
    }
    out
}

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        outln!(out, "    - {item}");
    }
}

pub fn render_history(history: &DecisionHistory, limit: usize) -> String {
    if history.is_empty() {
        return "No decisions recorded yet.\n".to_string();
    }
    let mut out = String::new();
    for entry in history.entries().iter().take(limit) {
        outln!(
            out,
            "{}  {:<12} {}",
            entry.date.display_date(),
            entry.category.display_name(),
            entry.decision
        );
        if let Some(option) = entry
            .result
            .recommendation
            .as_ref()
            .and_then(|r| r.suggested_option.as_ref())
        {
            outln!(out, "    recommended: {option}");
        }
    }
    out
}

pub fn render_profile(profile: Option<&UserProfile>) -> String {
    match profile {
        Some(profile) if !profile.is_empty() => format!(
            "Age:   {}\nGoals: {}\n",
            profile.age.as_deref().unwrap_or("-"),
            profile.goals.as_deref().unwrap_or("-"),
        ),
        _ => "No profile stored yet.\n".to_string(),
    }
}

pub fn render_health(base_url: &str, health: &HealthStatus) -> String {
    let matcher = if health.matcher_loaded {
        "loaded"
    } else {
        "not loaded"
    };
    format!(
        "{base_url}: {}, pattern matcher {matcher}\n",
        if health.status.is_empty() { "unknown" } else { health.status.as_str() }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{AnalysisResult, ResultPresenter};
    use crate::domain::decision::DecisionCategory;
    use crate::domain::patterns::PatternStats;
    use crate::domain::user::DecisionHistoryEntry;
    use serde_json::json;

    fn presenter() -> ResultPresenter {
        ResultPresenter::new(
            serde_json::from_value(json!({
                "patterns_analyzed": 20,
                "options_analysis": [
                    {"option": "Leave", "regret_probability": 20, "regret_severity": 7,
                     "quotes_examples": ["No regrets"]},
                    {"option": "Stay", "regret_probability": 75}
                ]
            }))
            .unwrap(),
        )
    }

    #[test]
    fn no_data_offers_only_reset() {
        let text = render_results(&ResultView::NoData);
        assert!(text.contains(NO_RESULTS_MESSAGE));
        assert!(text.contains("Start Over"));
    }

    #[test]
    fn results_show_bands_and_bar() {
        let text = render_results(&presenter().view());

        assert!(text.contains("Based on 20 similar situations"));
        assert!(text.contains("Regret Probability: 20% (green)"));
        assert!(text.contains("Regret Probability: 75% (red)"));
        assert!(text.contains("[#######...] (red)"));
        assert!(text.contains("Severity: unknown"));
        assert!(!text.contains("Hidden High-Stakes Factors"));
    }

    #[test]
    fn stories_render_collapsed_then_expanded() {
        let mut presenter = presenter();
        assert!(render_results(&presenter.view()).contains("[+] Real Stories"));

        presenter.toggle_story(0);
        let text = render_results(&presenter.view());
        assert!(text.contains("[-] Real Stories"));
        assert!(text.contains("\"No regrets\""));
    }

    #[test]
    fn overview_messages_and_charts() {
        assert!(render_overview(&PatternOverview::Uninitialized)
            .contains("Pattern database not yet initialized"));

        let stats: PatternStats = serde_json::from_str(
            r#"{"total_patterns": 5, "categories": {}, "severity_distribution": {"3": 5}}"#,
        )
        .unwrap();
        let text = render_overview(&PatternOverview::from(&stats));
        assert!(text.contains("Analysis based on 5 real regret stories"));
        assert!(!text.contains("Regrets by Category"));
        assert!(text.contains("Level 3"));
    }

    #[test]
    fn history_respects_limit() {
        let mut history = DecisionHistory::new();
        for name in ["a", "b", "c"] {
            history.record(DecisionHistoryEntry::record(
                DecisionCategory::Financial,
                name,
                AnalysisResult::default(),
            ));
        }
        let text = render_history(&history, 2);
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains(" c"));
        assert!(!text.contains(" a\n"));
    }

    #[test]
    fn empty_profile_message() {
        assert_eq!(render_profile(None), "No profile stored yet.\n");
        let profile = UserProfile::new("44", "Calm");
        assert!(render_profile(Some(&profile)).contains("Goals: Calm"));
    }
}
