//! Interactive session: home, questionnaire, results, start over.

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

use regret_engine::adapters::terminal::{
    render_home, render_questionnaire, render_results,
};
use regret_engine::application::{AppContext, SubmitError, ViewRouter};
use regret_engine::domain::decision::{
    age_in_range, DecisionCategory, DecisionTimeline, FormField, AGE_RANGE, GOAL_SUGGESTIONS,
};
use regret_engine::domain::navigation::Screen;

/// Typed at any field prompt to go back to home.
const START_OVER: &str = ":back";

/// Line-oriented stdin. `None` means the user closed input.
struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    fn stdin() -> Self {
        Self {
            lines: BufReader::new(io::stdin()).lines(),
        }
    }

    async fn ask(&mut self, question: &str) -> anyhow::Result<Option<String>> {
        let mut stdout = io::stdout();
        stdout.write_all(question.as_bytes()).await?;
        stdout.flush().await?;
        Ok(self.lines.next_line().await?.map(|l| l.trim().to_string()))
    }
}

pub async fn run(context: AppContext) -> anyhow::Result<()> {
    let mut router = ViewRouter::new(context);
    let mut prompt = Prompt::stdin();

    loop {
        let keep_going = match router.screen() {
            Screen::Home => home(&mut router, &mut prompt).await?,
            Screen::Questionnaire => questionnaire(&mut router, &mut prompt).await?,
            Screen::Results => results(&mut router, &mut prompt).await?,
        };
        if !keep_going {
            return Ok(());
        }
    }
}

async fn home(router: &mut ViewRouter, prompt: &mut Prompt) -> anyhow::Result<bool> {
    if let Some(overview) = router.overview_mut() {
        let overview = overview.load().await;
        println!("{}", render_home(overview));
    }

    match prompt.ask("[s] Start your analysis  [q] Quit > ").await? {
        Some(answer) if answer.eq_ignore_ascii_case("s") || answer.is_empty() => {
            router.start().await;
            Ok(true)
        }
        Some(answer) if answer.eq_ignore_ascii_case("q") => Ok(false),
        Some(_) => Ok(true),
        None => Ok(false),
    }
}

async fn questionnaire(router: &mut ViewRouter, prompt: &mut Prompt) -> anyhow::Result<bool> {
    match fill_form(router, prompt).await? {
        FormOutcome::Filled => {}
        FormOutcome::StartOver => {
            router.reset().await;
            return Ok(true);
        }
        FormOutcome::Closed => return Ok(false),
    }

    loop {
        match submit(router).await {
            Ok(()) => return Ok(true),
            Err(SubmitError::Invalid(e)) => {
                println!("\n{e}\n");
                return Ok(true);
            }
            Err(SubmitError::AlreadyInFlight) => return Ok(true),
            Err(SubmitError::Analysis { .. }) => {
                if let Some(controller) = router.questionnaire() {
                    println!("\n{}", render_questionnaire(controller));
                }
                match prompt
                    .ask("[r] Retry  [e] Edit answers  [b] Start over > ")
                    .await?
                {
                    Some(a) if a.eq_ignore_ascii_case("r") => continue,
                    Some(a) if a.eq_ignore_ascii_case("b") => {
                        router.reset().await;
                        return Ok(true);
                    }
                    Some(_) => return Ok(true),
                    None => return Ok(false),
                }
            }
        }
    }
}

/// Submits in two steps so the loading state is on screen while the
/// analysis request is out.
async fn submit(router: &mut ViewRouter) -> Result<(), SubmitError> {
    let Some(pending) = router.begin_submit()? else {
        return Ok(());
    };
    if let Some(controller) = router.questionnaire() {
        println!("\n{}", render_questionnaire(controller));
    }
    let outcome = router.context().analysis.analyze(&pending.request).await;
    router.finish_submit(pending, outcome).await
}

enum FormOutcome {
    Filled,
    StartOver,
    Closed,
}

/// Typed reading of one answer at a field prompt.
#[derive(Debug, PartialEq)]
enum Answer {
    Keep,
    StartOver,
    Suggestion(usize),
    Value(String),
}

fn classify(field: FormField, answer: &str) -> Answer {
    if answer.is_empty() {
        return Answer::Keep;
    }
    if answer.eq_ignore_ascii_case(START_OVER) {
        return Answer::StartOver;
    }
    if field == FormField::Goals {
        if let Some(n) = answer.strip_prefix('+').and_then(|n| n.parse::<usize>().ok()) {
            return Answer::Suggestion(n);
        }
    }
    Answer::Value(answer.to_string())
}

/// Walks every field. An empty answer keeps the current value and
/// [`START_OVER`] leaves for home.
async fn fill_form(router: &mut ViewRouter, prompt: &mut Prompt) -> anyhow::Result<FormOutcome> {
    println!(
        "\nTell us about your decision (Enter keeps the value in brackets, {START_OVER} starts over)\n"
    );

    for field in FormField::all() {
        loop {
            let Some(controller) = router.questionnaire_mut() else {
                return Ok(FormOutcome::Filled);
            };
            let current = controller.form().get(*field).to_string();

            match field {
                FormField::Timeline => list_choices(
                    DecisionTimeline::all()
                        .iter()
                        .map(|t| (t.as_str(), t.display_name())),
                ),
                FormField::Category => list_choices(
                    DecisionCategory::all()
                        .iter()
                        .map(|c| (c.as_str(), c.display_name())),
                ),
                FormField::Goals => {
                    for (i, goal) in GOAL_SUGGESTIONS.iter().enumerate() {
                        println!("  +{} {}", i + 1, goal);
                    }
                }
                _ => {}
            }

            let question = format!("{} [{}]: ", field.label(), current);
            let Some(answer) = prompt.ask(&question).await? else {
                return Ok(FormOutcome::Closed);
            };

            let answer = match classify(*field, &answer) {
                Answer::StartOver => return Ok(FormOutcome::StartOver),
                Answer::Keep => {
                    if field.is_required() && current.trim().is_empty() {
                        println!("  This field is required.");
                        continue;
                    }
                    break;
                }
                Answer::Suggestion(n) => {
                    if !controller.append_goal(n.wrapping_sub(1)) {
                        println!("  No suggestion {n}.");
                    }
                    continue;
                }
                Answer::Value(answer) => answer,
            };

            if *field == FormField::Age {
                match answer.parse::<i64>() {
                    Ok(age) if age_in_range(age) => {}
                    _ => {
                        println!(
                            "  Please enter a whole number between {} and {}.",
                            AGE_RANGE.start(),
                            AGE_RANGE.end()
                        );
                        continue;
                    }
                }
            }

            let value = match field {
                FormField::Timeline => choice(DecisionTimeline::all(), &answer, |t| t.as_str()),
                FormField::Category => choice(DecisionCategory::all(), &answer, |c| c.as_str()),
                _ => answer,
            };

            match controller.set_field(*field, &value) {
                Ok(()) => break,
                Err(e) => println!("  {e}"),
            }
        }
    }
    Ok(FormOutcome::Filled)
}

fn list_choices<'a>(choices: impl Iterator<Item = (&'a str, &'a str)>) {
    for (i, (value, name)) in choices.enumerate() {
        println!("  {}) {:<12} {}", i + 1, value, name);
    }
}

/// Accepts a 1-based index into `all` or the value itself.
fn choice<T>(all: &[T], answer: &str, as_str: impl Fn(&T) -> &'static str) -> String {
    answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| all.get(i))
        .map(|item| as_str(item).to_string())
        .unwrap_or_else(|| answer.to_string())
}

async fn results(router: &mut ViewRouter, prompt: &mut Prompt) -> anyhow::Result<bool> {
    let Some(presenter) = router.presenter_mut() else {
        router.reset().await;
        return Ok(true);
    };
    println!("\n{}", render_results(&presenter.view()));

    let answer = prompt
        .ask("[1-3] Toggle real stories  [a] Analyze another decision  [q] Quit > ")
        .await?;
    match answer {
        None => Ok(false),
        Some(a) if a.eq_ignore_ascii_case("q") => Ok(false),
        Some(a) if a.eq_ignore_ascii_case("a") => {
            router.reset().await;
            Ok(true)
        }
        Some(a) => {
            if let Some(index) = a.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
                presenter.toggle_story(index);
            }
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_over_is_accepted_at_every_field() {
        for field in FormField::all() {
            assert_eq!(classify(*field, ":back"), Answer::StartOver);
            assert_eq!(classify(*field, ":BACK"), Answer::StartOver);
        }
    }

    #[test]
    fn empty_answer_keeps_current_value() {
        assert_eq!(classify(FormField::Situation, ""), Answer::Keep);
    }

    #[test]
    fn plus_number_picks_a_goal_only_on_the_goals_field() {
        assert_eq!(classify(FormField::Goals, "+2"), Answer::Suggestion(2));
        assert_eq!(
            classify(FormField::Situation, "+2"),
            Answer::Value("+2".to_string())
        );
    }

    #[test]
    fn choices_accept_index_or_value() {
        let all = DecisionCategory::all();
        assert_eq!(choice(all, "1", |c| c.as_str()), all[0].as_str());
        assert_eq!(choice(all, "health", |c| c.as_str()), "health");
        assert_eq!(choice(all, "99", |c| c.as_str()), "99");
    }
}
