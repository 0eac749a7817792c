//! Terminal adapter - text rendering for the command-line front end.

mod render;

pub use render::{
    render_health, render_history, render_home, render_overview, render_profile,
    render_questionnaire, render_results, APP_TITLE, NO_RESULTS_MESSAGE, STORIES_HEADING,
};
