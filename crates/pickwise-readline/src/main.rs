mod helper;
mod view;

use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use colored::{ColoredString, Colorize};
use rustyline::Editor;
use tokio::time::sleep;

use helper::CliHelper;
use pickwise_core::catalog::{self, CatalogQuery};
use pickwise_core::category::icon_for;
use pickwise_core::flow::FlowPhase;
use pickwise_core::locale::Language;
use pickwise_core::theme::Theme;
use pickwise_infrastructure::{ConfigService, PreferenceStore};
use pickwise_interaction::{
    BackendClient, Banner, BannerKind, FlowController, FlowEvent, HttpBackend, QuestionCard,
    SECOND_BANNER_DELAY,
};

fn heading(text: &str, theme: Theme) -> ColoredString {
    match theme {
        Theme::Dark => text.bright_magenta().bold(),
        Theme::Light => text.magenta().bold(),
    }
}

fn print_banner(banner: &Banner) {
    let line = match banner.kind {
        BannerKind::Info => format!("ℹ {}", banner.text).bright_cyan(),
        BannerKind::Warning => format!("⚠ {}", banner.text).yellow(),
    };
    println!("{line}");
}

fn print_landing(controller: &FlowController) {
    println!(
        "{}",
        view::landing(controller.categories(), controller.language()).bright_white()
    );
}

/// Renders one batch of display events in order.
async fn render_events(
    events: &[FlowEvent],
    controller: &FlowController,
    current_question: &mut Option<QuestionCard>,
) {
    for event in events {
        match event {
            FlowEvent::ShowProcessing(text) | FlowEvent::ShowGenerating(text) => {
                println!("{}", text.bright_black());
            }
            FlowEvent::HideOverlay => {
                // Line-oriented terminal, nothing to clear.
            }
            FlowEvent::InlineWarning(text) => {
                println!("{}", text.yellow());
            }
            FlowEvent::AnswerAccepted(text) => {
                println!("{}", format!("> {text}").green());
            }
            FlowEvent::QuestionReady(card) => {
                *current_question = Some(card.clone());
                let rendered = view::question_card(
                    card,
                    controller.state().step,
                    controller.expected_total(),
                );
                println!("{}", rendered.bright_blue());
            }
            FlowEvent::RecommendationsReady { items, banners } => {
                *current_question = None;
                for banner in banners.iter().filter(|b| !b.delayed) {
                    print_banner(banner);
                }
                println!("{}", view::recommendations(items).bright_white());
                for banner in banners.iter().filter(|b| b.delayed) {
                    sleep(SECOND_BANNER_DELAY).await;
                    print_banner(banner);
                }
            }
            FlowEvent::CategoriesRefreshed(names) => {
                *current_question = None;
                println!("{}", controller.language().landing_prompt().bright_white());
                for name in names {
                    println!("  {} {}", icon_for(controller.categories(), name), name);
                }
            }
            FlowEvent::ErrorScreen(text) => {
                *current_question = None;
                println!("{}", text.red());
            }
            FlowEvent::LandingCleared => {
                *current_question = None;
                print_landing(controller);
            }
        }
    }
}

/// Parses the `/browse` argument string into a catalog query.
///
/// `key=value` tokens set the color, size, and rating predicates; everything
/// else joins into the free-text filter.
fn parse_browse_query(args: &str) -> CatalogQuery {
    let mut query = CatalogQuery::default();
    let mut text_parts: Vec<&str> = Vec::new();
    for token in args.split_whitespace() {
        match token.split_once('=') {
            Some(("color", value)) => query.color = Some(value.to_string()),
            Some(("size", value)) => query.size = Some(value.to_string()),
            Some(("rating", value)) => query.min_rating = value.parse().ok(),
            _ => text_parts.push(token),
        }
    }
    if !text_parts.is_empty() {
        query.text = Some(text_parts.join(" "));
    }
    query
}

async fn browse(backend: &HttpBackend, args: &str) {
    match backend.products().await {
        Ok(items) => {
            let query = parse_browse_query(args);
            let matched = catalog::filter(&items, &query);
            println!("{}", view::catalog_rows(&matched).bright_white());
        }
        Err(err) => {
            println!("{}", format!("Could not load products: {err}").red());
        }
    }
}

/// Case-insensitive match of the input against the known category names.
fn known_category(controller: &FlowController, input: &str) -> Option<String> {
    controller
        .categories()
        .keys()
        .find(|name| name.eq_ignore_ascii_case(input))
        .cloned()
}

/// Resolves an answer line: a number picks the option, anything else is
/// submitted as typed.
fn resolve_answer(input: &str, card: &QuestionCard) -> String {
    if let Ok(index) = input.parse::<usize>() {
        if index >= 1 && index <= card.options.len() {
            return card.options[index - 1].clone();
        }
    }
    input.to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // ===== Configuration and preferences =====
    let config = ConfigService::new()?.get_config();
    let store = PreferenceStore::new()?;
    let theme = store.load();

    // The language is session state only; every start begins in the default.
    let backend = Arc::new(HttpBackend::new(config.base_url.clone()));
    let mut controller = FlowController::new(backend.clone(), Language::default(), theme);
    if let Err(err) = controller.load_categories().await {
        log::warn!("could not load categories from {}: {err}", config.base_url);
        println!(
            "{}",
            format!("Backend unreachable at {}, starting anyway", config.base_url).yellow()
        );
    }

    // ===== REPL setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", heading("=== pickwise ===", controller.theme()));
    println!(
        "{}",
        "Type a product name, or /home /lang /theme /browse. 'quit' to exit.".bright_black()
    );
    println!();
    print_landing(&controller);

    let mut current_question: Option<QuestionCard> = None;

    // ===== Main REPL loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                if let Some(rest) = trimmed.strip_prefix('/') {
                    let (command, args) = rest.split_once(' ').unwrap_or((rest, ""));
                    match command {
                        "home" => {
                            let events = controller.reset();
                            render_events(&events, &controller, &mut current_question).await;
                        }
                        "lang" => match Language::from_str(args.trim()) {
                            Ok(language) => {
                                controller.set_language(language);
                                if let Err(err) = controller.load_categories().await {
                                    log::warn!("could not reload categories: {err}");
                                }
                                print_landing(&controller);
                            }
                            Err(_) => println!("{}", "Usage: /lang en|tr".yellow()),
                        },
                        "theme" => match Theme::from_str(args.trim()) {
                            Ok(theme) => {
                                controller.set_theme(theme);
                                if let Err(err) = store.save(theme) {
                                    log::warn!("could not persist theme: {err}");
                                }
                                println!("{}", heading(&format!("Theme set to {theme}"), theme));
                            }
                            Err(_) => println!("{}", "Usage: /theme light|dark".yellow()),
                        },
                        "browse" => browse(&backend, args).await,
                        _ => println!("{}", "Unknown command".bright_black()),
                    }
                    continue;
                }

                let phase = controller.phase().clone();
                let events = match (&current_question, &phase) {
                    (Some(card), FlowPhase::QuestionDisplayed) => {
                        let answer = resolve_answer(trimmed, card);
                        controller.answer(&answer).await
                    }
                    _ => match known_category(&controller, trimmed) {
                        // An exact category name skips detection.
                        Some(category) => controller.select_category(&category).await,
                        None => controller.submit_query(trimmed).await,
                    },
                };
                render_events(&events, &controller, &mut current_question).await;
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(options: &[&str]) -> QuestionCard {
        QuestionCard {
            question: "q".to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            emoji: None,
            tooltip: None,
            progress: None,
        }
    }

    #[test]
    fn test_resolve_answer_by_number() {
        let card = card(&["Yes", "No", "No preference"]);
        assert_eq!(resolve_answer("2", &card), "No");
        assert_eq!(resolve_answer("1", &card), "Yes");
    }

    #[test]
    fn test_resolve_answer_out_of_range_is_literal() {
        let card = card(&["Yes", "No"]);
        assert_eq!(resolve_answer("0", &card), "0");
        assert_eq!(resolve_answer("7", &card), "7");
        assert_eq!(resolve_answer("maybe", &card), "maybe");
    }

    #[test]
    fn test_parse_browse_query() {
        let query = parse_browse_query("logitech mouse color=black rating=4.5 size=M");
        assert_eq!(query.text.as_deref(), Some("logitech mouse"));
        assert_eq!(query.color.as_deref(), Some("black"));
        assert_eq!(query.size.as_deref(), Some("M"));
        assert_eq!(query.min_rating, Some(4.5));
    }

    #[test]
    fn test_parse_browse_query_empty() {
        assert_eq!(parse_browse_query("  "), CatalogQuery::default());
    }
}
