use super::*;
use crate::core::display_mode::DisplayMode;
use crate::core::exchange::ExchangeError;
use crate::core::message::Message;
use crate::ui::theme::Theme;
use tokio::sync::mpsc;

const CTX: AppActionContext = AppActionContext {
    term_width: 80,
    term_height: 24,
};

fn create_test_app() -> App {
    App::new("https://hook.test/webhook", DisplayMode::DARK)
}

fn type_text(app: &mut App, text: &str) {
    let text = app.ui.apply_textarea_edit(|ta| {
        ta.insert_str(text);
    });
    apply_action(app, AppAction::EditInput { text }, CTX);
}

fn submit(app: &mut App) -> Option<ExchangeParamsView> {
    match apply_action(app, AppAction::Submit, CTX) {
        Some(AppCommand::SpawnExchange(params)) => Some(ExchangeParamsView {
            webhook_url: params.webhook_url,
            message: params.message,
            exchange_id: params.exchange_id,
        }),
        None => None,
    }
}

struct ExchangeParamsView {
    webhook_url: String,
    message: String,
    exchange_id: u64,
}

fn log(app: &App) -> Vec<Message> {
    app.conversation.messages().iter().cloned().collect()
}

#[test]
fn hola_scenario_round_trip() {
    let mut app = create_test_app();
    type_text(&mut app, "Hola");

    let exchange = submit(&mut app).expect("exchange spawned");
    assert_eq!(exchange.webhook_url, "https://hook.test/webhook");
    assert_eq!(exchange.message, "Hola");
    assert_eq!(log(&app), vec![Message::user("Hola")]);
    assert_eq!(app.conversation.pending_input(), "");
    assert_eq!(app.ui.input_text(), "");
    assert!(app.conversation.awaiting_response());

    apply_action(
        &mut app,
        AppAction::ExchangeResolved {
            exchange_id: exchange.exchange_id,
            outcome: Ok("¡Hola! ¿En qué puedo ayudarte?".to_string()),
        },
        CTX,
    );
    assert_eq!(
        log(&app),
        vec![
            Message::user("Hola"),
            Message::bot("¡Hola! ¿En qué puedo ayudarte?")
        ]
    );
    assert!(!app.conversation.awaiting_response());
}

#[test]
fn failing_exchange_scenario_shows_generic_error() {
    let mut app = create_test_app();
    type_text(&mut app, "test");
    let exchange = submit(&mut app).expect("exchange spawned");

    apply_action(
        &mut app,
        AppAction::ExchangeResolved {
            exchange_id: exchange.exchange_id,
            outcome: Err(ExchangeError::MalformedResponse),
        },
        CTX,
    );
    assert_eq!(
        log(&app),
        vec![
            Message::user("test"),
            Message::bot("Lo siento, ha ocurrido un error.")
        ]
    );
    assert!(!app.conversation.awaiting_response());
}

#[test]
fn whitespace_submit_spawns_nothing() {
    let mut app = create_test_app();
    type_text(&mut app, "   ");
    assert!(submit(&mut app).is_none());
    assert!(log(&app).is_empty());
    assert!(!app.conversation.awaiting_response());
    assert_eq!(app.ui.input_text(), "   ");
}

#[test]
fn submit_while_awaiting_keeps_single_flight() {
    let mut app = create_test_app();
    type_text(&mut app, "first");
    let first = submit(&mut app).expect("first exchange");

    type_text(&mut app, "second");
    assert!(submit(&mut app).is_none());
    assert_eq!(log(&app), vec![Message::user("first")]);
    assert_eq!(app.ui.input_text(), "second");

    apply_action(
        &mut app,
        AppAction::ExchangeResolved {
            exchange_id: first.exchange_id,
            outcome: Ok("ok".into()),
        },
        CTX,
    );
    let second = submit(&mut app).expect("second exchange after resolution");
    assert_eq!(second.message, "second");
    assert!(second.exchange_id > first.exchange_id);
}

#[test]
fn log_changes_repin_scroll_to_bottom() {
    let mut app = create_test_app();
    for i in 0..15 {
        type_text(&mut app, &format!("m{i}"));
        let exchange = submit(&mut app).unwrap();
        apply_action(
            &mut app,
            AppAction::ExchangeResolved {
                exchange_id: exchange.exchange_id,
                outcome: Ok(format!("r{i}")),
            },
            CTX,
        );
    }

    apply_action(&mut app, AppAction::ScrollUp { lines: 5 }, CTX);
    assert!(!app.ui.scroll.is_following());

    // Typing alone does not move the view.
    type_text(&mut app, "next");
    assert!(!app.ui.scroll.is_following());

    submit(&mut app).unwrap();
    assert!(app.ui.scroll.is_following());
}

#[test]
fn toggle_mode_twice_restores_theme() {
    let mut app = create_test_app();
    let original = app.shell.theme().clone();

    apply_action(&mut app, AppAction::ToggleMode, CTX);
    assert_eq!(app.shell.mode(), DisplayMode::LIGHT);
    assert_eq!(app.shell.theme(), &Theme::for_mode(DisplayMode::LIGHT));

    apply_action(&mut app, AppAction::ToggleMode, CTX);
    assert_eq!(app.shell.theme(), &original);
}

#[test]
fn toggle_mode_leaves_conversation_alone() {
    let mut app = create_test_app();
    type_text(&mut app, "Hola");
    submit(&mut app).unwrap();

    apply_action(&mut app, AppAction::ToggleMode, CTX);
    assert_eq!(log(&app), vec![Message::user("Hola")]);
    assert!(app.conversation.awaiting_response());
}

#[test]
fn quit_sets_exit_flag() {
    let mut app = create_test_app();
    apply_action(&mut app, AppAction::Quit, CTX);
    assert!(app.ui.exit_requested);
}

#[test]
fn dispatcher_envelopes_apply_in_order() {
    let mut app = create_test_app();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let dispatcher = AppActionDispatcher::new(tx);

    dispatcher.dispatch_many(
        [
            AppAction::EditInput {
                text: "Hola".into(),
            },
            AppAction::Submit,
            AppAction::Submit,
        ],
        CTX,
    );

    let mut envelopes = Vec::new();
    while let Ok(envelope) = rx.try_recv() {
        envelopes.push(envelope);
    }
    let commands = apply_actions(&mut app, envelopes);
    assert_eq!(commands.len(), 1);
    assert_eq!(log(&app), vec![Message::user("Hola")]);
}
