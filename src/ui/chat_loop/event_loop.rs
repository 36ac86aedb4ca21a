//! Event polling, dispatching, and UI rendering loop.
//!
//! Terminal input is read on its own task and forwarded as [`UiEvent`]s.
//! Each turn of the loop turns pending input into [`AppAction`]s, feeds
//! finished exchanges back in through the action queue, spawns whatever
//! exchange a submit asked for, and redraws when something changed.

use std::{error::Error, time::Duration};

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::debug;

use crate::core::app::{
    apply_action, apply_actions, App, AppAction, AppActionContext, AppActionDispatcher,
    AppActionEnvelope, AppCommand,
};
use crate::core::exchange::{ExchangeOutcome, ExchangeService};
use crate::ui::layout::ChatLayout;
use crate::ui::renderer::ui;

use super::keybindings::{resolve_mouse, Binding, KeyBindings};
use super::lifecycle::ChatTerminal;

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        continue;
                    }
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

fn binding_to_action(binding: Binding) -> AppAction {
    match binding {
        Binding::Submit => AppAction::Submit,
        Binding::ToggleMode => AppAction::ToggleMode,
        Binding::ScrollUp(lines) => AppAction::ScrollUp { lines },
        Binding::ScrollDown(lines) => AppAction::ScrollDown { lines },
        Binding::Quit => AppAction::Quit,
    }
}

/// Maps one terminal event to actions. Editing keys are applied to the input
/// field right away and reported as the field's new contents.
fn actions_for_event(
    app: &mut App,
    bindings: &KeyBindings,
    event: Event,
    ctx: AppActionContext,
) -> Vec<AppAction> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match bindings.resolve_key(&key) {
            Some(binding) => vec![binding_to_action(binding)],
            None => {
                let text = app.ui.apply_textarea_edit(|ta| {
                    ta.input(key);
                });
                vec![AppAction::EditInput { text }]
            }
        },
        Event::Paste(pasted) => {
            let text = app.ui.apply_textarea_edit(|ta| {
                ta.insert_str(pasted);
            });
            vec![AppAction::EditInput { text }]
        }
        Event::Mouse(mouse) => {
            let layout = ChatLayout::new(Rect::new(0, 0, ctx.term_width, ctx.term_height));
            resolve_mouse(&mouse, &layout)
                .map(binding_to_action)
                .into_iter()
                .collect()
        }
        _ => Vec::new(),
    }
}

fn run_command(command: AppCommand, exchange_service: &ExchangeService) {
    match command {
        AppCommand::SpawnExchange(params) => exchange_service.spawn_exchange(params),
    }
}

/// Applies input events in arrival order. Returns whether any arrived.
fn process_ui_events(
    app: &mut App,
    bindings: &KeyBindings,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    exchange_service: &ExchangeService,
    ctx: AppActionContext,
) -> bool {
    let mut processed = false;
    while let Ok(UiEvent::Crossterm(event)) = event_rx.try_recv() {
        processed = true;
        for action in actions_for_event(app, bindings, event, ctx) {
            if let Some(command) = apply_action(app, action, ctx) {
                run_command(command, exchange_service);
            }
        }
        if app.ui.exit_requested {
            break;
        }
    }
    processed
}

fn process_exchange_outcomes(
    dispatcher: &AppActionDispatcher,
    exchange_rx: &mut mpsc::UnboundedReceiver<(ExchangeOutcome, u64)>,
    ctx: AppActionContext,
) -> bool {
    let mut received_any = false;
    while let Ok((outcome, exchange_id)) = exchange_rx.try_recv() {
        received_any = true;
        debug!(exchange_id, ok = outcome.is_ok(), "exchange finished");
        dispatcher.dispatch(
            AppAction::ExchangeResolved {
                exchange_id,
                outcome,
            },
            ctx,
        );
    }
    received_any
}

fn drain_action_queue(
    app: &mut App,
    exchange_service: &ExchangeService,
    action_rx: &mut mpsc::UnboundedReceiver<AppActionEnvelope>,
) -> bool {
    let mut pending = Vec::new();
    while let Ok(envelope) = action_rx.try_recv() {
        pending.push(envelope);
    }
    if pending.is_empty() {
        return false;
    }

    for command in apply_actions(app, pending) {
        run_command(command, exchange_service);
    }
    true
}

pub async fn run_event_loop(
    terminal: &mut ChatTerminal,
    mut app: App,
) -> Result<(), Box<dyn Error>> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<AppActionEnvelope>();
    let dispatcher = AppActionDispatcher::new(action_tx);
    let (exchange_service, mut exchange_rx) = ExchangeService::new();

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let event_reader_handle = spawn_event_reader(event_tx);

    let bindings = KeyBindings::default();
    let mut request_redraw = true;

    let result = loop {
        if app.ui.exit_requested {
            break Ok(());
        }

        if request_redraw {
            terminal.draw(|f| ui(f, &app))?;
            request_redraw = false;
        }

        let size = terminal.size()?;
        let ctx = AppActionContext {
            term_width: size.width,
            term_height: size.height,
        };

        let events_processed =
            process_ui_events(&mut app, &bindings, &mut event_rx, &exchange_service, ctx);
        let received_any = process_exchange_outcomes(&dispatcher, &mut exchange_rx, ctx);
        let actions_applied = drain_action_queue(&mut app, &exchange_service, &mut action_rx);

        if events_processed || received_any || actions_applied {
            request_redraw = true;
        } else {
            tokio::time::sleep(Duration::from_millis(16)).await;
        }
    };

    event_reader_handle.abort();
    result
}
