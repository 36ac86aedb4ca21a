use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::debug;

use super::App;
use crate::core::exchange::{ExchangeOutcome, ExchangeParams};
use crate::ui::layout::ChatLayout;
use crate::ui::renderer::build_log_lines;

pub enum AppAction {
    /// The input field now holds `text`.
    EditInput {
        text: String,
    },
    Submit,
    ExchangeResolved {
        exchange_id: u64,
        outcome: ExchangeOutcome,
    },
    ToggleMode,
    ScrollUp {
        lines: u16,
    },
    ScrollDown {
        lines: u16,
    },
    Quit,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AppActionContext {
    pub term_width: u16,
    pub term_height: u16,
}

pub struct AppActionEnvelope {
    pub action: AppAction,
    pub context: AppActionContext,
}

#[derive(Clone)]
pub struct AppActionDispatcher {
    tx: mpsc::UnboundedSender<AppActionEnvelope>,
}

impl AppActionDispatcher {
    pub fn new(tx: mpsc::UnboundedSender<AppActionEnvelope>) -> Self {
        Self { tx }
    }

    pub fn dispatch(&self, action: AppAction, ctx: AppActionContext) {
        self.dispatch_many([action], ctx);
    }

    pub fn dispatch_many<I>(&self, actions: I, ctx: AppActionContext)
    where
        I: IntoIterator<Item = AppAction>,
    {
        for action in actions.into_iter() {
            let _ = self.tx.send(AppActionEnvelope {
                action,
                context: ctx,
            });
        }
    }
}

/// Side effects requested by a transition, carried out by the event loop.
pub enum AppCommand {
    SpawnExchange(ExchangeParams),
}

pub fn apply_actions(
    app: &mut App,
    envelopes: impl IntoIterator<Item = AppActionEnvelope>,
) -> Vec<AppCommand> {
    let mut commands = Vec::new();
    for envelope in envelopes {
        if let Some(cmd) = apply_action(app, envelope.action, envelope.context) {
            commands.push(cmd);
        }
    }
    commands
}

pub fn apply_action(app: &mut App, action: AppAction, ctx: AppActionContext) -> Option<AppCommand> {
    let revision_before = app.conversation.revision();

    let command = match action {
        AppAction::EditInput { text } => {
            app.conversation.edit_input(text);
            None
        }
        AppAction::Submit => submit(app),
        AppAction::ExchangeResolved {
            exchange_id,
            outcome,
        } => {
            app.conversation.resolve(exchange_id, outcome);
            None
        }
        AppAction::ToggleMode => {
            app.toggle_mode();
            None
        }
        AppAction::ScrollUp { lines } => {
            let (total, viewport) = log_metrics(app, ctx);
            app.ui.scroll.scroll_up(lines, total, viewport);
            None
        }
        AppAction::ScrollDown { lines } => {
            let (total, viewport) = log_metrics(app, ctx);
            app.ui.scroll.scroll_down(lines, total, viewport);
            None
        }
        AppAction::Quit => {
            app.ui.exit_requested = true;
            None
        }
    };

    if app.conversation.revision() != revision_before {
        app.ui.scroll.follow_bottom();
    }

    command
}

fn submit(app: &mut App) -> Option<AppCommand> {
    match app.conversation.submit() {
        Ok(submission) => {
            app.ui.clear_input(app.shell.theme());
            Some(AppCommand::SpawnExchange(ExchangeParams {
                client: app.session.client.clone(),
                webhook_url: app.session.webhook_url.clone(),
                message: submission.text,
                exchange_id: submission.exchange_id,
            }))
        }
        Err(reason) => {
            debug!(?reason, "submit ignored");
            None
        }
    }
}

fn log_metrics(app: &App, ctx: AppActionContext) -> (usize, u16) {
    let layout = ChatLayout::new(Rect::new(0, 0, ctx.term_width, ctx.term_height));
    let total = build_log_lines(&app.conversation, app.shell.theme(), layout.log.width).len();
    (total, layout.log.height)
}
