use std::future::Future;
use std::io;

use anyhow::{anyhow, Result};
use crossterm::event::{Event, KeyEventKind};
use futures_util::{Stream, StreamExt};
use ratatui::backend::Backend as TerminalBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::core::game::{Context, Flow, Game};

/// Turns a game request into its response, off the render loop
pub trait Backend<Req>: Clone + Send + Sync + 'static {
    type Response: Send + 'static;

    fn handle(&self, request: Req) -> impl Future<Output = Self::Response> + Send;
}

pub struct Engine<G, B> {
    game: G,
    backend: B,
}

impl<G, B> Engine<G, B>
where
    G: Game,
    B: Backend<G::Request, Response = G::Response>,
{
    pub fn new(game: G, backend: B) -> Self {
        Self { game, backend }
    }

    /// Run until the game asks to quit or the event stream ends.
    /// Returns the game so its final state can be inspected.
    pub async fn run<T, E>(mut self, terminal: &mut Terminal<T>, mut events: E) -> Result<G>
    where
        T: TerminalBackend,
        E: Stream<Item = io::Result<Event>> + Unpin,
    {
        // outgoing requests from the game + responses coming back from spawned tasks
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<G::Request>();
        let (response_tx, mut response_rx) = mpsc::unbounded_channel::<G::Response>();
        let ctx = Context::new(request_tx);

        self.game.start(&ctx);

        loop {
            terminal
                .draw(|f| self.game.render(f))
                .map_err(|e| anyhow!("failed to draw frame: {e}"))?;

            tokio::select! {
                // 1. SEND: the game queued a request
                Some(request) = request_rx.recv() => {
                    let backend = self.backend.clone();
                    let response_tx = response_tx.clone();
                    tokio::spawn(async move {
                        let response = backend.handle(request).await;
                        // Engine gone means nobody cares about the answer
                        let _ = response_tx.send(response);
                    });
                }

                // 2. RECEIVE: a request finished
                Some(response) = response_rx.recv() => {
                    self.game.handle_response(response, &ctx);
                }

                // 3. INPUT
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if self.game.handle_input(key, &ctx) == Flow::Quit {
                            info!("quit requested");
                            break;
                        }
                    }
                    Some(Ok(other)) => debug!(?other, "ignoring terminal event"),
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        info!("input stream closed");
                        break;
                    }
                },
            }
        }

        Ok(self.game)
    }
}
