//! Core game interface driven by the engine

use crossterm::event::KeyEvent;
use tokio::sync::mpsc::UnboundedSender;

/// What the engine should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Handle through which a game asks the engine to run requests
pub struct Context<R> {
    pub(crate) tx: UnboundedSender<R>,
}

impl<R> Context<R> {
    pub fn new(tx: UnboundedSender<R>) -> Self {
        Self { tx }
    }

    /// Queue a request; its response comes back through `Game::handle_response`
    pub fn send_request(&self, request: R) {
        // The receiver only goes away when the engine is shutting down
        let _ = self.tx.send(request);
    }
}

/// Main game trait. The engine owns the loop; the game owns every bit of state.
pub trait Game {
    /// Outgoing request handed to the engine's backend
    type Request: Send + 'static;

    /// Reply the backend produces for a request
    type Response: Send + 'static;

    /// Called once before the first frame
    fn start(&mut self, ctx: &Context<Self::Request>);

    fn handle_input(&mut self, key: KeyEvent, ctx: &Context<Self::Request>) -> Flow;

    fn handle_response(&mut self, response: Self::Response, ctx: &Context<Self::Request>);

    fn render(&self, frame: &mut ratatui::Frame);
}
