//! Render loop tying the display backend, shell state and rasterizer
//!
//! One control thread owns everything: it waits on the backend, feeds
//! events through [`update`](crate::handler::update), drains messages from
//! other tasks, redraws the whole surface and presents it. The quit flag
//! is checked only at the top of the loop.

use lcars_core::prelude::*;
use lcars_render::{draw_frame, SkiaCanvas, Typeface};
use tokio::sync::mpsc;

use crate::backend::DisplayBackend;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::ShellState;

/// A running shell bound to one display backend
pub struct Shell<B: DisplayBackend> {
    backend: B,
    canvas: SkiaCanvas,
    state: ShellState,
    msg_rx: mpsc::Receiver<Message>,
}

impl<B: DisplayBackend> Shell<B> {
    /// Allocate the drawing surface for the state's current size.
    pub fn new(backend: B, state: ShellState, msg_rx: mpsc::Receiver<Message>) -> Result<Self> {
        let canvas = SkiaCanvas::new(state.width.unsigned_abs(), state.height.unsigned_abs())?;
        debug!(
            "Shell created on {} backend, surface {}x{}",
            backend.name(),
            canvas.width(),
            canvas.height()
        );
        Ok(Self {
            backend,
            canvas,
            state,
            msg_rx,
        })
    }

    /// Select the label font; `None` keeps the built-in bitmap font.
    pub fn set_typeface(&mut self, typeface: Option<Typeface>) {
        self.canvas.set_typeface(typeface);
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn canvas(&self) -> &SkiaCanvas {
        &self.canvas
    }

    /// Run until the state is quitting. Fatal backend or renderer errors
    /// end the loop; recoverable ones are logged and the next frame drawn.
    pub fn run(&mut self) -> Result<()> {
        info!("Render loop started on {} backend", self.backend.name());

        while !self.state.should_quit() {
            let events = self.backend.dispatch()?;
            for event in events {
                self.process_message(event.into())?;
            }

            while let Ok(msg) = self.msg_rx.try_recv() {
                self.process_message(msg)?;
            }

            if let Err(e) = self.render_and_present() {
                if e.is_fatal() {
                    return Err(e);
                }
                warn!("Frame {} failed: {}", self.state.frames + 1, e);
            }
        }

        info!("Render loop stopped after {} frames", self.state.frames);
        Ok(())
    }

    /// Process a message through the update function, following up on
    /// chained messages and actions.
    pub fn process_message(&mut self, message: Message) -> Result<()> {
        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = handler::update(&mut self.state, m);
            if let Some(action) = result.action {
                self.handle_action(action)?;
            }
            msg = result.message;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: UpdateAction) -> Result<()> {
        match &action {
            UpdateAction::Pong { serial } => self.backend.pong(*serial),
            UpdateAction::Resize { width, height } => self.canvas.resize(*width, *height)?,
            UpdateAction::ModeChanged { .. } | UpdateAction::ButtonActivated { .. } => {}
        }
        self.backend.report(&action);
        Ok(())
    }

    /// Redraw the whole surface and hand it to the backend
    pub fn render_and_present(&mut self) -> Result<()> {
        draw_frame(&mut self.canvas, &self.state.interface, &self.state.theme);
        self.backend.present(&self.canvas)?;
        self.state.frames += 1;
        Ok(())
    }

    /// Stop the loop and return the final state
    pub fn into_state(self) -> ShellState {
        self.state
    }
}
