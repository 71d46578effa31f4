use crossbeam_channel::{unbounded, Receiver, Sender};
use nalgebra::Vector3;

/// Events a plane emits for external consumers (HUD, camera, audio,
/// effects). Delivered over crossbeam channels so consumers can live on
/// other threads.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaneEvent {
    /// The aircraft was destroyed at the given world position. Dependent
    /// visual components should deactivate.
    Destroyed { position: Vector3<f64> },
}

/// Fan-out of [`PlaneEvent`]s to any number of subscribers.
#[derive(Debug, Default)]
pub(crate) struct EventBroadcast {
    senders: Vec<Sender<PlaneEvent>>,
}

impl EventBroadcast {
    /// Registers a new subscriber and returns its receiving end.
    pub fn subscribe(&mut self) -> Receiver<PlaneEvent> {
        let (sender, receiver) = unbounded();
        self.senders.push(sender);
        receiver
    }

    /// Sends `event` to every subscriber. Disconnected receivers are
    /// silently skipped.
    pub fn send(&self, event: PlaneEvent) {
        for sender in &self.senders {
            let _ = sender.send(event.clone());
        }
    }
}
